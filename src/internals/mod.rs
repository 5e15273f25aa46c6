mod boundary_generator;
pub use self::boundary_generator::*;

mod form_pairs;
pub use self::form_pairs::*;

mod multipart_writer;
pub use self::multipart_writer::*;
