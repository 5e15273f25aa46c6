//! The test server fixture, shared by the integration tests.
//!
//! Requests are sent straight into the router, with no sockets involved.
#![allow(dead_code)]

use ::anyhow::Result;
use ::axum::Json;
use ::axum::Router;
use ::axum::body::Body;
use ::axum::extract::Form;
use ::axum::extract::Multipart;
use ::axum::extract::Path;
use ::axum::http::Request;
use ::axum::http::StatusCode;
use ::axum::routing::post;
use ::axum_extra::extract::Query;
use ::http_body_util::BodyExt;
use ::serde::Deserialize;
use ::serde::Serialize;
use ::serde_json::Value;
use ::serde_json::json;
use ::std::path::PathBuf;
use ::tower::ServiceExt;

#[derive(Debug, Deserialize)]
struct FormParams {
    key1: String,
    key2: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Dto {
    pub name: String,
    pub age: u32,
}

#[derive(Debug, Deserialize)]
struct QueryMapParams {
    #[serde(default)]
    filter: Vec<String>,
}

async fn route_post_form(Form(params): Form<FormParams>) -> StatusCode {
    if params.key1 == params.key2 {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    }
}

async fn route_post_upload(
    Path(id): Path<u32>,
    mut multipart: Multipart,
) -> Result<String, StatusCode> {
    let mut is_public = None;
    let mut file_size = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| StatusCode::BAD_REQUEST)?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "public" => {
                let text = field.text().await.map_err(|_| StatusCode::BAD_REQUEST)?;
                is_public = Some(text == "true");
            }
            "file" => {
                let bytes = field.bytes().await.map_err(|_| StatusCode::BAD_REQUEST)?;
                file_size = Some(bytes.len());
            }
            _ => {}
        }
    }

    if id == 0 || is_public.is_none() {
        return Err(StatusCode::BAD_REQUEST);
    }

    file_size
        .map(|size| size.to_string())
        .ok_or(StatusCode::BAD_REQUEST)
}

async fn route_post_json(Json(dto): Json<Dto>) -> Result<&'static str, StatusCode> {
    if dto.name.is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }

    Ok("ok")
}

async fn route_post_query_map(Query(params): Query<QueryMapParams>) -> String {
    params.filter.len().to_string()
}

/// Echoes back every part received, so tests can see how a multipart parser reads the body.
async fn route_post_echo_parts(mut multipart: Multipart) -> Result<Json<Value>, StatusCode> {
    let mut parts = vec![];

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| StatusCode::BAD_REQUEST)?
    {
        let name = field.name().map(ToString::to_string);
        let file_name = field.file_name().map(ToString::to_string);
        let content_type = field.content_type().map(ToString::to_string);
        let bytes = field.bytes().await.map_err(|_| StatusCode::BAD_REQUEST)?;

        parts.push(json!({
            "name": name,
            "file_name": file_name,
            "content_type": content_type,
            "bytes": bytes.to_vec(),
        }));
    }

    Ok(Json(Value::Array(parts)))
}

pub fn new_test_router() -> Router {
    Router::new()
        .route("/form", post(route_post_form))
        .route("/upload/{id}", post(route_post_upload))
        .route("/json", post(route_post_json))
        .route("/query_map", post(route_post_query_map))
        .route("/echo-parts", post(route_post_echo_parts))
}

/// Sends the request to a new test router, returning the status and body text.
pub async fn send(request: Request<Body>) -> Result<(StatusCode, String)> {
    let response = new_test_router().oneshot(request).await?;
    let status = response.status();
    let bytes = response.into_body().collect().await?.to_bytes();

    Ok((status, String::from_utf8_lossy(&bytes).to_string()))
}

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}
