use axum::{
    extract::{Path, Query},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use image::ImageOutputFormat;
use serde::Deserialize;
use std::io::{BufWriter, Cursor};

use crate::decode::decode;
use crate::render::render;

/// Query parameters accepted alongside the path. `text` is read for
/// interface compatibility but has no rendering effect.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderQuery {
    pub text: Option<String>,
}

/// Builds the router: the wildcard route serves images, the root route
/// exists so `/` gets the same 400 as any other bad path.
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(handle_root))
        .route("/*path", get(handle))
}

#[axum_macros::debug_handler]
async fn handle(
    Path(path): Path<String>,
    Query(query): Query<RenderQuery>,
) -> Result<Response, (StatusCode, String)> {
    render_response(&path, query)
}

#[axum_macros::debug_handler]
async fn handle_root(Query(query): Query<RenderQuery>) -> Result<Response, (StatusCode, String)> {
    render_response("", query)
}

fn render_response(path: &str, query: RenderQuery) -> Result<Response, (StatusCode, String)> {
    let spec = decode(path)
        .map_err(|e| {
            tracing::debug!(%path, error = %e, "rejecting request");
            (StatusCode::BAD_REQUEST, "Bad Request".to_string())
        })?
        .with_text(query.text.unwrap_or_default());

    let image = render(&spec);

    let mut buffer = BufWriter::new(Cursor::new(Vec::new()));
    image
        .write_to(&mut buffer, ImageOutputFormat::Png)
        .map_err(|_| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error encoding image".to_string(),
            )
        })?;
    let bytes: Vec<u8> = buffer
        .into_inner()
        .map_err(|_| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error encoding image".to_string(),
            )
        })?
        .into_inner();

    Ok(([(header::CONTENT_TYPE, "image/png")], bytes).into_response())
}
