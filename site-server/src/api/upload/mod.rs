//! Upload Routes
//!
//! Provides image upload endpoints and serves previously uploaded files.

mod handler;

use axum::{
    Router,
    body::Bytes,
    extract::{DefaultBodyLimit, Path, State},
    response::IntoResponse,
    routing::{get, post},
};
use http::header;

use crate::core::ServerState;

/// Upload file response
enum UploadFileResponse {
    Ok(Bytes, String),
    NotFound,
    BadRequest(&'static str),
}

impl IntoResponse for UploadFileResponse {
    fn into_response(self) -> axum::response::Response {
        match self {
            UploadFileResponse::Ok(content, content_type) => (
                http::StatusCode::OK,
                [(header::CONTENT_TYPE, content_type)],
                content,
            )
                .into_response(),
            UploadFileResponse::NotFound => {
                (http::StatusCode::NOT_FOUND, "File not found").into_response()
            }
            UploadFileResponse::BadRequest(msg) => {
                (http::StatusCode::BAD_REQUEST, msg).into_response()
            }
        }
    }
}

/// Serve uploaded file handler
async fn serve_uploaded_file(
    State(state): State<ServerState>,
    Path(filename): Path<String>,
) -> UploadFileResponse {
    // Security check: prevent path traversal
    if filename.is_empty()
        || filename.contains("..")
        || filename.contains('/')
        || filename.contains('\\')
    {
        return UploadFileResponse::BadRequest("Invalid filename");
    }

    let file_path = state.uploads_dir().join(&filename);

    match tokio::fs::read(&file_path).await {
        Ok(content) => {
            let content_type = mime_guess::from_path(&filename)
                .first_or_octet_stream()
                .to_string();
            UploadFileResponse::Ok(content.into(), content_type)
        }
        Err(_) => UploadFileResponse::NotFound,
    }
}

/// Build upload router
pub fn router() -> Router<ServerState> {
    Router::new()
        // Upload APIs
        .route("/api/upload", post(handler::upload))
        .route("/api/upload/base64", post(handler::upload_base64))
        // 5MB 图片加上 multipart / base64 编码开销
        .layer(DefaultBodyLimit::max(10 * 1024 * 1024))
        // Serve uploaded files - public access
        .route("/uploads/{filename}", get(serve_uploaded_file))
}
