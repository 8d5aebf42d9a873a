//! Image Upload Handlers
//!
//! multipart 上传落盘到 uploads 目录并以 uuid 文件名对外；
//! base64 直传不落盘，校验后原样回传 data URI，
//! 适配无可写磁盘的托管环境。

use std::path::PathBuf;

use axum::Json;
use axum::extract::{Multipart, State};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use http::HeaderMap;
use uuid::Uuid;

use shared::client::{Base64UploadRequest, Base64UploadResponse, UploadResponse};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// Maximum file size (5MB)
const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

/// Supported image formats
const SUPPORTED_FORMATS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];

/// Validate image file
fn validate_image(data: &[u8], ext: &str) -> Result<(), AppError> {
    // Check file size
    if data.len() > MAX_FILE_SIZE {
        return Err(AppError::validation(format!(
            "File too large. Maximum size is {}MB",
            MAX_FILE_SIZE / 1024 / 1024
        )));
    }

    // Check file extension
    if !SUPPORTED_FORMATS.contains(&ext) {
        return Err(AppError::validation(format!(
            "Unsupported file format '{}'. Supported: {}",
            ext,
            SUPPORTED_FORMATS.join(", ")
        )));
    }

    // Verify it's actually an image by trying to load it
    if let Err(e) = image::load_from_memory(data) {
        return Err(AppError::validation(format!(
            "Invalid image file ({}): {}",
            ext, e
        )));
    }

    Ok(())
}

/// POST /api/upload - multipart 图片上传
///
/// 识别字段名 `image`，uuid 重命名后存入 uploads 目录
pub async fn upload(
    State(state): State<ServerState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    let mut field_data: Option<Vec<u8>> = None;
    let mut original_filename = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("image") {
            original_filename = field.file_name().map(|s| s.to_string());
            field_data = Some(field.bytes().await?.to_vec());
            break;
        }
    }

    let data = match field_data {
        Some(data) if !data.is_empty() => data,
        _ => return Err(AppError::validation("No file uploaded")),
    };

    // Extract file extension
    let ext = original_filename
        .as_deref()
        .and_then(|name| {
            PathBuf::from(name)
                .extension()
                .and_then(|e| e.to_str().map(str::to_lowercase))
        })
        .ok_or_else(|| AppError::validation("Only image files are allowed"))?;

    validate_image(&data, &ext)?;

    // Save with a fresh uuid name
    let filename = format!("{}.{}", Uuid::new_v4(), ext);
    let disk_path = state.uploads_dir().join(&filename);
    tokio::fs::write(&disk_path, &data).await.map_err(|e| {
        tracing::error!("Failed to save upload {}: {}", filename, e);
        AppError::internal("File upload failed")
    })?;

    tracing::info!(
        filename = %filename,
        size = data.len(),
        "Image uploaded successfully"
    );

    let file_path = format!("/uploads/{}", filename);
    let full_url = format!("http://{}{}", request_host(&state, &headers), file_path);

    Ok(Json(UploadResponse {
        success: true,
        file_path,
        full_url,
    }))
}

/// POST /api/upload/base64 - base64 直传
pub async fn upload_base64(
    Json(req): Json<Base64UploadRequest>,
) -> AppResult<Json<Base64UploadResponse>> {
    if req.image.is_empty() || req.filename.is_empty() || req.content_type.is_empty() {
        return Err(AppError::validation(
            "Missing required fields (image, filename, type)",
        ));
    }

    if !req.content_type.starts_with("image/") {
        return Err(AppError::validation("Only image uploads are supported"));
    }

    // image 可以是裸 base64，也可以是完整 data URI
    let encoded = req
        .image
        .split_once(";base64,")
        .map(|(_, data)| data)
        .unwrap_or(&req.image);

    let decoded = BASE64
        .decode(encoded)
        .map_err(|_| AppError::validation("Invalid base64 image data"))?;

    if decoded.len() > MAX_FILE_SIZE {
        return Err(AppError::validation(format!(
            "File too large. Maximum size is {}MB",
            MAX_FILE_SIZE / 1024 / 1024
        )));
    }

    tracing::info!(
        filename = %req.filename,
        size = decoded.len(),
        "Base64 image accepted"
    );

    Ok(Json(Base64UploadResponse {
        success: true,
        id: Uuid::new_v4().to_string(),
        full_url: format!("data:{};base64,{}", req.content_type, encoded),
    }))
}

/// 上传响应里的完整 URL 以请求 Host 为准，缺失时退回配置值
fn request_host(state: &ServerState, headers: &HeaderMap) -> String {
    headers
        .get(http::header::HOST)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| {
            format!("{}:{}", state.config.server_host, state.config.http_port)
        })
}
