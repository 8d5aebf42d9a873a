//! Client-related types shared between server and frontend
//!
//! Request/response DTOs used in API communication. Response shapes match
//! what the web client already consumes, camelCase throughout.

use serde::{Deserialize, Serialize};

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request
///
/// 字段缺省为空串，让缺字段的请求走统一的 401 而不是 422
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub user: UserInfo,
}

/// User information returned on successful login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
    pub role: String,
}

/// Session status
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub logged_in: bool,
}

// =============================================================================
// Contact API DTOs
// =============================================================================

/// Contact form submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// 可选电话
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub message: String,
}

/// Contact form reply
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

// =============================================================================
// Upload API DTOs
// =============================================================================

/// Multipart upload result
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub success: bool,
    /// 服务端相对路径, 如 `/uploads/{name}`
    pub file_path: String,
    /// 完整可访问 URL
    pub full_url: String,
}

/// Base64 upload request (serverless-style variant)
///
/// 字段缺省为空串，缺字段的检查（和报错文案）留在 handler 里做
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Base64UploadRequest {
    /// base64 编码的图片数据 (可带 `data:` 前缀)
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub filename: String,
    /// MIME 类型, 如 `image/png`
    #[serde(default, rename = "type")]
    pub content_type: String,
}

/// Base64 upload result - 返回 data URI 由客户端直接使用
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Base64UploadResponse {
    pub success: bool,
    pub id: String,
    pub full_url: String,
}
