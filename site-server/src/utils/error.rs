//! 统一错误处理
//!
//! 提供应用级错误类型，经 [`IntoResponse`] 统一序列化为
//! `{"success": false, "error": "..."}` 响应体。
//!
//! # 状态码映射
//!
//! | 分类 | 状态码 | 示例 |
//! |------|--------|------|
//! | 认证错误 | 401 | 用户名或密码错误 |
//! | 业务逻辑错误 | 400 / 404 | 字段缺失、菜品不存在 |
//! | 系统错误 | 500 | 存储错误、内部错误 |
//!
//! # 使用示例
//!
//! ```ignore
//! // 返回错误
//! Err(AppError::not_found("Meal not found"))
//!
//! // 对应响应体
//! // {"success": false, "error": "Meal not found"}
//! ```

use axum::{
    Json,
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::storage::StorageError;
use crate::utils::AppResponse;

/// 应用错误枚举
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== 认证错误 (4xx) ==========
    #[error("{0}")]
    /// 未认证 (401)
    Unauthorized(String),

    // ========== 业务逻辑错误 (4xx) ==========
    #[error("{0}")]
    /// 资源不存在 (404)
    NotFound(String),

    #[error("{0}")]
    /// 验证失败 (400)
    Validation(String),

    // ========== 系统错误 (5xx) ==========
    #[error("Storage error: {0}")]
    /// 存储错误 (500)，响应体只暴露统一消息
    Storage(#[from] StorageError),

    #[error("{0}")]
    /// 内部错误 (500)，消息本身已是对外文案
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // Authentication errors (401)
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.as_str()),

            // Not found (404)
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.as_str()),

            // Validation (400)
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.as_str()),

            // Storage errors (500) - 细节进日志，不上响应体
            AppError::Storage(err) => {
                error!(target: "storage", error = %err, "Storage error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, "Storage error")
            }

            // Internal errors (500)
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, msg.as_str())
            }
        };

        let body = Json(AppResponse::<()>::error(message));
        (status, body).into_response()
    }
}

impl From<MultipartError> for AppError {
    fn from(e: MultipartError) -> Self {
        AppError::Validation(format!("Multipart error: {}", e))
    }
}

/// Handler 统一返回类型
pub type AppResult<T> = Result<T, AppError>;

// ========== Helper Constructors ==========

impl AppError {
    /// Create an invalid credentials error with unified message
    /// Used to prevent username enumeration during login
    pub fn invalid_credentials() -> Self {
        Self::Unauthorized("Invalid username or password".to_string())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
