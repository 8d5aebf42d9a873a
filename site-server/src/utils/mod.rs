//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] - 应用错误枚举
//! - [`AppResponse`] - API 响应结构
//! - [`AppResult`] - Handler 返回类型
//! - 日志初始化

pub mod error;
pub mod logger;

pub use error::{AppError, AppResult};

/// API 响应结构
///
/// 错误响应统一为 `{"success": false, "error": "..."}`。
/// 成功响应大多是裸 JSON（与前端既有取数路径兼容），
/// 少数命令接口用 [`AppResponse::success`] 包装。
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> AppResponse<T> {
    /// 创建成功响应
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// 创建错误响应
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}
