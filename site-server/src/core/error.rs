use thiserror::Error;

use crate::storage::StorageError;

/// 启动与生命周期错误
///
/// 请求期的错误走 [`crate::utils::AppError`]；这里只覆盖启动阶段：
/// 目录创建、数据库打开、端口绑定。
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("存储初始化失败: {0}")]
    Storage(#[from] StorageError),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("内部服务器错误: {0}")]
    Internal(#[from] anyhow::Error),
}

/// 生命周期的 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
