//! 核心模块 - 配置、状态与生命周期
//!
//! - [`Config`] - 环境变量配置
//! - [`ServerState`] - 共享服务状态
//! - [`Server`] - HTTP 服务器
//! - [`ServerError`] - 启动阶段错误

pub mod config;
pub mod error;
pub mod server;
pub mod state;

pub use config::Config;
pub use error::{Result, ServerError};
pub use server::Server;
pub use state::ServerState;
