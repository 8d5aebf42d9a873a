//! Site Settings API Handlers
//!
//! 设置存储的所有操作都内部兜底，handler 不会失败：
//! 读路径损坏时返回默认文档，写路径持久化失败时记日志并返回合并结果。

use axum::{Json, extract::State};
use serde_json::Value;

use crate::core::ServerState;

/// GET /api/settings - 获取完整设置文档
pub async fn get(State(state): State<ServerState>) -> Json<Value> {
    Json(state.settings.read())
}

/// PUT /api/settings/logo - 合并 logo 分区，返回完整文档
pub async fn update_logo(
    State(state): State<ServerState>,
    Json(partial): Json<Value>,
) -> Json<Value> {
    Json(state.settings.update_logo(partial))
}

/// PUT /api/settings/footer - 合并页脚分区，返回完整文档
pub async fn update_footer(
    State(state): State<ServerState>,
    Json(partial): Json<Value>,
) -> Json<Value> {
    Json(state.settings.update_footer(partial))
}

/// PUT /api/settings/home-page - 合并首页分区，返回完整文档
pub async fn update_home_page(
    State(state): State<ServerState>,
    Json(partial): Json<Value>,
) -> Json<Value> {
    Json(state.settings.update_home_page(partial))
}

/// PUT /api/settings/about-page - 合并关于页分区，返回完整文档
pub async fn update_about_page(
    State(state): State<ServerState>,
    Json(partial): Json<Value>,
) -> Json<Value> {
    Json(state.settings.update_about_page(partial))
}

/// POST /api/settings/reset - 恢复并返回默认文档
pub async fn reset(State(state): State<ServerState>) -> Json<Value> {
    Json(state.settings.reset())
}
