//! 管理员后台路由
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/admin/profile | GET | 管理员档案 |
//! | /api/admin/profile | PUT | 按字段合并档案 |
//! | /api/admin/preferences | PUT | 合并后台偏好 |
//! | /api/admin/activity | GET | 活动日志 (新→旧) |
//! | /api/admin/activity | DELETE | 清空活动日志 |

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

/// Admin router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/admin", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route(
            "/profile",
            get(handler::get_profile).put(handler::update_profile),
        )
        .route("/preferences", put(handler::update_preferences))
        .route(
            "/activity",
            get(handler::list_activities).delete(handler::clear_activities),
        )
}
