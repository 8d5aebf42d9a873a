//! 站点设置路由
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/settings | GET | 完整设置文档 |
//! | /api/settings/logo | PUT | 合并 logo 分区 |
//! | /api/settings/footer | PUT | 合并页脚分区 |
//! | /api/settings/home-page | PUT | 合并首页分区 |
//! | /api/settings/about-page | PUT | 合并关于页分区 |
//! | /api/settings/reset | POST | 恢复默认文档 |

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

/// Settings router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/settings", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::get))
        .route("/logo", put(handler::update_logo))
        .route("/footer", put(handler::update_footer))
        .route("/home-page", put(handler::update_home_page))
        .route("/about-page", put(handler::update_about_page))
        .route("/reset", post(handler::reset))
}
