//! 菜品目录路由
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/meals | GET | 所有菜品 |
//! | /api/meals | POST | 新建菜品 |
//! | /api/meals/featured | GET | 推荐菜品 |
//! | /api/meals/category/{category} | GET | 按分类 (`all` 返回全部) |
//! | /api/meals/{id} | GET | 单个菜品 |
//! | /api/meals/{id} | PUT | 更新菜品 |
//! | /api/meals/{id} | DELETE | 删除菜品 |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Meal catalog router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/meals", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/featured", get(handler::list_featured))
        .route("/category/{category}", get(handler::list_by_category))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
