//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`settings`] - 站点设置接口
//! - [`meals`] - 菜品目录接口
//! - [`auth`] - 管理员认证接口
//! - [`admin`] - 管理员档案与活动日志接口
//! - [`contact`] - 联系表单接口
//! - [`upload`] - 图片上传接口
//! - [`static_site`] - 前端静态文件回退

pub mod admin;
pub mod auth;
pub mod contact;
pub mod health;
pub mod meals;
pub mod settings;
pub mod static_site;
pub mod upload;

use axum::{Router, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;

use crate::core::ServerState;

// Re-export common types for handlers
pub use crate::utils::{AppResponse, AppResult};

/// HTTP 请求日志中间件
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();

    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        // Core APIs
        .merge(health::router())
        .merge(auth::router())
        .merge(upload::router())
        // Site content APIs
        .merge(settings::router())
        .merge(meals::router())
        .merge(admin::router())
        .merge(contact::router())
        // Frontend fallback
        .fallback(static_site::spa_fallback)
}

/// Attach state and tower middleware, producing the final service
pub fn build_service(state: ServerState) -> Router {
    build_app()
        .with_state(state)
        // Tower HTTP 中间件
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        // HTTP 请求日志中间件
        .layer(middleware::from_fn(log_request))
}
