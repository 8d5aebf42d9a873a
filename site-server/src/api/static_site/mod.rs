//! 前端静态文件服务
//!
//! 未匹配任何 API 路由的 GET 请求回退到前端构建产物：
//! 存在的文件原样返回，其余路径返回 index.html 交给前端路由接管。

use axum::{
    extract::State,
    http::{Method, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};

use crate::core::ServerState;

/// SPA 回退 handler：静态文件优先，找不到就回 index.html
pub async fn spa_fallback(
    State(state): State<ServerState>,
    method: Method,
    uri: Uri,
) -> Response {
    // 只有 GET 走静态文件，其余方法保持 404
    if method != Method::GET {
        return StatusCode::NOT_FOUND.into_response();
    }

    let path = uri.path().trim_start_matches('/');

    // Security check: prevent path traversal
    if path.contains("..") {
        return (StatusCode::BAD_REQUEST, "Invalid path").into_response();
    }

    if !path.is_empty() {
        let candidate = state.static_dir().join(path);
        if let Ok(content) = tokio::fs::read(&candidate).await {
            let content_type = mime_guess::from_path(&candidate)
                .first_or_octet_stream()
                .to_string();
            return ([(header::CONTENT_TYPE, content_type)], content).into_response();
        }
    }

    serve_index(&state).await
}

/// index.html 兜底，路径交给前端路由渲染
async fn serve_index(state: &ServerState) -> Response {
    let index_path = state.static_dir().join("index.html");
    match tokio::fs::read(&index_path).await {
        Ok(content) => (
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            content,
        )
            .into_response(),
        Err(_) => (StatusCode::NOT_FOUND, "Frontend build not found").into_response(),
    }
}
