//! Authentication Handlers
//!
//! Handles admin login, logout, and session queries.
//! 单管理员场景：凭据来自配置，会话是存储里的一个布尔标记。

use axum::{Json, extract::State};

use shared::client::{LoginRequest, LoginResponse, SessionResponse, UserInfo};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// POST /api/auth/login - 后台登录
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let authenticated = state.admin.authenticate(&req.username, &req.password)?;

    // Unified error message to prevent username enumeration
    if !authenticated {
        tracing::warn!(username = %req.username, "Login failed - invalid credentials");
        return Err(AppError::invalid_credentials());
    }

    let profile = state.admin.profile();
    Ok(Json(LoginResponse {
        success: true,
        message: "Authentication successful".to_string(),
        user: UserInfo {
            id: profile.id,
            username: profile.username,
            role: profile.role.as_str().to_string(),
        },
    }))
}

/// POST /api/auth/logout - 登出并清除会话标记
pub async fn logout(State(state): State<ServerState>) -> AppResult<Json<SessionResponse>> {
    state.admin.logout()?;
    Ok(Json(SessionResponse { logged_in: false }))
}

/// GET /api/auth/session - 查询当前会话状态
pub async fn session(State(state): State<ServerState>) -> Json<SessionResponse> {
    Json(SessionResponse {
        logged_in: state.admin.is_logged_in(),
    })
}
