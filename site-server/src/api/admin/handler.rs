//! Admin API Handlers

use axum::{Json, extract::State};

use shared::models::admin::{
    AdminActivity, AdminPreferencesUpdate, AdminProfile, AdminProfileUpdate,
};

use crate::core::ServerState;
use crate::utils::{AppResponse, AppResult};

/// GET /api/admin/profile - 获取管理员档案
pub async fn get_profile(State(state): State<ServerState>) -> Json<AdminProfile> {
    Json(state.admin.profile())
}

/// PUT /api/admin/profile - 按字段合并档案，返回更新后的档案
pub async fn update_profile(
    State(state): State<ServerState>,
    Json(payload): Json<AdminProfileUpdate>,
) -> AppResult<Json<AdminProfile>> {
    let profile = state.admin.update_profile(payload)?;
    Ok(Json(profile))
}

/// PUT /api/admin/preferences - 合并后台偏好，返回更新后的档案
pub async fn update_preferences(
    State(state): State<ServerState>,
    Json(payload): Json<AdminPreferencesUpdate>,
) -> AppResult<Json<AdminProfile>> {
    let profile = state.admin.update_preferences(payload)?;
    Ok(Json(profile))
}

/// GET /api/admin/activity - 活动日志，新条目在前
pub async fn list_activities(State(state): State<ServerState>) -> Json<Vec<AdminActivity>> {
    Json(state.admin.activities())
}

/// DELETE /api/admin/activity - 清空活动日志
pub async fn clear_activities(
    State(state): State<ServerState>,
) -> AppResult<Json<AppResponse<()>>> {
    state.admin.clear_activities()?;
    Ok(Json(AppResponse {
        success: true,
        data: None,
        error: None,
    }))
}
