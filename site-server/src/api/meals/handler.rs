//! Meal Catalog API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::meal::{Meal, MealCategory, MealCreate, MealUpdate};
use tracing::error;

use crate::core::ServerState;
use crate::storage::StorageError;
use crate::utils::{AppError, AppResult};

/// 目录读取失败统一走 500，细节进日志
fn load_failure(err: StorageError) -> AppError {
    error!("Failed to load meals data: {err}");
    AppError::internal("Failed to load meals data")
}

/// GET /api/meals - 获取所有菜品
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Meal>>> {
    let meals = state.meals.find_all().map_err(load_failure)?;
    Ok(Json(meals))
}

/// GET /api/meals/featured - 获取推荐菜品
pub async fn list_featured(State(state): State<ServerState>) -> AppResult<Json<Vec<Meal>>> {
    let meals = state.meals.find_featured().map_err(load_failure)?;
    Ok(Json(meals))
}

/// GET /api/meals/category/{category} - 按分类获取菜品
pub async fn list_by_category(
    State(state): State<ServerState>,
    Path(category): Path<String>,
) -> AppResult<Json<Vec<Meal>>> {
    if category == "all" {
        let meals = state.meals.find_all().map_err(load_failure)?;
        return Ok(Json(meals));
    }

    match category.parse::<MealCategory>() {
        Ok(category) => {
            let meals = state
                .meals
                .find_by_category(category)
                .map_err(load_failure)?;
            Ok(Json(meals))
        }
        // 未知分类返回空列表而不是 400
        Err(_) => Ok(Json(Vec::new())),
    }
}

/// GET /api/meals/{id} - 获取单个菜品
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Meal>> {
    let meal = state
        .meals
        .find_by_id(id)
        .map_err(load_failure)?
        .ok_or_else(|| AppError::not_found("Meal not found"))?;
    Ok(Json(meal))
}

/// POST /api/meals - 创建菜品
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MealCreate>,
) -> AppResult<Json<Meal>> {
    let meal = state.meals.create(payload)?;
    log_catalog_activity(&state, format!("Meal \"{}\" created", meal.name));
    Ok(Json(meal))
}

/// PUT /api/meals/{id} - 更新菜品
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<MealUpdate>,
) -> AppResult<Json<Meal>> {
    let meal = state
        .meals
        .update(id, payload)?
        .ok_or_else(|| AppError::not_found("Meal not found"))?;
    log_catalog_activity(&state, format!("Meal \"{}\" updated", meal.name));
    Ok(Json(meal))
}

/// DELETE /api/meals/{id} - 删除菜品
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    if !state.meals.delete(id)? {
        return Err(AppError::not_found("Meal not found"));
    }
    log_catalog_activity(&state, format!("Meal {} deleted", id));
    Ok(Json(true))
}

/// 目录写操作记入活动日志；日志失败不影响本次修改
fn log_catalog_activity(state: &ServerState, details: String) {
    if let Err(err) = state.admin.log_activity("Website", &details) {
        error!("Failed to log catalog activity: {err}");
    }
}
