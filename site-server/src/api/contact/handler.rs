//! Contact Form Handler
//!
//! 联系表单不落库：校验后记入服务日志，返回固定的致谢文案。

use axum::Json;
use tracing::info;

use shared::client::{ContactRequest, ContactResponse};

use crate::utils::{AppError, AppResult};

/// POST /api/contact - 提交联系表单
pub async fn submit(Json(req): Json<ContactRequest>) -> AppResult<Json<ContactResponse>> {
    if req.name.trim().is_empty() || req.email.trim().is_empty() || req.message.trim().is_empty() {
        return Err(AppError::validation(
            "Name, email, and message are required",
        ));
    }

    info!(
        target: "contact",
        name = %req.name,
        email = %req.email,
        phone = %req.phone.as_deref().unwrap_or("-"),
        "Contact form submission: {}",
        req.message
    );

    Ok(Json(ContactResponse {
        success: true,
        message: "Thank you for your message. We will get back to you shortly.".to_string(),
    }))
}
