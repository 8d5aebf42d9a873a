//! HTTP API 集成测试
//!
//! 通过 tower Service 直接调用完整 Router（含中间件），
//! 不经过真实监听端口。每个测试用独立的临时工作目录。

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use site_server::{Config, ServerState, api};

// ========== Test Helpers ==========

fn state_for(dir: &std::path::Path) -> ServerState {
    let mut config = Config::with_overrides(dir.to_string_lossy().to_string(), 0);
    config.admin_username = "admin".to_string();
    config.admin_password = "pepperchicken2023".to_string();
    ServerState::initialize(&config).unwrap()
}

fn test_app() -> (Router, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let app = api::build_service(state_for(dir.path()));
    (app, dir)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn send_bytes(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, bytes) = send_bytes(app, request).await;
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

/// 用 image crate 生成一张最小合法 PNG
fn tiny_png() -> Vec<u8> {
    let pixel = image::RgbImage::from_pixel(1, 1, image::Rgb([200, 30, 30]));
    let mut buf = std::io::Cursor::new(Vec::new());
    image::DynamicImage::ImageRgb8(pixel)
        .write_to(&mut buf, image::ImageFormat::Png)
        .unwrap();
    buf.into_inner()
}

fn multipart_request(uri: &str, field: &str, filename: &str, bytes: &[u8]) -> Request<Body> {
    let boundary = "test-boundary-7MA4YWxkTrZu0gW";
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap()
}

// ========== Health ==========

#[tokio::test]
async fn test_health() {
    let (app, _dir) = test_app();

    let (status, body) = send(&app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "site-server");
}

#[tokio::test]
async fn test_detailed_health_reports_storage() {
    let (app, _dir) = test_app();

    let (status, body) = send(&app, get("/health/detailed")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["checks"]["storage"]["status"], "ok");
}

// ========== Site Settings ==========

#[tokio::test]
async fn test_settings_start_from_defaults() {
    let (app, _dir) = test_app();

    let (status, body) = send(&app, get("/api/settings")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["logo"]["text"], "Pepper Chicken");
    assert_eq!(
        body["footer"]["copyrightText"],
        "© Pepper Chicken Nig Ltd. All rights reserved."
    );
    assert_eq!(body["homePage"]["heroSlideImages"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_settings_section_update_round_trip() {
    let (app, _dir) = test_app();

    let (status, body) = send(
        &app,
        json_request("PUT", "/api/settings/logo", json!({ "text": "Renamed" })),
    )
    .await;

    // 响应就是合并后的完整文档
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["logo"]["text"], "Renamed");
    assert_eq!(body["logo"]["altText"], "Pepper Chicken Restaurant Logo");
    assert_eq!(body["footer"]["phone"], "+234 801 234 5678");

    // 再读仍是合并结果
    let (_, reloaded) = send(&app, get("/api/settings")).await;
    assert_eq!(reloaded["logo"]["text"], "Renamed");
}

#[tokio::test]
async fn test_settings_unknown_keys_preserved() {
    let (app, _dir) = test_app();

    send(
        &app,
        json_request(
            "PUT",
            "/api/settings/home-page",
            json!({ "promoBanner": "50% off jollof" }),
        ),
    )
    .await;

    let (_, body) = send(&app, get("/api/settings")).await;
    assert_eq!(body["homePage"]["promoBanner"], "50% off jollof");
}

#[tokio::test]
async fn test_settings_reset() {
    let (app, _dir) = test_app();
    send(
        &app,
        json_request("PUT", "/api/settings/footer", json!({ "socialLinks": [] })),
    )
    .await;

    let (status, body) = send(&app, empty_request("POST", "/api/settings/reset")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["footer"]["socialLinks"].as_array().unwrap().len(), 3);

    let (_, reloaded) = send(&app, get("/api/settings")).await;
    assert_eq!(reloaded["footer"]["socialLinks"].as_array().unwrap().len(), 3);
}

// ========== Meal Catalog ==========

#[tokio::test]
async fn test_meals_seeded_catalog() {
    let (app, _dir) = test_app();

    let (status, body) = send(&app, get("/api/meals")).await;

    assert_eq!(status, StatusCode::OK);
    let meals = body.as_array().unwrap();
    assert_eq!(meals.len(), 2);
    assert_eq!(meals[0]["name"], "Jollof Rice with Chicken");
    assert_eq!(meals[0]["category"], "main");
}

#[tokio::test]
async fn test_meals_filters() {
    let (app, _dir) = test_app();

    let (_, featured) = send(&app, get("/api/meals/featured")).await;
    assert_eq!(featured.as_array().unwrap().len(), 2);

    let (_, all) = send(&app, get("/api/meals/category/all")).await;
    assert_eq!(all.as_array().unwrap().len(), 2);

    let (_, soup) = send(&app, get("/api/meals/category/soup")).await;
    assert_eq!(soup.as_array().unwrap().len(), 1);
    assert_eq!(soup[0]["name"], "Egusi Soup with Pounded Yam");

    // 未知分类返回空列表
    let (status, unknown) = send(&app, get("/api/meals/category/desserts")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(unknown.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_meals_crud_over_http() {
    let (app, _dir) = test_app();

    // 创建
    let (status, created) = send(
        &app,
        json_request(
            "POST",
            "/api/meals",
            json!({
                "name": "Suya Platter",
                "description": "Spicy grilled beef skewers",
                "price": 3000.0,
                "image": "/uploads/suya.jpg",
                "category": "sides",
                "featured": false
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["id"], 3);

    // 更新部分字段
    let (status, updated) = send(
        &app,
        json_request("PUT", "/api/meals/3", json!({ "price": 3500.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["price"], 3500.0);
    assert_eq!(updated["name"], "Suya Platter");

    // 单条读取
    let (status, fetched) = send(&app, get("/api/meals/3")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["description"], "Spicy grilled beef skewers");

    // 删除
    let (status, deleted) = send(&app, empty_request("DELETE", "/api/meals/3")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, json!(true));

    let (status, body) = send(&app, get("/api/meals/3")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Meal not found");

    // 写操作记入活动日志，最新在前
    let (_, activities) = send(&app, get("/api/admin/activity")).await;
    let activities = activities.as_array().unwrap();
    assert_eq!(activities[0]["action"], "Website");
    assert_eq!(activities[0]["details"], "Meal 3 deleted");
    assert_eq!(activities[2]["details"], "Meal \"Suya Platter\" created");
}

// ========== Contact ==========

#[tokio::test]
async fn test_contact_requires_fields() {
    let (app, _dir) = test_app();

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/contact",
            json!({ "name": "Ada", "email": "ada@example.com" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Name, email, and message are required");
}

#[tokio::test]
async fn test_contact_accepts_valid_submission() {
    let (app, _dir) = test_app();

    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/contact",
            json!({
                "name": "Ada",
                "email": "ada@example.com",
                "phone": "+234 800 000 0000",
                "message": "Do you cater weddings?"
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(
        body["message"],
        "Thank you for your message. We will get back to you shortly."
    );
}

// ========== Auth ==========

#[tokio::test]
async fn test_auth_flow() {
    let (app, _dir) = test_app();

    // 初始未登录
    let (_, session) = send(&app, get("/api/auth/session")).await;
    assert_eq!(session["loggedIn"], false);

    // 错误凭据
    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/auth/login",
            json!({ "username": "admin", "password": "wrong" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid username or password");

    // 正确凭据
    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/auth/login",
            json!({ "username": "admin", "password": "pepperchicken2023" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Authentication successful");
    assert_eq!(body["user"]["id"], 1);
    assert_eq!(body["user"]["role"], "admin");

    let (_, session) = send(&app, get("/api/auth/session")).await;
    assert_eq!(session["loggedIn"], true);

    // 登出
    let (status, body) = send(&app, empty_request("POST", "/api/auth/logout")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["loggedIn"], false);

    let (_, session) = send(&app, get("/api/auth/session")).await;
    assert_eq!(session["loggedIn"], false);

    // 登录登出都留了活动记录
    let (_, activities) = send(&app, get("/api/admin/activity")).await;
    let activities = activities.as_array().unwrap();
    assert_eq!(activities[0]["details"], "Admin logged out");
    assert_eq!(activities[1]["details"], "Admin logged in");
}

// ========== Admin ==========

#[tokio::test]
async fn test_admin_profile_and_preferences() {
    let (app, _dir) = test_app();

    let (_, profile) = send(&app, get("/api/admin/profile")).await;
    assert_eq!(profile["fullName"], "Administrator");
    assert_eq!(profile["preferences"]["autoSave"], true);

    // 档案按字段合并
    let (status, updated) = send(
        &app,
        json_request(
            "PUT",
            "/api/admin/profile",
            json!({ "fullName": "Chef Okafor" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["fullName"], "Chef Okafor");
    assert_eq!(updated["username"], "admin");

    // 偏好合并并记一条 Settings 活动
    let (status, updated) = send(
        &app,
        json_request(
            "PUT",
            "/api/admin/preferences",
            json!({ "darkMode": true }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["preferences"]["darkMode"], true);
    assert_eq!(updated["preferences"]["autoSave"], true);

    let (_, activities) = send(&app, get("/api/admin/activity")).await;
    assert_eq!(activities[0]["details"], "Admin preferences updated");

    // 清空后只剩一条 System 记录
    let (status, body) = send(&app, empty_request("DELETE", "/api/admin/activity")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (_, activities) = send(&app, get("/api/admin/activity")).await;
    let activities = activities.as_array().unwrap();
    assert_eq!(activities.len(), 1);
    assert_eq!(activities[0]["action"], "System");
    assert_eq!(activities[0]["details"], "Activity log cleared");
}

// ========== Upload ==========

#[tokio::test]
async fn test_upload_and_serve_round_trip() {
    let (app, _dir) = test_app();
    let png = tiny_png();

    let (status, body) = send(
        &app,
        multipart_request("/api/upload", "image", "pixel.png", &png),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let file_path = body["filePath"].as_str().unwrap();
    assert!(file_path.starts_with("/uploads/"));
    assert!(file_path.ends_with(".png"));
    assert!(body["fullUrl"].as_str().unwrap().ends_with(file_path));

    // 上传的文件可以按返回路径取回
    let (status, served) = send_bytes(&app, get(file_path)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(served, png);
}

#[tokio::test]
async fn test_upload_rejects_missing_file() {
    let (app, _dir) = test_app();

    // 字段名不是 image
    let (status, body) = send(
        &app,
        multipart_request("/api/upload", "attachment", "pixel.png", &tiny_png()),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No file uploaded");
}

#[tokio::test]
async fn test_upload_rejects_non_image() {
    let (app, _dir) = test_app();

    let (status, body) = send(
        &app,
        multipart_request("/api/upload", "image", "notes.txt", b"hello"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .contains("Unsupported file format")
    );
}

#[tokio::test]
async fn test_base64_upload() {
    let (app, _dir) = test_app();

    // 缺字段
    let (status, body) = send(
        &app,
        json_request("POST", "/api/upload/base64", json!({ "image": "aGk=" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required fields (image, filename, type)");

    // 正常直传
    use base64::Engine as _;
    let encoded = base64::engine::general_purpose::STANDARD.encode(tiny_png());
    let (status, body) = send(
        &app,
        json_request(
            "POST",
            "/api/upload/base64",
            json!({ "image": encoded, "filename": "pixel.png", "type": "image/png" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(!body["id"].as_str().unwrap().is_empty());
    assert!(
        body["fullUrl"]
            .as_str()
            .unwrap()
            .starts_with("data:image/png;base64,")
    );
}

#[tokio::test]
async fn test_uploads_path_traversal_rejected() {
    let (app, _dir) = test_app();

    let (status, _) = send_bytes(&app, get("/uploads/a..b.png")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send_bytes(&app, get("/uploads/missing.png")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ========== Static Site ==========

#[tokio::test]
async fn test_spa_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let static_dir = dir.path().join("dist");
    std::fs::create_dir_all(&static_dir).unwrap();
    std::fs::write(static_dir.join("index.html"), "<html>Pepper Chicken</html>").unwrap();
    std::fs::write(static_dir.join("app.css"), "body{}").unwrap();

    let mut config = Config::with_overrides(
        dir.path().join("data").to_string_lossy().to_string(),
        0,
    );
    config.static_dir = static_dir.to_string_lossy().to_string();
    let app = api::build_service(ServerState::initialize(&config).unwrap());

    // 实际存在的静态文件直接返回
    let (status, css) = send_bytes(&app, get("/app.css")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(css, b"body{}");

    // 未知路径回退 index.html，前端路由接管
    let (status, page) = send_bytes(&app, get("/admin/dashboard")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page, b"<html>Pepper Chicken</html>");

    // 非 GET 不回退
    let (status, _) = send_bytes(&app, empty_request("POST", "/admin/dashboard")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ========== Persistence ==========

#[tokio::test]
async fn test_documents_survive_restart() {
    let dir = tempfile::tempdir().unwrap();

    {
        let app = api::build_service(state_for(dir.path()));
        send(
            &app,
            json_request("PUT", "/api/settings/logo", json!({ "text": "Persisted" })),
        )
        .await;
        send(&app, empty_request("DELETE", "/api/meals/1")).await;
    }

    // 同一工作目录重新初始化，相当于服务重启
    let app = api::build_service(state_for(dir.path()));

    let (_, settings) = send(&app, get("/api/settings")).await;
    assert_eq!(settings["logo"]["text"], "Persisted");

    let (_, meals) = send(&app, get("/api/meals")).await;
    assert_eq!(meals.as_array().unwrap().len(), 1);
}
