use std::path::{Path, PathBuf};

use crate::admin::AdminCredentials;

/// 服务器配置 - 站点服务的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./data | 工作目录 (数据库、上传文件、日志) |
/// | HTTP_PORT | 5000 | HTTP 服务端口 |
/// | STATIC_DIR | ./dist | 前端构建产物目录 |
/// | SERVER_HOST | localhost | 对外主机名 (用于拼接上传文件 URL) |
/// | ADMIN_USERNAME | admin | 后台登录用户名 |
/// | ADMIN_PASSWORD | pepperchicken2023 | 后台登录密码 |
/// | ENVIRONMENT | development | 运行环境 |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/data/pepper HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录，存储数据库、上传文件和日志
    pub work_dir: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 前端静态文件目录
    pub static_dir: String,
    /// 对外主机名，用于拼接上传文件完整 URL
    pub server_host: String,
    /// 后台登录用户名
    pub admin_username: String,
    /// 后台登录密码
    pub admin_password: String,
    /// 运行环境: development | staging | production
    pub environment: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        let default_credentials = AdminCredentials::default();
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            static_dir: std::env::var("STATIC_DIR").unwrap_or_else(|_| "./dist".into()),
            server_host: std::env::var("SERVER_HOST").unwrap_or_else(|_| "localhost".into()),
            admin_username: std::env::var("ADMIN_USERNAME")
                .unwrap_or(default_credentials.username),
            admin_password: std::env::var("ADMIN_PASSWORD")
                .unwrap_or(default_credentials.password),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// 数据库目录 (work_dir/database)
    pub fn database_dir(&self) -> PathBuf {
        Path::new(&self.work_dir).join("database")
    }

    /// 上传文件目录 (work_dir/uploads)
    pub fn uploads_dir(&self) -> PathBuf {
        Path::new(&self.work_dir).join("uploads")
    }

    /// 日志目录 (work_dir/logs)
    pub fn logs_dir(&self) -> PathBuf {
        Path::new(&self.work_dir).join("logs")
    }

    /// 创建工作目录结构 (database/, uploads/, logs/)
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.database_dir())?;
        std::fs::create_dir_all(self.uploads_dir())?;
        std::fs::create_dir_all(self.logs_dir())?;
        Ok(())
    }

    /// 后台登录凭据
    pub fn credentials(&self) -> AdminCredentials {
        AdminCredentials {
            username: self.admin_username.clone(),
            password: self.admin_password.clone(),
        }
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
