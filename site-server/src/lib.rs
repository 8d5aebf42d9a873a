//! Pepper Chicken Site Server - 餐厅官网后端服务
//!
//! # 架构概述
//!
//! 本模块是站点服务的主入口，提供以下核心功能：
//!
//! - **文档存储** (`storage`): 嵌入式 redb 单文件 JSON 文档存储
//! - **站点设置** (`settings`): 单例设置文档，启动回填 + 分区合并
//! - **菜品目录** (`meals`): 菜单查询与 CRUD
//! - **管理员** (`admin`): 档案、偏好、活动日志与会话
//! - **HTTP API** (`api`): RESTful 接口与前端静态文件回退
//!
//! # 模块结构
//!
//! ```text
//! site-server/src/
//! ├── core/          # 配置、状态、生命周期
//! ├── storage/       # redb 文档存储
//! ├── settings/      # 站点设置存储
//! ├── meals/         # 菜品目录存储
//! ├── admin/         # 管理员存储
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 错误、响应、日志
//! ```

pub mod admin;
pub mod api;
pub mod core;
pub mod meals;
pub mod settings;
pub mod storage;
pub mod utils;

// Re-export 公共类型
pub use admin::{AdminCredentials, AdminStore};
pub use crate::core::{Config, Server, ServerState};
pub use meals::MealStore;
pub use settings::{SettingsSource, SettingsStore};
pub use storage::{SiteStorage, StorageError};
pub use utils::{AppError, AppResponse, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
    ____
   / __ \___  ____  ____  ___  _____
  / /_/ / _ \/ __ \/ __ \/ _ \/ ___/
 / ____/  __/ /_/ / /_/ /  __/ /
/_/    \___/ .___/ .___/\___/_/
           /_/   /_/
   ________    _      __
  / ____/ /_  (_)____/ /_____  ____
 / /   / __ \/ / ___/ //_/ _ \/ __ \
/ /___/ / / / / /__/ ,< /  __/ / / /
\____/_/ /_/_/\___/_/|_|\___/_/ /_/
    "#
    );
}
