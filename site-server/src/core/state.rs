use std::path::PathBuf;

use crate::admin::AdminStore;
use crate::core::{Config, Result};
use crate::meals::MealStore;
use crate::settings::SettingsStore;
use crate::storage::SiteStorage;

/// 服务器状态 - 持有所有存储的共享引用
///
/// ServerState 是站点服务的核心数据结构，内部只有廉价的 Arc 克隆。
///
/// # 服务组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | storage | SiteStorage | 嵌入式文档存储 (redb) |
/// | settings | SettingsStore | 站点设置 |
/// | meals | MealStore | 菜品目录 |
/// | admin | AdminStore | 管理员档案与活动日志 |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 嵌入式文档存储
    pub storage: SiteStorage,
    /// 站点设置存储
    pub settings: SettingsStore,
    /// 菜品目录存储
    pub meals: MealStore,
    /// 管理员存储
    pub admin: AdminStore,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录结构 (database/, uploads/, logs/)
    /// 2. 文档存储 (work_dir/database/site.db)
    /// 3. 各存储的启动回填 (设置、菜品、管理员)
    pub fn initialize(config: &Config) -> Result<Self> {
        // 0. Ensure work_dir structure exists
        config.ensure_work_dir_structure()?;

        // 1. Open document storage
        let db_path = config.database_dir().join("site.db");
        let storage = SiteStorage::open(&db_path)?;

        // 2. Construct stores
        let settings = SettingsStore::new(storage.clone());
        let meals = MealStore::new(storage.clone());
        let admin = AdminStore::new(storage.clone(), config.credentials());

        // 3. Startup back-fills
        settings.initialize();
        meals.initialize()?;
        admin.initialize()?;

        Ok(Self {
            config: config.clone(),
            storage,
            settings,
            meals,
            admin,
        })
    }

    /// 获取工作目录
    pub fn work_dir(&self) -> PathBuf {
        PathBuf::from(&self.config.work_dir)
    }

    /// 上传文件目录
    pub fn uploads_dir(&self) -> PathBuf {
        self.config.uploads_dir()
    }

    /// 前端静态文件目录
    pub fn static_dir(&self) -> PathBuf {
        PathBuf::from(&self.config.static_dir)
    }
}
