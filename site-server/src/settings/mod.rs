//! 站点设置存储
//!
//! 单例设置文档的核心读写逻辑：
//!
//! - [`SettingsStore::initialize`] - 启动时幂等回填缺失的默认字段
//! - [`SettingsStore::read`] - 读取完整文档，永不失败（损坏时回退默认值）
//! - `update_*` - 按顶层分区浅合并，整个文档一次持久化
//! - [`SettingsStore::reset`] - 无条件恢复默认文档
//!
//! 文档以结构化 JSON（[`serde_json::Value`]）存取：分区更新不做
//! schema 校验，未知 key 原样保存并返回。类型化的文档结构与内置
//! 默认值见 [`shared::models::settings`]。
//!
//! 本组件的所有公开操作都不向调用方抛错：存储故障记入日志，读路径
//! 回退默认文档，写路径丢弃本次编辑。降级读取通过 [`SettingsSource`]
//! 暴露给测试与健康检查。

use serde_json::{Map, Value};
use shared::models::settings::SettingsDocument;
use tracing::{error, info, warn};

use crate::storage::{SITE_SETTINGS_KEY, SiteStorage, StorageResult};

/// 可更新的顶层分区
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsSection {
    Logo,
    Footer,
    HomePage,
    AboutPage,
}

impl SettingsSection {
    /// 文档中的顶层字段名
    pub fn key(&self) -> &'static str {
        match self {
            Self::Logo => "logo",
            Self::Footer => "footer",
            Self::HomePage => "homePage",
            Self::AboutPage => "aboutPage",
        }
    }
}

impl std::fmt::Display for SettingsSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// 读取结果来源 - 让默认值兜底路径可被观测
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsSource {
    /// 文档来自存储
    Stored,
    /// 存储缺失、无法解析或读取出错，返回内置默认文档
    Defaults,
}

/// 站点设置存储
///
/// 显式构造一次、随 [`crate::core::ServerState`] 共享，内部只持有
/// 存储句柄，Clone 开销极低。
#[derive(Clone)]
pub struct SettingsStore {
    storage: SiteStorage,
}

impl SettingsStore {
    pub fn new(storage: SiteStorage) -> Self {
        Self { storage }
    }

    /// 启动时调用：文档不存在则写入默认文档，存在则递归补齐缺失字段
    ///
    /// 幂等。仅当至少补齐一个字段时写盘，因此至多一次写。
    /// 已有值（包括显式 null）从不覆盖，数组不做元素级合并。
    /// 存储不可用时记录日志后继续，后续读取走默认值兜底。
    pub fn initialize(&self) {
        if let Err(e) = self.try_initialize() {
            error!("Failed to initialize site settings: {}", e);
        }
    }

    fn try_initialize(&self) -> StorageResult<()> {
        let defaults = SettingsDocument::default_json();

        match self.storage.read_as::<Value>(SITE_SETTINGS_KEY)? {
            Some(mut current) => {
                let added = backfill_missing(&mut current, &defaults);
                if added > 0 {
                    self.storage.write_as(SITE_SETTINGS_KEY, &current)?;
                    info!(added, "Site settings back-filled with new default fields");
                }
            }
            None => {
                self.storage.write_as(SITE_SETTINGS_KEY, &defaults)?;
                info!("Site settings initialized with defaults");
            }
        }
        Ok(())
    }

    /// 读取完整设置文档，永不失败
    pub fn read(&self) -> Value {
        self.read_with_source().0
    }

    /// 读取文档并返回数据来源
    ///
    /// 渲染方用 [`read`](Self::read) 即可；测试和健康检查通过来源
    /// 断言降级路径，无需解析日志。
    pub fn read_with_source(&self) -> (Value, SettingsSource) {
        match self.storage.read_as::<Value>(SITE_SETTINGS_KEY) {
            Ok(Some(doc)) if doc.is_object() => (doc, SettingsSource::Stored),
            Ok(Some(_)) => {
                warn!("Stored site settings is not an object, serving defaults");
                (SettingsDocument::default_json(), SettingsSource::Defaults)
            }
            Ok(None) => (SettingsDocument::default_json(), SettingsSource::Defaults),
            Err(e) => {
                error!("Failed to read site settings, serving defaults: {}", e);
                (SettingsDocument::default_json(), SettingsSource::Defaults)
            }
        }
    }

    /// Logo 分区更新
    pub fn update_logo(&self, partial: Value) -> Value {
        self.update_section(SettingsSection::Logo, partial)
    }

    /// 页脚分区更新（socialLinks 数组整体替换）
    pub fn update_footer(&self, partial: Value) -> Value {
        self.update_section(SettingsSection::Footer, partial)
    }

    /// 首页分区更新（heroSlideImages 数组整体替换）
    pub fn update_home_page(&self, partial: Value) -> Value {
        self.update_section(SettingsSection::HomePage, partial)
    }

    /// 关于页分区更新
    pub fn update_about_page(&self, partial: Value) -> Value {
        self.update_section(SettingsSection::AboutPage, partial)
    }

    /// 对单个顶层分区做浅合并，返回合并后的完整文档
    ///
    /// object-spread 语义：
    /// - partial 的顶层 key 覆盖当前分区同名 key
    /// - 嵌套对象与数组整体替换，不做深合并
    /// - 未知 key 原样存储并返回，值类型不校验
    ///
    /// 写入失败记录日志，合并结果仍然返回（本次编辑丢失）。
    pub fn update_section(&self, section: SettingsSection, partial: Value) -> Value {
        let mut doc = self.read();
        merge_section(&mut doc, section.key(), partial);

        if let Err(e) = self.storage.write_as(SITE_SETTINGS_KEY, &doc) {
            error!(section = %section, "Failed to persist settings update: {}", e);
        }
        doc
    }

    /// 无条件恢复并持久化默认文档，返回默认文档
    pub fn reset(&self) -> Value {
        let defaults = SettingsDocument::default_json();
        if let Err(e) = self.storage.write_as(SITE_SETTINGS_KEY, &defaults) {
            error!("Failed to persist settings reset: {}", e);
        }
        info!("Site settings reset to defaults");
        defaults
    }
}

/// 递归补齐缺失字段，返回新增字段数
///
/// 规则与启动回填一致：
/// - key 不存在 → 拷入默认值（对象/数组/标量整体拷贝）
/// - 双方都是对象 → 递归
/// - 其余情况（已有标量、null、数组，或类型不一致）→ 不动
fn backfill_missing(current: &mut Value, defaults: &Value) -> usize {
    let (Some(cur), Some(def)) = (current.as_object_mut(), defaults.as_object()) else {
        return 0;
    };

    let mut added = 0;
    for (key, def_value) in def {
        match cur.get_mut(key) {
            None => {
                cur.insert(key.clone(), def_value.clone());
                added += 1;
            }
            Some(cur_value) if cur_value.is_object() && def_value.is_object() => {
                added += backfill_missing(cur_value, def_value);
            }
            Some(_) => {}
        }
    }
    added
}

/// 在 `doc[section_key]` 上浅合并 partial 的顶层字段
///
/// 分区缺失或不是对象时先重建为空对象。非对象 partial 没有可并字段，
/// 等价于空更新。
fn merge_section(doc: &mut Value, section_key: &str, partial: Value) {
    let Some(root) = doc.as_object_mut() else {
        return;
    };

    let section = root
        .entry(section_key.to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    if !section.is_object() {
        *section = Value::Object(Map::new());
    }

    if let (Some(target), Value::Object(fields)) = (section.as_object_mut(), partial) {
        for (key, value) in fields {
            target.insert(key, value);
        }
    }
}
