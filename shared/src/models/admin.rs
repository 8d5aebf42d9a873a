//! 管理员模型
//!
//! 管理员档案、后台偏好设置和活动日志。单管理员场景：
//! 档案是单例文档，活动日志是新→旧排列的数组，上限 100 条。

use serde::{Deserialize, Serialize};

use crate::util::now_iso;

/// 管理员角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminRole {
    Admin,
    Editor,
}

impl AdminRole {
    /// 线上序列化使用的小写名称
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Editor => "editor",
        }
    }
}

/// 后台偏好设置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdminPreferences {
    pub dark_mode: bool,
    pub compact_view: bool,
    pub auto_save: bool,
    pub notifications_enabled: bool,
}

impl Default for AdminPreferences {
    fn default() -> Self {
        Self {
            dark_mode: false,
            compact_view: false,
            auto_save: true,
            notifications_enabled: true,
        }
    }
}

/// 管理员档案
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminProfile {
    pub id: i64,
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub role: AdminRole,
    /// 头像 URL
    pub avatar: String,
    /// 最近登录时间 (ISO-8601)
    pub last_login: String,
    #[serde(default)]
    pub preferences: AdminPreferences,
}

impl AdminProfile {
    /// 默认管理员账户，档案 key 不存在时写入
    pub fn default_account() -> Self {
        Self {
            id: 1,
            username: "admin".to_string(),
            full_name: "Administrator".to_string(),
            email: "admin@pepperchicken.com".to_string(),
            role: AdminRole::Admin,
            avatar: "https://ui-avatars.com/api/?name=Admin&background=8B0000&color=fff"
                .to_string(),
            last_login: now_iso(),
            preferences: AdminPreferences::default(),
        }
    }
}

/// 档案更新请求 - 所有字段可选
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<AdminRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login: Option<String>,
    /// 偏好整体替换；单项合并走偏好更新接口
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<AdminPreferences>,
}

/// 偏好更新请求 - 所有字段可选，与当前偏好合并
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminPreferencesUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compact_view: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_save: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications_enabled: Option<bool>,
}

/// 活动日志条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminActivity {
    /// 毫秒时间戳充当唯一 ID
    pub id: i64,
    /// ISO-8601 时间
    pub timestamp: String,
    /// 动作分类: Authentication | Settings | Website | System | ...
    pub action: String,
    pub details: String,
    pub user_id: i64,
}
