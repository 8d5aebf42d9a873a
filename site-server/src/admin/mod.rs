//! 管理员存储
//!
//! 围绕三个文档 key：档案（单例）、活动日志（数组）、会话标记（布尔）。
//! 档案和日志的读取永不失败：缺失或损坏时回退默认值并记录错误。
//! 活动日志新条目前插，超出上限丢弃最旧条目。

use shared::models::admin::{
    AdminActivity, AdminPreferencesUpdate, AdminProfile, AdminProfileUpdate,
};
use shared::util::{now_iso, now_millis};
use tracing::{error, info};

use crate::storage::{
    ADMIN_ACTIVITIES_KEY, ADMIN_PROFILE_KEY, ADMIN_SESSION_KEY, SiteStorage, StorageResult,
};

/// 活动日志条数上限
const MAX_ACTIVITIES: usize = 100;

/// 后台登录凭据，由配置提供
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl Default for AdminCredentials {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: "pepperchicken2023".to_string(),
        }
    }
}

/// 管理员存储
#[derive(Clone)]
pub struct AdminStore {
    storage: SiteStorage,
    credentials: AdminCredentials,
}

impl AdminStore {
    pub fn new(storage: SiteStorage, credentials: AdminCredentials) -> Self {
        Self {
            storage,
            credentials,
        }
    }

    /// 启动时调用：补齐缺失的档案和活动日志文档
    pub fn initialize(&self) -> StorageResult<()> {
        if self.storage.read_raw(ADMIN_PROFILE_KEY)?.is_none() {
            self.storage
                .write_as(ADMIN_PROFILE_KEY, &AdminProfile::default_account())?;
            info!("Admin profile seeded with default account");
        }
        if self.storage.read_raw(ADMIN_ACTIVITIES_KEY)?.is_none() {
            self.storage
                .write_as(ADMIN_ACTIVITIES_KEY, &Vec::<AdminActivity>::new())?;
        }
        Ok(())
    }

    /// 当前档案；缺失或损坏时返回默认账户（不写盘）
    pub fn profile(&self) -> AdminProfile {
        match self.storage.read_as::<AdminProfile>(ADMIN_PROFILE_KEY) {
            Ok(Some(profile)) => profile,
            Ok(None) => AdminProfile::default_account(),
            Err(err) => {
                error!("Failed to read admin profile, using defaults: {err}");
                AdminProfile::default_account()
            }
        }
    }

    /// 按字段合并更新档案，仅覆盖提供的字段
    pub fn update_profile(&self, update: AdminProfileUpdate) -> StorageResult<AdminProfile> {
        let mut profile = self.profile();

        if let Some(username) = update.username {
            profile.username = username;
        }
        if let Some(full_name) = update.full_name {
            profile.full_name = full_name;
        }
        if let Some(email) = update.email {
            profile.email = email;
        }
        if let Some(role) = update.role {
            profile.role = role;
        }
        if let Some(avatar) = update.avatar {
            profile.avatar = avatar;
        }
        if let Some(last_login) = update.last_login {
            profile.last_login = last_login;
        }
        if let Some(preferences) = update.preferences {
            profile.preferences = preferences;
        }

        self.storage.write_as(ADMIN_PROFILE_KEY, &profile)?;
        Ok(profile)
    }

    /// 合并偏好单项并记一条 `Settings` 活动
    pub fn update_preferences(
        &self,
        update: AdminPreferencesUpdate,
    ) -> StorageResult<AdminProfile> {
        let mut profile = self.profile();

        if let Some(dark_mode) = update.dark_mode {
            profile.preferences.dark_mode = dark_mode;
        }
        if let Some(compact_view) = update.compact_view {
            profile.preferences.compact_view = compact_view;
        }
        if let Some(auto_save) = update.auto_save {
            profile.preferences.auto_save = auto_save;
        }
        if let Some(notifications_enabled) = update.notifications_enabled {
            profile.preferences.notifications_enabled = notifications_enabled;
        }

        self.storage.write_as(ADMIN_PROFILE_KEY, &profile)?;
        self.log_activity("Settings", "Admin preferences updated")?;
        Ok(profile)
    }

    /// 活动日志（新→旧）；缺失或损坏时返回空列表
    pub fn activities(&self) -> Vec<AdminActivity> {
        match self
            .storage
            .read_as::<Vec<AdminActivity>>(ADMIN_ACTIVITIES_KEY)
        {
            Ok(entries) => entries.unwrap_or_default(),
            Err(err) => {
                error!("Failed to read activity log: {err}");
                Vec::new()
            }
        }
    }

    /// 记录一条活动，前插并截断到上限
    pub fn log_activity(&self, action: &str, details: &str) -> StorageResult<AdminActivity> {
        let entry = AdminActivity {
            id: now_millis(),
            timestamp: now_iso(),
            action: action.to_string(),
            details: details.to_string(),
            user_id: self.profile().id,
        };

        let mut activities = self.activities();
        activities.insert(0, entry.clone());
        activities.truncate(MAX_ACTIVITIES);
        self.storage.write_as(ADMIN_ACTIVITIES_KEY, &activities)?;
        Ok(entry)
    }

    /// 清空活动日志，随后记一条 `System` 活动说明此事
    pub fn clear_activities(&self) -> StorageResult<()> {
        self.storage
            .write_as(ADMIN_ACTIVITIES_KEY, &Vec::<AdminActivity>::new())?;
        self.log_activity("System", "Activity log cleared")?;
        Ok(())
    }

    /// 校验凭据；成功时刷新最近登录时间、写会话标记并记日志
    pub fn authenticate(&self, username: &str, password: &str) -> StorageResult<bool> {
        if username != self.credentials.username || password != self.credentials.password {
            return Ok(false);
        }

        let mut profile = self.profile();
        profile.last_login = now_iso();
        self.storage.write_as(ADMIN_PROFILE_KEY, &profile)?;
        self.storage.write_as(ADMIN_SESSION_KEY, &true)?;
        self.log_activity("Authentication", "Admin logged in")?;
        Ok(true)
    }

    /// 是否存在有效会话标记
    pub fn is_logged_in(&self) -> bool {
        self.storage
            .read_as::<bool>(ADMIN_SESSION_KEY)
            .ok()
            .flatten()
            .unwrap_or(false)
    }

    /// 登出：先记日志（此时会话仍有效），再移除会话标记
    pub fn logout(&self) -> StorageResult<()> {
        self.log_activity("Authentication", "Admin logged out")?;
        self.storage.delete_document(ADMIN_SESSION_KEY)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::admin::AdminRole;

    fn store() -> AdminStore {
        let store = AdminStore::new(
            SiteStorage::open_in_memory().unwrap(),
            AdminCredentials::default(),
        );
        store.initialize().unwrap();
        store
    }

    #[test]
    fn test_initialize_seeds_profile_and_empty_log() {
        let store = store();

        assert_eq!(store.profile().username, "admin");
        assert!(store.activities().is_empty());
    }

    #[test]
    fn test_profile_falls_back_to_default_account() {
        let storage = SiteStorage::open_in_memory().unwrap();
        let store = AdminStore::new(storage.clone(), AdminCredentials::default());

        let profile = store.profile();
        assert_eq!(profile.email, "admin@pepperchicken.com");
        // 回退不落盘
        assert!(storage.read_raw(ADMIN_PROFILE_KEY).unwrap().is_none());
    }

    #[test]
    fn test_profile_survives_corrupt_document() {
        let storage = SiteStorage::open_in_memory().unwrap();
        storage.write_raw(ADMIN_PROFILE_KEY, b"{not json").unwrap();

        let store = AdminStore::new(storage, AdminCredentials::default());
        assert_eq!(store.profile().id, 1);
    }

    #[test]
    fn test_update_profile_merges_without_logging() {
        let store = store();

        let updated = store
            .update_profile(AdminProfileUpdate {
                full_name: Some("Chef Okafor".to_string()),
                role: Some(AdminRole::Editor),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(updated.full_name, "Chef Okafor");
        assert_eq!(updated.role, AdminRole::Editor);
        assert_eq!(updated.username, "admin");
        // 档案更新不产生活动日志
        assert!(store.activities().is_empty());
    }

    #[test]
    fn test_update_preferences_merges_and_logs() {
        let store = store();

        let updated = store
            .update_preferences(AdminPreferencesUpdate {
                dark_mode: Some(true),
                ..Default::default()
            })
            .unwrap();

        assert!(updated.preferences.dark_mode);
        assert!(updated.preferences.auto_save);

        let activities = store.activities();
        assert_eq!(activities.len(), 1);
        assert_eq!(activities[0].action, "Settings");
        assert_eq!(activities[0].details, "Admin preferences updated");
    }

    #[test]
    fn test_activities_are_newest_first() {
        let store = store();
        store.log_activity("Website", "Meal created").unwrap();
        store.log_activity("Website", "Meal deleted").unwrap();

        let activities = store.activities();
        assert_eq!(activities[0].details, "Meal deleted");
        assert_eq!(activities[1].details, "Meal created");
        assert_eq!(activities[0].user_id, 1);
    }

    #[test]
    fn test_activity_log_is_capped() {
        let store = store();
        for i in 0..MAX_ACTIVITIES + 5 {
            store.log_activity("System", &format!("entry {i}")).unwrap();
        }

        let activities = store.activities();
        assert_eq!(activities.len(), MAX_ACTIVITIES);
        assert_eq!(activities[0].details, format!("entry {}", MAX_ACTIVITIES + 4));
    }

    #[test]
    fn test_clear_activities_leaves_one_system_entry() {
        let store = store();
        store.log_activity("Website", "Meal created").unwrap();
        store.clear_activities().unwrap();

        let activities = store.activities();
        assert_eq!(activities.len(), 1);
        assert_eq!(activities[0].action, "System");
        assert_eq!(activities[0].details, "Activity log cleared");
    }

    #[test]
    fn test_authenticate_success() {
        let store = store();
        store
            .update_profile(AdminProfileUpdate {
                last_login: Some("2020-01-01T00:00:00.000Z".to_string()),
                ..Default::default()
            })
            .unwrap();

        assert!(store.authenticate("admin", "pepperchicken2023").unwrap());
        assert!(store.is_logged_in());
        assert_ne!(store.profile().last_login, "2020-01-01T00:00:00.000Z");

        let activities = store.activities();
        assert_eq!(activities[0].action, "Authentication");
        assert_eq!(activities[0].details, "Admin logged in");
    }

    #[test]
    fn test_authenticate_rejects_bad_credentials() {
        let store = store();

        assert!(!store.authenticate("admin", "wrong").unwrap());
        assert!(!store.authenticate("root", "pepperchicken2023").unwrap());
        assert!(!store.is_logged_in());
        // 失败的尝试不记日志
        assert!(store.activities().is_empty());
    }

    #[test]
    fn test_logout_clears_session_and_logs() {
        let store = store();
        store.authenticate("admin", "pepperchicken2023").unwrap();

        store.logout().unwrap();

        assert!(!store.is_logged_in());
        assert_eq!(store.activities()[0].details, "Admin logged out");
    }

    #[test]
    fn test_custom_credentials() {
        let store = AdminStore::new(
            SiteStorage::open_in_memory().unwrap(),
            AdminCredentials {
                username: "okafor".to_string(),
                password: "secret".to_string(),
            },
        );
        store.initialize().unwrap();

        assert!(store.authenticate("okafor", "secret").unwrap());
        assert!(!store.authenticate("admin", "pepperchicken2023").unwrap());
    }
}
