//! 菜品目录存储
//!
//! 目录整体作为一个 JSON 数组文档持久化，与设置文档同级、独立 key。
//! CRUD 是读-改-写整个数组：目录规模小（十量级），一次写入保持
//! 文档级原子性。新菜品 ID 取现有最大 ID + 1。

use shared::models::meal::{Meal, MealCategory, MealCreate, MealUpdate};
use tracing::info;

use crate::storage::{MEALS_KEY, SiteStorage, StorageResult};

/// 菜品目录存储
#[derive(Clone)]
pub struct MealStore {
    storage: SiteStorage,
}

impl MealStore {
    pub fn new(storage: SiteStorage) -> Self {
        Self { storage }
    }

    /// 启动时调用：目录 key 不存在则写入内置默认菜单
    pub fn initialize(&self) -> StorageResult<()> {
        if self.storage.read_raw(MEALS_KEY)?.is_none() {
            self.storage.write_as(MEALS_KEY, &Meal::default_catalog())?;
            info!("Meal catalog seeded with default meals");
        }
        Ok(())
    }

    /// 全部菜品（存储顺序）
    ///
    /// key 不存在时返回内置默认菜单（不写盘）；文档损坏返回错误。
    pub fn find_all(&self) -> StorageResult<Vec<Meal>> {
        Ok(self
            .storage
            .read_as::<Vec<Meal>>(MEALS_KEY)?
            .unwrap_or_else(Meal::default_catalog))
    }

    /// 首页推荐菜品
    pub fn find_featured(&self) -> StorageResult<Vec<Meal>> {
        Ok(self
            .find_all()?
            .into_iter()
            .filter(|m| m.featured)
            .collect())
    }

    /// 按分类过滤
    pub fn find_by_category(&self, category: MealCategory) -> StorageResult<Vec<Meal>> {
        Ok(self
            .find_all()?
            .into_iter()
            .filter(|m| m.category == category)
            .collect())
    }

    /// 按 ID 查找
    pub fn find_by_id(&self, id: i64) -> StorageResult<Option<Meal>> {
        Ok(self.find_all()?.into_iter().find(|m| m.id == id))
    }

    /// 新建菜品，ID = 现有最大 ID + 1（空目录从 1 开始）
    pub fn create(&self, input: MealCreate) -> StorageResult<Meal> {
        let mut meals = self.find_all()?;
        let next_id = meals.iter().map(|m| m.id).max().unwrap_or(0) + 1;

        let meal = Meal {
            id: next_id,
            name: input.name,
            description: input.description,
            price: input.price,
            image: input.image,
            category: input.category,
            featured: input.featured,
        };
        meals.push(meal.clone());

        self.storage.write_as(MEALS_KEY, &meals)?;
        Ok(meal)
    }

    /// 按字段合并更新，仅覆盖提供的字段；ID 不存在返回 `None`
    pub fn update(&self, id: i64, update: MealUpdate) -> StorageResult<Option<Meal>> {
        let mut meals = self.find_all()?;
        let Some(meal) = meals.iter_mut().find(|m| m.id == id) else {
            return Ok(None);
        };

        if let Some(name) = update.name {
            meal.name = name;
        }
        if let Some(description) = update.description {
            meal.description = description;
        }
        if let Some(price) = update.price {
            meal.price = price;
        }
        if let Some(image) = update.image {
            meal.image = image;
        }
        if let Some(category) = update.category {
            meal.category = category;
        }
        if let Some(featured) = update.featured {
            meal.featured = featured;
        }
        let updated = meal.clone();

        self.storage.write_as(MEALS_KEY, &meals)?;
        Ok(Some(updated))
    }

    /// 删除菜品，返回是否存在
    pub fn delete(&self, id: i64) -> StorageResult<bool> {
        let mut meals = self.find_all()?;
        let before = meals.len();
        meals.retain(|m| m.id != id);
        if meals.len() == before {
            return Ok(false);
        }

        self.storage.write_as(MEALS_KEY, &meals)?;
        Ok(true)
    }
}
