//! 菜品目录模型
//!
//! 菜单页和后台菜品管理共用。目录整体持久化为一个 JSON 数组，
//! 新菜品 ID 取现有最大 ID + 1。

use serde::{Deserialize, Serialize};

/// 菜品分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealCategory {
    /// 主食
    Main,
    /// 汤类
    Soup,
    /// 配菜
    Sides,
    /// 饮品
    Drinks,
}

impl std::str::FromStr for MealCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "main" => Ok(Self::Main),
            "soup" => Ok(Self::Soup),
            "sides" => Ok(Self::Sides),
            "drinks" => Ok(Self::Drinks),
            other => Err(format!("unknown meal category: {other}")),
        }
    }
}

/// 菜品
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// 价格（奈拉）
    pub price: f64,
    /// 图片: 外部 URL 或 `/uploads/` 路径
    pub image: String,
    pub category: MealCategory,
    /// 首页推荐
    #[serde(default)]
    pub featured: bool,
}

impl Meal {
    /// 内置默认菜单，菜品 key 不存在时作为目录种子
    pub fn default_catalog() -> Vec<Meal> {
        vec![
            Meal {
                id: 1,
                name: "Jollof Rice with Chicken".to_string(),
                description: "Our signature one-pot rice dish cooked with tomatoes, peppers, and aromatic spices, served with perfectly grilled chicken.".to_string(),
                price: 3500.0,
                image: "https://images.unsplash.com/photo-1604329760661-e71dc83f8f26".to_string(),
                category: MealCategory::Main,
                featured: true,
            },
            Meal {
                id: 2,
                name: "Egusi Soup with Pounded Yam".to_string(),
                description: "Thick melon seed soup with assorted meat and fish, served with smooth pounded yam, a perfect Nigerian comfort food.".to_string(),
                price: 4200.0,
                image: "https://pixabay.com/get/g50da28ee36cd41c331e6685695c15db318d17f01c5362d47a21d3d13c59afc27e8b0b6f58340b34f5adee50eef9b5713d30f17a3568dfc77510de82ba560f9ff_1280.jpg".to_string(),
                category: MealCategory::Soup,
                featured: true,
            },
        ]
    }
}

/// 新建菜品请求
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealCreate {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    pub category: MealCategory,
    #[serde(default)]
    pub featured: bool,
}

/// 更新菜品请求 - 所有字段可选，仅更新提供的字段
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<MealCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
}
