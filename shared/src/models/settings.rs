//! 站点设置文档
//!
//! 网站外观配置：logo、页脚、首页、关于页四个顶层分区组成一个
//! 单例 JSON 文档。编译期内置的默认文档是唯一权威来源，初始化回填、
//! 读取兜底和重置都消费同一个常量。
//!
//! # 文档结构
//!
//! | 分区 | 字段名 | 内容 |
//! |------|--------|------|
//! | logo | `logo` | 文字 logo、图片 URL、alt 文本 |
//! | 页脚 | `footer` | 版权、地址、联系方式、社交链接 |
//! | 关于页 | `aboutPage` | 品牌故事、营业时间、到店信息 |
//! | 首页 | `homePage` | Hero 轮播、CTA、栏目标题 |

use serde::{Deserialize, Serialize};

/// Logo 设置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogoSettings {
    /// 文字 logo
    pub text: String,
    /// 图片 logo URL，为空时前端显示文字
    pub image_url: String,
    /// 图片 alt 文本
    pub alt_text: String,
}

impl Default for LogoSettings {
    fn default() -> Self {
        Self {
            text: "Pepper Chicken".to_string(),
            image_url: String::new(),
            alt_text: "Pepper Chicken Restaurant Logo".to_string(),
        }
    }
}

/// 社交媒体链接
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    /// 平台标识: facebook | instagram | twitter | ...
    pub platform: String,
    pub url: String,
}

impl SocialLink {
    pub fn new(platform: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            url: url.into(),
        }
    }
}

/// 页脚设置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FooterSettings {
    pub copyright_text: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    /// 有序数组，更新时整体替换
    pub social_links: Vec<SocialLink>,
}

impl Default for FooterSettings {
    fn default() -> Self {
        Self {
            copyright_text: "© Pepper Chicken Nig Ltd. All rights reserved.".to_string(),
            address: "123 Lekki Road, Lagos, Nigeria".to_string(),
            phone: "+234 801 234 5678".to_string(),
            email: "info@pepperchicken.ng".to_string(),
            social_links: vec![
                SocialLink::new("facebook", "https://facebook.com/pepperchicken"),
                SocialLink::new("instagram", "https://instagram.com/pepperchicken"),
                SocialLink::new("twitter", "https://twitter.com/pepperchicken"),
            ],
        }
    }
}

/// 关于页设置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AboutPageSettings {
    pub title: String,
    pub paragraph1: String,
    pub paragraph2: String,
    pub paragraph3: String,
    pub image1: String,
    pub image2: String,
    // Visit Us 区块
    pub visit_title: String,
    pub visit_text: String,
    // 营业时间
    pub hours_title: String,
    pub monday_to_thursday: String,
    pub friday_to_saturday: String,
    pub sunday: String,
    // 位置信息
    pub location_title: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

impl Default for AboutPageSettings {
    fn default() -> Self {
        Self {
            title: "Our Story".to_string(),
            paragraph1: "Founded in 2008, Pepper Chicken Nigeria Ltd began as a small family-owned restaurant with a passion for authentic Nigerian cuisine. Our founder, Chef Adebayo, wanted to share his grandmother's recipes and the rich culinary traditions of Nigeria with the world.".to_string(),
            paragraph2: "What started as a modest establishment has now grown into one of the most respected Nigerian restaurants, known for our commitment to authentic flavors, quality ingredients, and exceptional service.".to_string(),
            paragraph3: "Today, we continue to honor our traditional recipes while innovating and creating new culinary experiences. Our chefs use only the freshest ingredients, and our spice blends are made in-house to ensure the most authentic taste of Nigeria.".to_string(),
            image1: "https://pixabay.com/get/g54c6587f346408284b8421f16ec7151c4122b207ced1466973d46d38851f08262170e010fab17d96a6c8dd3217c1a679c8686574dae3f76f1630d033e0a91475_1280.jpg".to_string(),
            image2: "https://images.unsplash.com/photo-1606902965551-dce093cda6e7?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&h=400".to_string(),
            visit_title: "Visit Us".to_string(),
            visit_text: "We invite you to visit our restaurant and experience the warmth and flavors of Nigerian cuisine. Our staff is ready to welcome you and provide an unforgettable dining experience.".to_string(),
            hours_title: "Opening Hours".to_string(),
            monday_to_thursday: "11:00 AM - 10:00 PM".to_string(),
            friday_to_saturday: "11:00 AM - 11:00 PM".to_string(),
            sunday: "12:00 PM - 9:00 PM".to_string(),
            location_title: "Location".to_string(),
            address: "123 Lekki Road, Lagos, Nigeria".to_string(),
            phone: "+234 801 234 5678".to_string(),
            email: "info@pepperchicken.ng".to_string(),
        }
    }
}

/// 首页 Hero 轮播图
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSlide {
    pub title: String,
    pub subtitle: String,
    pub image_url: String,
    pub button_text: String,
    pub button_link: String,
    /// 按钮配色 class，如 `bg-wine-red`
    pub button_color: String,
}

/// 首页设置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HomePageSettings {
    pub hero_title: String,
    pub hero_subtitle: String,
    /// 为空时前端使用默认图
    pub hero_image_url: String,
    /// 有序数组，更新时整体替换
    pub hero_slide_images: Vec<HeroSlide>,
    pub cta_button_text: String,
    pub cta_button_link: String,
    pub featured_section_title: String,
    pub featured_section_subtitle: String,
    pub testimonials_section_title: String,
}

impl Default for HomePageSettings {
    fn default() -> Self {
        Self {
            hero_title: "Authentic Nigerian Cuisine".to_string(),
            hero_subtitle: "Experience the rich flavors of Nigeria".to_string(),
            hero_image_url: String::new(),
            hero_slide_images: vec![
                HeroSlide {
                    title: "Authentic Nigerian Cuisine".to_string(),
                    subtitle: "Experience the rich flavors and vibrant spices of Nigerian food at Pepper Chicken".to_string(),
                    image_url: "https://images.unsplash.com/photo-1604329760661-e71dc83f8f26?ixlib=rb-4.0.3&auto=format&fit=crop&w=1920&h=1080".to_string(),
                    button_text: "Explore Our Menu".to_string(),
                    button_link: "/menu".to_string(),
                    button_color: "bg-wine-red".to_string(),
                },
                HeroSlide {
                    title: "Warm & Inviting Atmosphere".to_string(),
                    subtitle: "Join us for a memorable dining experience in our beautiful restaurant".to_string(),
                    image_url: "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4?ixlib=rb-4.0.3&auto=format&fit=crop&w=1920&h=1080".to_string(),
                    button_text: "Book a Table".to_string(),
                    button_link: "/contact".to_string(),
                    button_color: "bg-dark-sky-blue".to_string(),
                },
                HeroSlide {
                    title: "Culinary Excellence".to_string(),
                    subtitle: "Our expert chefs bring passion and tradition to every dish".to_string(),
                    image_url: "https://images.unsplash.com/photo-1577106263724-2c8e03bfe9cf?ixlib=rb-4.0.3&auto=format&fit=crop&w=1920&h=1080".to_string(),
                    button_text: "Our Story".to_string(),
                    button_link: "/about".to_string(),
                    button_color: "bg-wine-red".to_string(),
                },
            ],
            cta_button_text: "View Our Menu".to_string(),
            cta_button_link: "/menu".to_string(),
            featured_section_title: "Our Specialties".to_string(),
            featured_section_subtitle: "Taste the best dishes from our kitchen".to_string(),
            testimonials_section_title: "What Our Customers Say".to_string(),
        }
    }
}

/// 站点设置文档 - 单例
///
/// 整个文档作为一个 JSON blob 持久化，原子单位是完整文档。
/// 完整初始化后的文档不含 null 字段。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsDocument {
    pub logo: LogoSettings,
    pub footer: FooterSettings,
    pub about_page: AboutPageSettings,
    pub home_page: HomePageSettings,
}

impl SettingsDocument {
    /// 内置默认文档 (JSON 形式)
    ///
    /// 初始化、读取兜底、重置共用的唯一默认值来源。
    pub fn default_json() -> serde_json::Value {
        serde_json::to_value(Self::default()).expect("default settings are serializable")
    }
}
