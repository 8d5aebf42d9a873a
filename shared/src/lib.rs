//! Shared types for the Pepper Chicken site
//!
//! Common types used by the site server and the web frontend (via API):
//! the site settings document and its compiled-in defaults, meal catalog
//! models, admin models and the request/response DTOs of the HTTP API.

pub mod client;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::admin::{
    AdminActivity, AdminPreferences, AdminPreferencesUpdate, AdminProfile, AdminProfileUpdate,
    AdminRole,
};
pub use models::meal::{Meal, MealCategory, MealCreate, MealUpdate};
pub use models::settings::{
    AboutPageSettings, FooterSettings, HeroSlide, HomePageSettings, LogoSettings, SettingsDocument,
    SocialLink,
};
