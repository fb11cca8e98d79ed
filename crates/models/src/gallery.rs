use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Portfolio image. Gallery rows are curated directly in the store; this app
/// only reads them.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GalleryItem {
    pub id: Uuid,
    pub title: String,
    pub category: String,
    pub image_url: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Category filter chips shown on the gallery page. `All` disables filtering.
pub const CATEGORIES: [&str; 5] = ["All", "Wedding", "Corporate", "Private", "Venue"];

impl GalleryItem {
    pub fn in_category(&self, category: &str) -> bool {
        category == "All" || self.category == category
    }
}
