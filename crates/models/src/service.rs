use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;
use crate::icon::IconTag;
use crate::{require, Validate};

/// A bookable event service as persisted by the store.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Service {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
}

impl Service {
    /// Resolved card icon for display; unknown tags fall back to the default.
    pub fn icon_tag(&self) -> IconTag {
        IconTag::from_tag(self.icon.as_deref().unwrap_or_default())
    }
}

/// Not-yet-persisted form state; the store assigns the id.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ServiceInput {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
}

impl Validate for ServiceInput {
    fn validate(&self) -> Result<(), ModelError> {
        require("name", &self.name)?;
        require("description", &self.description)?;
        Ok(())
    }
}
