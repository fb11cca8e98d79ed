use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;
use crate::{require, Validate};

/// A published blog post. `summary` is shown collapsed; `content` expands in
/// place on the page. `created_at` is assigned by the store.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BlogPostInput {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl Validate for BlogPostInput {
    fn validate(&self) -> Result<(), ModelError> {
        require("title", &self.title)?;
        require("content", &self.content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(title: &str, content: &str) -> BlogPostInput {
        BlogPostInput {
            title: title.into(),
            content: content.into(),
            summary: None,
            image: None,
            author: None,
            category: None,
        }
    }

    #[test]
    fn title_and_content_are_required() {
        assert!(input("", "B").validate().is_err());
        assert!(input("A", "").validate().is_err());
        assert!(input("A", "B").validate().is_ok());
    }

    #[test]
    fn record_deserializes_with_missing_optionals() {
        let json = format!(r#"{{"id":"{}","title":"T","content":"C"}}"#, Uuid::new_v4());
        let post: BlogPost = serde_json::from_str(&json).expect("decode");
        assert_eq!(post.title, "T");
        assert!(post.summary.is_none());
        assert!(post.created_at.is_none());
    }
}
