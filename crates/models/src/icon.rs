//! Service card icon tags.
//!
//! The store keeps the icon as a free-form string; the frontend only knows a
//! closed set of drawable icons, so anything unrecognized falls back to the
//! default card icon.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum IconTag {
    Heart,
    Building,
    PartyPopper,
    Users,
    Calendar,
    Sparkles,
}

impl IconTag {
    /// Resolve a stored tag; unknown or empty tags map to `Heart`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "Heart" => Self::Heart,
            "Building" => Self::Building,
            "PartyPopper" => Self::PartyPopper,
            "Users" => Self::Users,
            "Calendar" => Self::Calendar,
            "Sparkles" => Self::Sparkles,
            _ => Self::default(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Heart => "Heart",
            Self::Building => "Building",
            Self::PartyPopper => "PartyPopper",
            Self::Users => "Users",
            Self::Calendar => "Calendar",
            Self::Sparkles => "Sparkles",
        }
    }
}

impl Default for IconTag {
    fn default() -> Self {
        Self::Heart
    }
}

#[cfg(test)]
mod tests {
    use super::IconTag;

    #[test]
    fn known_tags_round_trip() {
        for tag in ["Heart", "Building", "PartyPopper", "Users", "Calendar", "Sparkles"] {
            assert_eq!(IconTag::from_tag(tag).as_str(), tag);
        }
    }

    #[test]
    fn unknown_tag_falls_back_to_default() {
        assert_eq!(IconTag::from_tag("Rocket"), IconTag::Heart);
        assert_eq!(IconTag::from_tag(""), IconTag::Heart);
        // 大小写敏感：存储中保存的是精确标签
        assert_eq!(IconTag::from_tag("heart"), IconTag::Heart);
    }
}
