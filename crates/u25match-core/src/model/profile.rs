use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::errors::{ProfileError, Result};
use crate::model::details::ProfileDetails;

/// Interest tag attached to a profile
///
/// `id` identifies the tag instance; two tags with the same `name` but
/// different ids are still different instances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: String,
    pub name: String,
    pub image_url: String,
}

impl Tag {
    pub fn new(id: impl Into<String>, name: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image_url: image_url.into(),
        }
    }
}

/// The editable subset of a user's dating profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileData {
    pub name: String,
    pub age: u32,
    pub location: String,
    pub bio: String,
    pub tags: Vec<Tag>,
    pub details: ProfileDetails,
}

impl ProfileData {
    /// Parse a profile from its JSON wire form
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if the JSON does not match the schema, or
    /// `InvalidProfile` if tag ids are not unique.
    pub fn from_json(json: &str) -> Result<Self> {
        let profile: ProfileData = serde_json::from_str(json)?;
        profile.validate_tags()?;
        Ok(profile)
    }

    /// # Errors
    ///
    /// Returns `Serialization` if encoding fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn tag(&self, tag_id: &str) -> Option<&Tag> {
        self.tags.iter().find(|t| t.id == tag_id)
    }

    pub fn has_tag(&self, tag_id: &str) -> bool {
        self.tag(tag_id).is_some()
    }

    /// Check that tag ids are unique
    ///
    /// # Errors
    ///
    /// Returns `InvalidProfile` naming the first repeated id.
    pub fn validate_tags(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for tag in &self.tags {
            if !seen.insert(tag.id.as_str()) {
                return Err(ProfileError::InvalidProfile {
                    reason: format!("duplicate tag id: {}", tag.id),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ProfileData {
        ProfileData {
            name: "田中太郎".to_string(),
            age: 25,
            location: "東京都".to_string(),
            bio: "よろしくお願いします".to_string(),
            tags: vec![
                Tag::new("t1", "カフェ巡り", "https://img.example/cafe.png"),
                Tag::new("t2", "映画", "https://img.example/movie.png"),
            ],
            details: ProfileDetails::new(
                170,
                "会社員",
                "大卒",
                vec!["日本語".to_string()],
                false,
                "たまに",
            ),
        }
    }

    #[test]
    fn test_json_round_trip_uses_camel_case_tags() {
        let profile = sample();
        let json = profile.to_json_pretty().unwrap();
        assert!(json.contains("imageUrl"));
        let back = ProfileData::from_json(&json).unwrap();
        assert_eq!(back, profile);
    }

    #[test]
    fn test_validate_tags_rejects_duplicate_ids() {
        let mut profile = sample();
        profile.tags.push(Tag::new("t1", "読書", ""));
        let err = profile.validate_tags().unwrap_err();
        assert!(matches!(err, ProfileError::InvalidProfile { .. }));
    }

    #[test]
    fn test_from_json_rejects_missing_required_detail() {
        let json = r#"{"name":"a","age":20,"location":"b","bio":"","tags":[],
            "details":{"occupation":"x","education":"y","languages":[],"smoking":false,"drinking":"z"}}"#;
        let err = ProfileData::from_json(json).unwrap_err();
        assert!(matches!(err, ProfileError::Serialization { .. }));
    }

    #[test]
    fn test_tag_lookup() {
        let profile = sample();
        assert!(profile.has_tag("t2"));
        assert!(!profile.has_tag("t9"));
        assert_eq!(profile.tag("t1").map(|t| t.name.as_str()), Some("カフェ巡り"));
    }
}
