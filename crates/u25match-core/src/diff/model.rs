//! Profile diff output types.
//!
//! A `ProfileDiff` is the JSON `Partial<ProfileData>` sent to a profile
//! service: only changed keys are serialized, in declaration order.
//!
//! Optional details fields use `Option<Option<T>>`:
//! - `None`: unchanged, key omitted
//! - `Some(None)`: cleared, serialized as `null`
//! - `Some(Some(v))`: set to `v`

use serde::{Deserialize, Deserializer, Serialize};

use crate::diff::fields::{DetailField, ProfileField};
use crate::model::{Tag, TravelPreference};

/// Keep "present but null" distinct from "absent" when deserializing.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Changed top-level fields between two profiles
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProfileDiff {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Full replacement tag list when any position changed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    /// Only the changed subset of details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<ProfileDetailsDiff>,
}

impl ProfileDiff {
    pub fn is_empty(&self) -> bool {
        self.changed_fields().is_empty()
    }

    /// Changed top-level fields in declaration order
    pub fn changed_fields(&self) -> Vec<ProfileField> {
        let mut fields = Vec::new();
        if self.name.is_some() {
            fields.push(ProfileField::Name);
        }
        if self.age.is_some() {
            fields.push(ProfileField::Age);
        }
        if self.location.is_some() {
            fields.push(ProfileField::Location);
        }
        if self.bio.is_some() {
            fields.push(ProfileField::Bio);
        }
        if self.tags.is_some() {
            fields.push(ProfileField::Tags);
        }
        if self.details.is_some() {
            fields.push(ProfileField::Details);
        }
        fields
    }
}

/// Changed fields inside `ProfileDetails`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDetailsDiff {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smoking: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drinking: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub weight: Option<Option<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub body_type: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub blood_type: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub hometown: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub income: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub family_structure: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub pets: Option<Option<Vec<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub children: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub travel_preferences: Option<Option<Vec<TravelPreference>>>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub sleep_schedule: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub marriage_timeline: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub marriage_views: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub living_together: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub marriage_history: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub marriage_intention: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "present")]
    pub want_children: Option<Option<String>>,
}

impl ProfileDetailsDiff {
    pub fn is_empty(&self) -> bool {
        self.changed_fields().is_empty()
    }

    /// Changed detail fields in declaration order
    pub fn changed_fields(&self) -> Vec<DetailField> {
        let flags = [
            (DetailField::Height, self.height.is_some()),
            (DetailField::Occupation, self.occupation.is_some()),
            (DetailField::Education, self.education.is_some()),
            (DetailField::Languages, self.languages.is_some()),
            (DetailField::Smoking, self.smoking.is_some()),
            (DetailField::Drinking, self.drinking.is_some()),
            (DetailField::Weight, self.weight.is_some()),
            (DetailField::BodyType, self.body_type.is_some()),
            (DetailField::BloodType, self.blood_type.is_some()),
            (DetailField::Hometown, self.hometown.is_some()),
            (DetailField::Income, self.income.is_some()),
            (DetailField::FamilyStructure, self.family_structure.is_some()),
            (DetailField::Pets, self.pets.is_some()),
            (DetailField::Children, self.children.is_some()),
            (DetailField::TravelPreferences, self.travel_preferences.is_some()),
            (DetailField::SleepSchedule, self.sleep_schedule.is_some()),
            (DetailField::MarriageTimeline, self.marriage_timeline.is_some()),
            (DetailField::MarriageViews, self.marriage_views.is_some()),
            (DetailField::LivingTogether, self.living_together.is_some()),
            (DetailField::MarriageHistory, self.marriage_history.is_some()),
            (DetailField::MarriageIntention, self.marriage_intention.is_some()),
            (DetailField::WantChildren, self.want_children.is_some()),
        ];
        flags
            .into_iter()
            .filter_map(|(field, changed)| changed.then_some(field))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_diff_serializes_to_empty_object() {
        let diff = ProfileDiff::default();
        assert!(diff.is_empty());
        assert_eq!(serde_json::to_value(&diff).unwrap(), json!({}));
    }

    #[test]
    fn test_cleared_optional_serializes_as_null() {
        let diff = ProfileDiff {
            details: Some(ProfileDetailsDiff {
                weight: Some(None),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&diff).unwrap(),
            json!({"details": {"weight": null}})
        );
    }

    #[test]
    fn test_null_and_absent_stay_distinct_on_parse() {
        let diff: ProfileDetailsDiff =
            serde_json::from_value(json!({"weight": null, "bodyType": "普通"})).unwrap();
        assert_eq!(diff.weight, Some(None));
        assert_eq!(diff.body_type, Some(Some("普通".to_string())));
        assert_eq!(diff.hometown, None);
        assert_eq!(
            diff.changed_fields(),
            vec![DetailField::Weight, DetailField::BodyType]
        );
    }

    #[test]
    fn test_keys_follow_declaration_order() {
        let diff = ProfileDiff {
            bio: Some("b".to_string()),
            name: Some("n".to_string()),
            ..Default::default()
        };
        let text = serde_json::to_string(&diff).unwrap();
        assert_eq!(text, r#"{"name":"n","bio":"b"}"#);
        assert_eq!(
            diff.changed_fields(),
            vec![ProfileField::Name, ProfileField::Bio]
        );
    }
}
