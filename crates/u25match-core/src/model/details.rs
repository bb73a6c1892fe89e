use serde::{Deserialize, Serialize};

/// When the user prefers to travel or go on dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TravelPreference {
    #[serde(rename = "土日")]
    Weekends,
    #[serde(rename = "平日")]
    Weekdays,
    #[serde(rename = "不定期")]
    Irregular,
}

impl TravelPreference {
    /// Label as shown in the app (and used on the wire)
    pub fn label(&self) -> &'static str {
        match self {
            TravelPreference::Weekends => "土日",
            TravelPreference::Weekdays => "平日",
            TravelPreference::Irregular => "不定期",
        }
    }
}

impl std::fmt::Display for TravelPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Structured "details" section of a profile
///
/// The first six fields are always present. Everything else is optional
/// and omitted from JSON when unset.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDetails {
    pub height: u32,
    pub occupation: String,
    pub education: String,
    pub languages: Vec<String>,
    pub smoking: bool,
    pub drinking: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hometown: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub income: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_structure: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pets: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_preferences: Option<Vec<TravelPreference>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep_schedule: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marriage_timeline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marriage_views: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub living_together: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marriage_history: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marriage_intention: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub want_children: Option<String>,
}

impl ProfileDetails {
    /// Details with only the required fields filled in
    pub fn new(
        height: u32,
        occupation: impl Into<String>,
        education: impl Into<String>,
        languages: Vec<String>,
        smoking: bool,
        drinking: impl Into<String>,
    ) -> Self {
        Self {
            height,
            occupation: occupation.into(),
            education: education.into(),
            languages,
            smoking,
            drinking: drinking.into(),
            ..Self::default()
        }
    }
}
