//! Field identifiers for profiles and their details section.
//!
//! Declaration order here is the order diffs and summaries report fields in.

/// Top-level profile field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProfileField {
    Name,
    Age,
    Location,
    Bio,
    Tags,
    Details,
}

impl ProfileField {
    pub const ALL: [ProfileField; 6] = [
        ProfileField::Name,
        ProfileField::Age,
        ProfileField::Location,
        ProfileField::Bio,
        ProfileField::Tags,
        ProfileField::Details,
    ];

    /// Wire name (JSON key)
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileField::Name => "name",
            ProfileField::Age => "age",
            ProfileField::Location => "location",
            ProfileField::Bio => "bio",
            ProfileField::Tags => "tags",
            ProfileField::Details => "details",
        }
    }

    /// Label shown in confirmation prompts
    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::Name => "名前",
            ProfileField::Age => "年齢",
            ProfileField::Location => "居住地",
            ProfileField::Bio => "自己紹介",
            ProfileField::Tags => "趣味タグ",
            ProfileField::Details => "詳細情報",
        }
    }
}

impl std::fmt::Display for ProfileField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field inside `ProfileDetails`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DetailField {
    Height,
    Occupation,
    Education,
    Languages,
    Smoking,
    Drinking,
    Weight,
    BodyType,
    BloodType,
    Hometown,
    Income,
    FamilyStructure,
    Pets,
    Children,
    TravelPreferences,
    SleepSchedule,
    MarriageTimeline,
    MarriageViews,
    LivingTogether,
    MarriageHistory,
    MarriageIntention,
    WantChildren,
}

impl DetailField {
    pub const ALL: [DetailField; 22] = [
        DetailField::Height,
        DetailField::Occupation,
        DetailField::Education,
        DetailField::Languages,
        DetailField::Smoking,
        DetailField::Drinking,
        DetailField::Weight,
        DetailField::BodyType,
        DetailField::BloodType,
        DetailField::Hometown,
        DetailField::Income,
        DetailField::FamilyStructure,
        DetailField::Pets,
        DetailField::Children,
        DetailField::TravelPreferences,
        DetailField::SleepSchedule,
        DetailField::MarriageTimeline,
        DetailField::MarriageViews,
        DetailField::LivingTogether,
        DetailField::MarriageHistory,
        DetailField::MarriageIntention,
        DetailField::WantChildren,
    ];

    /// Wire name (camelCase JSON key)
    pub fn as_str(&self) -> &'static str {
        match self {
            DetailField::Height => "height",
            DetailField::Occupation => "occupation",
            DetailField::Education => "education",
            DetailField::Languages => "languages",
            DetailField::Smoking => "smoking",
            DetailField::Drinking => "drinking",
            DetailField::Weight => "weight",
            DetailField::BodyType => "bodyType",
            DetailField::BloodType => "bloodType",
            DetailField::Hometown => "hometown",
            DetailField::Income => "income",
            DetailField::FamilyStructure => "familyStructure",
            DetailField::Pets => "pets",
            DetailField::Children => "children",
            DetailField::TravelPreferences => "travelPreferences",
            DetailField::SleepSchedule => "sleepSchedule",
            DetailField::MarriageTimeline => "marriageTimeline",
            DetailField::MarriageViews => "marriageViews",
            DetailField::LivingTogether => "livingTogether",
            DetailField::MarriageHistory => "marriageHistory",
            DetailField::MarriageIntention => "marriageIntention",
            DetailField::WantChildren => "wantChildren",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DetailField::Height => "身長",
            DetailField::Occupation => "職業",
            DetailField::Education => "学歴",
            DetailField::Languages => "言語",
            DetailField::Smoking => "喫煙",
            DetailField::Drinking => "飲酒",
            DetailField::Weight => "体重",
            DetailField::BodyType => "体型",
            DetailField::BloodType => "血液型",
            DetailField::Hometown => "出身地",
            DetailField::Income => "年収",
            DetailField::FamilyStructure => "家族構成",
            DetailField::Pets => "ペット",
            DetailField::Children => "子供の有無",
            DetailField::TravelPreferences => "休日",
            DetailField::SleepSchedule => "生活リズム",
            DetailField::MarriageTimeline => "結婚希望時期",
            DetailField::MarriageViews => "結婚観",
            DetailField::LivingTogether => "同居",
            DetailField::MarriageHistory => "結婚歴",
            DetailField::MarriageIntention => "結婚の意思",
            DetailField::WantChildren => "子供の希望",
        }
    }

    /// Whether the field may be absent from `ProfileDetails`
    pub fn is_optional(&self) -> bool {
        !matches!(
            self,
            DetailField::Height
                | DetailField::Occupation
                | DetailField::Education
                | DetailField::Languages
                | DetailField::Smoking
                | DetailField::Drinking
        )
    }
}

impl std::fmt::Display for DetailField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_wire_names_are_unique() {
        let names: HashSet<_> = DetailField::ALL.iter().map(|f| f.as_str()).collect();
        assert_eq!(names.len(), DetailField::ALL.len());
    }

    #[test]
    fn test_declaration_order_is_sorted_order() {
        let mut sorted = ProfileField::ALL;
        sorted.sort();
        assert_eq!(sorted, ProfileField::ALL);
    }

    #[test]
    fn test_required_detail_fields() {
        let required: Vec<_> = DetailField::ALL
            .iter()
            .filter(|f| !f.is_optional())
            .map(|f| f.as_str())
            .collect();
        assert_eq!(
            required,
            vec!["height", "occupation", "education", "languages", "smoking", "drinking"]
        );
    }
}
