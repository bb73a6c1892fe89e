use u25match_core::{ProfileData, ProfileDetails, Tag, TravelPreference};

/// The profile used throughout the save-flow examples
#[allow(dead_code)]
pub fn tanaka() -> ProfileData {
    ProfileData {
        name: "田中太郎".to_string(),
        age: 25,
        location: "東京都".to_string(),
        bio: "X".to_string(),
        tags: vec![],
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

/// A profile with tags and most optional details filled in
#[allow(dead_code)]
pub fn rich_profile() -> ProfileData {
    let mut profile = tanaka();
    profile.tags = vec![
        Tag::new("tag-a", "A", "https://img.example/a.png"),
        Tag::new("tag-b", "B", "https://img.example/b.png"),
    ];
    let d = &mut profile.details;
    d.weight = Some(62);
    d.body_type = Some("普通".to_string());
    d.blood_type = Some("A型".to_string());
    d.hometown = Some("神奈川県".to_string());
    d.pets = Some(vec!["猫".to_string()]);
    d.travel_preferences = Some(vec![TravelPreference::Weekends, TravelPreference::Irregular]);
    d.marriage_intention = Some("いい人がいれば".to_string());
    profile
}
