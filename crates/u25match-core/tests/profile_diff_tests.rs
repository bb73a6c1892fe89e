//! Diff engine behaviour on whole profiles.
//!
//! Pure tests: no services, no logging.

mod common;

use common::{rich_profile, tanaka};
use serde_json::json;
use u25match_core::diff::{
    get_change_summary, get_profile_diff, has_profile_changes, render_change_summary,
    DetailField, ProfileDetailsDiff, ProfileDiff,
};
use u25match_core::{Tag, TravelPreference};

// ---------------------------------------------------------------------------
// No-op and detection
// ---------------------------------------------------------------------------

#[test]
fn test_diff_against_itself_is_empty() {
    let p = rich_profile();
    assert!(get_profile_diff(&p, &p).is_empty());
    assert!(get_profile_diff(&p, &p.clone()).is_empty());
    assert!(!has_profile_changes(&p, &p.clone()));
    assert!(get_change_summary(&p, &p).is_empty());
}

#[test]
fn test_has_changes_agrees_with_diff() {
    let a = tanaka();
    let mut b = tanaka();
    b.location = "大阪府".to_string();
    assert!(!get_profile_diff(&a, &b).is_empty());
    assert!(has_profile_changes(&a, &b));
}

// ---------------------------------------------------------------------------
// Field isolation and nested partiality
// ---------------------------------------------------------------------------

#[test]
fn test_end_to_end_age_change() {
    let original = tanaka();
    let mut current = tanaka();
    current.age = 26;

    let diff = get_profile_diff(&original, &current);
    assert_eq!(
        diff,
        ProfileDiff {
            age: Some(26),
            ..Default::default()
        }
    );
    assert_eq!(serde_json::to_value(&diff).unwrap(), json!({"age": 26}));
    assert!(has_profile_changes(&original, &current));
    assert_eq!(get_change_summary(&original, &current), vec!["age"]);
}

#[test]
fn test_single_detail_change_carries_only_that_field() {
    let original = rich_profile();
    let mut current = rich_profile();
    current.details.weight = Some(64);

    let diff = get_profile_diff(&original, &current);
    assert_eq!(diff.changed_fields().len(), 1);
    assert_eq!(
        diff.details,
        Some(ProfileDetailsDiff {
            weight: Some(Some(64)),
            ..Default::default()
        })
    );
    assert_eq!(
        serde_json::to_value(&diff).unwrap(),
        json!({"details": {"weight": 64}})
    );
}

#[test]
fn test_unset_to_empty_string_is_a_change() {
    let original = tanaka();
    let mut current = tanaka();
    current.details.hometown = Some(String::new());

    let diff = get_profile_diff(&original, &current);
    let details = diff.details.expect("details should be reported");
    assert_eq!(details.changed_fields(), vec![DetailField::Hometown]);
    assert_eq!(details.hometown, Some(Some(String::new())));
}

#[test]
fn test_clearing_optional_detail_reports_null() {
    let original = rich_profile();
    let mut current = rich_profile();
    current.details.blood_type = None;

    let diff = get_profile_diff(&original, &current);
    assert_eq!(
        serde_json::to_value(&diff).unwrap(),
        json!({"details": {"bloodType": null}})
    );
}

// ---------------------------------------------------------------------------
// Arrays
// ---------------------------------------------------------------------------

#[test]
fn test_tag_reorder_is_reported() {
    let original = rich_profile();
    let mut current = rich_profile();
    current.tags.reverse();

    let diff = get_profile_diff(&original, &current);
    assert_eq!(get_change_summary(&original, &current), vec!["tags"]);
    let names: Vec<_> = diff.tags.unwrap().into_iter().map(|t| t.name).collect();
    assert_eq!(names, vec!["B", "A"]);
}

#[test]
fn test_tag_id_and_image_changes_are_ignored() {
    let original = rich_profile();
    let mut current = rich_profile();
    current.tags[0] = Tag::new("tag-z", "A", "https://img.example/other.png");
    assert!(!has_profile_changes(&original, &current));
}

#[test]
fn test_language_reorder_is_reported() {
    let mut original = tanaka();
    original.details.languages = vec!["日本語".to_string(), "英語".to_string()];
    let mut current = original.clone();
    current.details.languages.reverse();

    let details = get_profile_diff(&original, &current).details.unwrap();
    assert_eq!(details.changed_fields(), vec![DetailField::Languages]);
}

#[test]
fn test_travel_preferences_compare_positionally() {
    let original = rich_profile();
    let mut current = rich_profile();
    current.details.travel_preferences =
        Some(vec![TravelPreference::Irregular, TravelPreference::Weekends]);

    let details = get_profile_diff(&original, &current).details.unwrap();
    assert_eq!(
        details.travel_preferences,
        Some(Some(vec![
            TravelPreference::Irregular,
            TravelPreference::Weekends
        ]))
    );
}

#[test]
fn test_absent_pets_vs_empty_pets_is_a_change() {
    let original = tanaka();
    let mut current = tanaka();
    current.details.pets = Some(vec![]);
    assert!(has_profile_changes(&original, &current));
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

#[test]
fn test_summary_uses_declaration_order() {
    let original = tanaka();
    let mut current = tanaka();
    current.bio = "趣味はカフェ巡りです".to_string();
    current.name = "田中次郎".to_string();

    assert_eq!(get_change_summary(&original, &current), vec!["name", "bio"]);
}

#[test]
fn test_summary_lists_details_once() {
    let original = rich_profile();
    let mut current = rich_profile();
    current.details.height = 171;
    current.details.smoking = true;
    current.details.want_children = Some("欲しい".to_string());
    current.age = 30;

    assert_eq!(
        get_change_summary(&original, &current),
        vec!["age", "details"]
    );
}

#[test]
fn test_confirmation_text_for_mixed_changes() {
    let original = rich_profile();
    let mut current = rich_profile();
    current.location = "福岡県".to_string();
    current.details.height = 172;
    current.details.pets = None;

    let text = render_change_summary(&get_profile_diff(&original, &current));
    assert_eq!(
        text,
        "以下の項目を変更します:\n- 居住地\n- 詳細情報 (身長, ペット)\n"
    );
}

#[test]
fn test_inputs_are_not_mutated() {
    let original = rich_profile();
    let mut current = rich_profile();
    current.bio = "new".to_string();
    let (a, b) = (original.clone(), current.clone());
    let _ = get_profile_diff(&original, &current);
    assert_eq!(original, a);
    assert_eq!(current, b);
}
