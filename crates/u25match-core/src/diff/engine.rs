//! Profile diff computation.
//!
//! [`get_profile_diff`] compares a baseline against a working copy and
//! returns only what changed. All functions here are pure and never fail.

use crate::diff::model::{ProfileDetailsDiff, ProfileDiff};
use crate::model::{ProfileData, ProfileDetails, Tag};

/// Positional array equality.
///
/// Equal iff both slices have the same length and `eq` holds at every
/// index. Order matters: `[a, b]` and `[b, a]` are different.
pub fn arrays_equal<T, F>(a: &[T], b: &[T], eq: F) -> bool
where
    F: Fn(&T, &T) -> bool,
{
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| eq(x, y))
}

/// Tags are compared by display name only; id and image are ignored.
pub fn tags_equal(a: &[Tag], b: &[Tag]) -> bool {
    arrays_equal(a, b, |x, y| x.name == y.name)
}

/// `Some(new)` when the values differ.
fn changed<T: PartialEq + Clone>(old: &T, new: &T) -> Option<T> {
    (old != new).then(|| new.clone())
}

/// Like [`changed`] for plain lists, using positional equality.
fn changed_list<T: PartialEq + Clone>(old: &[T], new: &[T]) -> Option<Vec<T>> {
    (!arrays_equal(old, new, |x, y| x == y)).then(|| new.to_vec())
}

/// Optional lists: both absent is equal, one absent is a change.
fn changed_optional_list<T: PartialEq + Clone>(
    old: &Option<Vec<T>>,
    new: &Option<Vec<T>>,
) -> Option<Option<Vec<T>>> {
    let equal = match (old, new) {
        (None, None) => true,
        (Some(a), Some(b)) => arrays_equal(a, b, |x, y| x == y),
        _ => false,
    };
    (!equal).then(|| new.clone())
}

/// Field-by-field diff of the details section.
///
/// Returns `None` when nothing inside details changed.
pub fn get_details_diff(
    original: &ProfileDetails,
    current: &ProfileDetails,
) -> Option<ProfileDetailsDiff> {
    let diff = ProfileDetailsDiff {
        height: changed(&original.height, &current.height),
        occupation: changed(&original.occupation, &current.occupation),
        education: changed(&original.education, &current.education),
        languages: changed_list(&original.languages, &current.languages),
        smoking: changed(&original.smoking, &current.smoking),
        drinking: changed(&original.drinking, &current.drinking),
        weight: changed(&original.weight, &current.weight),
        body_type: changed(&original.body_type, &current.body_type),
        blood_type: changed(&original.blood_type, &current.blood_type),
        hometown: changed(&original.hometown, &current.hometown),
        income: changed(&original.income, &current.income),
        family_structure: changed(&original.family_structure, &current.family_structure),
        pets: changed_optional_list(&original.pets, &current.pets),
        children: changed(&original.children, &current.children),
        travel_preferences: changed_optional_list(
            &original.travel_preferences,
            &current.travel_preferences,
        ),
        sleep_schedule: changed(&original.sleep_schedule, &current.sleep_schedule),
        marriage_timeline: changed(&original.marriage_timeline, &current.marriage_timeline),
        marriage_views: changed(&original.marriage_views, &current.marriage_views),
        living_together: changed(&original.living_together, &current.living_together),
        marriage_history: changed(&original.marriage_history, &current.marriage_history),
        marriage_intention: changed(&original.marriage_intention, &current.marriage_intention),
        want_children: changed(&original.want_children, &current.want_children),
    };

    (!diff.is_empty()).then_some(diff)
}

/// Compute the minimal changeset from `original` to `current`.
///
/// Scalars are compared by value, `tags` by name at each position, string
/// and enum lists positionally. `details` carries only its changed subset.
pub fn get_profile_diff(original: &ProfileData, current: &ProfileData) -> ProfileDiff {
    ProfileDiff {
        name: changed(&original.name, &current.name),
        age: changed(&original.age, &current.age),
        location: changed(&original.location, &current.location),
        bio: changed(&original.bio, &current.bio),
        tags: (!tags_equal(&original.tags, &current.tags)).then(|| current.tags.clone()),
        details: get_details_diff(&original.details, &current.details),
    }
}

/// True iff [`get_profile_diff`] would report at least one field.
pub fn has_profile_changes(original: &ProfileData, current: &ProfileData) -> bool {
    !get_profile_diff(original, current).is_empty()
}

/// Names of the changed top-level fields, in declaration order
/// (`name, age, location, bio, tags, details`).
pub fn get_change_summary(original: &ProfileData, current: &ProfileData) -> Vec<String> {
    get_profile_diff(original, current)
        .changed_fields()
        .into_iter()
        .map(|f| f.as_str().to_string())
        .collect()
}
