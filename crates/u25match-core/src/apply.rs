//! Functional-boundary edit application
//!
//! [`apply_edit`] takes ownership of a profile, applies one [`ProfileEdit`]
//! and returns the new profile. On error the caller's previous value (which
//! it still holds as a baseline or working copy) is untouched.
//!
//! ```
//! use u25match_core::apply::apply_edit;
//! use u25match_core::commands::ProfileEdit;
//! # use u25match_core::model::{ProfileData, ProfileDetails};
//! # let profile = ProfileData {
//! #     name: "a".into(), age: 20, location: "".into(), bio: "".into(), tags: vec![],
//! #     details: ProfileDetails::new(160, "", "", vec![], false, ""),
//! # };
//!
//! let next = apply_edit(profile, ProfileEdit::SetAge(21)).unwrap();
//! assert_eq!(next.age, 21);
//! ```

use crate::commands::{DetailEdit, ProfileEdit};
use crate::errors::{ProfileError, Result};
use crate::model::{ProfileData, ProfileDetails};

/// Apply one edit to a profile, returning the updated profile
///
/// # Errors
///
/// - `DuplicateTag`: `AddTag` with an id already on the profile
/// - `TagNotFound`: `RemoveTag` with an id not on the profile
/// - `InvalidProfile`: `SetTags` with repeated ids
pub fn apply_edit(mut profile: ProfileData, edit: ProfileEdit) -> Result<ProfileData> {
    match edit {
        ProfileEdit::SetName(name) => profile.name = name,
        ProfileEdit::SetAge(age) => profile.age = age,
        ProfileEdit::SetLocation(location) => profile.location = location,
        ProfileEdit::SetBio(bio) => profile.bio = bio,
        ProfileEdit::SetTags(tags) => {
            profile.tags = tags;
            profile.validate_tags()?;
        }
        ProfileEdit::AddTag(tag) => {
            if profile.has_tag(&tag.id) {
                return Err(ProfileError::DuplicateTag { tag_id: tag.id });
            }
            profile.tags.push(tag);
        }
        ProfileEdit::RemoveTag { tag_id } => {
            let before = profile.tags.len();
            profile.tags.retain(|t| t.id != tag_id);
            if profile.tags.len() == before {
                return Err(ProfileError::TagNotFound { tag_id });
            }
        }
        ProfileEdit::SetDetail(detail) => apply_detail(&mut profile.details, detail),
    }
    Ok(profile)
}

/// Replace one `details` field in place. Detail edits cannot fail.
pub(crate) fn apply_detail(details: &mut ProfileDetails, edit: DetailEdit) {
    match edit {
        DetailEdit::Height(v) => details.height = v,
        DetailEdit::Occupation(v) => details.occupation = v,
        DetailEdit::Education(v) => details.education = v,
        DetailEdit::Languages(v) => details.languages = v,
        DetailEdit::Smoking(v) => details.smoking = v,
        DetailEdit::Drinking(v) => details.drinking = v,
        DetailEdit::Weight(v) => details.weight = v,
        DetailEdit::BodyType(v) => details.body_type = v,
        DetailEdit::BloodType(v) => details.blood_type = v,
        DetailEdit::Hometown(v) => details.hometown = v,
        DetailEdit::Income(v) => details.income = v,
        DetailEdit::FamilyStructure(v) => details.family_structure = v,
        DetailEdit::Pets(v) => details.pets = v,
        DetailEdit::Children(v) => details.children = v,
        DetailEdit::TravelPreferences(v) => details.travel_preferences = v,
        DetailEdit::SleepSchedule(v) => details.sleep_schedule = v,
        DetailEdit::MarriageTimeline(v) => details.marriage_timeline = v,
        DetailEdit::MarriageViews(v) => details.marriage_views = v,
        DetailEdit::LivingTogether(v) => details.living_together = v,
        DetailEdit::MarriageHistory(v) => details.marriage_history = v,
        DetailEdit::MarriageIntention(v) => details.marriage_intention = v,
        DetailEdit::WantChildren(v) => details.want_children = v,
    }
}
