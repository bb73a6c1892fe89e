//! Merging a partial update into a full profile.
//!
//! Services receive a `ProfileDiff` and must answer with the full updated
//! profile; this is the merge they use.

use crate::diff::model::{ProfileDetailsDiff, ProfileDiff};
use crate::model::{ProfileData, ProfileDetails};

fn merge<T: Clone>(target: &mut T, change: &Option<T>) {
    if let Some(value) = change {
        *target = value.clone();
    }
}

impl ProfileDetails {
    /// Overwrite every field present in `diff`. Cleared optionals become `None`.
    pub fn apply_diff(&mut self, diff: &ProfileDetailsDiff) {
        merge(&mut self.height, &diff.height);
        merge(&mut self.occupation, &diff.occupation);
        merge(&mut self.education, &diff.education);
        merge(&mut self.languages, &diff.languages);
        merge(&mut self.smoking, &diff.smoking);
        merge(&mut self.drinking, &diff.drinking);
        merge(&mut self.weight, &diff.weight);
        merge(&mut self.body_type, &diff.body_type);
        merge(&mut self.blood_type, &diff.blood_type);
        merge(&mut self.hometown, &diff.hometown);
        merge(&mut self.income, &diff.income);
        merge(&mut self.family_structure, &diff.family_structure);
        merge(&mut self.pets, &diff.pets);
        merge(&mut self.children, &diff.children);
        merge(&mut self.travel_preferences, &diff.travel_preferences);
        merge(&mut self.sleep_schedule, &diff.sleep_schedule);
        merge(&mut self.marriage_timeline, &diff.marriage_timeline);
        merge(&mut self.marriage_views, &diff.marriage_views);
        merge(&mut self.living_together, &diff.living_together);
        merge(&mut self.marriage_history, &diff.marriage_history);
        merge(&mut self.marriage_intention, &diff.marriage_intention);
        merge(&mut self.want_children, &diff.want_children);
    }
}

impl ProfileData {
    /// Overwrite every field present in `diff`, leaving the rest untouched.
    pub fn apply_diff(&mut self, diff: &ProfileDiff) {
        merge(&mut self.name, &diff.name);
        merge(&mut self.age, &diff.age);
        merge(&mut self.location, &diff.location);
        merge(&mut self.bio, &diff.bio);
        merge(&mut self.tags, &diff.tags);
        if let Some(details) = &diff.details {
            self.details.apply_diff(details);
        }
    }

    /// Copy of `self` with `diff` applied
    pub fn with_diff(&self, diff: &ProfileDiff) -> ProfileData {
        let mut next = self.clone();
        next.apply_diff(diff);
        next
    }
}
