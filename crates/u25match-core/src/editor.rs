//! Edit-form state holder and save pipeline
//!
//! A [`ProfileEditor`] owns two snapshots: the baseline (last persisted
//! value) and the working copy the form mutates. Saving diffs the two,
//! forwards a non-empty diff to a [`ProfileService`] and, on success,
//! promotes the working copy to baseline.

use std::time::Instant;

use crate::apply::{apply_detail, apply_edit};
use crate::commands::{DetailEdit, ProfileEdit};
use crate::diff::{get_profile_diff, render_change_summary, ProfileDiff, ProfileField};
use crate::errors::{ExError, Result};
use crate::model::{ProfileData, Tag};
use crate::service::ProfileService;
use crate::{log_op_end, log_op_error, log_op_start};

/// Result of [`ProfileEditor::save`]
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    /// Working copy equals baseline; the service was not called
    NoChanges,
    /// The diff was accepted by the service
    Saved {
        changed_fields: Vec<ProfileField>,
        /// Full profile as returned by the service
        persisted: ProfileData,
    },
}

/// Working copy of a profile seeded from a baseline
#[derive(Debug, Clone)]
pub struct ProfileEditor {
    baseline: ProfileData,
    current: ProfileData,
}

impl ProfileEditor {
    /// Start editing. The working copy is an independent clone.
    pub fn new(baseline: ProfileData) -> Self {
        Self {
            current: baseline.clone(),
            baseline,
        }
    }

    pub fn baseline(&self) -> &ProfileData {
        &self.baseline
    }

    pub fn current(&self) -> &ProfileData {
        &self.current
    }

    /// Apply one edit to the working copy.
    ///
    /// # Errors
    ///
    /// Tag-id errors from [`apply_edit`]; the working copy is unchanged on error.
    pub fn apply_edit(&mut self, edit: ProfileEdit) -> Result<()> {
        self.current = apply_edit(self.current.clone(), edit)?;
        Ok(())
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.current.name = name.into();
    }

    pub fn set_age(&mut self, age: u32) {
        self.current.age = age;
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.current.location = location.into();
    }

    pub fn set_bio(&mut self, bio: impl Into<String>) {
        self.current.bio = bio.into();
    }

    /// # Errors
    ///
    /// `InvalidProfile` if `tags` repeats an id.
    pub fn set_tags(&mut self, tags: Vec<Tag>) -> Result<()> {
        self.apply_edit(ProfileEdit::SetTags(tags))
    }

    /// # Errors
    ///
    /// `DuplicateTag` if a tag with the same id is already present.
    pub fn add_tag(&mut self, tag: Tag) -> Result<()> {
        self.apply_edit(ProfileEdit::AddTag(tag))
    }

    /// # Errors
    ///
    /// `TagNotFound` if no tag has this id.
    pub fn remove_tag(&mut self, tag_id: &str) -> Result<()> {
        self.apply_edit(ProfileEdit::RemoveTag {
            tag_id: tag_id.to_string(),
        })
    }

    pub fn set_detail(&mut self, edit: DetailEdit) {
        apply_detail(&mut self.current.details, edit);
    }

    pub fn diff(&self) -> ProfileDiff {
        get_profile_diff(&self.baseline, &self.current)
    }

    pub fn is_dirty(&self) -> bool {
        !self.diff().is_empty()
    }

    /// Changed top-level field names for the confirmation prompt
    pub fn change_summary(&self) -> Vec<String> {
        self.diff()
            .changed_fields()
            .into_iter()
            .map(|f| f.as_str().to_string())
            .collect()
    }

    /// Confirmation text for the pending changes
    pub fn confirmation_text(&self) -> String {
        render_change_summary(&self.diff())
    }

    /// Replace the whole working copy, e.g. with a submitted form.
    ///
    /// # Errors
    ///
    /// `InvalidProfile` if `form` repeats a tag id; the working copy is
    /// unchanged on error.
    pub fn replace_working_copy(&mut self, form: ProfileData) -> Result<()> {
        form.validate_tags()?;
        self.current = form;
        Ok(())
    }

    /// Discard the working copy
    pub fn cancel(&mut self) {
        self.current = self.baseline.clone();
    }

    /// Persist pending changes through `service`.
    ///
    /// An empty diff short-circuits to `NoChanges`. On failure both
    /// snapshots are left as they were so the user can retry.
    ///
    /// # Errors
    ///
    /// Whatever `service.update_profile` returns, with `uid` attached.
    #[allow(clippy::result_large_err)]
    pub fn save(
        &mut self,
        uid: &str,
        service: &dyn ProfileService,
    ) -> std::result::Result<SaveOutcome, ExError> {
        let diff = self.diff();
        if diff.is_empty() {
            return Ok(SaveOutcome::NoChanges);
        }

        let changed_fields = diff.changed_fields();
        let field_names: Vec<&str> = changed_fields.iter().map(|f| f.as_str()).collect();
        let started = Instant::now();
        log_op_start!(
            "save_profile",
            uid = uid,
            service_mode = service.name(),
            changed_fields = ?field_names
        );

        match service.update_profile(uid, &diff) {
            Ok(persisted) => {
                self.baseline = self.current.clone();
                log_op_end!(
                    "save_profile",
                    duration_ms = started.elapsed().as_millis() as u64,
                    uid = uid
                );
                Ok(SaveOutcome::Saved {
                    changed_fields,
                    persisted,
                })
            }
            Err(err) => {
                let err = if err.uid().is_none() {
                    err.with_uid(uid)
                } else {
                    err
                };
                log_op_error!(
                    "save_profile",
                    err.clone(),
                    duration_ms = started.elapsed().as_millis() as u64,
                    uid = uid
                );
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ProfileError;
    use crate::model::ProfileDetails;

    fn baseline() -> ProfileData {
        ProfileData {
            name: "田中太郎".to_string(),
            age: 25,
            location: "東京都".to_string(),
            bio: "X".to_string(),
            tags: vec![Tag::new("t1", "カフェ巡り", "")],
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
    fn test_edits_do_not_touch_baseline() {
        let mut editor = ProfileEditor::new(baseline());
        editor.set_name("佐藤");
        editor.set_detail(DetailEdit::Weight(Some(60)));
        assert_eq!(editor.baseline().name, "田中太郎");
        assert_eq!(editor.baseline().details.weight, None);
        assert_eq!(editor.current().details.weight, Some(60));
    }

    #[test]
    fn test_add_duplicate_tag_leaves_working_copy() {
        let mut editor = ProfileEditor::new(baseline());
        let err = editor
            .add_tag(Tag::new("t1", "映画", ""))
            .unwrap_err();
        assert_eq!(
            err,
            ProfileError::DuplicateTag {
                tag_id: "t1".to_string()
            }
        );
        assert_eq!(editor.current().tags.len(), 1);
        assert!(!editor.is_dirty());
    }

    #[test]
    fn test_replace_working_copy_keeps_baseline() {
        let mut editor = ProfileEditor::new(baseline());
        let mut form = baseline();
        form.age = 26;
        editor.replace_working_copy(form).unwrap();
        assert_eq!(editor.baseline().age, 25);
        assert_eq!(editor.change_summary(), vec!["age"]);
    }

    #[test]
    fn test_cancel_restores_baseline() {
        let mut editor = ProfileEditor::new(baseline());
        editor.set_bio("changed");
        assert!(editor.is_dirty());
        editor.cancel();
        assert!(!editor.is_dirty());
        assert_eq!(editor.current(), editor.baseline());
    }

    #[test]
    fn test_remove_tag_changes_tags_only() {
        let mut editor = ProfileEditor::new(baseline());
        editor.remove_tag("t1").unwrap();
        assert_eq!(editor.change_summary(), vec!["tags"]);
        assert!(matches!(
            editor.remove_tag("t1"),
            Err(ProfileError::TagNotFound { .. })
        ));
    }
}
