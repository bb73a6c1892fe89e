//! Per-session application state
//!
//! One [`AppContext`] is created when a user session starts and passed by
//! reference to whatever needs it. `reset()` is the sign-out path.

use std::collections::HashMap;

use u25match_core_types::{RequestContext, Sensitive};

use crate::editor::ProfileEditor;
use crate::errors::{ExError, ProfileError, Result};
use crate::model::ProfileData;
use crate::service::ProfileService;

/// Signed-in user and credential
#[derive(Debug, Default)]
pub struct AuthSession {
    uid: Option<String>,
    token: Option<Sensitive<String>>,
}

impl AuthSession {
    pub fn sign_in(&mut self, uid: impl Into<String>, token: impl Into<String>) {
        self.uid = Some(uid.into());
        self.token = Some(Sensitive::new(token.into()));
    }

    pub fn sign_out(&mut self) {
        self.uid = None;
        self.token = None;
    }

    pub fn is_signed_in(&self) -> bool {
        self.uid.is_some()
    }

    pub fn uid(&self) -> Option<&str> {
        self.uid.as_deref()
    }

    pub fn token(&self) -> Option<&Sensitive<String>> {
        self.token.as_ref()
    }

    /// # Errors
    ///
    /// `NotSignedIn` when no user is signed in.
    pub fn require_uid(&self) -> Result<&str> {
        self.uid.as_deref().ok_or(ProfileError::NotSignedIn)
    }

    /// Correlation context for a service call made by this user
    pub fn request_context(&self) -> RequestContext {
        match &self.uid {
            Some(uid) => RequestContext::for_actor(uid.clone()),
            None => RequestContext::new(),
        }
    }
}

/// The signed-in user's own profile (the baseline)
#[derive(Debug, Default)]
pub struct ProfileStore {
    profile: Option<ProfileData>,
}

impl ProfileStore {
    pub fn profile(&self) -> Option<&ProfileData> {
        self.profile.as_ref()
    }

    pub fn set_profile(&mut self, profile: ProfileData) {
        self.profile = Some(profile);
    }

    /// Open an editor seeded with a copy of the stored profile
    pub fn begin_edit(&self) -> Option<ProfileEditor> {
        self.profile.clone().map(ProfileEditor::new)
    }

    /// Adopt the editor's baseline after a successful save
    pub fn commit(&mut self, editor: &ProfileEditor) {
        self.profile = Some(editor.baseline().clone());
    }

    pub fn clear(&mut self) {
        self.profile = None;
    }
}

/// What the user did with another user's card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reaction {
    Like,
    Pass,
}

/// Likes and passes sent during this session
#[derive(Debug, Default)]
pub struct ReactionsStore {
    reactions: HashMap<String, Reaction>,
    order: Vec<String>,
}

impl ReactionsStore {
    /// Record a reaction; a later reaction to the same uid replaces the earlier one.
    pub fn react(&mut self, target_uid: impl Into<String>, reaction: Reaction) {
        let target_uid = target_uid.into();
        if self.reactions.insert(target_uid.clone(), reaction).is_none() {
            self.order.push(target_uid);
        }
    }

    pub fn like(&mut self, target_uid: impl Into<String>) {
        self.react(target_uid, Reaction::Like);
    }

    pub fn pass(&mut self, target_uid: impl Into<String>) {
        self.react(target_uid, Reaction::Pass);
    }

    pub fn reaction(&self, target_uid: &str) -> Option<Reaction> {
        self.reactions.get(target_uid).copied()
    }

    pub fn has_reacted(&self, target_uid: &str) -> bool {
        self.reactions.contains_key(target_uid)
    }

    /// Liked uids in first-reaction order
    pub fn liked(&self) -> Vec<&str> {
        self.with_reaction(Reaction::Like)
    }

    /// Passed uids in first-reaction order
    pub fn passed(&self) -> Vec<&str> {
        self.with_reaction(Reaction::Pass)
    }

    fn with_reaction(&self, wanted: Reaction) -> Vec<&str> {
        self.order
            .iter()
            .filter(|uid| self.reactions.get(uid.as_str()) == Some(&wanted))
            .map(String::as_str)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.reactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reactions.is_empty()
    }

    pub fn clear(&mut self) {
        self.reactions.clear();
        self.order.clear();
    }
}

/// All session state in one place
#[derive(Debug, Default)]
pub struct AppContext {
    pub session: AuthSession,
    pub profile: ProfileStore,
    pub reactions: ReactionsStore,
}

impl AppContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sign in and load the user's profile into the profile store.
    ///
    /// State left from any previous user is dropped first.
    ///
    /// # Errors
    ///
    /// Whatever `service.fetch_profile` returns; the session stays signed
    /// in with an empty profile store so the caller can retry the load.
    #[allow(clippy::result_large_err)]
    pub fn sign_in_and_load(
        &mut self,
        uid: &str,
        token: &str,
        service: &dyn ProfileService,
    ) -> std::result::Result<&ProfileData, ExError> {
        self.reset();
        self.session.sign_in(uid, token);
        let profile = service.fetch_profile(uid)?;
        Ok(self.profile.profile.insert(profile))
    }

    /// Drop all session state (sign-out)
    pub fn reset(&mut self) {
        self.session.sign_out();
        self.profile.clear();
        self.reactions.clear();
    }
}
