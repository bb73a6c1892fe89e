//! Profile persistence boundary
//!
//! [`ProfileService`] is the contract the save pipeline talks to. Concrete
//! implementations are chosen once at startup; this crate ships the
//! in-memory [`MockProfileService`], the store crate adds SQLite and HTTP.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::diff::ProfileDiff;
use crate::errors::{ExError, ExErrorKind, ProfileError};
use crate::model::{ProfileData, ProfileDetails};

/// Fetch and partially update stored profiles.
#[allow(clippy::result_large_err)]
pub trait ProfileService: Send + Sync {
    /// Short name used in log lines (`mock`, `sqlite`, `http`)
    fn name(&self) -> &'static str;

    /// Load the full profile for `uid`.
    ///
    /// # Errors
    ///
    /// `ProfileNotFound` if no profile exists; a service failure kind
    /// (`Persistence`, `ExternalService`, ...) if the backend fails.
    fn fetch_profile(&self, uid: &str) -> Result<ProfileData, ExError>;

    /// Apply a partial update and return the full updated profile.
    ///
    /// # Errors
    ///
    /// `ProfileNotFound` if no profile exists; a service failure kind if
    /// the backend rejects or cannot store the update.
    fn update_profile(&self, uid: &str, diff: &ProfileDiff) -> Result<ProfileData, ExError>;
}

/// Uid of the sample profile served by [`MockProfileService::with_fixtures`]
pub const FIXTURE_UID: &str = "user-1";

/// Sample profile: 田中太郎, 25, 東京都
pub fn fixture_profile() -> ProfileData {
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

/// In-memory service used for development and tests
#[derive(Default)]
pub struct MockProfileService {
    profiles: Mutex<HashMap<String, ProfileData>>,
    fail_next: Mutex<Option<ExErrorKind>>,
    last_diff: Mutex<Option<ProfileDiff>>,
    updates: AtomicUsize,
}

impl MockProfileService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style seeding
    pub fn with_profile(mut self, uid: impl Into<String>, profile: ProfileData) -> Self {
        // Owned, so no other thread holds the lock; rebuilding also clears poison.
        let mut profiles = std::mem::take(&mut self.profiles)
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);
        profiles.insert(uid.into(), profile);
        self.profiles = Mutex::new(profiles);
        self
    }

    /// Mock seeded with the sample profiles, used when no real backend is
    /// configured
    pub fn with_fixtures() -> Self {
        Self::new().with_profile(FIXTURE_UID, fixture_profile())
    }

    /// Make the next `update_profile` call fail with `kind`
    ///
    /// # Errors
    ///
    /// `Concurrency` if the failure slot's lock is poisoned.
    #[allow(clippy::result_large_err)]
    pub fn fail_next_update(&self, kind: ExErrorKind) -> Result<(), ExError> {
        *lock(&self.fail_next, "fail_next_update")? = Some(kind);
        Ok(())
    }

    /// Number of `update_profile` calls that reached the store
    pub fn update_count(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }

    /// Diff received by the most recent successful update
    pub fn last_diff(&self) -> Option<ProfileDiff> {
        self.last_diff.lock().ok().and_then(|d| d.clone())
    }

    /// Current stored value, bypassing the trait
    pub fn stored(&self, uid: &str) -> Option<ProfileData> {
        self.profiles.lock().ok().and_then(|p| p.get(uid).cloned())
    }
}

#[allow(clippy::result_large_err)]
fn lock<'a, T>(m: &'a Mutex<T>, op: &str) -> Result<MutexGuard<'a, T>, ExError> {
    m.lock().map_err(|_| {
        ExError::new(ExErrorKind::Concurrency)
            .with_op(op)
            .with_message("mock profile store lock poisoned")
    })
}

impl ProfileService for MockProfileService {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn fetch_profile(&self, uid: &str) -> Result<ProfileData, ExError> {
        let profiles = lock(&self.profiles, "fetch_profile")?;
        profiles.get(uid).cloned().ok_or_else(|| {
            ExError::from(ProfileError::ProfileNotFound {
                uid: uid.to_string(),
            })
            .with_op("fetch_profile")
        })
    }

    fn update_profile(&self, uid: &str, diff: &ProfileDiff) -> Result<ProfileData, ExError> {
        if let Some(kind) = lock(&self.fail_next, "update_profile")?.take() {
            return Err(ExError::new(kind)
                .with_op("update_profile")
                .with_uid(uid)
                .with_message("injected failure"));
        }

        let mut profiles = lock(&self.profiles, "update_profile")?;
        let stored = profiles.get_mut(uid).ok_or_else(|| {
            ExError::from(ProfileError::ProfileNotFound {
                uid: uid.to_string(),
            })
            .with_op("update_profile")
        })?;

        stored.apply_diff(diff);
        self.updates.fetch_add(1, Ordering::SeqCst);
        *lock(&self.last_diff, "update_profile")? = Some(diff.clone());
        Ok(stored.clone())
    }
}
