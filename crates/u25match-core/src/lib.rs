//! U25Match Core - profile edit kernel
//!
//! This crate holds the framework-independent part of the profile editor:
//! - `ProfileData` model with its wire (JSON) form
//! - Diff engine producing minimal partial updates and change summaries
//! - Edit commands and the `ProfileEditor` working-copy holder
//! - `ProfileService` persistence boundary with an in-memory implementation
//! - `AppContext` session state (auth, own profile, reactions)
//! - Error and logging facilities shared with the store and CLI crates

pub mod apply;
pub mod commands;
pub mod context;
pub mod diff;
pub mod editor;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod service;

#[doc(hidden)]
pub use tracing as __tracing;
pub use u25match_core_types as core_types;

// Re-export commonly used types
pub use commands::{DetailEdit, ProfileEdit};
pub use context::AppContext;
pub use diff::{get_change_summary, get_profile_diff, has_profile_changes, ProfileDiff};
pub use editor::{ProfileEditor, SaveOutcome};
pub use errors::{ExError, ExErrorKind, ProfileError, Result};
pub use model::{ProfileData, ProfileDetails, Tag, TravelPreference};
pub use service::{MockProfileService, ProfileService, FIXTURE_UID};
