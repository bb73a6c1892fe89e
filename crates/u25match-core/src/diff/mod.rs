//! Profile diff engine.
//!
//! Compares a baseline profile with a working copy and produces the minimal
//! partial update to send to a profile service, plus the field list and
//! text used for the save confirmation prompt.
//!
//! ```
//! use u25match_core::diff::{get_profile_diff, get_change_summary};
//! # use u25match_core::model::{ProfileData, ProfileDetails};
//! # let original = ProfileData {
//! #     name: "田中太郎".into(), age: 25, location: "東京都".into(), bio: "X".into(),
//! #     tags: vec![],
//! #     details: ProfileDetails::new(170, "会社員", "大卒", vec!["日本語".into()], false, "たまに"),
//! # };
//! let mut current = original.clone();
//! current.age = 26;
//!
//! let diff = get_profile_diff(&original, &current);
//! assert_eq!(diff.age, Some(26));
//! assert_eq!(get_change_summary(&original, &current), vec!["age"]);
//! ```
//!
//! ## Guarantees
//!
//! - Pure: neither input is mutated, nothing is logged.
//! - `get_profile_diff(p, p)` is empty for every `p`.
//! - List comparison is positional; reordering tags counts as a change.

pub mod apply;
pub mod engine;
pub mod fields;
pub mod human_summary;
pub mod model;

pub use engine::{get_change_summary, get_profile_diff, has_profile_changes};
pub use fields::{DetailField, ProfileField};
pub use human_summary::render_change_summary;
pub use model::{ProfileDetailsDiff, ProfileDiff};
