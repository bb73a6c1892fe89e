pub mod details;
pub mod profile;

pub use details::{ProfileDetails, TravelPreference};
pub use profile::{ProfileData, Tag};
