//! Edit commands for the profile form
//!
//! Each command replaces exactly one field of the working copy (or one
//! field inside `details`). Commands are applied with [`crate::apply::apply_edit`].

use crate::diff::fields::{DetailField, ProfileField};
use crate::model::{Tag, TravelPreference};

/// One user edit to a profile
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileEdit {
    SetName(String),
    SetAge(u32),
    SetLocation(String),
    SetBio(String),
    /// Replace the whole tag list
    SetTags(Vec<Tag>),
    /// Append a tag; its id must not already be present
    AddTag(Tag),
    /// Remove the tag with this id
    RemoveTag { tag_id: String },
    /// Replace one field inside `details`
    SetDetail(DetailEdit),
}

impl ProfileEdit {
    /// The top-level field this edit touches
    pub fn field(&self) -> ProfileField {
        match self {
            ProfileEdit::SetName(_) => ProfileField::Name,
            ProfileEdit::SetAge(_) => ProfileField::Age,
            ProfileEdit::SetLocation(_) => ProfileField::Location,
            ProfileEdit::SetBio(_) => ProfileField::Bio,
            ProfileEdit::SetTags(_) | ProfileEdit::AddTag(_) | ProfileEdit::RemoveTag { .. } => {
                ProfileField::Tags
            }
            ProfileEdit::SetDetail(_) => ProfileField::Details,
        }
    }
}

/// New value for a single `details` field
///
/// Optional fields take an `Option`; `None` clears the field.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailEdit {
    Height(u32),
    Occupation(String),
    Education(String),
    Languages(Vec<String>),
    Smoking(bool),
    Drinking(String),
    Weight(Option<u32>),
    BodyType(Option<String>),
    BloodType(Option<String>),
    Hometown(Option<String>),
    Income(Option<String>),
    FamilyStructure(Option<String>),
    Pets(Option<Vec<String>>),
    Children(Option<String>),
    TravelPreferences(Option<Vec<TravelPreference>>),
    SleepSchedule(Option<String>),
    MarriageTimeline(Option<String>),
    MarriageViews(Option<String>),
    LivingTogether(Option<String>),
    MarriageHistory(Option<String>),
    MarriageIntention(Option<String>),
    WantChildren(Option<String>),
}

impl DetailEdit {
    pub fn field(&self) -> DetailField {
        match self {
            DetailEdit::Height(_) => DetailField::Height,
            DetailEdit::Occupation(_) => DetailField::Occupation,
            DetailEdit::Education(_) => DetailField::Education,
            DetailEdit::Languages(_) => DetailField::Languages,
            DetailEdit::Smoking(_) => DetailField::Smoking,
            DetailEdit::Drinking(_) => DetailField::Drinking,
            DetailEdit::Weight(_) => DetailField::Weight,
            DetailEdit::BodyType(_) => DetailField::BodyType,
            DetailEdit::BloodType(_) => DetailField::BloodType,
            DetailEdit::Hometown(_) => DetailField::Hometown,
            DetailEdit::Income(_) => DetailField::Income,
            DetailEdit::FamilyStructure(_) => DetailField::FamilyStructure,
            DetailEdit::Pets(_) => DetailField::Pets,
            DetailEdit::Children(_) => DetailField::Children,
            DetailEdit::TravelPreferences(_) => DetailField::TravelPreferences,
            DetailEdit::SleepSchedule(_) => DetailField::SleepSchedule,
            DetailEdit::MarriageTimeline(_) => DetailField::MarriageTimeline,
            DetailEdit::MarriageViews(_) => DetailField::MarriageViews,
            DetailEdit::LivingTogether(_) => DetailField::LivingTogether,
            DetailEdit::MarriageHistory(_) => DetailField::MarriageHistory,
            DetailEdit::MarriageIntention(_) => DetailField::MarriageIntention,
            DetailEdit::WantChildren(_) => DetailField::WantChildren,
        }
    }
}
