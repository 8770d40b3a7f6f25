//! Contact record carrying a unique affiliation list.

use crate::domain::{
    Affiliation, DuplicateAffiliationError, UniqueAffiliationList, ValidationError,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when building a contact record from raw input,
/// such as a parsed command or a loaded storage record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// A field of the record holds an illegal value.
    #[error("Illegal value in contact record: {0}")]
    IllegalValue(#[from] ValidationError),

    /// The record's affiliations contain duplicates.
    #[error(transparent)]
    DuplicateAffiliation(#[from] DuplicateAffiliationError),
}

/// A contact in the address book.
///
/// Carries the contact's display name and their affiliations. The
/// affiliation list round-trips through storage as an array of plain
/// strings; loading re-validates every name and the uniqueness invariant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    /// Full name of the contact
    pub name: String,

    /// Affiliations attached to the contact
    #[serde(default, skip_serializing_if = "UniqueAffiliationList::is_empty")]
    pub affiliations: UniqueAffiliationList,
}

impl Contact {
    /// Create a contact with no affiliations.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            affiliations: UniqueAffiliationList::new(),
        }
    }

    /// Build a contact from raw record fields, validating every affiliation
    /// name.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::IllegalValue` if any name fails validation and
    /// `ContactError::DuplicateAffiliation` if the record repeats one.
    pub fn from_record(
        name: impl Into<String>,
        affiliation_names: &[impl AsRef<str>],
    ) -> Result<Self, ContactError> {
        let mut affiliations = UniqueAffiliationList::new();
        for raw in affiliation_names {
            affiliations.add(Affiliation::new(raw.as_ref())?)?;
        }
        Ok(Self {
            name: name.into(),
            affiliations,
        })
    }

    /// The contact's affiliations, in insertion order.
    pub fn affiliations(&self) -> &UniqueAffiliationList {
        &self.affiliations
    }

    /// Validate and attach one more affiliation.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::IllegalValue` for a malformed name and
    /// `ContactError::DuplicateAffiliation` if the contact already has it.
    pub fn add_affiliation(&mut self, raw: &str) -> Result<(), ContactError> {
        self.affiliations.add(Affiliation::new(raw)?)?;
        Ok(())
    }

    /// Replace this contact's affiliations with those of `replacement`.
    pub fn set_affiliations(&mut self, replacement: &UniqueAffiliationList) {
        self.affiliations.set_affiliations(replacement);
    }

    /// Adopt every affiliation of `other` that this contact does not
    /// already have.
    pub fn merge_affiliations_from(&mut self, other: &Contact) {
        self.affiliations.merge_from(&other.affiliations);
    }
}
