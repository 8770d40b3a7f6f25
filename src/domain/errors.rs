//! Domain validation errors.

use thiserror::Error;

/// Errors that can occur during domain value object validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided affiliation name is not alphanumeric.
    #[error("Invalid affiliation name: {0:?} (affiliation names should be alphanumeric)")]
    InvalidAffiliation(String),
}

/// Signals that an operation would have violated the 'no duplicates'
/// property of a [`UniqueAffiliationList`](super::UniqueAffiliationList).
///
/// The failing operation is guaranteed to have left the list unchanged.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[error("Operation would result in duplicate affiliations")]
pub struct DuplicateAffiliationError;
