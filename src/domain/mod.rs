//! Domain value objects and collections.
//!
//! This module contains the type-safe affiliation value object and the
//! unique list that holds it. Validation happens at construction time, so
//! invalid or duplicated affiliations cannot be represented in the system.

pub mod affiliation;
pub mod affiliation_list;
pub mod errors;

pub use affiliation::Affiliation;
pub use affiliation_list::UniqueAffiliationList;
pub use errors::{DuplicateAffiliationError, ValidationError};
