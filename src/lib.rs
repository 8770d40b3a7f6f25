//! AddressBook Core - validated affiliations for a personal address book.
//!
//! This library provides the affiliation layer of an address book: an
//! immutable, validated affiliation value and an ordered list that keeps
//! affiliations unique under set-like operations (add, merge, replace).
//!
//! # Architecture
//!
//! - **domain**: the `Affiliation` value object, the `UniqueAffiliationList`
//!   container, and their error types
//! - **models**: the `Contact` record that attaches an affiliation list to a
//!   person and maps raw record fields onto the domain types
//!
//! Everything is synchronous and in-memory. The crate provides no internal
//! locking; callers sharing a list across threads must wrap the whole
//! read-modify-write sequence in their own lock.

pub mod domain;
pub mod models;

pub use domain::{Affiliation, DuplicateAffiliationError, UniqueAffiliationList, ValidationError};
pub use models::{Contact, ContactError};
