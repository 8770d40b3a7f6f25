//! Data structures for contact records.

pub mod contact;

pub use contact::{Contact, ContactError};
