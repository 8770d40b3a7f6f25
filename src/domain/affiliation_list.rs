//! An ordered list of affiliations that does not allow duplicates.

use super::affiliation::Affiliation;
use super::errors::DuplicateAffiliationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;

/// An ordered list of [`Affiliation`]s with no duplicates.
///
/// Insertion order is preserved and every successful operation leaves the
/// list free of equal elements. Failing operations ([`add`](Self::add),
/// [`add_all`](Self::add_all), [`from_values`](Self::from_values)) are
/// all-or-nothing: they never leave the list partially mutated. The one
/// deliberate exception to strictness is [`merge_from`](Self::merge_from),
/// which silently skips conflicting elements instead of failing.
///
/// Internal storage is never handed out: accessors return borrows, fresh
/// copies, or lazy traversals. Membership checks scan the list, which is the
/// right trade-off for the handful of affiliations a personal contact
/// carries.
///
/// # Example
///
/// ```
/// use addressbook_core::domain::{Affiliation, UniqueAffiliationList};
///
/// let mut list = UniqueAffiliationList::new();
/// list.add(Affiliation::new("Acme").unwrap()).unwrap();
/// assert!(list.add(Affiliation::new("Acme").unwrap()).is_err());
/// assert_eq!(list.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UniqueAffiliationList {
    affiliations: Vec<Affiliation>,
}

impl UniqueAffiliationList {
    /// Create an empty affiliation list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a list from the given affiliations, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateAffiliationError`, constructing nothing, if any two
    /// of the given affiliations are equal.
    pub fn from_values(
        values: impl IntoIterator<Item = Affiliation>,
    ) -> Result<Self, DuplicateAffiliationError> {
        let mut list = Self::new();
        for affiliation in values {
            list.add(affiliation)?;
        }
        Ok(list)
    }

    /// Create a list from a set of affiliations.
    ///
    /// Never fails: the set cannot contain duplicates. The resulting order
    /// is the set's iteration order, which is unspecified.
    pub fn from_set(values: HashSet<Affiliation>) -> Self {
        Self {
            affiliations: values.into_iter().collect(),
        }
    }

    /// Returns true if the list contains an affiliation equal to the given one.
    pub fn contains(&self, to_check: &Affiliation) -> bool {
        self.affiliations.contains(to_check)
    }

    /// Returns a new set holding a copy of every affiliation in this list.
    ///
    /// The set is mutable and change-insulated: modifying it never affects
    /// this list.
    pub fn to_set(&self) -> HashSet<Affiliation> {
        self.affiliations.iter().cloned().collect()
    }

    /// Appends the given affiliation to the list.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateAffiliationError`, leaving the list unchanged, if an
    /// equal affiliation is already present.
    pub fn add(&mut self, affiliation: Affiliation) -> Result<(), DuplicateAffiliationError> {
        if self.contains(&affiliation) {
            return Err(DuplicateAffiliationError);
        }
        self.affiliations.push(affiliation);
        Ok(())
    }

    /// Appends every affiliation from `other`, preserving `other`'s order.
    ///
    /// Atomic: disjointness is checked up front, so on failure this list is
    /// left exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateAffiliationError` if any affiliation in `other`
    /// already exists in this list.
    pub fn add_all(&mut self, other: &UniqueAffiliationList) -> Result<(), DuplicateAffiliationError> {
        if other.affiliations.iter().any(|a| self.contains(a)) {
            return Err(DuplicateAffiliationError);
        }
        self.affiliations.extend(other.affiliations.iter().cloned());
        Ok(())
    }

    /// Appends every affiliation from `other` that does not yet exist in
    /// this list, silently skipping the rest.
    ///
    /// Membership is checked against the list as it grows, so an element
    /// appended earlier in the same call counts as already present for the
    /// elements after it. Never fails; applying the same merge twice leaves
    /// the list as it was after the first.
    pub fn merge_from(&mut self, other: &UniqueAffiliationList) {
        for affiliation in &other.affiliations {
            if !self.contains(affiliation) {
                self.affiliations.push(affiliation.clone());
            }
        }
    }

    /// Removes every affiliation from the list.
    pub fn clear(&mut self) {
        self.affiliations.clear();
    }

    /// Replaces the affiliations in this list with those in `replacement`,
    /// in `replacement`'s order.
    pub fn set_affiliations(&mut self, replacement: &UniqueAffiliationList) {
        self.affiliations.clone_from(&replacement.affiliations);
    }

    /// Returns a fresh traversal over the affiliations in insertion order.
    ///
    /// Each call starts from the beginning. The returned iterator borrows
    /// the list, so mutating the list while a traversal is live is rejected
    /// at compile time.
    pub fn iter(&self) -> std::slice::Iter<'_, Affiliation> {
        self.affiliations.iter()
    }

    /// Number of affiliations in the list.
    pub fn len(&self) -> usize {
        self.affiliations.len()
    }

    /// Returns true if the list holds no affiliations.
    pub fn is_empty(&self) -> bool {
        self.affiliations.is_empty()
    }
}

impl<'a> IntoIterator for &'a UniqueAffiliationList {
    type Item = &'a Affiliation;
    type IntoIter = std::slice::Iter<'a, Affiliation>;

    fn into_iter(self) -> Self::IntoIter {
        self.affiliations.iter()
    }
}

impl IntoIterator for UniqueAffiliationList {
    type Item = Affiliation;
    type IntoIter = std::vec::IntoIter<Affiliation>;

    fn into_iter(self) -> Self::IntoIter {
        self.affiliations.into_iter()
    }
}

// Serde support - serialize as a sequence of strings
impl Serialize for UniqueAffiliationList {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.affiliations.serialize(serializer)
    }
}

// Serde support - deserialize from a sequence of strings, re-validating
// every element and the uniqueness invariant
impl<'de> Deserialize<'de> for UniqueAffiliationList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let values = Vec::<Affiliation>::deserialize(deserializer)?;
        UniqueAffiliationList::from_values(values).map_err(serde::de::Error::custom)
    }
}
