//! Allotment records.
//!
//! An allotment is the number of units available for arrival on a date.
//! [`AllotmentCollection`] is both the request payload for
//! `createOrReplaceAllotments` and the shape of its response.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Availability of a rental unit on a single date.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Allotment {
    /// The date, serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// Number of available units.
    pub amount: u32,
}

impl Allotment {
    /// Creates a new allotment.
    #[must_use]
    pub const fn new(date: NaiveDate, amount: u32) -> Self {
        Self { date, amount }
    }
}

/// An ordered sequence of allotments.
///
/// Serializes as `{"allotments": [{"date": "YYYY-MM-DD", "amount": n}, ...]}`.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use travelbase_api::models::{Allotment, AllotmentCollection};
///
/// let collection: AllotmentCollection = vec![
///     Allotment::new(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(), 3),
///     Allotment::new(NaiveDate::from_ymd_opt(2020, 1, 2).unwrap(), 0),
/// ]
/// .into();
///
/// assert_eq!(collection.len(), 2);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AllotmentCollection {
    /// The allotments, in order.
    pub allotments: Vec<Allotment>,
}

impl AllotmentCollection {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            allotments: Vec::new(),
        }
    }

    /// Appends an allotment.
    pub fn push(&mut self, allotment: Allotment) {
        self.allotments.push(allotment);
    }

    /// Returns the number of allotments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.allotments.len()
    }

    /// Returns `true` if the collection holds no allotments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.allotments.is_empty()
    }

    /// Returns an iterator over the allotments.
    pub fn iter(&self) -> std::slice::Iter<'_, Allotment> {
        self.allotments.iter()
    }

    /// Builds a collection from plain key-value records such as
    /// `{"date": "2020-01-01", "amount": 3}`.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if any record lacks a field or holds a
    /// value of the wrong type.
    pub fn from_records(records: &[serde_json::Value]) -> Result<Self, serde_json::Error> {
        records
            .iter()
            .map(Allotment::deserialize)
            .collect::<Result<Vec<_>, _>>()
            .map(Self::from)
    }
}

impl From<Vec<Allotment>> for AllotmentCollection {
    fn from(allotments: Vec<Allotment>) -> Self {
        Self { allotments }
    }
}

impl FromIterator<Allotment> for AllotmentCollection {
    fn from_iter<I: IntoIterator<Item = Allotment>>(iter: I) -> Self {
        Self {
            allotments: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for AllotmentCollection {
    type Item = Allotment;
    type IntoIter = std::vec::IntoIter<Allotment>;

    fn into_iter(self) -> Self::IntoIter {
        self.allotments.into_iter()
    }
}

impl<'a> IntoIterator for &'a AllotmentCollection {
    type Item = &'a Allotment;
    type IntoIter = std::slice::Iter<'a, Allotment>;

    fn into_iter(self) -> Self::IntoIter {
        self.allotments.iter()
    }
}
