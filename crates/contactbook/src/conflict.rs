//! Uniqueness checking.
//!
//! Two keys must be unique across a collection: the email, and the
//! (country code, phone number) pair. The scan runs the email check over the
//! whole collection before the phone check, so a candidate that violates
//! both reports the email conflict. Within one check the leftmost match wins.

use contactbook_core::Record;

use crate::error::BookError;

/// A uniqueness violation found by [`find_conflict`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conflict {
    /// The record at this index has the same email.
    Email(usize),
    /// The record at this index has the same country code and phone number.
    Phone(usize),
}

impl Conflict {
    /// Index of the existing record the candidate collides with.
    pub fn existing(self) -> usize {
        match self {
            Self::Email(i) | Self::Phone(i) => i,
        }
    }

    /// Turn the conflict into the error reported for `candidate`.
    pub fn into_error(self, candidate: &Record) -> BookError {
        match self {
            Self::Email(existing) => BookError::DuplicateEmail {
                email: candidate.email.clone(),
                existing,
            },
            Self::Phone(existing) => BookError::DuplicatePhone {
                country_code: candidate.country_code.clone(),
                phone_number: candidate.phone_number.clone(),
                existing,
            },
        }
    }
}

/// Find the first uniqueness violation `candidate` would introduce.
///
/// `skip` excludes one index from the scan, so a record being updated may
/// keep its own email and phone.
pub fn find_conflict(records: &[Record], candidate: &Record, skip: Option<usize>) -> Option<Conflict> {
    let identity = candidate.identity();
    let others = || {
        records
            .iter()
            .enumerate()
            .filter(move |(i, _)| Some(*i) != skip)
    };

    if let Some((i, _)) = others().find(|(_, r)| r.identity().same_email(&identity)) {
        return Some(Conflict::Email(i));
    }

    others()
        .find(|(_, r)| r.identity().same_phone(&identity))
        .map(|(i, _)| Conflict::Phone(i))
}
