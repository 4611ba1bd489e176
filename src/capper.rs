//! Deduplication and capping of generated candidates.

use indexmap::IndexSet;

use crate::error::InvalidConfigError;
use crate::wordlist::Wordlist;

/// Outcome of offering a candidate to the [`Capper`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offer {
    /// Accepted, and there is room for more.
    Accepted,
    /// Already accepted earlier; ignored.
    Duplicate,
    /// Accepted, and the cap is now reached. Generation must stop.
    Full,
    /// The cap was already reached; ignored.
    Rejected,
}

/// Ordered, insert-or-reject accumulator with a hard size limit.
#[derive(Debug)]
pub struct Capper {
    max_size: usize,
    accepted: IndexSet<String>,
}

impl Capper {
    /// Fails with [`InvalidConfigError::MaxSizeZero`] when `max_size` is 0.
    pub fn new(max_size: usize) -> Result<Self, InvalidConfigError> {
        if max_size < 1 {
            return Err(InvalidConfigError::MaxSizeZero);
        }
        Ok(Self {
            max_size,
            accepted: IndexSet::new(),
        })
    }

    pub fn offer(&mut self, candidate: String) -> Offer {
        if self.is_full() {
            return Offer::Rejected;
        }
        if !self.accepted.insert(candidate) {
            return Offer::Duplicate;
        }
        if self.is_full() {
            Offer::Full
        } else {
            Offer::Accepted
        }
    }

    pub fn is_full(&self) -> bool {
        self.accepted.len() >= self.max_size
    }

    pub fn len(&self) -> usize {
        self.accepted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Freezes the accepted candidates, in first-acceptance order.
    pub fn into_wordlist(self) -> Wordlist {
        Wordlist::from_ordered(self.accepted.into_iter().collect())
    }
}
