//! Pagination outcome for one category
//!
//! A category walk fetches listing pages 1, 2, 3, ... until one of these
//! conditions is met.

use std::fmt;

/// Why a category walk stopped fetching listing pages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// A listing page contained no product entries
    EndOfListing,

    /// A listing page could not be fetched
    FetchFailed {
        /// The page number that failed
        page: u32,
        /// Status code or transport error description
        reason: String,
    },

    /// The configured page cap was reached
    PageLimit {
        /// The configured cap
        max_pages: u32,
    },
}

impl StopReason {
    /// Returns true if pagination ended the way a listing normally ends
    pub fn is_normal(&self) -> bool {
        matches!(self, Self::EndOfListing | Self::PageLimit { .. })
    }
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EndOfListing => write!(f, "end of listing"),
            Self::FetchFailed { page, reason } => {
                write!(f, "page {} could not be fetched ({})", page, reason)
            }
            Self::PageLimit { max_pages } => write!(f, "page limit of {} reached", max_pages),
        }
    }
}
