//! Classification of a completed page fetch.
//!
//! Every content page issues exactly one list request per visit. The
//! outcome is one of: a populated collection, an explicitly empty one
//! (which is not an error and gets its own message client-side), or a
//! failure the caller surfaces with a retry affordance. A retry is always
//! a fresh request; nothing here retries on its own.

use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum Listing<T> {
    Empty,
    Populated { items: Vec<T> },
}

impl<T> Listing<T> {
    pub fn classify(items: Vec<T>) -> Self {
        if items.is_empty() {
            Self::Empty
        } else {
            Self::Populated { items }
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Populated { items } => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Listing<U> {
        match self {
            Self::Empty => Listing::Empty,
            Self::Populated { items } => {
                Listing::Populated { items: items.into_iter().map(f).collect() }
            }
        }
    }
}
