// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::id::ListingId;
use std::fmt::Display;

/// A rejected entry of an item request sequence. `index` is the position of
/// the offending request in the sequence handed to the expander.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemRequestError {
    NonPositiveLength { index: usize, length: i64 },
    NonPositiveQuantity { index: usize, quantity: i64 },
    /// The expanded demand does not fit into memory or into `u64` arithmetic.
    DemandOverflow { index: usize },
}

/// Item validation is the only failure an allocation request can hit before
/// any listing is looked at.
pub type ValidationError = ItemRequestError;

impl ItemRequestError {
    #[inline]
    pub fn index(&self) -> usize {
        match *self {
            ItemRequestError::NonPositiveLength { index, .. }
            | ItemRequestError::NonPositiveQuantity { index, .. }
            | ItemRequestError::DemandOverflow { index } => index,
        }
    }
}

impl Display for ItemRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemRequestError::NonPositiveLength { index, length } => write!(
                f,
                "Item request {} has non-positive length {}",
                index, length
            ),
            ItemRequestError::NonPositiveQuantity { index, quantity } => write!(
                f,
                "Item request {} has non-positive quantity {}",
                index, quantity
            ),
            ItemRequestError::DemandOverflow { index } => {
                write!(f, "Item request {} overflows the total demand", index)
            }
        }
    }
}

impl std::error::Error for ItemRequestError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Length,
    Width,
}

impl Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dimension::Length => write!(f, "length"),
            Dimension::Width => write!(f, "width"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ListingError {
    NonPositiveDimension {
        id: ListingId,
        dimension: Dimension,
        value: i64,
    },
    NegativePrice {
        id: ListingId,
        price_in_cents: i64,
    },
    AreaOverflow {
        id: ListingId,
    },
}

impl ListingError {
    #[inline]
    pub fn id(&self) -> &ListingId {
        match self {
            ListingError::NonPositiveDimension { id, .. }
            | ListingError::NegativePrice { id, .. }
            | ListingError::AreaOverflow { id } => id,
        }
    }
}

impl Display for ListingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListingError::NonPositiveDimension {
                id,
                dimension,
                value,
            } => write!(f, "Listing {} has non-positive {} {}", id, dimension, value),
            ListingError::NegativePrice { id, price_in_cents } => write!(
                f,
                "Listing {} has negative price {} cents",
                id, price_in_cents
            ),
            ListingError::AreaOverflow { id } => {
                write!(f, "Listing {} has an area that overflows", id)
            }
        }
    }
}

impl std::error::Error for ListingError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogBuildError {
    DuplicateListingId(ListingId),
    InvalidListing(ListingError),
}

impl Display for CatalogBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogBuildError::DuplicateListingId(id) => write!(f, "Duplicate listing ID: {}", id),
            CatalogBuildError::InvalidListing(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CatalogBuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogBuildError::InvalidListing(e) => Some(e),
            CatalogBuildError::DuplicateListingId(_) => None,
        }
    }
}

impl From<ListingError> for CatalogBuildError {
    fn from(value: ListingError) -> Self {
        CatalogBuildError::InvalidListing(value)
    }
}

#[derive(Debug)]
pub enum CatalogLoadError {
    /// The catalog source could not be read.
    Io(std::io::Error),
    /// The catalog source is not a JSON array of listing records.
    Json(serde_json::Error),
    /// A record was well formed but violated a catalog invariant.
    Build(CatalogBuildError),
}

impl Display for CatalogLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogLoadError::Io(e) => write!(f, "I/O error while loading catalog: {e}"),
            CatalogLoadError::Json(e) => write!(f, "Malformed catalog: {e}"),
            CatalogLoadError::Build(e) => write!(f, "Invalid catalog: {e}"),
        }
    }
}

impl std::error::Error for CatalogLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogLoadError::Io(e) => Some(e),
            CatalogLoadError::Json(e) => Some(e),
            CatalogLoadError::Build(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for CatalogLoadError {
    fn from(value: std::io::Error) -> Self {
        CatalogLoadError::Io(value)
    }
}

impl From<serde_json::Error> for CatalogLoadError {
    fn from(value: serde_json::Error) -> Self {
        CatalogLoadError::Json(value)
    }
}

impl From<CatalogBuildError> for CatalogLoadError {
    fn from(value: CatalogBuildError) -> Self {
        CatalogLoadError::Build(value)
    }
}
