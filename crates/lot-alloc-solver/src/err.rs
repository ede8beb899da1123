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

use lot_alloc_model::{err::ItemRequestError, id::LocationId};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AllocatorConfigError {
    ZeroUnitWidth,
    ZeroUnitFootprint,
}

impl Display for AllocatorConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AllocatorConfigError::ZeroUnitWidth => write!(f, "Unit width must be positive"),
            AllocatorConfigError::ZeroUnitFootprint => {
                write!(f, "Unit footprint must be positive")
            }
        }
    }
}

impl std::error::Error for AllocatorConfigError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceOverflowError {
    location_id: LocationId,
}

impl PriceOverflowError {
    #[inline]
    pub fn new(location_id: LocationId) -> Self {
        Self { location_id }
    }

    #[inline]
    pub fn location_id(&self) -> &LocationId {
        &self.location_id
    }
}

impl Display for PriceOverflowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Total price at location {} exceeds the representable range",
            self.location_id
        )
    }
}

impl std::error::Error for PriceOverflowError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllocateError {
    /// An item request was rejected before any listing was considered.
    Validation(ItemRequestError),
    PriceOverflow(PriceOverflowError),
}

impl Display for AllocateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AllocateError::Validation(e) => write!(f, "{e}"),
            AllocateError::PriceOverflow(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for AllocateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AllocateError::Validation(e) => Some(e),
            AllocateError::PriceOverflow(e) => Some(e),
        }
    }
}

impl From<ItemRequestError> for AllocateError {
    fn from(value: ItemRequestError) -> Self {
        AllocateError::Validation(value)
    }
}

impl From<PriceOverflowError> for AllocateError {
    fn from(value: PriceOverflowError) -> Self {
        AllocateError::PriceOverflow(value)
    }
}
