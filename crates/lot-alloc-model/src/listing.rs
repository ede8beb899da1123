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

use crate::{
    err::{Dimension, ListingError},
    id::{ListingId, LocationId},
};
use lot_alloc_core::{
    cost::Cost,
    space::{SpaceArea, SpaceLength},
};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A listing exactly as it appears in a catalog export.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListingRecord {
    pub id: ListingId,
    pub location_id: LocationId,
    pub length: i64,
    pub width: i64,
    pub price_in_cents: i64,
}

/// A validated, rentable storage space.
///
/// Dimensions are strictly positive, the price is non-negative and the area
/// `length * width` is known to fit into `u64`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "ListingRecord")]
pub struct Listing {
    id: ListingId,
    location_id: LocationId,
    length: SpaceLength,
    width: SpaceLength,
    price: Cost<u64>,
    area: SpaceArea,
}

impl Listing {
    pub fn new(
        id: ListingId,
        location_id: LocationId,
        length: SpaceLength,
        width: SpaceLength,
        price: Cost<u64>,
    ) -> Result<Self, ListingError> {
        if length.is_zero() {
            return Err(ListingError::NonPositiveDimension {
                id,
                dimension: Dimension::Length,
                value: 0,
            });
        }
        if width.is_zero() {
            return Err(ListingError::NonPositiveDimension {
                id,
                dimension: Dimension::Width,
                value: 0,
            });
        }
        let Some(area) = length.checked_area(width) else {
            return Err(ListingError::AreaOverflow { id });
        };
        Ok(Self {
            id,
            location_id,
            length,
            width,
            price,
            area,
        })
    }

    #[inline]
    pub fn id(&self) -> &ListingId {
        &self.id
    }

    #[inline]
    pub fn location_id(&self) -> &LocationId {
        &self.location_id
    }

    #[inline]
    pub fn length(&self) -> SpaceLength {
        self.length
    }

    #[inline]
    pub fn width(&self) -> SpaceLength {
        self.width
    }

    #[inline]
    pub fn price(&self) -> Cost<u64> {
        self.price
    }

    #[inline]
    pub fn area(&self) -> SpaceArea {
        self.area
    }
}

impl Display for Listing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Listing(id: {}, location: {}, length: {}, width: {}, price: {})",
            self.id, self.location_id, self.length, self.width, self.price
        )
    }
}

fn positive(id: &ListingId, dimension: Dimension, value: i64) -> Result<SpaceLength, ListingError> {
    match u64::try_from(value) {
        Ok(v) if v > 0 => Ok(SpaceLength::new(v)),
        _ => Err(ListingError::NonPositiveDimension {
            id: id.clone(),
            dimension,
            value,
        }),
    }
}

impl TryFrom<ListingRecord> for Listing {
    type Error = ListingError;

    fn try_from(record: ListingRecord) -> Result<Self, Self::Error> {
        let length = positive(&record.id, Dimension::Length, record.length)?;
        let width = positive(&record.id, Dimension::Width, record.width)?;
        let Ok(price) = u64::try_from(record.price_in_cents) else {
            return Err(ListingError::NegativePrice {
                id: record.id,
                price_in_cents: record.price_in_cents,
            });
        };
        Listing::new(
            record.id,
            record.location_id,
            length,
            width,
            Cost::new(price),
        )
    }
}

impl From<Listing> for ListingRecord {
    fn from(listing: Listing) -> Self {
        // Listing dimensions and prices originate from `i64` records; values
        // beyond `i64::MAX` can only come from direct construction.
        let clamp = |v: u64| i64::try_from(v).unwrap_or(i64::MAX);
        ListingRecord {
            id: listing.id,
            location_id: listing.location_id,
            length: clamp(listing.length.value()),
            width: clamp(listing.width.value()),
            price_in_cents: clamp(listing.price.value()),
        }
    }
}
