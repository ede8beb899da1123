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

use crate::id::{ListingId, LocationId};
use lot_alloc_core::cost::Cost;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The cheapest way found to store a whole request at one location.
///
/// `listing_ids` holds one entry per use of a listing, so a listing that takes
/// several vehicles appears several times.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AllocationOption {
    location_id: LocationId,
    listing_ids: Vec<ListingId>,
    total_price_in_cents: Cost<u64>,
    more_listings_available: bool,
}

impl AllocationOption {
    #[inline]
    pub fn new(
        location_id: LocationId,
        listing_ids: Vec<ListingId>,
        total_price_in_cents: Cost<u64>,
        more_listings_available: bool,
    ) -> Self {
        Self {
            location_id,
            listing_ids,
            total_price_in_cents,
            more_listings_available,
        }
    }

    #[inline]
    pub fn location_id(&self) -> &LocationId {
        &self.location_id
    }

    #[inline]
    pub fn listing_ids(&self) -> &[ListingId] {
        &self.listing_ids
    }

    #[inline]
    pub fn total_price(&self) -> Cost<u64> {
        self.total_price_in_cents
    }

    #[inline]
    pub fn more_listings_available(&self) -> bool {
        self.more_listings_available
    }

    /// Sort key of the result ranking: cheapest first, then fewest listings.
    #[inline]
    pub fn rank_key(&self) -> (Cost<u64>, usize) {
        (self.total_price_in_cents, self.listing_ids.len())
    }
}

impl Display for AllocationOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Location ID: {}", self.location_id.as_str())?;
        write!(f, "Listing IDs: [")?;
        for (i, id) in self.listing_ids.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", id.as_str())?;
        }
        writeln!(f, "]")?;
        writeln!(
            f,
            "Total Price in Cents: {}",
            self.total_price_in_cents.value()
        )?;
        write!(
            f,
            "More Listings Available: {}",
            self.more_listings_available
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option() -> AllocationOption {
        AllocationOption::new(
            LocationId::from("A"),
            vec![ListingId::from("l1"), ListingId::from("l1")],
            Cost::new(1000),
            true,
        )
    }

    #[test]
    fn test_option_accessors() {
        let o = option();
        assert_eq!(o.location_id(), &LocationId::from("A"));
        assert_eq!(o.listing_ids().len(), 2);
        assert_eq!(o.total_price(), Cost::new(1000));
        assert!(o.more_listings_available());
        assert_eq!(o.rank_key(), (Cost::new(1000), 2));
    }

    #[test]
    fn test_option_json_shape() {
        let v = serde_json::to_value(option()).unwrap();
        assert_eq!(
            v,
            serde_json::json!({
                "location_id": "A",
                "listing_ids": ["l1", "l1"],
                "total_price_in_cents": 1000,
                "more_listings_available": true
            })
        );
    }

    #[test]
    fn test_option_display() {
        let s = format!("{}", option());
        assert!(s.starts_with("Location ID: A\nListing IDs: [l1, l1]\n"));
        assert!(s.ends_with("More Listings Available: true"));
    }
}
