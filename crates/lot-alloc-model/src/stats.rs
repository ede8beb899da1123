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

use crate::{catalog::Catalog, id::LocationId, listing::Listing};
use lot_alloc_core::{
    cost::Cost,
    space::{SpaceArea, SpaceLength},
};
use std::fmt::Display;

/// Summed dimensions of all listings at one location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationTotals {
    location_id: LocationId,
    total_length: SpaceLength,
    total_width: SpaceLength,
    listing_count: usize,
}

impl LocationTotals {
    #[inline]
    pub(crate) fn new(location_id: LocationId) -> Self {
        Self {
            location_id,
            total_length: SpaceLength::zero(),
            total_width: SpaceLength::zero(),
            listing_count: 0,
        }
    }

    #[inline]
    pub(crate) fn accumulate(&mut self, listing: &Listing) {
        self.total_length = self.total_length.saturating_add(listing.length());
        self.total_width = self.total_width.saturating_add(listing.width());
        self.listing_count += 1;
    }

    #[inline]
    pub fn location_id(&self) -> &LocationId {
        &self.location_id
    }

    #[inline]
    pub fn total_length(&self) -> SpaceLength {
        self.total_length
    }

    #[inline]
    pub fn total_width(&self) -> SpaceLength {
        self.total_width
    }

    #[inline]
    pub fn listing_count(&self) -> usize {
        self.listing_count
    }
}

impl Display for LocationTotals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Location ID: {}", self.location_id.as_str())?;
        writeln!(f, "Total Length: {}", self.total_length.value())?;
        write!(f, "Total Width: {}", self.total_width.value())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogStats {
    listing_count: usize,
    location_count: usize,
    /// 50th percentile of listing areas.
    p50_area: SpaceArea,
    /// 90th percentile of listing areas.
    p90_area: SpaceArea,
    /// 50th percentile of listing prices.
    p50_price: Cost<u64>,
    /// Largest single listing, the upper bound for a single-listing cover.
    max_area: SpaceArea,
}

impl CatalogStats {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let areas: Vec<u64> = catalog.iter().map(|l| l.area().value()).collect();
        let prices: Vec<u64> = catalog.iter().map(|l| l.price().value()).collect();
        Self {
            listing_count: catalog.len(),
            location_count: catalog.location_count(),
            p50_area: SpaceArea::new(percentile::percentile_u64(&areas, 0.50)),
            p90_area: SpaceArea::new(percentile::percentile_u64(&areas, 0.90)),
            p50_price: Cost::new(percentile::percentile_u64(&prices, 0.50)),
            max_area: SpaceArea::new(areas.iter().copied().max().unwrap_or(0)),
        }
    }

    #[inline]
    pub fn listing_count(&self) -> usize {
        self.listing_count
    }

    #[inline]
    pub fn location_count(&self) -> usize {
        self.location_count
    }

    #[inline]
    pub fn p50_area(&self) -> SpaceArea {
        self.p50_area
    }

    #[inline]
    pub fn p90_area(&self) -> SpaceArea {
        self.p90_area
    }

    #[inline]
    pub fn p50_price(&self) -> Cost<u64> {
        self.p50_price
    }

    #[inline]
    pub fn max_area(&self) -> SpaceArea {
        self.max_area
    }
}

impl Display for CatalogStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Catalog statistics:")?;
        writeln!(f, "  Listings: {}", self.listing_count)?;
        writeln!(f, "  Locations: {}", self.location_count)?;
        writeln!(f, "  p50 area: {}", self.p50_area)?;
        writeln!(f, "  p90 area: {}", self.p90_area)?;
        writeln!(f, "  Max area: {}", self.max_area)?;
        write!(f, "  p50 price: {}", self.p50_price)
    }
}

mod percentile {
    use statrs::statistics::{Data, OrderStatistics};

    pub fn percentile_u64(data: &[u64], p: f64) -> u64 {
        let p = p.clamp(0.0, 1.0);
        if data.is_empty() {
            return 0;
        }
        let vals: Vec<f64> = data.iter().map(|&x| x as f64).collect();
        let mut d = Data::new(vals);
        let q = d.quantile(p);
        if q.is_finite() {
            q.round().max(0.0) as u64
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        catalog::CatalogBuilder,
        id::{ListingId, LocationId},
    };

    fn catalog(areas_and_prices: &[(u64, u64)]) -> Catalog {
        let mut b = CatalogBuilder::new();
        for (i, &(area, price)) in areas_and_prices.iter().enumerate() {
            b.add_listing(
                Listing::new(
                    ListingId::new(i.to_string()),
                    LocationId::new(format!("loc-{}", i % 2)),
                    SpaceLength::new(area),
                    SpaceLength::new(1),
                    Cost::new(price),
                )
                .unwrap(),
            )
            .unwrap();
        }
        b.build()
    }

    #[test]
    fn test_stats_on_empty_catalog() {
        let s = CatalogBuilder::new().build().stats();
        assert_eq!(s.listing_count(), 0);
        assert_eq!(s.location_count(), 0);
        assert_eq!(s.p50_area(), SpaceArea::zero());
        assert_eq!(s.max_area(), SpaceArea::zero());
    }

    #[test]
    fn test_stats_counts_and_extremes() {
        let s = catalog(&[(100, 10), (400, 40), (900, 90)]).stats();
        assert_eq!(s.listing_count(), 3);
        assert_eq!(s.location_count(), 2);
        assert_eq!(s.max_area(), SpaceArea::new(900));
        assert_eq!(s.p50_area(), SpaceArea::new(400));
        assert_eq!(s.p50_price(), Cost::new(40));
        assert!(s.p90_area() >= s.p50_area());
        assert!(s.p90_area() <= s.max_area());
    }

    #[test]
    fn test_location_totals_display() {
        let mut t = LocationTotals::new(LocationId::from("A"));
        let l = Listing::new(
            ListingId::from("x"),
            LocationId::from("A"),
            SpaceLength::new(20),
            SpaceLength::new(10),
            Cost::new(1),
        )
        .unwrap();
        t.accumulate(&l);
        assert_eq!(
            format!("{t}"),
            "Location ID: A\nTotal Length: 20\nTotal Width: 10"
        );
    }
}
