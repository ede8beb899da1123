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
    err::CatalogBuildError,
    id::{ListingId, LocationId},
    listing::{Listing, ListingRecord},
    stats::{CatalogStats, LocationTotals},
};
use lot_alloc_core::space::SpaceLength;
use std::{
    collections::{HashMap, HashSet},
    fmt::Display,
};

/// The read-only listing catalog.
///
/// Listings keep the order in which they were added; every per-location view
/// and every tie-break downstream depends on that order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    listings: Vec<Listing>,
    index: HashMap<ListingId, usize>,
    locations: Vec<LocationId>,
}

impl Catalog {
    #[inline]
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    #[inline]
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Listing> {
        self.listings.iter()
    }

    #[inline]
    pub fn get(&self, id: &ListingId) -> Option<&Listing> {
        let idx = self.index.get(id)?;
        self.listings.get(*idx)
    }

    /// Distinct locations in order of first appearance.
    #[inline]
    pub fn location_ids(&self) -> &[LocationId] {
        &self.locations
    }

    #[inline]
    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    /// Number of locations owning at least one listing that is at least
    /// `length` long.
    pub fn count_locations_for_length(&self, length: SpaceLength) -> usize {
        self.listings
            .iter()
            .filter(|l| l.length() >= length)
            .map(|l| l.location_id())
            .collect::<HashSet<_>>()
            .len()
    }

    /// Summed listing lengths and widths per location, in location order.
    pub fn location_totals(&self) -> Vec<LocationTotals> {
        let mut totals: Vec<LocationTotals> = self
            .locations
            .iter()
            .map(|id| LocationTotals::new(id.clone()))
            .collect();
        let slot: HashMap<&LocationId, usize> = self
            .locations
            .iter()
            .enumerate()
            .map(|(i, id)| (id, i))
            .collect();
        for l in &self.listings {
            if let Some(&i) = slot.get(l.location_id()) {
                totals[i].accumulate(l);
            }
        }
        totals
    }

    #[inline]
    pub fn stats(&self) -> CatalogStats {
        CatalogStats::from_catalog(self)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Listing;
    type IntoIter = std::slice::Iter<'a, Listing>;

    fn into_iter(self) -> Self::IntoIter {
        self.listings.iter()
    }
}

impl Display for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Catalog:")?;
        writeln!(f, "  Locations: {}", self.locations.len())?;
        writeln!(f, "  Listings ({}):", self.listings.len())?;
        for l in &self.listings {
            writeln!(f, "    {}", l)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    listings: Vec<Listing>,
    index: HashMap<ListingId, usize>,
}

impl CatalogBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            listings: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    pub fn add_listing(&mut self, listing: Listing) -> Result<&mut Self, CatalogBuildError> {
        if self.index.contains_key(listing.id()) {
            return Err(CatalogBuildError::DuplicateListingId(listing.id().clone()));
        }
        self.index.insert(listing.id().clone(), self.listings.len());
        self.listings.push(listing);
        Ok(self)
    }

    #[inline]
    pub fn add_record(&mut self, record: ListingRecord) -> Result<&mut Self, CatalogBuildError> {
        let listing = Listing::try_from(record)?;
        self.add_listing(listing)
    }

    pub fn extend_records<I>(&mut self, records: I) -> Result<&mut Self, CatalogBuildError>
    where
        I: IntoIterator<Item = ListingRecord>,
    {
        for r in records {
            self.add_record(r)?;
        }
        Ok(self)
    }

    #[must_use]
    pub fn build(self) -> Catalog {
        let mut seen = HashSet::new();
        let locations = self
            .listings
            .iter()
            .filter(|l| seen.insert(l.location_id().clone()))
            .map(|l| l.location_id().clone())
            .collect();
        Catalog {
            listings: self.listings,
            index: self.index,
            locations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::err::ListingError;
    use lot_alloc_core::cost::Cost;

    fn listing(id: &str, loc: &str, length: u64, width: u64, price: u64) -> Listing {
        Listing::new(
            ListingId::from(id),
            LocationId::from(loc),
            SpaceLength::new(length),
            SpaceLength::new(width),
            Cost::new(price),
        )
        .expect("valid listing")
    }

    fn catalog() -> Catalog {
        let mut b = CatalogBuilder::new();
        b.add_listing(listing("1", "B", 20, 10, 100)).unwrap();
        b.add_listing(listing("2", "A", 40, 10, 200)).unwrap();
        b.add_listing(listing("3", "B", 30, 20, 300)).unwrap();
        b.build()
    }

    #[test]
    fn test_catalog_keeps_insertion_order() {
        let c = catalog();
        let ids: Vec<&str> = c.iter().map(|l| l.id().as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(
            c.location_ids(),
            &[LocationId::from("B"), LocationId::from("A")]
        );
        assert_eq!(c.location_count(), 2);
        assert_eq!(c.len(), 3);
    }

    #[test]
    fn test_catalog_lookup() {
        let c = catalog();
        assert_eq!(
            c.get(&ListingId::from("3")).map(|l| l.price()),
            Some(Cost::new(300))
        );
        assert!(c.get(&ListingId::from("missing")).is_none());
    }

    #[test]
    fn test_builder_rejects_duplicate_ids() {
        let mut b = CatalogBuilder::new();
        b.add_listing(listing("1", "A", 10, 10, 1)).unwrap();
        let e = b.add_listing(listing("1", "B", 10, 10, 1)).unwrap_err();
        assert_eq!(e, CatalogBuildError::DuplicateListingId(ListingId::from("1")));
    }

    #[test]
    fn test_builder_rejects_invalid_record() {
        let mut b = CatalogBuilder::new();
        let e = b
            .add_record(ListingRecord {
                id: ListingId::from("bad"),
                location_id: LocationId::from("A"),
                length: 10,
                width: 10,
                price_in_cents: -5,
            })
            .unwrap_err();
        assert!(matches!(
            e,
            CatalogBuildError::InvalidListing(ListingError::NegativePrice { .. })
        ));
    }

    #[test]
    fn test_count_locations_for_length() {
        let c = catalog();
        assert_eq!(c.count_locations_for_length(SpaceLength::new(10)), 2);
        assert_eq!(c.count_locations_for_length(SpaceLength::new(30)), 2);
        assert_eq!(c.count_locations_for_length(SpaceLength::new(35)), 1);
        assert_eq!(c.count_locations_for_length(SpaceLength::new(41)), 0);
    }

    #[test]
    fn test_location_totals() {
        let totals = catalog().location_totals();
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].location_id(), &LocationId::from("B"));
        assert_eq!(totals[0].total_length(), SpaceLength::new(50));
        assert_eq!(totals[0].total_width(), SpaceLength::new(30));
        assert_eq!(totals[0].listing_count(), 2);
        assert_eq!(totals[1].total_length(), SpaceLength::new(40));
    }

    #[test]
    fn test_empty_catalog() {
        let c = CatalogBuilder::new().build();
        assert!(c.is_empty());
        assert_eq!(c.location_count(), 0);
        assert!(c.location_totals().is_empty());
    }
}
