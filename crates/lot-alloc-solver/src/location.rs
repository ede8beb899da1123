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

//! The per-location solver.
//!
//! A location is first checked for a single listing whose area covers the
//! whole demand; the cheapest such listing wins and packing is never tried
//! afterwards. Only when no single listing covers the demand are the
//! location's listings packed greedily, largest area first.
//!
//! Packing walks the demand sequence with a cursor in its original order.
//! Each listing takes units from the head of the sequence until either its
//! footprint capacity is used up or the head unit is longer than the listing.
//! A head unit that does not fit ends the listing's turn even if a later unit
//! would fit.

use crate::{err::PriceOverflowError, grouping::LocationGroup};
use lot_alloc_core::{cost::Cost, space::SpaceArea};
use lot_alloc_model::{demand::Demand, id::ListingId, listing::Listing, option::AllocationOption};
use tracing::trace;

/// The result of solving one location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationOutcome {
    /// One listing covers the total demand area.
    Single(AllocationOption),
    /// Several listing uses together take every unit of the demand.
    Packed(AllocationOption),
    /// The location cannot take the whole demand; `placed` units were packed
    /// before its listings ran out.
    Infeasible { placed: usize },
}

impl LocationOutcome {
    #[inline]
    pub fn option(&self) -> Option<&AllocationOption> {
        match self {
            LocationOutcome::Single(o) | LocationOutcome::Packed(o) => Some(o),
            LocationOutcome::Infeasible { .. } => None,
        }
    }

    #[inline]
    pub fn into_option(self) -> Option<AllocationOption> {
        match self {
            LocationOutcome::Single(o) | LocationOutcome::Packed(o) => Some(o),
            LocationOutcome::Infeasible { .. } => None,
        }
    }

    #[inline]
    pub fn is_feasible(&self) -> bool {
        !matches!(self, LocationOutcome::Infeasible { .. })
    }
}

/// The cheapest listing whose area is at least `total_area`.
///
/// Listings are scanned in catalog order. On a price tie the earlier listing
/// wins, even when a later one is larger.
pub fn best_single_listing<'c>(
    listings: &[&'c Listing],
    total_area: SpaceArea,
) -> Option<&'c Listing> {
    let mut best: Option<&'c Listing> = None;
    for &l in listings {
        if l.area() >= total_area && best.is_none_or(|b| l.price() < b.price()) {
            best = Some(l);
        }
    }
    best
}

/// Listing uses produced by a greedy pack.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Pack {
    listing_ids: Vec<ListingId>,
    total_price: Cost<u64>,
    placed: usize,
}

impl Pack {
    #[inline]
    pub fn listing_ids(&self) -> &[ListingId] {
        &self.listing_ids
    }

    #[inline]
    pub fn total_price(&self) -> Cost<u64> {
        self.total_price
    }

    /// Number of demand units consumed, counted from the head.
    #[inline]
    pub fn placed(&self) -> usize {
        self.placed
    }
}

/// Greedily packs `demand` into `listings`, largest area first.
///
/// Returns `None` if the running total price overflows.
pub fn greedy_pack(
    listings: &[&Listing],
    demand: &Demand,
    unit_footprint: SpaceArea,
) -> Option<Pack> {
    let mut order: Vec<&Listing> = listings.to_vec();
    order.sort_by(|a, b| b.area().cmp(&a.area()));

    let units = demand.units();
    let mut cursor = 0usize;
    let mut pack = Pack::default();

    for l in order {
        if cursor == units.len() {
            break;
        }
        let mut capacity = l.area().whole_fits(unit_footprint).unwrap_or(0);
        // An unrepresentable reach is longer than any unit.
        let reach = demand.scaled(l.length());

        while capacity > 0 && cursor < units.len() {
            let head = units[cursor].area();
            if reach.is_some_and(|r| head > r) {
                break;
            }
            pack.total_price = pack.total_price.checked_add(l.price())?;
            pack.listing_ids.push(l.id().clone());
            cursor += 1;
            capacity -= 1;
        }
    }

    pack.placed = cursor;
    Some(pack)
}

/// Solves locations against one fixed demand.
#[derive(Debug, Clone, Copy)]
pub struct LocationSolver<'d> {
    demand: &'d Demand,
    unit_footprint: SpaceArea,
}

impl<'d> LocationSolver<'d> {
    #[inline]
    pub fn new(demand: &'d Demand, unit_footprint: SpaceArea) -> Self {
        Self {
            demand,
            unit_footprint,
        }
    }

    pub fn solve(
        &self,
        group: &LocationGroup<'_>,
    ) -> Result<LocationOutcome, PriceOverflowError> {
        let location_id = group.location_id();
        let listings = group.listings();

        if let Some(best) = best_single_listing(listings, self.demand.total_area()) {
            trace!(location = %location_id, listing = %best.id(), "single listing covers demand");
            return Ok(LocationOutcome::Single(AllocationOption::new(
                location_id.clone(),
                vec![best.id().clone()],
                best.price(),
                listings.len() > 1,
            )));
        }

        let pack = greedy_pack(listings, self.demand, self.unit_footprint)
            .ok_or_else(|| PriceOverflowError::new(location_id.clone()))?;

        if pack.placed() < self.demand.len() {
            trace!(
                location = %location_id,
                placed = pack.placed(),
                required = self.demand.len(),
                "location cannot take the demand"
            );
            return Ok(LocationOutcome::Infeasible {
                placed: pack.placed(),
            });
        }

        trace!(location = %location_id, uses = pack.listing_ids().len(), "demand packed");
        let more_listings_available = listings.len() > pack.listing_ids().len();
        Ok(LocationOutcome::Packed(AllocationOption::new(
            location_id.clone(),
            pack.listing_ids,
            pack.total_price,
            more_listings_available,
        )))
    }
}
