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
    config::{AllocatorConfig, ZeroDemandPolicy},
    err::{AllocateError, AllocatorConfigError},
    grouping::LocationGroups,
    location::{LocationOutcome, LocationSolver},
    rank::rank_options,
    solver::{Allocation, Solver},
};
use lot_alloc_model::{catalog::Catalog, demand::Demand, item::ItemRequest};
use rayon::prelude::*;
use tracing::{debug, info, instrument};

/// Answers allocation requests against one immutable catalog.
///
/// The allocator only borrows the catalog; every request builds its own demand
/// sequence and location grouping, so a single allocator can serve any number
/// of requests concurrently.
#[derive(Debug, Clone)]
pub struct Allocator<'c> {
    catalog: &'c Catalog,
    config: AllocatorConfig,
}

impl<'c> Allocator<'c> {
    #[inline]
    pub fn new(catalog: &'c Catalog, config: AllocatorConfig) -> Result<Self, AllocatorConfigError> {
        config.validate()?;
        Ok(Self { catalog, config })
    }

    #[inline]
    pub fn with_defaults(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            config: AllocatorConfig::default(),
        }
    }

    #[inline]
    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    #[inline]
    pub fn config(&self) -> &AllocatorConfig {
        &self.config
    }

    /// Expands `items`, solves every location and ranks the feasible ones.
    #[instrument(
        level = "debug",
        skip_all,
        fields(items = items.len(), units, locations),
        err(Display)
    )]
    pub fn allocate(&self, items: &[ItemRequest]) -> Result<Allocation, AllocateError> {
        let demand = Demand::expand(items, self.config.unit_width)?;
        tracing::Span::current().record("units", demand.len());
        debug!(%demand, "demand expanded");

        let total_locations = self.catalog.location_count();
        if demand.is_empty() && self.config.zero_demand == ZeroDemandPolicy::Empty {
            debug!("empty request, no locations offered");
            return Ok(Allocation::new(Vec::new(), total_locations, 0));
        }

        let groups = LocationGroups::from_catalog(self.catalog);
        tracing::Span::current().record("locations", groups.len());

        let solver = LocationSolver::new(&demand, self.config.unit_footprint);
        let mut options = Vec::with_capacity(groups.len());
        for group in &groups {
            match solver.solve(group)? {
                LocationOutcome::Infeasible { .. } => {}
                outcome => options.extend(outcome.into_option()),
            }
        }

        rank_options(&mut options);
        info!(
            total_locations,
            considered_locations = options.len(),
            "allocation ranked"
        );
        Ok(Allocation::new(options, total_locations, demand.len()))
    }

    /// Serves independent requests in parallel. Results are in request order.
    pub fn allocate_batch<R>(&self, requests: &[R]) -> Vec<Result<Allocation, AllocateError>>
    where
        R: AsRef<[ItemRequest]> + Sync,
    {
        requests
            .par_iter()
            .map(|items| self.allocate(items.as_ref()))
            .collect()
    }
}

impl Solver for Allocator<'_> {
    type SolveError = AllocateError;

    fn solve(&self, items: &[ItemRequest]) -> Result<Allocation, Self::SolveError> {
        self.allocate(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rank::is_ranked;
    use lot_alloc_core::{
        cost::Cost,
        space::{SpaceArea, SpaceLength},
    };
    use lot_alloc_model::{
        catalog::CatalogBuilder,
        err::ItemRequestError,
        generator::{CatalogGenConfigBuilder, CatalogGenerator},
        id::{ListingId, LocationId},
        listing::Listing,
        option::AllocationOption,
    };
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;
    use static_assertions::assert_impl_all;
    use std::collections::HashSet;

    assert_impl_all!(Allocator<'static>: Send, Sync);
    assert_impl_all!(Allocation: Send, Sync);

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

    fn catalog(listings: Vec<Listing>) -> Catalog {
        let mut b = CatalogBuilder::new();
        for l in listings {
            b.add_listing(l).expect("unique id");
        }
        b.build()
    }

    fn items(raw: &[(i64, i64)]) -> Vec<ItemRequest> {
        raw.iter().map(|&(l, q)| ItemRequest::new(l, q)).collect()
    }

    fn locations(a: &Allocation) -> Vec<&str> {
        a.options().iter().map(|o| o.location_id().as_str()).collect()
    }

    fn generated(seed: u64) -> Catalog {
        let cfg = CatalogGenConfigBuilder::new()
            .location_count(30)
            .listings_per_location(1, 6)
            .seed(seed)
            .build()
            .expect("valid config");
        CatalogGenerator::new(cfg).generate().expect("valid catalog")
    }

    fn random_items(rng: &mut ChaCha8Rng) -> Vec<ItemRequest> {
        let n = rng.random_range(1..=4);
        (0..n)
            .map(|_| ItemRequest::new(rng.random_range(5..=45), rng.random_range(1..=3)))
            .collect()
    }

    #[test]
    fn test_single_listing_scenario() {
        let c = catalog(vec![listing("l1", "A", 5, 200, 500)]);
        let a = Allocator::with_defaults(&c)
            .allocate(&items(&[(10, 1)]))
            .expect("valid request");
        assert_eq!(
            a.options(),
            &[AllocationOption::new(
                LocationId::from("A"),
                vec![ListingId::from("l1")],
                Cost::new(500),
                false,
            )]
        );
        assert_eq!(a.total_locations(), 1);
        assert_eq!(a.considered_locations(), 1);
        assert_eq!(a.demand_units(), 1);
    }

    #[test]
    fn test_infeasible_location_is_omitted() {
        let c = catalog(vec![
            listing("small", "A", 20, 20, 100),
            listing("huge", "B", 100, 100, 9000),
        ]);
        let a = Allocator::with_defaults(&c)
            .allocate(&items(&[(10, 1), (20, 2), (25, 1)]))
            .unwrap();
        assert_eq!(locations(&a), vec!["B"]);
        assert_eq!(a.total_locations(), 2);
        assert_eq!(a.considered_locations(), 1);
    }

    #[test]
    fn test_price_tie_keeps_first_listing() {
        let c = catalog(vec![
            listing("first", "A", 10, 100, 300),
            listing("second", "A", 10, 100, 300),
        ]);
        let a = Allocator::with_defaults(&c).allocate(&items(&[(10, 1)])).unwrap();
        assert_eq!(a.options()[0].listing_ids(), &[ListingId::from("first")]);
        assert!(a.options()[0].more_listings_available());
    }

    #[test]
    fn test_empty_items_offer_cheapest_listing_per_location() {
        let c = catalog(vec![
            listing("a1", "A", 10, 10, 50),
            listing("b1", "B", 10, 10, 20),
            listing("a2", "A", 10, 10, 10),
        ]);
        let a = Allocator::with_defaults(&c).allocate(&[]).unwrap();
        let got: Vec<(&str, &str)> = a
            .options()
            .iter()
            .map(|o| (o.location_id().as_str(), o.listing_ids()[0].as_str()))
            .collect();
        assert_eq!(got, vec![("A", "a2"), ("B", "b1")]);
        assert_eq!(a.demand_units(), 0);
    }

    #[test]
    fn test_empty_items_with_empty_policy() {
        let c = catalog(vec![listing("a1", "A", 10, 10, 50)]);
        let cfg = AllocatorConfig {
            zero_demand: ZeroDemandPolicy::Empty,
            ..AllocatorConfig::default()
        };
        let a = Allocator::new(&c, cfg).unwrap().allocate(&[]).unwrap();
        assert!(a.is_empty());
        assert_eq!(a.total_locations(), 1);
    }

    #[test]
    fn test_empty_catalog_yields_empty_result() {
        let c = CatalogBuilder::new().build();
        let a = Allocator::with_defaults(&c).allocate(&items(&[(10, 2)])).unwrap();
        assert!(a.is_empty());
        assert_eq!(a.total_locations(), 0);
        let a = Allocator::with_defaults(&c).allocate(&[]).unwrap();
        assert!(a.is_empty());
    }

    #[test]
    fn test_invalid_item_is_rejected() {
        let c = catalog(vec![listing("a1", "A", 10, 10, 50)]);
        let e = Allocator::with_defaults(&c)
            .allocate(&items(&[(10, 1), (10, 0)]))
            .unwrap_err();
        assert_eq!(
            e,
            AllocateError::Validation(ItemRequestError::NonPositiveQuantity {
                index: 1,
                quantity: 0
            })
        );
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let c = CatalogBuilder::new().build();
        let cfg = AllocatorConfig {
            unit_footprint: SpaceArea::zero(),
            ..AllocatorConfig::default()
        };
        assert_eq!(
            Allocator::new(&c, cfg).unwrap_err(),
            AllocatorConfigError::ZeroUnitFootprint
        );
    }

    #[test]
    fn test_ranking_across_locations() {
        // Demand [200, 200], total 400.
        let c = catalog(vec![
            listing("c1", "C", 40, 10, 700),
            listing("a1", "A", 20, 20, 300),
            listing("a2", "A", 20, 20, 300),
            listing("b1", "B", 40, 15, 600),
            listing("d1", "D", 20, 20, 200),
            listing("d2", "D", 40, 11, 400),
        ]);
        let a = Allocator::with_defaults(&c).allocate(&items(&[(20, 2)])).unwrap();
        // A: single cover a1 (first of equal prices), 300.
        // B: single cover, 600. C: single cover, 700. D: single cover d1, 200.
        assert_eq!(locations(&a), vec!["D", "A", "B", "C"]);
        assert!(is_ranked(a.options()));
    }

    #[test]
    fn test_packed_and_single_options_rank_together() {
        // Demand [500, 500, 500], total 1500.
        let c = catalog(vec![
            listing("y", "P", 50, 20, 7),
            listing("b", "P", 50, 10, 3),
            listing("s", "S", 50, 30, 17),
            listing("t", "T", 50, 30, 20),
        ]);
        let a = Allocator::with_defaults(&c).allocate(&items(&[(50, 3)])).unwrap();
        // P packs for 17 with three uses, S covers for 17 with one.
        assert_eq!(locations(&a), vec!["S", "P", "T"]);
        assert_eq!(a.options()[1].listing_ids().len(), 3);
    }

    #[test]
    fn test_allocate_is_deterministic() {
        let c = generated(11);
        let allocator = Allocator::with_defaults(&c);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..20 {
            let req = random_items(&mut rng);
            let first = allocator.allocate(&req).unwrap();
            let second = allocator.allocate(&req).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_invariants_on_generated_catalogs() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        for seed in 0..10 {
            let c = generated(seed);
            let allocator = Allocator::with_defaults(&c);
            for _ in 0..10 {
                let req = random_items(&mut rng);
                let demand = Demand::expand(&req, allocator.config().unit_width).unwrap();
                let a = allocator.allocate(&req).unwrap();

                assert!(is_ranked(a.options()));

                let mut seen = HashSet::new();
                for o in a.options() {
                    assert!(seen.insert(o.location_id().clone()), "location repeated");

                    let used: Vec<&Listing> = o
                        .listing_ids()
                        .iter()
                        .map(|id| c.get(id).expect("listing exists"))
                        .collect();
                    assert!(used.iter().all(|l| l.location_id() == o.location_id()));

                    let covers: Vec<&Listing> = c
                        .iter()
                        .filter(|l| l.location_id() == o.location_id())
                        .filter(|l| l.area() >= demand.total_area())
                        .collect();
                    if let Some(cheapest) = covers.iter().map(|l| l.price()).min() {
                        assert_eq!(used.len(), 1, "a covering listing must be used alone");
                        assert_eq!(o.total_price(), cheapest);
                    } else {
                        assert_eq!(used.len(), demand.len());
                        let sum = used.iter().fold(Cost::new(0u64), |acc, l| acc + l.price());
                        assert_eq!(o.total_price(), sum);
                    }
                }
            }
        }
    }

    #[test]
    fn test_allocate_batch_matches_sequential() {
        let c = generated(3);
        let allocator = Allocator::with_defaults(&c);
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        let mut requests: Vec<Vec<ItemRequest>> = (0..16).map(|_| random_items(&mut rng)).collect();
        requests.push(items(&[(10, -1)]));

        let batch = allocator.allocate_batch(&requests);
        assert_eq!(batch.len(), requests.len());
        for (req, got) in requests.iter().zip(&batch) {
            assert_eq!(got, &allocator.allocate(req));
        }
        assert!(batch.last().unwrap().is_err());
    }

    #[test]
    fn test_solver_trait_delegates() {
        let c = catalog(vec![listing("l1", "A", 5, 200, 500)]);
        let allocator = Allocator::with_defaults(&c);
        let req = items(&[(10, 1)]);
        assert_eq!(allocator.solve(&req), allocator.allocate(&req));
    }
}
