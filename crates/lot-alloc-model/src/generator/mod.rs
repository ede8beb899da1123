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

//! Seeded synthetic catalogs for benchmarks and invariant tests.

mod config;
mod err;

pub use config::{CatalogGenConfig, CatalogGenConfigBuilder};
pub use err::{CatalogGenConfigBuildError, EmptyRangeError};

use crate::{
    catalog::{Catalog, CatalogBuilder},
    err::CatalogBuildError,
    id::{ListingId, LocationId},
    listing::Listing,
};
use lot_alloc_core::{cost::Cost, space::SpaceLength};
use rand::{Rng, SeedableRng, rngs::SmallRng, seq::SliceRandom};
use rand_distr::{Distribution, Normal, Uniform};

pub struct CatalogGenerator {
    config: CatalogGenConfig,
    rng: SmallRng,
    next_listing: u64,
}

impl From<CatalogGenConfig> for CatalogGenerator {
    fn from(config: CatalogGenConfig) -> Self {
        Self::new(config)
    }
}

impl CatalogGenerator {
    pub fn new(config: CatalogGenConfig) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(config.seed()),
            config,
            next_listing: 0,
        }
    }

    #[inline]
    pub fn config(&self) -> &CatalogGenConfig {
        &self.config
    }

    #[inline]
    fn fresh_listing_id(&mut self) -> ListingId {
        let id = self.next_listing;
        self.next_listing += 1;
        ListingId::new(format!("listing-{id}"))
    }

    fn sample_dimension(&mut self, min: SpaceLength, max: SpaceLength) -> SpaceLength {
        match Uniform::new_inclusive(min.value(), max.value()) {
            Ok(d) => SpaceLength::new(d.sample(&mut self.rng)),
            Err(_) => min,
        }
    }

    fn sample_price(&mut self, area: u64) -> Cost<u64> {
        let mean = area as f64 * self.config.price_per_area();
        let sd = mean * self.config.price_sigma();
        let raw = match Normal::new(mean, sd) {
            Ok(n) => n.sample(&mut self.rng),
            Err(_) => mean,
        };
        Cost::new(raw.round().max(0.0) as u64)
    }

    /// Generates a fresh catalog. Consecutive calls continue the random stream
    /// and the listing id sequence.
    pub fn generate(&mut self) -> Result<Catalog, CatalogBuildError> {
        let c = self.config.clone();
        let mut listings = Vec::new();

        for loc in 0..c.location_count() {
            let location_id = LocationId::new(format!("location-{loc}"));
            let n = self
                .rng
                .random_range(c.min_listings_per_location()..=c.max_listings_per_location());
            for _ in 0..n {
                let length = self.sample_dimension(c.min_length(), c.max_length());
                let width = self.sample_dimension(c.min_width(), c.max_width());
                let area = length.value().saturating_mul(width.value());
                let price = self.sample_price(area);
                let id = self.fresh_listing_id();
                listings.push(Listing::new(id, location_id.clone(), length, width, price)?);
            }
        }

        if c.shuffle() {
            listings.shuffle(&mut self.rng);
        }

        let mut builder = CatalogBuilder::with_capacity(listings.len());
        for l in listings {
            builder.add_listing(l)?;
        }
        Ok(builder.build())
    }
}
