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

use lot_alloc_core::space::SpaceLength;

use super::err::{CatalogGenConfigBuildError, EmptyRangeError};

/// Configuration for synthetic catalog generation.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogGenConfig {
    pub(crate) location_count: usize,
    pub(crate) min_listings_per_location: usize,
    pub(crate) max_listings_per_location: usize,

    pub(crate) min_length: SpaceLength,
    pub(crate) max_length: SpaceLength,
    pub(crate) min_width: SpaceLength,
    pub(crate) max_width: SpaceLength,

    /// Mean price in cents per unit of area.
    pub(crate) price_per_area: f64,
    /// Standard deviation of the price as a fraction of its mean.
    pub(crate) price_sigma: f64,

    /// Interleave locations in catalog order instead of grouping them.
    pub(crate) shuffle: bool,
    pub(crate) seed: u64,
}

impl Default for CatalogGenConfig {
    fn default() -> Self {
        Self {
            location_count: 25,
            min_listings_per_location: 1,
            max_listings_per_location: 8,
            min_length: SpaceLength::new(10),
            max_length: SpaceLength::new(50),
            min_width: SpaceLength::new(10),
            max_width: SpaceLength::new(40),
            price_per_area: 0.5,
            price_sigma: 0.25,
            shuffle: true,
            seed: 42,
        }
    }
}

impl CatalogGenConfig {
    #[inline]
    pub fn location_count(&self) -> usize {
        self.location_count
    }

    #[inline]
    pub fn min_listings_per_location(&self) -> usize {
        self.min_listings_per_location
    }

    #[inline]
    pub fn max_listings_per_location(&self) -> usize {
        self.max_listings_per_location
    }

    #[inline]
    pub fn min_length(&self) -> SpaceLength {
        self.min_length
    }

    #[inline]
    pub fn max_length(&self) -> SpaceLength {
        self.max_length
    }

    #[inline]
    pub fn min_width(&self) -> SpaceLength {
        self.min_width
    }

    #[inline]
    pub fn max_width(&self) -> SpaceLength {
        self.max_width
    }

    #[inline]
    pub fn price_per_area(&self) -> f64 {
        self.price_per_area
    }

    #[inline]
    pub fn price_sigma(&self) -> f64 {
        self.price_sigma
    }

    #[inline]
    pub fn shuffle(&self) -> bool {
        self.shuffle
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

#[derive(Debug, Clone, Default)]
pub struct CatalogGenConfigBuilder {
    cfg: CatalogGenConfig,
}

impl CatalogGenConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn location_count(mut self, n: usize) -> Self {
        self.cfg.location_count = n;
        self
    }

    pub fn listings_per_location(mut self, min: usize, max: usize) -> Self {
        self.cfg.min_listings_per_location = min;
        self.cfg.max_listings_per_location = max;
        self
    }

    pub fn length_range(mut self, min: SpaceLength, max: SpaceLength) -> Self {
        self.cfg.min_length = min;
        self.cfg.max_length = max;
        self
    }

    pub fn width_range(mut self, min: SpaceLength, max: SpaceLength) -> Self {
        self.cfg.min_width = min;
        self.cfg.max_width = max;
        self
    }

    pub fn price_per_area(mut self, rate: f64) -> Self {
        self.cfg.price_per_area = rate;
        self
    }

    pub fn price_sigma(mut self, sigma: f64) -> Self {
        self.cfg.price_sigma = sigma;
        self
    }

    pub fn shuffle(mut self, yes: bool) -> Self {
        self.cfg.shuffle = yes;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.cfg.seed = seed;
        self
    }

    pub fn build(self) -> Result<CatalogGenConfig, CatalogGenConfigBuildError> {
        let c = self.cfg;
        if c.location_count == 0 {
            return Err(CatalogGenConfigBuildError::NoLocations);
        }
        if c.min_listings_per_location > c.max_listings_per_location {
            return Err(EmptyRangeError::new(
                "listings per location",
                c.min_listings_per_location as u64,
                c.max_listings_per_location as u64,
            )
            .into());
        }
        for (what, min, max) in [
            ("length", c.min_length, c.max_length),
            ("width", c.min_width, c.max_width),
        ] {
            if min.is_zero() {
                return Err(CatalogGenConfigBuildError::ZeroDimension(min));
            }
            if min > max {
                return Err(EmptyRangeError::new(what, min.value(), max.value()).into());
            }
        }
        if !c.price_per_area.is_finite() || c.price_per_area < 0.0 {
            return Err(CatalogGenConfigBuildError::InvalidPriceRate(
                c.price_per_area,
            ));
        }
        if !c.price_sigma.is_finite() || c.price_sigma < 0.0 {
            return Err(CatalogGenConfigBuildError::InvalidPriceSigma(c.price_sigma));
        }
        Ok(c)
    }
}
