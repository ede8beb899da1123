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

use crate::err::AllocatorConfigError;
use lot_alloc_core::space::{SpaceArea, SpaceLength};
use lot_alloc_model::demand::DEFAULT_UNIT_WIDTH;
use std::fmt::Display;

/// Footprint assumed for one vehicle when computing how many vehicles a
/// listing holds: a 10 × 40 rectangle, independent of the vehicle's length.
pub const DEFAULT_UNIT_FOOTPRINT: SpaceArea = SpaceArea::new(10 * 40);

/// What an allocation request without any items resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZeroDemandPolicy {
    /// Every location qualifies through the single-listing check with its
    /// cheapest listing; zero demand is covered by any listing.
    #[default]
    CheapestListing,
    /// No location is offered.
    Empty,
}

impl Display for ZeroDemandPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ZeroDemandPolicy::CheapestListing => write!(f, "CheapestListing"),
            ZeroDemandPolicy::Empty => write!(f, "Empty"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocatorConfig {
    /// Width every vehicle length is scaled by when expanding demand.
    pub unit_width: SpaceLength,
    /// Area one vehicle occupies inside a listing during packing.
    pub unit_footprint: SpaceArea,
    pub zero_demand: ZeroDemandPolicy,
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self {
            unit_width: DEFAULT_UNIT_WIDTH,
            unit_footprint: DEFAULT_UNIT_FOOTPRINT,
            zero_demand: ZeroDemandPolicy::default(),
        }
    }
}

impl AllocatorConfig {
    pub fn validate(&self) -> Result<(), AllocatorConfigError> {
        if self.unit_width.is_zero() {
            return Err(AllocatorConfigError::ZeroUnitWidth);
        }
        if self.unit_footprint.is_zero() {
            return Err(AllocatorConfigError::ZeroUnitFootprint);
        }
        Ok(())
    }
}
