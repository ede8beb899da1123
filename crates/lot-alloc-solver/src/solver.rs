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

use lot_alloc_model::{item::ItemRequest, option::AllocationOption};
use std::fmt::Display;

/// The ranked answer to one allocation request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Allocation {
    options: Vec<AllocationOption>,
    total_locations: usize,
    demand_units: usize,
}

impl Allocation {
    #[inline]
    pub fn new(options: Vec<AllocationOption>, total_locations: usize, demand_units: usize) -> Self {
        Self {
            options,
            total_locations,
            demand_units,
        }
    }

    #[inline]
    pub fn options(&self) -> &[AllocationOption] {
        &self.options
    }

    /// Distinct locations present in the catalog.
    #[inline]
    pub fn total_locations(&self) -> usize {
        self.total_locations
    }

    /// Locations that can take the whole request.
    #[inline]
    pub fn considered_locations(&self) -> usize {
        self.options.len()
    }

    #[inline]
    pub fn demand_units(&self) -> usize {
        self.demand_units
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl Display for Allocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for o in &self.options {
            writeln!(f, "{}", o)?;
            writeln!(f)?;
        }
        writeln!(f, "Total Locations: {}", self.total_locations)?;
        write!(f, "Considered Locations: {}", self.considered_locations())
    }
}

pub trait Solver {
    type SolveError;

    fn solve(&self, items: &[ItemRequest]) -> Result<Allocation, Self::SolveError>;
}
