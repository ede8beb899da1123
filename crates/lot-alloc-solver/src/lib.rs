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

//! # Lot Allocation Solver (`lot-alloc-solver`)
//!
//! For every location in a catalog, find the cheapest way to store a whole
//! request there and rank the locations that can.
//!
//! A request runs through four stages:
//!
//! 1. the item requests are expanded into a [`Demand`](lot_alloc_model::demand::Demand);
//! 2. the catalog is partitioned into [`grouping::LocationGroups`];
//! 3. each group is solved by [`location::LocationSolver`], first looking for a
//!    single covering listing and otherwise packing greedily;
//! 4. the feasible options are ordered by [`rank::rank_options`].
//!
//! [`allocator::Allocator`] wires the stages together and implements
//! [`solver::Solver`].

pub mod allocator;
pub mod config;
pub mod err;
pub mod grouping;
pub mod location;
pub mod rank;
pub mod solver;

pub mod prelude {
    pub use crate::allocator::Allocator;
    pub use crate::config::{AllocatorConfig, DEFAULT_UNIT_FOOTPRINT, ZeroDemandPolicy};
    pub use crate::err::{AllocateError, AllocatorConfigError, PriceOverflowError};
    pub use crate::grouping::{LocationGroup, LocationGroups};
    pub use crate::location::{LocationOutcome, LocationSolver};
    pub use crate::solver::{Allocation, Solver};
}
