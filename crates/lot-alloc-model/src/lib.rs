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

//! # Lot Allocation Model (`lot-alloc-model`)
//!
//! This crate provides the data model of the storage allocation problem: a
//! read-only [`catalog::Catalog`] of rentable [`listing::Listing`]s spread over
//! locations, the [`item::ItemRequest`]s a customer submits, the
//! [`demand::Demand`] those requests expand into, and the
//! [`option::AllocationOption`]s a solver hands back.
//!
//! ## Key Data Structures
//!
//! - **`ListingId` / `LocationId`**: identifiers as they appear in a catalog
//!   export, either JSON strings or JSON integers. The form is kept, so an
//!   integer id is written back as an integer and never equals a string id.
//!
//! - **`Listing`**: a validated storage space with strictly positive length
//!   and width, a non-negative price in cents, and a precomputed area.
//!
//! - **`Catalog`**: listings in catalog order, with lookup by id and the list of
//!   distinct locations in order of first appearance. Built once through
//!   `CatalogBuilder` or `CatalogLoader` and never mutated afterwards.
//!
//! - **`Demand`**: the ordered sequence of per-vehicle space units plus their
//!   total area. Construction validates every request up front.
//!
//! - **`AllocationOption`**: the listings chosen at one location, their total
//!   price and whether the location has listings left over.
//!
//! The `generator` module produces seeded synthetic catalogs for benchmarks
//! and invariant tests.

pub mod catalog;
pub mod demand;
pub mod err;
pub mod generator;
pub mod id;
pub mod item;
pub mod listing;
pub mod loading;
pub mod option;
pub mod stats;

pub mod prelude {
    pub use crate::catalog::{Catalog, CatalogBuilder};
    pub use crate::demand::{DEFAULT_UNIT_WIDTH, Demand, SpaceUnit};
    pub use crate::err::{
        CatalogBuildError, CatalogLoadError, ItemRequestError, ListingError, ValidationError,
    };
    pub use crate::generator::{CatalogGenConfig, CatalogGenConfigBuilder, CatalogGenerator};
    pub use crate::id::{IdKind, ListingId, LocationId};
    pub use crate::item::ItemRequest;
    pub use crate::listing::{Listing, ListingRecord};
    pub use crate::loading::CatalogLoader;
    pub use crate::option::AllocationOption;
    pub use crate::stats::{CatalogStats, LocationTotals};
}
