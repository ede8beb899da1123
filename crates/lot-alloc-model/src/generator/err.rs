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
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyRangeError {
    what: &'static str,
    min: u64,
    max: u64,
}

impl EmptyRangeError {
    pub fn new(what: &'static str, min: u64, max: u64) -> Self {
        Self { what, min, max }
    }

    pub fn what(&self) -> &'static str {
        self.what
    }

    pub fn min(&self) -> u64 {
        self.min
    }

    pub fn max(&self) -> u64 {
        self.max
    }
}

impl Display for EmptyRangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "EmptyRangeError: {} range [{}, {}] is empty",
            self.what, self.min, self.max
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogGenConfigBuildError {
    EmptyRange(EmptyRangeError),
    NoLocations,
    InvalidPriceRate(f64),
    InvalidPriceSigma(f64),
    ZeroDimension(SpaceLength),
}

impl Display for CatalogGenConfigBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use CatalogGenConfigBuildError::*;
        match self {
            EmptyRange(e) => write!(f, "{}", e),
            NoLocations => write!(f, "At least one location is required"),
            InvalidPriceRate(r) => write!(f, "Invalid price rate per unit area: {}", r),
            InvalidPriceSigma(s) => write!(f, "Invalid relative price sigma: {}", s),
            ZeroDimension(l) => write!(f, "Listing dimensions must be positive, got {}", l),
        }
    }
}

impl From<EmptyRangeError> for CatalogGenConfigBuildError {
    fn from(err: EmptyRangeError) -> Self {
        Self::EmptyRange(err)
    }
}

impl std::error::Error for CatalogGenConfigBuildError {}
