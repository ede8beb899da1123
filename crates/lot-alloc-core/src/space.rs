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

use serde::{Deserialize, Serialize};

/// A one-dimensional extent (listing length or width, vehicle length).
#[repr(transparent)]
#[derive(
    Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SpaceLength(u64);

/// A two-dimensional footprint, the product of two [`SpaceLength`]s.
#[repr(transparent)]
#[derive(
    Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SpaceArea(u64);

impl std::fmt::Display for SpaceLength {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SpaceLength({})", self.0)
    }
}

impl std::fmt::Display for SpaceArea {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SpaceArea({})", self.0)
    }
}

impl From<u64> for SpaceLength {
    #[inline]
    fn from(v: u64) -> Self {
        SpaceLength(v)
    }
}

impl From<u64> for SpaceArea {
    #[inline]
    fn from(v: u64) -> Self {
        SpaceArea(v)
    }
}

impl SpaceLength {
    #[inline]
    pub const fn new(v: u64) -> Self {
        SpaceLength(v)
    }

    #[inline]
    pub const fn zero() -> Self {
        SpaceLength(0)
    }

    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn saturating_add(self, other: SpaceLength) -> Self {
        SpaceLength(self.0.saturating_add(other.0))
    }

    /// The rectangle spanned by `self` and `other`, or `None` on overflow.
    #[inline]
    pub fn checked_area(self, other: SpaceLength) -> Option<SpaceArea> {
        self.0.checked_mul(other.0).map(SpaceArea)
    }
}

impl SpaceArea {
    #[inline]
    pub const fn new(v: u64) -> Self {
        SpaceArea(v)
    }

    #[inline]
    pub const fn zero() -> Self {
        SpaceArea(0)
    }

    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn checked_add(self, other: SpaceArea) -> Option<Self> {
        self.0.checked_add(other.0).map(SpaceArea)
    }

    #[inline]
    pub fn checked_mul(self, factor: u64) -> Option<Self> {
        self.0.checked_mul(factor).map(SpaceArea)
    }

    /// How many whole `footprint`s fit into `self`. `None` for an empty footprint.
    #[inline]
    pub fn whole_fits(self, footprint: SpaceArea) -> Option<u64> {
        self.0.checked_div(footprint.0)
    }
}
