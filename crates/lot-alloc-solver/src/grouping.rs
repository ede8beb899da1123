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

use lot_alloc_model::{catalog::Catalog, id::LocationId, listing::Listing};
use std::collections::HashMap;

/// The listings of one location, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationGroup<'c> {
    location_id: &'c LocationId,
    listings: Vec<&'c Listing>,
}

impl<'c> LocationGroup<'c> {
    #[inline]
    pub fn new(location_id: &'c LocationId, listings: Vec<&'c Listing>) -> Self {
        Self {
            location_id,
            listings,
        }
    }

    #[inline]
    pub fn location_id(&self) -> &'c LocationId {
        self.location_id
    }

    #[inline]
    pub fn listings(&self) -> &[&'c Listing] {
        &self.listings
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

/// A partition of a catalog by location. Groups are ordered by the first
/// appearance of their location in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LocationGroups<'c> {
    groups: Vec<LocationGroup<'c>>,
    index: HashMap<&'c LocationId, usize>,
}

impl<'c> LocationGroups<'c> {
    pub fn from_catalog(catalog: &'c Catalog) -> Self {
        Self::from_listings(catalog.iter())
    }

    pub fn from_listings<I>(listings: I) -> Self
    where
        I: IntoIterator<Item = &'c Listing>,
    {
        let mut groups: Vec<LocationGroup<'c>> = Vec::new();
        let mut index: HashMap<&'c LocationId, usize> = HashMap::new();
        for l in listings {
            let slot = *index.entry(l.location_id()).or_insert_with(|| {
                groups.push(LocationGroup::new(l.location_id(), Vec::new()));
                groups.len() - 1
            });
            groups[slot].listings.push(l);
        }
        Self { groups, index }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    #[inline]
    pub fn get(&self, location_id: &LocationId) -> Option<&LocationGroup<'c>> {
        let idx = self.index.get(location_id)?;
        self.groups.get(*idx)
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, LocationGroup<'c>> {
        self.groups.iter()
    }
}

impl<'a, 'c> IntoIterator for &'a LocationGroups<'c> {
    type Item = &'a LocationGroup<'c>;
    type IntoIter = std::slice::Iter<'a, LocationGroup<'c>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}
