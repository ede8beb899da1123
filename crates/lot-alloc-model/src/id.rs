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
use std::fmt::Display;

/// Wire form of an identifier. Catalog exports use both strings and plain
/// integers for ids, and an id is written back in the form it was read.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Text(String),
    Unsigned(u64),
    Signed(i64),
}

/// Whether an id was given as a JSON string or a JSON integer. Ids of
/// different kinds never compare equal, so `7` and `"7"` are distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum IdKind {
    #[default]
    Text,
    Integer,
}

fn from_raw(raw: RawId) -> (String, IdKind) {
    match raw {
        RawId::Text(s) => (s, IdKind::Text),
        RawId::Unsigned(n) => (n.to_string(), IdKind::Integer),
        RawId::Signed(n) => (n.to_string(), IdKind::Integer),
    }
}

fn to_raw(text: String, kind: IdKind) -> RawId {
    if kind == IdKind::Integer {
        if let Ok(n) = text.parse::<u64>() {
            return RawId::Unsigned(n);
        }
        if let Ok(n) = text.parse::<i64>() {
            return RawId::Signed(n);
        }
    }
    RawId::Text(text)
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "RawId", into = "RawId")]
pub struct ListingId {
    text: String,
    kind: IdKind,
}

impl ListingId {
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            text: id.into(),
            kind: IdKind::Text,
        }
    }

    /// The textual form; integer ids are rendered in decimal.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn kind(&self) -> IdKind {
        self.kind
    }
}

impl Display for ListingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ListingId({})", self.text)
    }
}

impl From<&str> for ListingId {
    fn from(value: &str) -> Self {
        ListingId::new(value)
    }
}

impl From<u64> for ListingId {
    fn from(value: u64) -> Self {
        RawId::Unsigned(value).into()
    }
}

impl From<RawId> for ListingId {
    fn from(value: RawId) -> Self {
        let (text, kind) = from_raw(value);
        Self { text, kind }
    }
}

impl From<ListingId> for RawId {
    fn from(value: ListingId) -> Self {
        to_raw(value.text, value.kind)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "RawId", into = "RawId")]
pub struct LocationId {
    text: String,
    kind: IdKind,
}

impl LocationId {
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            text: id.into(),
            kind: IdKind::Text,
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn kind(&self) -> IdKind {
        self.kind
    }
}

impl Display for LocationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LocationId({})", self.text)
    }
}

impl From<&str> for LocationId {
    fn from(value: &str) -> Self {
        LocationId::new(value)
    }
}

impl From<u64> for LocationId {
    fn from(value: u64) -> Self {
        RawId::Unsigned(value).into()
    }
}

impl From<RawId> for LocationId {
    fn from(value: RawId) -> Self {
        let (text, kind) = from_raw(value);
        Self { text, kind }
    }
}

impl From<LocationId> for RawId {
    fn from(value: LocationId) -> Self {
        to_raw(value.text, value.kind)
    }
}
