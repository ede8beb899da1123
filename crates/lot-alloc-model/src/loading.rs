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

//! Catalog loading from JSON exports.
//!
//! A catalog export is a JSON array of listing records:
//!
//! ```json
//! [
//!   { "id": "a1", "location_id": "loc-1", "length": 10, "width": 20, "price_in_cents": 500 }
//! ]
//! ```
//!
//! Records are validated one by one in file order, so the first offending
//! record is the one reported. The loader accepts a file path, any reader or
//! a string slice.

use crate::{
    catalog::{Catalog, CatalogBuilder},
    err::CatalogLoadError,
    listing::ListingRecord,
};
use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};
use tracing::debug;

#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogLoader;

impl CatalogLoader {
    #[inline]
    pub fn new() -> Self {
        Self
    }

    pub fn from_path<P: AsRef<Path>>(&self, path: P) -> Result<Catalog, CatalogLoadError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading catalog");
        let file = File::open(path)?;
        self.from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: Read>(&self, reader: R) -> Result<Catalog, CatalogLoadError> {
        let records: Vec<ListingRecord> = serde_json::from_reader(reader)?;
        self.from_records(records)
    }

    pub fn from_str(&self, s: &str) -> Result<Catalog, CatalogLoadError> {
        let records: Vec<ListingRecord> = serde_json::from_str(s)?;
        self.from_records(records)
    }

    fn from_records(&self, records: Vec<ListingRecord>) -> Result<Catalog, CatalogLoadError> {
        let mut builder = CatalogBuilder::with_capacity(records.len());
        builder.extend_records(records)?;
        let catalog = builder.build();
        debug!(
            listings = catalog.len(),
            locations = catalog.location_count(),
            "catalog loaded"
        );
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        err::{CatalogBuildError, ListingError},
        id::ListingId,
    };
    use std::io::Cursor;

    const SAMPLE: &str = r#"[
        {"id": "a1", "location_id": "loc-1", "length": 10, "width": 20, "price_in_cents": 500},
        {"id": 7, "location_id": "loc-2", "length": 40, "width": 10, "price_in_cents": 150},
        {"id": "a2", "location_id": "loc-1", "length": 30, "width": 30, "price_in_cents": 900}
    ]"#;

    #[test]
    fn test_load_from_str() {
        let c = CatalogLoader::new().from_str(SAMPLE).expect("valid catalog");
        assert_eq!(c.len(), 3);
        assert_eq!(c.location_count(), 2);
        assert!(c.get(&ListingId::from(7)).is_some());
        assert!(c.get(&ListingId::from("7")).is_none());
    }

    #[test]
    fn test_load_from_reader() {
        let c = CatalogLoader::new()
            .from_reader(Cursor::new(SAMPLE.as_bytes()))
            .expect("valid catalog");
        assert_eq!(c.len(), 3);
    }

    #[test]
    fn test_load_empty_array() {
        let c = CatalogLoader::new().from_str("[]").unwrap();
        assert!(c.is_empty());
    }

    #[test]
    fn test_load_malformed_json() {
        let e = CatalogLoader::new().from_str("{not json").unwrap_err();
        assert!(matches!(e, CatalogLoadError::Json(_)));
    }

    #[test]
    fn test_load_missing_field() {
        let e = CatalogLoader::new()
            .from_str(r#"[{"id": "a", "location_id": "l", "length": 1, "width": 1}]"#)
            .unwrap_err();
        assert!(matches!(e, CatalogLoadError::Json(_)));
    }

    #[test]
    fn test_load_reports_first_invalid_record() {
        let e = CatalogLoader::new()
            .from_str(
                r#"[
                {"id": "ok", "location_id": "l", "length": 1, "width": 1, "price_in_cents": 1},
                {"id": "bad", "location_id": "l", "length": 0, "width": 1, "price_in_cents": 1},
                {"id": "worse", "location_id": "l", "length": 1, "width": 1, "price_in_cents": -1}
            ]"#,
            )
            .unwrap_err();
        match e {
            CatalogLoadError::Build(CatalogBuildError::InvalidListing(le)) => {
                assert_eq!(le.id(), &ListingId::from("bad"));
                assert!(matches!(le, ListingError::NonPositiveDimension { .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_duplicate_ids() {
        let e = CatalogLoader::new()
            .from_str(
                r#"[
                {"id": 1, "location_id": "l", "length": 1, "width": 1, "price_in_cents": 1},
                {"id": 1, "location_id": "m", "length": 1, "width": 1, "price_in_cents": 1}
            ]"#,
            )
            .unwrap_err();
        match e {
            CatalogLoadError::Build(CatalogBuildError::DuplicateListingId(id)) => {
                assert_eq!(id, ListingId::from(1));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_integer_and_text_ids_coexist() {
        let c = CatalogLoader::new()
            .from_str(
                r#"[
                {"id": 1, "location_id": 3, "length": 1, "width": 1, "price_in_cents": 1},
                {"id": "1", "location_id": "3", "length": 1, "width": 1, "price_in_cents": 2}
            ]"#,
            )
            .expect("distinct ids");
        assert_eq!(c.len(), 2);
        assert_eq!(c.location_count(), 2);
        assert_eq!(c.get(&ListingId::from(1)).map(|l| l.price().value()), Some(1));
        assert_eq!(c.get(&ListingId::from("1")).map(|l| l.price().value()), Some(2));
    }

    #[test]
    fn test_load_missing_file() {
        let e = CatalogLoader::new()
            .from_path("/definitely/not/here/listings.json")
            .unwrap_err();
        assert!(matches!(e, CatalogLoadError::Io(_)));
    }
}
