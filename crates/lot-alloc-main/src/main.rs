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

use lot_alloc_model::prelude::*;
use lot_alloc_solver::{allocator::Allocator, config::AllocatorConfig, solver::Allocation};
use serde::Serialize;
use std::{env, error::Error, fs::File, io::BufReader, path::PathBuf, time::Instant};
use tracing::info;
use tracing_subscriber::EnvFilter;

const LISTINGS_ENV: &str = "LOT_ALLOC_LISTINGS";
const DEFAULT_LISTINGS_PATH: &str = "listings.json";

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[derive(Debug, Clone, Serialize)]
struct LocationSummary {
    location_id: LocationId,
    listing_count: usize,
    total_length: u64,
    total_width: u64,
}

#[derive(Debug, Clone, Serialize)]
struct Report<'a> {
    options: &'a [AllocationOption],
    locations: Vec<LocationSummary>,
    total_locations: usize,
    considered_locations: usize,
    demand_units: usize,
    elapsed_us: u128,
}

fn demo_items() -> Vec<ItemRequest> {
    vec![
        ItemRequest::new(10, 1),
        ItemRequest::new(20, 2),
        ItemRequest::new(25, 1),
    ]
}

fn listings_path(arg: Option<String>) -> PathBuf {
    arg.or_else(|| env::var(LISTINGS_ENV).ok())
        .unwrap_or_else(|| DEFAULT_LISTINGS_PATH.to_string())
        .into()
}

fn load_items(arg: Option<String>) -> Result<Vec<ItemRequest>, Box<dyn Error>> {
    match arg {
        Some(path) => {
            let file = File::open(&path)?;
            let items: Vec<ItemRequest> = serde_json::from_reader(BufReader::new(file))?;
            info!(path = %path, count = items.len(), "items loaded");
            Ok(items)
        }
        None => Ok(demo_items()),
    }
}

fn location_summaries(catalog: &Catalog) -> Vec<LocationSummary> {
    catalog
        .location_totals()
        .iter()
        .map(|t| LocationSummary {
            location_id: t.location_id().clone(),
            listing_count: t.listing_count(),
            total_length: t.total_length().value(),
            total_width: t.total_width().value(),
        })
        .collect()
}

fn print_report(
    catalog: &Catalog,
    allocation: &Allocation,
    elapsed_us: u128,
) -> Result<(), Box<dyn Error>> {
    let report = Report {
        options: allocation.options(),
        locations: location_summaries(catalog),
        total_locations: allocation.total_locations(),
        considered_locations: allocation.considered_locations(),
        demand_units: allocation.demand_units(),
        elapsed_us,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    enable_tracing();

    let mut args = env::args().skip(1);
    let path = listings_path(args.next());
    let items = load_items(args.next())?;

    let catalog = CatalogLoader::new().from_path(&path)?;
    info!(path = %path.display(), "catalog loaded");
    info!("{}", catalog.stats());

    let allocator = Allocator::new(&catalog, AllocatorConfig::default())?;
    let t0 = Instant::now();
    let allocation = allocator.allocate(&items)?;
    let elapsed = t0.elapsed();

    print_report(&catalog, &allocation, elapsed.as_micros())?;
    info!(
        total_locations = allocation.total_locations(),
        considered_locations = allocation.considered_locations(),
        elapsed_ms = elapsed.as_millis() as u64,
        "allocation finished"
    );
    Ok(())
}
