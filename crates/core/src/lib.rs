// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod command;
mod error;
mod state;

#[cfg(test)]
mod tests;

use platemart_domain::{Lot, Page, Query, filter_lots, paginate};

// Re-export public types and functions
pub use apply::apply;
pub use command::{Command, LotPatch};
pub use error::CoreError;
pub use state::{SearchResult, SellerRegistration, TransitionResult};

/// Runs a listing query over a snapshot of lots.
///
/// The whole snapshot is filtered and sorted before the page is cut, so
/// `total` counts every match and page boundaries follow the sort order.
///
/// # Arguments
///
/// * `query` - Filters and sort order
/// * `page` - The page to return
/// * `lots` - The snapshot to search
#[must_use]
pub fn search<'a>(query: &Query, page: Page, lots: &'a [Lot]) -> SearchResult<'a> {
    let matched: Vec<&'a Lot> = filter_lots(query, lots);
    let total: usize = matched.len();
    let items: Vec<&'a Lot> = paginate(&matched, page).to_vec();
    SearchResult { items, total }
}
