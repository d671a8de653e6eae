// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::create_test_lot;
use crate::{SearchResult, search};
use platemart_domain::{Category, Lot, Page, Query, SeriesPattern};

fn create_listing(count: u32) -> Vec<Lot> {
    (1..=count)
        .map(|n| create_test_lot(i64::from(n), "А124ВС", "77", f64::from(n) * 1_000.0))
        .collect()
}

#[test]
fn test_search_second_page() {
    let lots: Vec<Lot> = create_listing(25);
    let result: SearchResult<'_> = search(&Query::default(), Page::new(2, 10), &lots);

    assert_eq!(result.total, 25);
    let ids: Vec<i64> = result.items.iter().filter_map(|lot| lot.lot_id).collect();
    assert_eq!(ids, (11..=20).collect::<Vec<i64>>());
}

#[test]
fn test_search_total_counts_all_matches() {
    let mut lots: Vec<Lot> = create_listing(5);
    lots.push(create_test_lot(6, "М777ММ", "77", 9_000_000.0));
    let query: Query = Query {
        category: Some(Category::Random),
        pattern: Some(SeriesPattern::parse("А").unwrap()),
        ..Query::default()
    };

    let result: SearchResult<'_> = search(&query, Page::new(1, 2), &lots);

    assert_eq!(result.total, 5);
    assert_eq!(result.items.len(), 2);
}

#[test]
fn test_search_past_the_end() {
    let lots: Vec<Lot> = create_listing(3);
    let result: SearchResult<'_> = search(&Query::default(), Page::new(5, 20), &lots);

    assert_eq!(result.total, 3);
    assert!(result.items.is_empty());
}
