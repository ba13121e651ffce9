//! The full query pipeline: filter, then sort, then paginate.

use crate::filter_pipeline::FilterPipeline;
use crate::paginate::{Page, paginate};
use crate::query::Query;
use crate::sort::sort_products;
use catalogue::Product;
use tracing::debug;

/// Produce the page of `items` described by `query`.
///
/// Total over any input: there is no error path. The caller's slice is
/// only borrowed; the returned page holds references into it.
///
/// ## Algorithm
/// 1. Keep the products that pass every criterion set on the query
/// 2. Order them by the single active sort key, if there is one
/// 3. Slice out the requested page and record `total_matched`
pub fn apply<'a>(items: &'a [Product], query: &Query) -> Page<'a> {
    let filters = FilterPipeline::from_query(query);
    let mut matched = filters.apply(items.iter().collect());

    if let Some(order) = query.sort_order() {
        debug!("Sorting {} products by {:?}", matched.len(), order);
        sort_products(&mut matched, order);
    }

    let page = paginate(matched, query.page, query.page_size);
    debug!(
        "Serving page {}/{} ({} of {} matched)",
        page.page,
        page.total_pages,
        page.items.len(),
        page.total_matched
    );
    page
}
