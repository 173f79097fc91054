//! Pure query engine over an in-memory catalogue.
//!
//! Everything in this crate is a deterministic function of
//! `(catalog, query, page)` — no I/O, no suspension, no side effects. The
//! catalogue is borrowed, never copied: results are slices of references in
//! catalogue order.
//!
//! The two query modes deliberately disagree about empty input. Browsing
//! with no tag selected shows the whole catalogue, while searching with an
//! empty term shows *nothing* — that is the "no query yet" state of a search
//! view, not a filter that matched zero records. The asymmetry is observable
//! behaviour and is encoded in the [`Query`] enum so the two policies cannot
//! be accidentally merged.

use std::collections::BTreeSet;
use tuto_catalog::Catalog;
use tuto_catalog::models::Record;

/// Transient, view-scoped query parameters. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// The browse view: an optional single-valued tag filter.
    ///
    /// `None` (or an empty tag) retains every record. A non-empty tag
    /// retains records whose tag set contains it, matched exactly and
    /// case-sensitively.
    Browse { tag: Option<String> },
    /// The search view: a free-text term matched case-insensitively against
    /// record titles.
    ///
    /// An empty term yields the empty set.
    Search { term: String },
}

/// A 1-indexed page request with a fixed page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub number: usize,
    pub size: usize,
}

impl Page {
    /// # Panics
    ///
    /// Panics when `size` is zero; a page size is a positive constant
    /// (validated once at configuration load).
    pub fn new(number: usize, size: usize) -> Self {
        assert!(size > 0, "page size must be at least 1");
        Self { number, size }
    }

    /// Clamp the page number into `1..=total_pages`.
    ///
    /// The engine itself never clamps (an out-of-range page yields an empty
    /// slice); callers that want the nearest valid page apply this first.
    pub fn clamped(self, total_pages: usize) -> Self {
        Self { number: self.number.clamp(1, total_pages.max(1)), size: self.size }
    }
}

/// One page of query results, borrowed from the catalogue.
#[derive(Debug, PartialEq)]
pub struct ResultPage<'a> {
    /// The visible slice, catalogue order preserved
    pub visible: Vec<&'a Record>,
    /// Always at least 1, even for an empty result set
    pub total_pages: usize,
}

/// Run a query against the catalogue and slice out one page.
///
/// Filtering happens first, pagination second. The page number is *not*
/// clamped: page 0 or a page past the end yields an empty `visible` slice
/// alongside the true `total_pages`.
///
/// # Examples
///
/// ```
/// use tuto_query::{Page, Query, run};
/// use tuto_catalog::Catalog;
///
/// let catalog: Catalog = serde_json::from_str(r#"[
///     {"id": 1, "title": "Intro", "type": "tutorial", "tags": ["js"]},
///     {"id": 2, "title": "Advanced", "type": "article", "tags": ["js", "perf"]}
/// ]"#).unwrap();
///
/// let page = run(&catalog, &Query::Search { term: "adv".into() }, Page::new(1, 2));
/// assert_eq!(page.visible.len(), 1);
/// assert_eq!(page.visible[0].title, "Advanced");
/// ```
pub fn run<'a>(catalog: &'a Catalog, query: &Query, page: Page) -> ResultPage<'a> {
    let filtered = filter(catalog, query);
    let total_pages = total_pages(filtered.len(), page.size);
    ResultPage { visible: paginate(filtered, page), total_pages }
}

/// Apply a query's filter without pagination, order preserved.
pub fn filter<'a>(catalog: &'a Catalog, query: &Query) -> Vec<&'a Record> {
    match query {
        Query::Browse { tag } => match tag.as_deref() {
            None | Some("") => catalog.records().iter().collect(),
            Some(tag) => catalog.records().iter().filter(|record| record.has_tag(tag)).collect(),
        },
        Query::Search { term } if term.is_empty() => Vec::new(),
        Query::Search { term } => {
            let needle = term.to_lowercase();
            catalog
                .records()
                .iter()
                .filter(|record| record.title.to_lowercase().contains(&needle))
                .collect()
        },
    }
}

/// `max(1, ceil(filtered / page_size))`.
pub fn total_pages(filtered: usize, page_size: usize) -> usize {
    filtered.div_ceil(page_size).max(1)
}

/// The de-duplicated union of every record's tags.
///
/// Selection lists don't care about order; the sorted set is just a
/// deterministic way of not caring.
pub fn tag_universe(catalog: &Catalog) -> BTreeSet<&str> {
    catalog.records().iter().flat_map(|record| record.tags.iter().map(String::as_str)).collect()
}

fn paginate(filtered: Vec<&Record>, page: Page) -> Vec<&Record> {
    let Some(zero_based) = page.number.checked_sub(1) else {
        return Vec::new();
    };
    // A page number large enough to overflow the offset is out of range by
    // definition, so it gets the same empty slice as any other overshoot.
    let Some(offset) = zero_based.checked_mul(page.size) else {
        return Vec::new();
    };
    filtered.into_iter().skip(offset).take(page.size).collect()
}
