//! Result partitioning and category filtering.

use crate::state::{Category, ResultKind, SearchResult};

/// Results split into display groups, each in server order.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Partitioned<'a> {
    /// Course hits.
    pub courses: Vec<&'a SearchResult>,
    /// Module hits.
    pub modules: Vec<&'a SearchResult>,
}

impl<'a> Partitioned<'a> {
    /// What: Flatten the groups allowed by `category` into the navigation list.
    ///
    /// Details:
    /// - Courses always come before modules; relative order inside a group is kept.
    #[must_use]
    pub fn visible(&self, category: Category) -> Vec<&'a SearchResult> {
        let mut out = Vec::with_capacity(self.courses.len() + self.modules.len());
        if category.shows_courses() {
            out.extend(self.courses.iter().copied());
        }
        if category.shows_modules() {
            out.extend(self.modules.iter().copied());
        }
        out
    }
}

/// What: Split a result set into course and module groups.
///
/// Inputs:
/// - `results`: Result set in server order.
///
/// Output:
/// - Borrowed groups; content hits are not grouped.
#[must_use]
pub fn partition(results: &[SearchResult]) -> Partitioned<'_> {
    let mut parts = Partitioned::default();
    for r in results {
        match r.kind() {
            ResultKind::Course => parts.courses.push(r),
            ResultKind::Module => parts.modules.push(r),
            ResultKind::Content => {}
        }
    }
    parts
}

/// Flattened, category-filtered list used for keyboard index arithmetic.
#[must_use]
pub fn visible_results(results: &[SearchResult], category: Category) -> Vec<&SearchResult> {
    partition(results).visible(category)
}

/// Length of [`visible_results`] without allocating the list.
#[must_use]
pub fn visible_len(results: &[SearchResult], category: Category) -> usize {
    results
        .iter()
        .filter(|r| match r.kind() {
            ResultKind::Course => category.shows_courses(),
            ResultKind::Module => category.shows_modules(),
            ResultKind::Content => false,
        })
        .count()
}
