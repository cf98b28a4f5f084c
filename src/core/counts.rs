use crate::core::color::color;
use crate::core::hype::hype;
use crate::domain::model::{DerivedMetrics, HypeLevelTable, PageOutcome, PageResult};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageState {
    Fetched(PageResult),
    Failed(String),
}

/// Per-page match counts for a single run.
///
/// Owned by the controller and only changed through [`CountsByPage::merge`].
/// Failed pages are tracked separately so they drop out of both the match
/// total and the sampled denominator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountsByPage {
    num_pages: usize,
    page_size: usize,
    pages: BTreeMap<usize, PageState>,
}

impl CountsByPage {
    pub fn new(num_pages: usize, page_size: usize) -> Self {
        Self {
            num_pages,
            page_size,
            pages: BTreeMap::new(),
        }
    }

    pub fn num_pages(&self) -> usize {
        self.num_pages
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Replace-on-resolve: the latest outcome for a page wins. Outcomes for
    /// pages outside `0..num_pages` are ignored and reported as `false`.
    pub fn merge(&mut self, outcome: PageOutcome) -> bool {
        let page = outcome.page();
        if page >= self.num_pages {
            tracing::warn!("Ignoring result for out-of-range page {}", page);
            return false;
        }

        let state = match outcome {
            PageOutcome::Fetched(result) => PageState::Fetched(PageResult {
                match_count: result.match_count.min(self.page_size),
                ..result
            }),
            PageOutcome::Failed { reason, .. } => PageState::Failed(reason),
        };
        self.pages.insert(page, state);
        true
    }

    pub fn get(&self, page: usize) -> Option<&PageState> {
        self.pages.get(&page)
    }

    pub fn total_matches(&self) -> usize {
        self.pages
            .values()
            .map(|state| match state {
                PageState::Fetched(result) => result.match_count,
                PageState::Failed(_) => 0,
            })
            .sum()
    }

    pub fn resolved(&self) -> usize {
        self.pages
            .values()
            .filter(|state| matches!(state, PageState::Fetched(_)))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.pages
            .values()
            .filter(|state| matches!(state, PageState::Failed(_)))
            .count()
    }

    pub fn pending(&self) -> usize {
        self.num_pages - self.pages.len()
    }

    pub fn pending_pages(&self) -> Vec<usize> {
        (0..self.num_pages)
            .filter(|page| !self.pages.contains_key(page))
            .collect()
    }

    /// Titles the percentage is measured against. Pending pages still count
    /// (the gauge climbs as they arrive); failed pages do not.
    pub fn sampled(&self) -> usize {
        (self.num_pages - self.failed()) * self.page_size
    }

    pub fn derive(&self, table: &HypeLevelTable) -> DerivedMetrics {
        let matched = self.total_matches();
        let sampled = self.sampled();
        let percent = if sampled == 0 {
            0.0
        } else {
            matched as f64 / sampled as f64
        };
        let hype = hype(percent);

        DerivedMetrics {
            matched,
            sampled,
            percent,
            hype,
            label: table.label(hype).to_string(),
            color: color(hype),
            pages_resolved: self.resolved(),
            pages_failed: self.failed(),
            pages_pending: self.pending(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetched(page: usize, match_count: usize) -> PageOutcome {
        PageOutcome::Fetched(PageResult {
            page,
            match_count,
            title_count: 10,
        })
    }

    fn failed(page: usize) -> PageOutcome {
        PageOutcome::Failed {
            page,
            reason: "connection reset".to_string(),
        }
    }

    #[test]
    fn test_empty_counts_derive_zero_percent() {
        let counts = CountsByPage::new(10, 10);
        let metrics = counts.derive(&HypeLevelTable::default());
        assert_eq!(metrics.matched, 0);
        assert_eq!(metrics.sampled, 100);
        assert_eq!(metrics.percent, 0.0);
        assert_eq!(metrics.pages_pending, 10);
        assert_eq!(metrics.label, "LOW-MODERATE");
    }

    #[test]
    fn test_seven_of_hundred_is_low_moderate() {
        let mut counts = CountsByPage::new(10, 10);
        let per_page = [1, 0, 2, 0, 0, 1, 0, 3, 0, 0];
        for (page, matches) in per_page.iter().enumerate() {
            counts.merge(fetched(page, *matches));
        }

        let metrics = counts.derive(&HypeLevelTable::default());
        assert_eq!(metrics.matched, 7);
        assert!((metrics.percent - 0.07).abs() < 1e-12);
        assert!((metrics.hype - 1.0 / (1.0 + 2.76f64.exp())).abs() < 1e-12);
        assert_eq!(metrics.label, "LOW-MODERATE");
        assert!(metrics.is_complete());
    }

    #[test]
    fn test_all_matching_is_catastrophic() {
        let mut counts = CountsByPage::new(10, 10);
        for page in 0..10 {
            counts.merge(fetched(page, 10));
        }
        let metrics = counts.derive(&HypeLevelTable::default());
        assert_eq!(metrics.percent, 1.0);
        assert!(metrics.hype > 0.999);
        assert_eq!(metrics.label, "CATASTROPHIC");
    }

    #[test]
    fn test_merging_same_result_twice_is_idempotent() {
        let mut counts = CountsByPage::new(10, 10);
        counts.merge(fetched(4, 3));
        let before = counts.clone();
        let metrics_before = counts.derive(&HypeLevelTable::default());

        counts.merge(fetched(4, 3));

        assert_eq!(counts, before);
        assert_eq!(counts.derive(&HypeLevelTable::default()), metrics_before);
    }

    #[test]
    fn test_later_result_replaces_earlier_one() {
        let mut counts = CountsByPage::new(2, 10);
        counts.merge(fetched(0, 5));
        counts.merge(fetched(0, 2));
        assert_eq!(counts.total_matches(), 2);

        counts.merge(failed(1));
        counts.merge(fetched(1, 1));
        assert_eq!(counts.failed(), 0);
        assert_eq!(counts.total_matches(), 3);
    }

    #[test]
    fn test_failed_pages_leave_the_denominator() {
        let mut counts = CountsByPage::new(4, 10);
        counts.merge(fetched(0, 5));
        counts.merge(failed(1));
        counts.merge(failed(2));

        let metrics = counts.derive(&HypeLevelTable::default());
        assert_eq!(metrics.sampled, 20);
        assert_eq!(metrics.percent, 0.25);
        assert_eq!(metrics.pages_resolved, 1);
        assert_eq!(metrics.pages_failed, 2);
        assert_eq!(metrics.pages_pending, 1);
        assert_eq!(counts.pending_pages(), vec![3]);
    }

    #[test]
    fn test_all_pages_failed_yields_zero_percent() {
        let mut counts = CountsByPage::new(2, 10);
        counts.merge(failed(0));
        counts.merge(failed(1));
        let metrics = counts.derive(&HypeLevelTable::default());
        assert_eq!(metrics.sampled, 0);
        assert_eq!(metrics.percent, 0.0);
        assert!(metrics.hype.is_finite());
    }

    #[test]
    fn test_out_of_range_page_is_ignored() {
        let mut counts = CountsByPage::new(2, 10);
        assert!(!counts.merge(fetched(7, 3)));
        assert_eq!(counts.total_matches(), 0);
        assert_eq!(counts.pending(), 2);
    }

    #[test]
    fn test_match_count_is_capped_at_page_size() {
        let mut counts = CountsByPage::new(1, 10);
        counts.merge(fetched(0, 25));
        assert_eq!(counts.total_matches(), 10);
    }
}
