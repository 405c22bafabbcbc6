//! Greedy split planning
//!
//! A single left-to-right pass packs pages into contiguous parts: each page
//! is estimated once, then offered to the running accumulator; a rejection
//! closes the current part and opens the next one with the rejected page.

use lopdf::Document;

use crate::error::SplitError;
use crate::split::{estimate_page_size, Decision, PartAccumulator, PartRange};

/// Plan how to split `doc` into parts of roughly `target_bytes` each.
///
/// Estimates every page up front, so an unreadable page aborts the whole
/// operation before anything is written. A document with no pages yields an
/// empty plan. Deterministic: identical inputs always produce the same
/// plan.
pub fn plan(doc: &Document, target_bytes: u64) -> Result<Vec<PartRange>, SplitError> {
    let pages = doc.get_pages();
    let mut estimates = Vec::with_capacity(pages.len());

    for (index, page_id) in pages.into_values().enumerate() {
        let estimate = estimate_page_size(doc, index, page_id)?;
        log::debug!("Page {} estimated at {} bytes", index + 1, estimate);
        estimates.push(estimate);
    }

    Ok(pack_pages(&estimates, target_bytes))
}

/// Pack per-page estimates into ordered, contiguous part ranges.
///
/// The estimation pass and the packing pass are separate so that packing is
/// a pure function of the estimates.
pub fn pack_pages(estimates: &[u64], target_bytes: u64) -> Vec<PartRange> {
    if estimates.is_empty() {
        return Vec::new();
    }

    let mut plan = Vec::new();
    let mut part = PartAccumulator::new(0, target_bytes);

    for (index, &estimate) in estimates.iter().enumerate() {
        if part.try_add(index, estimate) == Decision::RejectedPartFull {
            let full = std::mem::replace(&mut part, PartAccumulator::new(index, target_bytes));
            plan.push(full.close());

            // A fresh accumulator accepts its first page unconditionally.
            let first = part.try_add(index, estimate);
            debug_assert_eq!(first, Decision::Accepted);
        }
    }

    plan.push(part.close());
    plan
}

#[cfg(test)]
mod tests {
    use super::*;

    const MB: u64 = 1024 * 1024;

    fn ranges(pairs: &[(usize, usize)]) -> Vec<PartRange> {
        pairs
            .iter()
            .map(|&(start, end)| PartRange { start, end })
            .collect()
    }

    #[test]
    fn test_uniform_pages_pack_to_budget() {
        // 10 pages of 10 MB at a 25 MB target: two pages fit (20 MB), a
        // third would reach 30 MB.
        let estimates = vec![10 * MB; 10];
        let plan = pack_pages(&estimates, 25 * MB);
        assert_eq!(
            plan,
            ranges(&[(0, 2), (2, 4), (4, 6), (6, 8), (8, 10)])
        );
    }

    #[test]
    fn test_oversized_page_forms_its_own_part() {
        let estimates = vec![5 * MB, 40 * MB, 5 * MB];
        let plan = pack_pages(&estimates, 20 * MB);
        assert_eq!(plan, ranges(&[(0, 1), (1, 2), (2, 3)]));
    }

    #[test]
    fn test_everything_fits_in_one_part() {
        let estimates = vec![MB, 2 * MB, 3 * MB];
        let plan = pack_pages(&estimates, 100 * MB);
        assert_eq!(plan, ranges(&[(0, 3)]));
    }

    #[test]
    fn test_exact_fit_minimizes_part_count() {
        let estimates = vec![10, 10, 10, 10];
        let plan = pack_pages(&estimates, 20);
        assert_eq!(plan, ranges(&[(0, 2), (2, 4)]));
    }

    #[test]
    fn test_no_pages_yields_no_parts() {
        assert!(pack_pages(&[], 10 * MB).is_empty());
    }

    #[test]
    fn test_plan_covers_every_page_exactly_once() {
        let estimates: Vec<u64> = (0..37).map(|i| (i % 7 + 1) * 3 * MB).collect();
        let plan = pack_pages(&estimates, 20 * MB);

        let mut next = 0;
        for range in &plan {
            assert_eq!(range.start, next, "ranges must be contiguous");
            assert!(range.page_count() >= 1, "parts must be non-empty");
            next = range.end;
        }
        assert_eq!(next, estimates.len());
    }

    #[test]
    fn test_non_singleton_parts_stay_within_budget() {
        let estimates: Vec<u64> = (0..50).map(|i| (i % 11 + 1) * 2 * MB).collect();
        let target = 15 * MB;
        for range in pack_pages(&estimates, target) {
            if range.page_count() > 1 {
                let total: u64 = estimates[range.start..range.end].iter().sum();
                assert!(total <= target, "{} exceeds target", range);
            }
        }
    }
}
