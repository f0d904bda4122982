use std::cmp::Ordering;

use crate::extraction::Fragment;
use crate::layout::LayoutOptions;

/// Reading-order comparator: higher baselines first, then left to right
/// among fragments whose baselines are within `line_tolerance`.
///
/// This is a single comparator, not a two-key sort. Chains of fragments that
/// hover around the tolerance are not transitively consistent, and callers
/// must not assume otherwise.
pub fn compare_fragments(a: &Fragment, b: &Fragment, options: &LayoutOptions) -> Ordering {
    let dy = b.y - a.y;
    if dy.abs() > options.line_tolerance {
        if dy > 0.0 {
            Ordering::Greater
        } else {
            Ordering::Less
        }
    } else {
        a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal)
    }
}

/// Sort a page's fragments into reading order.
///
/// `slice::sort_by` is allowed to panic when a comparator is not a total
/// order, which [`compare_fragments`] is not, so this uses a bottom-up merge
/// sort that only ever asks the comparator about pairs. Runs that are already
/// in order are concatenated without comparing their interiors, which makes
/// the sort idempotent.
pub fn sort_fragments(fragments: &mut Vec<Fragment>, options: &LayoutOptions) {
    let len = fragments.len();
    if len < 2 {
        return;
    }

    let mut src: Vec<Fragment> = std::mem::take(fragments);
    let mut width = 1;
    while width < len {
        let mut dst: Vec<Fragment> = Vec::with_capacity(len);
        let mut iter = src.into_iter();
        loop {
            let left: Vec<Fragment> = iter.by_ref().take(width).collect();
            if left.is_empty() {
                break;
            }
            let right: Vec<Fragment> = iter.by_ref().take(width).collect();
            merge_runs(left, right, &mut dst, options);
        }
        src = dst;
        width *= 2;
    }

    *fragments = src;
}

fn merge_runs(
    left: Vec<Fragment>,
    right: Vec<Fragment>,
    dst: &mut Vec<Fragment>,
    options: &LayoutOptions,
) {
    let in_order = match (left.last(), right.first()) {
        (Some(l), Some(r)) => compare_fragments(l, r, options) != Ordering::Greater,
        _ => true,
    };
    if in_order {
        dst.extend(left);
        dst.extend(right);
        return;
    }

    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare_fragments(l, r, options) == Ordering::Greater,
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        let next = if take_right { right.next() } else { left.next() };
        dst.extend(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frag(text: &str, x: f64, y: f64) -> Fragment {
        Fragment::new(text, x, y)
    }

    fn texts(fragments: &[Fragment]) -> Vec<&str> {
        fragments.iter().map(|f| f.text.as_str()).collect()
    }

    #[test]
    fn test_compare_higher_first() {
        let opts = LayoutOptions::default();
        let top = frag("top", 300.0, 100.0);
        let bottom = frag("bottom", 0.0, 80.0);
        assert_eq!(compare_fragments(&top, &bottom, &opts), Ordering::Less);
        assert_eq!(compare_fragments(&bottom, &top, &opts), Ordering::Greater);
    }

    #[test]
    fn test_compare_within_tolerance_uses_x() {
        let opts = LayoutOptions::default();
        let a = frag("a", 10.0, 100.0);
        let b = frag("b", 50.0, 103.0);
        assert_eq!(compare_fragments(&a, &b, &opts), Ordering::Less);
        assert_eq!(compare_fragments(&b, &a, &opts), Ordering::Greater);
    }

    #[test]
    fn test_sort_top_to_bottom_left_to_right() {
        let opts = LayoutOptions::default();
        let mut fragments = vec![
            frag("10", 200.0, 80.0),
            frag("Amount", 200.0, 100.0),
            frag("Alice", 0.0, 80.0),
            frag("Name", 0.0, 100.0),
        ];
        sort_fragments(&mut fragments, &opts);
        assert_eq!(texts(&fragments), vec!["Name", "Amount", "Alice", "10"]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let opts = LayoutOptions::default();
        let mut fragments = vec![
            frag("c", 40.0, 52.0),
            frag("a", 5.0, 700.0),
            frag("e", 0.0, 10.0),
            frag("b", 90.0, 698.0),
            frag("d", 80.0, 50.0),
        ];
        sort_fragments(&mut fragments, &opts);
        let once = fragments.clone();
        sort_fragments(&mut fragments, &opts);
        assert_eq!(fragments, once);
        assert_eq!(texts(&once), vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_inconsistent_chain_does_not_panic() {
        let opts = LayoutOptions::default();
        // Each neighbour is within tolerance, the ends are not.
        let mut fragments: Vec<Fragment> = (0..64)
            .map(|i| frag(&i.to_string(), (64 - i) as f64, (i % 7) as f64 * 3.0))
            .collect();
        sort_fragments(&mut fragments, &opts);
        assert_eq!(fragments.len(), 64);
    }
}
