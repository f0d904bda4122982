use crate::extraction::Fragment;
use crate::layout::LayoutOptions;

/// Accumulates the fragments of one open unit (a line or a row).
pub trait UnitBuilder {
    type Unit;

    /// Merge a fragment's trimmed text into the open unit.
    ///
    /// `gap` is the horizontal distance from the previous fragment's estimated
    /// right edge when the fragment continues the current line, and `None`
    /// when it opens a new unit.
    fn push(&mut self, text: &str, gap: Option<f64>, options: &LayoutOptions);

    /// Close the open unit. Returns `None` when there is nothing to flush.
    fn finish(&mut self) -> Option<Self::Unit>;
}

/// Scan sorted fragments once, grouping consecutive fragments whose baselines
/// stay within `line_tolerance` of the previous fragment into one unit.
///
/// Fragments with blank text are skipped without touching the scan state.
/// Units are flushed in scan order.
pub fn cluster<B, F>(fragments: &[Fragment], options: &LayoutOptions, builder: &mut B, mut flush: F)
where
    B: UnitBuilder,
    F: FnMut(B::Unit),
{
    // (baseline, estimated right edge) of the last kept fragment
    let mut last: Option<(f64, f64)> = None;

    for fragment in fragments {
        let text = fragment.text.trim();
        if text.is_empty() {
            tracing::trace!(x = fragment.x, y = fragment.y, "skipping blank fragment");
            continue;
        }

        let gap = match last {
            Some((last_y, _)) if options.breaks_line(fragment.y, last_y) => {
                if let Some(unit) = builder.finish() {
                    flush(unit);
                }
                None
            }
            Some((_, last_right)) => Some(fragment.x - last_right),
            None => None,
        };

        builder.push(text, gap, options);
        last = Some((fragment.y, fragment.right_edge()));
    }

    if let Some(unit) = builder.finish() {
        flush(unit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every push so tests can inspect the gaps the scan computed.
    #[derive(Default)]
    struct Recorder {
        open: Vec<(String, Option<f64>)>,
    }

    impl UnitBuilder for Recorder {
        type Unit = Vec<(String, Option<f64>)>;

        fn push(&mut self, text: &str, gap: Option<f64>, _options: &LayoutOptions) {
            self.open.push((text.to_string(), gap));
        }

        fn finish(&mut self) -> Option<Self::Unit> {
            if self.open.is_empty() {
                None
            } else {
                Some(std::mem::take(&mut self.open))
            }
        }
    }

    fn run(fragments: &[Fragment]) -> Vec<Vec<(String, Option<f64>)>> {
        let mut units = Vec::new();
        cluster(
            fragments,
            &LayoutOptions::default(),
            &mut Recorder::default(),
            |u| units.push(u),
        );
        units
    }

    #[test]
    fn test_gap_measured_from_right_edge() {
        let units = run(&[
            Fragment::new("ab", 10.0, 50.0).with_width(12.0),
            Fragment::new("cd", 30.0, 50.0),
        ]);
        assert_eq!(units.len(), 1);
        assert_eq!(units[0][0], ("ab".to_string(), None));
        assert_eq!(units[0][1], ("cd".to_string(), Some(8.0)));
    }

    #[test]
    fn test_break_compares_with_previous_fragment() {
        // 100 -> 96 -> 92 drifts 8 overall but each step stays in tolerance.
        let units = run(&[
            Fragment::new("a", 0.0, 100.0),
            Fragment::new("b", 10.0, 96.0),
            Fragment::new("c", 20.0, 92.0),
            Fragment::new("d", 0.0, 70.0),
        ]);
        assert_eq!(units.len(), 2);
        assert_eq!(units[0].len(), 3);
        assert_eq!(units[1][0], ("d".to_string(), None));
    }

    #[test]
    fn test_blank_fragments_do_not_reset_state() {
        let units = run(&[
            Fragment::new("a", 0.0, 100.0).with_width(5.0),
            Fragment::new("   ", 500.0, 10.0),
            Fragment::new("b", 7.0, 100.0),
        ]);
        assert_eq!(units.len(), 1);
        assert_eq!(units[0][1], ("b".to_string(), Some(2.0)));
    }

    #[test]
    fn test_text_is_trimmed() {
        let units = run(&[Fragment::new("  padded \t", 0.0, 0.0)]);
        assert_eq!(units[0][0].0, "padded");
    }

    #[test]
    fn test_empty_page_flushes_nothing() {
        assert!(run(&[]).is_empty());
        assert!(run(&[Fragment::new("", 0.0, 0.0)]).is_empty());
    }
}
