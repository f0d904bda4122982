use crate::extraction::Fragment;
use crate::layout::cluster::{cluster, UnitBuilder};
use crate::layout::sort::sort_fragments;
use crate::layout::LayoutOptions;

/// Builds one text line, inferring separators from horizontal gaps.
#[derive(Debug, Default)]
pub struct LineBuilder {
    current: String,
}

impl UnitBuilder for LineBuilder {
    type Unit = String;

    fn push(&mut self, text: &str, gap: Option<f64>, options: &LayoutOptions) {
        if let Some(gap) = gap {
            if gap > options.tab_gap {
                self.current.push('\t');
            } else if gap > options.space_gap
                && !self.current.is_empty()
                && !self.current.ends_with(' ')
            {
                self.current.push(' ');
            }
        }
        self.current.push_str(text);
    }

    fn finish(&mut self) -> Option<String> {
        let line = std::mem::take(&mut self.current);
        let trimmed = line.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

/// Reconstruct the lines of one page in reading order.
pub fn reconstruct_lines(mut fragments: Vec<Fragment>, options: &LayoutOptions) -> Vec<String> {
    sort_fragments(&mut fragments, options);
    let mut lines = Vec::new();
    cluster(&fragments, options, &mut LineBuilder::default(), |line| {
        lines.push(line)
    });
    lines
}

/// Reconstruct a page as plain text, one `\n`-terminated line per detected
/// baseline.
pub fn reconstruct_page_text(fragments: Vec<Fragment>, options: &LayoutOptions) -> String {
    reconstruct_lines(fragments, options)
        .into_iter()
        .fold(String::new(), |mut text, line| {
            text.push_str(&line);
            text.push('\n');
            text
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(fragments: Vec<Fragment>) -> String {
        reconstruct_page_text(fragments, &LayoutOptions::default())
    }

    #[test]
    fn test_large_gap_inserts_tab() {
        let out = text(vec![
            Fragment::new("a", 0.0, 10.0),
            Fragment::new("b", 25.0, 10.0),
        ]);
        assert_eq!(out, "a\tb\n");
    }

    #[test]
    fn test_medium_gap_inserts_space() {
        let out = text(vec![
            Fragment::new("a", 0.0, 10.0),
            Fragment::new("b", 8.0, 10.0),
        ]);
        assert_eq!(out, "a b\n");
    }

    #[test]
    fn test_small_gap_inserts_nothing() {
        let out = text(vec![
            Fragment::new("a", 0.0, 10.0),
            Fragment::new("b", 2.0, 10.0),
        ]);
        assert_eq!(out, "ab\n");
    }

    #[test]
    fn test_gap_boundaries_are_exclusive() {
        let out = text(vec![
            Fragment::new("a", 0.0, 10.0),
            Fragment::new("b", 5.0, 10.0),
            Fragment::new("c", 25.0, 10.0),
        ]);
        // 5 is not above space_gap, 20 is not above tab_gap.
        assert_eq!(out, "ab c\n");
    }

    #[test]
    fn test_within_tolerance_ordered_by_x() {
        let out = text(vec![
            Fragment::new("second", 50.0, 97.0),
            Fragment::new("first", 0.0, 100.0).with_width(40.0),
        ]);
        assert_eq!(out, "first second\n");
    }

    #[test]
    fn test_beyond_tolerance_breaks_regardless_of_x() {
        let out = text(vec![
            Fragment::new("lower", 0.0, 90.0),
            Fragment::new("upper", 300.0, 100.0),
        ]);
        assert_eq!(out, "upper\nlower\n");
    }

    #[test]
    fn test_negative_gap_joins_directly() {
        let out = text(vec![
            Fragment::new("over", 0.0, 10.0).with_width(30.0),
            Fragment::new("lap", 20.0, 10.0),
        ]);
        assert_eq!(out, "overlap\n");
    }

    #[test]
    fn test_whitespace_only_page_is_empty() {
        assert_eq!(text(vec![Fragment::new(" ", 0.0, 0.0)]), "");
    }
}
