//! Grid/ownership fallback for "plot traversal" style puzzles.
//!
//! When no explicit edges are found but the text talks about colored or
//! owned cells, no geometric reconstruction is attempted. The rule only
//! counts the vocabulary references and flags wording that matters to an
//! Eulerian feasibility argument; the formatter turns that into an advisory
//! checklist rather than a verified analysis.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{ParseRule, Parsed};

static OWNERSHIP_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(green|red|blue|yellow|white|black|owned|owner|plot|cell)s?\b")
        .expect("invalid ownership pattern")
});

/// Findings reported instead of a canonical graph for grid-style input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridAdvisory {
    /// Count of color/ownership vocabulary references in the text.
    pub references: usize,
    /// Text asks about traversal "without backtracking".
    pub backtracking_hint: bool,
    /// Text mentions corners or edges of the grid, which drive odd-degree
    /// counts.
    pub corner_hint: bool,
}

pub(crate) struct GridRule;

impl ParseRule for GridRule {
    fn name(&self) -> &'static str {
        "grid-advisory"
    }

    fn try_parse(&self, text: &str) -> Option<Parsed> {
        let references = OWNERSHIP_PATTERN.find_iter(text).count();
        if references == 0 {
            return None;
        }

        let lower = text.to_lowercase();
        Some(Parsed::Advisory(GridAdvisory {
            references,
            backtracking_hint: lower.contains("without backtracking"),
            corner_hint: lower.contains("corner") || lower.contains("edge"),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ownership_vocabulary_yields_an_advisory() {
        let text = "Can the owner walk every green plot without backtracking? \
                    The corner cells are owned too.";
        let Some(Parsed::Advisory(advisory)) = GridRule.try_parse(text) else {
            panic!("expected an advisory");
        };
        assert!(advisory.references >= 4);
        assert!(advisory.backtracking_hint);
        assert!(advisory.corner_hint);
    }

    #[test]
    fn plain_prose_does_not_match() {
        assert!(GridRule.try_parse("hello world no graph here").is_none());
    }
}
