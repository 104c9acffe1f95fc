//! Drift between a stored baseline and the current scan.

use std::collections::BTreeSet;

/// Labels that appeared or disappeared since the baseline was recorded.
///
/// Both lists are sorted lexicographically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Drift {
    pub new: Vec<String>,
    pub closed: Vec<String>,
}

impl Drift {
    pub fn between(baseline: &[String], current: &[String]) -> Self {
        let baseline: BTreeSet<&String> = baseline.iter().collect();
        let current: BTreeSet<&String> = current.iter().collect();

        Self {
            new: current.difference(&baseline).map(|s| s.to_string()).collect(),
            closed: baseline.difference(&current).map(|s| s.to_string()).collect(),
        }
    }

    /// No newly opened ports. Closed ports alone are not an alert.
    pub fn is_clean(&self) -> bool {
        self.new.is_empty()
    }

    pub fn is_unchanged(&self) -> bool {
        self.new.is_empty() && self.closed.is_empty()
    }
}
