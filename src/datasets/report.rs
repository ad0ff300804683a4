use std::{fmt, path::PathBuf};

use serde::Serialize;

/// Outcome of a split run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitReport {
    pub total: usize,
    pub train: usize,
    pub test: usize,
    pub sidecars_copied: usize,
    /// Items whose sidecar was missing from the sidecar directory.
    pub sidecars_skipped: usize,
    /// Seed the shuffle ran with; `None` when the caller supplied the rng.
    pub seed: Option<u64>,
    pub destination: PathBuf,
}

impl SplitReport {
    pub fn to_json(&self) -> String {
        // plain struct of numbers and paths, serialization cannot fail
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

impl fmt::Display for SplitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total images: {}", self.total)?;
        writeln!(f, "Train: {}, Test: {}", self.train, self.test)?;
        if self.sidecars_copied + self.sidecars_skipped > 0 {
            writeln!(
                f,
                "Annotations copied: {}, missing: {}",
                self.sidecars_copied, self.sidecars_skipped
            )?;
        }
        if let Some(seed) = self.seed {
            writeln!(f, "Seed: {seed}")?;
        }
        write!(f, "Output: {}", self.destination.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> SplitReport {
        SplitReport {
            total: 10,
            train: 7,
            test: 3,
            sidecars_copied: 0,
            sidecars_skipped: 0,
            seed: Some(5),
            destination: PathBuf::from("out"),
        }
    }

    #[test]
    fn summary_lines() {
        let text = report().to_string();
        assert_eq!(text, "Total images: 10\nTrain: 7, Test: 3\nSeed: 5\nOutput: out");

        let text = SplitReport {
            sidecars_copied: 6,
            sidecars_skipped: 4,
            ..report()
        }
        .to_string();
        assert!(text.contains("Annotations copied: 6, missing: 4"));
    }

    #[test]
    fn json_fields() {
        let v: serde_json::Value = serde_json::from_str(&report().to_json()).unwrap();
        assert_eq!(v["train"], 7);
        assert_eq!(v["test"], 3);
        assert_eq!(v["sidecars_skipped"], 0);
        assert_eq!(v["seed"], 5);
        assert_eq!(v["destination"], "out");
    }
}
