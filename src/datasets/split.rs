use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetSplit {
    Train,
    Test,
}

impl DatasetSplit {
    pub const ALL: [DatasetSplit; 2] = [DatasetSplit::Train, DatasetSplit::Test];

    /// Directory name used for this split in a destination tree.
    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetSplit::Train => "train",
            DatasetSplit::Test => "test",
        }
    }
}

impl std::fmt::Display for DatasetSplit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dir_names() {
        let names: Vec<_> = DatasetSplit::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(names, ["train", "test"]);
        assert_eq!(DatasetSplit::Test.to_string(), "test");
    }
}
