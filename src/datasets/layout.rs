use std::path::{Path, PathBuf};

use super::{errors::SplitError, split::DatasetSplit};

/// Paths of a destination tree.
///
/// Nested trees look like `root/<split>/images` + `root/<split>/annotations`,
/// flat trees put images directly in `root/<split>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationTree {
    root: PathBuf,
    nested: bool,
}

impl DestinationTree {
    pub fn new<P: AsRef<Path>>(root: P, nested: bool) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            nested,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn is_nested(&self) -> bool {
        self.nested
    }

    pub fn split_dir(&self, split: DatasetSplit) -> PathBuf {
        self.root.join(split.as_str())
    }

    pub fn images_dir(&self, split: DatasetSplit) -> PathBuf {
        if self.nested {
            self.split_dir(split).join(IMAGES_DIR)
        } else {
            self.split_dir(split)
        }
    }

    /// `None` for flat trees, which carry no annotations.
    pub fn annotations_dir(&self, split: DatasetSplit) -> Option<PathBuf> {
        self.nested
            .then(|| self.split_dir(split).join(ANNOTATIONS_DIR))
    }

    /// Creates every directory of the tree, keeping existing ones.
    pub fn create(&self) -> Result<(), SplitError> {
        for split in DatasetSplit::ALL {
            let dirs = std::iter::once(self.images_dir(split)).chain(self.annotations_dir(split));
            for dir in dirs {
                std::fs::create_dir_all(&dir).map_err(|e| SplitError::io("create", &dir, e))?;
            }
        }
        Ok(())
    }
}

pub const IMAGES_DIR: &str = "images";
pub const ANNOTATIONS_DIR: &str = "annotations";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_paths() {
        let tree = DestinationTree::new("/out", true);
        assert_eq!(
            tree.images_dir(DatasetSplit::Train),
            PathBuf::from("/out/train/images")
        );
        assert_eq!(
            tree.annotations_dir(DatasetSplit::Test),
            Some(PathBuf::from("/out/test/annotations"))
        );
    }

    #[test]
    fn flat_paths() {
        let tree = DestinationTree::new("/out", false);
        assert_eq!(tree.images_dir(DatasetSplit::Test), PathBuf::from("/out/test"));
        assert_eq!(tree.annotations_dir(DatasetSplit::Train), None);
    }

    #[test]
    fn create_is_repeatable() {
        let dir = tempfile::tempdir().unwrap();
        let tree = DestinationTree::new(dir.path().join("a/b"), true);
        tree.create().unwrap();
        tree.create().unwrap();
        for split in DatasetSplit::ALL {
            assert!(tree.images_dir(split).is_dir());
            assert!(tree.annotations_dir(split).unwrap().is_dir());
        }
    }
}
