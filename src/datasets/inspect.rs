use std::{fmt, path::Path};

use serde::Serialize;

use super::{
    errors::SplitError,
    layout::{ANNOTATIONS_DIR, IMAGES_DIR},
    source::enumerate_items,
    split::DatasetSplit,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitSummary {
    pub split: DatasetSplit,
    pub present: bool,
    pub images: usize,
    pub annotations: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeSummary {
    pub nested: bool,
    pub splits: Vec<SplitSummary>,
}

impl TreeSummary {
    pub fn total_images(&self) -> usize {
        self.splits.iter().map(|s| s.images).sum()
    }
}

/// Counts images and annotations per split of an existing destination tree.
/// The layout (nested or flat) is detected from the `images` directories.
pub fn inspect<P: AsRef<Path>>(root: P) -> Result<TreeSummary, SplitError> {
    let root = root.as_ref();
    if !root.is_dir() {
        return Err(SplitError::NotFound {
            path: root.to_path_buf(),
        });
    }

    let nested = DatasetSplit::ALL
        .iter()
        .any(|s| root.join(s.as_str()).join(IMAGES_DIR).is_dir());

    let mut splits = Vec::with_capacity(DatasetSplit::ALL.len());
    for split in DatasetSplit::ALL {
        let split_dir = root.join(split.as_str());
        if !split_dir.is_dir() {
            splits.push(SplitSummary {
                split,
                present: false,
                images: 0,
                annotations: 0,
            });
            continue;
        }
        let images_dir = if nested {
            split_dir.join(IMAGES_DIR)
        } else {
            split_dir.clone()
        };
        let images = if images_dir.is_dir() {
            enumerate_items(&images_dir)?.len()
        } else {
            0
        };
        let annotations = count_files(&split_dir.join(ANNOTATIONS_DIR))?;
        splits.push(SplitSummary {
            split,
            present: true,
            images,
            annotations,
        });
    }
    Ok(TreeSummary { nested, splits })
}

fn count_files(dir: &Path) -> Result<usize, SplitError> {
    if !dir.is_dir() {
        return Ok(0);
    }
    let mut n = 0;
    for entry in std::fs::read_dir(dir).map_err(|e| SplitError::io("read directory", dir, e))? {
        let entry = entry.map_err(|e| SplitError::io("read directory", dir, e))?;
        if entry.path().is_file() {
            n += 1;
        }
    }
    Ok(n)
}

impl fmt::Display for TreeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, s) in self.splits.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            if !s.present {
                write!(f, "{}: missing", s.split)?;
            } else if self.nested {
                write!(f, "{}: {} images, {} annotations", s.split, s.images, s.annotations)?;
            } else {
                write!(f, "{}: {} images", s.split, s.images)?;
            }
        }
        Ok(())
    }
}
