//! Randomized train/test splitting of image datasets.
//!
//! Images (`.jpg`, `.jpeg`, `.png`) found in a source directory are shuffled,
//! cut at `floor(count * ratio)` and copied into `dest/train` and `dest/test`.
//! When a sidecar directory is configured, each image's annotation file (same
//! stem, configured extension) follows it into `dest/<split>/annotations`.

pub mod datasets;
