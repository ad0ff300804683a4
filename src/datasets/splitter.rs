use std::{
    path::Path,
    time::{SystemTime, UNIX_EPOCH},
};

use indicatif::{ProgressBar, ProgressStyle};
use rand::{rngs::StdRng, Rng, SeedableRng};

use super::{
    assign::{assign, SplitAssignment},
    config::SplitConfig,
    errors::SplitError,
    layout::DestinationTree,
    report::SplitReport,
    source::{enumerate_items, sidecar_name},
};

/// Splits a directory of images into train/test copies.
///
/// ```no_run
/// use dataset_split::datasets::{SplitConfig, Splitter};
///
/// let config = SplitConfig::new("cottonweed/images", "cottonweed_split", 0.7)
///     .with_sidecars("cottonweed/annotations", "json")
///     .with_seed(42);
/// let report = Splitter::new(config)?.run()?;
/// println!("{report}");
/// # Ok::<(), dataset_split::datasets::SplitError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Splitter {
    config: SplitConfig,
    tree: DestinationTree,
}

impl Splitter {
    pub fn new(config: SplitConfig) -> Result<Self, SplitError> {
        config.validate()?;
        if config.verify && !cfg!(feature = "verify") {
            tracing::warn!("copy verification requested but the `verify` feature is disabled");
        }
        let tree = DestinationTree::new(&config.dest, config.has_sidecars());
        Ok(Self { config, tree })
    }

    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    pub fn tree(&self) -> &DestinationTree {
        &self.tree
    }

    /// Runs with the configured seed, or one taken from the clock.
    /// The seed is recorded in the report.
    pub fn run(&self) -> Result<SplitReport, SplitError> {
        let seed = self.config.seed.unwrap_or_else(clock_seed);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut report = self.run_with_rng(&mut rng)?;
        report.seed = Some(seed);
        Ok(report)
    }

    pub fn run_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<SplitReport, SplitError> {
        let cfg = &self.config;
        let items = enumerate_items(&cfg.source)?;
        if items.is_empty() {
            if cfg.strict {
                return Err(SplitError::Empty {
                    path: cfg.source.clone(),
                });
            }
            tracing::warn!("no images found in {}", cfg.source.display());
        }
        if let Some(dir) = &cfg.sidecar_dir {
            if !dir.is_dir() {
                return Err(SplitError::NotFound { path: dir.clone() });
            }
        }

        self.tree.create()?;

        let total = items.len();
        let assignment = assign(items, cfg.ratio, rng);
        tracing::info!(
            "splitting {} images from {}: {} train, {} test",
            total,
            cfg.source.display(),
            assignment.train.len(),
            assignment.test.len()
        );

        let (sidecars_copied, sidecars_skipped) = self.materialize(&assignment)?;
        if sidecars_skipped > 0 {
            tracing::warn!("{} images have no sidecar annotation", sidecars_skipped);
        }

        Ok(SplitReport {
            total,
            train: assignment.train.len(),
            test: assignment.test.len(),
            sidecars_copied,
            sidecars_skipped,
            seed: None,
            destination: self.tree.root().to_path_buf(),
        })
    }

    /// Copies every assigned item (and its sidecar). Returns the number of
    /// sidecars copied and skipped.
    fn materialize(&self, assignment: &SplitAssignment) -> Result<(usize, usize), SplitError> {
        let cfg = &self.config;
        let pb = if cfg.progress {
            let pb = ProgressBar::new(assignment.total() as u64);
            if let Ok(style) = ProgressStyle::with_template(PROGRESS_TEMPLATE) {
                pb.set_style(style);
            }
            pb
        } else {
            ProgressBar::hidden()
        };

        let mut copied = 0;
        let mut skipped = 0;
        for (split, items) in assignment.iter() {
            pb.set_message(split.as_str());
            let images_dir = self.tree.images_dir(split);
            let annotations_dir = self.tree.annotations_dir(split);

            for item in items {
                self.copy(&cfg.source.join(item), &images_dir.join(item))?;

                if let (Some(src_dir), Some(dst_dir)) = (&cfg.sidecar_dir, &annotations_dir) {
                    let name = sidecar_name(item, cfg.sidecar_extension());
                    let src = src_dir.join(&name);
                    if src.is_file() {
                        self.copy(&src, &dst_dir.join(&name))?;
                        copied += 1;
                    } else {
                        tracing::debug!("no sidecar {} for {}", src.display(), item);
                        skipped += 1;
                    }
                }
                pb.inc(1);
            }
        }
        pb.finish_and_clear();
        Ok((copied, skipped))
    }

    fn copy(&self, src: &Path, dst: &Path) -> Result<(), SplitError> {
        std::fs::copy(src, dst).map_err(|e| {
            tracing::debug!("copy {} -> {} failed", src.display(), dst.display());
            SplitError::io("copy to", dst, e)
        })?;
        #[cfg(feature = "verify")]
        if self.config.verify {
            super::verify::verify_copy(src, dst)?;
        }
        Ok(())
    }
}

/// One-shot form of [`Splitter::run`].
pub fn split(config: &SplitConfig) -> Result<SplitReport, SplitError> {
    Splitter::new(config.clone())?.run()
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

const PROGRESS_TEMPLATE: &str = "{msg:>5} [{bar:40}] {pos}/{len}";
