use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::errors::SplitError;

/// Runtime parameters of a split run.
///
/// Can be built in code, loaded from a JSON file with
/// [`SplitConfig::from_json_file`], or assembled by the CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
    pub source: PathBuf,
    pub dest: PathBuf,
    /// Fraction of items assigned to train, in `(0, 1)`.
    pub ratio: f64,
    /// Fixed seed for the shuffle. `None` seeds from the clock.
    pub seed: Option<u64>,
    /// Directory holding sidecar annotations. Enables the
    /// `images`/`annotations` destination layout.
    #[serde(alias = "sidecarDir")]
    pub sidecar_dir: Option<PathBuf>,
    #[serde(alias = "sidecarExt")]
    pub sidecar_ext: String,
    /// Treat a source without any accepted image as an error.
    pub strict: bool,
    /// Compare digests of every copied file against its source.
    pub verify: bool,
    #[serde(skip)]
    pub progress: bool,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::new(),
            dest: PathBuf::new(),
            ratio: DEFAULT_RATIO,
            seed: None,
            sidecar_dir: None,
            sidecar_ext: DEFAULT_SIDECAR_EXT.to_owned(),
            strict: false,
            verify: cfg!(feature = "verify"),
            progress: false,
        }
    }
}

impl SplitConfig {
    pub fn new<S: AsRef<Path>, D: AsRef<Path>>(source: S, dest: D, ratio: f64) -> Self {
        Self {
            source: source.as_ref().to_path_buf(),
            dest: dest.as_ref().to_path_buf(),
            ratio,
            ..Default::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_sidecars<P: AsRef<Path>>(mut self, dir: P, ext: &str) -> Self {
        self.sidecar_dir = Some(dir.as_ref().to_path_buf());
        self.sidecar_ext = ext.to_owned();
        self
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, SplitError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| SplitError::io("read config", path, e))?;
        serde_json::from_str(&raw).map_err(|e| {
            SplitError::Configuration(format!("{}: {e}", path.display()))
        })
    }

    pub fn has_sidecars(&self) -> bool {
        self.sidecar_dir.is_some()
    }

    /// Sidecar extension without a leading dot.
    pub fn sidecar_extension(&self) -> &str {
        self.sidecar_ext.trim_start_matches('.')
    }

    pub fn validate(&self) -> Result<(), SplitError> {
        if !self.ratio.is_finite() || self.ratio <= 0.0 || self.ratio >= 1.0 {
            return Err(SplitError::Configuration(format!(
                "ratio must be in (0, 1), got {}",
                self.ratio
            )));
        }
        if self.source.as_os_str().is_empty() {
            return Err(SplitError::Configuration("source directory is required".into()));
        }
        if self.dest.as_os_str().is_empty() {
            return Err(SplitError::Configuration("destination directory is required".into()));
        }
        if self.has_sidecars() {
            let ext = self.sidecar_extension();
            if ext.is_empty() || ext.contains(['/', '\\']) {
                return Err(SplitError::Configuration(format!(
                    "invalid sidecar extension {:?}",
                    self.sidecar_ext
                )));
            }
        }
        Ok(())
    }
}

pub const DEFAULT_RATIO: f64 = 0.7;
pub const DEFAULT_SIDECAR_EXT: &str = "json";
