use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use dataset_split::datasets::{inspect, SplitConfig, Splitter};

#[derive(Parser, Debug)]
#[command(
    name = "dataset-split",
    version,
    about = "Randomly split an image dataset (and its annotations) into train/test trees"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Shuffle the images of a directory and copy them into train/test
    Split(SplitArgs),
    /// Count the images and annotations of an existing split tree
    Inspect(InspectArgs),
}

#[derive(Args, Debug)]
struct SplitArgs {
    /// Directory containing the images to split
    #[arg(long)]
    source: Option<PathBuf>,

    /// Output directory; `train` and `test` are created inside it
    #[arg(long)]
    dest: Option<PathBuf>,

    /// Fraction of images assigned to train, in (0, 1)
    #[arg(long)]
    ratio: Option<f64>,

    /// Seed for a reproducible split (defaults to the clock)
    #[arg(long)]
    seed: Option<u64>,

    /// Directory with annotation files paired to the images by file stem
    #[arg(long)]
    sidecar_dir: Option<PathBuf>,

    /// Extension of the annotation files
    #[arg(long)]
    sidecar_ext: Option<String>,

    /// Fail when the source holds no image
    #[arg(long)]
    strict: bool,

    /// Skip digest comparison of copied files
    #[arg(long)]
    no_verify: bool,

    /// JSON file with defaults for any of the options above
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also write the run report as JSON to this file
    #[arg(long)]
    report: Option<PathBuf>,

    /// Print the report as JSON instead of the summary
    #[arg(long)]
    json: bool,

    #[arg(long)]
    no_progress: bool,
}

impl SplitArgs {
    fn into_config(self) -> Result<SplitConfig> {
        let mut config = match &self.config {
            Some(path) => SplitConfig::from_json_file(path)?,
            None => SplitConfig::default(),
        };
        if let Some(source) = self.source {
            config.source = source;
        }
        if let Some(dest) = self.dest {
            config.dest = dest;
        }
        if let Some(ratio) = self.ratio {
            config.ratio = ratio;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.sidecar_dir.is_some() {
            config.sidecar_dir = self.sidecar_dir;
        }
        if let Some(ext) = self.sidecar_ext {
            config.sidecar_ext = ext;
        }
        config.strict |= self.strict;
        if self.no_verify {
            config.verify = false;
        }
        config.progress = !self.no_progress && !self.json;
        Ok(config)
    }
}

#[derive(Args, Debug)]
struct InspectArgs {
    /// Root of a tree produced by `split`
    root: PathBuf,

    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dataset_split=info".parse()?),
        )
        .init();

    match Cli::parse().command {
        Commands::Split(args) => run_split(args),
        Commands::Inspect(args) => run_inspect(args),
    }
}

fn run_split(args: SplitArgs) -> Result<()> {
    let json = args.json;
    let report_path = args.report.clone();
    let config = args.into_config()?;
    let source = config.source.clone();

    let report = Splitter::new(config)?
        .run()
        .with_context(|| format!("splitting {}", source.display()))?;

    if let Some(path) = report_path {
        std::fs::write(&path, report.to_json())
            .with_context(|| format!("writing report to {}", path.display()))?;
    }
    if json {
        println!("{}", report.to_json());
    } else {
        println!("Done!");
        println!("{report}");
    }
    Ok(())
}

fn run_inspect(args: InspectArgs) -> Result<()> {
    let summary =
        inspect(&args.root).with_context(|| format!("inspecting {}", args.root.display()))?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{summary}");
    }
    Ok(())
}
