pub mod assign;
pub mod config;
pub mod errors;
pub mod inspect;
pub mod layout;
pub mod report;
pub mod source;
pub mod split;
pub mod splitter;
#[cfg(feature = "verify")]
pub mod verify;

pub use assign::SplitAssignment;
pub use config::SplitConfig;
pub use errors::SplitError;
pub use inspect::{inspect, TreeSummary};
pub use layout::DestinationTree;
pub use report::SplitReport;
pub use split::DatasetSplit;
pub use splitter::{split, Splitter};
