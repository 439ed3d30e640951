pub mod config;
pub mod logging;
pub mod regression;
pub mod report;
pub mod reporter;
pub mod snapshot;
pub mod state;
pub mod time;

pub use config::{EnvSnapshot, Format, ReporterConfig, ReporterOptions, resolve};
pub use regression::RegressionReport;
pub use report::Reporter;
pub use reporter::LlmReporter;
pub use state::{RunResults, Snapshot, SourceLocation, TestOutcome, TestStatus};
