//! # fibdec-cli
//!
//! CLI output, strategy comparison, sweep progress, and shell completion.

pub mod completion;
pub mod orchestrator;
pub mod output;
pub mod presenter;
pub mod progress;
pub mod ui;

pub use orchestrator::{
    analyze_comparison_results, execute_calculations, get_calculators_to_run, CalculationResult,
};
pub use presenter::{CLIResultPresenter, ResultPresenter};
