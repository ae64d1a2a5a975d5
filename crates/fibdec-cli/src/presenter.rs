//! CLI result presenter.

use std::time::Duration;

use fibdec_core::{Decimal, MAX_DIGITS};

use crate::orchestrator::CalculationResult;
use crate::output::{format_duration, format_number, format_result};

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present a calculation result.
    fn present_result(
        &self,
        algorithm: &str,
        k: u64,
        result: &Decimal,
        duration: Duration,
        details: bool,
    );

    /// Present a comparison result.
    fn present_comparison(&self, results: &[CalculationResult]);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Lines printed for one result. Quiet mode yields the bare number.
    #[must_use]
    pub fn render_result(
        &self,
        algorithm: &str,
        k: u64,
        result: &Decimal,
        duration: Duration,
        details: bool,
    ) -> Vec<String> {
        if self.quiet {
            return vec![result.to_string()];
        }

        let mut lines = vec![
            format!("Algorithm: {algorithm}"),
            format!("Index: {}", format_number(k)),
            format!("Duration: {}", format_duration(duration)),
        ];
        if details {
            lines.push(format!(
                "Result digits: {} of {MAX_DIGITS}",
                result.digit_count()
            ));
        }
        lines.push(format!(
            "F({}) = {}",
            format_number(k),
            format_result(result, self.verbose)
        ));
        lines
    }

    /// Lines of the comparison table; empty in quiet mode.
    #[must_use]
    pub fn render_comparison(&self, results: &[CalculationResult]) -> Vec<String> {
        if self.quiet {
            return Vec::new();
        }

        let mut lines = vec![String::new(), "Comparison Results:".into(), "-".repeat(60)];
        lines.extend(results.iter().map(|result| {
            let status = if result.outcome.is_err() { "ERROR" } else { "OK" };
            format!(
                "  {:<20} {:>10} [{status}]",
                result.algorithm,
                format_duration(result.duration),
            )
        }));
        lines
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(
        &self,
        algorithm: &str,
        k: u64,
        result: &Decimal,
        duration: Duration,
        details: bool,
    ) {
        for line in self.render_result(algorithm, k, result, duration, details) {
            println!("{line}");
        }
    }

    fn present_comparison(&self, results: &[CalculationResult]) {
        for line in self.render_comparison(results) {
            println!("{line}");
        }
    }

    fn present_error(&self, error: &str) {
        crate::ui::print_error(error);
    }
}
