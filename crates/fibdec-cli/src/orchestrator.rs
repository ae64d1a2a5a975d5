//! Running one or more calculators on the same index and comparing them.

use std::sync::Arc;
use std::time::{Duration, Instant};

use rayon::prelude::*;

use fibdec_core::calculator::{Calculator, FibError};
use fibdec_core::registry::CalculatorFactory;
use fibdec_core::Decimal;

/// Result of a single calculation.
#[derive(Debug, Clone)]
pub struct CalculationResult {
    /// Algorithm name.
    pub algorithm: String,
    /// The computed value or the error that stopped it.
    pub outcome: Result<Decimal, FibError>,
    /// Computation duration.
    pub duration: Duration,
}

/// Resolve `algo` to calculators: a single name, or `all`.
pub fn get_calculators_to_run(
    algo: &str,
    factory: &dyn CalculatorFactory,
) -> Result<Vec<Arc<dyn Calculator>>, FibError> {
    match algo {
        "all" => factory
            .available()
            .into_iter()
            .map(|name| factory.get(name))
            .collect(),
        name => Ok(vec![factory.get(name)?]),
    }
}

fn run_one(calc: &dyn Calculator, k: u64) -> CalculationResult {
    let start = Instant::now();
    let outcome = calc.calculate(k);
    CalculationResult {
        algorithm: calc.name().to_string(),
        outcome,
        duration: start.elapsed(),
    }
}

/// Compute F(k) with every calculator. More than one runs in parallel.
pub fn execute_calculations(calculators: &[Arc<dyn Calculator>], k: u64) -> Vec<CalculationResult> {
    if let [calc] = calculators {
        return vec![run_one(calc.as_ref(), k)];
    }

    calculators
        .par_iter()
        .map(|calc| run_one(calc.as_ref(), k))
        .collect()
}

/// Check that every successful result agrees.
///
/// Fails with the first error when nothing succeeded, and with `Mismatch`
/// when two successful results differ.
pub fn analyze_comparison_results(results: &[CalculationResult], k: u64) -> Result<(), FibError> {
    let mut values = results.iter().filter_map(|r| r.outcome.as_ref().ok());

    let Some(first) = values.next() else {
        return match results.iter().find_map(|r| r.outcome.as_ref().err()) {
            Some(err) => Err(err.clone()),
            None => Err(FibError::InvalidInput("no calculators ran".into())),
        };
    };

    if values.any(|v| v != first) {
        tracing::warn!(k, "strategies disagree");
        return Err(FibError::Mismatch { index: k });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fibdec_core::registry::DefaultFactory;
    use fibdec_core::{DigitSeq, Strategy, MAX_INDEX};

    fn decimal(n: u64) -> Decimal {
        DigitSeq::from_u64(n).into_decimal()
    }

    fn result(name: &str, outcome: Result<Decimal, FibError>) -> CalculationResult {
        CalculationResult {
            algorithm: name.into(),
            outcome,
            duration: Duration::from_millis(1),
        }
    }

    fn all_calculators() -> Vec<Arc<dyn Calculator>> {
        Strategy::ALL
            .into_iter()
            .map(|s| {
                let calc: Arc<dyn Calculator> = Arc::new(s.calculator());
                calc
            })
            .collect()
    }

    #[test]
    fn select_all() {
        let factory = DefaultFactory::new();
        let calcs = get_calculators_to_run("all", &factory).unwrap();
        assert_eq!(calcs.len(), 2);
    }

    #[test]
    fn select_single() {
        let factory = DefaultFactory::new();
        let calcs = get_calculators_to_run("iterative", &factory).unwrap();
        assert_eq!(calcs.len(), 1);
        assert_eq!(calcs[0].name(), "Iterative");
    }

    #[test]
    fn select_unknown() {
        let factory = DefaultFactory::new();
        assert!(get_calculators_to_run("matrix", &factory).is_err());
    }

    #[test]
    fn execute_single_calculator() {
        let calc: Arc<dyn Calculator> = Arc::new(Strategy::FastDoubling.calculator());
        let results = execute_calculations(&[calc], 100);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].algorithm, "FastDoubling");
        assert_eq!(
            results[0].outcome.as_ref().unwrap().to_string(),
            "354224848179261915075"
        );
    }

    #[test]
    fn execute_all_and_compare() {
        let results = execute_calculations(&all_calculators(), 500);
        assert_eq!(results.len(), 2);
        assert!(analyze_comparison_results(&results, 500).is_ok());
    }

    #[test]
    fn execute_over_capacity_reports_errors() {
        let results = execute_calculations(&all_calculators(), MAX_INDEX + 1);
        assert!(results.iter().all(|r| r.outcome.is_err()));
        assert!(matches!(
            analyze_comparison_results(&results, MAX_INDEX + 1),
            Err(FibError::CapacityExceeded { .. })
        ));
    }

    #[test]
    fn analyze_mismatching_results() {
        let results = vec![result("A", Ok(decimal(55))), result("B", Ok(decimal(56)))];
        assert_eq!(
            analyze_comparison_results(&results, 10),
            Err(FibError::Mismatch { index: 10 })
        );
    }

    #[test]
    fn analyze_mixed_valid_and_error_results() {
        let results = vec![
            result("A", Ok(decimal(55))),
            result("B", Err(FibError::SubtractUnderflow)),
        ];
        assert!(analyze_comparison_results(&results, 10).is_ok());
    }

    #[test]
    fn analyze_empty() {
        assert!(matches!(
            analyze_comparison_results(&[], 0),
            Err(FibError::InvalidInput(_))
        ));
    }
}
