//! Application entry point and dispatch.

use anyhow::{Context, Result};

use fibdec_cli::output::{format_duration, write_to_file};
use fibdec_cli::presenter::{CLIResultPresenter, ResultPresenter};
use fibdec_cli::progress::sweep_progress;
use fibdec_cli::{analyze_comparison_results, execute_calculations, get_calculators_to_run};
use fibdec_core::{DefaultFactory, Strategy};
use fibdec_device::FibDevice;

use crate::bench::{run_sweep, write_report};
use crate::cancel::CancellationToken;
use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        fibdec_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    if let Some(last) = config.bench {
        return run_bench(config, last);
    }

    run_cli(config)
}

fn run_cli(config: &AppConfig) -> Result<()> {
    let k = config.index()?;
    let factory = DefaultFactory::new();
    let calculators = get_calculators_to_run(&config.algo, &factory)?;
    let results = execute_calculations(&calculators, k);

    match results.as_slice() {
        [single] => {
            if let Err(err) = &single.outcome {
                return Err(err.clone().into());
            }
        }
        _ => analyze_comparison_results(&results, k)?,
    }

    let presenter = CLIResultPresenter::new(config.verbose, config.quiet);
    for result in &results {
        match &result.outcome {
            Ok(value) => presenter.present_result(
                &result.algorithm,
                k,
                value,
                result.duration,
                config.details,
            ),
            Err(err) => presenter.present_error(&format!("{}: {err}", result.algorithm)),
        }
        if config.quiet {
            break;
        }
    }

    if results.len() > 1 {
        presenter.present_comparison(&results);
    }

    if let Some(path) = &config.output {
        if let Some(value) = results.iter().find_map(|r| r.outcome.as_ref().ok()) {
            write_to_file(path, value)
                .with_context(|| format!("writing result to {}", path.display()))?;
        }
    }

    Ok(())
}

fn run_bench(config: &AppConfig, last: u64) -> Result<()> {
    // The sweep reads through one device, so `all` falls back to the default.
    let strategy = match config.algo.as_str() {
        "all" => Strategy::default(),
        name => name.parse::<Strategy>()?,
    };
    let device = FibDevice::default().with_strategy(strategy);

    let cancel = CancellationToken::new();
    cancel.install_ctrlc_handler();

    let progress = sweep_progress(last.saturating_add(1), config.quiet);
    let outcome = run_sweep(&device, last, &cancel, &progress);
    progress.finish_and_clear();
    let report = outcome?;

    write_report(&config.report, &report.samples)
        .with_context(|| format!("writing report to {}", config.report.display()))?;

    if !config.quiet {
        fibdec_cli::ui::print_header("Device sweep");
        let total: std::time::Duration = report.samples.iter().map(|s| s.kernel).sum();
        fibdec_cli::ui::print_success(&format!(
            "{} reads verified with {strategy}, {} computing, report in {}",
            report.verified,
            format_duration(total),
            config.report.display()
        ));
    }
    Ok(())
}
