//! Application entry point and dispatch.

use anyhow::{Context, Result};

use hashbench_charts::{render_charts, ChartOptions};
use hashbench_cli::output::write_json_summary;
use hashbench_cli::presenter::CLIResultPresenter;
use hashbench_cli::progress::CLIProgressObserver;
use hashbench_cli::ui;
use hashbench_core::aggregator::{aggregate, AggregatedSummary};
use hashbench_core::config::BenchConfig;
use hashbench_core::error::BenchError;
use hashbench_core::parser::ReportParser;
use hashbench_core::store::ResultsStore;
use hashbench_orchestration::interfaces::{ResultPresenter, RunReport, TrialRunner};
use hashbench_orchestration::orchestrator::run_trials_with_observer;
use hashbench_orchestration::runner::{ProcessRunner, RecordingRunner, ReplayRunner};
use hashbench_tui::ChartViewer;

use crate::config::AppConfig;
use crate::version;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        hashbench_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    tracing::info!(version = %version::full_version(), "starting");
    let bench = config.bench_config()?;
    let presenter = CLIResultPresenter::new(config.verbose, config.quiet);

    let mut store = ResultsStore::new();
    let report = collect(config, &bench, &mut store)?;
    presenter.present_run(&report);

    let summary = aggregate(&store, bench.algorithms(), bench.levels())?;
    presenter.present_summary(&summary);

    if let Some(path) = &config.json {
        write_json_summary(path, &summary, &report)
            .with_context(|| format!("writing {}", path.display()))?;
    }

    if !config.no_charts {
        write_charts(config, &summary, report.succeeded)?;
    }

    if config.tui {
        ChartViewer::new(summary, report.succeeded).run()?;
    }

    Ok(())
}

/// Run every trial through the configured runner, filling `store`.
fn collect(
    config: &AppConfig,
    bench: &BenchConfig,
    store: &mut ResultsStore,
) -> Result<RunReport, BenchError> {
    let parser = ReportParser::for_config(bench);

    if let Some(dir) = &config.replay {
        let replay = ReplayRunner::from_dir(dir).map_err(|e| {
            BenchError::Config(format!("cannot read replay directory {}: {e}", dir.display()))
        })?;
        if replay.is_empty() {
            return Err(BenchError::Config(format!(
                "no saved reports (*.txt) in {}",
                dir.display()
            )));
        }
        let trials = replay.len();
        return execute(&replay, &parser, trials, store, config.quiet);
    }

    let mut runner = ProcessRunner::new(&config.program).with_args(&config.program_args);
    if let Some(dir) = &config.workdir {
        runner = runner.with_workdir(dir);
    }

    match &config.save_reports {
        Some(dir) => {
            let recorder = RecordingRunner::new(runner, dir)?;
            execute(&recorder, &parser, bench.trials(), store, config.quiet)
        }
        None => execute(&runner, &parser, bench.trials(), store, config.quiet),
    }
}

fn execute(
    runner: &dyn TrialRunner,
    parser: &ReportParser,
    trials: usize,
    store: &mut ResultsStore,
    quiet: bool,
) -> Result<RunReport, BenchError> {
    let observer = CLIProgressObserver::new(trials, quiet);
    run_trials_with_observer(runner, parser, trials, store, &observer)
}

fn write_charts(config: &AppConfig, summary: &AggregatedSummary, trials: usize) -> Result<()> {
    let options = ChartOptions {
        output_dir: config.output_dir.clone(),
        format: config.format,
        trials,
    };
    let written = render_charts(summary, &options)?;
    if !config.quiet {
        ui::print_success(&format!(
            "{} charts written to {}",
            written.len(),
            options.output_dir.display()
        ));
    }
    Ok(())
}
