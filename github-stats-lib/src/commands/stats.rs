use super::Host;
use super::common::{CommonArgs, Session, resolve_account};
use super::config::Config;
use crate::Result;
use crate::client::{RateLimitStatus, RemoteClient};
use crate::collection::{AggregateReport, Progress, check_rate_limit, run_collection};
use crate::reports::{ConsoleOptions, generate_console, generate_json};
use camino::Utf8PathBuf;
use clap::Parser;
use ohno::IntoAppError;
use std::fs;
use std::io::Write;

const LOG_TARGET: &str = "     stats";

#[derive(Parser, Debug)]
pub struct StatsArgs {
    /// GitHub account to report on
    #[arg(value_name = "USERNAME")]
    pub username: String,

    #[command(flatten)]
    pub common: CommonArgs,

    /// Show the per-metric breakdown below the summary table
    #[arg(long)]
    pub detailed: bool,

    /// Also write the statistics to a JSON file
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub json: Option<Utf8PathBuf>,
}

/// How the results of a run are presented.
#[derive(Debug, Clone, Copy)]
struct OutputOptions<'a> {
    console: ConsoleOptions,
    json: Option<&'a Utf8PathBuf>,
}

pub async fn process_stats<H: Host>(host: &mut H, args: &StatsArgs) -> Result<()> {
    let session = Session::open(&args.common).await?;
    let progress = session.progress_reporter();

    let output = OutputOptions {
        console: ConsoleOptions {
            use_colors: session.use_colors_for_output(),
            detailed: args.detailed,
        },
        json: args.json.as_ref(),
    };

    let result = report_stats(host, &session.client, &session.config, &args.username, output, &progress).await;
    progress.done();
    result
}

/// Validate the account, collect every metric, and print the results.
async fn report_stats<H: Host, C: RemoteClient>(
    host: &mut H,
    client: &C,
    config: &Config,
    username: &str,
    output: OutputOptions<'_>,
    progress: &dyn Progress,
) -> Result<()> {
    progress.set_phase("Checking");
    let requested = username.trim().to_string();
    progress.set_indeterminate(Box::new(move || format!("Looking up {requested}")));

    let account = resolve_account(client, username).await?;

    let preflight = match check_rate_limit(client, config.low_rate_limit_threshold).await {
        Ok(check) => {
            if check.is_low() {
                let _ = writeln!(
                    host.error(),
                    "Warning: Low API rate limit ({} remaining). Some statistics may be incomplete.",
                    check.status.remaining
                );
            }
            Some(check.status)
        }
        Err(e) => {
            log::warn!(target: LOG_TARGET, "Could not check the API rate limit: {e:#}");
            None
        }
    };

    let report = run_collection(client, &account, &config.collection_options(), progress).await;
    progress.done();

    let rate_limit = if report.is_empty() { None } else { final_rate_limit(client, preflight).await };
    present(host, &report, rate_limit.as_ref(), output)
}

/// Print warnings and the console report, and write the JSON report if requested.
fn present<H: Host>(host: &mut H, report: &AggregateReport, rate_limit: Option<&RateLimitStatus>, output: OutputOptions<'_>) -> Result<()> {
    write_warnings(host, report);

    if report.is_empty() {
        let _ = writeln!(host.error(), "No metrics could be collected.");
        host.exit(1);
        return Ok(());
    }

    let mut console_output = String::new();
    generate_console(report, rate_limit, output.console, &mut console_output)?;
    let _ = write!(host.output(), "{console_output}");

    if let Some(filename) = output.json {
        let mut json_output = String::new();
        generate_json(report, rate_limit, &mut json_output)?;
        fs::write(filename, json_output).into_app_err_with(|| format!("writing JSON report to '{filename}'"))?;
    }

    Ok(())
}

fn write_warnings<H: Host>(host: &mut H, report: &AggregateReport) {
    for failure in report.failures() {
        let _ = writeln!(host.error(), "Warning: Could not collect {} statistics: {:#}", failure.kind, failure.error);
    }

    for entry in report.entries() {
        if let Some(recovered) = &entry.recovered {
            let _ = writeln!(host.error(), "Warning: {} statistics may be incomplete: {recovered}", entry.kind);
        }
    }
}

/// Quota after the run, falling back to the pre-flight snapshot.
async fn final_rate_limit<C: RemoteClient>(client: &C, preflight: Option<RateLimitStatus>) -> Option<RateLimitStatus> {
    match client.rate_limit().await {
        Ok(status) => Some(status),
        Err(e) => {
            log::debug!(target: LOG_TARGET, "Could not refresh the API rate limit: {e}");
            preflight
        }
    }
}
