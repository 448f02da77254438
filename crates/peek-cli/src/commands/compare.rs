use anyhow::{Context, bail};
use peek_client::ComparisonClient;
use peek_config::PeekConfig;
use peek_controller::{RequestController, Tracked};
use peek_core::RequestState;

use crate::cli::{CompareArgs, GlobalFlags, OutputFormat};
use crate::output;
use crate::progress::Progress;

/// Handle `peek compare`.
///
/// Blank queries are a no-op. A failed comparison is reported and turned into
/// an error so the process exits non-zero.
pub async fn handle(
    args: &CompareArgs,
    config: &PeekConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let client =
        ComparisonClient::new(&config.service).context("failed to build comparison client")?;
    let controller = RequestController::new(client);

    let Some(task) = controller.submit(&args.raw_query()) else {
        tracing::debug!("blank query, nothing to compare");
        return Ok(());
    };

    let progress = Progress::spinner("Comparing prices on Amazon and Flipkart...");
    task.await.context("comparison task did not complete")?;
    progress.finish_clear();

    let tracked = controller.subscribe().borrow().clone();
    report(&tracked, flags.format, config)
}

/// Print the settled state. In table mode a failure is left to `main`, which
/// prints the returned error on stderr.
fn report(tracked: &Tracked, format: OutputFormat, config: &PeekConfig) -> anyhow::Result<()> {
    let failed = matches!(tracked.state, RequestState::Failed { .. });
    if !(failed && format == OutputFormat::Table) {
        if let Some(rendered) = output::render_state(tracked, format, &config.display)? {
            println!("{rendered}");
        }
    }

    if let Some(reason) = tracked.state.failure_reason() {
        bail!("{reason}");
    }
    Ok(())
}
