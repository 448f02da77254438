use std::io::IsTerminal;

use anyhow::Context;
use peek_client::ComparisonClient;
use peek_config::PeekConfig;
use peek_controller::{RequestController, Tracked};
use peek_core::RequestState;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output;

const IDLE_HINT: &str = "Enter a product name above to compare prices across Amazon and Flipkart";

/// Handle `peek shell`.
///
/// Every stdin line is submitted as a query; every state change the
/// controller publishes is printed. A line entered while an earlier one is
/// still loading supersedes it. Returns once stdin is closed and the last
/// request has settled.
pub async fn handle(config: &PeekConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let client =
        ComparisonClient::new(&config.service).context("failed to build comparison client")?;
    let controller = RequestController::new(client);
    let mut states = controller.subscribe();

    if !flags.quiet && std::io::stdin().is_terminal() {
        eprintln!("{IDLE_HINT}");
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut input_open = true;

    loop {
        tokio::select! {
            line = lines.next_line(), if input_open => {
                match line.context("failed to read query from stdin")? {
                    Some(line) => {
                        if controller.submit(&line).is_none() {
                            tracing::debug!("ignoring blank line");
                        }
                    }
                    None => input_open = false,
                }
            }
            changed = states.changed() => {
                if changed.is_err() {
                    break;
                }
                let tracked = states.borrow_and_update().clone();
                print_state(&tracked, flags.format, config)?;
            }
        }

        if !input_open && settled(&states) {
            break;
        }
    }

    Ok(())
}

/// Nothing in flight and nothing left unprinted.
fn settled(states: &peek_controller::StateReceiver) -> bool {
    let unseen = states.has_changed().unwrap_or(false);
    !unseen && !states.borrow().state.is_loading()
}

fn print_state(tracked: &Tracked, format: OutputFormat, config: &PeekConfig) -> anyhow::Result<()> {
    let Some(rendered) = output::render_state(tracked, format, &config.display)? else {
        return Ok(());
    };

    if format == OutputFormat::Table && matches!(tracked.state, RequestState::Failed { .. }) {
        eprintln!("{rendered}");
    } else {
        println!("{rendered}");
    }
    Ok(())
}
