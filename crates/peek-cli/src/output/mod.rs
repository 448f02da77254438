use peek_config::DisplayConfig;
use peek_controller::Tracked;
use peek_core::evaluator::{self, ComparisonFacts};
use peek_core::{Comparison, RequestId, RequestState};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::ui;

pub mod price;
pub mod table;

use price::format_price;

/// Machine-readable view of one request, used by `json` and `raw`.
#[derive(Debug, Serialize)]
pub struct StateView<'a> {
    pub id: RequestId,
    pub state: &'a RequestState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facts: Option<ComparisonFacts>,
}

impl<'a> StateView<'a> {
    #[must_use]
    pub fn new(tracked: &'a Tracked) -> Self {
        Self {
            id: tracked.id,
            state: &tracked.state,
            facts: tracked.state.comparison().map(evaluator::facts),
        }
    }
}

/// Render a serializable value as JSON. `Table` falls back to pretty JSON.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json | OutputFormat::Table => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Render the observable state of a request.
///
/// `Idle` renders nothing. In table mode a failure renders as an alert line,
/// and a success as the comparison card.
pub fn render_state(
    tracked: &Tracked,
    format: OutputFormat,
    display: &DisplayConfig,
) -> anyhow::Result<Option<String>> {
    if matches!(tracked.state, RequestState::Idle) {
        return Ok(None);
    }

    if format != OutputFormat::Table {
        return render(&StateView::new(tracked), format).map(Some);
    }

    let rendered = match &tracked.state {
        RequestState::Idle => return Ok(None),
        RequestState::Loading { query } => format!("Comparing prices for \"{query}\"..."),
        RequestState::Succeeded(comparison) => render_comparison(comparison, display),
        RequestState::Failed { reason, .. } => render_failure(reason),
    };
    Ok(Some(rendered))
}

#[must_use]
pub fn render_failure(reason: &str) -> String {
    format!("Error: {reason}")
}

/// Product header, best-deal line, and one table row per platform.
#[must_use]
pub fn render_comparison(comparison: &Comparison, display: &DisplayConfig) -> String {
    let prefs = ui::prefs();
    let options = table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    };
    comparison_card(comparison, display, options)
}

fn comparison_card(
    comparison: &Comparison,
    display: &DisplayConfig,
    options: table::TableOptions,
) -> String {
    let symbol = display.currency_symbol.as_str();
    let facts = evaluator::facts(comparison);

    let mut lines = Vec::new();
    if !comparison.product_name.is_empty() {
        lines.push(comparison.product_name.clone());
    }
    if let Some(message) = &comparison.message {
        lines.push(message.clone());
    }
    lines.push(format!(
        "Best Deal: {} - {} (Save {})",
        facts.cheaper_platform,
        format_price(symbol, facts.cheaper_price),
        format_price(symbol, facts.savings_amount),
    ));
    lines.push(String::new());

    let rows = comparison
        .listings()
        .iter()
        .map(|listing| {
            let best = if facts.is_best_price(listing.platform) {
                table::BEST_MARKER.to_string()
            } else {
                String::new()
            };
            let link = if listing.url.is_empty() {
                String::from("-")
            } else {
                listing.url.clone()
            };
            vec![
                listing.platform.to_string(),
                format_price(symbol, listing.price),
                best,
                link,
            ]
        })
        .collect::<Vec<_>>();

    lines.push(table::render_table(
        &["platform", "price", "best", "link"],
        &rows,
        options,
    ));
    lines.join("\n")
}
