use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

/// Narrowest `COLUMNS` value that still fits the comparison table.
const MIN_TERM_WIDTH: usize = 40;

/// Terminal decisions made once at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiPrefs {
    /// Highlight the best-price cell.
    pub table_color: bool,
    /// Show a spinner while a comparison is loading.
    pub progress: bool,
    /// Width the comparison table is shrunk to, if known.
    pub term_width: Option<usize>,
}

impl UiPrefs {
    /// Decide from the flags, whether stdout is a terminal, and the
    /// environment (`NO_COLOR`, `COLUMNS`).
    pub fn detect(
        flags: &GlobalFlags,
        interactive: bool,
        env: impl Fn(&str) -> Option<String>,
    ) -> Self {
        // Only the comparison card is colored or animated; json/raw stay plain.
        let card = flags.format == OutputFormat::Table;
        let no_color = env("NO_COLOR").is_some_and(|value| !value.is_empty());

        let table_color = card
            && match flags.color {
                ColorMode::Always => true,
                ColorMode::Never => false,
                ColorMode::Auto => interactive && !no_color,
            };

        let term_width = env("COLUMNS")
            .and_then(|value| value.trim().parse::<usize>().ok())
            .filter(|width| *width >= MIN_TERM_WIDTH);

        Self {
            table_color,
            progress: card && interactive && !flags.quiet,
            term_width,
        }
    }
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let prefs = UiPrefs::detect(flags, std::io::stdout().is_terminal(), |key| {
        std::env::var(key).ok()
    });
    let _ = UI_PREFS.set(prefs);
}

/// Prefs chosen by [`init`]; plain output if it never ran.
#[must_use]
pub fn prefs() -> UiPrefs {
    UI_PREFS.get().copied().unwrap_or_default()
}
