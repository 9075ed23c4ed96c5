use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

#[derive(Clone, Copy, Debug)]
pub struct UiPrefs {
    pub table_color: bool,
    pub term_width: Option<usize>,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let is_tty = std::io::stdout().is_terminal();
    let no_color = std::env::var_os("NO_COLOR").is_some();
    let _ = UI_PREFS.set(UiPrefs {
        table_color: table_color(flags, is_tty, no_color),
        term_width: std::env::var("COLUMNS")
            .ok()
            .and_then(|value| value.parse::<usize>().ok())
            .filter(|width| *width >= 40),
    });
}

fn table_color(flags: &GlobalFlags, is_tty: bool, no_color: bool) -> bool {
    if flags.format != OutputFormat::Table {
        return false;
    }
    match flags.color {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => is_tty && !flags.quiet && !no_color,
    }
}

#[must_use]
pub fn prefs() -> UiPrefs {
    *UI_PREFS.get().unwrap_or(&UiPrefs {
        table_color: false,
        term_width: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn flags(format: OutputFormat, color: ColorMode) -> GlobalFlags {
        GlobalFlags {
            format,
            limit: None,
            quiet: false,
            verbose: false,
            color,
            database: None,
        }
    }

    #[rstest]
    #[case(OutputFormat::Table, ColorMode::Auto, true, false, true)]
    #[case(OutputFormat::Table, ColorMode::Auto, false, false, false)]
    #[case(OutputFormat::Table, ColorMode::Auto, true, true, false)]
    #[case(OutputFormat::Table, ColorMode::Always, false, true, true)]
    #[case(OutputFormat::Table, ColorMode::Never, true, false, false)]
    #[case(OutputFormat::Json, ColorMode::Always, true, false, false)]
    fn color_resolution(
        #[case] format: OutputFormat,
        #[case] color: ColorMode,
        #[case] tty: bool,
        #[case] no_color: bool,
        #[case] expected: bool,
    ) {
        assert_eq!(table_color(&flags(format, color), tty, no_color), expected);
    }
}
