//! TTY detection and color support logic

use std::io::IsTerminal;

/// Determine if colors should be used based on environment and TTY status
pub fn should_use_colors() -> bool {
    colors_enabled(|key| std::env::var(key).ok(), std::io::stdout().is_terminal())
}

/// Color decision from an environment lookup and the TTY state.
///
/// `NO_COLOR` (https://no-color.org/) wins over everything, then
/// `CLICOLOR_FORCE` (anything but "0"), then `CLICOLOR=0`, then the TTY.
fn colors_enabled(env: impl Fn(&str) -> Option<String>, is_tty: bool) -> bool {
    if env("NO_COLOR").is_some() {
        return false;
    }

    match env("CLICOLOR_FORCE") {
        Some(val) if val != "0" => return true,
        _ => {}
    }

    if env("CLICOLOR").as_deref() == Some("0") {
        return false;
    }

    is_tty
}
