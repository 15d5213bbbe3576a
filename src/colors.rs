/// Color support with NO_COLOR and CLICOLOR environment variable handling
///
/// Follows the NO_COLOR standard (https://no-color.org/) and the traditional
/// CLICOLOR conventions, plus an explicit `--no-color` flag.
///
/// **Precedence**: `--no-color` > `NO_COLOR` > `CLICOLOR_FORCE` > `CLICOLOR=0` > TTY detection
use colored::control;

/// Decide whether to colorize, given a variable lookup and TTY status.
pub fn resolve_color<F>(no_color_flag: bool, lookup: F, is_tty: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    if no_color_flag || lookup("NO_COLOR").is_some() {
        return false;
    }

    if lookup("CLICOLOR_FORCE").is_some_and(|v| v != "0") {
        return true;
    }

    if lookup("CLICOLOR").is_some_and(|v| v == "0") {
        return false;
    }

    is_tty
}

/// Configure `colored` for the whole process and return the decision so
/// renderers can be told explicitly.
pub fn init_colors(no_color_flag: bool) -> bool {
    let is_tty = std::io::IsTerminal::is_terminal(&std::io::stdout());
    let enabled = resolve_color(no_color_flag, |var| std::env::var(var).ok(), is_tty);
    control::set_override(enabled);
    enabled
}
