use colored::Colorize;

/// Yellow notice block, one line per entry. Used for the dev-auth account
/// listing and the chat connection-problem banner.
pub fn notice(lines: &[String]) {
    for line in lines {
        eprintln!("{}", line.yellow());
    }
}

/// Red error line for failures surfaced as notifications.
pub fn error(line: &str) {
    eprintln!("{}", line.red());
}
