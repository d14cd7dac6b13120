use std::io::Write;

use colored::Colorize;
use daydo_core::ConfirmationRequest;

/// Ask the user to confirm a request on stdin, anything but yes declines.
pub fn confirm(request: &ConfirmationRequest) -> eyre::Result<bool> {
    eprint!(
        "{} {}\n  {} {} ",
        "?".yellow().bold(),
        request.title.bold(),
        request.message,
        "[y/N]".dimmed()
    );
    std::io::stderr().flush()?;

    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
