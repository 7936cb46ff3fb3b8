//! Command-line argument parsing.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Ask the assistant one question without starting the TUI
    Ask(String),
    /// A flag that needs a value was given without one
    MissingValue(&'static str),
    /// Run the TUI application (default)
    RunTui,
}

/// Parse command-line arguments (program name first) into a command.
///
/// The first recognised flag wins; unknown arguments are ignored.
///
/// ```
/// use signboard::cli::args::{parse_args, CliCommand};
///
/// let args = ["signboard", "--ask", "what is this?"].map(String::from);
/// assert_eq!(
///     parse_args(args.into_iter()),
///     CliCommand::Ask("what is this?".into())
/// );
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--ask" => {
                return match args.next() {
                    Some(question) => CliCommand::Ask(question),
                    None => CliCommand::MissingValue("--ask"),
                }
            }
            other => {
                if let Some(question) = other.strip_prefix("--ask=") {
                    return CliCommand::Ask(question.to_string());
                }
            }
        }
    }
    CliCommand::RunTui
}
