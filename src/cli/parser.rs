/// Enum representing CLI commands
#[derive(Debug, PartialEq)]
pub enum Command {
    Fixit,
    Prioritize,
    Help,
    Unknown(String),
}

pub const USAGE: &str = "Usage: linear-priority <command>

Commands:
  fixit       Set priorities from fixit-score labels and print completed totals
  prioritize  Set priorities of feedback issues from their RICE labels
  help        Show this message";

/// Parse command line arguments and return a Command
///
/// # Arguments
/// * `args` - Command line arguments (including program name)
///
/// # Returns
/// * `Command` - The parsed command
pub fn parse_args(args: &[String]) -> Command {
    match args.len() {
        0 | 1 => Command::Help,
        2 => match args[1].as_str() {
            "fixit" => Command::Fixit,
            "prioritize" => Command::Prioritize,
            "help" | "--help" | "-h" => Command::Help,
            cmd => Command::Unknown(cmd.to_string()),
        },
        _ => Command::Unknown(args[1..].join(" ")),
    }
}
