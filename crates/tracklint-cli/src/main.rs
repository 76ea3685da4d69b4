//! tracklint CLI
//!
//! Verifies naming and file-mode conventions for every tracked file in a git
//! repository. Prints one line per violation on stdout and exits 1 if any were
//! found; prints nothing and exits 0 otherwise.

use clap::Parser;

mod commands;

use commands::lint::{execute, LintArgs};

#[derive(Debug, Parser)]
#[command(name = "tracklint")]
#[command(about = "Check tracked file names, permissions and shebangs", long_about = None)]
struct Cli {
    #[command(flatten)]
    lint: LintArgs,
}

fn main() {
    let cli = Cli::parse();

    match execute(cli.lint) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(tracklint_core::engine::EXIT_FAILURE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use commands::lint::OutputFormat;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments_uses_defaults() {
        let cli = Cli::try_parse_from(["tracklint"]).unwrap();
        assert_eq!(cli.lint.repo, std::path::PathBuf::from("."));
        assert_eq!(cli.lint.format, OutputFormat::Text);
        assert!(!cli.lint.log_json);
    }

    #[test]
    fn test_flags_parse() {
        let cli =
            Cli::try_parse_from(["tracklint", "-C", "/src", "--format", "json", "--log-json"])
                .unwrap();
        assert_eq!(cli.lint.repo, std::path::PathBuf::from("/src"));
        assert_eq!(cli.lint.format, OutputFormat::Json);
        assert!(cli.lint.log_json);
    }
}
