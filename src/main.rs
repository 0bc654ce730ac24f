//! Sums blank-line separated groups of numbers and reports the biggest ones.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use env_logger::{Builder, Target};
use log::LevelFilter;

use calories::{read_groups, Answers, ParsePolicy};

#[derive(Parser)]
#[command(name = "calories", author, version, about, long_about = None)]
struct Cli {
    /// Input file, one number per line with groups separated by blank lines. `-` reads stdin.
    #[arg(default_value = "input.txt")]
    input: PathBuf,

    /// How many of the biggest groups to add up for the second answer
    #[arg(long, default_value_t = 3, value_parser = parse_top)]
    top: usize,

    /// Skip lines that aren't numbers instead of failing
    #[arg(long)]
    lenient: bool,

    /// Set log filter value [ off, error, warn, info, debug, trace ]
    #[arg(long)]
    #[arg(default_value_t = LevelFilter::Warn)]
    log_level: LevelFilter,
}

fn parse_top(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

#[allow(clippy::print_stderr)]
fn main() -> ExitCode {
    let args = Cli::parse();

    Builder::new()
        .filter_level(args.log_level)
        .parse_default_env()
        .target(Target::Stderr)
        .init();

    let policy = if args.lenient {
        ParsePolicy::Lenient
    } else {
        ParsePolicy::Strict
    };

    let answers =
        read_groups(&args.input, policy).and_then(|groups| Answers::from_groups(&groups, args.top));

    match answers {
        Ok(answers) => {
            println!("{}", answers);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["calories"]);

        assert_eq!(cli.input, PathBuf::from("input.txt"));
        assert_eq!(cli.top, 3);
        assert!(!cli.lenient);
        assert_eq!(cli.log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_top_must_be_positive() {
        assert!(Cli::try_parse_from(["calories", "--top", "0"]).is_err());
        assert!(Cli::try_parse_from(["calories", "--top", "x"]).is_err());
        assert_eq!(Cli::parse_from(["calories", "--top", "5", "-"]).top, 5);
    }
}
