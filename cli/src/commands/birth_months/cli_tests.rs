//! CLI parsing tests for birth-months command.

#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use clap::Parser;
    use rstest::rstest;

    #[rstest]
    fn test_parses_without_args() {
        let args = Args::try_parse_from(["fakebook", "birth-months"]).unwrap();
        assert!(matches!(args.command, crate::commands::Command::BirthMonths(_)));
    }

    crate::cli_error_test! {
        command: "birth-months",
        test_name: test_rejects_positional_arg,
        args: ["March"],
    }
}
