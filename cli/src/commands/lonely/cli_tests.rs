//! CLI parsing tests for lonely command.

#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use clap::Parser;
    use rstest::rstest;

    #[rstest]
    fn test_parses_without_args() {
        let args = Args::try_parse_from(["fakebook", "lonely"]).unwrap();
        assert!(matches!(args.command, crate::commands::Command::Lonely(_)));
    }

    crate::cli_error_test! {
        command: "lonely",
        test_name: test_rejects_positional_arg,
        args: ["8"],
    }
}
