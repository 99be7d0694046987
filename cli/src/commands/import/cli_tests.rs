//! CLI parsing tests for import command.

#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use clap::Parser;
    use rstest::rstest;
    use std::path::PathBuf;

    crate::cli_required_arg_test! {
        command: "import",
        test_name: test_requires_file,
        required_arg: "<FILE>",
    }

    crate::cli_defaults_test! {
        command: "import",
        variant: Import,
        required_args: ["graph.json"],
        defaults: {
            file: PathBuf::from("graph.json"),
            clear: false,
        },
    }

    crate::cli_option_test! {
        command: "import",
        variant: Import,
        test_name: test_with_clear,
        args: ["graph.json", "--clear"],
        field: clear,
        expected: true,
    }
}
