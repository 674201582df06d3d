use clap::Parser;
use stockval::cli::{Cli, run};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
