use clap::Parser;
use sigscore::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    sigscore::logging::init(cli.verbose);
    run(cli)
}
