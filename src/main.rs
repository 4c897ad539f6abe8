use clap::Parser;
use std::process::ExitCode;
use themekit::cli::{self, Cli};
use themekit::{logging, ConfigSources};

fn main() -> ExitCode {
    let args = Cli::parse();
    logging::init(args.verbose);

    let result = ConfigSources::from_process(args.flags.to_configuration())
        .map_err(Box::<dyn std::error::Error>::from)
        .and_then(|sources| cli::run(&args, &sources, &mut std::io::stdout().lock()));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
