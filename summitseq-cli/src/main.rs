mod build;
mod center;
mod config;
mod getfasta;
mod shuffle;

use anyhow::Result;
use clap::{ArgAction, Command, arg};
use env_logger::Env;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "summitseq";
    pub const BIN_NAME: &str = "summitseq";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Build labeled positive/negative FASTA datasets from peak calls for sequence classifiers.")
        .subcommand_required(true)
        .arg(
            arg!(-v --verbose "Log every dropped peak and placed region")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(build::cli::create_build_cli())
        .subcommand(center::cli::create_center_cli())
        .subcommand(shuffle::cli::create_shuffle_cli())
        .subcommand(getfasta::cli::create_getfasta_cli())
        .subcommand(config::cli::create_config_cli())
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    let level = match matches.get_flag("verbose") {
        true => "debug",
        false => "info",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    match matches.subcommand() {
        //
        // FULL PIPELINE
        //
        Some((build::cli::BUILD_CMD, matches)) => {
            build::handlers::run_build(matches)?;
        }

        //
        // SINGLE STAGES
        //
        Some((center::cli::CENTER_CMD, matches)) => {
            center::handlers::run_center(matches)?;
        }
        Some((shuffle::cli::SHUFFLE_CMD, matches)) => {
            shuffle::handlers::run_shuffle(matches)?;
        }
        Some((getfasta::cli::GETFASTA_CMD, matches)) => {
            getfasta::handlers::run_getfasta(matches)?;
        }

        //
        // CONFIG TEMPLATE
        //
        Some((config::cli::CONFIG_CMD, matches)) => {
            config::handlers::run_config(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
