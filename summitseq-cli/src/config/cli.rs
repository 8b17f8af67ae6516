use clap::{ArgAction, Command, arg};

pub const CONFIG_CMD: &str = "config";

pub fn create_config_cli() -> Command {
    Command::new(CONFIG_CMD)
        .about("Write an example TOML configuration for `build --config`.")
        .arg(
            arg!(-o --output <OUTPUT>)
                .default_value("summitseq.toml")
                .help("Where to write the configuration"),
        )
        .arg(arg!(--force "Overwrite an existing file").action(ArgAction::SetTrue))
}
