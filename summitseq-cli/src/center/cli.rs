use clap::{Arg, ArgAction, Command, arg};

pub const CENTER_CMD: &str = "center";

pub fn create_center_cli() -> Command {
    Command::new(CENTER_CMD)
        .about("Recenter peaks on their summits with fixed-width windows and write them as BED.")
        .arg(
            arg!(-p --peaks <PEAKS>)
                .required(true)
                .help("Path to narrowPeak-like peak file (.gz allowed)"),
        )
        .arg(
            arg!(-o --output <OUTPUT>)
                .required(true)
                .help("Output BED path; a .gz extension compresses it"),
        )
        .arg(
            Arg::new("window-length")
                .short('w')
                .long("window-length")
                .default_value("100")
                .help("Width of each window; must be even"),
        )
        .arg(
            Arg::new("keep-names")
                .long("keep-names")
                .action(ArgAction::SetTrue)
                .help("Write the peak name as 4th column"),
        )
}
