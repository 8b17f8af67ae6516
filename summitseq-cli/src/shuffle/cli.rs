use clap::{Arg, Command, arg};

pub const SHUFFLE_CMD: &str = "shuffle";

pub fn create_shuffle_cli() -> Command {
    Command::new(SHUFFLE_CMD)
        .about("Place one random, non-overlapping negative region per positive region.")
        .arg(
            arg!(-i --positives <POSITIVES>)
                .required(true)
                .help("BED file of positive windows"),
        )
        .arg(
            Arg::new("chrom-sizes")
                .short('g')
                .long("chrom-sizes")
                .required(true)
                .help("Path to chrom.sizes file"),
        )
        .arg(
            arg!(-o --output <OUTPUT>)
                .required(true)
                .help("Output BED path; a .gz extension compresses it"),
        )
        .arg(
            arg!(--seed <SEED>)
                .required(false)
                .help("Seed for negative placement"),
        )
        .arg(
            Arg::new("max-tries")
                .long("max-tries")
                .default_value("1000")
                .help("Placement attempts per negative region"),
        )
        .arg(
            arg!(--backend <BACKEND>)
                .value_parser(["native", "bedtools"])
                .default_value("native")
                .help("Sampler implementation"),
        )
        .arg(
            Arg::new("bedtools-bin")
                .long("bedtools-bin")
                .default_value("bedtools")
                .help("bedtools executable used by the bedtools backend"),
        )
}
