use clap::{Arg, ArgAction, Command, arg};

pub const BUILD_CMD: &str = "build";

pub fn create_build_cli() -> Command {
    Command::new(BUILD_CMD)
        .about("Center peaks, sample negatives and extract both sets into labeled FASTA files.")
        .arg(
            arg!(-c --config <CONFIG>)
                .required(false)
                .help("TOML configuration file; flags below override its values"),
        )
        .arg(
            arg!(-p --peaks <PEAKS>)
                .required(false)
                .help("Path to narrowPeak-like peak file (.gz allowed)"),
        )
        .arg(
            Arg::new("chrom-sizes")
                .short('g')
                .long("chrom-sizes")
                .required(false)
                .help("Path to chrom.sizes file"),
        )
        .arg(
            arg!(-f --genome <GENOME>)
                .required(false)
                .help("Path to reference genome FASTA"),
        )
        .arg(
            Arg::new("output-prefix")
                .short('o')
                .long("output-prefix")
                .required(false)
                .help("Prefix of every output file (default: peak file name without extensions)"),
        )
        .arg(
            Arg::new("window-length")
                .short('w')
                .long("window-length")
                .required(false)
                .help("Width of each window centered on a summit; must be even [default: 100]"),
        )
        .arg(
            arg!(--seed <SEED>)
                .required(false)
                .help("Seed for negative placement"),
        )
        .arg(
            Arg::new("max-tries")
                .long("max-tries")
                .required(false)
                .help("Placement attempts per negative region [default: 1000]"),
        )
        .arg(
            arg!(--backend <BACKEND>)
                .required(false)
                .value_parser(["native", "bedtools"])
                .help("Sampler and extractor implementation [default: native]"),
        )
        .arg(
            Arg::new("bedtools-bin")
                .long("bedtools-bin")
                .required(false)
                .help("bedtools executable used by the bedtools backend"),
        )
        .arg(
            Arg::new("keep-names")
                .long("keep-names")
                .action(ArgAction::SetTrue)
                .help("Keep peak names in the positive interval list"),
        )
        .arg(
            arg!(--compress "Write interval lists as .bed.gz").action(ArgAction::SetTrue),
        )
}
