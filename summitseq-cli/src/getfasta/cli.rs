use clap::{Arg, Command, arg};

pub const GETFASTA_CMD: &str = "getfasta";

pub fn create_getfasta_cli() -> Command {
    Command::new(GETFASTA_CMD)
        .about("Extract the reference sequence of every interval of a BED file.")
        .arg(
            arg!(-b --bed <BED>)
                .required(true)
                .help("BED file of intervals"),
        )
        .arg(
            arg!(-f --genome <GENOME>)
                .required(true)
                .help("Path to reference genome FASTA"),
        )
        .arg(
            arg!(-o --output <OUTPUT>)
                .required(true)
                .help("Output FASTA path; a .gz extension compresses it"),
        )
        .arg(
            arg!(--backend <BACKEND>)
                .value_parser(["native", "bedtools"])
                .default_value("native")
                .help("Extractor implementation"),
        )
        .arg(
            Arg::new("bedtools-bin")
                .long("bedtools-bin")
                .default_value("bedtools")
                .help("bedtools executable used by the bedtools backend"),
        )
}
