use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "seqlens",
    about = "GC content, restriction sites and open reading frames of a DNA sequence",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Args {
    #[arg(
        help = "Raw DNA sequence; read from --input or stdin when omitted",
        value_name = "SEQUENCE",
        conflicts_with = "input"
    )]
    pub sequence: Option<String>,

    #[arg(
        short = 'i',
        long = "input",
        help = "Path to a file holding the sequence text",
        value_name = "FILE"
    )]
    pub input: Option<PathBuf>,

    #[arg(
        short = 'j',
        long = "json",
        help = "Read a JSON request body {\"dna_sequence\": ...} instead of raw sequence text"
    )]
    pub json: bool,

    #[arg(short = 'p', long = "pretty", help = "Pretty-print the JSON response")]
    pub pretty: bool,

    #[arg(
        short = 'L',
        long = "level",
        help = "Logging level",
        value_name = "LEVEL",
        default_value_t = log::Level::Warn,
    )]
    pub level: log::Level,
}

#[test]
fn verify_cli() {
    use clap::CommandFactory;
    Args::command().debug_assert()
}
