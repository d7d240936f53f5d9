use std::io;
use std::process::ExitCode;

use clap::Parser;
use log::info;
use simple_logger::init_with_level;

use seqlens_cli::{cli::Args, execute};

fn main() -> ExitCode {
    let start = std::time::Instant::now();

    let args = Args::parse();

    if let Err(e) = init_with_level(args.level) {
        eprintln!("Failed to initialise logging: {}", e);
    }

    let response = execute(&args, io::stdin().lock());
    println!("{}", response.body);

    let elapsed = start.elapsed();
    info!("Elapsed time: {:.3?}", elapsed);

    ExitCode::from(response.status.exit_code())
}
