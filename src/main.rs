use anyhow::Result;
use clap::Parser;
use dnaimage::pipeline::{encode_png, render_genome, save_image, show_image, CHROMOSOME_ORDER};
use dnaimage::record::load_records;
use log::info;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dna-image")]
#[command(about = "Draw every base pair of a genotype file as a colored pixel.", long_about = None)]
struct Args {
    /// Tab-separated genotype FILE: marker id, chromosome, position, genotype.
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Write the PNG image to this FILE.
    #[arg(short = 'o', long = "out", value_name = "FILE", default_value = "dna.png")]
    out: PathBuf,

    /// Don't open the image in a viewer after saving.
    #[arg(short = 'n', long = "no-show")]
    no_show: bool,

    // Logging
    /// Verbosity level (0 = error, 1 = info, 2 = debug).
    #[arg(short = 'v', long = "verbose", value_name = "N", default_value_t = 1)]
    verbose: u8,
}

fn run(args: &Args) -> Result<()> {
    let records = load_records(&args.input)?;

    info!("Rendering image...");
    let image = render_genome(&records, &CHROMOSOME_ORDER);
    drop(records);

    let bytes = encode_png(&image)?;
    save_image(&bytes, &args.out)?;

    if !args.no_show {
        show_image(&args.out);
    }
    Ok(())
}

fn main() {
    let args = Args::parse();

    // Initialize logger based on verbosity
    env_logger::Builder::new()
        .filter_level(match args.verbose {
            0 => log::LevelFilter::Error,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .init();

    info!("Starting visualization...");

    if let Err(e) = run(&args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    info!("Done.");
}
