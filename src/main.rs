use clap::Parser;
use quadsplit::{config, dispatch, output};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "quadsplit")]
#[command(version)]
#[command(about = "Batch crop standard sized images")]
#[command(long_about = "\
Batch crop standard sized images

Every entry of INDIR is handed to ImageMagick, which splits it into a 2x2
grid of tiles written to OUTDIR:

  INDIR/page-01.tif  ->  OUTDIR/page-01_0.png ... OUTDIR/page-01_3.png

Crops run in parallel, one per CPU core. Entries ImageMagick cannot read
are skipped without error.

Requires `convert` on PATH. Set QUADSPLIT_CONFIG to a TOML file to override
the tool, grid, tile format, or worker count.")]
struct Cli {
    /// Directory of images to split
    indir: PathBuf,

    /// Directory receiving the tiles (created if missing)
    outdir: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = config::load_optional(config::config_path_from_env().as_deref())?;

    let (tx, rx) = std::sync::mpsc::channel();
    let printer = std::thread::spawn(move || {
        for event in rx {
            for line in output::format_dispatch_event(&event) {
                println!("{}", line);
            }
        }
    });

    let result = dispatch::dispatch(&cli.indir, &cli.outdir, &config, Some(tx));
    // The sender is dropped once dispatch returns, so the printer drains and exits
    printer.join().ok();
    result?;

    Ok(())
}
