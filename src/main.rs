use clap::Parser;
use drt_parse::cli::{self, Paths};
use drt_parse::excel::DrtLayout;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "drt-parse")]
#[command(about = "Convert a DRT spreadsheet into input values for the chemistry driver")]
#[command(long_about = "drt-parse - DRT spreadsheet → input_values.txt

Reads the distinct row table worksheet, validates point group, multiplicity,
symmetry and electron counts, and writes `set key value` lines.

FILES:
  Scripts/DRT.xlsx           canonical snapshot (PATH is copied here)
  Scripts/input_values.txt   generated output (overwritten)

EXAMPLES:
  drt-parse                       # uses existing Scripts/DRT.xlsx
  drt-parse path/to/your/DRT.xlsx # copies, then parses

Set RUST_LOG=drt_parse=debug for diagnostic logging.")]
#[command(version)]
struct Cli {
    /// Path to the DRT spreadsheet (.xlsx); defaults to Scripts/DRT.xlsx
    path: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "drt_parse=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    cli::run(cli.path, &Paths::default(), &DrtLayout::default())?;
    Ok(())
}
