use anyhow::Result;
use clap::Parser;
use maps_tab_icons::icon_gen::{self, ICON_SIZES};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "maps-tab-icons",
    version,
    about = "Generate the map-pin icons of the Maps Tab extension (16, 48 and 128 px)"
)]
struct Args {
    /// Output directory.
    #[clap(short, long, value_name = "DIR", default_value = "icons")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    icon_gen::generate_icons(&ICON_SIZES, &args.output)?;
    Ok(())
}
