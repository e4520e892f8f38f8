use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use detfetch::commands;
use detfetch::core::target::{
    FetchTarget, DEFAULT_ARCHIVE_NAME, DEFAULT_DESTINATION, DEFAULT_FOLDER_NAME,
    DEFAULT_RESOURCE_ID,
};

#[derive(Parser)]
#[clap(name = "detfetch")]
#[clap(about = "Fetch cached HICO-DET detection results from Google Drive")]
#[clap(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Directory the extracted dataset ends up under
    #[clap(long, default_value = DEFAULT_DESTINATION)]
    destination: PathBuf,
    /// Local name for the downloaded archive
    #[clap(long, default_value = DEFAULT_ARCHIVE_NAME)]
    archive_name: String,
    /// Folder name the archive extracts to
    #[clap(long, default_value = DEFAULT_FOLDER_NAME)]
    folder_name: String,
    /// Google Drive file identifier
    #[clap(long, default_value = DEFAULT_RESOURCE_ID)]
    resource_id: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let target = FetchTarget::new(
        cli.destination,
        cli.archive_name,
        cli.folder_name,
        cli.resource_id,
    );

    if let Err(e) = commands::fetch::ensure_materialized(&target) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    Ok(())
}
