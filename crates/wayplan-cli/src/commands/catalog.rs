use clap::Subcommand;
use std::path::PathBuf;

use crate::catalog::Catalog;

#[derive(Subcommand)]
pub enum CatalogAction {
    /// Parse a catalog file and report what it contains
    Validate {
        /// Catalog JSON file
        file: PathBuf,
    },
}

pub fn run(action: CatalogAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        CatalogAction::Validate { file } => {
            let catalog = Catalog::load(&file)?;
            println!(
                "{} attractions, {} venues, {} hotel selections, {} transit legs",
                catalog.attractions.len(),
                catalog.venues.len(),
                catalog.hotels.len(),
                catalog.legs.len()
            );
        }
    }
    Ok(())
}
