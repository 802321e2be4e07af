mod booster_crawler;
mod cards;
mod error;
mod image_fetcher;
mod page_extractor;
#[cfg(test)]
mod test;
mod utilities;
mod xlsx_generator;

use std::path::Path;
use std::process::ExitCode;

use log::{debug, error, info, warn};
use reqwest::Client;

use booster_crawler::BoosterCrawler;
use cards::booster::BoosterCollection;
use error::ScrapeError;
use image_fetcher::ImageFetcher;
use utilities::config::CONFIG;
use utilities::file_management::save_to_file;
use xlsx_generator::{build_workbook, save_workbook};

async fn collect_boosters() -> Result<BoosterCollection, ScrapeError> {
    let client = Client::new();
    let image_fetcher = ImageFetcher::new(&CONFIG.base_url, client.clone(), &CONFIG.images_dir)?;
    let crawler = BoosterCrawler::new(
        &CONFIG.base_url,
        &CONFIG.boosters_path,
        client,
        image_fetcher,
    )?;
    crawler.collect_boosters().await
}

fn log_boosters(boosters: &BoosterCollection) {
    for booster in boosters.iter() {
        info!("{}: {} cards", booster.name, booster.cards.len());
        for card in &booster.cards {
            debug!("    {}", card.name);
        }
    }
    info!("Cards number = {}", boosters.card_count());
}

async fn run() -> Result<(), ScrapeError> {
    let boosters = collect_boosters().await?;
    if boosters.is_empty() {
        warn!("No cards found, the workbook will be empty");
    }
    log_boosters(&boosters);

    if let Some(path) = &CONFIG.cards_json_path {
        save_to_file(path, &boosters)?;
        info!("Saved card snapshot to {}", path);
    }

    let mut workbook = build_workbook(&boosters, Path::new(&CONFIG.images_dir))?;
    if let Err(e) = save_workbook(&mut workbook, &CONFIG.output_file) {
        error!("Failed to save {}: {}", CONFIG.output_file, e);
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();
    info!("Starting, scraping {}", CONFIG.boosters_url());

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
