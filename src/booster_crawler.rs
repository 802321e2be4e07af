use chrono::Local;
use log::{debug, info};
use reqwest::Client;
use scraper::Html;
use url::Url;

use crate::cards::booster::BoosterCollection;
use crate::error::ScrapeError;
use crate::image_fetcher::ImageFetcher;
use crate::page_extractor::{extract_detail_links, extract_detail_sections, route_booster};

/// Walks the boosters index and every booster page linked from it.
pub struct BoosterCrawler {
    client: Client,
    base_url: Url,
    boosters_path: String,
    image_fetcher: ImageFetcher,
}

impl BoosterCrawler {
    pub fn new(
        base_url: &str,
        boosters_path: &str,
        client: Client,
        image_fetcher: ImageFetcher,
    ) -> Result<Self, ScrapeError> {
        Ok(BoosterCrawler {
            client,
            base_url: Url::parse(base_url)?,
            boosters_path: boosters_path.to_string(),
            image_fetcher,
        })
    }

    async fn fetch_page(&self, url: &Url) -> Result<String, ScrapeError> {
        debug!("Visiting {}", url);
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| ScrapeError::network(url.as_str(), e))?;
        response
            .text()
            .await
            .map_err(|e| ScrapeError::network(url.as_str(), e))
    }

    async fn get_detail_links(&self) -> Result<Vec<Url>, ScrapeError> {
        let index_url = self.base_url.join(&self.boosters_path)?;
        let index_page = self.fetch_page(&index_url).await?;

        let links = extract_detail_links(&Html::parse_document(&index_page));
        links
            .iter()
            .map(|link| self.base_url.join(link).map_err(ScrapeError::from))
            .collect()
    }

    /// Scrapes one booster page into `boosters`, downloading the artwork of
    /// every card found on it.
    async fn collect_detail_page(
        &self,
        url: &Url,
        boosters: &mut BoosterCollection,
    ) -> Result<usize, ScrapeError> {
        let page = self.fetch_page(url).await?;
        let sections = extract_detail_sections(&Html::parse_document(&page))?;

        let mut card_count = 0;
        for section in sections {
            for row in section.rows {
                let booster_name = route_booster(&section.booster_names, &row.archetype)
                    .ok_or_else(|| ScrapeError::MissingBoosterName(url.to_string()))?;
                let image_name = self.image_fetcher.fetch_image(&row.image_src).await?;
                boosters.push(booster_name, row.into_card(image_name));
                card_count += 1;
            }
        }
        Ok(card_count)
    }

    /// Runs the whole crawl. Pages are fetched one after another and the
    /// returned collection is complete.
    pub async fn collect_boosters(&self) -> Result<BoosterCollection, ScrapeError> {
        let start_time = Local::now();
        info!("Starting booster crawl at {}", start_time);

        let links = self.get_detail_links().await?;
        info!("Found {} booster pages", links.len());

        let mut boosters = BoosterCollection::new();
        for link in &links {
            let card_count = self.collect_detail_page(link, &mut boosters).await?;
            info!("Collected {} cards from {}", card_count, link);
        }

        let end_time = Local::now();
        info!(
            "Booster crawl started at: {}. Finished at: {}. Took: {} seconds and found {} cards in {} boosters",
            start_time,
            end_time,
            (end_time - start_time).num_seconds(),
            boosters.card_count(),
            boosters.len()
        );
        Ok(boosters)
    }
}
