use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use log::debug;
use reqwest::Client;
use url::Url;

use crate::error::ScrapeError;
use crate::utilities::file_management::ensure_directory;

/// Downloads card artwork into a local directory.
pub struct ImageFetcher {
    client: Client,
    base_url: Url,
    images_dir: PathBuf,
}

impl ImageFetcher {
    pub fn new(
        base_url: &str,
        client: Client,
        images_dir: impl Into<PathBuf>,
    ) -> Result<Self, ScrapeError> {
        Ok(ImageFetcher {
            client,
            base_url: Url::parse(base_url)?,
            images_dir: images_dir.into(),
        })
    }

    /// Downloads `base_url + partial_url` and stores it under the images
    /// directory, replacing any file with the same name. Returns the file name.
    pub async fn fetch_image(&self, partial_url: &str) -> Result<String, ScrapeError> {
        let url = self.base_url.join(partial_url)?;
        let file_name = local_file_name(&url)
            .ok_or_else(|| ScrapeError::InvalidImageUrl(partial_url.to_string()))?;

        let start = Instant::now();
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| ScrapeError::network(url.as_str(), e))?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ScrapeError::network(url.as_str(), e))?;

        ensure_directory(&self.images_dir)?;
        fs::write(self.images_dir.join(&file_name), &bytes)?;

        debug!(
            "Saved {} ({} bytes) in {:?} ms",
            file_name,
            bytes.len(),
            start.elapsed().as_millis()
        );
        Ok(file_name)
    }
}

/// The last segment of the url path, which is the name the image is stored under.
pub fn local_file_name(url: &Url) -> Option<String> {
    url.path_segments()?
        .last()
        .filter(|segment| !segment.is_empty())
        .map(String::from)
}
