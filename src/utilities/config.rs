use std::env;

use log::error;

use crate::utilities::constants::{BOOSTERS_PATH, IMAGES_DIR, OUTPUT_FILE, WIKI_BASE_URL};

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub boosters_path: String,
    pub images_dir: String,
    pub output_file: String,
    pub cards_json_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: WIKI_BASE_URL.to_string(),
            boosters_path: BOOSTERS_PATH.to_string(),
            images_dir: IMAGES_DIR.to_string(),
            output_file: OUTPUT_FILE.to_string(),
            cards_json_path: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        let mut config = Config::default();
        config.update_from_env();
        config
    }

    fn update_from_env(&mut self) {
        if let Some(base_url) = non_empty_var("WIKI_BASE_URL") {
            self.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Some(boosters_path) = non_empty_var("BOOSTERS_PATH") {
            self.boosters_path = boosters_path;
        }
        if let Some(images_dir) = non_empty_var("IMAGES_DIR") {
            self.images_dir = images_dir;
        }
        if let Some(output_file) = non_empty_var("OUTPUT_FILE") {
            if output_file.ends_with(".xlsx") {
                self.output_file = output_file;
            } else {
                error!(
                    "OUTPUT_FILE must end with .xlsx, keeping {}",
                    self.output_file
                );
            }
        }
        self.cards_json_path = non_empty_var("CARDS_JSON");
    }

    pub fn boosters_url(&self) -> String {
        format!("{}{}", self.base_url, self.boosters_path)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        Ok(_) => {
            error!("Ignoring empty value for {}", key);
            None
        }
        Err(_) => None,
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: Config = Config::new();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_points_at_the_wiki() {
        let config = Config::default();

        assert_eq!(config.base_url, "https://dungeondrafters.wiki.gg");
        assert_eq!(
            config.boosters_url(),
            "https://dungeondrafters.wiki.gg/wiki/Boosters"
        );
        assert_eq!(config.images_dir, "Images");
        assert_eq!(config.output_file, "DungeonDrafters_CardsChecklist.xlsx");
        assert!(config.cards_json_path.is_none());
    }

    #[test]
    fn test_environment_overrides_defaults() {
        env::set_var("WIKI_BASE_URL", "http://localhost:8080/");
        env::set_var("OUTPUT_FILE", "checklist.csv");
        env::set_var("CARDS_JSON", "snapshots/cards.json");

        let config = Config::new();

        env::remove_var("WIKI_BASE_URL");
        env::remove_var("OUTPUT_FILE");
        env::remove_var("CARDS_JSON");

        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.boosters_url(), "http://localhost:8080/wiki/Boosters");
        assert_eq!(config.output_file, "DungeonDrafters_CardsChecklist.xlsx");
        assert_eq!(config.cards_json_path.as_deref(), Some("snapshots/cards.json"));
    }
}
