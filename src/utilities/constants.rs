pub const WIKI_BASE_URL: &str = "https://dungeondrafters.wiki.gg";
pub const BOOSTERS_PATH: &str = "/wiki/Boosters";

pub const IMAGES_DIR: &str = "Images";
pub const OUTPUT_FILE: &str = "DungeonDrafters_CardsChecklist.xlsx";

/// Archetype whose cards belong to the second booster listed on a page.
pub const STRANGER_ARCHETYPE: &str = "Stranger";

pub const COLUMN_NAMES: [&str; 6] = ["Archetype", "Image", "Name", "Rarity", "Level", "Description"];

// Sheet layout
pub const MAX_SHEET_NAME_LEN: usize = 31;
pub const STYLED_ROWS: u32 = 200;
pub const CARD_ROW_HEIGHT: f64 = 59.0;
pub const DESCRIPTION_COLUMN_WIDTH: f64 = 59.0;
pub const LEADING_COLUMN_WIDTH: f64 = 15.0;
pub const IMAGE_OFFSET_X: u32 = 32;
pub const IMAGE_OFFSET_Y: u32 = 13;
