use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use base64::Engine;
use regex::Regex;

use crate::cards::card::Card;

// 1x1 transparent PNG
const PIXEL_PNG_BASE64: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChwGA60e6kgAAAABJRU5ErkJggg==";

pub fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn pixel_png() -> Vec<u8> {
    base64::engine::general_purpose::STANDARD
        .decode(PIXEL_PNG_BASE64)
        .unwrap()
}

pub fn card(name: &str, archetype: &str) -> Card {
    Card {
        archetype: archetype.to_string(),
        image_name: format!("{}.png", name.replace(' ', "_")),
        name: name.to_string(),
        rarity: 1,
        level: 1,
        description: format!("{} description", name),
    }
}

pub fn booster_index_page() -> &'static str {
    include_str!("boosters_index.html")
}

pub fn booster_detail_page() -> &'static str {
    include_str!("booster_detail.html")
}

/// What a saved xlsx file holds: sheet names in workbook order, the cells of
/// the first sheet by reference (strings resolved) and its drawing part.
pub struct SavedWorkbook {
    pub sheet_names: Vec<String>,
    pub cells: HashMap<String, String>,
    pub drawing: Option<String>,
    pub media_files: usize,
}

fn read_part(archive: &mut zip::ZipArchive<File>, name: &str) -> Option<String> {
    let mut part = archive.by_name(name).ok()?;
    let mut content = String::new();
    part.read_to_string(&mut content).unwrap();
    Some(content)
}

pub fn read_saved_workbook(path: &Path) -> SavedWorkbook {
    let mut archive = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();

    let workbook_xml = read_part(&mut archive, "xl/workbook.xml").unwrap();
    let sheet_names = Regex::new(r#"<sheet name="([^"]*)""#)
        .unwrap()
        .captures_iter(&workbook_xml)
        .map(|c| c[1].to_string())
        .collect();

    let shared_strings: Vec<String> = read_part(&mut archive, "xl/sharedStrings.xml")
        .map(|xml| {
            Regex::new(r"<si><t[^>]*>([^<]*)</t></si>")
                .unwrap()
                .captures_iter(&xml)
                .map(|c| c[1].to_string())
                .collect()
        })
        .unwrap_or_default();

    let sheet_xml = read_part(&mut archive, "xl/worksheets/sheet1.xml").unwrap();
    let cells = Regex::new(r#"<c r="([A-Z]+[0-9]+)"([^>]*)><v>([^<]*)</v></c>"#)
        .unwrap()
        .captures_iter(&sheet_xml)
        .map(|c| {
            let value = if c[2].contains(r#"t="s""#) {
                shared_strings[c[3].parse::<usize>().unwrap()].clone()
            } else {
                c[3].to_string()
            };
            (c[1].to_string(), value)
        })
        .collect();

    let drawing = read_part(&mut archive, "xl/drawings/drawing1.xml");
    let media_files = archive
        .file_names()
        .filter(|name| name.starts_with("xl/media/"))
        .count();

    SavedWorkbook {
        sheet_names,
        cells,
        drawing,
        media_files,
    }
}
