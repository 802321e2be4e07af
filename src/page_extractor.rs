use log::{debug, warn};
use scraper::{ElementRef, Html, Selector};

use crate::cards::booster::BoosterName;
use crate::cards::card::CardRow;
use crate::error::ScrapeError;
use crate::utilities::constants::STRANGER_ARCHETYPE;
use crate::utilities::string_manipulators::digit_runs;

lazy_static::lazy_static! {
    static ref BOOSTER_LINK: Selector = Selector::parse("table tbody > tr > td > a").unwrap();
    static ref CONTENT: Selector = Selector::parse(r#"div[class="mw-parser-output"]"#).unwrap();
    static ref HEADING_SPAN: Selector = Selector::parse("h1 > span").unwrap();
    static ref TABLE_ROW: Selector = Selector::parse("table > tbody > tr").unwrap();
    static ref RARITY_LINK: Selector = Selector::parse("td:nth-child(4) > a").unwrap();
    static ref LEVEL_LINK: Selector = Selector::parse("td:nth-child(5) > div > a").unwrap();
    static ref CARD_IMAGE: Selector = Selector::parse("td:nth-child(2) > div > a > img").unwrap();
    static ref ARCHETYPE_LINK: Selector = Selector::parse("td > a").unwrap();
    static ref NAME_CELL: Selector = Selector::parse("td:nth-child(3)").unwrap();
    static ref DESCRIPTION_CELL: Selector = Selector::parse("td:nth-child(6)").unwrap();
}

/// One content block of a detail page: the booster names in heading order and
/// every card row of its tables.
#[derive(Debug, PartialEq, Clone)]
pub struct DetailSection {
    pub booster_names: Vec<BoosterName>,
    pub rows: Vec<CardRow>,
}

/// Links from the boosters index table to the detail pages. Image links are
/// dropped and every target is reported once, in document order.
pub fn extract_detail_links(document: &Html) -> Vec<String> {
    let mut links: Vec<String> = Vec::new();
    for href in document
        .select(&BOOSTER_LINK)
        .filter_map(|element| element.value().attr("href"))
    {
        if href.contains(".png") {
            continue;
        }
        if links.iter().any(|link| link == href) {
            debug!("Already scheduled {}", href);
            continue;
        }
        links.push(href.to_string());
    }
    links
}

pub fn extract_detail_sections(document: &Html) -> Result<Vec<DetailSection>, ScrapeError> {
    document.select(&CONTENT).map(extract_section).collect()
}

fn extract_section(content: ElementRef) -> Result<DetailSection, ScrapeError> {
    let booster_names = content
        .select(&HEADING_SPAN)
        .filter_map(|span| match BoosterName::new(span.text().collect()) {
            Ok(name) => Some(name),
            Err(e) => {
                warn!("Skipping heading: {}", e);
                None
            }
        })
        .collect();

    let mut rows = Vec::new();
    for row in content.select(&TABLE_ROW) {
        if let Some(card_row) = extract_card_row(row)? {
            rows.push(card_row);
        }
    }

    Ok(DetailSection {
        booster_names,
        rows,
    })
}

/// Reads a card out of a table row. Rows whose rarity link does not carry
/// exactly one number are headers or separators and yield `None`.
pub fn extract_card_row(row: ElementRef) -> Result<Option<CardRow>, ScrapeError> {
    let rarity_path = first_attr(row, &RARITY_LINK, "href");
    let rarity = match digit_runs(&rarity_path).as_slice() {
        [digits] => parse_number("rarity", digits)?,
        _ => return Ok(None),
    };

    let level_path = first_attr(row, &LEVEL_LINK, "href");
    let level = match digit_runs(&level_path).first() {
        Some(digits) => parse_number("level", digits)?,
        None => return Err(ScrapeError::MissingLevel(level_path.clone())),
    };

    Ok(Some(CardRow {
        archetype: first_attr(row, &ARCHETYPE_LINK, "title"),
        image_src: first_attr(row, &CARD_IMAGE, "src"),
        name: child_text(row, &NAME_CELL),
        rarity,
        level,
        description: child_text(row, &DESCRIPTION_CELL),
    }))
}

/// Picks the bucket for a card: "Stranger" cards go to the second booster of
/// the page when there is one, everything else to the first.
pub fn route_booster<'a>(booster_names: &'a [BoosterName], archetype: &str) -> Option<&'a BoosterName> {
    if archetype == STRANGER_ARCHETYPE && booster_names.len() > 1 {
        booster_names.get(1)
    } else {
        booster_names.first()
    }
}

fn parse_number(field: &'static str, digits: &str) -> Result<i32, ScrapeError> {
    digits.parse::<i32>().map_err(|source| ScrapeError::Parse {
        field,
        value: digits.to_string(),
        source,
    })
}

fn first_attr(element: ElementRef, selector: &Selector, attr: &str) -> String {
    element
        .select(selector)
        .next()
        .and_then(|el| el.value().attr(attr))
        .unwrap_or_default()
        .to_string()
}

fn child_text(element: ElementRef, selector: &Selector) -> String {
    let text = element
        .select(selector)
        .map(|el| el.text().collect::<String>())
        .collect::<String>();
    text.trim().to_string()
}
