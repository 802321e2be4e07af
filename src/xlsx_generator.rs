use std::path::Path;

use log::{debug, info};
use rust_xlsxwriter::{Format, FormatAlign, Image, Workbook, Worksheet};

use crate::cards::booster::{Booster, BoosterCollection, BoosterName};
use crate::cards::card::Card;
use crate::error::ScrapeError;
use crate::utilities::constants::{
    CARD_ROW_HEIGHT, COLUMN_NAMES, DESCRIPTION_COLUMN_WIDTH, IMAGE_OFFSET_X, IMAGE_OFFSET_Y,
    LEADING_COLUMN_WIDTH, MAX_SHEET_NAME_LEN, STYLED_ROWS,
};

const DESCRIPTION_COLUMN: u16 = 5;
const LEADING_COLUMNS: [u16; 3] = [0, 1, 2];

#[derive(Debug, PartialEq, Clone)]
pub enum CellValue {
    Text(String),
    Number(i32),
    /// File name of an image inside the images directory.
    Image(String),
}

pub fn header_row() -> Vec<CellValue> {
    COLUMN_NAMES
        .iter()
        .map(|name| CellValue::Text(name.to_string()))
        .collect()
}

pub fn card_row(card: &Card) -> Vec<CellValue> {
    vec![
        CellValue::Text(card.archetype.clone()),
        CellValue::Image(card.image_name.clone()),
        CellValue::Text(card.name.clone()),
        CellValue::Number(card.rarity),
        CellValue::Number(card.level),
        CellValue::Text(card.description.clone()),
    ]
}

/// Every row of a booster sheet, header first.
pub fn sheet_rows(booster: &Booster) -> Vec<Vec<CellValue>> {
    std::iter::once(header_row())
        .chain(booster.cards.iter().map(card_row))
        .collect()
}

/// Excel caps sheet names at 31 characters.
pub fn sheet_name(booster_name: &BoosterName) -> String {
    booster_name.cleaned.chars().take(MAX_SHEET_NAME_LEN).collect()
}

/// Sheet name for a booster that does not clash, ignoring case, with any name
/// in `used`. Boosters cut down to the same 31 characters get a ` 2`, ` 3`, ...
/// suffix. The chosen name is added to `used`.
pub fn unique_sheet_name(booster_name: &BoosterName, used: &mut Vec<String>) -> String {
    let is_free = |candidate: &str, used: &[String]| {
        !used.iter().any(|name| name.eq_ignore_ascii_case(candidate))
    };

    let mut name = sheet_name(booster_name);
    let mut counter = 2;
    while !is_free(&name, used) {
        let suffix = format!(" {}", counter);
        name = booster_name
            .cleaned
            .chars()
            .take(MAX_SHEET_NAME_LEN - suffix.len())
            .chain(suffix.chars())
            .collect();
        counter += 1;
    }
    used.push(name.clone());
    name
}

fn cell_format() -> Format {
    Format::new()
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_text_wrap()
}

fn setup_sheet(worksheet: &mut Worksheet, name: &str, format: &Format) -> Result<(), ScrapeError> {
    worksheet.set_name(name)?;
    worksheet.set_column_width(DESCRIPTION_COLUMN, DESCRIPTION_COLUMN_WIDTH)?;
    for col in LEADING_COLUMNS {
        worksheet.set_column_width(col, LEADING_COLUMN_WIDTH)?;
    }
    for row in 0..STYLED_ROWS {
        worksheet.set_row_format(row, format)?;
    }
    Ok(())
}

fn write_row(
    worksheet: &mut Worksheet,
    row: u32,
    cells: &[CellValue],
    images_dir: &Path,
    format: &Format,
) -> Result<(), ScrapeError> {
    for (col, cell) in (0u16..).zip(cells) {
        match cell {
            CellValue::Text(text) => {
                worksheet.write_string_with_format(row, col, text, format)?;
            }
            CellValue::Number(number) => {
                worksheet.write_number_with_format(row, col, f64::from(*number), format)?;
            }
            CellValue::Image(file_name) => {
                let image = Image::new(images_dir.join(file_name))?;
                worksheet.insert_image_with_offset(
                    row,
                    col,
                    &image,
                    IMAGE_OFFSET_X,
                    IMAGE_OFFSET_Y,
                )?;
            }
        }
    }
    Ok(())
}

/// Builds a workbook with one sheet per booster, in collection order.
/// Card images are read from `images_dir`.
pub fn build_workbook(
    boosters: &BoosterCollection,
    images_dir: &Path,
) -> Result<Workbook, ScrapeError> {
    let mut workbook = Workbook::new();
    let format = cell_format();
    let mut used_names = Vec::new();

    for booster in boosters.iter() {
        let name = unique_sheet_name(&booster.name, &mut used_names);
        debug!("Writing sheet {} with {} cards", name, booster.cards.len());

        let worksheet = workbook.add_worksheet();
        setup_sheet(worksheet, &name, &format)?;

        for (row, cells) in (0u32..).zip(sheet_rows(booster)) {
            if row > 0 {
                worksheet.set_row_height(row, CARD_ROW_HEIGHT)?;
            }
            write_row(worksheet, row, &cells, images_dir, &format)?;
        }
    }

    Ok(workbook)
}

pub fn save_workbook(workbook: &mut Workbook, path: &str) -> Result<(), ScrapeError> {
    workbook.save(path)?;
    info!("Saved card checklist to {}", path);
    Ok(())
}
