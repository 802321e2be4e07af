use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Card {
    pub archetype: String,
    pub image_name: String,
    pub name: String,
    pub rarity: i32,
    pub level: i32,
    pub description: String,
}

/// A card row as read from a detail page, before its artwork is downloaded.
#[derive(Debug, PartialEq, Clone)]
pub struct CardRow {
    pub archetype: String,
    pub image_src: String,
    pub name: String,
    pub rarity: i32,
    pub level: i32,
    pub description: String,
}

impl CardRow {
    pub fn into_card(self, image_name: String) -> Card {
        Card {
            archetype: self.archetype,
            image_name,
            name: self.name,
            rarity: self.rarity,
            level: self.level,
            description: self.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::constants::COLUMN_NAMES;

    #[test]
    fn test_column_names_follow_card_layout() {
        assert_eq!(
            COLUMN_NAMES,
            ["Archetype", "Image", "Name", "Rarity", "Level", "Description"]
        );
    }

    #[test]
    fn test_card_row_into_card_keeps_fields() {
        let row = CardRow {
            archetype: "Warrior".to_string(),
            image_src: "/images/Slash.png".to_string(),
            name: "Slash".to_string(),
            rarity: 2,
            level: 1,
            description: "Deal 3 damage.".to_string(),
        };

        let card = row.into_card("Slash.png".to_string());

        assert_eq!(card.archetype, "Warrior");
        assert_eq!(card.image_name, "Slash.png");
        assert_eq!(card.name, "Slash");
        assert_eq!(card.rarity, 2);
        assert_eq!(card.level, 1);
        assert_eq!(card.description, "Deal 3 damage.");
    }
}
