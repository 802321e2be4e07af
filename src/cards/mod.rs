pub mod booster;
pub mod card;
