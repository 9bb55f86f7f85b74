//! Auction item categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The fixed set of item categories a listing may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ItemType {
    Egg,
    Pet,
    Boost,
    Potion,
}

impl ItemType {
    pub const fn as_str(self) -> &'static str {
        match self {
            ItemType::Egg => "EGG",
            ItemType::Pet => "PET",
            ItemType::Boost => "BOOST",
            ItemType::Potion => "POTION",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EGG" => Ok(ItemType::Egg),
            "PET" => Ok(ItemType::Pet),
            "BOOST" => Ok(ItemType::Boost),
            "POTION" => Ok(ItemType::Potion),
            _ => Err(CoreError::Validation(
                "itemType must be EGG, PET, BOOST, or POTION".into(),
            )),
        }
    }
}
