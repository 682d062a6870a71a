//! Track catalogue
//!
//! Maps item ids to the country the track originates from. Used by the
//! country-centric model to split candidates into "target country" and
//! "other".

use super::recommendation::ItemId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackCatalog {
    countries: HashMap<ItemId, String>,
}

impl TrackCatalog {
    pub fn from_records<I, S>(records: I) -> Self
    where
        I: IntoIterator<Item = (ItemId, S)>,
        S: Into<String>,
    {
        Self {
            countries: records
                .into_iter()
                .map(|(item, country)| (item, country.into()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn country_of(&self, item_id: ItemId) -> Option<&str> {
        self.countries.get(&item_id).map(String::as_str)
    }

    /// True if the item is catalogued with the given country.
    ///
    /// Uncatalogued items never match.
    pub fn is_from(&self, item_id: ItemId, country: &str) -> bool {
        self.country_of(item_id) == Some(country)
    }
}
