//! User demographics
//!
//! Only the country attribute matters here: it decides which users belong to
//! a control group that must not receive new recommendations.

use super::recommendation::UserId;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Mapping from user id to country code
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Demographics {
    countries: HashMap<UserId, String>,
}

impl Demographics {
    /// Build from `(user_id, country)` records. Later records for the same
    /// user overwrite earlier ones.
    pub fn from_records<I, S>(records: I) -> Self
    where
        I: IntoIterator<Item = (UserId, S)>,
        S: Into<String>,
    {
        Self {
            countries: records
                .into_iter()
                .map(|(user, country)| (user, country.into()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn country_of(&self, user_id: UserId) -> Option<&str> {
        self.countries.get(&user_id).map(String::as_str)
    }

    /// Every user whose country equals `country`
    pub fn users_in_country(&self, country: &str) -> HashSet<UserId> {
        self.countries
            .iter()
            .filter(|(_, c)| c.as_str() == country)
            .map(|(user, _)| *user)
            .collect()
    }
}
