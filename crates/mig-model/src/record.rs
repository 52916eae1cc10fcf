use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// One row of the raw survey table: people who moved from `origin_state`
/// into `county` over the survey period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrationRecord {
    pub county: String,
    pub origin_state: String,
    pub inbound_from_state: u64,
}

impl MigrationRecord {
    pub fn new(county: impl Into<String>, origin_state: impl Into<String>, inbound: u64) -> Self {
        Self {
            county: county.into(),
            origin_state: origin_state.into(),
            inbound_from_state: inbound,
        }
    }
}

/// Canonical US state/territory names, kept in load order.
///
/// Membership is exact and case-sensitive; an origin found here counts as
/// internal migration, anything else (continents, "Other", ...) as external.
#[derive(Debug, Clone, Default)]
pub struct ReferenceStateList {
    names: Vec<String>,
    lookup: HashSet<String>,
}

impl ReferenceStateList {
    /// Builds the list, keeping the first occurrence of repeated names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self::default();
        for name in names {
            let name = name.into();
            if list.lookup.insert(name.clone()) {
                list.names.push(name);
            }
        }
        list
    }

    pub fn contains(&self, origin: &str) -> bool {
        self.lookup.contains(origin)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
