//! Country picker: regional grouping, filtering, and keyboard navigation.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Europe,
    NorthAmerica,
    LatinAmerica,
    AsiaPacific,
    MiddleEastAfrica,
}

impl Region {
    /// Display order of the groups.
    pub const ALL: [Region; 5] = [
        Region::Europe,
        Region::NorthAmerica,
        Region::LatinAmerica,
        Region::AsiaPacific,
        Region::MiddleEastAfrica,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Region::Europe => "Europe",
            Region::NorthAmerica => "North America",
            Region::LatinAmerica => "Latin America",
            Region::AsiaPacific => "Asia Pacific",
            Region::MiddleEastAfrica => "Middle East & Africa",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// ISO 3166-1 alpha-2.
    pub code: String,
    pub name: String,
    pub region: Region,
}

impl Country {
    fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name.to_lowercase().contains(needle)
            || self.code.to_lowercase() == needle
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionGroup<'a> {
    pub region: Region,
    pub countries: Vec<&'a Country>,
}

/// Group `countries` by region in [`Region::ALL`] order, sorted by name,
/// keeping only those whose name contains `filter` or whose code equals it.
/// Empty groups are dropped.
pub fn group_by_region<'a>(countries: &'a [Country], filter: &str) -> Vec<RegionGroup<'a>> {
    let needle = filter.trim().to_lowercase();
    Region::ALL
        .iter()
        .filter_map(|region| {
            let mut members: Vec<&Country> = countries
                .iter()
                .filter(|c| c.region == *region && c.matches(&needle))
                .collect();
            if members.is_empty() {
                return None;
            }
            members.sort_by(|a, b| a.name.cmp(&b.name));
            Some(RegionGroup {
                region: *region,
                countries: members,
            })
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Up,
    Down,
    Home,
    End,
    Enter,
    Escape,
}

/// Stateful country picker driven by a text query and navigation keys.
#[derive(Debug, Clone)]
pub struct CountrySelector {
    countries: Vec<Country>,
    query: String,
    highlight: Option<usize>,
}

impl CountrySelector {
    pub fn new(countries: Vec<Country>) -> Self {
        Self {
            countries,
            query: String::new(),
            highlight: None,
        }
    }

    pub fn builtin() -> Self {
        Self::new(builtin_countries())
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the query; the highlight moves to the first match.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.highlight = if self.visible().is_empty() {
            None
        } else {
            Some(0)
        };
    }

    pub fn grouped(&self) -> Vec<RegionGroup<'_>> {
        group_by_region(&self.countries, &self.query)
    }

    /// Filtered countries in display order.
    pub fn visible(&self) -> Vec<&Country> {
        self.grouped()
            .into_iter()
            .flat_map(|group| group.countries)
            .collect()
    }

    pub fn highlighted(&self) -> Option<&Country> {
        let index = self.highlight?;
        self.visible().get(index).copied()
    }

    pub fn find(&self, code: &str) -> Option<&Country> {
        self.countries
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(code.trim()))
    }

    /// Apply a key press. Only `Enter` yields a country.
    pub fn handle_key(&mut self, key: NavKey) -> Option<&Country> {
        let len = self.visible().len();
        match key {
            NavKey::Escape => {
                self.query.clear();
                self.highlight = None;
                None
            }
            NavKey::Enter => self.highlighted(),
            _ if len == 0 => {
                self.highlight = None;
                None
            }
            NavKey::Down => {
                self.highlight = Some(match self.highlight {
                    Some(i) if i + 1 < len => i + 1,
                    _ => 0,
                });
                None
            }
            NavKey::Up => {
                self.highlight = Some(match self.highlight {
                    Some(i) if i > 0 && i < len => i - 1,
                    _ => len - 1,
                });
                None
            }
            NavKey::Home => {
                self.highlight = Some(0);
                None
            }
            NavKey::End => {
                self.highlight = Some(len - 1);
                None
            }
        }
    }
}

pub fn builtin_countries() -> Vec<Country> {
    COUNTRIES
        .iter()
        .map(|(code, name, region)| Country {
            code: (*code).to_string(),
            name: (*name).to_string(),
            region: *region,
        })
        .collect()
}

const COUNTRIES: &[(&str, &str, Region)] = &[
    ("US", "United States", Region::NorthAmerica),
    ("CA", "Canada", Region::NorthAmerica),
    ("GB", "United Kingdom", Region::Europe),
    ("IE", "Ireland", Region::Europe),
    ("DE", "Germany", Region::Europe),
    ("FR", "France", Region::Europe),
    ("ES", "Spain", Region::Europe),
    ("IT", "Italy", Region::Europe),
    ("NL", "Netherlands", Region::Europe),
    ("BE", "Belgium", Region::Europe),
    ("CH", "Switzerland", Region::Europe),
    ("AT", "Austria", Region::Europe),
    ("SE", "Sweden", Region::Europe),
    ("NO", "Norway", Region::Europe),
    ("DK", "Denmark", Region::Europe),
    ("PL", "Poland", Region::Europe),
    ("PT", "Portugal", Region::Europe),
    ("MX", "Mexico", Region::LatinAmerica),
    ("BR", "Brazil", Region::LatinAmerica),
    ("AR", "Argentina", Region::LatinAmerica),
    ("CL", "Chile", Region::LatinAmerica),
    ("CO", "Colombia", Region::LatinAmerica),
    ("AU", "Australia", Region::AsiaPacific),
    ("NZ", "New Zealand", Region::AsiaPacific),
    ("JP", "Japan", Region::AsiaPacific),
    ("SG", "Singapore", Region::AsiaPacific),
    ("IN", "India", Region::AsiaPacific),
    ("AE", "United Arab Emirates", Region::MiddleEastAfrica),
    ("IL", "Israel", Region::MiddleEastAfrica),
    ("ZA", "South Africa", Region::MiddleEastAfrica),
    ("NG", "Nigeria", Region::MiddleEastAfrica),
];
