//! Industry catalog: category → industry → sub-niche, with icon lookup and
//! text search for the selector.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use idb_model::{IndustrySelection, ModelError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Icon used when neither the industry nor its category names one.
pub const DEFAULT_ICON: &str = "building";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown industry: {0}")]
    UnknownIndustry(String),
    #[error("unknown sub-niche {sub_niche} for industry {industry}")]
    UnknownSubNiche { industry: String, sub_niche: String },
    #[error(transparent)]
    Model(#[from] ModelError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubNiche {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Industry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default, rename = "subNiches")]
    pub sub_niches: Vec<SubNiche>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub industries: Vec<Industry>,
}

/// A search hit: an industry, or one of its sub-niches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogMatch<'a> {
    pub category: &'a Category,
    pub industry: &'a Industry,
    pub sub_niche: Option<&'a SubNiche>,
}

impl CatalogMatch<'_> {
    pub fn to_selection(&self) -> Result<IndustrySelection, CatalogError> {
        let selection = IndustrySelection::new(&self.industry.id, &self.industry.name)?;
        Ok(match self.sub_niche {
            Some(sub) => selection.with_sub_niche(&sub.id, &sub.name),
            None => selection,
        })
    }

    pub fn label(&self) -> String {
        match self.sub_niche {
            Some(sub) => format!("{} › {}", self.industry.name, sub.name),
            None => self.industry.name.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndustryCatalog {
    pub categories: Vec<Category>,
}

impl IndustryCatalog {
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn category(&self, category_id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == category_id)
    }

    pub fn find_industry(&self, industry_id: &str) -> Option<(&Category, &Industry)> {
        self.categories.iter().find_map(|category| {
            category
                .industries
                .iter()
                .find(|industry| industry.id == industry_id)
                .map(|industry| (category, industry))
        })
    }

    pub fn find_sub_niche(&self, industry_id: &str, sub_niche_id: &str) -> Option<&SubNiche> {
        self.find_industry(industry_id)?
            .1
            .sub_niches
            .iter()
            .find(|sub| sub.id == sub_niche_id)
    }

    pub fn industry_count(&self) -> usize {
        self.categories.iter().map(|c| c.industries.len()).sum()
    }

    /// Build a selection with display names filled in from the catalog.
    pub fn selection_for(
        &self,
        industry_id: &str,
        sub_niche_id: Option<&str>,
    ) -> Result<IndustrySelection, CatalogError> {
        let (_, industry) = self
            .find_industry(industry_id)
            .ok_or_else(|| CatalogError::UnknownIndustry(industry_id.to_string()))?;
        let selection = IndustrySelection::new(&industry.id, &industry.name)?;
        match sub_niche_id {
            None => Ok(selection),
            Some(sub_id) => {
                let sub = industry
                    .sub_niches
                    .iter()
                    .find(|sub| sub.id == sub_id)
                    .ok_or_else(|| CatalogError::UnknownSubNiche {
                        industry: industry_id.to_string(),
                        sub_niche: sub_id.to_string(),
                    })?;
                Ok(selection.with_sub_niche(&sub.id, &sub.name))
            }
        }
    }

    /// Case-insensitive substring search over industry and sub-niche names
    /// and ids, in catalog order. An empty query matches nothing.
    pub fn search(&self, query: &str) -> Vec<CatalogMatch<'_>> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        let hit = |id: &str, name: &str| {
            id.to_lowercase().contains(&needle) || name.to_lowercase().contains(&needle)
        };
        let mut matches = Vec::new();
        for category in &self.categories {
            for industry in &category.industries {
                if hit(&industry.id, &industry.name) {
                    matches.push(CatalogMatch {
                        category,
                        industry,
                        sub_niche: None,
                    });
                }
                for sub in &industry.sub_niches {
                    if hit(&sub.id, &sub.name) {
                        matches.push(CatalogMatch {
                            category,
                            industry,
                            sub_niche: Some(sub),
                        });
                    }
                }
            }
        }
        matches
    }

    /// Icon key for an industry: its own, else its category's, else [`DEFAULT_ICON`].
    pub fn icon_for(&self, industry_id: &str) -> &str {
        self.find_industry(industry_id)
            .and_then(|(category, industry)| {
                industry.icon.as_deref().or(category.icon.as_deref())
            })
            .unwrap_or(DEFAULT_ICON)
    }

    /// The catalog shipped with the application.
    pub fn builtin() -> Self {
        Self {
            categories: BUILTIN
                .iter()
                .map(|(id, name, icon, industries)| Category {
                    id: (*id).to_string(),
                    name: (*name).to_string(),
                    icon: Some((*icon).to_string()),
                    industries: industries
                        .iter()
                        .map(|(id, name, icon, subs)| Industry {
                            id: (*id).to_string(),
                            name: (*name).to_string(),
                            icon: icon.map(str::to_string),
                            sub_niches: subs
                                .iter()
                                .map(|(id, name)| SubNiche {
                                    id: (*id).to_string(),
                                    name: (*name).to_string(),
                                })
                                .collect(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

type BuiltinIndustry = (
    &'static str,
    &'static str,
    Option<&'static str>,
    &'static [(&'static str, &'static str)],
);

const BUILTIN: &[(&str, &str, &str, &[BuiltinIndustry])] = &[
    (
        "food_beverage",
        "Food & Beverage",
        "utensils",
        &[
            (
                "restaurant",
                "Restaurant",
                None,
                &[
                    ("italian", "Italian"),
                    ("mexican", "Mexican"),
                    ("japanese", "Japanese"),
                    ("chinese", "Chinese"),
                    ("indian", "Indian"),
                ],
            ),
            ("cafe", "Café", Some("coffee"), &[]),
            ("bakery", "Bakery", Some("croissant"), &[]),
            ("bar", "Bar", Some("wine"), &[("pub", "Pub"), ("cocktail_bar", "Cocktail Bar")]),
        ],
    ),
    (
        "health_fitness",
        "Health & Fitness",
        "heart-pulse",
        &[
            (
                "gym",
                "Gym",
                Some("dumbbell"),
                &[("crossfit", "CrossFit"), ("yoga", "Yoga Studio"), ("pilates", "Pilates")],
            ),
            ("dentist", "Dentist", Some("smile"), &[("orthodontist", "Orthodontist")]),
            ("chiropractor", "Chiropractor", None, &[]),
            ("physiotherapy", "Physiotherapy", None, &[]),
        ],
    ),
    (
        "home_services",
        "Home Services",
        "wrench",
        &[
            ("plumber", "Plumber", None, &[]),
            ("electrician", "Electrician", Some("zap"), &[]),
            ("roofing", "Roofing", Some("house"), &[]),
            ("landscaping", "Landscaping", Some("trees"), &[]),
        ],
    ),
    (
        "professional_services",
        "Professional Services",
        "briefcase",
        &[
            (
                "lawyer",
                "Lawyer",
                Some("scale"),
                &[
                    ("family_law", "Family Law"),
                    ("personal_injury", "Personal Injury"),
                    ("immigration", "Immigration"),
                ],
            ),
            ("accountant", "Accountant", Some("calculator"), &[]),
            ("real_estate", "Real Estate Agent", Some("key"), &[]),
        ],
    ),
    (
        "beauty",
        "Beauty & Wellness",
        "sparkles",
        &[
            ("hair_salon", "Hair Salon", Some("scissors"), &[("barber", "Barber")]),
            ("nail_salon", "Nail Salon", None, &[]),
            ("spa", "Spa", None, &[]),
        ],
    ),
    (
        "automotive",
        "Automotive",
        "car",
        &[
            ("auto_repair", "Auto Repair", Some("wrench"), &[("tire_shop", "Tire Shop")]),
            ("car_dealer", "Car Dealer", None, &[]),
            ("car_wash", "Car Wash", Some("droplets"), &[]),
        ],
    ),
];
