//! Restaurant catalog: seed data, JSON loading, and validation.
//!
//! The catalog is loaded once at startup and treated as read-only for the
//! rest of the session. Ids are assigned in the catalog source and must be
//! unique and stable; they are never reused or mutated.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable identifier for a restaurant, assigned at catalog load.
pub type RestaurantId = u64;

/// A single restaurant listing. Immutable after catalog load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    pub description: String,
    /// Display-only rating, e.g. 4.8.
    pub rating: f32,
    /// Display-only review count.
    pub review_count: u32,
    /// Ordered, non-empty sequence of image references.
    pub images: Vec<String>,
    pub location: String,
    /// Free-text label, matched by substring against the active category.
    pub category: String,
    /// Display string, e.g. "40,000-60,000 won".
    pub price: String,
    /// Optional display badge.
    #[serde(default)]
    pub recommended_tag: Option<String>,
}

/// Errors that can occur when loading the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Catalog validation failed: {message}")]
    ValidationError { message: String },
}

/// The static collection of restaurant records for this session.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub restaurants: Vec<Restaurant>,
}

impl Catalog {
    /// Loads a catalog from a JSON file.
    ///
    /// Returns an error if reading, parsing, or validation fails.
    pub fn load_from(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|e| CatalogError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let catalog: Catalog =
            serde_json::from_str(&content).map_err(|e| CatalogError::ParseError {
                path: path.to_path_buf(),
                source: e,
            })?;

        catalog.validate()?;
        Ok(catalog)
    }

    /// Validates the catalog.
    ///
    /// Checks:
    /// - At least one restaurant
    /// - Ids are unique
    /// - Every restaurant has at least one image
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.restaurants.is_empty() {
            return Err(CatalogError::ValidationError {
                message: "catalog has no restaurants".to_string(),
            });
        }

        let mut seen = std::collections::HashSet::new();
        for restaurant in &self.restaurants {
            if !seen.insert(restaurant.id) {
                return Err(CatalogError::ValidationError {
                    message: format!("duplicate restaurant id {}", restaurant.id),
                });
            }
            if restaurant.images.is_empty() {
                return Err(CatalogError::ValidationError {
                    message: format!("restaurant {} has no images", restaurant.id),
                });
            }
        }
        Ok(())
    }

    /// Built-in seed catalog used when no `--catalog` file is given.
    pub fn seed() -> Self {
        let restaurants = vec![
            Restaurant {
                id: 1,
                name: "Tempura Yamaguchi".to_string(),
                description: "Serving luxurious tempura".to_string(),
                rating: 4.9,
                review_count: 300,
                images: vec![
                    "https://picsum.photos/seed/picsum/200/300".to_string(),
                    "https://picsum.photos/200/300".to_string(),
                    "https://picsum.photos/id/237/200/300".to_string(),
                ],
                location: "YOKOHAMA".to_string(),
                category: "Tempura".to_string(),
                price: "50,000-70,000 won".to_string(),
                recommended_tag: Some("Recommended Yokohama Tempura".to_string()),
            },
            Restaurant {
                id: 2,
                name: "Sushi Sato".to_string(),
                description: "You can enjoy authentic sushi made with fresh seafood."
                    .to_string(),
                rating: 4.8,
                review_count: 250,
                images: vec![
                    "https://picsum.photos/200/300".to_string(),
                    "https://picsum.photos/200".to_string(),
                    "https://picsum.photos/200/300".to_string(),
                ],
                location: "SAPPORO".to_string(),
                category: "Sushi & Seafood".to_string(),
                price: "40,000-60,000 won".to_string(),
                recommended_tag: Some("Sapporo Sushi Restaurant".to_string()),
            },
            Restaurant {
                id: 3,
                name: "Menya Kaito".to_string(),
                description: "Rich tonkotsu broth simmered for two days.".to_string(),
                rating: 4.6,
                review_count: 540,
                images: vec![
                    "https://picsum.photos/id/292/200/300".to_string(),
                    "https://picsum.photos/id/312/200/300".to_string(),
                ],
                location: "FUKUOKA".to_string(),
                category: "Ramen/Tsukemen".to_string(),
                price: "8,000-12,000 won".to_string(),
                recommended_tag: None,
            },
            Restaurant {
                id: 4,
                name: "Unagi Kawamura".to_string(),
                description: "Charcoal-grilled eel over rice, a century-old recipe."
                    .to_string(),
                rating: 4.7,
                review_count: 180,
                images: vec![
                    "https://picsum.photos/id/429/200/300".to_string(),
                    "https://picsum.photos/id/431/200/300".to_string(),
                    "https://picsum.photos/id/433/200/300".to_string(),
                ],
                location: "NAGOYA".to_string(),
                category: "Eel".to_string(),
                price: "30,000-45,000 won".to_string(),
                recommended_tag: Some("Nagoya Eel Specialist".to_string()),
            },
        ];
        Catalog { restaurants }
    }
}
