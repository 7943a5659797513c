//! # Catalog Loading
//!
//! Produces the starting `(Product, stock)` list for the store, either from a
//! TOML catalog file or from the built-in seed catalog.
//!
//! ## Catalog File Format
//! ```toml
//! [[product]]
//! id = 0
//! name = "Rafael Nadal"
//! price_cents = 99
//! image_ref = "images/rafael-nadal.jpg"
//! stock = 5
//! ```
//!
//! ## Row Handling
//! ```text
//! row ──► name / price / stock valid? ──no──► warn!, skipped
//!                   │
//!                  yes
//!                   │
//!                   ▼
//!         id seen before? ──yes──► warn!, skipped (first row wins)
//!                   │
//!                   no
//!                   ▼
//!              kept, in file order
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, warn};

use courtside_core::validation::{validate_price_cents, validate_product_name, validate_stock};
use courtside_core::{Money, Product, StoreManager, ValidationError};

use crate::error::{ConfigError, ConfigResult};
use crate::state::AppConfig;

/// Names in the seed catalog; product `i` is the `i`-th entry.
const SEED_NAMES: &[&str] = &[
    "Rafael Nadal",
    "Novak Djokovic",
    "Roger Federer",
    "Stef Tsitsipas",
    "Nick Kygrgios",
];

/// A catalog file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(rename = "product", default)]
    pub products: Vec<CatalogEntry>,
}

/// One `[[product]]` row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: u32,
    pub name: String,
    pub price_cents: i64,
    #[serde(default)]
    pub image_ref: String,
    pub stock: i64,
}

impl CatalogEntry {
    fn validate(&self) -> Result<(), ValidationError> {
        validate_product_name(&self.name)?;
        validate_price_cents(self.price_cents)?;
        validate_stock(self.stock)
    }

    fn into_stock(self) -> (Product, i64) {
        let product = Product::new(
            self.id,
            self.name.trim(),
            Money::from_cents(self.price_cents),
            self.image_ref,
        );
        (product, self.stock)
    }
}

/// The built-in catalog: five players, product `i` priced at
/// `$150 × i + $0.99` with `5 × i + 5` units in stock.
pub fn seed_catalog() -> Vec<(Product, i64)> {
    SEED_NAMES
        .iter()
        .zip(0u32..)
        .map(|(name, i)| {
            let slug = name.to_lowercase().replace(' ', "-");
            let product = Product::new(
                i,
                *name,
                Money::from_major_minor(150 * i64::from(i), 99),
                format!("images/{}.jpg", slug),
            );
            (product, 5 * i64::from(i) + 5)
        })
        .collect()
}

/// Parses catalog TOML, dropping invalid and duplicate rows.
pub fn parse_catalog(contents: &str) -> ConfigResult<Vec<(Product, i64)>> {
    let file: CatalogFile = toml::from_str(contents)?;
    let mut seen = HashSet::new();
    let mut stock = Vec::with_capacity(file.products.len());

    for entry in file.products {
        if let Err(e) = entry.validate() {
            warn!(product_id = entry.id, error = %e, "Skipping invalid catalog row");
            continue;
        }
        if !seen.insert(entry.id) {
            warn!(product_id = entry.id, "Skipping duplicate catalog id");
            continue;
        }
        stock.push(entry.into_stock());
    }

    Ok(stock)
}

/// Reads and parses a catalog file.
pub fn load_catalog(path: &Path) -> ConfigResult<Vec<(Product, i64)>> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_catalog(&contents)
}

/// Builds the store for a configuration.
pub fn build_store(config: &AppConfig) -> ConfigResult<StoreManager> {
    let stock = match &config.catalog_path {
        Some(path) => {
            let stock = load_catalog(path)?;
            info!(?path, products = stock.len(), "Catalog loaded");
            stock
        }
        None => {
            info!("Using built-in seed catalog");
            seed_catalog()
        }
    };

    Ok(StoreManager::new(stock))
}
