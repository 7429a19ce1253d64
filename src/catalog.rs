//! Product records and the read-only catalog they live in.
//!
//! The catalog is loaded once at start-up, either from the sample data built
//! into the binary or from a JSON file, and never mutated afterwards.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Sample catalog shipped with the binary.
const BUILTIN_CATALOG: &str = include_str!("../data/products.json");

/// A single product record. Identity is `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub title: String,
    pub company: String,
    pub image: String,
    pub price: Price,
}

/// Price as it appears in the source data: a number or a free-form label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Amount(f64),
    Label(String),
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Amount(amount) => write!(f, "{}", amount),
            Price::Label(label) => f.write_str(label),
        }
    }
}

/// Fixed, ordered sequence of products. Cloning shares the same records.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Arc<[Product]>,
}

impl Catalog {
    /// Build a catalog, rejecting records that reuse an id.
    pub fn from_products(products: Vec<Product>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id.as_str()) {
                return Err(Error::DuplicateId(product.id.clone()));
            }
        }

        Ok(Self {
            products: products.into(),
        })
    }

    /// Parse a JSON array of products. `origin` names the source in errors.
    pub fn from_json(origin: &str, json: &str) -> Result<Self> {
        let products: Vec<Product> =
            serde_json::from_str(json).map_err(|e| Error::parse(origin, e))?;
        Self::from_products(products)
    }

    /// The sample catalog embedded at build time.
    pub fn builtin() -> Result<Self> {
        Self::from_json("built-in catalog", BUILTIN_CATALOG)
    }

    /// Read a catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let catalog = Self::from_json(&path.display().to_string(), &json)?;
        tracing::info!("Loaded {} products from {:?}", catalog.len(), path);
        Ok(catalog)
    }

    pub fn as_slice(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, position: usize) -> Option<&Product> {
        self.products.get(position)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            products: Arc::from(Vec::new()),
        }
    }
}
