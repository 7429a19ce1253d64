//! Company tags: the selectable values shown as filter buttons.

use std::collections::HashSet;
use std::fmt;

use crate::catalog::Product;

/// Reserved tag value meaning "no company restriction".
pub const ALL_SENTINEL: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CompanyTag {
    All,
    Named(String),
}

impl CompanyTag {
    /// `"all"` is the sentinel, anything else names a company verbatim.
    pub fn parse(raw: &str) -> Self {
        if raw == ALL_SENTINEL {
            CompanyTag::All
        } else {
            CompanyTag::Named(raw.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CompanyTag::All => ALL_SENTINEL,
            CompanyTag::Named(name) => name,
        }
    }

    /// Exact, case-sensitive comparison against a product's company field.
    pub fn matches(&self, company: &str) -> bool {
        match self {
            CompanyTag::All => true,
            CompanyTag::Named(name) => name == company,
        }
    }

    /// Button label with the first character uppercased.
    pub fn label(&self) -> String {
        capitalize(self.as_str())
    }
}

impl fmt::Display for CompanyTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `All` first, then each distinct company in the order it first appears.
pub fn company_tags(catalog: &[Product]) -> Vec<CompanyTag> {
    let mut seen = HashSet::new();
    let mut tags = vec![CompanyTag::All];

    for product in catalog {
        // a literal "all" company is already covered by the sentinel
        if product.company == ALL_SENTINEL {
            continue;
        }
        if seen.insert(product.company.as_str()) {
            tags.push(CompanyTag::Named(product.company.clone()));
        }
    }

    tags
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
