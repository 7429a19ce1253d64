//! View model handed to whatever draws the product list.
//!
//! Both the iced widgets and the CLI printer consume a [`Listing`], so the
//! "nothing matched" case is decided in one place.

use crate::catalog::Product;
use crate::images::ImageSource;

pub const NO_RESULTS_MESSAGE: &str = "Sorry, no products matched your search";

/// One visible product, with its price already formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub id: String,
    pub title: String,
    pub company: String,
    pub price: String,
    pub image: String,
    /// `image` resolved once, when the row is built.
    pub source: ImageSource,
}

impl From<&Product> for Row {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            title: product.title.clone(),
            company: product.company.clone(),
            price: product.price.to_string(),
            image: product.image.clone(),
            source: ImageSource::resolve(&product.image),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Listing {
    /// Nothing to show: display [`NO_RESULTS_MESSAGE`] instead of an empty list.
    Empty,
    Rows(Vec<Row>),
}

impl Listing {
    pub fn from_products<'a>(products: impl IntoIterator<Item = &'a Product>) -> Self {
        let rows: Vec<Row> = products.into_iter().map(Row::from).collect();
        if rows.is_empty() {
            Listing::Empty
        } else {
            Listing::Rows(rows)
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Listing::Empty => 0,
            Listing::Rows(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Listing::Empty)
    }

    /// Plain-text table for terminal output.
    pub fn to_text(&self) -> String {
        let rows = match self {
            Listing::Empty => return format!("{}\n", NO_RESULTS_MESSAGE),
            Listing::Rows(rows) => rows,
        };

        let title_width = rows.iter().map(|r| r.title.chars().count()).max().unwrap_or(0);
        let company_width = rows.iter().map(|r| r.company.chars().count()).max().unwrap_or(0);

        let mut out = String::new();
        for row in rows {
            out.push_str(&format!(
                "{:<tw$}  {:<cw$}  {}\n",
                row.title,
                row.company,
                row.price,
                tw = title_width,
                cw = company_width,
            ));
        }
        out
    }
}
