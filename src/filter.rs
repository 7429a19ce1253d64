//! Filter engine: text search over titles and company selection.
//!
//! All functions here are pure. Exactly one predicate is active at a time and
//! each event replaces the previous result outright, so switching from a text
//! search to a company never intersects the two.

use crate::catalog::{Catalog, Product};
use crate::companies::CompanyTag;

/// Products whose title contains `substring`, ignoring case.
/// An empty substring matches everything.
pub fn filter_by_text<'a>(catalog: &'a [Product], substring: &str) -> Vec<&'a Product> {
    Filter::text(substring).apply(catalog)
}

/// Products whose company equals `tag` exactly. `All` returns the catalog.
pub fn filter_by_company<'a>(catalog: &'a [Product], tag: &CompanyTag) -> Vec<&'a Product> {
    Filter::Company(tag.clone()).apply(catalog)
}

/// The whole catalog, used when a search is cleared.
pub fn reset_to_catalog(catalog: &[Product]) -> Vec<&Product> {
    catalog.iter().collect()
}

/// The single active predicate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    Everything,
    /// Lowercased needle matched against lowercased titles.
    Text(String),
    Company(CompanyTag),
}

impl Filter {
    pub fn text(substring: &str) -> Self {
        if substring.is_empty() {
            Filter::Everything
        } else {
            Filter::Text(substring.to_lowercase())
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Filter::Everything => true,
            Filter::Text(needle) => product.title.to_lowercase().contains(needle.as_str()),
            Filter::Company(tag) => tag.matches(&product.company),
        }
    }

    pub fn apply<'a>(&self, catalog: &'a [Product]) -> Vec<&'a Product> {
        catalog.iter().filter(|product| self.matches(product)).collect()
    }

    fn positions(&self, catalog: &[Product]) -> Vec<usize> {
        catalog
            .iter()
            .enumerate()
            .filter(|(_, product)| self.matches(product))
            .map(|(position, _)| position)
            .collect()
    }
}

/// Input events, by origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterEvent {
    /// Text typed or submitted in the search field.
    TextSearch(String),
    /// A company button was selected.
    CompanySelect(CompanyTag),
    /// The search field was explicitly cleared.
    Clear,
}

/// Currently visible subset of the catalog, in catalog order.
///
/// Holds positions into the catalog rather than copies of the records.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    filter: Filter,
    positions: Vec<usize>,
}

impl FilterState {
    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Visible products, resolved against the catalog that produced this state.
    pub fn products<'a>(&'a self, catalog: &'a Catalog) -> impl Iterator<Item = &'a Product> + 'a {
        self.positions
            .iter()
            .filter_map(move |&position| catalog.get(position))
    }
}

/// Owns the catalog and turns input events into filter states.
#[derive(Debug, Clone, Default)]
pub struct FilterEngine {
    catalog: Catalog,
}

impl FilterEngine {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Everything visible.
    pub fn initial(&self) -> FilterState {
        self.evaluate(Filter::Everything)
    }

    /// Compute the state for `event`. The previous state is never consulted.
    pub fn dispatch(&self, event: &FilterEvent) -> FilterState {
        let filter = match event {
            FilterEvent::TextSearch(substring) => Filter::text(substring),
            FilterEvent::CompanySelect(tag) => Filter::Company(tag.clone()),
            FilterEvent::Clear => Filter::Everything,
        };

        let state = self.evaluate(filter);
        tracing::debug!(
            "Dispatched {:?}: {} of {} products visible",
            event,
            state.len(),
            self.catalog.len()
        );
        state
    }

    fn evaluate(&self, filter: Filter) -> FilterState {
        let positions = filter.positions(self.catalog.as_slice());
        FilterState { filter, positions }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Price;
    use proptest::prelude::*;

    fn product(id: &str, title: &str, company: &str) -> Product {
        Product {
            id: id.to_string(),
            title: title.to_string(),
            company: company.to_string(),
            image: String::new(),
            price: Price::Amount(10.0),
        }
    }

    fn shoes() -> Vec<Product> {
        vec![
            product("1", "Red Shoe", "nike"),
            product("2", "Blue Shoe", "adidas"),
            product("3", "Red Hat", "nike"),
        ]
    }

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_text_search_case_insensitive() {
        let catalog = shoes();
        assert_eq!(ids(&filter_by_text(&catalog, "red")), vec!["1", "3"]);
        assert_eq!(ids(&filter_by_text(&catalog, "RED")), vec!["1", "3"]);
        assert_eq!(ids(&filter_by_text(&catalog, "shoe")), vec!["1", "2"]);
    }

    #[test]
    fn test_text_search_no_match() {
        let catalog = shoes();
        assert!(filter_by_text(&catalog, "sandal").is_empty());
    }

    #[test]
    fn test_company_filter() {
        let catalog = shoes();
        let nike = CompanyTag::Named("nike".into());
        assert_eq!(ids(&filter_by_company(&catalog, &nike)), vec!["1", "3"]);
        assert_eq!(
            ids(&filter_by_company(&catalog, &CompanyTag::All)),
            vec!["1", "2", "3"]
        );
    }

    #[test]
    fn test_company_filter_is_case_sensitive() {
        let catalog = shoes();
        let upper = CompanyTag::Named("Nike".into());
        assert!(filter_by_company(&catalog, &upper).is_empty());
    }

    #[test]
    fn test_reset_returns_catalog() {
        let catalog = shoes();
        assert_eq!(ids(&reset_to_catalog(&catalog)), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_empty_catalog() {
        assert!(filter_by_text(&[], "").is_empty());
        assert!(filter_by_company(&[], &CompanyTag::All).is_empty());
        assert!(reset_to_catalog(&[]).is_empty());
    }

    fn visible_ids(state: &FilterState, catalog: &Catalog) -> Vec<String> {
        state.products(catalog).map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_dispatch_switch_is_not_cumulative() {
        let catalog = Catalog::from_products(shoes()).unwrap();
        let engine = FilterEngine::new(catalog.clone());

        let searched = engine.dispatch(&FilterEvent::TextSearch("blue".into()));
        assert_eq!(visible_ids(&searched, &catalog), vec!["2"]);

        let all = engine.dispatch(&FilterEvent::CompanySelect(CompanyTag::All));
        assert_eq!(visible_ids(&all, &catalog), vec!["1", "2", "3"]);

        let nike = engine.dispatch(&FilterEvent::CompanySelect(CompanyTag::Named("nike".into())));
        assert_eq!(visible_ids(&nike, &catalog), vec!["1", "3"]);

        let cleared = engine.dispatch(&FilterEvent::Clear);
        assert_eq!(cleared, engine.initial());
    }

    #[test]
    fn test_dispatch_empty_text_is_everything() {
        let engine = FilterEngine::new(Catalog::from_products(shoes()).unwrap());
        let state = engine.dispatch(&FilterEvent::TextSearch(String::new()));
        assert_eq!(state.filter(), &Filter::Everything);
        assert_eq!(state.len(), 3);
    }

    #[test]
    fn test_state_resolves_products() {
        let catalog = Catalog::from_products(shoes()).unwrap();
        let engine = FilterEngine::new(catalog.clone());
        let state = engine.dispatch(&FilterEvent::TextSearch("hat".into()));

        let titles: Vec<&str> = state.products(&catalog).map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Red Hat"]);
    }

    const COMPANIES: &[&str] = &["nike", "adidas", "Nike", "puma", "all"];

    fn arb_catalog() -> impl Strategy<Value = Vec<Product>> {
        prop::collection::vec(
            ("[a-zA-Z ]{0,12}", prop::sample::select(COMPANIES.to_vec())),
            0..24,
        )
        .prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (title, company))| product(&i.to_string(), &title, company))
                .collect()
        })
    }

    fn arb_tag() -> impl Strategy<Value = CompanyTag> {
        prop::sample::select(COMPANIES.to_vec()).prop_map(CompanyTag::parse)
    }

    fn is_in_catalog_order(catalog: &[Product], result: &[&Product]) -> bool {
        let mut remaining = catalog.iter();
        result
            .iter()
            .all(|wanted| remaining.any(|p| std::ptr::eq(p, *wanted)))
    }

    proptest! {
        #[test]
        fn prop_text_results_match_and_keep_order(catalog in arb_catalog(), needle in "[a-zA-Z ]{0,3}") {
            let result = filter_by_text(&catalog, &needle);
            let lowered = needle.to_lowercase();

            prop_assert!(result.iter().all(|p| p.title.to_lowercase().contains(&lowered)));
            prop_assert!(is_in_catalog_order(&catalog, &result));

            let expected = catalog.iter().filter(|p| p.title.to_lowercase().contains(&lowered)).count();
            prop_assert_eq!(result.len(), expected);
        }

        #[test]
        fn prop_empty_text_is_identity(catalog in arb_catalog()) {
            let result = filter_by_text(&catalog, "");
            prop_assert_eq!(result, catalog.iter().collect::<Vec<_>>());
        }

        #[test]
        fn prop_all_is_identity(catalog in arb_catalog()) {
            let result = filter_by_company(&catalog, &CompanyTag::All);
            prop_assert_eq!(result, catalog.iter().collect::<Vec<_>>());
        }

        #[test]
        fn prop_company_is_exact_and_complete(catalog in arb_catalog(), tag in arb_tag()) {
            prop_assume!(tag != CompanyTag::All);
            let result = filter_by_company(&catalog, &tag);

            prop_assert!(result.iter().all(|p| p.company == tag.as_str()));
            prop_assert!(is_in_catalog_order(&catalog, &result));

            let expected = catalog.iter().filter(|p| p.company == tag.as_str()).count();
            prop_assert_eq!(result.len(), expected);
        }

        #[test]
        fn prop_dispatch_is_idempotent(catalog in arb_catalog(), needle in "[a-z]{0,2}", tag in arb_tag()) {
            let engine = FilterEngine::new(Catalog::from_products(catalog).unwrap());
            for event in [
                FilterEvent::TextSearch(needle.clone()),
                FilterEvent::CompanySelect(tag.clone()),
                FilterEvent::Clear,
            ] {
                prop_assert_eq!(engine.dispatch(&event), engine.dispatch(&event));
            }
        }

        #[test]
        fn prop_all_after_search_is_full_catalog(catalog in arb_catalog(), needle in "[a-z]{1,3}") {
            let engine = FilterEngine::new(Catalog::from_products(catalog).unwrap());
            let _ = engine.dispatch(&FilterEvent::TextSearch(needle));
            let state = engine.dispatch(&FilterEvent::CompanySelect(CompanyTag::All));
            prop_assert_eq!(state.len(), engine.catalog().len());

            // same members and order as the untouched start state
            let initial = engine.initial();
            let full: Vec<&Product> = state.products(engine.catalog()).collect();
            let expected: Vec<&Product> = initial.products(engine.catalog()).collect();
            prop_assert_eq!(&full, &expected);
            prop_assert_eq!(full, engine.catalog().as_slice().iter().collect::<Vec<_>>());
        }
    }
}
