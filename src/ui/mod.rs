//! Widgets for the filter window

pub mod company_bar;
pub mod product_list;
pub mod search_bar;
pub mod theme;
