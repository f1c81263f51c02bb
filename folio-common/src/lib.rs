pub mod book;
pub mod catalog;
pub mod edition_tabs;

pub use book::{AmazonRegion, Book, Edition, Retailer};
pub use catalog::{Catalog, GridSelection};
pub use edition_tabs::EditionTabs;
