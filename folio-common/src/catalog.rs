//! Read-only catalog handle: lookup and grid selection
//!
//! The catalog is passed explicitly to whatever needs it (the web app
//! provides it once through context); nothing reaches for it through a
//! global.

use crate::book::Book;

/// Which books a grid should show
#[derive(Clone, Debug, PartialEq)]
pub enum GridSelection {
    /// Every book, in catalog order
    All,
    /// Books flagged `featured`, catalog order preserved
    Featured,
    /// Exactly these ids, in the given order; unresolved ids are dropped
    Ids(Vec<String>),
}

/// The full ordered collection of book records.
///
/// Lookup and selection are pure: absence is a value, never an error.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    pub fn new(books: Vec<Book>) -> Self {
        Self { books }
    }

    /// All books in catalog order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Resolve an id to its book. Any string is a valid input; unknown and
    /// empty ids resolve to `None`.
    pub fn find(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    /// Resolve a grid selection to the books it names, in display order.
    pub fn select(&self, selection: &GridSelection) -> Vec<&Book> {
        match selection {
            GridSelection::All => self.books.iter().collect(),
            GridSelection::Featured => self.books.iter().filter(|b| b.featured).collect(),
            GridSelection::Ids(ids) => ids.iter().filter_map(|id| self.find(id)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: &str, featured: bool) -> Book {
        Book {
            id: id.to_string(),
            title: format!("Book {id}"),
            subtitle: None,
            author: "Author".into(),
            description: String::new(),
            long_description: String::new(),
            excerpt: None,
            genres: vec![],
            cover_url: String::new(),
            published_year: 2020,
            pages: 100,
            spreads: vec![],
            video_url: None,
            featured,
            editions: vec![],
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![
            book("a", true),
            book("b", false),
            book("c", true),
        ])
    }

    #[test]
    fn test_find_returns_matching_book() {
        let c = catalog();
        assert_eq!(c.find("b").map(|b| b.id.as_str()), Some("b"));
    }

    #[test]
    fn test_find_unknown_and_empty_ids() {
        let c = catalog();
        assert!(c.find("nope").is_none());
        assert!(c.find("").is_none());
    }

    #[test]
    fn test_select_all_preserves_catalog_order() {
        let c = catalog();
        let ids: Vec<_> = c
            .select(&GridSelection::All)
            .iter()
            .map(|b| b.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_select_featured_subset_in_order() {
        let c = catalog();
        let ids: Vec<_> = c
            .select(&GridSelection::Featured)
            .iter()
            .map(|b| b.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_select_ids_follows_requested_order() {
        let c = catalog();
        let sel = GridSelection::Ids(vec!["c".into(), "a".into()]);
        let ids: Vec<_> = c.select(&sel).iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a"]);
    }

    #[test]
    fn test_select_ids_drops_unresolved() {
        let c = catalog();
        let sel = GridSelection::Ids(vec!["x".into(), "b".into(), "y".into()]);
        let ids: Vec<_> = c.select(&sel).iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["b"]);
    }

    #[test]
    fn test_select_ids_empty_and_all_unresolved() {
        let c = catalog();
        assert!(c.select(&GridSelection::Ids(vec![])).is_empty());
        let sel = GridSelection::Ids(vec!["x".into(), "y".into()]);
        assert!(c.select(&sel).is_empty());
    }

    #[test]
    fn test_empty_catalog() {
        let c = Catalog::default();
        assert!(c.is_empty());
        assert!(c.find("a").is_none());
        assert!(c.select(&GridSelection::All).is_empty());
        assert!(c.select(&GridSelection::Featured).is_empty());
    }
}
