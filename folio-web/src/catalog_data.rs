//! Embedded catalog fixture
//!
//! The book collection is supplied as a JSON document compiled into the
//! binary and parsed once at startup. The raw serde structs mirror the
//! fixture's shape (open `platform` string, camelCase field names); the
//! conversion into the closed domain types is where unrecognized retailer
//! platforms are rejected with a warning.

use folio_common::{AmazonRegion, Book, Catalog, Edition, Retailer};
use serde::Deserialize;

/// Embedded fixture data (compiled into the binary)
const FIXTURE_JSON: &str = include_str!("../fixtures/books.json");

#[derive(Debug, Deserialize)]
struct FixtureCatalog {
    books: Vec<FixtureBook>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FixtureBook {
    id: String,
    title: String,
    #[serde(default)]
    subtitle: Option<String>,
    author: String,
    description: String,
    long_description: String,
    #[serde(default)]
    excerpt: Option<String>,
    #[serde(default)]
    genres: Vec<String>,
    cover_image: String,
    published_year: i32,
    pages: u32,
    #[serde(default)]
    spreads: Vec<String>,
    #[serde(default)]
    video: Option<String>,
    #[serde(default)]
    featured: bool,
    #[serde(default)]
    editions: Vec<FixtureEdition>,
}

#[derive(Debug, Deserialize)]
struct FixtureEdition {
    label: String,
    #[serde(default)]
    retailers: Vec<FixtureRetailer>,
}

#[derive(Debug, Deserialize)]
struct FixtureRetailer {
    platform: String,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    regions: Vec<FixtureRegion>,
}

#[derive(Debug, Deserialize)]
struct FixtureRegion {
    flag: String,
    label: String,
    url: String,
}

/// Parse and convert the embedded fixture. The fixture is a build-time
/// asset, so a malformed document is a programmer error.
pub fn load_catalog() -> Catalog {
    parse_catalog(FIXTURE_JSON).expect("embedded catalog fixture is malformed")
}

pub fn parse_catalog(json: &str) -> Result<Catalog, serde_json::Error> {
    let fixture: FixtureCatalog = serde_json::from_str(json)?;
    Ok(Catalog::new(
        fixture.books.into_iter().map(into_book).collect(),
    ))
}

fn into_book(book: FixtureBook) -> Book {
    Book {
        id: book.id,
        title: book.title,
        subtitle: book.subtitle,
        author: book.author,
        description: book.description,
        long_description: book.long_description,
        excerpt: book.excerpt,
        genres: book.genres,
        cover_url: book.cover_image,
        published_year: book.published_year,
        pages: book.pages,
        spreads: book.spreads,
        video_url: book.video,
        featured: book.featured,
        editions: book.editions.into_iter().map(into_edition).collect(),
    }
}

fn into_edition(edition: FixtureEdition) -> Edition {
    Edition {
        label: edition.label,
        retailers: edition
            .retailers
            .into_iter()
            .filter_map(into_retailer)
            .collect(),
    }
}

fn into_retailer(retailer: FixtureRetailer) -> Option<Retailer> {
    match retailer.platform.as_str() {
        "amazon" => Some(Retailer::Amazon {
            regions: retailer
                .regions
                .into_iter()
                .map(|r| AmazonRegion {
                    flag: r.flag,
                    label: r.label,
                    url: r.url,
                })
                .collect(),
        }),
        "lulu" => match retailer.url {
            Some(url) => Some(Retailer::Lulu { url }),
            None => {
                tracing::warn!("lulu retailer without a url, skipping");
                None
            }
        },
        other => {
            tracing::warn!(platform = other, "unknown retailer platform, skipping");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_fixture_parses() {
        let catalog = load_catalog();
        assert!(!catalog.is_empty());
        // ids are unique
        let mut ids: Vec<_> = catalog.books().iter().map(|b| b.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_catalog_order_is_preserved() {
        let json = r#"{"books": [
            {"id": "z", "title": "Z", "author": "A", "description": "",
             "longDescription": "", "coverImage": "", "publishedYear": 2020, "pages": 10},
            {"id": "a", "title": "A", "author": "A", "description": "",
             "longDescription": "", "coverImage": "", "publishedYear": 2021, "pages": 20}
        ]}"#;
        let catalog = parse_catalog(json).unwrap();
        let ids: Vec<_> = catalog.books().iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["z", "a"]);
    }

    #[test]
    fn test_unknown_platform_is_skipped_with_others_kept() {
        let json = r#"{"books": [
            {"id": "b", "title": "B", "author": "A", "description": "",
             "longDescription": "", "coverImage": "", "publishedYear": 2020, "pages": 10,
             "editions": [{"label": "Hardcover", "retailers": [
                {"platform": "bookshop", "url": "https://example.com"},
                {"platform": "lulu", "url": "https://lulu.com/x"}
             ]}]}
        ]}"#;
        let catalog = parse_catalog(json).unwrap();
        let retailers = &catalog.find("b").unwrap().editions[0].retailers;
        assert_eq!(
            retailers,
            &vec![Retailer::Lulu {
                url: "https://lulu.com/x".into()
            }]
        );
    }

    #[test]
    fn test_amazon_regions_convert() {
        let json = r#"{"books": [
            {"id": "b", "title": "B", "author": "A", "description": "",
             "longDescription": "", "coverImage": "", "publishedYear": 2020, "pages": 10,
             "editions": [{"label": "Hardcover", "retailers": [
                {"platform": "amazon", "regions": [
                    {"flag": "🇺🇸", "label": "US", "url": "https://a.co/1"}
                ]}
             ]}]}
        ]}"#;
        let catalog = parse_catalog(json).unwrap();
        match &catalog.find("b").unwrap().editions[0].retailers[0] {
            Retailer::Amazon { regions } => {
                assert_eq!(regions.len(), 1);
                assert_eq!(regions[0].url, "https://a.co/1");
                assert_eq!(regions[0].label, "US");
            }
            other => panic!("expected amazon retailer, got {other:?}"),
        }
    }

    #[test]
    fn test_optional_fields_default() {
        let json = r#"{"books": [
            {"id": "b", "title": "B", "author": "A", "description": "",
             "longDescription": "", "coverImage": "", "publishedYear": 2020, "pages": 10}
        ]}"#;
        let catalog = parse_catalog(json).unwrap();
        let book = catalog.find("b").unwrap();
        assert!(book.subtitle.is_none());
        assert!(book.excerpt.is_none());
        assert!(book.video_url.is_none());
        assert!(book.spreads.is_empty());
        assert!(book.editions.is_empty());
        assert!(!book.featured);
    }

    #[test]
    fn test_malformed_fixture_is_an_error() {
        assert!(parse_catalog("{").is_err());
        assert!(parse_catalog(r#"{"books": [{"id": "x"}]}"#).is_err());
    }
}
