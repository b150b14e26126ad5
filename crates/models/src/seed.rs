//! Catalog seed data.
//!
//! The built-in seed is what the service starts with when no seed file is
//! configured. A seed file is a JSON object keyed by ISBN; the order of keys
//! in the file is the listing order of the catalog.

use std::collections::HashSet;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::book::{Book, Reviews};
use crate::errors::ModelError;

/// The catalog every fresh process starts with.
pub fn builtin_books() -> Vec<Book> {
    [
        ("1", "Chinua Achebe", "Things Fall Apart"),
        ("2", "Hans Christian Andersen", "Fairy tales"),
        ("3", "Dante Alighieri", "The Divine Comedy"),
        ("4", "Unknown", "The Epic Of Gilgamesh"),
        ("5", "Unknown", "The Book Of Job"),
        ("6", "Unknown", "One Thousand and One Nights"),
        ("7", "Unknown", "Nj\u{e1}l's Saga"),
        ("8", "Jane Austen", "Pride and Prejudice"),
        ("9", "Honor\u{e9} de Balzac", "Le P\u{e8}re Goriot"),
        ("10", "Samuel Beckett", "Molloy, Malone Dies, The Unnamable, the trilogy"),
    ]
    .into_iter()
    .map(|(isbn, author, title)| Book::new(isbn, author, title))
    .collect()
}

#[derive(Deserialize)]
struct SeedEntry {
    author: String,
    title: String,
    #[serde(default)]
    reviews: Reviews,
}

/// Entries of a JSON object in document order.
struct OrderedEntries(Vec<(String, SeedEntry)>);

impl<'de> Deserialize<'de> for OrderedEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = OrderedEntries;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping ISBN to book")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((isbn, entry)) = access.next_entry::<String, SeedEntry>()? {
                    entries.push((isbn, entry));
                }
                Ok(OrderedEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// Parse a seed document. Duplicate or empty ISBN keys are rejected.
pub fn parse_seed(json: &str) -> Result<Vec<Book>, ModelError> {
    let OrderedEntries(entries) = serde_json::from_str(json)?;
    let mut seen = HashSet::with_capacity(entries.len());
    let mut books = Vec::with_capacity(entries.len());
    for (isbn, entry) in entries {
        if isbn.is_empty() {
            return Err(ModelError::Validation("empty ISBN key in seed".into()));
        }
        if !seen.insert(isbn.clone()) {
            return Err(ModelError::Validation(format!("duplicate ISBN {isbn} in seed")));
        }
        books.push(Book { isbn, author: entry.author, title: entry.title, reviews: entry.reviews });
    }
    Ok(books)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_ten_books_in_order() {
        let books = builtin_books();
        assert_eq!(books.len(), 10);
        let isbns: Vec<_> = books.iter().map(|b| b.isbn.as_str()).collect();
        assert_eq!(isbns, ["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"]);
        assert!(books.iter().all(|b| b.reviews.is_empty()));
        assert_eq!(books.iter().filter(|b| b.author == "Unknown").count(), 4);
    }

    #[test]
    fn parse_keeps_document_order() -> anyhow::Result<()> {
        let books = parse_seed(
            r#"{
                "978-3": {"author": "C", "title": "Third"},
                "978-1": {"author": "A", "title": "First", "reviews": {"bob": "fine"}},
                "978-2": {"author": "B", "title": "Second"}
            }"#,
        )?;
        let isbns: Vec<_> = books.iter().map(|b| b.isbn.as_str()).collect();
        assert_eq!(isbns, ["978-3", "978-1", "978-2"]);
        assert_eq!(books[1].reviews.get("bob").map(String::as_str), Some("fine"));
        assert!(books[0].reviews.is_empty());
        Ok(())
    }

    #[test]
    fn parse_rejects_duplicates() {
        let err = parse_seed(r#"{"1": {"author": "a", "title": "t"}, "1": {"author": "b", "title": "u"}}"#);
        assert!(matches!(err, Err(ModelError::Validation(_))));
    }

    #[test]
    fn parse_rejects_missing_fields() {
        let err = parse_seed(r#"{"1": {"author": "a"}}"#);
        assert!(matches!(err, Err(ModelError::Seed(_))));
    }

    #[test]
    fn parse_rejects_non_object() {
        assert!(parse_seed("[]").is_err());
    }
}
