use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Reviews on one book, keyed by username, in the order they were first
/// written. One review per user; overwriting keeps the original position.
pub type Reviews = IndexMap<String, String>;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub isbn: String,
    pub author: String,
    pub title: String,
    #[serde(default)]
    pub reviews: Reviews,
}

impl Book {
    pub fn new(isbn: impl Into<String>, author: impl Into<String>, title: impl Into<String>) -> Self {
        Self { isbn: isbn.into(), author: author.into(), title: title.into(), reviews: Reviews::new() }
    }

    pub fn with_review(mut self, username: impl Into<String>, text: impl Into<String>) -> Self {
        self.reviews.insert(username.into(), text.into());
        self
    }
}

/// The whole catalog in listing order.
///
/// Serializes as a JSON object `{ "<isbn>": Book, ... }` whose keys keep the
/// order of the inner vector.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogListing(pub Vec<Book>);

impl CatalogListing {
    pub fn into_books(self) -> Vec<Book> {
        self.0
    }
}

impl Serialize for CatalogListing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for book in &self.0 {
            map.serialize_entry(&book.isbn, book)?;
        }
        map.end()
    }
}
