use async_trait::async_trait;

use models::book::CatalogListing;
use models::{Book, Reviews};

use super::errors::CatalogError;

/// Repository abstraction for the catalog store.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Every book, in listing order.
    async fn list_all(&self) -> Result<CatalogListing, CatalogError>;
    async fn find_by_isbn(&self, isbn: &str) -> Result<Option<Book>, CatalogError>;
    /// Insert or overwrite one user's review; returns the book's reviews afterwards.
    async fn upsert_review(&self, isbn: &str, username: &str, text: &str) -> Result<Reviews, CatalogError>;
    /// Remove one user's review; returns the remaining reviews.
    async fn delete_review(&self, isbn: &str, username: &str) -> Result<Reviews, CatalogError>;
}

pub mod memory {
    use std::collections::HashMap;

    use tokio::sync::RwLock;

    use super::*;

    struct Shelf {
        books: Vec<RwLock<Book>>,
        index: HashMap<String, usize>,
    }

    impl Shelf {
        fn get(&self, isbn: &str) -> Option<&RwLock<Book>> {
            self.index.get(isbn).map(|&i| &self.books[i])
        }
    }

    /// In-memory catalog. Each book sits behind its own lock so a review
    /// read-modify-write never races another one on the same book.
    pub struct InMemoryCatalogRepository {
        shelf: Option<Shelf>,
    }

    impl InMemoryCatalogRepository {
        /// Seed the store. A repeated ISBN replaces the earlier entry in place.
        pub fn new(seed: impl IntoIterator<Item = Book>) -> Self {
            let mut books: Vec<RwLock<Book>> = Vec::new();
            let mut index = HashMap::new();
            for book in seed {
                match index.get(&book.isbn) {
                    Some(&i) => books[i] = RwLock::new(book),
                    None => {
                        index.insert(book.isbn.clone(), books.len());
                        books.push(RwLock::new(book));
                    }
                }
            }
            Self { shelf: Some(Shelf { books, index }) }
        }

        /// A store that was never seeded. Every read fails with `Unavailable`.
        pub fn unavailable() -> Self {
            Self { shelf: None }
        }

        pub fn len(&self) -> usize {
            self.shelf.as_ref().map_or(0, |s| s.books.len())
        }

        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }

        fn shelf(&self) -> Result<&Shelf, CatalogError> {
            self.shelf.as_ref().ok_or(CatalogError::Unavailable)
        }
    }

    #[async_trait]
    impl CatalogRepository for InMemoryCatalogRepository {
        async fn list_all(&self) -> Result<CatalogListing, CatalogError> {
            let shelf = self.shelf()?;
            let mut out = Vec::with_capacity(shelf.books.len());
            for book in &shelf.books {
                out.push(book.read().await.clone());
            }
            Ok(CatalogListing(out))
        }

        async fn find_by_isbn(&self, isbn: &str) -> Result<Option<Book>, CatalogError> {
            match self.shelf()?.get(isbn) {
                Some(lock) => Ok(Some(lock.read().await.clone())),
                None => Ok(None),
            }
        }

        async fn upsert_review(&self, isbn: &str, username: &str, text: &str) -> Result<Reviews, CatalogError> {
            let lock = self.shelf()?.get(isbn).ok_or_else(|| CatalogError::BookNotFound(isbn.to_string()))?;
            let mut book = lock.write().await;
            book.reviews.insert(username.to_string(), text.to_string());
            Ok(book.reviews.clone())
        }

        async fn delete_review(&self, isbn: &str, username: &str) -> Result<Reviews, CatalogError> {
            let lock = self.shelf()?.get(isbn).ok_or(CatalogError::ReviewNotFound)?;
            let mut book = lock.write().await;
            if book.reviews.shift_remove(username).is_none() {
                return Err(CatalogError::ReviewNotFound);
            }
            Ok(book.reviews.clone())
        }
    }

    #[cfg(test)]
    mod tests {
        use std::sync::Arc;

        use super::*;

        fn repo() -> InMemoryCatalogRepository {
            InMemoryCatalogRepository::new(vec![
                Book::new("1", "A", "One"),
                Book::new("2", "B", "Two"),
            ])
        }

        #[tokio::test]
        async fn repeated_isbn_replaces_in_place() -> anyhow::Result<()> {
            let repo = InMemoryCatalogRepository::new(vec![
                Book::new("1", "A", "One"),
                Book::new("2", "B", "Two"),
                Book::new("1", "A2", "Uno"),
            ]);
            assert_eq!(repo.len(), 2);
            let books = repo.list_all().await?.into_books();
            assert_eq!(books[0].title, "Uno");
            assert_eq!(books[1].isbn, "2");
            Ok(())
        }

        #[tokio::test]
        async fn unavailable_store_fails_reads() {
            let repo = InMemoryCatalogRepository::unavailable();
            assert_eq!(repo.list_all().await.unwrap_err(), CatalogError::Unavailable);
            assert_eq!(repo.find_by_isbn("1").await.unwrap_err(), CatalogError::Unavailable);
            assert_eq!(repo.upsert_review("1", "u", "t").await.unwrap_err(), CatalogError::Unavailable);
        }

        #[tokio::test]
        async fn delete_on_unknown_isbn_is_review_not_found() {
            let repo = repo();
            assert_eq!(repo.delete_review("404", "u").await.unwrap_err(), CatalogError::ReviewNotFound);
        }

        #[tokio::test]
        async fn reviews_keep_write_order_across_overwrite_and_delete() -> anyhow::Result<()> {
            let repo = repo();
            repo.upsert_review("1", "zoe", "a").await?;
            repo.upsert_review("1", "adam", "b").await?;
            repo.upsert_review("1", "mia", "c").await?;
            let reviews = repo.upsert_review("1", "zoe", "a2").await?;
            let order: Vec<_> = reviews.keys().map(String::as_str).collect();
            assert_eq!(order, ["zoe", "adam", "mia"]);

            let remaining = repo.delete_review("1", "zoe").await?;
            let order: Vec<_> = remaining.keys().map(String::as_str).collect();
            assert_eq!(order, ["adam", "mia"]);
            Ok(())
        }

        #[tokio::test]
        async fn concurrent_upserts_are_not_lost() -> anyhow::Result<()> {
            let repo = Arc::new(repo());
            let mut handles = Vec::new();
            for i in 0..32 {
                let repo = repo.clone();
                handles.push(tokio::spawn(async move {
                    repo.upsert_review("1", &format!("user{i}"), "text").await
                }));
            }
            for h in handles {
                h.await??;
            }
            let book = repo.find_by_isbn("1").await?.ok_or_else(|| anyhow::anyhow!("book 1 missing"))?;
            assert_eq!(book.reviews.len(), 32);
            Ok(())
        }
    }
}
