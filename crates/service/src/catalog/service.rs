use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use models::book::CatalogListing;
use models::{validate, Book, Reviews};

use super::domain::{DeleteReviewInput, ReviewInput};
use super::errors::CatalogError;
use super::repository::CatalogRepository;

/// Catalog reads and review mutation over a [`CatalogRepository`].
pub struct CatalogService<R: CatalogRepository> {
    repo: Arc<R>,
}

impl<R: CatalogRepository> CatalogService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub fn repository(&self) -> &Arc<R> { &self.repo }

    /// The whole catalog in listing order.
    pub async fn list_all(&self) -> Result<CatalogListing, CatalogError> {
        self.repo.list_all().await.inspect_err(|e| warn!(error = %e, "catalog listing failed"))
    }

    /// Exact-key lookup; the ISBN is not normalised or checksummed.
    ///
    /// # Examples
    /// ```
    /// use service::catalog::{CatalogService, repository::memory::InMemoryCatalogRepository};
    /// use models::Book;
    /// use std::sync::Arc;
    /// let svc = CatalogService::new(Arc::new(InMemoryCatalogRepository::new(vec![Book::new("1", "A", "T")])));
    /// let book = tokio_test::block_on(svc.find_by_isbn("1")).unwrap();
    /// assert_eq!(book.title, "T");
    /// assert!(tokio_test::block_on(svc.find_by_isbn("01")).is_err());
    /// ```
    pub async fn find_by_isbn(&self, isbn: &str) -> Result<Book, CatalogError> {
        self.repo
            .find_by_isbn(isbn)
            .await?
            .ok_or_else(|| CatalogError::BookNotFound(isbn.to_string()))
    }

    /// Books whose author equals `author` exactly, in listing order.
    pub async fn filter_by_author(&self, author: &str) -> Result<Vec<Book>, CatalogError> {
        self.filter(|b| b.author == author).await
    }

    /// Books whose title equals `title` exactly, in listing order.
    pub async fn filter_by_title(&self, title: &str) -> Result<Vec<Book>, CatalogError> {
        self.filter(|b| b.title == title).await
    }

    async fn filter<F: Fn(&Book) -> bool>(&self, keep: F) -> Result<Vec<Book>, CatalogError> {
        let listing = self.list_all().await?;
        Ok(listing.into_books().into_iter().filter(|b| keep(b)).collect())
    }

    pub async fn reviews(&self, isbn: &str) -> Result<Reviews, CatalogError> {
        Ok(self.find_by_isbn(isbn).await?.reviews)
    }

    /// Set `username`'s review on the book, replacing any earlier one.
    ///
    /// # Examples
    /// ```
    /// use service::catalog::{CatalogService, domain::ReviewInput, repository::memory::InMemoryCatalogRepository};
    /// use models::Book;
    /// use std::sync::Arc;
    /// let svc = CatalogService::new(Arc::new(InMemoryCatalogRepository::new(vec![Book::new("1", "A", "T")])));
    /// let input = ReviewInput { username: Some("alice".into()), review: Some("great".into()) };
    /// let reviews = tokio_test::block_on(svc.upsert_review("1", input)).unwrap();
    /// assert_eq!(reviews["alice"], "great");
    /// ```
    #[instrument(skip(self, input), fields(username = input.username.as_deref().unwrap_or_default()))]
    pub async fn upsert_review(&self, isbn: &str, input: ReviewInput) -> Result<Reviews, CatalogError> {
        let (username, text) = validate::both_present(input.username.as_deref(), input.review.as_deref())
            .ok_or(CatalogError::Validation("Username and review required"))?;
        let reviews = self.repo.upsert_review(isbn, username, text).await?;
        info!(review_count = reviews.len(), "review_upserted");
        Ok(reviews)
    }

    /// Remove `username`'s review. Unknown ISBN and missing review are the same error.
    #[instrument(skip(self, input), fields(username = input.username.as_deref().unwrap_or_default()))]
    pub async fn delete_review(&self, isbn: &str, input: DeleteReviewInput) -> Result<Reviews, CatalogError> {
        let username = validate::present(input.username.as_deref())
            .ok_or(CatalogError::Validation("Username required"))?;
        match self.repo.delete_review(isbn, username).await {
            Ok(reviews) => {
                info!(review_count = reviews.len(), "review_deleted");
                Ok(reviews)
            }
            Err(e) => {
                debug!(error = %e, "review not deleted");
                Err(e)
            }
        }
    }
}
