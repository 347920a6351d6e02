use async_trait::async_trait;

use super::errors::BookError;
use super::models::Book;
use super::models::BookId;
use super::models::CreateBookCommand;
use super::models::NewBook;
use super::models::UpdateBookCommand;
use crate::domain::seller::models::SellerId;

/// Port for book domain service operations.
#[async_trait]
pub trait BookServicePort: Send + Sync + 'static {
    /// List a new book on behalf of `actor`.
    ///
    /// # Errors
    /// * `SellerNotFound` - Referenced seller does not exist
    /// * `Forbidden` - Referenced seller is not the actor
    /// * `DatabaseError` - Database operation failed
    async fn create_book(
        &self,
        actor: &SellerId,
        command: CreateBookCommand,
    ) -> Result<Book, BookError>;

    /// Retrieve every book ordered by id.
    async fn list_books(&self) -> Result<Vec<Book>, BookError>;

    /// Retrieve a single book.
    ///
    /// # Errors
    /// * `NotFound` - Book does not exist
    async fn get_book(&self, id: &BookId) -> Result<Book, BookError>;

    /// Replace a book's descriptive fields.
    ///
    /// # Errors
    /// * `NotFound` - Book does not exist
    /// * `Forbidden` - Book belongs to another seller
    /// * `DatabaseError` - Database operation failed
    async fn update_book(
        &self,
        actor: &SellerId,
        id: &BookId,
        command: UpdateBookCommand,
    ) -> Result<Book, BookError>;

    /// Remove a book.
    ///
    /// # Errors
    /// * `NotFound` - Book does not exist
    /// * `Forbidden` - Book belongs to another seller
    /// * `DatabaseError` - Database operation failed
    async fn delete_book(&self, actor: &SellerId, id: &BookId) -> Result<(), BookError>;
}

/// Persistence operations for books.
#[async_trait]
pub trait BookRepository: Send + Sync + 'static {
    /// Persist a new book and return it with its assigned id.
    ///
    /// # Errors
    /// * `SellerNotFound` - Referenced seller vanished before the insert
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, book: NewBook) -> Result<Book, BookError>;

    /// Retrieve book by identifier, `None` if absent.
    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, BookError>;

    /// Retrieve all books ordered by id.
    async fn list_all(&self) -> Result<Vec<Book>, BookError>;

    /// Retrieve the books of one seller ordered by id.
    async fn list_by_seller(&self, seller_id: &SellerId) -> Result<Vec<Book>, BookError>;

    /// Overwrite an existing book.
    ///
    /// # Errors
    /// * `NotFound` - Book does not exist
    async fn update(&self, book: Book) -> Result<Book, BookError>;

    /// Remove a book.
    ///
    /// # Errors
    /// * `NotFound` - Book does not exist
    async fn delete(&self, id: &BookId) -> Result<(), BookError>;
}
