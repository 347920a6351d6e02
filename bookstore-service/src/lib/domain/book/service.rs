use std::sync::Arc;

use async_trait::async_trait;

use super::errors::BookError;
use super::models::Book;
use super::models::BookId;
use super::models::CreateBookCommand;
use super::models::NewBook;
use super::models::UpdateBookCommand;
use super::ports::BookRepository;
use super::ports::BookServicePort;
use crate::domain::seller::errors::SellerError;
use crate::domain::seller::models::SellerId;
use crate::domain::seller::ports::SellerRepository;

/// Concrete implementation of BookServicePort.
///
/// Every mutation is owner-only: the authenticated seller must be the seller
/// the book is (or will be) listed under.
pub struct BookService<BR, SR>
where
    BR: BookRepository,
    SR: SellerRepository,
{
    book_repository: Arc<BR>,
    seller_repository: Arc<SR>,
}

impl<BR, SR> BookService<BR, SR>
where
    BR: BookRepository,
    SR: SellerRepository,
{
    pub fn new(book_repository: Arc<BR>, seller_repository: Arc<SR>) -> Self {
        Self {
            book_repository,
            seller_repository,
        }
    }

    async fn owned_book(&self, actor: &SellerId, id: &BookId) -> Result<Book, BookError> {
        let book = self
            .book_repository
            .find_by_id(id)
            .await?
            .ok_or(BookError::NotFound(*id))?;

        ensure_owner(actor, &book.seller_id)?;
        Ok(book)
    }
}

fn ensure_owner(actor: &SellerId, owner: &SellerId) -> Result<(), BookError> {
    if actor != owner {
        tracing::warn!(actor = %actor, owner = %owner, "Book modification forbidden");
        return Err(BookError::Forbidden {
            actor: *actor,
            owner: *owner,
        });
    }
    Ok(())
}

fn seller_storage_error(err: SellerError) -> BookError {
    BookError::DatabaseError(err.to_string())
}

#[async_trait]
impl<BR, SR> BookServicePort for BookService<BR, SR>
where
    BR: BookRepository,
    SR: SellerRepository,
{
    async fn create_book(
        &self,
        actor: &SellerId,
        command: CreateBookCommand,
    ) -> Result<Book, BookError> {
        let seller_exists = self
            .seller_repository
            .find_by_id(&command.seller_id)
            .await
            .map_err(seller_storage_error)?
            .is_some();
        if !seller_exists {
            return Err(BookError::SellerNotFound(command.seller_id));
        }

        ensure_owner(actor, &command.seller_id)?;

        let book = self
            .book_repository
            .create(NewBook {
                title: command.title,
                author: command.author,
                year: command.year,
                count_pages: command.count_pages,
                seller_id: command.seller_id,
            })
            .await?;

        tracing::info!(book_id = %book.id, seller_id = %book.seller_id, "Book created");
        Ok(book)
    }

    async fn list_books(&self) -> Result<Vec<Book>, BookError> {
        self.book_repository.list_all().await
    }

    async fn get_book(&self, id: &BookId) -> Result<Book, BookError> {
        self.book_repository
            .find_by_id(id)
            .await?
            .ok_or(BookError::NotFound(*id))
    }

    async fn update_book(
        &self,
        actor: &SellerId,
        id: &BookId,
        command: UpdateBookCommand,
    ) -> Result<Book, BookError> {
        let mut book = self.owned_book(actor, id).await?;

        book.title = command.title;
        book.author = command.author;
        book.year = command.year;
        book.count_pages = command.count_pages;

        self.book_repository.update(book).await
    }

    async fn delete_book(&self, actor: &SellerId, id: &BookId) -> Result<(), BookError> {
        self.owned_book(actor, id).await?;
        self.book_repository.delete(id).await?;

        tracing::info!(book_id = %id, "Book deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::domain::book::models::Author;
    use crate::domain::book::models::PageCount;
    use crate::domain::book::models::PublicationYear;
    use crate::domain::book::models::Title;
    use crate::domain::seller::models::EmailAddress;
    use crate::domain::seller::models::NewSeller;
    use crate::domain::seller::models::PersonName;
    use crate::domain::seller::models::Seller;

    mock! {
        pub TestBookRepository {}

        #[async_trait]
        impl BookRepository for TestBookRepository {
            async fn create(&self, book: NewBook) -> Result<Book, BookError>;
            async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, BookError>;
            async fn list_all(&self) -> Result<Vec<Book>, BookError>;
            async fn list_by_seller(&self, seller_id: &SellerId) -> Result<Vec<Book>, BookError>;
            async fn update(&self, book: Book) -> Result<Book, BookError>;
            async fn delete(&self, id: &BookId) -> Result<(), BookError>;
        }
    }

    mock! {
        pub TestSellerRepository {}

        #[async_trait]
        impl SellerRepository for TestSellerRepository {
            async fn create(&self, seller: NewSeller) -> Result<Seller, SellerError>;
            async fn find_by_id(&self, id: &SellerId) -> Result<Option<Seller>, SellerError>;
            async fn list_all(&self) -> Result<Vec<Seller>, SellerError>;
            async fn update(&self, seller: Seller) -> Result<Seller, SellerError>;
            async fn delete(&self, id: &SellerId) -> Result<(), SellerError>;
        }
    }

    fn seller(id: i64) -> Seller {
        Seller {
            id: SellerId(id),
            first_name: PersonName::new("Seller".to_string()).unwrap(),
            last_name: PersonName::new("User".to_string()).unwrap(),
            email: EmailAddress::new("seller_user@example.com".to_string()).unwrap(),
            password_hash: "$argon2id$test_hash".to_string(),
        }
    }

    fn book(id: i64, seller_id: i64) -> Book {
        Book {
            id: BookId(id),
            title: Title::new("Eugeny Onegin".to_string()).unwrap(),
            author: Author::new("Pushkin".to_string()).unwrap(),
            year: PublicationYear::new(2001).unwrap(),
            count_pages: PageCount::new(104).unwrap(),
            seller_id: SellerId(seller_id),
        }
    }

    fn create_command(seller_id: i64) -> CreateBookCommand {
        CreateBookCommand {
            title: Title::new("Wrong Code".to_string()).unwrap(),
            author: Author::new("Robert Martin".to_string()).unwrap(),
            year: PublicationYear::new(2007).unwrap(),
            count_pages: PageCount::new(104).unwrap(),
            seller_id: SellerId(seller_id),
        }
    }

    fn update_command() -> UpdateBookCommand {
        UpdateBookCommand {
            title: Title::new("Mziri".to_string()).unwrap(),
            author: Author::new("Lermontov".to_string()).unwrap(),
            year: PublicationYear::new(2007).unwrap(),
            count_pages: PageCount::new(100).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_create_book_success() {
        let mut books = MockTestBookRepository::new();
        let mut sellers = MockTestSellerRepository::new();

        sellers
            .expect_find_by_id()
            .withf(|id| *id == SellerId(5))
            .times(1)
            .returning(|id| Ok(Some(seller(id.0))));
        books
            .expect_create()
            .withf(|book| book.title.as_str() == "Wrong Code" && book.seller_id == SellerId(5))
            .times(1)
            .returning(|new_book| {
                Ok(Book {
                    id: BookId(1),
                    title: new_book.title,
                    author: new_book.author,
                    year: new_book.year,
                    count_pages: new_book.count_pages,
                    seller_id: new_book.seller_id,
                })
            });

        let service = BookService::new(Arc::new(books), Arc::new(sellers));

        let created = service
            .create_book(&SellerId(5), create_command(5))
            .await
            .unwrap();
        assert_eq!(created.id, BookId(1));
        assert_eq!(created.count_pages.value(), 104);
    }

    #[tokio::test]
    async fn test_create_book_unknown_seller() {
        let mut books = MockTestBookRepository::new();
        let mut sellers = MockTestSellerRepository::new();

        sellers.expect_find_by_id().times(1).returning(|_| Ok(None));
        books.expect_create().times(0);

        let service = BookService::new(Arc::new(books), Arc::new(sellers));

        let result = service.create_book(&SellerId(5), create_command(5)).await;
        assert!(matches!(result, Err(BookError::SellerNotFound(SellerId(5)))));
    }

    #[tokio::test]
    async fn test_create_book_for_other_seller_forbidden() {
        let mut books = MockTestBookRepository::new();
        let mut sellers = MockTestSellerRepository::new();

        sellers
            .expect_find_by_id()
            .returning(|id| Ok(Some(seller(id.0))));
        books.expect_create().times(0);

        let service = BookService::new(Arc::new(books), Arc::new(sellers));

        let result = service.create_book(&SellerId(4), create_command(5)).await;
        assert!(matches!(result, Err(BookError::Forbidden { .. })));
    }

    #[tokio::test]
    async fn test_get_book_not_found() {
        let mut books = MockTestBookRepository::new();
        let sellers = MockTestSellerRepository::new();

        books.expect_find_by_id().times(1).returning(|_| Ok(None));

        let service = BookService::new(Arc::new(books), Arc::new(sellers));

        let result = service.get_book(&BookId(8)).await;
        assert!(matches!(result, Err(BookError::NotFound(BookId(8)))));
    }

    #[tokio::test]
    async fn test_update_book_success() {
        let mut books = MockTestBookRepository::new();
        let sellers = MockTestSellerRepository::new();

        books
            .expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(book(id.0, 5))));
        books
            .expect_update()
            .withf(|book| {
                book.title.as_str() == "Mziri"
                    && book.count_pages.value() == 100
                    && book.seller_id == SellerId(5)
            })
            .times(1)
            .returning(Ok);

        let service = BookService::new(Arc::new(books), Arc::new(sellers));

        let updated = service
            .update_book(&SellerId(5), &BookId(2), update_command())
            .await
            .unwrap();
        assert_eq!(updated.id, BookId(2));
        assert_eq!(updated.author.as_str(), "Lermontov");
    }

    #[tokio::test]
    async fn test_update_book_of_other_seller_forbidden() {
        let mut books = MockTestBookRepository::new();
        let sellers = MockTestSellerRepository::new();

        books
            .expect_find_by_id()
            .returning(|id| Ok(Some(book(id.0, 5))));
        books.expect_update().times(0);

        let service = BookService::new(Arc::new(books), Arc::new(sellers));

        let result = service
            .update_book(&SellerId(6), &BookId(2), update_command())
            .await;
        assert!(matches!(
            result,
            Err(BookError::Forbidden {
                actor: SellerId(6),
                owner: SellerId(5)
            })
        ));
    }

    #[tokio::test]
    async fn test_delete_book_success() {
        let mut books = MockTestBookRepository::new();
        let sellers = MockTestSellerRepository::new();

        books
            .expect_find_by_id()
            .returning(|id| Ok(Some(book(id.0, 5))));
        books
            .expect_delete()
            .withf(|id| *id == BookId(2))
            .times(1)
            .returning(|_| Ok(()));

        let service = BookService::new(Arc::new(books), Arc::new(sellers));

        assert!(service.delete_book(&SellerId(5), &BookId(2)).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_missing_book() {
        let mut books = MockTestBookRepository::new();
        let sellers = MockTestSellerRepository::new();

        books.expect_find_by_id().returning(|_| Ok(None));
        books.expect_delete().times(0);

        let service = BookService::new(Arc::new(books), Arc::new(sellers));

        let result = service.delete_book(&SellerId(5), &BookId(2)).await;
        assert!(matches!(result, Err(BookError::NotFound(_))));
    }
}
