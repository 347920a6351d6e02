use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::book::errors::BookError;
use crate::domain::book::models::Author;
use crate::domain::book::models::Book;
use crate::domain::book::models::BookId;
use crate::domain::book::models::NewBook;
use crate::domain::book::models::PageCount;
use crate::domain::book::models::PublicationYear;
use crate::domain::book::models::Title;
use crate::domain::book::ports::BookRepository;
use crate::domain::seller::models::SellerId;

pub struct PostgresBookRepository {
    pool: PgPool,
}

impl PostgresBookRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_book(row: &PgRow) -> Result<Book, BookError> {
        let id: i64 = row.try_get("id").map_err(database_error)?;
        let title: String = row.try_get("title").map_err(database_error)?;
        let author: String = row.try_get("author").map_err(database_error)?;
        let year: i32 = row.try_get("year").map_err(database_error)?;
        let count_pages: i32 = row.try_get("count_pages").map_err(database_error)?;
        let seller_id: i64 = row.try_get("seller_id").map_err(database_error)?;

        Ok(Book {
            id: BookId(id),
            title: Title::new(title)?,
            author: Author::new(author)?,
            year: PublicationYear::new(year)?,
            count_pages: PageCount::new(count_pages)?,
            seller_id: SellerId(seller_id),
        })
    }
}

fn database_error(err: sqlx::Error) -> BookError {
    BookError::DatabaseError(err.to_string())
}

fn insert_error(err: sqlx::Error, seller_id: SellerId) -> BookError {
    if let Some(db_err) = err.as_database_error() {
        if db_err.is_foreign_key_violation() {
            return BookError::SellerNotFound(seller_id);
        }
    }
    database_error(err)
}

#[async_trait]
impl BookRepository for PostgresBookRepository {
    async fn create(&self, book: NewBook) -> Result<Book, BookError> {
        let row = sqlx::query(
            r#"
            INSERT INTO books (title, author, year, count_pages, seller_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(book.title.as_str())
        .bind(book.author.as_str())
        .bind(book.year.value())
        .bind(book.count_pages.value())
        .bind(book.seller_id.0)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| insert_error(e, book.seller_id))?;

        let id: i64 = row.try_get("id").map_err(database_error)?;

        Ok(Book {
            id: BookId(id),
            title: book.title,
            author: book.author,
            year: book.year,
            count_pages: book.count_pages,
            seller_id: book.seller_id,
        })
    }

    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, BookError> {
        let row = sqlx::query(
            r#"
            SELECT id, title, author, year, count_pages, seller_id
            FROM books
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        row.as_ref().map(Self::row_to_book).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Book>, BookError> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, author, year, count_pages, seller_id
            FROM books
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        rows.iter().map(Self::row_to_book).collect()
    }

    async fn list_by_seller(&self, seller_id: &SellerId) -> Result<Vec<Book>, BookError> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, author, year, count_pages, seller_id
            FROM books
            WHERE seller_id = $1
            ORDER BY id
            "#,
        )
        .bind(seller_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        rows.iter().map(Self::row_to_book).collect()
    }

    async fn update(&self, book: Book) -> Result<Book, BookError> {
        let result = sqlx::query(
            r#"
            UPDATE books
            SET title = $2, author = $3, year = $4, count_pages = $5
            WHERE id = $1
            "#,
        )
        .bind(book.id.0)
        .bind(book.title.as_str())
        .bind(book.author.as_str())
        .bind(book.year.value())
        .bind(book.count_pages.value())
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(BookError::NotFound(book.id));
        }

        Ok(book)
    }

    async fn delete(&self, id: &BookId) -> Result<(), BookError> {
        let result = sqlx::query(
            r#"
            DELETE FROM books
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(BookError::NotFound(*id));
        }

        Ok(())
    }
}
