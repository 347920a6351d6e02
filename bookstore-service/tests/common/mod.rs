use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use auth::PasswordHasher;
use bookstore_service::authentication::errors::AuthError;
use bookstore_service::authentication::models::Credential;
use bookstore_service::authentication::ports::CredentialRepository;
use bookstore_service::authentication::service::AuthService;
use bookstore_service::book::errors::BookError;
use bookstore_service::book::models::Book;
use bookstore_service::book::models::BookId;
use bookstore_service::book::models::NewBook;
use bookstore_service::book::ports::BookRepository;
use bookstore_service::book::service::BookService;
use bookstore_service::inbound::http::router::create_router;
use bookstore_service::seller::errors::SellerError;
use bookstore_service::seller::models::NewSeller;
use bookstore_service::seller::models::Seller;
use bookstore_service::seller::models::SellerId;
use bookstore_service::seller::ports::SellerRepository;
use bookstore_service::seller::service::SellerService;
use serde_json::json;
use serde_json::Value;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

#[derive(Default)]
struct Tables {
    sellers: BTreeMap<i64, Seller>,
    books: BTreeMap<i64, Book>,
}

/// In-memory store with the same rules as the PostgreSQL schema: unique
/// seller email, and books removed together with their seller.
#[derive(Default)]
pub struct InMemoryRepository {
    tables: Mutex<Tables>,
}

fn email_taken(sellers: &BTreeMap<i64, Seller>, email: &str, except: Option<SellerId>) -> bool {
    sellers
        .values()
        .any(|s| s.email.as_str() == email && Some(s.id) != except)
}

fn next_id<V>(map: &BTreeMap<i64, V>) -> i64 {
    map.keys().next_back().map_or(1, |last| last + 1)
}

#[async_trait]
impl SellerRepository for InMemoryRepository {
    async fn create(&self, seller: NewSeller) -> Result<Seller, SellerError> {
        let mut tables = self.tables.lock().unwrap();
        if email_taken(&tables.sellers, seller.email.as_str(), None) {
            return Err(SellerError::EmailAlreadyExists(seller.email.to_string()));
        }

        let id = next_id(&tables.sellers);
        let created = Seller {
            id: SellerId(id),
            first_name: seller.first_name,
            last_name: seller.last_name,
            email: seller.email,
            password_hash: seller.password_hash,
        };
        tables.sellers.insert(id, created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: &SellerId) -> Result<Option<Seller>, SellerError> {
        Ok(self.tables.lock().unwrap().sellers.get(&id.0).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Seller>, SellerError> {
        Ok(self.tables.lock().unwrap().sellers.values().cloned().collect())
    }

    async fn update(&self, seller: Seller) -> Result<Seller, SellerError> {
        let mut tables = self.tables.lock().unwrap();
        if !tables.sellers.contains_key(&seller.id.0) {
            return Err(SellerError::NotFound(seller.id));
        }
        if email_taken(&tables.sellers, seller.email.as_str(), Some(seller.id)) {
            return Err(SellerError::EmailAlreadyExists(seller.email.to_string()));
        }
        tables.sellers.insert(seller.id.0, seller.clone());
        Ok(seller)
    }

    async fn delete(&self, id: &SellerId) -> Result<(), SellerError> {
        let mut tables = self.tables.lock().unwrap();
        tables
            .sellers
            .remove(&id.0)
            .ok_or(SellerError::NotFound(*id))?;
        tables.books.retain(|_, b| b.seller_id != *id);
        Ok(())
    }
}

#[async_trait]
impl CredentialRepository for InMemoryRepository {
    async fn find_credential_by_email(
        &self,
        email: &str,
    ) -> Result<Option<Credential>, AuthError> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .sellers
            .values()
            .find(|s| s.email.as_str() == email)
            .map(|s| Credential {
                seller_id: s.id,
                email: s.email.to_string(),
                password_hash: s.password_hash.clone(),
            }))
    }

    async fn find_principal_by_id(&self, id: &SellerId) -> Result<Option<Seller>, AuthError> {
        Ok(self.tables.lock().unwrap().sellers.get(&id.0).cloned())
    }
}

#[async_trait]
impl BookRepository for InMemoryRepository {
    async fn create(&self, book: NewBook) -> Result<Book, BookError> {
        let mut tables = self.tables.lock().unwrap();
        if !tables.sellers.contains_key(&book.seller_id.0) {
            return Err(BookError::SellerNotFound(book.seller_id));
        }

        let id = next_id(&tables.books);
        let created = Book {
            id: BookId(id),
            title: book.title,
            author: book.author,
            year: book.year,
            count_pages: book.count_pages,
            seller_id: book.seller_id,
        };
        tables.books.insert(id, created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, BookError> {
        Ok(self.tables.lock().unwrap().books.get(&id.0).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Book>, BookError> {
        Ok(self.tables.lock().unwrap().books.values().cloned().collect())
    }

    async fn list_by_seller(&self, seller_id: &SellerId) -> Result<Vec<Book>, BookError> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .books
            .values()
            .filter(|b| b.seller_id == *seller_id)
            .cloned()
            .collect())
    }

    async fn update(&self, book: Book) -> Result<Book, BookError> {
        let mut tables = self.tables.lock().unwrap();
        if !tables.books.contains_key(&book.id.0) {
            return Err(BookError::NotFound(book.id));
        }
        tables.books.insert(book.id.0, book.clone());
        Ok(book)
    }

    async fn delete(&self, id: &BookId) -> Result<(), BookError> {
        self.tables
            .lock()
            .unwrap()
            .books
            .remove(&id.0)
            .map(|_| ())
            .ok_or(BookError::NotFound(*id))
    }
}

/// Test application that spawns the real router on a random port
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub authenticator: Arc<Authenticator>,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Cheap Argon2 cost keeps the suite fast; hashes still verify by their PHC params.
        let password_hasher =
            PasswordHasher::with_params(1024, 1, 1).expect("Failed to build password hasher");

        let authenticator = Arc::new(
            Authenticator::from_settings(TEST_SECRET, "HS256", 30)
                .expect("Failed to build authenticator")
                .with_password_hasher(password_hasher.clone()),
        );

        let repository = Arc::new(InMemoryRepository::default());

        let seller_service = Arc::new(SellerService::new(
            Arc::clone(&repository),
            Arc::clone(&repository),
            password_hasher,
        ));
        let book_service = Arc::new(BookService::new(
            Arc::clone(&repository),
            Arc::clone(&repository),
        ));
        let auth_service = Arc::new(AuthService::new(repository, Arc::clone(&authenticator)));

        let router = create_router(seller_service, book_service, auth_service);

        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}/api/v1", port);

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            authenticator,
        }
    }

    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    pub fn put(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.put(format!("{}{}", self.address, path))
    }

    pub fn delete(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.delete(format!("{}{}", self.address, path))
    }

    /// Register a seller and return its JSON representation
    pub async fn register_seller(&self, first_name: &str, email: &str, password: &str) -> Value {
        let response = self
            .post("/seller")
            .json(&json!({
                "first_name": first_name,
                "last_name": "Petrov",
                "email": email,
                "password": password,
            }))
            .send()
            .await
            .expect("Failed to send registration request");
        assert_eq!(response.status(), 201, "seller registration failed");

        response.json().await.expect("Failed to parse seller")
    }

    pub async fn login(&self, email: &str, password: &str) -> reqwest::Response {
        self.post("/token")
            .form(&[("username", email), ("password", password)])
            .send()
            .await
            .expect("Failed to send login request")
    }

    /// Log in and return the bearer token
    pub async fn token_for(&self, email: &str, password: &str) -> String {
        let response = self.login(email, password).await;
        assert_eq!(response.status(), 200, "login failed");

        let body: Value = response.json().await.expect("Failed to parse token");
        body["access_token"]
            .as_str()
            .expect("access_token missing")
            .to_string()
    }

    /// Create a book for `seller_id` and return its JSON representation
    pub async fn create_book(&self, token: &str, seller_id: i64, title: &str) -> Value {
        let response = self
            .post("/books")
            .bearer_auth(token)
            .json(&json!({
                "title": title,
                "author": "Pushkin",
                "year": 2001,
                "pages": 104,
                "seller_id": seller_id,
            }))
            .send()
            .await
            .expect("Failed to send book request");
        assert_eq!(response.status(), 201, "book creation failed");

        response.json().await.expect("Failed to parse book")
    }
}
