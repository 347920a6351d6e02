use std::sync::Arc;

use async_trait::async_trait;

use super::errors::SellerError;
use super::models::CreateSellerCommand;
use super::models::NewSeller;
use super::models::Seller;
use super::models::SellerId;
use super::models::SellerWithBooks;
use super::models::UpdateSellerCommand;
use super::ports::SellerRepository;
use super::ports::SellerServicePort;
use crate::domain::book::errors::BookError;
use crate::domain::book::ports::BookRepository;

/// Domain service implementation for seller operations.
///
/// Generic over repositories for testability.
pub struct SellerService<SR, BR>
where
    SR: SellerRepository,
    BR: BookRepository,
{
    seller_repository: Arc<SR>,
    book_repository: Arc<BR>,
    password_hasher: auth::PasswordHasher,
}

impl<SR, BR> SellerService<SR, BR>
where
    SR: SellerRepository,
    BR: BookRepository,
{
    /// Create a new seller service with injected dependencies.
    ///
    /// # Arguments
    /// * `seller_repository` - Seller persistence implementation
    /// * `book_repository` - Book persistence, used to load a seller's books
    /// * `password_hasher` - Hasher applied to registration passwords
    pub fn new(
        seller_repository: Arc<SR>,
        book_repository: Arc<BR>,
        password_hasher: auth::PasswordHasher,
    ) -> Self {
        Self {
            seller_repository,
            book_repository,
            password_hasher,
        }
    }

    async fn existing_seller(&self, id: &SellerId) -> Result<Seller, SellerError> {
        self.seller_repository
            .find_by_id(id)
            .await?
            .ok_or(SellerError::NotFound(*id))
    }

    fn ensure_self(actor: &SellerId, target: &SellerId) -> Result<(), SellerError> {
        if actor != target {
            tracing::warn!(actor = %actor, target = %target, "Seller modification forbidden");
            return Err(SellerError::Forbidden {
                actor: *actor,
                target: *target,
            });
        }
        Ok(())
    }
}

fn book_storage_error(err: BookError) -> SellerError {
    SellerError::DatabaseError(err.to_string())
}

#[async_trait]
impl<SR, BR> SellerServicePort for SellerService<SR, BR>
where
    SR: SellerRepository,
    BR: BookRepository,
{
    async fn create_seller(&self, command: CreateSellerCommand) -> Result<Seller, SellerError> {
        let hasher = self.password_hasher.clone();
        let password = command.password;

        // Argon2 is CPU-bound; keep it off the async workers.
        let password_hash = tokio::task::spawn_blocking(move || hasher.hash(password.expose()))
            .await
            .map_err(|e| SellerError::PasswordHashing(e.to_string()))?
            .map_err(|e| SellerError::PasswordHashing(e.to_string()))?;

        let new_seller = NewSeller {
            first_name: command.first_name,
            last_name: command.last_name,
            email: command.email,
            password_hash,
        };

        let seller = self.seller_repository.create(new_seller).await?;
        tracing::info!(seller_id = %seller.id, "Seller registered");

        Ok(seller)
    }

    async fn list_sellers(&self) -> Result<Vec<Seller>, SellerError> {
        self.seller_repository.list_all().await
    }

    async fn get_seller(&self, id: &SellerId) -> Result<SellerWithBooks, SellerError> {
        let seller = self.existing_seller(id).await?;

        let books = self
            .book_repository
            .list_by_seller(id)
            .await
            .map_err(book_storage_error)?;

        Ok(SellerWithBooks { seller, books })
    }

    async fn update_seller(
        &self,
        actor: &SellerId,
        id: &SellerId,
        command: UpdateSellerCommand,
    ) -> Result<Seller, SellerError> {
        let mut seller = self.existing_seller(id).await?;
        Self::ensure_self(actor, id)?;

        seller.first_name = command.first_name;
        seller.last_name = command.last_name;
        seller.email = command.email;

        self.seller_repository.update(seller).await
    }

    async fn delete_seller(&self, actor: &SellerId, id: &SellerId) -> Result<(), SellerError> {
        self.existing_seller(id).await?;
        Self::ensure_self(actor, id)?;

        // Listed books go with the seller row (ON DELETE CASCADE).
        self.seller_repository.delete(id).await?;

        tracing::info!(seller_id = %id, "Seller deleted");
        Ok(())
    }
}
