use async_trait::async_trait;

use super::errors::SellerError;
use super::models::CreateSellerCommand;
use super::models::NewSeller;
use super::models::Seller;
use super::models::SellerId;
use super::models::SellerWithBooks;
use super::models::UpdateSellerCommand;

/// Port for seller domain service operations.
#[async_trait]
pub trait SellerServicePort: Send + Sync + 'static {
    /// Register a new seller.
    ///
    /// # Arguments
    /// * `command` - Validated names, email and plaintext password
    ///
    /// # Returns
    /// Created seller entity with its assigned id
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `PasswordHashing` - Password could not be hashed
    /// * `DatabaseError` - Database operation failed
    async fn create_seller(&self, command: CreateSellerCommand) -> Result<Seller, SellerError>;

    /// Retrieve every seller ordered by id.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_sellers(&self) -> Result<Vec<Seller>, SellerError>;

    /// Retrieve a seller together with the books it lists.
    ///
    /// # Errors
    /// * `NotFound` - Seller does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_seller(&self, id: &SellerId) -> Result<SellerWithBooks, SellerError>;

    /// Replace a seller's profile fields.
    ///
    /// # Arguments
    /// * `actor` - Authenticated seller performing the change
    /// * `id` - Seller to update
    /// * `command` - New names and email
    ///
    /// # Errors
    /// * `Forbidden` - Actor is not the seller being updated
    /// * `NotFound` - Seller does not exist
    /// * `EmailAlreadyExists` - New email belongs to another seller
    /// * `DatabaseError` - Database operation failed
    async fn update_seller(
        &self,
        actor: &SellerId,
        id: &SellerId,
        command: UpdateSellerCommand,
    ) -> Result<Seller, SellerError>;

    /// Delete a seller and the books it lists.
    ///
    /// # Errors
    /// * `Forbidden` - Actor is not the seller being deleted
    /// * `NotFound` - Seller does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_seller(&self, actor: &SellerId, id: &SellerId) -> Result<(), SellerError>;
}

/// Persistence operations for the seller aggregate.
#[async_trait]
pub trait SellerRepository: Send + Sync + 'static {
    /// Persist a new seller and return it with its assigned id.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, seller: NewSeller) -> Result<Seller, SellerError>;

    /// Retrieve seller by identifier, `None` if absent.
    async fn find_by_id(&self, id: &SellerId) -> Result<Option<Seller>, SellerError>;

    /// Retrieve all sellers ordered by id.
    async fn list_all(&self) -> Result<Vec<Seller>, SellerError>;

    /// Overwrite an existing seller.
    ///
    /// # Errors
    /// * `NotFound` - Seller does not exist
    /// * `EmailAlreadyExists` - New email belongs to another seller
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, seller: Seller) -> Result<Seller, SellerError>;

    /// Remove a seller.
    ///
    /// # Errors
    /// * `NotFound` - Seller does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: &SellerId) -> Result<(), SellerError>;
}
