use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use crate::domain::authentication::errors::AuthError;
use crate::domain::authentication::models::Credential;
use crate::domain::authentication::ports::CredentialRepository;
use crate::domain::seller::errors::SellerError;
use crate::domain::seller::models::EmailAddress;
use crate::domain::seller::models::NewSeller;
use crate::domain::seller::models::PersonName;
use crate::domain::seller::models::Seller;
use crate::domain::seller::models::SellerId;
use crate::domain::seller::ports::SellerRepository;

const EMAIL_UNIQUE_CONSTRAINT: &str = "sellers_email_key";

pub struct PostgresSellerRepository {
    pool: PgPool,
}

impl PostgresSellerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_seller(row: &PgRow) -> Result<Seller, SellerError> {
        let id: i64 = row.try_get("id").map_err(database_error)?;
        let first_name: String = row.try_get("first_name").map_err(database_error)?;
        let last_name: String = row.try_get("last_name").map_err(database_error)?;
        let email: String = row.try_get("email").map_err(database_error)?;
        let password_hash: String = row.try_get("password_hash").map_err(database_error)?;

        Ok(Seller {
            id: SellerId(id),
            first_name: PersonName::new(first_name)?,
            last_name: PersonName::new(last_name)?,
            email: EmailAddress::new(email)?,
            password_hash,
        })
    }

    async fn fetch_by_id(&self, id: &SellerId) -> Result<Option<Seller>, SellerError> {
        let row = sqlx::query(
            r#"
            SELECT id, first_name, last_name, email, password_hash
            FROM sellers
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        row.as_ref().map(Self::row_to_seller).transpose()
    }
}

fn database_error(err: sqlx::Error) -> SellerError {
    SellerError::DatabaseError(err.to_string())
}

fn write_error(err: sqlx::Error, email: &EmailAddress) -> SellerError {
    if let Some(db_err) = err.as_database_error() {
        if db_err.is_unique_violation() && db_err.constraint() == Some(EMAIL_UNIQUE_CONSTRAINT) {
            return SellerError::EmailAlreadyExists(email.as_str().to_string());
        }
    }
    database_error(err)
}

fn row_to_credential(row: &PgRow) -> Result<Credential, sqlx::Error> {
    Ok(Credential {
        seller_id: SellerId(row.try_get("id")?),
        email: row.try_get("email")?,
        password_hash: row.try_get("password_hash")?,
    })
}

fn auth_storage_error(err: SellerError) -> AuthError {
    AuthError::DatabaseError(err.to_string())
}

#[async_trait]
impl SellerRepository for PostgresSellerRepository {
    async fn create(&self, seller: NewSeller) -> Result<Seller, SellerError> {
        let row = sqlx::query(
            r#"
            INSERT INTO sellers (first_name, last_name, email, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(seller.first_name.as_str())
        .bind(seller.last_name.as_str())
        .bind(seller.email.as_str())
        .bind(&seller.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error(e, &seller.email))?;

        let id: i64 = row.try_get("id").map_err(database_error)?;

        Ok(Seller {
            id: SellerId(id),
            first_name: seller.first_name,
            last_name: seller.last_name,
            email: seller.email,
            password_hash: seller.password_hash,
        })
    }

    async fn find_by_id(&self, id: &SellerId) -> Result<Option<Seller>, SellerError> {
        self.fetch_by_id(id).await
    }

    async fn list_all(&self) -> Result<Vec<Seller>, SellerError> {
        let rows = sqlx::query(
            r#"
            SELECT id, first_name, last_name, email, password_hash
            FROM sellers
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        rows.iter().map(Self::row_to_seller).collect()
    }

    async fn update(&self, seller: Seller) -> Result<Seller, SellerError> {
        let result = sqlx::query(
            r#"
            UPDATE sellers
            SET first_name = $2, last_name = $3, email = $4, password_hash = $5
            WHERE id = $1
            "#,
        )
        .bind(seller.id.0)
        .bind(seller.first_name.as_str())
        .bind(seller.last_name.as_str())
        .bind(seller.email.as_str())
        .bind(&seller.password_hash)
        .execute(&self.pool)
        .await
        .map_err(|e| write_error(e, &seller.email))?;

        if result.rows_affected() == 0 {
            return Err(SellerError::NotFound(seller.id));
        }

        Ok(seller)
    }

    async fn delete(&self, id: &SellerId) -> Result<(), SellerError> {
        let result = sqlx::query(
            r#"
            DELETE FROM sellers
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(SellerError::NotFound(*id));
        }

        Ok(())
    }
}

#[async_trait]
impl CredentialRepository for PostgresSellerRepository {
    async fn find_credential_by_email(
        &self,
        email: &str,
    ) -> Result<Option<Credential>, AuthError> {
        let row = sqlx::query(
            r#"
            SELECT id, email, password_hash
            FROM sellers
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AuthError::DatabaseError(e.to_string()))?;

        row.as_ref()
            .map(row_to_credential)
            .transpose()
            .map_err(|e| AuthError::DatabaseError(e.to_string()))
    }

    async fn find_principal_by_id(&self, id: &SellerId) -> Result<Option<Seller>, AuthError> {
        self.fetch_by_id(id).await.map_err(auth_storage_error)
    }
}
