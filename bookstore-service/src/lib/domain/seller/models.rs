use std::fmt;
use std::str::FromStr;

use super::errors::EmailError;
use super::errors::PasswordPolicyError;
use super::errors::PersonNameError;
use super::errors::SellerIdError;
use crate::domain::book::models::Book;

/// Seller aggregate entity.
///
/// A seller is both a catalogue owner and the principal that signs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seller {
    pub id: SellerId,
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub email: EmailAddress,
    pub password_hash: String,
}

/// Seller unique identifier, assigned by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SellerId(pub i64);

impl SellerId {
    /// Parse a seller ID from its decimal form.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a positive integer
    pub fn from_string(s: &str) -> Result<Self, SellerIdError> {
        match s.parse::<i64>() {
            Ok(id) if id > 0 => Ok(SellerId(id)),
            _ => Err(SellerIdError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for SellerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// First or last name value type
///
/// Ensures the name is 3-100 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName(String);

impl PersonName {
    const MIN_LENGTH: usize = 3;
    const MAX_LENGTH: usize = 100;

    /// Create a new valid name.
    ///
    /// # Errors
    /// * `TooShort` - Name shorter than 3 characters
    /// * `TooLong` - Name longer than 100 characters
    pub fn new(name: String) -> Result<Self, PersonNameError> {
        let length = name.chars().count();
        if length < Self::MIN_LENGTH {
            Err(PersonNameError::TooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            })
        } else if length > Self::MAX_LENGTH {
            Err(PersonNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Plaintext password that passed the registration policy.
///
/// Never printed; `Debug` redacts the value.
#[derive(Clone, PartialEq, Eq)]
pub struct PlainPassword(String);

impl PlainPassword {
    const MIN_LENGTH: usize = 4;

    pub fn new(password: String) -> Result<Self, PasswordPolicyError> {
        if password.chars().count() < Self::MIN_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: Self::MIN_LENGTH,
            });
        }
        Ok(Self(password))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PlainPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PlainPassword(***)")
    }
}

/// Seller fields ready for insertion; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSeller {
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub email: EmailAddress,
    pub password_hash: String,
}

/// Seller together with the books it lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SellerWithBooks {
    pub seller: Seller,
    pub books: Vec<Book>,
}

/// Command to register a new seller with domain types
#[derive(Debug)]
pub struct CreateSellerCommand {
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub email: EmailAddress,
    pub password: PlainPassword,
}

/// Command to replace a seller's profile fields.
///
/// The password is not changed through this command.
#[derive(Debug)]
pub struct UpdateSellerCommand {
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub email: EmailAddress,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seller_id_from_string() {
        assert_eq!(SellerId::from_string("42"), Ok(SellerId(42)));
        assert!(SellerId::from_string("0").is_err());
        assert!(SellerId::from_string("-3").is_err());
        assert!(SellerId::from_string("a@x.com").is_err());
    }

    #[test]
    fn test_person_name_length() {
        assert!(PersonName::new("Ann".to_string()).is_ok());
        assert_eq!(
            PersonName::new("Al".to_string()),
            Err(PersonNameError::TooShort { min: 3, actual: 2 })
        );
        assert!(matches!(
            PersonName::new("x".repeat(101)),
            Err(PersonNameError::TooLong { max: 100, .. })
        ));
        // Counted in characters, not bytes.
        assert!(PersonName::new("Юля".to_string()).is_ok());
    }

    #[test]
    fn test_email_address() {
        assert!(EmailAddress::new("qwe@qwe.rty".to_string()).is_ok());
        assert!(EmailAddress::new("not-an-email".to_string()).is_err());
    }

    #[test]
    fn test_plain_password_policy_and_redaction() {
        assert!(PlainPassword::new("abc".to_string()).is_err());

        let password = PlainPassword::new("qwerty".to_string()).unwrap();
        assert_eq!(password.expose(), "qwerty");
        assert!(!format!("{:?}", password).contains("qwerty"));
    }
}
