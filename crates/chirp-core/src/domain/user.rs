use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Public user view - what the endpoints return and what gets embedded into
/// a post as the author snapshot. Never carries the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
}

impl User {
    /// Shape-check an author snapshot.
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_email(&self.email)?;
        validate_name("first_name", &self.first_name)?;
        validate_name("last_name", &self.last_name)
    }
}

/// Persisted user record - the on-disk form, password stored verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub user_id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
    pub password: String,
}

impl UserRecord {
    /// The password-free view of this record.
    pub fn public(&self) -> User {
        User {
            user_id: self.user_id,
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            birth_date: self.birth_date,
        }
    }
}

/// Signup/update input. The caller assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub user_id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
    pub password: String,
}

impl NewUser {
    /// Shape-check the input. Ids are taken on trust: nothing rejects a
    /// collision with an existing record.
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_email(&self.email)?;
        validate_name("first_name", &self.first_name)?;
        validate_name("last_name", &self.last_name)?;
        let len = self.password.chars().count();
        if !(8..=64).contains(&len) {
            return Err(DomainError::Validation(
                "password must be 8 to 64 characters".to_string(),
            ));
        }
        Ok(())
    }
}

impl From<NewUser> for UserRecord {
    fn from(input: NewUser) -> Self {
        Self {
            user_id: input.user_id,
            email: input.email,
            first_name: input.first_name,
            last_name: input.last_name,
            birth_date: input.birth_date,
            password: input.password,
        }
    }
}

fn validate_email(email: &str) -> Result<(), DomainError> {
    let ok = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    };
    if ok {
        Ok(())
    } else {
        Err(DomainError::Validation(format!(
            "invalid email address: {email}"
        )))
    }
}

fn validate_name(field: &'static str, value: &str) -> Result<(), DomainError> {
    let len = value.chars().count();
    if !(1..=50).contains(&len) {
        return Err(DomainError::Validation(format!(
            "{field} must be 1 to 50 characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> NewUser {
        NewUser {
            user_id: Uuid::new_v4(),
            email: "a@x.com".to_string(),
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            birth_date: None,
            password: "password1".to_string(),
        }
    }

    #[test]
    fn accepts_well_formed_input() {
        assert!(input().validate().is_ok());
    }

    #[test]
    fn rejects_bad_emails() {
        for email in ["", "nodomain", "@x.com", "a@nodot"] {
            let mut user = input();
            user.email = email.to_string();
            assert!(user.validate().is_err(), "accepted {email:?}");
        }
    }

    #[test]
    fn rejects_out_of_range_password() {
        let mut user = input();
        user.password = "short".to_string();
        assert!(user.validate().is_err());
        user.password = "x".repeat(65);
        assert!(user.validate().is_err());
        user.password = "x".repeat(64);
        assert!(user.validate().is_ok());
    }

    #[test]
    fn rejects_empty_or_oversized_names() {
        let mut user = input();
        user.first_name = String::new();
        assert!(user.validate().is_err());
        user.first_name = "x".repeat(51);
        assert!(user.validate().is_err());
    }

    #[test]
    fn public_view_has_no_password_field() {
        let record = UserRecord::from(input());
        let json = serde_json::to_value(record.public()).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["email"], "a@x.com");
    }

    #[test]
    fn record_serializes_password_verbatim() {
        let record = UserRecord::from(input());
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["password"], "password1");
    }
}
