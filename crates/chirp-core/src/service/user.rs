use std::sync::Arc;

use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::{NewUser, User, UserRecord};
use crate::error::DomainError;
use crate::ports::CollectionStore;

/// Outcome of a credential check.
///
/// A rejected login is not an error: the HTTP layer answers 200 either way
/// and only the response message distinguishes the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Accepted,
    Rejected,
}

/// User operations over a single backing collection.
///
/// Every operation loads the full collection, scans it linearly, and for
/// mutations rewrites it wholesale.
pub struct UserService {
    store: Arc<dyn CollectionStore<UserRecord>>,
    lock: Mutex<()>,
}

impl UserService {
    pub fn new(store: Arc<dyn CollectionStore<UserRecord>>) -> Self {
        Self {
            store,
            lock: Mutex::new(()),
        }
    }

    /// Register a user by appending the record unconditionally.
    ///
    /// Neither the id nor the email is checked for duplicates; two signups
    /// with the same id both land in the collection.
    pub async fn sign_up(&self, input: NewUser) -> Result<User, DomainError> {
        input.validate()?;

        let _guard = self.lock.lock().await;
        let mut records = self.store.load().await?;
        let record = UserRecord::from(input);
        let public = record.public();
        records.push(record);
        self.store.save(&records).await?;

        tracing::info!(user_id = %public.user_id, "user registered");
        Ok(public)
    }

    /// Check credentials by exact match on email and plaintext password.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, DomainError> {
        let _guard = self.lock.lock().await;
        let records = self.store.load().await?;

        let accepted = records
            .iter()
            .any(|r| r.email == email && r.password == password);

        if accepted {
            Ok(LoginOutcome::Accepted)
        } else {
            tracing::debug!("login rejected");
            Ok(LoginOutcome::Rejected)
        }
    }

    /// Every user in on-disk order, public views.
    pub async fn list(&self) -> Result<Vec<User>, DomainError> {
        let _guard = self.lock.lock().await;
        let records = self.store.load().await?;
        Ok(records.iter().map(UserRecord::public).collect())
    }

    pub async fn get(&self, id: Uuid) -> Result<User, DomainError> {
        let _guard = self.lock.lock().await;
        let records = self.store.load().await?;
        records
            .iter()
            .find(|r| r.user_id == id)
            .map(UserRecord::public)
            .ok_or(DomainError::NotFound { entity: "user", id })
    }

    /// Remove the first record with this id, rewrite the collection, and
    /// return the removed record.
    pub async fn delete(&self, id: Uuid) -> Result<User, DomainError> {
        let _guard = self.lock.lock().await;
        let mut records = self.store.load().await?;
        let position = records
            .iter()
            .position(|r| r.user_id == id)
            .ok_or(DomainError::NotFound { entity: "user", id })?;

        let removed = records.remove(position);
        self.store.save(&records).await?;

        tracing::info!(user_id = %id, "user deleted");
        Ok(removed.public())
    }

    /// Replace the record at the matched position with the input wholesale.
    ///
    /// The stored record is built from the body, id included, so a body
    /// carrying a different id than the matched one renames the record. The
    /// return value is the record as written.
    pub async fn update(&self, id: Uuid, input: NewUser) -> Result<User, DomainError> {
        input.validate()?;

        let _guard = self.lock.lock().await;
        let mut records = self.store.load().await?;
        let position = records
            .iter()
            .position(|r| r.user_id == id)
            .ok_or(DomainError::NotFound { entity: "user", id })?;

        let record = UserRecord::from(input);
        let public = record.public();
        records[position] = record;
        self.store.save(&records).await?;

        tracing::info!(user_id = %id, "user updated");
        Ok(public)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::service::testing::FakeStore;

    fn service() -> (Arc<FakeStore<UserRecord>>, UserService) {
        let store = Arc::new(FakeStore::empty());
        (store.clone(), UserService::new(store))
    }

    fn input(email: &str) -> NewUser {
        NewUser {
            user_id: Uuid::new_v4(),
            email: email.to_string(),
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            birth_date: None,
            password: "password1".to_string(),
        }
    }

    #[tokio::test]
    async fn sign_up_then_get_round_trips() {
        let (_, svc) = service();
        let new = input("a@x.com");
        let id = new.user_id;

        let created = svc.sign_up(new).await.unwrap();
        assert_eq!(created.user_id, id);

        let fetched = svc.get(id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn sign_up_rejects_invalid_input() {
        let (store, svc) = service();
        let mut new = input("a@x.com");
        new.password = "short".to_string();

        let err = svc.sign_up(new).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(store.dump().is_empty());
    }

    #[tokio::test]
    async fn duplicate_ids_are_not_rejected() {
        let (_, svc) = service();
        let mut first = input("a@x.com");
        let second = input("b@x.com");
        first.user_id = second.user_id;

        svc.sign_up(first).await.unwrap();
        svc.sign_up(second).await.unwrap();

        assert_eq!(svc.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn login_matches_on_email_and_password() {
        let (_, svc) = service();
        svc.sign_up(input("a@x.com")).await.unwrap();

        let ok = svc.login("a@x.com", "password1").await.unwrap();
        assert_eq!(ok, LoginOutcome::Accepted);

        let wrong_password = svc.login("a@x.com", "password2").await.unwrap();
        assert_eq!(wrong_password, LoginOutcome::Rejected);

        let unknown_email = svc.login("b@x.com", "password1").await.unwrap();
        assert_eq!(unknown_email, LoginOutcome::Rejected);
    }

    #[tokio::test]
    async fn delete_returns_the_record_then_not_found() {
        let (_, svc) = service();
        let new = input("a@x.com");
        let id = new.user_id;
        svc.sign_up(new).await.unwrap();

        let removed = svc.delete(id).await.unwrap();
        assert_eq!(removed.user_id, id);

        let err = svc.get(id).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "user", .. }));

        // A repeated delete of the same id stays NotFound.
        let err = svc.delete(id).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "user", .. }));
    }

    #[tokio::test]
    async fn update_replaces_the_record_and_returns_the_stored_body() {
        let (store, svc) = service();
        let original = input("a@x.com");
        let id = original.user_id;
        svc.sign_up(original).await.unwrap();

        let mut replacement = input("new@x.com");
        replacement.user_id = id;
        replacement.first_name = "Renamed".to_string();

        let updated = svc.update(id, replacement).await.unwrap();
        assert_eq!(updated.email, "new@x.com");
        assert_eq!(updated.first_name, "Renamed");

        let stored = store.dump();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].email, "new@x.com");
    }

    #[tokio::test]
    async fn update_of_absent_id_is_not_found() {
        let (_, svc) = service();
        let err = svc.update(Uuid::new_v4(), input("a@x.com")).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "user", .. }));
    }

    #[tokio::test]
    async fn store_failure_propagates() {
        let store: Arc<FakeStore<UserRecord>> = Arc::new(FakeStore::failing());
        let svc = UserService::new(store);

        let err = svc.list().await.unwrap_err();
        assert!(matches!(err, DomainError::Store(StoreError::Missing(_))));
    }
}
