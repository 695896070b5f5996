use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::{NewPost, Post};
use crate::error::DomainError;
use crate::ports::CollectionStore;

/// Post operations over a single backing collection.
///
/// Same discipline as [`super::UserService`]: load all, scan linearly,
/// rewrite wholesale under the collection lock.
pub struct PostService {
    store: Arc<dyn CollectionStore<Post>>,
    lock: Mutex<()>,
}

impl PostService {
    pub fn new(store: Arc<dyn CollectionStore<Post>>) -> Self {
        Self {
            store,
            lock: Mutex::new(()),
        }
    }

    /// Every post in on-disk order.
    pub async fn list(&self) -> Result<Vec<Post>, DomainError> {
        let _guard = self.lock.lock().await;
        Ok(self.store.load().await?)
    }

    /// Append a post unconditionally. The embedded author snapshot is taken
    /// as given; it is not checked against the user collection.
    pub async fn create(&self, input: NewPost) -> Result<Post, DomainError> {
        input.validate()?;

        let _guard = self.lock.lock().await;
        let mut records = self.store.load().await?;
        let record = Post {
            post_id: input.post_id,
            content: input.content,
            created_at: input.created_at.unwrap_or_else(Utc::now),
            updated_at: None,
            author: input.author,
        };
        records.push(record.clone());
        self.store.save(&records).await?;

        tracing::info!(post_id = %record.post_id, "post created");
        Ok(record)
    }

    pub async fn get(&self, id: Uuid) -> Result<Post, DomainError> {
        let _guard = self.lock.lock().await;
        let records = self.store.load().await?;
        records
            .into_iter()
            .find(|r| r.post_id == id)
            .ok_or(DomainError::NotFound { entity: "post", id })
    }

    /// Remove the first record with this id, rewrite the collection, and
    /// return the removed record.
    pub async fn delete(&self, id: Uuid) -> Result<Post, DomainError> {
        let _guard = self.lock.lock().await;
        let mut records = self.store.load().await?;
        let position = records
            .iter()
            .position(|r| r.post_id == id)
            .ok_or(DomainError::NotFound { entity: "post", id })?;

        let removed = records.remove(position);
        self.store.save(&records).await?;

        tracing::info!(post_id = %id, "post deleted");
        Ok(removed)
    }

    /// Replace the stored record with the body, keeping replacement
    /// semantics aligned with user update except where the fields force a
    /// difference: the id comes from the path, `created_at` carries over
    /// from the stored record, and `updated_at` is stamped with server time.
    pub async fn update(&self, id: Uuid, input: NewPost) -> Result<Post, DomainError> {
        input.validate()?;

        let _guard = self.lock.lock().await;
        let mut records = self.store.load().await?;
        let position = records
            .iter()
            .position(|r| r.post_id == id)
            .ok_or(DomainError::NotFound { entity: "post", id })?;

        let record = Post {
            post_id: id,
            content: input.content,
            created_at: records[position].created_at,
            updated_at: Some(Utc::now()),
            author: input.author,
        };
        records[position] = record.clone();
        self.store.save(&records).await?;

        tracing::info!(post_id = %id, "post updated");
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::User;
    use crate::service::testing::FakeStore;

    fn service() -> (Arc<FakeStore<Post>>, PostService) {
        let store = Arc::new(FakeStore::empty());
        (store.clone(), PostService::new(store))
    }

    fn author() -> User {
        User {
            user_id: Uuid::new_v4(),
            email: "a@x.com".to_string(),
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            birth_date: None,
        }
    }

    fn input(content: &str) -> NewPost {
        NewPost {
            post_id: Uuid::new_v4(),
            content: content.to_string(),
            created_at: None,
            author: author(),
        }
    }

    #[tokio::test]
    async fn create_fills_created_at_and_leaves_updated_at_unset() {
        let (_, svc) = service();
        let before = Utc::now();

        let post = svc.create(input("hi")).await.unwrap();

        assert!(post.created_at >= before);
        assert!(post.updated_at.is_none());
    }

    #[tokio::test]
    async fn create_keeps_a_caller_supplied_timestamp() {
        let (_, svc) = service();
        let stamp = "2024-05-01T12:00:00Z".parse().unwrap();
        let mut new = input("hi");
        new.created_at = Some(stamp);

        let post = svc.create(new).await.unwrap();
        assert_eq!(post.created_at, stamp);
    }

    #[tokio::test]
    async fn get_and_delete_follow_linear_search_semantics() {
        let (_, svc) = service();
        let new = input("hi");
        let id = new.post_id;
        svc.create(new).await.unwrap();
        svc.create(input("other")).await.unwrap();

        assert_eq!(svc.get(id).await.unwrap().content, "hi");

        let removed = svc.delete(id).await.unwrap();
        assert_eq!(removed.post_id, id);
        assert_eq!(svc.list().await.unwrap().len(), 1);

        let err = svc.delete(id).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "post", .. }));
    }

    #[tokio::test]
    async fn update_replaces_content_and_stamps_updated_at() {
        let (store, svc) = service();
        let new = input("hi");
        let id = new.post_id;
        let created = svc.create(new).await.unwrap();

        let updated = svc.update(id, input("edited")).await.unwrap();

        assert_eq!(updated.post_id, id);
        assert_eq!(updated.content, "edited");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at.is_some());

        let stored = store.dump();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].content, "edited");
    }

    #[tokio::test]
    async fn update_of_absent_id_is_not_found() {
        let (_, svc) = service();
        let err = svc.update(Uuid::new_v4(), input("hi")).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "post", .. }));
    }

    #[tokio::test]
    async fn author_snapshot_is_stored_verbatim() {
        // The snapshot is denormalized: nothing ties it to the user
        // collection, so user-side mutations cannot reach it.
        let (store, svc) = service();
        let new = input("hi");
        let snapshot = new.author.clone();
        svc.create(new).await.unwrap();

        let stored = store.dump();
        assert_eq!(stored[0].author, snapshot);
    }
}
