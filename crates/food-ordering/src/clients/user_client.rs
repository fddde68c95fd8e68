//! # User Client
//!
//! Provides a high‑level API for interacting with the `User` actor.
use crate::model::{User, UserCreate, UserFilter, UserKey};
use crate::user_actor::UserError;
use async_trait::async_trait;
use collection_actor::{CollectionClient, DocumentClient, FrameworkError};
use tracing::{debug, instrument, warn};

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: CollectionClient<User>,
}

impl UserClient {
    pub fn new(inner: CollectionClient<User>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl DocumentClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &CollectionClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        UserError::from(e)
    }
}

impl UserClient {
    /// Insert accounts, all or none.
    #[instrument(skip(self, users), fields(count = users.len()))]
    pub async fn insert_all(&self, users: Vec<UserCreate>) -> Result<Vec<UserKey>, UserError> {
        debug!("Sending request");
        self.inner.create_batch(users).await.map_err(UserError::from)
    }

    /// The account matching both fields, if any.
    #[instrument(skip(self, password))]
    pub async fn find_by_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, UserError> {
        debug!("Sending request");
        let mut matches = self
            .query(UserFilter::credentials(username, password))
            .await?;
        if matches.len() > 1 {
            warn!(count = matches.len(), "Duplicate accounts, using the first");
        }
        Ok(if matches.is_empty() {
            None
        } else {
            Some(matches.swap_remove(0))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Role;
    use collection_actor::mock::{create_mock_client, expect_query, MockClient};

    fn seller() -> User {
        User {
            id: UserKey(2),
            username: "nok".into(),
            password: "pw".into(),
            role: Role::Seller,
            rest_id: Some(crate::model::RestId(1)),
        }
    }

    #[tokio::test]
    async fn test_find_by_credentials_filters_on_both_fields() {
        let (client, mut receiver) = create_mock_client::<User>(10);
        let user_client = UserClient::new(client);

        let task =
            tokio::spawn(async move { user_client.find_by_credentials("nok", "pw").await });

        let (filter, responder) = expect_query(&mut receiver)
            .await
            .expect("Expected Query request");
        assert_eq!(filter, UserFilter::credentials("nok", "pw"));
        responder.send(Ok(vec![seller()])).unwrap();

        let found = task.await.unwrap().unwrap();
        assert_eq!(found, Some(seller()));
    }

    #[tokio::test]
    async fn test_find_by_credentials_without_match() {
        let mut mock = MockClient::<User>::new();
        mock.expect_query().return_ok(vec![]);

        let user_client = UserClient::new(mock.client());
        let found = user_client.find_by_credentials("nok", "wrong").await.unwrap();
        assert!(found.is_none());
        mock.verify();
    }

    #[tokio::test]
    async fn test_store_failure_maps_to_communication_error() {
        let mut mock = MockClient::<User>::new();
        mock.expect_query().return_err(FrameworkError::ActorClosed);

        let user_client = UserClient::new(mock.client());
        let result = user_client.find_by_credentials("nok", "pw").await;
        assert!(matches!(
            result,
            Err(UserError::ActorCommunicationError(_))
        ));
    }
}
