//! # Generic Client
//!
//! This module defines the generic client for communicating with collection actors.

use crate::document::Document;
use crate::error::FrameworkError;
use crate::message::CollectionRequest;
use crate::subscription::Subscription;
use tokio::sync::{mpsc, oneshot};

/// ## CollectionClient
///
/// A type-safe, async handle on a `CollectionActor<T>`. Requests travel over a Tokio mpsc
/// channel and results come back on oneshot channels. Cloning only clones the sender, so one
/// client can be shared by every view that reads the collection.
pub struct CollectionClient<T: Document> {
    sender: mpsc::Sender<CollectionRequest<T>>,
}

impl<T: Document> Clone for CollectionClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: Document> CollectionClient<T> {
    pub fn new(sender: mpsc::Sender<CollectionRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<R, FrameworkError>>) -> CollectionRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, params: T::Create) -> Result<T::Id, FrameworkError> {
        self.request(|respond_to| CollectionRequest::Create { params, respond_to })
            .await
    }

    /// Insert every document or none of them.
    pub async fn create_batch(&self, params: Vec<T::Create>) -> Result<Vec<T::Id>, FrameworkError> {
        self.request(|respond_to| CollectionRequest::CreateBatch { params, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| CollectionRequest::Get { id, respond_to })
            .await
    }

    /// All documents matching `filter`, in insertion order.
    pub async fn query(&self, filter: T::Filter) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| CollectionRequest::Query { filter, respond_to })
            .await
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, FrameworkError> {
        self.request(|respond_to| CollectionRequest::Update {
            id,
            update,
            respond_to,
        })
        .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        self.request(|respond_to| CollectionRequest::Delete { id, respond_to })
            .await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError> {
        self.request(|respond_to| CollectionRequest::Action {
            id,
            action,
            respond_to,
        })
        .await
    }

    /// Open a live subscription on the documents matching `filter`.
    pub async fn subscribe(&self, filter: T::Filter) -> Result<Subscription<T>, FrameworkError> {
        self.request(|respond_to| CollectionRequest::Subscribe { filter, respond_to })
            .await
    }
}
