//! # Generic Collection Actor
//!
//! This module defines the `CollectionActor`, the server half of a document collection. It owns
//! the documents, processes requests sequentially and fans changes out to live subscribers.

use crate::client::CollectionClient;
use crate::document::Document;
use crate::error::FrameworkError;
use crate::message::CollectionRequest;
use crate::subscription::{Change, ChangeKind, Snapshot, SnapshotFeed, Subscription};
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

struct Subscriber<T: Document> {
    filter: T::Filter,
    feed: SnapshotFeed<T>,
}

/// The generic actor that manages one collection of documents.
///
/// **Concurrency Model**:
/// Each collection processes its requests *sequentially* in its own task, so the store needs no
/// `Mutex`. Anything done inside a single request (a batch insert, an action that retires its
/// document) is atomic with respect to every other client of the collection.
///
/// # Usage Pattern
///
/// 1.  **Create**: `CollectionActor::new()` returns the actor and its client.
/// 2.  **Wire**: pass dependencies into `actor.run(context)`.
/// 3.  **Run**: spawn the run loop in a background task.
///
/// # Implementation Details
///
/// Documents live in a `BTreeMap` keyed by generated ids, so queries and snapshots come back in
/// insertion order. Ids come from a `u32` counter converted with `T::Id::from`.
///
/// * **Create / CreateBatch**: build every document (`from_create_params` + `on_create`) before
///   inserting any; a failure rejects the whole batch and no id is consumed.
/// * **Update / Action**: mutate in place, publish `Modified`. An action whose result
///   [`retires`](Document::retires_after) the document removes it and publishes `Removed`.
/// * **Delete**: `on_delete`, remove, publish `Removed`.
/// * **Subscribe**: deliver the current matching set as `Added`, then every later change that
///   matches the subscriber's filter.
pub struct CollectionActor<T: Document> {
    receiver: mpsc::Receiver<CollectionRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id: u32,
    subscribers: Vec<Subscriber<T>>,
}

impl<T: Document> CollectionActor<T> {
    /// Creates a new `CollectionActor` and its associated `CollectionClient`.
    ///
    /// `buffer_size` is the capacity of the request channel; clients wait when it is full.
    pub fn new(buffer_size: usize) -> (Self, CollectionClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id: 1,
            subscribers: Vec::new(),
        };
        let client = CollectionClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every document hook.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "OrderLine" instead of "food_ordering::model::order::OrderLine")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CollectionRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);

                    match Self::build(id.clone(), params, &context).await {
                        Ok(item) => {
                            self.next_id += 1;
                            self.store.insert(id.clone(), item.clone());
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            self.publish(vec![Change::new(ChangeKind::Added, item)]);
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(e));
                        }
                    }
                }
                CollectionRequest::CreateBatch { params, respond_to } => {
                    debug!(entity_type, count = params.len(), "CreateBatch");
                    let mut staged = Vec::with_capacity(params.len());
                    let mut failure = None;

                    for (offset, params) in params.into_iter().enumerate() {
                        let id = T::Id::from(self.next_id + offset as u32);
                        match Self::build(id, params, &context).await {
                            Ok(item) => staged.push(item),
                            Err(e) => {
                                failure = Some(e);
                                break;
                            }
                        }
                    }

                    if let Some(e) = failure {
                        warn!(entity_type, error = %e, "Batch rejected");
                        let _ = respond_to.send(Err(e));
                        continue;
                    }

                    self.next_id += staged.len() as u32;
                    let ids: Vec<T::Id> = staged.iter().map(|item| item.id().clone()).collect();
                    for item in &staged {
                        self.store.insert(item.id().clone(), item.clone());
                    }
                    info!(entity_type, count = ids.len(), size = self.store.len(), "Created batch");
                    self.publish(
                        staged
                            .into_iter()
                            .map(|item| Change::new(ChangeKind::Added, item))
                            .collect(),
                    );
                    let _ = respond_to.send(Ok(ids));
                }
                CollectionRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                CollectionRequest::Query { filter, respond_to } => {
                    let documents = matching(&self.store, &filter);
                    debug!(entity_type, ?filter, count = documents.len(), "Query");
                    let _ = respond_to.send(Ok(documents));
                }
                CollectionRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let outcome = match self.store.get_mut(&id) {
                        Some(item) => {
                            let updated = item.on_update(update, &context).await;
                            updated
                                .map(|_| item.clone())
                                .map_err(|e| FrameworkError::EntityError(Box::new(e)))
                        }
                        None => Err(FrameworkError::NotFound(id.to_string())),
                    };

                    match outcome {
                        Ok(item) => {
                            info!(entity_type, %id, "Updated");
                            self.publish(vec![Change::new(ChangeKind::Modified, item.clone())]);
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(e));
                        }
                    }
                }
                CollectionRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(item) = self.store.get(&id) {
                        if let Err(e) = item.on_delete(&context).await {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        if let Some(removed) = self.store.remove(&id) {
                            info!(entity_type, %id, size = self.store.len(), "Deleted");
                            self.publish(vec![Change::new(ChangeKind::Removed, removed)]);
                        }
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                CollectionRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let outcome = match self.store.get_mut(&id) {
                        Some(item) => {
                            let handled = item.handle_action(action, &context).await;
                            handled
                                .map(|result| (result, item.clone()))
                                .map_err(|e| FrameworkError::EntityError(Box::new(e)))
                        }
                        None => Err(FrameworkError::NotFound(id.to_string())),
                    };

                    match outcome {
                        Ok((result, item)) if T::retires_after(&result) => {
                            self.store.remove(&id);
                            info!(entity_type, %id, size = self.store.len(), "Retired");
                            self.publish(vec![Change::new(ChangeKind::Removed, item)]);
                            let _ = respond_to.send(Ok(result));
                        }
                        Ok((result, item)) => {
                            info!(entity_type, %id, "Action ok");
                            self.publish(vec![Change::new(ChangeKind::Modified, item)]);
                            let _ = respond_to.send(Ok(result));
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Action failed");
                            let _ = respond_to.send(Err(e));
                        }
                    }
                }
                CollectionRequest::Subscribe { filter, respond_to } => {
                    let (feed, subscription) = Subscription::channel();
                    let documents = matching(&self.store, &filter);
                    let changes = documents
                        .iter()
                        .cloned()
                        .map(|item| Change::new(ChangeKind::Added, item))
                        .collect();
                    feed.push(Snapshot { documents, changes });

                    self.subscribers.push(Subscriber { filter, feed });
                    info!(entity_type, subscribers = self.subscribers.len(), "Subscribed");
                    let _ = respond_to.send(Ok(subscription));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn build(id: T::Id, params: T::Create, context: &T::Context) -> Result<T, FrameworkError> {
        let mut item = T::from_create_params(id, params)
            .map_err(|e| FrameworkError::EntityError(Box::new(e)))?;
        item.on_create(context)
            .await
            .map_err(|e| FrameworkError::EntityError(Box::new(e)))?;
        Ok(item)
    }

    /// Deliver `changes` to every live subscriber whose filter matches at least one of them.
    fn publish(&mut self, changes: Vec<Change<T>>) {
        self.subscribers.retain(|subscriber| !subscriber.feed.is_closed());

        for subscriber in &self.subscribers {
            let relevant: Vec<Change<T>> = changes
                .iter()
                .filter(|change| change.document.matches(&subscriber.filter))
                .cloned()
                .collect();
            if relevant.is_empty() {
                continue;
            }
            let documents = matching(&self.store, &subscriber.filter);
            subscriber.feed.push(Snapshot {
                documents,
                changes: relevant,
            });
        }
    }
}

fn matching<T: Document>(store: &BTreeMap<T::Id, T>, filter: &T::Filter) -> Vec<T> {
    store
        .values()
        .filter(|item| item.matches(filter))
        .cloned()
        .collect()
}
