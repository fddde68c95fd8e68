//! # DocumentClient Trait
//!
//! Common interface for collection-specific clients: default `get`, `query` and `delete`
//! methods built on top of a generic `CollectionClient`, with errors mapped into the
//! collection's own error type.
use crate::{CollectionClient, Document, FrameworkError};
use async_trait::async_trait;

/// Trait for collection-specific clients to inherit the standard read/delete operations.
///
/// # Example
///
/// ```rust
/// use collection_actor::{CollectionClient, Document, DocumentClient, FrameworkError};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)]
/// struct Note { id: u32, text: String }
/// #[derive(Debug)] struct NoteCreate { text: String }
/// #[derive(Debug)] enum NoteUpdate {}
/// #[derive(Debug)] enum NoteAction {}
/// #[derive(Debug, thiserror::Error)] #[error("{0}")] struct NoteError(String);
///
/// #[async_trait]
/// impl Document for Note {
///     type Id = u32;
///     type Create = NoteCreate;
///     type Update = NoteUpdate;
///     type Filter = ();
///     type Action = NoteAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = NoteError;
///
///     fn from_create_params(id: u32, params: NoteCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id, text: params.text })
///     }
///     fn id(&self) -> &u32 { &self.id }
///     fn matches(&self, _: &()) -> bool { true }
///     async fn on_update(&mut self, update: NoteUpdate, _: &()) -> Result<(), Self::Error> { match update {} }
///     async fn handle_action(&mut self, action: NoteAction, _: &()) -> Result<(), Self::Error> { match action {} }
/// }
///
/// struct NoteClient {
///     inner: CollectionClient<Note>,
/// }
///
/// #[async_trait]
/// impl DocumentClient<Note> for NoteClient {
///     type Error = NoteError;
///
///     fn inner(&self) -> &CollectionClient<Note> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         NoteError(e.to_string())
///     }
/// }
///
/// async fn usage(client: NoteClient) {
///     // get(), query() and delete() are provided automatically
///     let _ = client.get(1).await;
///     let _ = client.query(()).await;
///     let _ = client.delete(1).await;
/// }
/// ```
#[async_trait]
pub trait DocumentClient<T: Document>: Send + Sync {
    /// The collection-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic CollectionClient.
    fn inner(&self) -> &CollectionClient<T>;

    /// Map framework errors to the collection error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a document by key.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every document matching `filter`.
    #[tracing::instrument(skip(self))]
    async fn query(&self, filter: T::Filter) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().query(filter).await.map_err(Self::map_error)
    }

    /// Delete a document by key.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
