//! # Generic Messages
//!
//! Message types exchanged between a `CollectionClient` and its `CollectionActor`.

use crate::document::Document;
use crate::error::FrameworkError;
use crate::subscription::Subscription;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to a collection actor.
///
/// The variants are the document-store surface the application consumes: CRUD, an atomic
/// multi-document insert, equality queries, custom actions and live subscriptions.
#[derive(Debug)]
pub enum CollectionRequest<T: Document> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    /// All-or-nothing insert of several documents.
    CreateBatch {
        params: Vec<T::Create>,
        respond_to: Response<Vec<T::Id>>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Query {
        filter: T::Filter,
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    Subscribe {
        filter: T::Filter,
        respond_to: Response<Subscription<T>>,
    },
}
