use crate::model::{document_key, RestId};
use serde::{Deserialize, Serialize};

document_key!(
    /// Key of a document in the `user` collection.
    UserKey,
    "user"
);

/// What a signed-in user is allowed to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Seller,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Customer => write!(f, "customer"),
            Role::Seller => write!(f, "seller"),
        }
    }
}

/// A registered account.
///
/// # Actor Framework
/// Implements [`Document`](collection_actor::Document) in
/// [`user_actor::entity`](crate::user_actor::entity); the collection is read-only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: UserKey,
    pub username: String,
    pub password: String,
    pub role: Role,
    /// Restaurant a seller works for.
    #[serde(rename = "rest_ID", skip_serializing_if = "Option::is_none")]
    pub rest_id: Option<RestId>,
}

/// Payload for inserting a user (seed data).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    pub username: String,
    pub password: String,
    pub role: Role,
    #[serde(rename = "rest_ID", default, skip_serializing_if = "Option::is_none")]
    pub rest_id: Option<RestId>,
}

/// Equality filter on the `user` collection. `None` fields are unconstrained.
#[derive(Clone, Default, PartialEq)]
pub struct UserFilter {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl UserFilter {
    pub fn credentials(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            password: Some(password.into()),
        }
    }
}

// Filters end up in query spans; keep the password out of the logs.
impl std::fmt::Debug for UserFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserFilter")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}
