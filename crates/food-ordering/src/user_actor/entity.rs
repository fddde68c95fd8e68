//! Document trait implementation for the User domain type.
//!
//! Users are reference data: they are inserted from seed files and only ever queried by
//! credentials afterwards.

use crate::model::{ReadOnly, User, UserCreate, UserFilter, UserKey};
use crate::user_actor::UserError;
use async_trait::async_trait;
use collection_actor::Document;

#[async_trait]
impl Document for User {
    type Id = UserKey;
    type Create = UserCreate;
    type Update = ReadOnly;
    type Filter = UserFilter;
    type Action = ReadOnly;
    type ActionResult = ();
    type Context = ();
    type Error = UserError;

    fn from_create_params(id: UserKey, params: UserCreate) -> Result<Self, Self::Error> {
        if params.username.trim().is_empty() {
            return Err(UserError::ValidationError("username is empty".into()));
        }
        Ok(Self {
            id,
            username: params.username,
            password: params.password,
            role: params.role,
            rest_id: params.rest_id,
        })
    }

    fn id(&self) -> &UserKey {
        &self.id
    }

    fn matches(&self, filter: &UserFilter) -> bool {
        filter.username.as_ref().map_or(true, |u| *u == self.username)
            && filter.password.as_ref().map_or(true, |p| *p == self.password)
    }

    async fn on_update(&mut self, update: ReadOnly, _ctx: &()) -> Result<(), Self::Error> {
        match update {}
    }

    async fn handle_action(&mut self, action: ReadOnly, _ctx: &()) -> Result<(), Self::Error> {
        match action {}
    }
}
