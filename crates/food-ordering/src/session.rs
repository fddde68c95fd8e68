//! # Session & Auth Gate
//!
//! A session starts signed out with an empty cart. Logging in looks the credentials up in the
//! `user` collection; the role decides which capabilities the session hands out:
//!
//! | Capability | Customer | Seller |
//! |------------|----------|--------|
//! | [`Session::catalog`] | yes | yes |
//! | [`Session::cart`], [`Session::checkout`], [`Session::status_board`] | yes | no |
//! | [`Session::staff_desk`] | no | yes, for their own restaurant |
//!
//! Only the staff desk can advance an order, so the customer side has no way to write a
//! status. Logging in starts with an empty cart; logging out drops the principal and clears
//! the cart.

use crate::cart::{Cart, CartLines};
use crate::catalog::Catalog;
use crate::checkout::Checkout;
use crate::error::AppError;
use crate::fulfillment::StaffDesk;
use crate::lifecycle::Services;
use crate::model::{RestId, Role};
use crate::notice::{Notice, Screen};
use crate::status::StatusBoard;
use crate::user_actor::UserError;
use tracing::{info, instrument, warn};

/// Who is signed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Principal {
    Customer { username: String },
    Seller { username: String, rest_id: RestId },
}

impl Principal {
    pub fn role(&self) -> Role {
        match self {
            Principal::Customer { .. } => Role::Customer,
            Principal::Seller { .. } => Role::Seller,
        }
    }

    pub fn username(&self) -> &str {
        match self {
            Principal::Customer { username } | Principal::Seller { username, .. } => username,
        }
    }
}

/// Outcome of a successful login.
#[derive(Debug, Clone, PartialEq)]
pub struct Login {
    pub principal: Principal,
    pub notice: Notice,
    pub navigate_to: Screen,
}

pub struct Session {
    services: Services,
    cart: Cart,
    principal: Option<Principal>,
}

impl Session {
    pub fn new(services: Services) -> Self {
        Self {
            services,
            cart: Cart::new(),
            principal: None,
        }
    }

    /// Sign in with an empty cart. On failure the session is left exactly as it was.
    #[instrument(skip(self, password))]
    pub async fn login(&mut self, username: &str, password: &str) -> Result<Login, AppError> {
        let user = self
            .services
            .users
            .find_by_credentials(username, password)
            .await?
            .ok_or(UserError::InvalidCredentials)
            .inspect_err(|_| warn!("Login failed"))?;

        let principal = match (user.role, user.rest_id) {
            (Role::Customer, _) => Principal::Customer {
                username: user.username,
            },
            (Role::Seller, Some(rest_id)) => Principal::Seller {
                username: user.username,
                rest_id,
            },
            (Role::Seller, None) => {
                warn!("Seller account without restaurant");
                return Err(UserError::MissingRestaurant(user.username).into());
            }
        };

        let navigate_to = match &principal {
            Principal::Customer { .. } => Screen::RestaurantList,
            Principal::Seller { rest_id, .. } => Screen::Seller(*rest_id),
        };
        let notice = Notice::Welcome {
            username: principal.username().to_string(),
            role: principal.role(),
        };
        info!(role = %principal.role(), "Logged in");

        // A login always starts a fresh session, even without a logout in between
        self.cart.clear();
        self.principal = Some(principal.clone());
        Ok(Login {
            principal,
            notice,
            navigate_to,
        })
    }

    /// Sign out and empty the cart.
    pub fn logout(&mut self) -> Screen {
        if let Some(principal) = self.principal.take() {
            info!(username = principal.username(), "Logged out");
        }
        self.cart.clear();
        Screen::Login
    }

    pub fn principal(&self) -> Option<&Principal> {
        self.principal.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.principal.is_some()
    }

    fn require_customer(&self) -> Result<(), AppError> {
        match &self.principal {
            Some(Principal::Customer { .. }) => Ok(()),
            Some(Principal::Seller { .. }) => Err(AppError::Forbidden("customers only")),
            None => Err(AppError::Forbidden("not logged in")),
        }
    }

    /// Restaurant and menu browsing.
    pub fn catalog(&self) -> Result<Catalog, AppError> {
        if !self.is_authenticated() {
            return Err(AppError::Forbidden("not logged in"));
        }
        Ok(Catalog::new(
            self.services.restaurants.clone(),
            self.services.menu.clone(),
            self.services.images.clone(),
        ))
    }

    /// The customer's cart.
    pub fn cart(&self) -> Result<&Cart, AppError> {
        self.require_customer()?;
        Ok(&self.cart)
    }

    /// Loader for the cart screen's rows.
    pub fn cart_lines(&self) -> Result<CartLines, AppError> {
        self.require_customer()?;
        Ok(CartLines::new(
            self.services.restaurants.clone(),
            self.services.images.clone(),
        ))
    }

    pub fn checkout(&self) -> Result<Checkout, AppError> {
        self.require_customer()?;
        Ok(Checkout::new(
            self.services.orders.clone(),
            self.services.sequence.clone(),
            self.cart.clone(),
        ))
    }

    /// Live order status for the customer.
    pub async fn status_board(&self) -> Result<StatusBoard, AppError> {
        self.require_customer()?;
        StatusBoard::open(
            &self.services.orders,
            self.services.menu.clone(),
            self.services.images.clone(),
        )
        .await
    }

    /// The seller's fulfillment desk, bound to their restaurant.
    pub fn staff_desk(&self) -> Result<StaffDesk, AppError> {
        match &self.principal {
            Some(Principal::Seller { rest_id, .. }) => Ok(StaffDesk::new(
                *rest_id,
                self.services.orders.clone(),
                self.services.menu.clone(),
                self.services.images.clone(),
            )),
            Some(Principal::Customer { .. }) => Err(AppError::Forbidden("sellers only")),
            None => Err(AppError::Forbidden("not logged in")),
        }
    }
}
