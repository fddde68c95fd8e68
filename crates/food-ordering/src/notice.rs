//! User-visible notices and navigation targets.
//!
//! Operations that the screens would react to (a toast, an alert, a screen change) return
//! these values instead of rendering anything, so a front end can present them however it
//! likes.

use crate::model::{OrderNumber, OrderStatus, RestId, Role};
use std::fmt::Display;

/// Screens an operation can send the user to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    RestaurantList,
    Menu(RestId),
    Cart,
    Status,
    /// Staff fulfillment desk for one restaurant.
    Seller(RestId),
}

/// A short message for the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Welcome { username: String, role: Role },
    LoginFailed,
    RestaurantClosed { rest_id: RestId },
    AddedToCart { food_name: String },
    RemovedFromCart { food_name: String },
    OrderConfirmed { order_number: OrderNumber },
    StatusChanged {
        order_number: OrderNumber,
        food_name: Option<String>,
        status: OrderStatus,
    },
    OrderCompleted { order_number: OrderNumber },
    /// Generic failure shown after an error was logged.
    Failure { action: &'static str },
}

impl Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::Welcome { username, role } => write!(f, "Welcome {username} (role: {role})"),
            Notice::LoginFailed => write!(f, "Login failed: invalid username or password"),
            Notice::RestaurantClosed { rest_id } => {
                write!(f, "Restaurant {rest_id} is closed right now")
            }
            Notice::AddedToCart { food_name } => write!(f, "{food_name} was added to the cart"),
            Notice::RemovedFromCart { food_name } => {
                write!(f, "{food_name} was removed from the cart")
            }
            Notice::OrderConfirmed { order_number } => write!(
                f,
                "Order {order_number} confirmed, the kitchen is on it. Follow its status."
            ),
            Notice::StatusChanged {
                order_number,
                food_name: Some(food_name),
                status,
            } => write!(f, "Order {order_number} {food_name}: {status}"),
            Notice::StatusChanged {
                order_number,
                food_name: None,
                status,
            } => write!(f, "Order {order_number}: {status}"),
            Notice::OrderCompleted { order_number } => write!(f, "Order {order_number} completed"),
            Notice::Failure { action } => {
                write!(f, "Something went wrong: could not {action}. Please try again.")
            }
        }
    }
}
