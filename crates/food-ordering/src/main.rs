//! # Food Ordering Demo
//!
//! Runs one customer and one restaurant seller against the seeded document store:
//!
//! 1. The customer logs in, picks an open restaurant, searches the menu and fills the cart.
//! 2. Checkout writes the order lines and opens the status screen.
//! 3. The seller opens their desk and moves each line through
//!    `Unconfirmed -> Preparing Food -> Food Ready -> picked up`.
//! 4. The customer's status board reports every change.
//!
//! ```bash
//! RUST_LOG=info cargo run -p food-ordering
//! FOOD_SEED_PATH=./my-seed.json RUST_LOG=debug cargo run -p food-ordering
//! ```

use collection_actor::telemetry::setup_tracing;
use food_ordering::catalog::EntryPoint;
use food_ordering::config::Config;
use food_ordering::lifecycle::OrderingSystem;
use food_ordering::seed::SeedData;
use food_ordering::AppError;
use tracing::{error, info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    setup_tracing();

    let config = Config::load()?;
    let seed = SeedData::load_or_demo(config.seed_path.as_deref())?;
    let system = OrderingSystem::start(config, seed).await?;

    let span = tracing::info_span!("customer");
    let mut board = async {
        let mut customer = system.session();
        let login = customer.login("customer", "1234").await?;
        info!(notice = %login.notice, "Logged in");

        let catalog = customer.catalog()?;
        let list = catalog.list_restaurants().await?;
        for card in list.cards() {
            info!(
                rest_id = %card.rest_id,
                name = %card.rest_name,
                open = card.is_open(),
                image = %catalog.image_url(&card.rest_picture),
                "Restaurant card"
            );
        }

        // Closed restaurants never open, whichever way they are tapped
        if let Some(closed) = list.cards().iter().find(|r| !r.is_open()) {
            if let Err(e) = list.select(closed.rest_id, EntryPoint::Marker) {
                warn!(notice = %e.notice("open restaurant"), "Selection rejected");
            }
        }

        let Some(open) = list.cards().first() else {
            return Err(AppError::NotFound("open restaurant".into()));
        };
        let selection = list.select(open.rest_id, EntryPoint::Card)?;
        let menu = catalog
            .open_menu(selection.rest_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("menu {}", selection.rest_id)))?;
        info!(restaurant = %menu.restaurant.rest_name, dishes = menu.items.len(), "Menu opened");

        let cart = customer.cart()?;
        for dish in menu.filter("") {
            info!(notice = %cart.add(dish.clone()), "Cart");
        }
        if cart.len() > 1 {
            info!(notice = %cart.remove_at(cart.len() - 1)?, "Cart");
        }
        if let Some(lines) = customer.cart_lines()?.load(cart.entries()).await {
            for line in lines {
                info!(
                    index = line.index,
                    dish = %line.item.food_name,
                    restaurant = %line.restaurant_name,
                    "Cart line"
                );
            }
        }
        info!(total = cart.total_price(), "Cart total");

        let receipt = customer.checkout()?.submit().await?;
        info!(notice = %receipt.notice, screen = ?receipt.navigate_to, "Checked out");

        let mut board = customer.status_board().await?;
        if let Some(update) = board.next().await {
            for row in &update.rows {
                info!(
                    order = %row.order_number,
                    dish = row.food_name().unwrap_or("?"),
                    status = %row.status,
                    "Status"
                );
            }
        }
        customer.logout();
        Ok::<_, AppError>(board)
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("seller");
    async {
        let mut seller = system.session();
        let login = seller.login("seller1", "1234").await?;
        info!(notice = %login.notice, screen = ?login.navigate_to, "Logged in");

        let desk = seller.staff_desk()?;
        let mut queue = desk.open_queue().await?;

        while let Some(rows) = queue.next().await {
            let Some(row) = rows.first() else {
                info!("Queue empty");
                break;
            };
            info!(
                order = %row.order_number,
                status = %row.status,
                button = row.action_label(),
                "Pressing"
            );
            match desk.advance(row).await {
                Ok(notice) => info!(%notice, "Staff"),
                Err(e) => error!(error = %e, notice = %e.notice("update the order"), "Staff"),
            }

            while let Some(update) = board.next_ready().await {
                for notice in update.notices {
                    info!(%notice, "Customer notified");
                }
            }
        }

        queue.close();
        seller.logout();
        Ok::<_, AppError>(())
    }
    .instrument(span)
    .await?;

    board.close();
    system.shutdown().await?;
    info!("Application completed successfully");
    Ok(())
}
