use collection_actor::mock::MockClient;
use collection_actor::{Change, ChangeKind, Snapshot};
use food_ordering::clients::{MenuClient, OrderClient};
use food_ordering::config::{Config, ImageUrls};
use food_ordering::model::{
    FoodId, MenuItem, MenuItemKey, OrderLine, OrderLineKey, OrderNumber, OrderStatus, RestId,
};
use food_ordering::notice::Notice;
use food_ordering::status::StatusBoard;

fn line(key: u32, order_number: u32, food_id: u32, status: OrderStatus) -> OrderLine {
    OrderLine {
        id: OrderLineKey(key),
        food_id: FoodId(food_id),
        rest_id: RestId(1),
        order_number: OrderNumber(order_number),
        status,
    }
}

fn dish(food_id: u32, name: &str) -> MenuItem {
    MenuItem {
        id: MenuItemKey(food_id),
        food_id: FoodId(food_id),
        rest_id: RestId(1),
        food_name: name.into(),
        food_price: 50.0,
        food_picture: format!("pic{food_id}"),
    }
}

/// Status view driven by a mocked order collection and a mocked menu.
///
/// Pattern: Mocks only
/// - Order snapshots are pushed by hand through the subscription feed
/// - Every delivery costs exactly one menu query
#[tokio::test]
async fn test_status_board_reports_modified_lines() {
    let mut orders = MockClient::<OrderLine>::new();
    let mut menu = MockClient::<MenuItem>::new();
    let feed = orders.expect_subscribe();

    let dishes = vec![dish(1, "Pad Thai"), dish(2, "Green Curry")];
    menu.expect_query().return_ok(dishes.clone());
    menu.expect_query().return_ok(dishes.clone());
    menu.expect_query().return_ok(dishes);

    let images = Config {
        image_url: "https://img.example/{picture}".into(),
        ..Config::default()
    }
    .images();
    let mut board = StatusBoard::open(
        &OrderClient::new(orders.client()),
        MenuClient::new(menu.client()),
        images,
    )
    .await
    .expect("Failed to open status board");

    // Initial delivery: everything Added, nothing to announce
    let placed = vec![
        line(2, 7, 2, OrderStatus::Unconfirmed),
        line(1, 3, 1, OrderStatus::Unconfirmed),
    ];
    assert!(feed.push(Snapshot {
        documents: placed.clone(),
        changes: placed
            .iter()
            .cloned()
            .map(|l| Change::new(ChangeKind::Added, l))
            .collect(),
    }));
    let update = board.next().await.unwrap();
    let numbers: Vec<u32> = update.rows.iter().map(|r| r.order_number.0).collect();
    assert_eq!(numbers, vec![3, 7]);
    assert_eq!(
        update.rows[0].image_url.as_deref(),
        Some("https://img.example/pic1")
    );
    assert!(update.notices.is_empty());

    // Staff confirmed order 7
    let confirmed = line(2, 7, 2, OrderStatus::PreparingFood);
    feed.push(Snapshot {
        documents: vec![line(1, 3, 1, OrderStatus::Unconfirmed), confirmed.clone()],
        changes: vec![Change::new(ChangeKind::Modified, confirmed)],
    });
    let update = board.next().await.unwrap();
    assert_eq!(
        update.notices,
        vec![Notice::StatusChanged {
            order_number: OrderNumber(7),
            food_name: Some("Green Curry".into()),
            status: OrderStatus::PreparingFood,
        }]
    );

    // A picked-up line disappears without a notice
    let gone = line(1, 3, 1, OrderStatus::FoodReady);
    feed.push(Snapshot {
        documents: vec![line(2, 7, 2, OrderStatus::PreparingFood)],
        changes: vec![Change::new(ChangeKind::Removed, gone)],
    });
    let update = board.next_ready().await.unwrap();
    assert_eq!(update.rows.len(), 1);
    assert!(update.notices.is_empty());
    assert!(board.next_ready().await.is_none());

    board.close();
    assert!(feed.is_closed());
    orders.verify();
    menu.verify();
}

#[tokio::test]
async fn test_status_board_ends_with_the_store() {
    let mut orders = MockClient::<OrderLine>::new();
    let menu = MockClient::<MenuItem>::new();
    let feed = orders.expect_subscribe();

    let mut board = StatusBoard::open(
        &OrderClient::new(orders.client()),
        MenuClient::new(menu.client()),
        ImageUrls::default(),
    )
    .await
    .unwrap();

    drop(feed);
    assert!(board.next().await.is_none());
    menu.verify();
}
