//! Storage round-trips across session restarts.

#![allow(clippy::unwrap_used)]

use electromart_core::{Email, Money, ProductId};
use electromart_storefront::cart::NewCartItem;
use electromart_storefront::{Session, StorefrontConfig};

fn config_for(dir: &std::path::Path) -> StorefrontConfig {
    StorefrontConfig::with_data_dir(dir)
}

fn login(session: &mut Session, email: &str) {
    session
        .account_mut()
        .login(Email::parse(email).unwrap());
}

#[test]
fn user_and_orders_survive_restart() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path());

    let (saved_user, saved_orders) = {
        let mut session = Session::new(&config).unwrap();
        login(&mut session, "roundtrip@x.com");

        session.cart_mut().add(NewCartItem {
            product_id: ProductId::new("1"),
            name: "Sony WH-1000XM4 Wireless Headphones".to_owned(),
            price: Money::from(24_990),
            image: String::new(),
        });
        session.checkout_mut().next();
        session.checkout_mut().next();
        session.confirm_order().unwrap();

        (
            session.account().user().cloned().unwrap(),
            session.account().orders().to_vec(),
        )
    };

    // A new session over the same data directory sees identical records.
    let session = Session::new(&config).unwrap();
    assert_eq!(session.account().user(), Some(&saved_user));
    assert_eq!(session.account().orders(), saved_orders.as_slice());

    // The committed order sits in front of the seeded demo order.
    assert_eq!(saved_orders.len(), 2);
    assert_eq!(
        saved_orders.first().unwrap().total,
        Money::from(24_990)
    );
}

#[test]
fn demo_order_is_seeded_once() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path());

    {
        let session = Session::new(&config).unwrap();
        assert_eq!(session.account().orders().len(), 1);
    }

    // Restarting must not duplicate the seed.
    let session = Session::new(&config).unwrap();
    assert_eq!(session.account().orders().len(), 1);
}

#[test]
fn seeding_can_be_disabled() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path()).seed_demo_order(false);

    let session = Session::new(&config).unwrap();
    assert!(session.account().orders().is_empty());
}

#[test]
fn logout_removes_the_user_record() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path());

    {
        let mut session = Session::new(&config).unwrap();
        login(&mut session, "gone@x.com");
        assert!(dir.path().join("user.json").is_file());

        session.account_mut().logout();
    }

    assert!(!dir.path().join("user.json").exists());

    let session = Session::new(&config).unwrap();
    assert!(session.account().user().is_none());
}

#[test]
fn records_are_plain_json_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path());

    {
        let mut session = Session::new(&config).unwrap();
        login(&mut session, "inspect@x.com");
    }

    let raw = std::fs::read_to_string(dir.path().join("user.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        value.get("email").and_then(serde_json::Value::as_str),
        Some("inspect@x.com")
    );
    assert!(
        value
            .get("addresses")
            .and_then(serde_json::Value::as_array)
            .is_some_and(|addresses| addresses.len() == 1)
    );

    let raw = std::fs::read_to_string(dir.path().join("orders.json")).unwrap();
    let orders: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert!(orders.as_array().is_some_and(|orders| orders.len() == 1));
}
