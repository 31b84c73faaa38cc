//! End-to-end flows through the public widget API.

use std::path::{Path, PathBuf};

use storefront::{App, StorefrontConfig, Tab, TabContent};
use storefront_core::VariantId;
use storefront_products::ShippingCost;
use storefront_products::catalog::GREEN_SOCKS;
use storefront_reviews::{MissingField, Rating, Recommendation, SubmitOutcome};

/// Catalog file in the temp dir, removed on drop even if the test panics.
struct TempCatalog(PathBuf);

impl TempCatalog {
    fn write(name: &str, json: &str) -> Self {
        let path = std::env::temp_dir().join(format!("{name}-{}.json", std::process::id()));
        std::fs::write(&path, json).unwrap();
        Self(path)
    }

    fn path(&self) -> &Path {
        &self.0
    }
}

impl Drop for TempCatalog {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.0);
    }
}

fn socks_app(premium: bool) -> App {
    App::bootstrap(&StorefrontConfig {
        premium,
        ..StorefrontConfig::default()
    })
    .unwrap()
}

#[test]
fn start_installs_logging_and_builds_widget() {
    let app = storefront::start(&StorefrontConfig::default()).unwrap();
    assert_eq!(app.card().title(), "Vue Mastery Socks");
    assert_eq!(app.cart_label(), "Cart(0)");
}

#[test]
fn review_travels_from_form_to_review_tab() {
    let mut app = socks_app(true);
    app.select_tab(Tab::MakeAReview);
    assert_eq!(app.tab_content(), TabContent::ReviewForm);

    let form = app.form_mut();
    form.set_name("Alice");
    form.set_text("Great!");
    form.set_rating(Some(Rating::new(5).unwrap()));
    form.set_recommend(Some(Recommendation::Yes));

    let outcome = app.submit_review().unwrap();
    match outcome {
        SubmitOutcome::Submitted { delivered, .. } => assert_eq!(delivered, 1),
        other => panic!("Expected Submitted, got {other:?}"),
    }

    assert_eq!(app.card().review_count(), 1);
    assert!(app.form().errors().is_empty());
    assert_eq!(app.form().name(), "");
    assert_eq!(app.form().text(), "");
    assert_eq!(app.form().rating(), None);
    assert_eq!(app.form().recommend(), None);

    app.select_tab(Tab::Reviews);
    assert_eq!(
        app.tab_content().lines(),
        vec!["Alice", "Rating: 5", "Great!", "Recommend: yes"]
    );
}

#[test]
fn empty_submission_publishes_nothing() {
    let mut app = socks_app(true);

    let outcome = app.submit_review().unwrap();

    assert_eq!(
        outcome,
        SubmitOutcome::Rejected(vec![
            MissingField::Name,
            MissingField::Review,
            MissingField::Rating,
            MissingField::Recommendation,
        ])
    );
    assert_eq!(app.card().review_count(), 0);
    assert_eq!(app.tab_content().lines(), vec!["There are no reviews yet."]);
}

#[test]
fn cart_follows_hover_and_stock() {
    let mut app = socks_app(false);

    app.click_add_to_cart().unwrap();
    app.click_add_to_cart().unwrap();
    assert_eq!(app.cart_label(), "Cart(2)");

    // Blue socks are sold out: add is a no-op, remove still fires.
    app.hover_variant(1).unwrap();
    app.click_add_to_cart().unwrap();
    app.click_remove_from_cart().unwrap();
    assert_eq!(app.cart().entries(), [GREEN_SOCKS, GREEN_SOCKS]);

    app.hover_variant(0).unwrap();
    app.click_remove_from_cart().unwrap();
    assert_eq!(app.cart().entries(), [GREEN_SOCKS]);
}

#[test]
fn shipping_tab_follows_premium_flag() {
    for (premium, expected) in [(true, ShippingCost::Free), (false, ShippingCost::Standard)] {
        let mut app = socks_app(premium);
        app.select_tab(Tab::Shipping);
        assert_eq!(app.tab_content(), TabContent::Shipping(expected));
    }
}

#[test]
fn details_tab_lists_catalog_details() {
    let mut app = socks_app(true);
    app.select_tab(Tab::Details);
    assert_eq!(
        app.tab_content().lines(),
        vec!["- 80% cotton", "- 20% polyester", "- Gender-neutral"]
    );
}

#[test]
fn bootstrap_loads_catalog_file() {
    let catalog = TempCatalog::write(
        "storefront-catalog",
        r#"{
            "name": "Mittens",
            "brand": "Acme",
            "description": "Knitted mittens",
            "on_sale": false,
            "variants": [
                {"id": 1, "color": "red", "image": "./red.jpg", "quantity": 0},
                {"id": 2, "color": "grey", "image": "./grey.jpg", "quantity": 3}
            ]
        }"#,
    );

    let config = StorefrontConfig {
        premium: false,
        catalog_path: Some(catalog.path().to_path_buf()),
        ..StorefrontConfig::default()
    };
    let mut app = App::bootstrap(&config).unwrap();

    let view = app.card().view();
    assert_eq!(view.title, "Acme Mittens");
    assert_eq!(view.sale_message, "Acme Mittens are not on sale.");
    assert!(!view.in_stock);

    app.click_add_to_cart().unwrap();
    assert!(app.cart().is_empty());

    app.hover_variant(1).unwrap();
    app.click_add_to_cart().unwrap();
    assert_eq!(app.cart().entries(), [VariantId::new(2)]);
}

#[test]
fn bootstrap_rejects_invalid_catalog() {
    let catalog = TempCatalog::write(
        "storefront-bad-catalog",
        r#"{"name": "Empty", "brand": "Acme", "description": "", "variants": []}"#,
    );

    let config = StorefrontConfig {
        catalog_path: Some(catalog.path().to_path_buf()),
        ..StorefrontConfig::default()
    };
    let err = App::bootstrap(&config).unwrap_err();

    assert!(err.to_string().starts_with("parsing catalog"));
    assert!(format!("{err:#}").contains("at least one variant"));
}
