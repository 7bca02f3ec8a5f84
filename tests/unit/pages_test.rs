// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::support::{
    FakeEngine, SubmitOutcome, ADD_TO_CART_BUTTON, LOGIN_BUTTON, LOGOUT_LINK, MENU_BUTTON,
    PASSWORD_INPUT, USERNAME_INPUT,
};
use saucetest::pages::{InventoryPage, LoginPage, PageError};
use std::sync::Arc;

const BASE_URL: &str = "https://www.saucedemo.com/";
const INVENTORY_URL: &str = "https://www.saucedemo.com/inventory.html";

fn authenticated_engine(items: usize) -> Arc<FakeEngine> {
    Arc::new(FakeEngine::with_outcome(SubmitOutcome::Authenticated {
        title: "Products".to_string(),
        items,
    }))
}

async fn logged_in_inventory(engine: Arc<FakeEngine>) -> InventoryPage {
    let login = LoginPage::new(engine.clone(), BASE_URL);
    login.open().await.unwrap();
    login
        .attempt_login("standard_user", "secret_sauce")
        .await
        .unwrap();
    InventoryPage::new(engine, INVENTORY_URL)
}

#[tokio::test]
async fn test_attempt_login_fills_then_submits_in_order() {
    let engine = authenticated_engine(6);
    let login = LoginPage::new(engine.clone(), BASE_URL);

    login.open().await.unwrap();
    login
        .attempt_login("standard_user", "secret_sauce")
        .await
        .unwrap();

    let actions = engine.actions();
    let fill_user = actions
        .iter()
        .position(|a| a == &format!("fill:{}=standard_user", USERNAME_INPUT))
        .unwrap();
    let fill_pass = actions
        .iter()
        .position(|a| a == &format!("fill:{}=secret_sauce", PASSWORD_INPUT))
        .unwrap();
    let submit = actions
        .iter()
        .position(|a| a == &format!("click:{}", LOGIN_BUTTON))
        .unwrap();
    assert!(fill_user < fill_pass);
    assert!(fill_pass < submit);
}

#[tokio::test]
async fn test_error_text_absent_before_failed_login() {
    let engine = Arc::new(FakeEngine::with_outcome(SubmitOutcome::Rejected {
        error: "Epic sadface: Username and password do not match".to_string(),
    }));
    let login = LoginPage::new(engine.clone(), BASE_URL);

    login.open().await.unwrap();
    assert_eq!(login.error_text().await.unwrap(), None);

    login
        .attempt_login("invalid_user", "wrong_password")
        .await
        .unwrap();
    let text = login.error_text().await.unwrap().unwrap();
    assert!(text.contains("Epic sadface"));
}

#[tokio::test]
async fn test_is_authenticated_view_follows_title_visibility() {
    let engine = authenticated_engine(6);
    let login = LoginPage::new(engine.clone(), BASE_URL);
    let inventory = InventoryPage::new(engine.clone(), INVENTORY_URL);

    login.open().await.unwrap();
    assert!(!inventory.is_authenticated_view().await.unwrap());

    login
        .attempt_login("standard_user", "secret_sauce")
        .await
        .unwrap();
    assert!(inventory.is_authenticated_view().await.unwrap());
    assert_eq!(
        inventory.title_text().await.unwrap().as_deref(),
        Some("Products")
    );
}

#[tokio::test]
async fn test_item_count_and_empty_cart_badge() {
    let engine = authenticated_engine(6);
    let inventory = logged_in_inventory(engine).await;

    assert_eq!(inventory.item_count().await.unwrap(), 6);
    // Empty cart renders no badge at all
    assert_eq!(inventory.cart_badge_count().await.unwrap(), "0");
}

#[tokio::test]
async fn test_add_to_cart_updates_badge() {
    let engine = authenticated_engine(6);
    let inventory = logged_in_inventory(engine.clone()).await;

    inventory.add_to_cart(0).await.unwrap();
    assert_eq!(inventory.cart_badge_count().await.unwrap(), "1");
    inventory.add_to_cart(2).await.unwrap();
    assert_eq!(inventory.cart_badge_count().await.unwrap(), "2");

    assert!(engine
        .actions()
        .contains(&format!("click_nth:{}:2", ADD_TO_CART_BUTTON)));
}

#[tokio::test]
async fn test_add_to_cart_rejects_out_of_range_index() {
    let engine = authenticated_engine(3);
    let inventory = logged_in_inventory(engine).await;

    let err = inventory.add_to_cart(3).await.unwrap_err();
    match err {
        PageError::IndexOutOfRange { index, len } => {
            assert_eq!(index, 3);
            assert_eq!(len, 3);
        }
        other => panic!("expected IndexOutOfRange, got {:?}", other),
    }
}

#[tokio::test]
async fn test_logout_opens_menu_before_clicking_link() {
    let engine = authenticated_engine(6);
    let inventory = logged_in_inventory(engine.clone()).await;

    inventory.logout().await.unwrap();

    let actions = engine.actions();
    let menu = actions
        .iter()
        .position(|a| a == &format!("click:{}", MENU_BUTTON))
        .unwrap();
    let logout = actions
        .iter()
        .position(|a| a == &format!("click:{}", LOGOUT_LINK))
        .unwrap();
    assert!(menu < logout);
}

#[tokio::test]
async fn test_current_url_tracks_navigation() {
    use saucetest::engines::PageEngine;

    let engine = authenticated_engine(6);
    let login = LoginPage::new(engine.clone(), BASE_URL);

    login.open().await.unwrap();
    assert_eq!(engine.current_url().await.unwrap(), BASE_URL);
    assert_eq!(engine.title().await.unwrap(), "Swag Labs");

    login
        .attempt_login("standard_user", "secret_sauce")
        .await
        .unwrap();
    assert_eq!(engine.current_url().await.unwrap(), INVENTORY_URL);
}

#[tokio::test]
async fn test_page_urls() {
    let engine = authenticated_engine(6);
    let login = LoginPage::new(engine.clone(), BASE_URL);
    let inventory = InventoryPage::new(engine, INVENTORY_URL);

    assert_eq!(login.page_url(), BASE_URL);
    assert_eq!(inventory.page_url(), INVENTORY_URL);
    assert!(saucetest::utils::helpers::is_valid_url(login.page_url()));
    assert!(saucetest::utils::helpers::is_valid_url(inventory.page_url()));
}
