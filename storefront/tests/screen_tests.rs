// tests/screen_tests.rs

mod common;

use cafe_core::{OrderStatus, ProfileUpdate, StatusFilter};
use cafe_storefront::screens::admin::{AdminOrdersScreen, AdminUsersScreen};
use cafe_storefront::screens::{CartScreen, HeaderView, LoginScreen, MenuScreen, OrderHistoryScreen, ProfileScreen};
use cafe_storefront::AppState;
use common::{setup_tracing, MockBackend};
use serial_test::serial;

async fn signed_in(backend: &MockBackend, email: &str) -> AppState {
  let state = AppState::new(backend.config.clone()).unwrap();
  let login = LoginScreen::new(state.clone());
  login.set_email(email);
  login.set_password("secret1");
  login.submit().await.unwrap();
  state
}

#[actix_web::test]
#[serial]
async fn browse_add_and_check_out() {
  setup_tracing();
  let backend = MockBackend::start().await;
  let state = signed_in(&backend, "ash@cafe.com").await;

  let menu = MenuScreen::new(state.clone());
  menu.load().await.unwrap();
  let products = menu.products();
  menu.add_to_cart(&products[0]).unwrap();
  menu.add_to_cart(&products[1]).unwrap();
  assert_eq!(HeaderView::from_session(&state.session).cart_count, 2);

  let cart = CartScreen::new(state.clone());
  cart.increment(&products[0].id).unwrap();
  let placed = cart.place_order().await.unwrap();
  assert_eq!(placed.order_value.to_string(), "14.25");
  assert!(cart.is_empty());

  let seen = backend.log.last();
  assert_eq!(seen.path, "/api/orders");
  assert_eq!(seen.body.unwrap()["orderValue"], 14.25);

  let history = OrderHistoryScreen::new(state);
  history.load().await.unwrap();
  assert_eq!(history.orders().len(), 2);

  backend.stop().await;
}

#[actix_web::test]
#[serial]
async fn profile_edit_round_trip() {
  setup_tracing();
  let backend = MockBackend::start().await;
  let state = signed_in(&backend, "ash@cafe.com").await;

  let profile = ProfileScreen::new(state.clone());
  profile.load().await.unwrap();
  assert_eq!(backend.log.last().path, "/api/users/u1/profile");
  profile.edit(|f: &mut ProfileUpdate| f.last_name = "Greyson".into());
  profile.submit().await.unwrap();

  let patch = backend
    .log
    .all()
    .into_iter()
    .find(|r| r.method == "PATCH")
    .expect("profile patch");
  let body = patch.body.unwrap();
  assert_eq!(body["lastName"], "Greyson");
  assert!(body.get("password").is_none());

  profile.logout();
  assert!(!state.session.is_authenticated());

  backend.stop().await;
}

#[actix_web::test]
#[serial]
async fn admin_orders_filter_and_complete() {
  setup_tracing();
  let backend = MockBackend::start().await;
  let state = signed_in(&backend, "admin@cafe.com").await;
  assert!(HeaderView::from_session(&state.session).show_admin_link);

  let screen = AdminOrdersScreen::new(state);
  screen.set_status_filter(StatusFilter::Only(OrderStatus::Pending)).await.unwrap();
  assert_eq!(screen.total_pages(), 3);
  let seen = backend.log.last();
  assert_eq!(seen.query, "page=1&limit=3&status=Pending");
  assert_eq!(seen.authorization.as_deref(), Some("Bearer admin-token"));

  let id = screen.rows()[0].id.clone();
  screen.mark_completed(&id).await.unwrap();
  let methods: Vec<String> = backend.log.all().into_iter().map(|r| r.method).collect();
  assert_eq!(methods[methods.len() - 2..], ["PATCH".to_string(), "GET".to_string()]);

  backend.stop().await;
}

#[actix_web::test]
#[serial]
async fn admin_users_need_an_admin_session() {
  setup_tracing();
  let backend = MockBackend::start().await;
  let state = signed_in(&backend, "ash@cafe.com").await;
  let before = backend.log.all().len();

  let screen = AdminUsersScreen::new(state);
  assert!(screen.refresh().await.is_err());
  assert_eq!(backend.log.all().len(), before);

  backend.stop().await;
}
