// tests/common/mod.rs
#![allow(dead_code)]

//! In-process stand-in for the Catalog, Order and User services.

use actix_web::dev::ServerHandle;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use cafe_storefront::config::parse_base_url;
use cafe_storefront::AppConfig;
use once_cell::sync::Lazy;
use serde_json::{json, Value};
use std::sync::Mutex;
use tracing::Level;

static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

/// What the backend saw for one request.
#[derive(Debug, Clone)]
pub struct Recorded {
  pub method: String,
  pub path: String,
  pub query: String,
  pub authorization: Option<String>,
  pub request_id: Option<String>,
  pub body: Option<Value>,
}

#[derive(Debug, Default)]
pub struct RequestLog(Mutex<Vec<Recorded>>);

impl RequestLog {
  fn push(&self, recorded: Recorded) {
    self.0.lock().unwrap().push(recorded);
  }

  pub fn all(&self) -> Vec<Recorded> {
    self.0.lock().unwrap().clone()
  }

  pub fn last(&self) -> Recorded {
    self.all().pop().expect("no request recorded")
  }
}

pub struct MockBackend {
  pub config: AppConfig,
  pub log: web::Data<RequestLog>,
  handle: ServerHandle,
}

impl MockBackend {
  /// Binds an ephemeral port and serves until `stop`.
  pub async fn start() -> Self {
    let log = web::Data::new(RequestLog::default());
    let data = log.clone();
    let server = HttpServer::new(move || App::new().app_data(data.clone()).default_service(web::to(respond)))
      .workers(1)
      .disable_signals()
      .bind(("127.0.0.1", 0))
      .expect("bind mock backend");
    let addr = server.addrs()[0];
    let server = server.run();
    let handle = server.handle();
    actix_web::rt::spawn(server);

    let config = AppConfig::new(parse_base_url(&format!("http://{addr}")).unwrap());
    Self { config, log, handle }
  }

  pub async fn stop(self) {
    self.handle.stop(true).await;
  }
}

fn header(req: &HttpRequest, name: &str) -> Option<String> {
  req.headers().get(name).and_then(|v| v.to_str().ok()).map(str::to_string)
}

fn product(id: &str, name: &str, price: f64) -> Value {
  json!({ "_id": id, "productName": name, "description": "House roast", "price": price, "imgUrl": format!("https://img.example/{id}.png") })
}

fn order(id: &str, status: &str) -> Value {
  json!({
    "_id": id,
    "userId": "u1",
    "email": "ash@cafe.com",
    "orderValue": 9.0,
    "status": status,
    "items": [ { "_id": "p1", "productName": "Latte", "price": 4.5, "imgUrl": "", "qty": 2 } ],
    "createdAt": "2026-10-01T09:30:00Z"
  })
}

fn message(status: actix_web::http::StatusCode, text: &str) -> HttpResponse {
  HttpResponse::build(status).json(json!({ "message": text }))
}

async fn respond(req: HttpRequest, body: web::Bytes, log: web::Data<RequestLog>) -> HttpResponse {
  use actix_web::http::StatusCode;

  let body_json: Option<Value> = serde_json::from_slice(&body).ok();
  let authorization = header(&req, "authorization");
  log.push(Recorded {
    method: req.method().to_string(),
    path: req.path().to_string(),
    query: req.query_string().to_string(),
    authorization: authorization.clone(),
    request_id: header(&req, "x-request-id"),
    body: body_json.clone(),
  });

  let admin = authorization.as_deref() == Some("Bearer admin-token");
  let segments: Vec<&str> = req.path().trim_start_matches('/').split('/').collect();

  match (req.method().as_str(), segments.as_slice()) {
    ("GET", ["api", "products"]) => HttpResponse::Ok().json(json!({
      "products": [product("p1", "Latte", 4.5), product("p2", "Mocha", 5.25)],
      "total": 14
    })),
    ("DELETE", ["api", "products", "missing"]) => HttpResponse::NotFound().body("Not Found"),
    ("POST" | "PATCH" | "DELETE", ["api", "products", ..]) => HttpResponse::Ok().json(json!({ "ok": true })),

    ("POST", ["api", "orders"]) => HttpResponse::Created().json(json!({ "_id": "o-new" })),
    ("GET", ["api", "orders"]) if admin => HttpResponse::Ok().json(json!({
      "orders": [order("65f0a1b2c3d4e5f6a7b8c9d0", "Pending")],
      "total": 7
    })),
    ("PATCH", ["api", "orders", _id]) if admin => HttpResponse::Ok().json(json!({ "ok": true })),
    ("PATCH", ["api", "orders", _id]) => message(StatusCode::UNAUTHORIZED, "Not authorized"),
    ("GET", ["api", "orders", _email]) => {
      HttpResponse::Ok().json(json!([order("o1", "Pending"), order("o2", "cancelled")]))
    }
    ("GET", ["api", "orders"]) => message(StatusCode::UNAUTHORIZED, "Not authorized"),

    ("POST", ["api", "users", "login"]) => {
      let password = body_json.as_ref().and_then(|b| b["password"].as_str()).unwrap_or_default();
      let email = body_json.as_ref().and_then(|b| b["email"].as_str()).unwrap_or_default();
      match (email, password) {
        ("admin@cafe.com", "secret1") => HttpResponse::Ok().json(json!({
          "id": "u0", "email": email, "firstName": "Ada", "lastName": "Min", "role": "admin", "token": "admin-token"
        })),
        (_, "secret1") => HttpResponse::Ok().json(json!({
          "id": "u1", "email": email, "firstName": "Ash", "lastName": "Grey", "role": "user", "token": "user-token"
        })),
        _ => message(StatusCode::UNAUTHORIZED, "Invalid credentials"),
      }
    }
    ("POST", ["api", "users", "register"]) => {
      let email = body_json.as_ref().and_then(|b| b["email"].as_str()).unwrap_or_default();
      if email == "taken@cafe.com" {
        message(StatusCode::CONFLICT, "Email already registered")
      } else {
        HttpResponse::Created().finish()
      }
    }
    ("GET", ["api", "users", id, "profile"]) => HttpResponse::Ok().json(json!({
      "_id": id, "firstName": "Ash", "lastName": "Grey", "email": "ash@cafe.com"
    })),
    ("PATCH", ["api", "users", _, "profile"]) => HttpResponse::Ok().json(json!({ "ok": true })),
    ("GET", ["api", "users"]) if admin => HttpResponse::Ok().json(json!({
      "users": [ { "_id": "u1", "firstName": "Ash", "lastName": "Grey", "email": "ash@cafe.com", "role": "user" } ],
      "total": 1
    })),
    (_, ["api", "users", ..]) if !admin => message(StatusCode::UNAUTHORIZED, "Not authorized"),
    (_, ["api", "users", ..]) => HttpResponse::Ok().json(json!({ "ok": true })),

    _ => message(StatusCode::NOT_FOUND, "Route not found"),
  }
}
