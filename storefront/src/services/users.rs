// cafe-storefront/src/services/users.rs

use super::ListQuery;
use crate::api::ApiClient;
use crate::errors::Result;
use async_trait::async_trait;
use cafe_core::{Credentials, Page, Profile, ProfileUpdate, Registration, Session, UserId, UserPayload, UserRecord};
use mockall::automock;
use reqwest::Method;
use tracing::instrument;

#[automock]
#[async_trait]
pub trait UserService: Send + Sync {
  /// `POST /api/users/login`
  async fn login(&self, credentials: Credentials) -> Result<Session>;

  /// `POST /api/users/register`
  async fn register(&self, registration: Registration) -> Result<()>;

  /// `GET /api/users/:id/profile`
  async fn profile(&self, id: UserId) -> Result<Profile>;

  /// `PATCH /api/users/:id/profile`
  async fn update_profile(&self, id: UserId, update: ProfileUpdate) -> Result<()>;

  /// `GET /api/users` (admin).
  async fn list_users(&self, query: ListQuery, token: String) -> Result<Page<UserRecord>>;

  /// `POST /api/users` (admin).
  async fn create_user(&self, payload: UserPayload, token: String) -> Result<()>;

  /// `PATCH /api/users/:id` (admin).
  async fn update_user(&self, id: UserId, payload: UserPayload, token: String) -> Result<()>;

  /// `DELETE /api/users/:id` (admin).
  async fn delete_user(&self, id: UserId, token: String) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct HttpUserService {
  api: ApiClient,
}

impl HttpUserService {
  pub fn new(api: ApiClient) -> Self {
    Self { api }
  }
}

#[async_trait]
impl UserService for HttpUserService {
  #[instrument(name = "users::login", skip_all, fields(email = %credentials.email), err(Display))]
  async fn login(&self, credentials: Credentials) -> Result<Session> {
    let url = self.api.endpoint(&["api", "users", "login"])?;
    self.api.post_json(url, &credentials, None).await
  }

  #[instrument(name = "users::register", skip_all, fields(email = %registration.email), err(Display))]
  async fn register(&self, registration: Registration) -> Result<()> {
    let url = self.api.endpoint(&["api", "users", "register"])?;
    self.api.send_json(Method::POST, url, &registration, None).await
  }

  #[instrument(name = "users::profile", skip(self), err(Display))]
  async fn profile(&self, id: UserId) -> Result<Profile> {
    let url = self.api.endpoint(&["api", "users", id.as_str(), "profile"])?;
    self.api.get_json(url, &[], None).await
  }

  #[instrument(name = "users::update_profile", skip(self, update), err(Display))]
  async fn update_profile(&self, id: UserId, update: ProfileUpdate) -> Result<()> {
    let url = self.api.endpoint(&["api", "users", id.as_str(), "profile"])?;
    self.api.send_json(Method::PATCH, url, &update, None).await
  }

  #[instrument(name = "users::list_users", skip(self, token), err(Display))]
  async fn list_users(&self, query: ListQuery, token: String) -> Result<Page<UserRecord>> {
    let url = self.api.endpoint(&["api", "users"])?;
    self.api.get_json(url, &query, Some(&token)).await
  }

  #[instrument(name = "users::create_user", skip_all, fields(email = %payload.email), err(Display))]
  async fn create_user(&self, payload: UserPayload, token: String) -> Result<()> {
    let url = self.api.endpoint(&["api", "users"])?;
    self.api.send_json(Method::POST, url, &payload, Some(&token)).await
  }

  #[instrument(name = "users::update_user", skip(self, payload, token), err(Display))]
  async fn update_user(&self, id: UserId, payload: UserPayload, token: String) -> Result<()> {
    let url = self.api.endpoint(&["api", "users", id.as_str()])?;
    self.api.send_json(Method::PATCH, url, &payload, Some(&token)).await
  }

  #[instrument(name = "users::delete_user", skip(self, token), err(Display))]
  async fn delete_user(&self, id: UserId, token: String) -> Result<()> {
    let url = self.api.endpoint(&["api", "users", id.as_str()])?;
    self.api.delete(url, Some(&token)).await
  }
}
