// cafe-storefront/src/screens/admin/products.rs

use super::form_state::FormState;
use super::list_state::{current_notice, refresh_list, ListState};
use crate::errors::{AppError, Result};
use crate::state::AppState;
use cafe_core::{FormMode, Notice, Product, ProductDraft, ProductId, SearchFilter, Shared};
use tracing::{info, instrument, warn};

pub const PRODUCT_PAGE_SIZES: &[u32] = &[5, 10, 20, 50];
pub const DEFAULT_PRODUCT_PAGE_SIZE: u32 = 10;

/// Admin products table with its add/edit form.
#[derive(Debug, Clone)]
pub struct AdminProductsScreen {
  app: AppState,
  list: Shared<ListState<SearchFilter, Product>>,
  form: Shared<FormState<ProductDraft, ProductId>>,
}

impl AdminProductsScreen {
  pub fn new(app: AppState) -> Self {
    Self {
      app,
      list: Shared::new(ListState::new(DEFAULT_PRODUCT_PAGE_SIZE, PRODUCT_PAGE_SIZES)),
      form: Shared::default(),
    }
  }

  #[instrument(name = "admin_products::refresh", skip(self), err(Display))]
  pub async fn refresh(&self) -> Result<()> {
    let token = self.app.session.bearer_token();
    let catalog = self.app.catalog.clone();
    refresh_list(&self.list, "Failed to load products", |query| {
      catalog.list_products(query, token.clone())
    })
    .await
  }

  /// Runs a search; back to page 1 and one fetch.
  pub async fn search(&self, text: &str) -> Result<()> {
    self.list.update(|l| l.pager.set_filter(SearchFilter::new(text)));
    self.refresh().await
  }

  pub async fn set_limit(&self, limit: u32) -> Result<()> {
    self.list.update(|l| l.pager.set_limit(limit))?;
    self.refresh().await
  }

  pub async fn next_page(&self) -> Result<bool> {
    let moved = self.list.update(|l| l.can_go_next() && l.pager.next());
    if moved {
      self.refresh().await?;
    }
    Ok(moved)
  }

  pub async fn prev_page(&self) -> Result<bool> {
    let moved = self.list.update(|l| l.can_go_prev() && l.pager.prev());
    if moved {
      self.refresh().await?;
    }
    Ok(moved)
  }

  /// Loads `product` into the form ("Edit").
  pub fn begin_edit(&self, product: &Product) {
    self
      .form
      .update(|f| f.begin_edit(product.id.clone(), ProductDraft::from_product(product)));
  }

  pub fn cancel_edit(&self) {
    self.form.update(FormState::reset);
  }

  /// Changes form fields, e.g. `screen.edit_form(|d| d.price = "120".into())`.
  pub fn edit_form(&self, f: impl FnOnce(&mut ProductDraft)) {
    self.form.update(|form| f(&mut form.draft));
  }

  pub fn form(&self) -> ProductDraft {
    self.form.read().draft.clone()
  }

  pub fn form_mode(&self) -> FormMode {
    self.form.read().mode()
  }

  /// Creates or updates depending on the form mode, then resets the form
  /// and re-fetches the page.
  #[instrument(name = "admin_products::submit", skip(self), err(Display))]
  pub async fn submit(&self) -> Result<()> {
    let (draft, editing) = {
      let form = self.form.read();
      (form.draft.clone(), form.editing.clone())
    };
    let (success, failure) = match editing {
      Some(_) => ("Product updated successfully", "Failed to update product"),
      None => ("Product added successfully", "Failed to add product"),
    };

    let payload = match draft.validate() {
      Ok(payload) => payload,
      Err(e) => {
        warn!(error = %e, "Product form rejected.");
        let err = AppError::from(e);
        self.list.update(|l| l.notices.error(err.user_message(failure)));
        return Err(err);
      }
    };

    let token = self.app.session.bearer_token();
    self.begin_mutation()?;
    let result = match editing {
      Some(id) => self.app.catalog.update_product(id, payload, token).await,
      None => self.app.catalog.create_product(payload, token).await,
    };
    self.end_mutation();

    match result {
      Ok(()) => {
        info!(message = success, "Product saved.");
        self.form.update(FormState::reset);
        self.list.update(|l| l.notices.success(success));
        self.refresh().await
      }
      Err(err) => {
        self.list.update(|l| l.notices.error(err.user_message(failure)));
        Err(err)
      }
    }
  }

  /// Deletes a product. Asking the user to confirm is up to the caller.
  #[instrument(name = "admin_products::delete", skip(self), err(Display))]
  pub async fn delete(&self, id: &ProductId) -> Result<()> {
    let token = self.app.session.bearer_token();
    self.list.update(|l| l.mutating = true);
    let result = self.app.catalog.delete_product(id.clone(), token).await;
    self.list.update(|l| l.mutating = false);

    match result {
      Ok(()) => {
        self.list.update(|l| l.notices.success("Product deleted successfully"));
        self.refresh().await
      }
      Err(err) => {
        self.list.update(|l| l.notices.error(err.user_message("Failed to delete product")));
        Err(err)
      }
    }
  }

  fn begin_mutation(&self) -> Result<()> {
    if !self.form.update(FormState::try_begin_submit) {
      warn!("Product save already in progress.");
      return Err(AppError::Conflict("A save is already in progress".to_string()));
    }
    self.list.update(|l| l.mutating = true);
    Ok(())
  }

  fn end_mutation(&self) {
    self.form.update(|f| f.submitting = false);
    self.list.update(|l| l.mutating = false);
  }

  pub fn rows(&self) -> Vec<Product> {
    self.list.read().rows.clone()
  }

  pub fn search_text(&self) -> String {
    self.list.read().pager.filter().text().to_string()
  }

  pub fn page(&self) -> u32 {
    self.list.read().pager.page()
  }

  pub fn limit(&self) -> u32 {
    self.list.read().pager.limit()
  }

  pub fn total_pages(&self) -> u32 {
    self.list.read().pager.total_pages()
  }

  pub fn has_next(&self) -> bool {
    self.list.read().can_go_next()
  }

  pub fn has_prev(&self) -> bool {
    self.list.read().can_go_prev()
  }

  pub fn is_submitting(&self) -> bool {
    self.form.read().submitting
  }

  pub fn notice(&self) -> Option<Notice> {
    current_notice(&self.list)
  }
}
