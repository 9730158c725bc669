// cafe-storefront/src/screens/menu.rs

use crate::errors::Result;
use crate::state::AppState;
use cafe_core::{Feed, LineItem, Notice, NoticeBoard, Product, Shared};
use tracing::{debug, instrument, warn};

const LOAD_ERROR: &str = "Failed to load products";

#[derive(Debug)]
struct MenuState {
  feed: Feed<Product>,
  notices: NoticeBoard,
}

/// Customer menu: a "Load More" product feed plus "Add to cart".
#[derive(Debug, Clone)]
pub struct MenuScreen {
  app: AppState,
  state: Shared<MenuState>,
}

impl MenuScreen {
  pub fn new(app: AppState) -> Self {
    let state = MenuState {
      feed: Feed::new(app.config.menu_page_size),
      notices: NoticeBoard::with_ttl(app.config.notice_ttl),
    };
    Self {
      app,
      state: Shared::new(state),
    }
  }

  /// (Re)loads page 1, replacing what is shown.
  pub async fn load(&self) -> Result<()> {
    let page = self.state.update(|s| s.feed.begin_reload());
    self.fetch(page).await
  }

  /// Appends the next page. Returns `false` without a request when the
  /// feed is exhausted or a load is already running.
  pub async fn load_more(&self) -> Result<bool> {
    match self.state.update(|s| s.feed.begin_load_more()) {
      Some(page) => {
        self.fetch(page).await?;
        Ok(true)
      }
      None => {
        debug!("Load More ignored.");
        Ok(false)
      }
    }
  }

  #[instrument(name = "menu::fetch", skip(self), err(Display))]
  async fn fetch(&self, page: u32) -> Result<()> {
    let limit = self.state.read().feed.limit();
    let query = vec![("page", page.to_string()), ("limit", limit.to_string())];
    match self.app.catalog.list_products(query, self.app.session.bearer_token()).await {
      Ok(fetched) => {
        self.state.update(|s| s.feed.apply(page, fetched.rows));
        Ok(())
      }
      Err(err) => {
        warn!(error = %err, page, "Menu page failed to load.");
        self.state.update(|s| {
          s.feed.fail();
          s.notices.error(LOAD_ERROR);
        });
        Err(err)
      }
    }
  }

  /// Puts one of `product` in the cart. A product already in the cart is
  /// left alone and reported.
  pub fn add_to_cart(&self, product: &Product) -> Result<LineItem> {
    let added = self.app.session.cart().write().add(product).cloned();
    match added {
      Ok(line) => {
        self.state.update(|s| s.notices.success("Added to cart"));
        Ok(line)
      }
      Err(err) => {
        self.state.update(|s| s.notices.error(err.to_string()));
        Err(err.into())
      }
    }
  }

  pub fn products(&self) -> Vec<Product> {
    self.state.read().feed.items().to_vec()
  }

  pub fn can_load_more(&self) -> bool {
    self.state.read().feed.can_load_more()
  }

  pub fn is_loading(&self) -> bool {
    self.state.read().feed.is_loading()
  }

  /// The visible notice; expired ones are gone.
  pub fn notice(&self) -> Option<Notice> {
    self.state.read().notices.current().cloned()
  }

  pub fn dismiss_notice(&self) {
    self.state.update(|s| s.notices.dismiss());
  }
}
