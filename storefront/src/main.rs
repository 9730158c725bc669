// cafe-storefront/src/main.rs

use cafe_core::money::format_amount;
use cafe_core::StatusFilter;
use cafe_storefront::screens::admin::AdminOrdersScreen;
use cafe_storefront::screens::{HeaderView, LoginScreen, MenuScreen, OrderHistoryScreen};
use cafe_storefront::{telemetry, AppConfig, AppError, AppState, Result as AppResult};
use clap::{Parser, Subcommand};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "cafe", version, about = "Drive the café storefront from a terminal")]
struct Cli {
  /// Backend base URL; falls back to CAFE_API_URL.
  #[arg(long, global = true)]
  api_url: Option<String>,

  /// Email to sign in with before running the command.
  #[arg(long, global = true, env = "CAFE_EMAIL")]
  email: Option<String>,

  /// Password for --email.
  #[arg(long, global = true, env = "CAFE_PASSWORD", hide_env_values = true)]
  password: Option<String>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
  /// List menu products; --page N loads pages 1..=N.
  Menu {
    #[arg(long, default_value_t = 1)]
    page: u32,
  },
  /// Show the signed-in user's orders.
  Orders,
  /// Check credentials and print the session.
  Login,
  /// Admin order list.
  AdminOrders {
    /// all, pending, completed or cancelled.
    #[arg(long, default_value = "all")]
    status: String,
    #[arg(long, default_value_t = 1)]
    page: u32,
    #[arg(long)]
    limit: Option<u32>,
  },
}

#[tokio::main]
async fn main() -> ExitCode {
  let cli = Cli::parse();

  let config = match load_config(cli.api_url.as_deref()) {
    Ok(cfg) => cfg,
    Err(e) => {
      telemetry::init_tracing(false);
      tracing::error!(error = %e, "Failed to load application configuration.");
      return ExitCode::FAILURE;
    }
  };
  telemetry::init_tracing(config.log_json);

  match run(cli, config).await {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      tracing::error!(error = %e, "Command failed.");
      eprintln!("{}", e.user_message(&e.to_string()));
      ExitCode::FAILURE
    }
  }
}

fn load_config(api_url: Option<&str>) -> AppResult<AppConfig> {
  match api_url {
    Some(raw) => Ok(AppConfig::new(cafe_storefront::config::parse_base_url(raw)?)),
    None => AppConfig::from_env(),
  }
}

async fn run(cli: Cli, config: AppConfig) -> AppResult<()> {
  let state = AppState::new(config)?;

  if let (Some(email), Some(password)) = (&cli.email, &cli.password) {
    let login = LoginScreen::new(state.clone());
    login.set_email(email.as_str());
    login.set_password(password.as_str());
    login.submit().await?;
  }

  match cli.command {
    Command::Menu { page } => {
      let menu = MenuScreen::new(state.clone());
      menu.load().await?;
      for _ in 1..page {
        if !menu.load_more().await? {
          break;
        }
      }
      for product in menu.products() {
        println!("{:<26} {:>10}  {}", product.id.as_str(), format_amount(product.price), product.product_name);
      }
      if menu.can_load_more() {
        println!("(more available)");
      }
    }
    Command::Orders => {
      let history = OrderHistoryScreen::new(state.clone());
      history.load().await?;
      if history.is_empty() {
        println!("No orders yet.");
      }
      for order in history.orders() {
        println!("{:<10} {:>10}  {}", order.reference(), format_amount(order.order_value), order.status);
      }
    }
    Command::Login => {
      let session = state
        .session
        .current()
        .ok_or_else(|| AppError::Auth("Pass --email and --password to log in".to_string()))?;
      println!("Signed in as {} ({})", session.email, session.role.as_str());
    }
    Command::AdminOrders { status, page, limit } => {
      let screen = AdminOrdersScreen::new(state.clone());
      if let Some(limit) = limit {
        screen.set_limit(limit).await?;
      }
      screen.set_status_filter(status.parse::<StatusFilter>()?).await?;
      while screen.page() < page && screen.next_page().await? {}
      println!("page {}/{} ({} per page)", screen.page(), screen.total_pages(), screen.limit());
      for order in screen.rows() {
        println!("{:<10} {:<24} {:>10}  {}", order.reference(), order.email, format_amount(order.order_value), order.status);
      }
    }
  }

  let header = HeaderView::from_session(&state.session);
  tracing::debug!(?header, "Session at exit.");
  Ok(())
}

