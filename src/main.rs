use std::env;

use dotenvy::dotenv;

use wallpaper_quotes::controller::{ListController, ListQueryState, ListViewState};
use wallpaper_quotes::models::config::ClientConfig;
use wallpaper_quotes::repository::http::HttpQuoteRequestRepository;
use wallpaper_quotes::services::quote_board::QuoteRequestBoard;

#[tokio::main]
async fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let config = match ClientConfig::load("config", &app_env) {
        Ok(config) => config,
        Err(err) => {
            log::error!("Error loading client config: {err}");
            std::process::exit(1);
        }
    };

    let repo = match HttpQuoteRequestRepository::new(&config) {
        Ok(repo) => repo,
        Err(err) => {
            log::error!("Error creating backend client: {err}");
            std::process::exit(1);
        }
    };

    let query = ListQueryState::default().page_size(config.default_page_size);
    let list = ListController::with_query(repo.clone(), query, config.search_debounce());
    let board = QuoteRequestBoard::new(list, repo);

    let load = board.mount().await;
    log::info!("Quote requests loaded: {:?}", load.list);

    if let Some(counts) = board.status_counts() {
        log::info!(
            "Total {} | reviewing {} | adopted {} | completed {} | canceled {}",
            counts.total,
            counts.reviewing,
            counts.adopted,
            counts.completed,
            counts.canceled
        );
    }

    let snapshot = board.list().snapshot();
    match snapshot.view_state() {
        ListViewState::Ready => {
            for request in snapshot.items() {
                log::info!(
                    "#{} [{}] {} / {} / {}㎡ / quotes: {}",
                    request.id,
                    request.status.label(),
                    request.region,
                    request.wallpaper_type,
                    request.area_size,
                    request.answer_count
                );
            }
            log::info!(
                "Page {} of {} ({} requests)",
                snapshot.current_page() + 1,
                snapshot.total_pages(),
                snapshot.total_count()
            );
        }
        ListViewState::Empty => log::info!("No quote requests match the current filter"),
        ListViewState::Failed => {
            if let Some(err) = &snapshot.error {
                log::error!("Quote requests unavailable: {err}");
            }
            std::process::exit(1);
        }
        ListViewState::Loading => {}
    }
}
