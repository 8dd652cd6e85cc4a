//! HTTP surface for book-layers
//!
//! axum (HTTP) <-> application::BookService <-> infra::FileBookStore
//!
//! 2 routes: /clean, /myio (any method)

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::application::error::AppError;
use crate::application::service::BookService;
use crate::config::ServerConfig;
use crate::infra::file_store::FileBookStore;

use super::layering::Layering;

// =============================================================================
// Public entry point
// =============================================================================

/// HTTPサーバを起動する。停止処理は持たない。
pub async fn run(config: ServerConfig) -> anyhow::Result<()> {
    let state = Arc::new(AppState::new(&config));
    for layering in Layering::ALL {
        let store = state.store(layering);
        info!(
            route = layering.route(),
            db = %store.path().display(),
            mode = ?store.mode(),
            "pipeline registered"
        );
    }
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}

/// 2つのパイプラインのルートを持つRouterを組み立てる。
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(Layering::Clean.route(), any(clean_add_book))
        .route(Layering::Io.route(), any(myio_add_book))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// =============================================================================
// Shared state
// =============================================================================

/// パイプラインごとのStoreハンドル。リクエスト間で共有する。
/// 両パイプラインの保存先が同じなら1つのハンドル（= 1つのロック）を共有する。
#[derive(Debug)]
pub struct AppState {
    clean: Arc<FileBookStore>,
    myio: Arc<FileBookStore>,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        let clean_path = config.db_path(Layering::Clean);
        let myio_path = config.db_path(Layering::Io);

        let clean = Arc::new(FileBookStore::new(clean_path, config.write_mode));
        let myio = if myio_path == clean_path {
            Arc::clone(&clean)
        } else {
            Arc::new(FileBookStore::new(myio_path, config.write_mode))
        };

        Self { clean, myio }
    }

    pub fn store(&self, layering: Layering) -> &Arc<FileBookStore> {
        match layering {
            Layering::Clean => &self.clean,
            Layering::Io => &self.myio,
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

async fn clean_add_book(State(state): State<Arc<AppState>>) -> Response {
    add_book(&state, Layering::Clean).await
}

async fn myio_add_book(State(state): State<Arc<AppState>>) -> Response {
    add_book(&state, Layering::Io).await
}

/// 固定の入力でユースケースを呼び、結果をレスポンスに変換する。
/// ファイルI/Oはブロッキングなのでblocking poolで実行する。
async fn add_book(state: &AppState, layering: Layering) -> Response {
    let (name, author) = layering.sample();
    let store = Arc::clone(state.store(layering));

    let outcome =
        tokio::task::spawn_blocking(move || BookService::new(store).add_book(name, author)).await;

    match outcome {
        Ok(Ok(book)) => {
            info!(pipeline = %layering, book = book.name(), "book added");
            (
                StatusCode::OK,
                format!("succesfully added book: {} \n", book.name()),
            )
                .into_response()
        }
        Ok(Err(e)) => failure(layering, name, &e),
        Err(join) => failure(layering, name, &AppError::Storage(Box::new(join))),
    }
}

fn failure(layering: Layering, name: &str, e: &AppError) -> Response {
    error!(pipeline = %layering, book = name, error = %e, "add book failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("failed to add book: {name}: {e}\n"),
    )
        .into_response()
}
