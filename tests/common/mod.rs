//! Shared test harness for integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::path::Path;
use std::sync::Arc;

use book_layers::application::store::BookStore;
use book_layers::config::ServerConfig;
use book_layers::domain::model::book::Book;
use book_layers::infra::file_store::WriteMode;
use book_layers::interface::http::{router, AppState};

// =============================================================================
// RecordingStore — 呼び出しを記録するテスト用Store
// =============================================================================

#[derive(Debug, thiserror::Error)]
#[error("in-memory store error")]
pub struct InMemoryError;

/// ファイルI/O不要のインメモリStore。save/getの呼び出しを記録する。
pub struct RecordingStore {
    pub saved: RefCell<Vec<String>>,
    pub get_calls: RefCell<Vec<String>>,
    pub fail_saves: bool,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self {
            saved: RefCell::new(Vec::new()),
            get_calls: RefCell::new(Vec::new()),
            fail_saves: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_saves: true,
            ..Self::new()
        }
    }
}

impl BookStore for RecordingStore {
    type Error = InMemoryError;

    fn save(&self, content: &str) -> Result<(), Self::Error> {
        if self.fail_saves {
            return Err(InMemoryError);
        }
        self.saved.borrow_mut().push(content.to_string());
        Ok(())
    }

    fn get(&self, name: &str) -> Result<Option<Book>, Self::Error> {
        self.get_calls.borrow_mut().push(name.to_string());
        Ok(self
            .saved
            .borrow()
            .iter()
            .rev()
            .map(|line| Book::parse_record(line).unwrap())
            .find(|book| book.name() == name))
    }
}

// =============================================================================
// HTTP helpers
// =============================================================================

/// 指定パスを使うConfig。
pub fn config_with_paths(clean: &Path, myio: &Path, mode: WriteMode) -> ServerConfig {
    ServerConfig {
        clean_db: clean.to_path_buf(),
        myio_db: myio.to_path_buf(),
        write_mode: mode,
        ..ServerConfig::default()
    }
}

pub fn app(config: &ServerConfig) -> axum::Router {
    router(Arc::new(AppState::new(config)))
}

// =============================================================================
// Assertion helpers
// =============================================================================

/// 結果がErrで、メッセージに指定文字列を含むことをassert。
pub fn assert_error_contains<T: std::fmt::Debug>(
    result: Result<T, impl std::fmt::Display>,
    expected: &str,
) {
    match result {
        Err(e) => {
            let msg = e.to_string();
            assert!(
                msg.contains(expected),
                "Expected error containing '{expected}', got: '{msg}'"
            );
        }
        Ok(v) => panic!("Expected error containing '{expected}', got Ok({v:?})"),
    }
}
