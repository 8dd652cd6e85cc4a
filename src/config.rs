use std::path::{Path, PathBuf};

use clap::Parser;

use crate::infra::file_store::WriteMode;
use crate::interface::layering::Layering;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_CLEAN_DB: &str = "/tmp/clean_architecture_db.txt";
pub const DEFAULT_MYIO_DB: &str = "/tmp/myio_architecture_db.txt";

/// サーバ設定。各パイプラインの保存先はここから明示的に渡す。
#[derive(Debug, Clone, Parser)]
#[command(name = "book-layers", version, about = "Add-a-book over HTTP, two layering styles")]
pub struct ServerConfig {
    /// Listening port
    #[arg(long, env = "BOOK_LAYERS_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Record file for the /clean pipeline
    #[arg(long, env = "BOOK_LAYERS_CLEAN_DB", default_value = DEFAULT_CLEAN_DB)]
    pub clean_db: PathBuf,

    /// Record file for the /myio pipeline
    #[arg(long, env = "BOOK_LAYERS_MYIO_DB", default_value = DEFAULT_MYIO_DB)]
    pub myio_db: PathBuf,

    /// How records are written
    #[arg(long, env = "BOOK_LAYERS_WRITE_MODE", value_enum, default_value_t = WriteMode::Append)]
    pub write_mode: WriteMode,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            clean_db: PathBuf::from(DEFAULT_CLEAN_DB),
            myio_db: PathBuf::from(DEFAULT_MYIO_DB),
            write_mode: WriteMode::default(),
        }
    }
}

impl ServerConfig {
    pub fn db_path(&self, layering: Layering) -> &Path {
        match layering {
            Layering::Clean => self.clean_db.as_path(),
            Layering::Io => self.myio_db.as_path(),
        }
    }
}
