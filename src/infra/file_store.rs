use std::fs::OpenOptions;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::application::store::BookStore;
use crate::domain::error::DomainError;
use crate::domain::model::book::Book;

#[derive(Debug, thiserror::Error)]
pub enum FileStoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("record spans multiple lines: {0:?}")]
    MultiLineRecord(String),
    #[error("store lock poisoned")]
    LockPoisoned,
}

/// 書き込み方法。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum WriteMode {
    /// 1行1レコードで追記する
    #[default]
    Append,
    /// 毎回ファイルを置き換える（最後の1件だけが残る）
    Truncate,
}

/// テキストファイルによるBookStore実装。
/// 1レコード = 1行。同一ハンドル上の読み書きはMutexで直列化する。
#[derive(Debug)]
pub struct FileBookStore {
    path: PathBuf,
    mode: WriteMode,
    lock: Mutex<()>,
}

impl FileBookStore {
    pub fn new(path: impl Into<PathBuf>, mode: WriteMode) -> Self {
        Self {
            path: path.into(),
            mode,
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn mode(&self) -> WriteMode {
        self.mode
    }
}

impl BookStore for FileBookStore {
    type Error = FileStoreError;

    fn save(&self, content: &str) -> Result<(), Self::Error> {
        if content.contains(['\n', '\r']) {
            return Err(FileStoreError::MultiLineRecord(content.to_string()));
        }

        let _guard = self.lock.lock().map_err(|_| FileStoreError::LockPoisoned)?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut options = OpenOptions::new();
        match self.mode {
            WriteMode::Append => options.create(true).read(true).append(true),
            WriteMode::Truncate => options.create(true).write(true).truncate(true),
        };

        let mut file = options.open(&self.path)?;
        if self.mode == WriteMode::Append && !ends_with_newline(&mut file)? {
            file.write_all(b"\n")?;
        }
        file.write_all(format!("{content}\n").as_bytes())?;
        file.flush()?;

        tracing::debug!(path = %self.path.display(), mode = ?self.mode, "record saved");
        Ok(())
    }

    fn get(&self, name: &str) -> Result<Option<Book>, Self::Error> {
        let _guard = self.lock.lock().map_err(|_| FileStoreError::LockPoisoned)?;

        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)?;

        let mut found = None;
        for line in content.lines().filter(|l| !l.is_empty()) {
            let book = Book::parse_record(line)?;
            if book.name() == name {
                found = Some(book);
            }
        }
        Ok(found)
    }
}

/// 空ファイル、または末尾が改行なら true。
fn ends_with_newline(file: &mut std::fs::File) -> std::io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(true);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}
