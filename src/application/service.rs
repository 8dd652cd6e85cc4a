use crate::domain::model::book::Book;

use super::error::AppError;
use super::store::BookStore;

/// 本の追加ユースケース。
/// Entityを組み立て、保存は `BookStore` に委譲する。
pub struct BookService<S: BookStore> {
    store: S,
}

impl<S: BookStore> BookService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Bookを作成し、その表現を1回だけ保存する。
    pub fn add_book(&self, name: &str, author: &str) -> Result<Book, AppError> {
        let book = Book::new(name, author);
        self.store
            .save(&book.render())
            .map_err(|e| AppError::Storage(Box::new(e)))?;
        Ok(book)
    }

    /// 名前でBookを取得する。
    pub fn get_book(&self, name: &str) -> Result<Book, AppError> {
        self.store
            .get(name)
            .map_err(|e| AppError::Storage(Box::new(e)))?
            .ok_or_else(|| AppError::BookNotFound(name.to_string()))
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
