use std::sync::Arc;

use crate::domain::model::book::Book;

/// 永続化の抽象。ユースケース側が宣言し、Infra層が実装する。
///
/// ユースケースはこのtraitにのみ依存し、具体的な保存先を知らない。
pub trait BookStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// 1件分の表現を保存する。
    fn save(&self, content: &str) -> Result<(), Self::Error>;

    /// 名前で最後に保存されたBookを返す。無ければ `None`。
    fn get(&self, name: &str) -> Result<Option<Book>, Self::Error>;
}

impl<S: BookStore + ?Sized> BookStore for Arc<S> {
    type Error = S::Error;

    fn save(&self, content: &str) -> Result<(), Self::Error> {
        (**self).save(content)
    }

    fn get(&self, name: &str) -> Result<Option<Book>, Self::Error> {
        (**self).get(name)
    }
}
