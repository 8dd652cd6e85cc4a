use std::fmt::{self, Write as _};
use std::str::FromStr;

use crate::domain::error::DomainError;

const RECORD_PREFIX: &str = "Book{n: ";
const RECORD_SEPARATOR: &str = ", a: ";
const RECORD_SUFFIX: &str = "}";

/// 本のエンティティ。配信手段（HTTP・ファイル）には依存しない。
///
/// 値の検証は行わない（空文字列も許容）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    name: String,
    author: String,
}

impl Book {
    pub fn new(name: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            author: author.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    /// 永続化用の1行表現 `Book{n: <name>, a: <author>}` を返す。
    ///
    /// `\`・改行・区切り `, a: ` を含むフィールドだけエスケープされ、
    /// それ以外はそのまま埋め込まれる。出力は常に1行。
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// `render` の出力を Book に戻す。
    /// 名前はエスケープされていない最初の `, a: ` までとして扱う。
    pub fn parse_record(record: &str) -> Result<Self, DomainError> {
        let malformed = || DomainError::MalformedRecord(record.to_string());

        let inner = record
            .strip_prefix(RECORD_PREFIX)
            .and_then(|rest| rest.strip_suffix(RECORD_SUFFIX))
            .ok_or_else(malformed)?;

        let mut fields = [String::new(), String::new()];
        let mut current = 0;
        let mut chars = inner.char_indices();
        while let Some((i, c)) = chars.next() {
            match c {
                '\\' => {
                    let unescaped = match chars.next() {
                        Some((_, 'n')) => '\n',
                        Some((_, 'r')) => '\r',
                        Some((_, e @ ('\\' | ','))) => e,
                        _ => return Err(malformed()),
                    };
                    fields[current].push(unescaped);
                }
                ',' if current == 0 && inner[i..].starts_with(RECORD_SEPARATOR) => {
                    current = 1;
                    // 区切りはASCIIなので残り文字数 = バイト数
                    for _ in 1..RECORD_SEPARATOR.len() {
                        chars.next();
                    }
                }
                _ => fields[current].push(c),
            }
        }
        if current == 0 {
            return Err(malformed());
        }

        let [name, author] = fields;
        Ok(Self::new(name, author))
    }
}

fn write_field(f: &mut fmt::Formatter<'_>, field: &str) -> fmt::Result {
    for (i, c) in field.char_indices() {
        match c {
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            ',' if field[i..].starts_with(RECORD_SEPARATOR) => f.write_str("\\,")?,
            _ => f.write_char(c)?,
        }
    }
    Ok(())
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(RECORD_PREFIX)?;
        write_field(f, &self.name)?;
        f.write_str(RECORD_SEPARATOR)?;
        write_field(f, &self.author)?;
        f.write_str(RECORD_SUFFIX)
    }
}

impl FromStr for Book {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_record(s)
    }
}
