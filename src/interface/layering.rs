//! The two layering styles, expressed as two configurations of one pipeline.
//!
//! Both run entity → use case → store; they differ only in route, literal
//! input, and which store handle they are wired to.

use std::fmt;

/// パイプライン構成。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layering {
    /// Entities / Use Cases / Interface Adapters / Frameworks & Drivers
    Clean,
    /// IO / Use Cases / Handlers（interfaceは利用側で宣言）
    Io,
}

impl Layering {
    pub const ALL: [Layering; 2] = [Layering::Clean, Layering::Io];

    pub fn route(self) -> &'static str {
        match self {
            Layering::Clean => "/clean",
            Layering::Io => "/myio",
        }
    }

    /// ハンドラが使う固定の (name, author)。
    pub fn sample(self) -> (&'static str, &'static str) {
        match self {
            Layering::Clean => ("A man of the people", "Chinua Achebe"),
            Layering::Io => ("Africa Kills Her Sun", "Ken Saro Wiwa"),
        }
    }
}

impl fmt::Display for Layering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layering::Clean => f.write_str("clean"),
            Layering::Io => f.write_str("myio"),
        }
    }
}
