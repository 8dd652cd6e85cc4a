pub mod http;
pub mod layering;
