pub mod draw;
pub mod models;
pub mod reveal;
pub mod utils;
