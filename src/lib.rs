pub mod books;
pub mod catalog;
pub mod client;
pub mod core;
pub mod gateway;
pub mod utils;
