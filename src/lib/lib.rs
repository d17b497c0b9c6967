pub mod config;
pub mod generate;
pub mod items;
pub mod users;
