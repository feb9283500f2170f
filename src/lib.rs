pub mod cli;
pub mod config;
pub mod error;
pub mod menu;
pub mod output;
pub mod pages;
pub mod session;
pub mod spreadsheet;
pub mod store;
