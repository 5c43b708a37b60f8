pub mod cli;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod models;
pub mod output;
pub mod parser;
pub mod report;
pub mod service;
pub mod tui;
