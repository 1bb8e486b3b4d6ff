pub mod cache;
pub mod calculator;
pub mod config;
pub mod grid;
pub mod logic;
