//! Price-list scanner: loads `*price*` CSV files from a directory, derives a
//! per-kilogram price for every product, and offers search plus an HTML
//! export of everything loaded.

pub mod app;
pub mod config;
pub mod data;
pub mod ui;
