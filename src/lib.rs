//! Daily "most read" Wikipedia articles, ranked and laid out either as a
//! compact home-screen widget or as a full table.

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod i18n;
pub mod logging;
pub mod render;
pub mod services;
pub mod sources;
