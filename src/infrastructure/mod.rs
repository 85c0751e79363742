pub mod auth;
pub mod config;
pub mod http;
pub mod i18n;
pub mod provider;
