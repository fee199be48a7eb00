//! Backend API client

mod client;

pub mod auth;
pub mod reference;
pub mod upload;

pub use client::ApiConfig;
