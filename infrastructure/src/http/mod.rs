//! HTTP adapter for the same-origin content proxy

mod reqwest_client;

pub use reqwest_client::ReqwestHttpClient;
