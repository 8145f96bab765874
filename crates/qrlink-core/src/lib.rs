pub mod config;
pub mod logging;

pub mod fetch;
pub mod form;
pub mod provision;
pub mod qr_link;
pub mod url_model;
