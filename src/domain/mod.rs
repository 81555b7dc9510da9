pub mod config;
pub mod mail;
pub mod observer;
pub mod page;
