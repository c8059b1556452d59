pub mod error;
pub mod config;
pub mod validation;
pub mod model;
pub mod db;
pub mod book;
pub mod cli;

pub use book::ContactBook;
pub use model::Contact;
