pub mod accounts;
pub mod manager;
pub mod models;

pub use accounts::{AccountStore, StoreError};
pub use manager::DatabaseError;
pub use models::Account;
