//! Ledger domain models consumed by the forecasting pipeline.

pub mod account;
pub mod investment;
pub mod month;
pub mod transaction;

pub use account::{Account, AccountKind};
pub use investment::Investment;
pub use month::Month;
pub use transaction::{Transaction, TransactionType};
