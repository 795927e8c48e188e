//! Wallet Module
//!
//! One wallet per user, created during registration.
//!
//! - **`balance`** - `to_balance` / `from_balance` conversion pair
//! - **`repository`** - Wallet queries
//! - **`handlers`** - `GET /api/wallet/balance`

pub mod balance;
pub mod handlers;
pub mod repository;

pub use balance::{from_balance, to_balance, BalanceError};
pub use handlers::get_balance;
pub use repository::{create_wallet, find_wallet_by_user, set_balance, Wallet};
