//! Routes Module
//!
//! - **`router`** - Builds the final router (fallback, tracing, state)
//! - **`api_routes`** - Account and wallet route table with guard composition

pub mod api_routes;
pub mod router;

pub use router::create_router;
