//! Test suite for walletbox
//!
//! This module organizes all tests

#[cfg(feature = "ssr")]
pub mod common;
#[cfg(feature = "ssr")]
pub mod e2e;
pub mod integration;
#[cfg(feature = "ssr")]
pub mod property;
