//! Store and client against a served router

pub mod client_flow;
