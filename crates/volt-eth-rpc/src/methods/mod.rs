//! JSON-RPC method implementations

pub mod build;
pub mod eth;
pub mod net;
pub mod web3;
