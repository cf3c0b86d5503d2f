//! Security-operations task board.
//!
//! The board tracks tasks across four fixed stages, persists the whole
//! collection to a local key-value store after every change, and exports it
//! as a spreadsheet. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
