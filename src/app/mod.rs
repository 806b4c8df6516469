//! Application core: port traits, domain events, and the
//! [`BinMonitor`](service::BinMonitor) fusion loop.

pub mod events;
pub mod ports;
pub mod service;
