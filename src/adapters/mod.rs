//! Adapters — the outer ring of the hexagon. Everything here exists to
//! satisfy a port trait on behalf of the domain core.

pub mod hardware;
pub mod log_sink;
pub mod time;
