// Adapters layer: concrete implementations of the domain ports and the HTTP surface.

pub mod clock;
pub mod http;
pub mod memory;
