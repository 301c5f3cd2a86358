//! Screen renderers.

pub mod host;
