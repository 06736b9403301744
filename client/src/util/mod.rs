//! Browser glue shared by components.

#[cfg(feature = "csr")]
pub mod dom_bounds;
#[cfg(feature = "csr")]
pub mod global_listeners;
pub mod pointer;
