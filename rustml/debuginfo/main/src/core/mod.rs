#[cfg(feature = "accelerator")]
pub(crate) mod accelerator;
#[cfg(feature = "accelerator")]
pub(crate) mod config;
pub(crate) mod debug_info;
pub(crate) mod device;
pub(crate) mod logical;
pub(crate) mod reorder;
pub(crate) mod resolver;
pub(crate) mod tuple;
