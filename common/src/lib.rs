//! Domain types shared by every `massres` crate.
//!
//! Nothing in here touches the network or the filesystem: the sanitizer and the
//! validator are pure functions and the remaining types only describe data that
//! flows through the pipeline.

pub mod config;
pub mod hostname;
pub mod resolution;
