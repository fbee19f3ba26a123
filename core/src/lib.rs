//! The resolve-and-report engine behind `massres`.
//!
//! * [`input`] yields raw lines from stdin or files.
//! * [`resolver`] is the DNS boundary: the [`resolver::Ipv4Resolver`] trait and the
//!   system resolver that implements it.
//! * [`pipeline`] cleans, validates and resolves each line and prints the results.
//! * [`report`] collects results into the optional Markdown table.

pub mod input;
pub mod pipeline;
pub mod report;
pub mod resolver;
