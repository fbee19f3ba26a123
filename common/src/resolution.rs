//! Results of pushing one input line through the pipeline.

use std::fmt;
use std::net::Ipv4Addr;

use thiserror::Error;

/// A hostname together with the IPv4 addresses it resolved to.
///
/// `addresses` keeps the order the resolver answered with and is never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub hostname: String,
    pub addresses: Vec<Ipv4Addr>,
}

impl Resolution {
    /// Returns `None` when there is nothing to report.
    pub fn new(hostname: impl Into<String>, addresses: Vec<Ipv4Addr>) -> Option<Self> {
        if addresses.is_empty() {
            return None;
        }
        Some(Self {
            hostname: hostname.into(),
            addresses,
        })
    }

    /// Space separated address list, e.g. `"1.2.3.4 5.6.7.8"`.
    pub fn joined_addresses(&self) -> String {
        self.addresses
            .iter()
            .map(Ipv4Addr::to_string)
            .collect::<Vec<String>>()
            .join(" ")
    }
}

/// `<hostname> <addr1> [<addr2> ...]`, the exact line printed on stdout.
impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.hostname, self.joined_addresses())
    }
}

/// Why a lookup produced no addresses.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("domain does not exist (NXDOMAIN)")]
    NxDomain,

    #[error("no A records")]
    NoRecords,

    #[error("query timed out")]
    Timeout,

    #[error("{0}")]
    Other(String),
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SkipReason {
    #[error("not a valid hostname")]
    Invalid,

    #[error("unresolved: {0}")]
    Unresolved(#[from] ResolveError),
}

/// What happened to a single input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Resolved(Resolution),
    Skipped(SkipReason),
}

impl Outcome {
    pub fn resolution(&self) -> Option<&Resolution> {
        match self {
            Outcome::Resolved(resolution) => Some(resolution),
            Outcome::Skipped(_) => None,
        }
    }
}
