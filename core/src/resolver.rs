//! The boundary between the pipeline and DNS.
//!
//! High-level code depends on [`Ipv4Resolver`] only. [`SystemResolver`] is the
//! concrete implementation and talks to the nameservers from the system
//! configuration through `hickory-resolver`.

use std::net::Ipv4Addr;
use std::str::FromStr;

use async_trait::async_trait;
use hickory_resolver::TokioAsyncResolver;
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::error::{ResolveError as HickoryError, ResolveErrorKind};
use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::proto::rr::Name;
use hickory_resolver::system_conf;
use massres_common::resolution::ResolveError;
use tracing::{trace, warn};

/// Resolves the A record set of a hostname.
#[async_trait]
pub trait Ipv4Resolver {
    /// Issues a single query. Addresses come back in the order the server sent them.
    async fn lookup_ipv4(&self, hostname: &str) -> Result<Vec<Ipv4Addr>, ResolveError>;
}

pub struct SystemResolver {
    inner: TokioAsyncResolver,
}

impl SystemResolver {
    /// Builds a resolver from `/etc/resolv.conf` (or the platform equivalent).
    ///
    /// Falls back to the library defaults when the system configuration is unreadable.
    pub fn from_system_conf() -> Self {
        let (config, opts) = match system_conf::read_system_conf() {
            Ok(conf) => conf,
            Err(e) => {
                warn!("Could not read system resolver configuration, using defaults: {e}");
                (ResolverConfig::default(), ResolverOpts::default())
            }
        };
        Self::new(config, opts)
    }

    /// Every lookup goes to the wire: the answer cache is disabled and each query is
    /// sent once.
    pub fn new(config: ResolverConfig, opts: ResolverOpts) -> Self {
        Self {
            inner: TokioAsyncResolver::tokio(config, single_query(opts)),
        }
    }
}

fn single_query(mut opts: ResolverOpts) -> ResolverOpts {
    opts.cache_size = 0;
    opts.attempts = 1;
    opts
}

/// Treats `hostname` as absolute so the system search list is never appended.
fn absolute_name(hostname: &str) -> Result<Name, ResolveError> {
    let mut name = Name::from_str(hostname).map_err(|e| ResolveError::Other(e.to_string()))?;
    name.set_fqdn(true);
    Ok(name)
}

#[async_trait]
impl Ipv4Resolver for SystemResolver {
    async fn lookup_ipv4(&self, hostname: &str) -> Result<Vec<Ipv4Addr>, ResolveError> {
        let name = absolute_name(hostname)?;
        let lookup = self.inner.ipv4_lookup(name).await.map_err(|e| {
            trace!(hostname, "lookup failed: {e}");
            classify(&e)
        })?;

        Ok(lookup.iter().map(|a| a.0).collect())
    }
}

fn classify(err: &HickoryError) -> ResolveError {
    match err.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. }
            if *response_code == ResponseCode::NXDomain =>
        {
            ResolveError::NxDomain
        }
        ResolveErrorKind::NoRecordsFound { .. } => ResolveError::NoRecords,
        ResolveErrorKind::Timeout => ResolveError::Timeout,
        _ => ResolveError::Other(err.to_string()),
    }
}
