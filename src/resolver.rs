use std::{
    fmt,
    net::{IpAddr, Ipv4Addr, Ipv6Addr},
};

use tokio::net;
use tracing::debug;

use crate::{Error, Result};

/// First IPv4 and first IPv6 address of a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lookup {
    pub ipv4: Option<Ipv4Addr>,
    pub ipv6: Option<Ipv6Addr>,
}

impl Lookup {
    /// Pick the first address of each family from `addrs`, in resolver order.
    ///
    /// IPv4-mapped IPv6 addresses count as IPv4.
    pub fn from_addrs(host: &str, addrs: &[IpAddr]) -> Result<Lookup> {
        if addrs.is_empty() {
            return Err(Error::NoAddresses(host.to_owned()));
        }

        let ipv4 = addrs.iter().find_map(as_ipv4);
        let ipv6 = addrs.iter().find_map(|ip| match ip {
            IpAddr::V6(v6) if v6.to_ipv4_mapped().is_none() => Some(*v6),
            _ => None,
        });

        Ok(Lookup { ipv4, ipv6 })
    }
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ipv4 {
            Some(ip) => writeln!(f, "{ip}")?,
            None => writeln!(f, "ipv4 - none")?,
        }
        match self.ipv6 {
            Some(ip) => write!(f, "{ip}"),
            None => write!(f, "ipv6 - none"),
        }
    }
}

fn as_ipv4(ip: &IpAddr) -> Option<Ipv4Addr> {
    match ip {
        IpAddr::V4(v4) => Some(*v4),
        IpAddr::V6(v6) => v6.to_ipv4_mapped(),
    }
}

/// Resolve `host` with the system resolver.
pub async fn lookup(host: &str) -> Result<Vec<IpAddr>> {
    let addrs = net::lookup_host((host, 0))
        .await
        .map_err(|source| Error::Lookup {
            host: host.to_owned(),
            source,
        })?;

    let ips: Vec<IpAddr> = addrs.map(|addr| addr.ip()).collect();
    debug!(host, count = ips.len(), "resolved");

    Ok(ips)
}

pub async fn resolve(host: &str) -> Result<Lookup> {
    let addrs = lookup(host).await?;
    Lookup::from_addrs(host, &addrs)
}
