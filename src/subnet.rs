//! IPv4 subnet math
//!
//! Masks, network and broadcast addresses, and a small CIDR type. All math
//! is done on the `u32` form of the address.

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use crate::errors::SubnetError;

/// Netmask for a prefix length, e.g. `24` -> `255.255.255.0`.
pub fn mask_from_prefix(prefix: u8) -> Result<Ipv4Addr, SubnetError> {
    if prefix > 32 {
        return Err(SubnetError::InvalidPrefix(prefix));
    }
    Ok(Ipv4Addr::from(prefix_bits(prefix)))
}

fn prefix_bits(prefix: u8) -> u32 {
    match prefix {
        0 => 0,
        p => u32::MAX << (32 - u32::from(p.min(32))),
    }
}

/// Prefix length of a netmask. Masks with holes are rejected.
pub fn prefix_from_mask(mask: Ipv4Addr) -> Result<u8, SubnetError> {
    let bits = u32::from(mask);
    let ones = bits.leading_ones();
    if bits.checked_shl(ones).unwrap_or(0) != 0 {
        return Err(SubnetError::NonContiguousMask(mask));
    }
    Ok(ones as u8)
}

/// `ip` with all host bits cleared.
pub fn network_address(ip: Ipv4Addr, mask: Ipv4Addr) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(ip) & u32::from(mask))
}

/// `ip` with all host bits set.
pub fn broadcast_address(ip: Ipv4Addr, mask: Ipv4Addr) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(ip) | !u32::from(mask))
}

/// Whether `a` and `b` share a network under `mask`.
pub fn is_in_same_subnet(a: Ipv4Addr, b: Ipv4Addr, mask: Ipv4Addr) -> bool {
    network_address(a, mask) == network_address(b, mask)
}

/// An IPv4 network in CIDR form. The stored address never has host bits set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ipv4Subnet {
    network: Ipv4Addr,
    prefix: u8,
}

impl Ipv4Subnet {
    /// Build a subnet, clearing any host bits in `addr`.
    pub fn new(addr: Ipv4Addr, prefix: u8) -> Result<Self, SubnetError> {
        let mask = mask_from_prefix(prefix)?;
        Ok(Self {
            network: network_address(addr, mask),
            prefix,
        })
    }

    pub fn network(&self) -> Ipv4Addr {
        self.network
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    pub fn mask(&self) -> Ipv4Addr {
        Ipv4Addr::from(prefix_bits(self.prefix))
    }

    pub fn broadcast(&self) -> Ipv4Addr {
        broadcast_address(self.network, self.mask())
    }

    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        network_address(ip, self.mask()) == self.network
    }

    /// Usable host addresses. `/31` has two (point-to-point links), `/32` one.
    pub fn host_count(&self) -> u64 {
        match self.prefix {
            32 => 1,
            31 => 2,
            p => (1u64 << (32 - u32::from(p))) - 2,
        }
    }

    /// First and last usable host addresses.
    pub fn host_range(&self) -> (Ipv4Addr, Ipv4Addr) {
        let network = u32::from(self.network);
        let broadcast = u32::from(self.broadcast());
        if self.prefix >= 31 {
            (Ipv4Addr::from(network), Ipv4Addr::from(broadcast))
        } else {
            (Ipv4Addr::from(network + 1), Ipv4Addr::from(broadcast - 1))
        }
    }
}

impl fmt::Display for Ipv4Subnet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.network, self.prefix)
    }
}

impl FromStr for Ipv4Subnet {
    type Err = SubnetError;

    /// Accepts `a.b.c.d/prefix`, `a.b.c.d/mask`, or a bare address (`/32`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let malformed = || SubnetError::Malformed(s.to_string());

        let (addr, suffix) = match s.split_once('/') {
            Some((addr, suffix)) => (addr, Some(suffix)),
            None => (s, None),
        };
        let addr: Ipv4Addr = addr.parse().map_err(|_| malformed())?;

        let prefix = match suffix {
            None => 32,
            Some(suffix) if suffix.contains('.') => {
                let mask: Ipv4Addr = suffix.parse().map_err(|_| malformed())?;
                prefix_from_mask(mask)?
            }
            Some(suffix) => suffix.parse::<u8>().map_err(|_| malformed())?,
        };

        Self::new(addr, prefix)
    }
}
