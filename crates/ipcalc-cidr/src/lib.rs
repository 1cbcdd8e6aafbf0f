//! CIDR parsing and IPv4 subnet arithmetic
//!
//! Provides utilities for working with CIDR notation:
//! - Parse CIDR notation (e.g., "192.168.0.0/24")
//! - Derive network mask, network and broadcast addresses
//! - Usable host range and host count
//! - Check if an address is in a CIDR block
//!
//! # Examples
//!
//! ```
//! use ipcalc_cidr::Cidr;
//! use ipcalc_core::ByteAddress;
//!
//! let cidr = Cidr::parse("192.168.1.15/24").unwrap();
//! assert_eq!(cidr.prefix_len(), 24);
//! assert_eq!(cidr.network(), ByteAddress([192, 168, 1, 0]));
//! assert_eq!(cidr.broadcast(), ByteAddress([192, 168, 1, 255]));
//! assert!(cidr.contains(ByteAddress([192, 168, 1, 1])));
//! assert!(!cidr.contains(ByteAddress([192, 168, 2, 1])));
//! ```

use ipcalc_core::{ByteAddress, IpClass};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

pub mod report;

pub use report::Report;

/// CIDR errors
#[derive(Error, Debug)]
pub enum CidrError {
    /// Invalid CIDR notation
    #[error("Invalid CIDR notation: {0}")]
    InvalidNotation(String),

    /// Invalid IP address
    #[error("Invalid IP address: {0}")]
    InvalidIpAddress(String),

    /// Invalid prefix length
    #[error("Invalid prefix length: {0} (must be 0-32)")]
    InvalidPrefixLength(u8),
}

pub type Result<T> = std::result::Result<T, CidrError>;

/// CIDR block representation
///
/// Keeps the host address exactly as written, so the original address is
/// recoverable alongside the derived network values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cidr {
    /// Host address as given (not masked down to the network)
    addr: ByteAddress,
    /// Prefix length (0-32)
    prefix_len: u8,
    /// Network mask
    mask: ByteAddress,
}

impl Cidr {
    /// Parse CIDR notation string
    ///
    /// Splits on the last `/`; the left part must be 4 dotted decimal
    /// octets, the right part a prefix length in 0-32. Surrounding
    /// whitespace is trimmed. Octets written with leading zeros parse as
    /// their decimal value.
    ///
    /// # Examples
    ///
    /// ```
    /// use ipcalc_cidr::Cidr;
    ///
    /// let cidr = Cidr::parse("10.0.0.0/8").unwrap();
    /// assert_eq!(cidr.prefix_len(), 8);
    ///
    /// assert!(Cidr::parse("10.0.0.0").is_err());
    /// assert!(Cidr::parse("10.0.0.0/33").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        let (ip_str, prefix_str) = raw
            .rsplit_once('/')
            .ok_or_else(|| CidrError::InvalidNotation("Expected format: x.x.x.x/prefix".to_string()))?;

        let prefix_len: u8 = prefix_str
            .parse()
            .map_err(|_| CidrError::InvalidNotation(format!("Invalid prefix: {}", prefix_str)))?;

        let addr = Self::parse_octets(ip_str)?;

        Self::new(addr, prefix_len)
    }

    /// Parse a dotted-decimal IPv4 string into its 4 octets
    fn parse_octets(ip: &str) -> Result<ByteAddress> {
        let segments: Vec<&str> = ip.split('.').collect();
        if segments.len() != 4 {
            return Err(CidrError::InvalidIpAddress("Expected 4 octets".to_string()));
        }

        let mut octets = [0u8; 4];
        for (i, segment) in segments.iter().enumerate() {
            octets[i] = segment
                .parse()
                .map_err(|_| CidrError::InvalidIpAddress(format!("Invalid octet: {}", segment)))?;
        }

        Ok(ByteAddress(octets))
    }

    /// Create a CIDR block from an already-parsed address and prefix length
    ///
    /// # Arguments
    ///
    /// * `addr` - host address
    /// * `prefix_len` - prefix length (0-32)
    pub fn new(addr: ByteAddress, prefix_len: u8) -> Result<Self> {
        if prefix_len > 32 {
            return Err(CidrError::InvalidPrefixLength(prefix_len));
        }

        Ok(Self {
            addr,
            prefix_len,
            mask: mask_for(prefix_len),
        })
    }

    /// Get the host address as given
    pub fn addr(&self) -> ByteAddress {
        self.addr
    }

    /// Get prefix length
    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    /// Get network mask
    pub fn mask(&self) -> ByteAddress {
        self.mask
    }

    /// Get network address (host bits zeroed)
    pub fn network(&self) -> ByteAddress {
        self.addr & self.mask
    }

    /// Get broadcast address (host bits set)
    pub fn broadcast(&self) -> ByteAddress {
        self.addr | !self.mask
    }

    /// Get first usable IP (network address + 1)
    ///
    /// The increment touches only the final octet and wraps within it; it
    /// does not carry into the preceding octets.
    pub fn first_usable(&self) -> ByteAddress {
        let mut octets = self.network().octets();
        octets[3] = octets[3].wrapping_add(1);
        ByteAddress(octets)
    }

    /// Get last usable IP (broadcast address - 1)
    ///
    /// Same final-octet-only arithmetic as [`first_usable`](Self::first_usable).
    pub fn last_usable(&self) -> ByteAddress {
        let mut octets = self.broadcast().octets();
        octets[3] = octets[3].wrapping_sub(1);
        ByteAddress(octets)
    }

    /// Get penultimate usable IP (broadcast address - 2)
    ///
    /// Same final-octet-only arithmetic as [`first_usable`](Self::first_usable).
    pub fn penultimate_usable(&self) -> ByteAddress {
        let mut octets = self.broadcast().octets();
        octets[3] = octets[3].wrapping_sub(2);
        ByteAddress(octets)
    }

    /// Number of usable hosts: `2^(32 - prefix) - 2`
    ///
    /// The formula is applied over the whole 0-32 range, so /31 yields 0
    /// and /32 yields -1.
    pub fn usable_hosts(&self) -> i64 {
        (1i64 << (32 - self.prefix_len)) - 2
    }

    /// Get total number of addresses in this CIDR block
    pub fn size(&self) -> u64 {
        if self.prefix_len == 0 {
            1u64 << 32
        } else {
            1u64 << (32 - self.prefix_len)
        }
    }

    /// Classful category of the host address
    pub fn class(&self) -> IpClass {
        self.addr.class()
    }

    /// Check whether the host address is in an RFC 1918 private block
    pub fn is_private(&self) -> bool {
        self.addr.is_private()
    }

    /// Check if an address is in this CIDR block
    pub fn contains(&self, addr: ByteAddress) -> bool {
        (addr & self.mask) == self.network()
    }
}

/// Network mask for a prefix length: the first `prefix_len` bits set
///
/// Callers have already bounded `prefix_len` to 0-32.
fn mask_for(prefix_len: u8) -> ByteAddress {
    let bits = if prefix_len == 0 {
        0
    } else {
        !((1u64 << (32 - prefix_len)) - 1) as u32
    };
    ByteAddress::from_u32(bits)
}

impl fmt::Display for Cidr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix_len)
    }
}

impl Serialize for Cidr {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Cidr {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Cidr, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Cidr::parse(&s).map_err(de::Error::custom)
    }
}
