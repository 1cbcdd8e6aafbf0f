//! Ordered report of the fields derived from one CIDR block

use ipcalc_core::{ByteAddress, IpClass};
use serde::Serialize;

use crate::{Cidr, Result};

/// Every field derived from a CIDR block, computed once
///
/// Field order matches the printed report: address, network, broadcast,
/// binary mask, usable range, host count, class, private flag.
///
/// # Examples
///
/// ```
/// use ipcalc_cidr::Report;
///
/// let report = Report::from_raw("91.124.230.205/30").unwrap();
/// assert_eq!(report.network.to_string(), "91.124.230.204");
/// assert_eq!(report.usable_hosts, 2);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Host address as given
    pub address: ByteAddress,
    /// Network address (host bits zeroed)
    pub network: ByteAddress,
    /// Broadcast address (host bits set)
    pub broadcast: ByteAddress,
    /// Network mask rendered as dotted binary octets
    pub binary_mask: String,
    /// First usable host address
    pub first_usable: ByteAddress,
    /// Penultimate usable host address
    pub penultimate_usable: ByteAddress,
    /// Usable host count (negative above /31, by formula)
    pub usable_hosts: i64,
    /// Classful category of the host address
    pub class: IpClass,
    /// Whether the host address is in an RFC 1918 block
    pub private: bool,
}

impl Report {
    /// Parse a raw `"A.B.C.D/P"` string and derive all fields
    pub fn from_raw(raw: &str) -> Result<Self> {
        Ok(Self::from_cidr(&Cidr::parse(raw)?))
    }

    /// Derive all fields from an already-parsed CIDR block
    pub fn from_cidr(cidr: &Cidr) -> Self {
        Self {
            address: cidr.addr(),
            network: cidr.network(),
            broadcast: cidr.broadcast(),
            binary_mask: cidr.mask().to_binary(),
            first_usable: cidr.first_usable(),
            penultimate_usable: cidr.penultimate_usable(),
            usable_hosts: cidr.usable_hosts(),
            class: cidr.class(),
            private: cidr.is_private(),
        }
    }

    /// The labeled fields in report order, rendered for display
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("IP address", self.address.to_string()),
            ("Network Address", self.network.to_string()),
            ("Broadcast Address", self.broadcast.to_string()),
            ("Binary Subnet Mask", self.binary_mask.clone()),
            ("First usable host IP", self.first_usable.to_string()),
            ("Penultimate usable host IP", self.penultimate_usable.to_string()),
            ("Number of usable Hosts", self.usable_hosts.to_string()),
            ("IP class", self.class.to_string()),
            ("IP type private", self.private.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_from_raw() {
        let report = Report::from_raw("91.124.230.205/30").unwrap();

        assert_eq!(report.address, ByteAddress([91, 124, 230, 205]));
        assert_eq!(report.network, ByteAddress([91, 124, 230, 204]));
        assert_eq!(report.broadcast, ByteAddress([91, 124, 230, 207]));
        assert_eq!(report.binary_mask, "11111111.11111111.11111111.11111100");
        assert_eq!(report.first_usable, ByteAddress([91, 124, 230, 205]));
        assert_eq!(report.usable_hosts, 2);
        assert_eq!(report.class, IpClass::A);
        assert!(!report.private);
    }

    #[test]
    fn test_report_rejects_malformed_input() {
        assert!(Report::from_raw("91.124.230.205").is_err());
        assert!(Report::from_raw("91.124.230/30").is_err());
    }

    #[test]
    fn test_field_order_and_labels() {
        let report = Report::from_raw("192.168.1.15/24").unwrap();
        let fields = report.fields();

        let labels: Vec<&str> = fields.iter().map(|(label, _)| *label).collect();
        assert_eq!(
            labels,
            [
                "IP address",
                "Network Address",
                "Broadcast Address",
                "Binary Subnet Mask",
                "First usable host IP",
                "Penultimate usable host IP",
                "Number of usable Hosts",
                "IP class",
                "IP type private",
            ]
        );

        assert_eq!(fields[0].1, "192.168.1.15");
        assert_eq!(fields[6].1, "254");
        assert_eq!(fields[7].1, "C");
        assert_eq!(fields[8].1, "true");
    }

    #[test]
    fn test_report_serialization() {
        let report = Report::from_raw("91.124.230.205/30").unwrap();
        let json = serde_json::to_value(&report).expect("serialization failed");

        assert_eq!(json["address"], "91.124.230.205");
        assert_eq!(json["network"], "91.124.230.204");
        assert_eq!(json["binary_mask"], "11111111.11111111.11111111.11111100");
        assert_eq!(json["usable_hosts"], 2);
        assert_eq!(json["class"], "A");
        assert_eq!(json["private"], false);
    }
}
