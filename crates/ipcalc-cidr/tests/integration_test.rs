use ipcalc_cidr::{Cidr, Report};
use ipcalc_core::{ByteAddress, IpClass};

#[test]
fn test_full_report_slash_30() {
    let report = Report::from_raw("91.124.230.205/30").expect("valid CIDR");

    assert_eq!(report.address.to_string(), "91.124.230.205");
    assert_eq!(report.network.to_string(), "91.124.230.204");
    assert_eq!(report.broadcast.to_string(), "91.124.230.207");
    assert_eq!(report.binary_mask, "11111111.11111111.11111111.11111100");
    assert_eq!(report.first_usable.to_string(), "91.124.230.205");
    assert_eq!(report.usable_hosts, 2);
    assert_eq!(report.class, IpClass::A);
    assert!(!report.private);
}

#[test]
fn test_host_count_slash_8() {
    let report = Report::from_raw("91.124.230.205/8").expect("valid CIDR");
    assert_eq!(report.usable_hosts, 16777214);
}

#[test]
fn test_private_classification() {
    assert!(Report::from_raw("172.25.255.255/8").unwrap().private);
    assert!(!Report::from_raw("172.32.0.0/8").unwrap().private);
    assert!(Report::from_raw("10.205.13.24/8").unwrap().private);
    assert!(Report::from_raw("192.168.32.45/8").unwrap().private);
}

#[test]
fn test_class_d_address() {
    let report = Report::from_raw("225.124.230.205/30").expect("valid CIDR");
    assert_eq!(report.class, IpClass::D);
}

#[test]
fn test_mask_slash_9() {
    let cidr = Cidr::parse("0.0.0.0/9").expect("valid CIDR");
    assert_eq!(cidr.mask(), ByteAddress([255, 128, 0, 0]));
}

#[test]
fn test_leading_zeros_normalized() {
    let report = Report::from_raw("215.017.125.177/28").expect("valid CIDR");
    assert_eq!(report.address.to_string(), "215.17.125.177");
    assert_eq!(report.penultimate_usable.to_string(), "215.17.125.189");
}
