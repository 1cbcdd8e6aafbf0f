//! CIDR report example
//!
//! Run with: cargo run --example cidr_report

use ipcalc_cidr::{Cidr, Report};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cidr = Cidr::parse("192.168.1.15/24")?;

    println!("CIDR: {}", cidr);
    println!("─────────────────────────────");
    for (label, value) in Report::from_cidr(&cidr).fields() {
        println!("{}: {}", label, value);
    }

    println!("\nChecking address containment:");
    let inside = Cidr::parse("192.168.1.100/32")?.addr();
    let outside = Cidr::parse("192.168.2.1/32")?.addr();
    println!("{} in range? {}", inside, cidr.contains(inside));
    println!("{} in range?   {}", outside, cidr.contains(outside));

    Ok(())
}
