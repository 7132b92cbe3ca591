use std::net::Ipv4Addr;
use std::str::FromStr;

use ipnet::Ipv4Net;
use mac_address::MacAddress;
use tracing::{debug, info};

use crate::bmc::RawInterface;
use crate::hardware::types::{Device, LinkStatus, Nic, NicPort};

/// Nominal speed reported for every controller-managed port (gigabit ethernet).
pub const NOMINAL_SPEED_BITS: u64 = 1_000_000_000;

/// Build one single-port NIC per network interface the controller reports.
pub fn collect_network(device: &mut Device, interfaces: &[RawInterface]) {
    for iface in interfaces {
        // An interface without a usable hardware address is dropped entirely
        let mac_address = match MacAddress::from_str(&iface.mac_address) {
            Ok(mac) => mac,
            Err(_) => {
                debug!(
                    interface = %iface.interface_name,
                    mac_address = %iface.mac_address,
                    "skipping interface with invalid MAC address"
                );
                continue;
            }
        };

        let link_status = if iface.lan_enabled() {
            LinkStatus::LinkUp
        } else {
            LinkStatus::LinkDown
        };

        let mut ip_addresses = Vec::new();
        if let Some(address) = iface.ipv4_address() {
            match ipv4_cidr(address, &iface.ipv4_subnet) {
                Some(net) => ip_addresses.push(net),
                None => info!(
                    interface = %iface.interface_name,
                    address,
                    subnet = %iface.ipv4_subnet,
                    "invalid ipv4 address"
                ),
            }
        }

        device.nics.push(Nic {
            id: iface.interface_name.clone(),
            ports: vec![NicPort {
                id: iface.interface_name.clone(),
                speed_bits: NOMINAL_SPEED_BITS,
                mac_address: mac_address.to_string().to_lowercase(),
                link_status,
                ip_addresses,
            }],
            ..Default::default()
        });
    }
}

/// Address in CIDR form. Only an unparseable address fails; a subnet that
/// is not a valid netmask yields a zero-length prefix.
fn ipv4_cidr(address: &str, subnet: &str) -> Option<Ipv4Net> {
    let address = Ipv4Addr::from_str(address).ok()?;
    Ipv4Net::new(address, prefix_len(subnet)).ok()
}

fn prefix_len(subnet: &str) -> u8 {
    let Ok(mask) = Ipv4Addr::from_str(subnet).map(u32::from) else {
        return 0;
    };

    // netmask bits must be contiguous
    let ones = mask.leading_ones();
    if mask.checked_shl(ones).unwrap_or(0) != 0 {
        return 0;
    }
    ones as u8
}
