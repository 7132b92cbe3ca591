use tracing::debug;

use crate::bmc::RawFirmwareInfo;
use crate::hardware::types::{Bios, Bmc, Common, Cpld, Device, Firmware};

/// Attach BIOS, BMC and (when present) CPLD firmware to the device.
///
/// These components carry the system vendor and model, so identity must be
/// collected first.
pub fn collect_firmware(device: &mut Device, firmware: &RawFirmwareInfo) {
    let common = |version: &str| Common {
        vendor: device.vendor.clone(),
        model: device.model.clone(),
        firmware: Some(Firmware::installed(version)),
        ..Default::default()
    };

    let bios = Bios {
        common: common(&firmware.bios_version),
    };
    let bmc = Bmc {
        common: common(&firmware.bmc_version),
    };
    let cpld = firmware.cpld_version().map(|version| Cpld {
        common: common(version),
    });

    device.bios = Some(bios);
    device.bmc = Some(bmc);
    if cpld.is_none() {
        debug!("controller reports no CPLD");
    }
    device.cpld = cpld;

    device.insert_metadata("node_id", &firmware.node_id);
}
