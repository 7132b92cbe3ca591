use std::collections::BTreeMap;

use tracing::debug;

use crate::bmc::{ComponentKind, RawComponent, RawFirmwareInfo};
use crate::hardware::types::{Common, Cpu, Device, Drive, Firmware, Memory};
use crate::hardware::vendors::VendorLookup;

/// Firmware metadata key for the embedded management-engine version.
pub const ME_VERSION_KEY: &str = "Intel_ME_version";

/// Map the controller's component inventory onto CPU, memory and drive entries.
pub fn collect_components(
    device: &mut Device,
    firmware: &RawFirmwareInfo,
    components: &[RawComponent],
    vendors: &dyn VendorLookup,
) {
    for component in components {
        match component.kind() {
            ComponentKind::Cpu => device.cpus.push(map_cpu(component, firmware)),
            ComponentKind::Memory => device.memory.push(map_memory(component)),
            ComponentKind::Storage => device.drives.push(map_drive(component, vendors)),
            ComponentKind::Unknown => {
                debug!(
                    device_type = %component.device_type,
                    device_id = component.device_id,
                    "skipping component"
                );
            }
        }
    }
}

fn map_cpu(component: &RawComponent, firmware: &RawFirmwareInfo) -> Cpu {
    let metadata = BTreeMap::from([(ME_VERSION_KEY.to_string(), firmware.me_version.clone())]);

    Cpu {
        common: Common {
            vendor: component.product_manufacturer_name.clone(),
            model: component.product_name.clone(),
            firmware: Some(Firmware {
                installed: firmware.microcode_version.clone(),
                metadata: Some(metadata),
            }),
            ..Default::default()
        },
    }
}

fn map_memory(component: &RawComponent) -> Memory {
    Memory {
        common: Common {
            vendor: component.product_manufacturer_name.clone(),
            serial: component.product_serial_number.clone(),
            description: component.product_extra.clone(),
            ..Default::default()
        },
        part_number: component.product_part_number.clone(),
        mem_type: component.device_name.clone(),
    }
}

fn map_drive(component: &RawComponent, vendors: &dyn VendorLookup) -> Drive {
    // Some controllers only identify drives through their part number
    let vendor = match (component.manufacturer(), component.part_number()) {
        (None, Some(part_number)) => vendors
            .vendor_for(part_number)
            .or_else(|| vendors.vendor_for(&component.product_name)),
        _ => None,
    };

    Drive {
        common: Common {
            vendor: vendor.unwrap_or_default(),
            serial: component.product_serial_number.clone(),
            product_name: component.product_name.clone(),
            ..Default::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardware::vendors::{VendorEntry, VendorTable};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn firmware() -> RawFirmwareInfo {
        RawFirmwareInfo {
            microcode_version: "000000ca".to_string(),
            me_version: "5.1.3.78".to_string(),
            ..Default::default()
        }
    }

    fn component(
        device_type: &str,
        manufacturer: &str,
        product_name: &str,
        part_number: &str,
    ) -> RawComponent {
        RawComponent {
            device_type: device_type.to_string(),
            product_manufacturer_name: manufacturer.to_string(),
            product_name: product_name.to_string(),
            product_part_number: part_number.to_string(),
            product_serial_number: "SN0001".to_string(),
            ..Default::default()
        }
    }

    fn acme_vendors() -> VendorTable {
        VendorTable::with_entries(&[VendorEntry {
            prefix: "ACME-".to_string(),
            vendor: "Acme".to_string(),
        }])
    }

    #[test]
    fn cpu_carries_microcode_and_me_version() {
        let mut device = Device::default();
        let cpu = component("CPU", "Intel(R) Corporation", "Xeon E-2278G", "N/A");

        collect_components(&mut device, &firmware(), &[cpu], &VendorTable::default());

        assert_eq!(device.cpus.len(), 1);
        let common = &device.cpus[0].common;
        assert_eq!(common.vendor, "Intel(R) Corporation");
        assert_eq!(common.model, "Xeon E-2278G");

        let firmware = common.firmware.as_ref().expect("cpu firmware");
        assert_eq!(firmware.installed, "000000ca");
        let me_version = firmware.metadata.as_ref().and_then(|m| m.get(ME_VERSION_KEY));
        assert_eq!(me_version.map(String::as_str), Some("5.1.3.78"));
    }

    #[test]
    fn every_cpu_record_is_kept() {
        let mut device = Device::default();
        let cpu = component("CPU", "Intel(R) Corporation", "Xeon E-2278G", "N/A");

        let cpus = [cpu.clone(), cpu];

        collect_components(&mut device, &firmware(), &cpus, &VendorTable::default());

        assert_eq!(device.cpus.len(), 2);
        assert_eq!(device.cpus[0], device.cpus[1]);
    }

    #[test]
    fn memory_uses_device_name_as_type() {
        let mut device = Device::default();
        let mut dimm = component("Memory", "Micron", "N/A", "18ASF2G72HZ-2G6E1");
        dimm.device_name = "DDR4".to_string();
        dimm.product_extra = "DIMM_A1 16GB".to_string();

        collect_components(&mut device, &firmware(), &[dimm], &VendorTable::default());

        assert_eq!(
            device.memory,
            vec![Memory {
                common: Common {
                    vendor: "Micron".to_string(),
                    serial: "SN0001".to_string(),
                    description: "DIMM_A1 16GB".to_string(),
                    ..Default::default()
                },
                part_number: "18ASF2G72HZ-2G6E1".to_string(),
                mem_type: "DDR4".to_string(),
            }]
        );
    }

    #[rstest]
    #[case::inferred_from_part_number("N/A", "ACME-SSD-1", "ACME-SSD-1", "Acme")]
    #[case::part_number_only("N/A", "", "ACME-SSD-1", "Acme")]
    #[case::no_part_number("N/A", "ACME-SSD-1", "N/A", "")]
    #[case::manufacturer_reported("Samsung", "ACME-SSD-1", "ACME-SSD-1", "")]
    #[case::unknown_prefix("N/A", "Unlabelled SSD", "X-1", "")]
    #[case::part_number_before_product_name("N/A", "Storage SSD", "MTFDDAV240TDU", "Micron")]
    #[case::product_name_fallback("N/A", "MTFDDAV240TDU", "X-1", "Micron")]
    fn drive_vendor_resolution(
        #[case] manufacturer: &str,
        #[case] product_name: &str,
        #[case] part_number: &str,
        #[case] expected: &str,
    ) {
        let mut device = Device::default();
        let drive = component("Storage device", manufacturer, product_name, part_number);

        collect_components(&mut device, &firmware(), &[drive], &acme_vendors());

        assert_eq!(device.drives.len(), 1);
        assert_eq!(device.drives[0].common.vendor, expected);
        assert_eq!(device.drives[0].common.product_name, product_name);
        assert_eq!(device.drives[0].common.serial, "SN0001");
    }

    #[test]
    fn unknown_component_kinds_are_ignored() {
        let mut device = Device::default();
        let psu = component("Power supply", "Delta", "DPS-500AB", "N/A");

        collect_components(&mut device, &firmware(), &[psu], &VendorTable::default());

        assert!(device.cpus.is_empty());
        assert!(device.memory.is_empty());
        assert!(device.drives.is_empty());
    }
}
