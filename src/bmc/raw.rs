use serde::{Deserialize, Serialize};

// Placeholder the controller reports for fields it has no value for.
const NOT_AVAILABLE: &str = "N/A";

// Address the controller reports for an interface without IPv4 configuration.
const UNSET_IPV4: &str = "0.0.0.0";

/// Returns `None` for the controller's "N/A" placeholder.
pub fn available(value: &str) -> Option<&str> {
    if value == NOT_AVAILABLE {
        None
    } else {
        Some(value)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawFru {
    pub board: RawFruBoard,
    pub chassis: RawFruChassis,
    pub product: RawFruProduct,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawFruBoard {
    pub manufacturer: String,
    pub product_name: String,
    pub serial_number: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawFruChassis {
    #[serde(rename = "type")]
    pub chassis_type: String,
    pub part_number: String,
    pub serial_number: String,
    pub model_extra: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawFruProduct {
    pub manufacturer: String,
    pub product_name: String,
    pub part_number: String,
    pub product_version: String,
    pub serial_number: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawFirmwareInfo {
    pub bios_version: String,
    pub bmc_version: String,
    pub cpld_version: String,
    pub microcode_version: String,
    pub me_version: String,
    pub node_id: String,
}

impl RawFirmwareInfo {
    /// CPLD version, or `None` when the board has no CPLD.
    pub fn cpld_version(&self) -> Option<&str> {
        available(&self.cpld_version)
    }
}

/// Component kinds the inventory knows how to map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Cpu,
    Memory,
    Storage,
    Unknown,
}

impl From<&str> for ComponentKind {
    fn from(device_type: &str) -> Self {
        match device_type {
            "CPU" => ComponentKind::Cpu,
            "Memory" => ComponentKind::Memory,
            "Storage device" => ComponentKind::Storage,
            _ => ComponentKind::Unknown,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawComponent {
    pub device_id: i64,
    pub device_name: String,
    pub device_type: String,
    pub product_manufacturer_name: String,
    pub product_name: String,
    pub product_part_number: String,
    pub product_serial_number: String,
    pub product_extra: String,
}

impl RawComponent {
    pub fn kind(&self) -> ComponentKind {
        ComponentKind::from(self.device_type.as_str())
    }

    pub fn manufacturer(&self) -> Option<&str> {
        available(&self.product_manufacturer_name)
    }

    pub fn part_number(&self) -> Option<&str> {
        available(&self.product_part_number)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawInterface {
    pub interface_name: String,
    pub mac_address: String,
    pub lan_enable: i64,
    pub ipv4_address: String,
    pub ipv4_subnet: String,
}

impl RawInterface {
    pub fn lan_enabled(&self) -> bool {
        self.lan_enable == 1
    }

    /// Configured IPv4 address, `None` while the interface has none.
    pub fn ipv4_address(&self) -> Option<&str> {
        if self.ipv4_address == UNSET_IPV4 {
            None
        } else {
            Some(&self.ipv4_address)
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSensor {
    pub name: String,
    pub sensor_state: i64,
}

#[cfg(test)]
impl RawSensor {
    pub fn new(name: &str, sensor_state: i64) -> Self {
        RawSensor {
            name: name.to_string(),
            sensor_state,
        }
    }
}

/// Last power-on self-test code reported by the controller.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PostCode {
    pub status: String,
    pub code: i64,
}
