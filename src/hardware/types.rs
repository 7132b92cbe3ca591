use ipnet::Ipv4Net;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::warn;

/// A vendor-neutral snapshot of one machine, as seen by its management controller.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Device {
    pub model: String,
    pub vendor: String,
    pub serial: String,
    pub status: Status,
    pub metadata: BTreeMap<String, String>,
    pub mainboard: Mainboard,
    pub enclosures: Vec<Enclosure>,
    pub bios: Option<Bios>,
    pub bmc: Option<Bmc>,
    pub cpld: Option<Cpld>,
    pub nics: Vec<Nic>,
    pub cpus: Vec<Cpu>,
    pub memory: Vec<Memory>,
    pub drives: Vec<Drive>,
}

impl Device {
    /// Records a metadata value. Keys are write-once: a later write to an
    /// existing key is dropped.
    pub fn insert_metadata(&mut self, key: &str, value: &str) -> bool {
        if let Some(existing) = self.metadata.get(key) {
            warn!(key, existing = %existing, ignored = %value, "metadata key already set");
            return false;
        }
        self.metadata.insert(key.to_string(), value.to_string());
        true
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Health {
    #[default]
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "CRITICAL")]
    Critical,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Status {
    pub health: Health,
    pub state: Option<String>, // name of the sensor that tripped the health check
    pub post_code: i64,
    pub post_code_status: String,
}

/// Attributes shared by every sub-entity of a [`Device`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Common {
    pub vendor: String,
    pub model: String,
    pub product_name: String,
    pub serial: String,
    pub description: String,
    pub firmware: Option<Firmware>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Firmware {
    pub installed: String,
    pub metadata: Option<BTreeMap<String, String>>,
}

impl Firmware {
    pub fn installed(version: &str) -> Self {
        Firmware {
            installed: version.to_string(),
            metadata: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Mainboard {
    #[serde(flatten)]
    pub common: Common,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Enclosure {
    #[serde(flatten)]
    pub common: Common,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Bios {
    #[serde(flatten)]
    pub common: Common,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Bmc {
    #[serde(flatten)]
    pub common: Common,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Cpld {
    #[serde(flatten)]
    pub common: Common,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Cpu {
    #[serde(flatten)]
    pub common: Common,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Memory {
    #[serde(flatten)]
    pub common: Common,
    pub part_number: String,
    pub mem_type: String, // "DDR4", "DDR5", etc.
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Drive {
    #[serde(flatten)]
    pub common: Common,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Nic {
    pub id: String,
    #[serde(flatten)]
    pub common: Common,
    pub ports: Vec<NicPort>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NicPort {
    pub id: String,
    pub speed_bits: u64,
    pub mac_address: String,
    pub link_status: LinkStatus,
    pub ip_addresses: Vec<Ipv4Net>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum LinkStatus {
    LinkUp,
    #[default]
    LinkDown,
}
