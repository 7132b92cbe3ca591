use serde::Deserialize;

/// Resolves a hardware vendor from a part number or model string.
pub trait VendorLookup {
    fn vendor_for(&self, part_number: &str) -> Option<String>;
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VendorEntry {
    pub prefix: String,
    pub vendor: String,
}

// Part-number prefixes of drives commonly reported without a manufacturer.
const KNOWN_PREFIXES: &[(&str, &str)] = &[
    ("MTFD", "Micron"),
    ("MICRON", "Micron"),
    ("SSDSC", "Intel"),
    ("SSDPE", "Intel"),
    ("INTEL", "Intel"),
    ("MZ7", "Samsung"),
    ("MZ1", "Samsung"),
    ("MZQ", "Samsung"),
    ("MZP", "Samsung"),
    ("MZV", "Samsung"),
    ("SAMSUNG", "Samsung"),
    ("KXG", "Toshiba"),
    ("THN", "Toshiba"),
    ("TOSHIBA", "Toshiba"),
    ("HUS", "HGST"),
    ("HGST", "HGST"),
    ("WUS", "Western Digital"),
    ("WDC", "Western Digital"),
    ("ST1", "Seagate"),
    ("ST2", "Seagate"),
    ("ST3", "Seagate"),
    ("ST4", "Seagate"),
    ("ST5", "Seagate"),
    ("ST6", "Seagate"),
    ("ST7", "Seagate"),
    ("ST8", "Seagate"),
    ("ST9", "Seagate"),
    ("KINGSTON", "Kingston"),
];

/// Prefix table, matched case-insensitively in insertion order.
#[derive(Debug, Clone)]
pub struct VendorTable {
    entries: Vec<VendorEntry>,
}

impl VendorTable {
    /// Table with `extra` entries consulted ahead of the built-in ones.
    pub fn with_entries(extra: &[VendorEntry]) -> Self {
        let mut table = VendorTable {
            entries: extra.to_vec(),
        };
        table.entries.extend(KNOWN_PREFIXES.iter().map(|(prefix, vendor)| VendorEntry {
            prefix: prefix.to_string(),
            vendor: vendor.to_string(),
        }));
        table
    }
}

impl Default for VendorTable {
    fn default() -> Self {
        Self::with_entries(&[])
    }
}

impl VendorLookup for VendorTable {
    fn vendor_for(&self, part_number: &str) -> Option<String> {
        let part_number = part_number.trim().to_uppercase();
        self.entries
            .iter()
            .filter(|entry| !entry.prefix.is_empty())
            .find(|entry| part_number.starts_with(&entry.prefix.to_uppercase()))
            .map(|entry| entry.vendor.clone())
    }
}
