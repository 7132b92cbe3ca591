// Inventory normalization: raw controller records into a vendor-neutral device
pub mod types;
pub mod vendors;
pub mod collect_identity;
pub mod collect_firmware;
pub mod collect_components;
pub mod collect_network;
pub mod collect_health;
pub mod collector;

// Re-export main collection functions
pub use collector::{collect_inventory, InventorySources};
pub use vendors::{VendorEntry, VendorTable};
