use serde::Deserialize;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument};

use crate::bmc::{BmcClient, BmcError};
use crate::hardware::collect_components::collect_components;
use crate::hardware::collect_firmware::collect_firmware;
use crate::hardware::collect_health::{evaluate_health, attempt_post_code};
use crate::hardware::collect_identity::collect_identity;
use crate::hardware::collect_network::collect_network;
use crate::hardware::types::Device;
use crate::hardware::vendors::VendorLookup;

/// Which component-shaped reads to request from the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InventorySources {
    pub components: bool,
    pub network_interfaces: bool,
}

impl Default for InventorySources {
    fn default() -> Self {
        InventorySources {
            components: true,
            network_interfaces: true,
        }
    }
}

/// Build a fresh device snapshot from the controller's reads.
///
/// Either every step succeeds and the whole snapshot is returned, or the
/// partially built device is dropped and the error is returned.
#[instrument(skip_all)]
pub fn collect_inventory(
    client: &dyn BmcClient,
    vendors: &dyn VendorLookup,
    sources: &InventorySources,
    cancel: &CancellationToken,
) -> Result<Device, InventoryError> {
    let mut device = Device::default();

    let frus = client.read_fru(cancel)?;
    collect_identity(&mut device, frus)?;

    let firmware = client.read_firmware_info(cancel)?;
    collect_firmware(&mut device, &firmware);

    if sources.components {
        let components = client.read_components(cancel)?;
        collect_components(&mut device, &firmware, &components, vendors);
    }

    if sources.network_interfaces {
        let interfaces = client.read_network_interfaces(cancel)?;
        collect_network(&mut device, &interfaces);
    }

    let sensors = client.read_sensors(cancel)?;
    let verdict = evaluate_health(&sensors);
    device.status.health = verdict.health;
    device.status.state = verdict.trigger;

    // POST code is diagnostic only and never fails the collection
    let attempt = attempt_post_code(client, cancel);
    if let Some(e) = &attempt.diagnostic {
        debug!("continuing without POST code: {}", e);
    }
    device.status.post_code_status = attempt.reading.status;
    device.status.post_code = attempt.reading.code;

    if cancel.is_cancelled() {
        return Err(InventoryError::Cancelled);
    }

    info!(
        vendor = %device.vendor,
        model = %device.model,
        serial = %device.serial,
        health = ?device.status.health,
        "collected inventory"
    );

    Ok(device)
}

#[derive(Error, Debug)]
pub enum InventoryError {
    #[error(transparent)]
    Read(#[from] BmcError),
    #[error("expected exactly one FRU record, found {0}")]
    FruCount(usize),
    #[error("inventory collection cancelled")]
    Cancelled,
}
