// Collaborator contract for reading raw records from a management controller
pub mod dump;
pub mod raw;

use std::path::PathBuf;

use thiserror::Error;
use tokio_util::sync::CancellationToken;

pub use dump::DumpSource;
pub use raw::{
    ComponentKind, PostCode, RawComponent, RawFirmwareInfo, RawFru, RawInterface, RawSensor,
};

/// Read operations a management-controller client exposes to the inventory.
///
/// Each read accepts a cancellation token; a read that observes a cancelled
/// token fails with [`BmcError::Cancelled`].
pub trait BmcClient {
    fn read_fru(&self, cancel: &CancellationToken) -> Result<Vec<RawFru>, BmcError>;

    fn read_firmware_info(&self, cancel: &CancellationToken) -> Result<RawFirmwareInfo, BmcError>;

    fn read_components(&self, cancel: &CancellationToken) -> Result<Vec<RawComponent>, BmcError>;

    fn read_network_interfaces(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Vec<RawInterface>, BmcError>;

    fn read_sensors(&self, cancel: &CancellationToken) -> Result<Vec<RawSensor>, BmcError>;

    fn read_post_code(&self, cancel: &CancellationToken) -> Result<PostCode, BmcError>;
}

#[derive(Error, Debug)]
pub enum BmcError {
    #[error("read cancelled")]
    Cancelled,
    #[error("controller does not provide {0}")]
    Unavailable(&'static str),
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("json deserialization error: {0}")]
    Decode(#[from] serde_json::Error),
}
