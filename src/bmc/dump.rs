use std::fs;
use std::path::Path;

use serde::Deserialize;
use tokio_util::sync::CancellationToken;

use crate::bmc::raw::{PostCode, RawComponent, RawFirmwareInfo, RawFru, RawInterface, RawSensor};
use crate::bmc::{BmcClient, BmcError};

/// Controller reads captured as a single JSON document.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Capture {
    fru: Vec<RawFru>,
    firmware: Option<RawFirmwareInfo>,
    components: Option<Vec<RawComponent>>,
    network_interfaces: Option<Vec<RawInterface>>,
    sensors: Option<Vec<RawSensor>>,
    post_code: Option<PostCode>,
}

/// A [`BmcClient`] that answers every read from a JSON capture.
#[derive(Debug)]
pub struct DumpSource {
    capture: Capture,
}

impl DumpSource {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, BmcError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| BmcError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, BmcError> {
        Ok(DumpSource {
            capture: serde_json::from_str(json)?,
        })
    }

    fn section<T: Clone>(
        cancel: &CancellationToken,
        section: &Option<T>,
        name: &'static str,
    ) -> Result<T, BmcError> {
        if cancel.is_cancelled() {
            return Err(BmcError::Cancelled);
        }
        section.clone().ok_or(BmcError::Unavailable(name))
    }
}

impl BmcClient for DumpSource {
    fn read_fru(&self, cancel: &CancellationToken) -> Result<Vec<RawFru>, BmcError> {
        if cancel.is_cancelled() {
            return Err(BmcError::Cancelled);
        }
        Ok(self.capture.fru.clone())
    }

    fn read_firmware_info(&self, cancel: &CancellationToken) -> Result<RawFirmwareInfo, BmcError> {
        Self::section(cancel, &self.capture.firmware, "firmware info")
    }

    fn read_components(&self, cancel: &CancellationToken) -> Result<Vec<RawComponent>, BmcError> {
        Self::section(cancel, &self.capture.components, "component inventory")
    }

    fn read_network_interfaces(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Vec<RawInterface>, BmcError> {
        Self::section(cancel, &self.capture.network_interfaces, "network interfaces")
    }

    fn read_sensors(&self, cancel: &CancellationToken) -> Result<Vec<RawSensor>, BmcError> {
        Self::section(cancel, &self.capture.sensors, "sensor list")
    }

    fn read_post_code(&self, cancel: &CancellationToken) -> Result<PostCode, BmcError> {
        Self::section(cancel, &self.capture.post_code, "POST code")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const CAPTURE: &str = include_str!("../../tests/resources/asrockrack_e3c246d4i.json");

    #[test]
    fn reads_every_section_of_a_capture() -> Result<(), BmcError> {
        let source = DumpSource::from_json(CAPTURE)?;
        let cancel = CancellationToken::new();

        let frus = source.read_fru(&cancel)?;
        assert_eq!(frus.len(), 1);
        assert_eq!(frus[0].board.manufacturer, "ASRockRack");
        assert_eq!(frus[0].chassis.chassis_type, "Rack Mount Chassis");

        let firmware = source.read_firmware_info(&cancel)?;
        assert_eq!(firmware.bios_version, "L2.07B");
        assert_eq!(firmware.cpld_version(), None);

        assert_eq!(source.read_components(&cancel)?.len(), 5);
        assert_eq!(source.read_network_interfaces(&cancel)?.len(), 3);
        assert_eq!(source.read_sensors(&cancel)?.len(), 4);
        assert_eq!(
            source.read_post_code(&cancel)?,
            PostCode {
                status: "OK".to_string(),
                code: 160,
            }
        );

        Ok(())
    }

    #[test]
    fn missing_section_is_unavailable() -> Result<(), BmcError> {
        let source = DumpSource::from_json(r#"{"fru": []}"#)?;
        let result = source.read_sensors(&CancellationToken::new());

        assert!(matches!(result, Err(BmcError::Unavailable("sensor list"))));
        Ok(())
    }

    #[test]
    fn cancelled_read_fails() -> Result<(), BmcError> {
        let source = DumpSource::from_json(CAPTURE)?;
        let cancel = CancellationToken::new();
        cancel.cancel();

        assert!(matches!(source.read_fru(&cancel), Err(BmcError::Cancelled)));
        assert!(matches!(source.read_firmware_info(&cancel), Err(BmcError::Cancelled)));
        Ok(())
    }

    #[test]
    fn malformed_capture_is_a_decode_error() {
        let result = DumpSource::from_json("{\"fru\": 12}");
        assert!(matches!(result, Err(BmcError::Decode(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = DumpSource::from_path("/nonexistent/capture.json");
        assert!(matches!(result, Err(BmcError::Io { .. })));
    }
}
