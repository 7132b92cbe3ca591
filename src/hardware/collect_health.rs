use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::bmc::{BmcClient, BmcError, PostCode, RawSensor};
use crate::hardware::types::Health;

// Sensors that assert 1 when the fault they watch for has happened.
const FAULT_INDICATORS: [&str; 3] = ["CPU_CATERR", "CPU_THERMTRIP", "CPU_PROCHOT"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SensorClass {
    FaultIndicator,
    Discrete,
}

impl SensorClass {
    fn of(sensor: &RawSensor) -> Self {
        if FAULT_INDICATORS.contains(&sensor.name.as_str()) {
            SensorClass::FaultIndicator
        } else {
            SensorClass::Discrete
        }
    }

    fn nominal_state(self) -> i64 {
        match self {
            SensorClass::FaultIndicator => 0,
            SensorClass::Discrete => 1,
        }
    }
}

fn is_faulted(sensor: &RawSensor) -> bool {
    sensor.sensor_state != SensorClass::of(sensor).nominal_state()
}

#[derive(Debug, Clone, PartialEq)]
pub struct HealthVerdict {
    pub health: Health,
    /// First sensor, in reading order, that is not in its nominal state.
    pub trigger: Option<String>,
}

/// Reduce sensor readings to a single verdict. The first faulted sensor wins.
pub fn evaluate_health(sensors: &[RawSensor]) -> HealthVerdict {
    match sensors.iter().find(|sensor| is_faulted(sensor)) {
        Some(sensor) => HealthVerdict {
            health: Health::Critical,
            trigger: Some(sensor.name.clone()),
        },
        None => HealthVerdict {
            health: Health::Ok,
            trigger: None,
        },
    }
}

/// Outcome of the best-effort POST code read.
#[derive(Debug)]
pub struct PostCodeAttempt {
    /// The reading, or an empty reading when the read failed.
    pub reading: PostCode,
    pub diagnostic: Option<BmcError>,
}

pub fn attempt_post_code(client: &dyn BmcClient, cancel: &CancellationToken) -> PostCodeAttempt {
    match client.read_post_code(cancel) {
        Ok(reading) => PostCodeAttempt {
            reading,
            diagnostic: None,
        },
        Err(e) => {
            info!("POST code unavailable: {}", e);
            PostCodeAttempt {
                reading: PostCode::default(),
                diagnostic: Some(e),
            }
        }
    }
}
