//! Ephemeris records: one body's physical properties and state.

use serde::{Deserialize, Serialize};

use super::BodyName;

/// Barycentric position and velocity at the start of the observation window.
///
/// Units are whatever the report uses (km and km/s for Horizons vector tables).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StateVector {
    /// `[X, Y, Z]`
    pub position: [f64; 3],

    /// `[VX, VY, VZ]`
    pub velocity: [f64; 3],
}

/// A complete record for one body.
///
/// Every numeric field is required; a body whose report is missing any of
/// them never becomes a record.
///
/// Serialized flat, with the state vector spread over the `X`..`VZ` keys
/// the dataset file has always used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "RecordRow", from = "RecordRow")]
pub struct EphemerisRecord {
    pub name: BodyName,

    /// Kilograms.
    pub mass: f64,

    /// Volumetric mean radius in kilometers.
    pub radius: f64,

    pub state: StateVector,
}

/// On-disk shape of an [`EphemerisRecord`].
#[derive(Serialize, Deserialize)]
struct RecordRow {
    name: BodyName,
    mass: f64,
    radius: f64,
    #[serde(rename = "X")]
    x: f64,
    #[serde(rename = "Y")]
    y: f64,
    #[serde(rename = "Z")]
    z: f64,
    #[serde(rename = "VX")]
    vx: f64,
    #[serde(rename = "VY")]
    vy: f64,
    #[serde(rename = "VZ")]
    vz: f64,
}

impl From<EphemerisRecord> for RecordRow {
    fn from(record: EphemerisRecord) -> Self {
        let [x, y, z] = record.state.position;
        let [vx, vy, vz] = record.state.velocity;
        Self {
            name: record.name,
            mass: record.mass,
            radius: record.radius,
            x,
            y,
            z,
            vx,
            vy,
            vz,
        }
    }
}

impl From<RecordRow> for EphemerisRecord {
    fn from(row: RecordRow) -> Self {
        Self {
            name: row.name,
            mass: row.mass,
            radius: row.radius,
            state: StateVector {
                position: [row.x, row.y, row.z],
                velocity: [row.vx, row.vy, row.vz],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    fn earth() -> EphemerisRecord {
        EphemerisRecord {
            name: BodyName::new("Earth"),
            mass: 5.97219e24,
            radius: 6371.01,
            state: StateVector {
                position: [-2.5e7, 1.3e8, 5.7e7],
                velocity: [-29.8, -4.7, -2.0],
            },
        }
    }

    #[test]
    fn serializes_with_flat_vector_keys() {
        let value = serde_json::to_value(earth()).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Earth",
                "mass": 5.97219e24,
                "radius": 6371.01,
                "X": -2.5e7,
                "Y": 1.3e8,
                "Z": 5.7e7,
                "VX": -29.8,
                "VY": -4.7,
                "VZ": -2.0,
            })
        );
    }

    #[test]
    fn reads_back_what_it_writes() {
        let json = serde_json::to_string(&earth()).unwrap();
        let parsed: EphemerisRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, earth());
    }

    #[test]
    fn missing_component_is_rejected() {
        let err = serde_json::from_value::<EphemerisRecord>(json!({
            "name": "Earth",
            "mass": 1.0,
            "radius": 1.0,
            "X": 0.0,
            "Y": 0.0,
            "VX": 0.0,
            "VY": 0.0,
            "VZ": 0.0,
        }));
        assert!(err.is_err());
    }
}
