//! Output formatting for CLI display.

use crate::model::EphemerisRecord;

/// One line per record: name, mass, radius, position, velocity.
pub(super) fn format_record(record: &EphemerisRecord) -> String {
    let [x, y, z] = record.state.position;
    let [vx, vy, vz] = record.state.velocity;
    format!(
        "{:<10} {:>11.4e} kg {:>10.2} km  r=({x:.4e}, {y:.4e}, {z:.4e})  v=({vx:.4e}, {vy:.4e}, {vz:.4e})",
        record.name.as_str(),
        record.mass,
        record.radius,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::{BodyName, StateVector};

    #[test]
    fn format_record_line() {
        let record = EphemerisRecord {
            name: BodyName::new("Earth"),
            mass: 5.97219e24,
            radius: 6371.01,
            state: StateVector {
                position: [1.0e8, -2.0e7, 0.0],
                velocity: [-30.0, 4.5, 0.0],
            },
        };
        assert_eq!(
            format_record(&record),
            "Earth        5.9722e24 kg    6371.01 km  r=(1.0000e8, -2.0000e7, 0.0000e0)  v=(-3.0000e1, 4.5000e0, 0.0000e0)"
        );
    }
}
