//! Built-in patterns for the Horizons report layout.
//!
//! Real reports vary in spelling from body to body:
//!
//! ```text
//! Vol. Mean Radius (km)    = 6371.01+-0.02   Mass x10^24 (kg)= 5.97219+-0.0006
//! Vol. mean radius, km = 695700              Mass, 10^24 kg = ~1988410
//! ```
//!
//! The state vector follows the `$$SOE` marker and a single time label line:
//!
//! ```text
//! $$SOE
//! 2458849.500000000 = A.D. 2020-Jan-01 00:00:00.0000 TDB
//!  X =-2.545301587334768E+07 Y = 1.333596542627934E+08 Z = 5.776965806090385E+07
//!  VX=-2.983218600461044E+01 VY=-4.716669312345498E+00 VZ=-2.044591282221212E+00
//! ```

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::model::StateVector;

use super::Field;
use super::pattern::{FieldPattern, finite, parse_finite};

static MASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"Mass[\s,x(]+10\^(?P<exponent>\d+)\s*(?:\(?kg\)?)?\s*~?=[\s~]*(?P<coefficient>\d+(?:\.\d+)?)",
    )
    .expect("built-in mass pattern compiles")
});

static RADIUS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Vol\.\s+(?i:mean)\s+(?i:radius)[\s,]*(?:\(?km\)?)?\s*=\s*(?P<radius>\d+(?:\.\d+)?)")
        .expect("built-in radius pattern compiles")
});

static STATE_VECTOR: LazyLock<Regex> = LazyLock::new(|| {
    // One leading digit, fraction, signed exponent: -1.234E+07
    let num = r"-?\d\.\d+E[+-]\d+";
    let component = |label: &str| format!(r"\s*{label}\s*=\s*(?P<{}>{num})", label.to_lowercase());
    let components: String = ["Y", "Z", "VX", "VY", "VZ"]
        .into_iter()
        .map(component)
        .collect();
    // X sits on the line right after the time label, no blank lines between.
    let first = format!(r"[^\S\n]*X\s*=\s*(?P<x>{num})");
    Regex::new(&format!(r"\$\$SOE[^\S\n]*\r?\n[^\n]*\n{first}{components}"))
        .expect("built-in state vector pattern compiles")
});

/// `Mass x 10^<exponent> (kg) = <coefficient>`, in kilograms.
///
/// The value is rebuilt as the text `<coefficient>e<exponent>` and parsed
/// once, so the coefficient's digits are never multiplied through.
#[derive(Debug, Clone)]
pub struct MassPattern(Regex);

impl Default for MassPattern {
    fn default() -> Self {
        Self(MASS.clone())
    }
}

impl FieldPattern for MassPattern {
    type Value = f64;

    const FIELD: Field = Field::Mass;
    const GROUPS: &'static [&'static str] = &["exponent", "coefficient"];

    fn regex(&self) -> &Regex {
        &self.0
    }

    fn from_regex(regex: Regex) -> Self {
        Self(regex)
    }

    fn interpret(captures: &Captures<'_>) -> Option<f64> {
        let coefficient = captures.name("coefficient")?.as_str();
        let exponent = captures.name("exponent")?.as_str();
        parse_finite(&format!("{coefficient}e{exponent}"))
    }
}

/// `Vol. mean radius (km) = <radius>`, in kilometers.
#[derive(Debug, Clone)]
pub struct RadiusPattern(Regex);

impl Default for RadiusPattern {
    fn default() -> Self {
        Self(RADIUS.clone())
    }
}

impl FieldPattern for RadiusPattern {
    type Value = f64;

    const FIELD: Field = Field::Radius;
    const GROUPS: &'static [&'static str] = &["radius"];

    fn regex(&self) -> &Regex {
        &self.0
    }

    fn from_regex(regex: Regex) -> Self {
        Self(regex)
    }

    fn interpret(captures: &Captures<'_>) -> Option<f64> {
        finite(captures, "radius")
    }
}

/// The first row of the vector table: `X Y Z VX VY VZ`, in that order.
#[derive(Debug, Clone)]
pub struct StateVectorPattern(Regex);

impl Default for StateVectorPattern {
    fn default() -> Self {
        Self(STATE_VECTOR.clone())
    }
}

impl FieldPattern for StateVectorPattern {
    type Value = StateVector;

    const FIELD: Field = Field::StateVector;
    const GROUPS: &'static [&'static str] = &["x", "y", "z", "vx", "vy", "vz"];

    fn regex(&self) -> &Regex {
        &self.0
    }

    fn from_regex(regex: Regex) -> Self {
        Self(regex)
    }

    fn interpret(captures: &Captures<'_>) -> Option<StateVector> {
        Some(StateVector {
            position: [
                finite(captures, "x")?,
                finite(captures, "y")?,
                finite(captures, "z")?,
            ],
            velocity: [
                finite(captures, "vx")?,
                finite(captures, "vy")?,
                finite(captures, "vz")?,
            ],
        })
    }
}
