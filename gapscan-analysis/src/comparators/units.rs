//! Unit-aware quantity parsing for the quantitative comparator.
//!
//! Values convert within a unit family (time, length, mass, ...) so
//! "5 years" and "60 months" compare equal. Units outside the table are
//! kept as opaque strings: equal strings still compare, anything else is
//! reported as incomparable rather than guessed at.

use std::sync::OnceLock;

use regex::Regex;

/// A parsed numeric value with an optional unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    pub value: f64,
    pub unit: Option<String>,
}

/// A parsed numeric interval with an optional unit.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantityRange {
    pub low: f64,
    pub high: f64,
    pub unit: Option<String>,
}

/// Unit families with a common base for conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitFamily {
    Time,
    Length,
    Mass,
    Volume,
    Temperature,
    Voltage,
    Pressure,
    Frequency,
    Force,
    Percent,
    Count,
}

/// How two quantities line up for comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Alignment {
    /// Both values expressed in a common base unit.
    Comparable(f64, f64),
    /// At least one side carried no unit; raw values compared as-is.
    AssumedSameUnit(f64, f64),
    /// Units belong to different families or are unknown and unequal.
    Incomparable,
}

fn quantity_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"([+-]?\d+(?:[.,]\d+)?)\s*([a-zA-Zµ°%][a-zA-Z0-9µ°%]*(?:/[a-zA-Z0-9]+)?)?")
            .unwrap_or_else(|e| panic!("quantity regex: {e}"))
    })
}

fn range_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"([+-]?\d+(?:[.,]\d+)?)\s*(?:-|–|—|to|and)\s*([+-]?\d+(?:[.,]\d+)?)\s*([a-zA-Zµ°%][a-zA-Z0-9µ°%]*(?:/[a-zA-Z0-9]+)?)?",
        )
        .unwrap_or_else(|e| panic!("range regex: {e}"))
    })
}

/// Parse the first numeric value (with optional unit) out of free text.
pub fn parse_quantity(text: &str) -> Option<Quantity> {
    let caps = quantity_re().captures(text)?;
    let value: f64 = caps.get(1)?.as_str().replace(',', ".").parse().ok()?;
    let unit = caps
        .get(2)
        .map(|m| canonical_unit_name(m.as_str()))
        .filter(|u| !u.is_empty());
    Some(Quantity { value, unit })
}

/// Parse an interval like "2-8 c", "20 to 600 mg/dl", "between 1 and 5 ml".
pub fn parse_range(text: &str) -> Option<QuantityRange> {
    let caps = range_re().captures(text)?;
    let low: f64 = caps.get(1)?.as_str().replace(',', ".").parse().ok()?;
    let high: f64 = caps.get(2)?.as_str().replace(',', ".").parse().ok()?;
    if low > high {
        return None;
    }
    let unit = caps
        .get(3)
        .map(|m| canonical_unit_name(m.as_str()))
        .filter(|u| !u.is_empty());
    Some(QuantityRange { low, high, unit })
}

/// Align two quantities for comparison.
pub fn align(subject: &Quantity, reference: &Quantity) -> Alignment {
    match (&subject.unit, &reference.unit) {
        (Some(su), Some(ru)) => {
            if su == ru {
                return Alignment::Comparable(subject.value, reference.value);
            }
            match (unit_info(su), unit_info(ru)) {
                (Some((sf, s_factor)), Some((rf, r_factor))) if sf == rf => {
                    Alignment::Comparable(subject.value * s_factor, reference.value * r_factor)
                }
                _ => Alignment::Incomparable,
            }
        }
        (None, None) => Alignment::Comparable(subject.value, reference.value),
        _ => Alignment::AssumedSameUnit(subject.value, reference.value),
    }
}

/// Convert a value in `unit` to the family base, when the unit is known.
pub fn to_base(value: f64, unit: Option<&str>) -> Option<(UnitFamily, f64)> {
    let unit = unit?;
    let (family, factor) = unit_info(unit)?;
    Some((family, value * factor))
}

fn canonical_unit_name(raw: &str) -> String {
    raw.trim().to_lowercase().replace('µ', "u").replace('°', "")
}

/// Family and base-conversion factor for a canonical unit name.
fn unit_info(unit: &str) -> Option<(UnitFamily, f64)> {
    let info = match unit {
        // Time, base hours.
        "year" | "years" | "yr" | "yrs" => (UnitFamily::Time, 8760.0),
        "month" | "months" | "mo" => (UnitFamily::Time, 730.0),
        "week" | "weeks" | "wk" => (UnitFamily::Time, 168.0),
        "day" | "days" => (UnitFamily::Time, 24.0),
        "hour" | "hours" | "h" | "hr" | "hrs" => (UnitFamily::Time, 1.0),
        "minute" | "minutes" | "min" => (UnitFamily::Time, 1.0 / 60.0),
        "second" | "seconds" | "s" | "sec" => (UnitFamily::Time, 1.0 / 3600.0),
        // Length, base millimeters.
        "m" | "meter" | "meters" => (UnitFamily::Length, 1000.0),
        "cm" => (UnitFamily::Length, 10.0),
        "mm" => (UnitFamily::Length, 1.0),
        "um" | "micron" | "microns" => (UnitFamily::Length, 0.001),
        "nm" => (UnitFamily::Length, 1e-6),
        "in" | "inch" | "inches" => (UnitFamily::Length, 25.4),
        // Mass, base grams.
        "kg" => (UnitFamily::Mass, 1000.0),
        "g" | "gram" | "grams" => (UnitFamily::Mass, 1.0),
        "mg" => (UnitFamily::Mass, 0.001),
        "ug" => (UnitFamily::Mass, 1e-6),
        // Volume, base milliliters.
        "l" | "liter" | "liters" => (UnitFamily::Volume, 1000.0),
        "dl" => (UnitFamily::Volume, 100.0),
        "ml" => (UnitFamily::Volume, 1.0),
        "ul" => (UnitFamily::Volume, 0.001),
        // Temperature, Celsius only; Fahrenheit needs an offset and is
        // deliberately left incomparable.
        "c" | "celsius" => (UnitFamily::Temperature, 1.0),
        // Voltage, base volts.
        "kv" => (UnitFamily::Voltage, 1000.0),
        "v" | "volt" | "volts" => (UnitFamily::Voltage, 1.0),
        "mv" => (UnitFamily::Voltage, 0.001),
        // Pressure, base kilopascals.
        "bar" => (UnitFamily::Pressure, 100.0),
        "atm" => (UnitFamily::Pressure, 101.3),
        "psi" => (UnitFamily::Pressure, 6.895),
        "kpa" => (UnitFamily::Pressure, 1.0),
        "mmhg" => (UnitFamily::Pressure, 0.1333),
        "pa" => (UnitFamily::Pressure, 0.001),
        // Frequency, base hertz.
        "mhz" => (UnitFamily::Frequency, 1e6),
        "khz" => (UnitFamily::Frequency, 1000.0),
        "hz" => (UnitFamily::Frequency, 1.0),
        // Force, base newtons.
        "kn" => (UnitFamily::Force, 1000.0),
        "n" => (UnitFamily::Force, 1.0),
        "mpa" => (UnitFamily::Pressure, 1000.0),
        // Dimensionless.
        "%" | "percent" => (UnitFamily::Percent, 1.0),
        "cycles" | "uses" | "cycle" => (UnitFamily::Count, 1.0),
        _ => return None,
    };
    Some(info)
}
