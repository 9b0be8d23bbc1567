//! Environmental figures derived from route distance.
//!
//! Both derivations are exact linear functions — no rounding here.  The
//! presentation layer rounds for display.

/// Average fuel burn per kilometre, litres.
pub const FUEL_L_PER_KM: f64 = 0.08;

/// CO2 released per litre of fuel burned, kilograms.
pub const CO2_KG_PER_L: f64 = 2.31;

/// Fuel consumed over `distance_km`, litres: `distance × 0.08`.
#[inline]
pub fn fuel_consumption_l(distance_km: f64) -> f64 {
    distance_km * FUEL_L_PER_KM
}

/// CO2 emitted by burning `fuel_l` litres, kilograms: `fuel × 2.31`.
#[inline]
pub fn co2_emission_kg(fuel_l: f64) -> f64 {
    fuel_l * CO2_KG_PER_L
}
