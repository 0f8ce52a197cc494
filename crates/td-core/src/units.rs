// td-core/src/units.rs

use uom::si::f64::{
    Area as UomArea, ElectricCurrent as UomElectricCurrent,
    ElectricPotential as UomElectricPotential, Frequency as UomFrequency, Length as UomLength,
    MagneticFluxDensity as UomMagneticFluxDensity, Mass as UomMass, Power as UomPower,
    Ratio as UomRatio, TemperatureInterval as UomTemperatureInterval, Volume as UomVolume,
};

// Public canonical unit types (SI, f64)
pub type Area = UomArea;
pub type Current = UomElectricCurrent;
pub type Voltage = UomElectricPotential;
pub type Frequency = UomFrequency;
pub type Length = UomLength;
pub type FluxDensity = UomMagneticFluxDensity;
pub type Mass = UomMass;
pub type Power = UomPower;
pub type Ratio = UomRatio;
pub type TempInterval = UomTemperatureInterval;
pub type Volume = UomVolume;

#[inline]
pub fn volts(v: f64) -> Voltage {
    use uom::si::electric_potential::volt;
    Voltage::new::<volt>(v)
}

#[inline]
pub fn amps(v: f64) -> Current {
    use uom::si::electric_current::ampere;
    Current::new::<ampere>(v)
}

#[inline]
pub fn hz(v: f64) -> Frequency {
    use uom::si::frequency::hertz;
    Frequency::new::<hertz>(v)
}

#[inline]
pub fn tesla(v: f64) -> FluxDensity {
    use uom::si::magnetic_flux_density::tesla;
    FluxDensity::new::<tesla>(v)
}

#[inline]
pub fn mm(v: f64) -> Length {
    use uom::si::length::millimeter;
    Length::new::<millimeter>(v)
}

#[inline]
pub fn sqcm(v: f64) -> Area {
    use uom::si::area::square_centimeter;
    Area::new::<square_centimeter>(v)
}

#[inline]
pub fn kg(v: f64) -> Mass {
    use uom::si::mass::kilogram;
    Mass::new::<kilogram>(v)
}

#[inline]
pub fn watts(v: f64) -> Power {
    use uom::si::power::watt;
    Power::new::<watt>(v)
}

#[inline]
pub fn unitless(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}

pub mod constants {
    /// Vacuum permeability [H/m].
    pub const MU0_H_PER_M: f64 = 1.256_637_061_4e-6;

    /// Copper resistivity at working temperature [ohm·m].
    pub const RHO_COPPER_OHM_M: f64 = 1.68e-8;

    /// Copper density [kg/m^3].
    pub const DENSITY_COPPER_KG_M3: f64 = 8960.0;

    /// Lamination-steel density [g/cm^3], shared by all core materials.
    pub const DENSITY_CORE_G_CM3: f64 = 7.65;

    /// Skin-depth coefficient for copper at working temperature:
    /// delta_mm = SKIN_DEPTH_COEFF_MM / sqrt(f_hz).
    pub const SKIN_DEPTH_COEFF_MM: f64 = 66.1;

    /// Transformer EMF equation constant (4 * form factor 1.11).
    pub const EMF_FORM_CONST: f64 = 4.44;
}
