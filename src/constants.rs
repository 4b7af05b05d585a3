//! Physical constants and the dimensionless frequencies that
//! partition the waveform

/// G M_sun / c^3, units of s
pub const SOLAR_MASS_TIME: f64 = 4.925491025543575903411922162094833998e-6;
/// G M_sun / c^2, units of m
pub const SOLAR_MASS_LENGTH: f64 = 1.476625061404649406193430731479084713e3;
/// One gigaparsec, units of m
pub const GIGAPARSEC: f64 = 3.085677581491367278913937957796471611e25;
/// G M_sun / c^2, units of Gpc
pub const SOLAR_MASS_LENGTH_GPC: f64 = SOLAR_MASS_LENGTH / GIGAPARSEC;
/// Euler-Mascheroni constant
pub const EULER_GAMMA: f64 = 0.5772156649015329;

/// Mf at which the inspiral phase hands over to the intermediate phase
pub const PHASE_INSPIRAL_JOIN: f64 = 0.018;
/// Mf at which the inspiral amplitude hands over to the intermediate amplitude
pub const AMPLITUDE_INSPIRAL_JOIN: f64 = 0.014;
/// Mf above which the waveform is defined to vanish
pub const MF_CUTOFF: f64 = 0.2;
