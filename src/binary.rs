//! Derived parameters of a binary, shared by every part of the model

use crate::constants::*;
use crate::event::Event;

/// Mass and spin combinations derived from the primal parameters
/// of a single event.
#[derive(Copy,Clone,Debug,PartialEq)]
pub struct Binary {
    /// Total mass, in solar masses
    pub total_mass: f64,
    pub eta: f64,
    pub eta2: f64,
    pub chi1: f64,
    pub chi2: f64,
    /// Symmetric spin, (chi1 + chi2) / 2
    pub chi_s: f64,
    /// Antisymmetric spin, (chi1 - chi2) / 2
    pub chi_a: f64,
    /// sqrt(1 - 4 eta) = (m1 - m2) / M
    pub seta: f64,
    /// m1 / M
    pub m1: f64,
    /// m2 / M
    pub m2: f64,
    /// Effective spin of the PN expansion
    pub chi_pn: f64,
    /// chi_pn - 1, the variable of the calibration fits
    pub xi: f64,
    /// Luminosity distance, in Gpc
    pub distance: f64,
}

impl Binary {
    pub fn new(event: &Event) -> Self {
        let eta = event.eta;
        let (chi1, chi2) = (event.chi1, event.chi2);
        let seta = (1.0 - 4.0 * eta).sqrt();
        let chi_s = 0.5 * (chi1 + chi2);
        let chi_a = 0.5 * (chi1 - chi2);
        let chi_pn = chi_s * (1.0 - 76.0 * eta / 113.0) + seta * chi_a;

        Binary {
            total_mass: event.chirp_mass / eta.powf(3.0 / 5.0),
            eta,
            eta2: eta * eta,
            chi1,
            chi2,
            chi_s,
            chi_a,
            seta,
            m1: 0.5 * (1.0 + seta),
            m2: 0.5 * (1.0 - seta),
            chi_pn,
            xi: chi_pn - 1.0,
            distance: event.distance,
        }
    }

    /// Total mass in units of seconds
    pub fn total_mass_time(&self) -> f64 {
        self.total_mass * SOLAR_MASS_TIME
    }

    /// Converts a frequency `f`, in Hz, to the dimensionless Mf.
    pub fn dimensionless(&self, f: f64) -> f64 {
        self.total_mass_time() * f
    }

    /// Converts a dimensionless frequency back to Hz.
    pub fn physical(&self, mf: f64) -> f64 {
        mf / self.total_mass_time()
    }

    /// Mass ratio m1 / m2 >= 1
    pub fn mass_ratio(&self) -> f64 {
        0.5 * (1.0 + self.seta - 2.0 * self.eta) / self.eta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_mass() {
        let bin = Binary::new(&Event::new(10.0, 0.25, 0.5, 0.5, 1.0));
        assert_eq!(bin.seta, 0.0);
        assert_eq!(bin.m1, 0.5);
        assert_eq!(bin.chi_a, 0.0);
        assert!((bin.mass_ratio() - 1.0).abs() < 1.0e-15);
        let target = 0.5 * (1.0 - 76.0 / (4.0 * 113.0));
        assert!((bin.chi_pn - target).abs() < 1.0e-15);
    }

    #[test]
    fn unequal_mass() {
        let ev = Event::from_masses(30.0, 10.0, 0.2, -0.4, 1.0);
        let bin = Binary::new(&ev);
        println!("M = {:.6}, q = {:.6}, m1 = {:.6}", bin.total_mass, bin.mass_ratio(), bin.m1);
        assert!((bin.total_mass - 40.0).abs() / 40.0 < 1.0e-12);
        assert!((bin.mass_ratio() - 3.0).abs() / 3.0 < 1.0e-12);
        assert!((bin.m1 - 0.75).abs() < 1.0e-12);

        let mf = bin.dimensionless(100.0);
        assert!((bin.physical(mf) - 100.0).abs() < 1.0e-12);
    }
}
