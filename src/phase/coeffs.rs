//! Post-Newtonian coefficients of the stationary-phase (TaylorF2) phase

use std::f64::consts;
use crate::binary::Binary;
use crate::constants::*;

/// Spin-induced quadrupole moment of a black hole, in units
/// of m^3 chi^2
const QUADRUPOLE_BH: f64 = 1.0;

/// TaylorF2 phase coefficients, labelled by PN order, so that
/// the phase is
/// `3 / (128 eta) sum_k c_k (pi Mf)^((k - 5) / 3)`,
/// plus logarithmic terms at 2.5PN and 3PN.
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct TaylorF2 {
    pub zero: f64,
    pub one: f64,
    pub two: f64,
    pub three: f64,
    pub four: f64,
    pub five: f64,
    pub five_log: f64,
    pub six: f64,
    pub six_log: f64,
    pub seven: f64,
}

impl TaylorF2 {
    pub fn new(bin: &Binary) -> Self {
        use consts::PI;

        let eta = bin.eta;
        let eta2 = bin.eta2;
        let eta3 = eta2 * eta;
        let (chi1, chi2) = (bin.chi1, bin.chi2);
        let (chi_s, chi_a) = (bin.chi_s, bin.chi_a);
        let (m1, m2, seta) = (bin.m1, bin.m2, bin.seta);
        let chi1_sqd = chi1 * chi1;
        let chi2_sqd = chi2 * chi2;
        let chi1_chi2 = chi1 * chi2;

        let three = -16.0 * PI + 113.0 * seta * chi_a / 3.0 + (113.0 / 3.0 - 76.0 * eta / 3.0) * chi_s;

        let spin_spin_2pn = |m: f64, chi_sqd: f64| {
            ((-720.0 * QUADRUPOLE_BH + 1.0) / 9.6 + (240.0 * QUADRUPOLE_BH - 7.0) / 9.6) * m * m * chi_sqd
        };

        let four = 5.0 * (3058.673 / 7.056 + 5429.0 / 7.0 * eta + 617.0 * eta2) / 72.0
            + (247.0 - 721.0) / 4.8 * eta * chi1_chi2
            + spin_spin_2pn(m1, chi1_sqd)
            + spin_spin_2pn(m2, chi2_sqd);

        let spin_orbit_2p5pn = (732985.0 / 2268.0 - 24260.0 * eta / 81.0 - 340.0 * eta2 / 9.0) * chi_s
            + (732985.0 / 2268.0 + 140.0 * eta / 9.0) * seta * chi_a;
        let five = 38645.0 * PI / 756.0 - 65.0 * PI * eta / 9.0 - spin_orbit_2p5pn;

        // 3PN spin-spin terms are absent from the calibrated model
        let six = 11583.231236531 / 4.694215680 - 640.0 / 3.0 * PI * PI - 684.8 / 2.1 * EULER_GAMMA
            + eta * (-15737.765635 / 3.048192 + 225.5 / 1.2 * PI * PI)
            + eta2 * 76.055 / 1.728
            - eta3 * 127.825 / 1.296
            - 4.0f64.ln() * 684.8 / 2.1
            + PI * chi1 * m1 * (1490.0 / 3.0 + m1 * 260.0)
            + PI * chi2 * m2 * (1490.0 / 3.0 + m2 * 260.0);

        let seven = 77096675.0 * PI / 254016.0 + 378515.0 * PI * eta / 1512.0 - 74045.0 * PI * eta2 / 756.0
            + (-25150083775.0 / 3048192.0 + 10566655595.0 * eta / 762048.0 - 1042165.0 * eta2 / 3024.0 + 5345.0 * eta3 / 36.0) * chi_s
            + seta * (-25150083775.0 / 3048192.0 + 26804935.0 * eta / 6048.0 - 1985.0 * eta2 / 48.0) * chi_a;

        TaylorF2 {
            zero: 1.0,
            one: 0.0,
            two: 3715.0 / 756.0 + 55.0 * eta / 9.0,
            three,
            four,
            five,
            five_log: 3.0 * five,
            six,
            six_log: -6848.0 / 21.0,
            seven,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::event::Event;
    use super::*;

    #[test]
    fn nonspinning_coefficients() {
        let bin = Binary::new(&Event::new(10.0, 0.25, 0.0, 0.0, 1.0));
        let pn = TaylorF2::new(&bin);
        println!("{:#?}", pn);

        let two = 3715.0 / 756.0 + 55.0 / 36.0;
        assert!((pn.two - two).abs() < 1.0e-14);
        assert!((pn.three + 16.0 * consts::PI).abs() < 1.0e-14);

        let four = 15293365.0 / 508032.0 + 27145.0 / 504.0 * 0.25 + 3085.0 / 72.0 * 0.0625;
        assert!((pn.four - four).abs() / four < 1.0e-14);
        assert_eq!(pn.five_log, 3.0 * pn.five);
    }

    #[test]
    fn spin_orbit_signs() {
        // aligned spins weaken the 1.5PN tail term
        let base = Event::new(10.0, 0.2, 0.0, 0.0, 1.0);
        let aligned = Binary::new(&Event { chi1: 0.5, chi2: 0.5, ..base });
        let anti = Binary::new(&Event { chi1: -0.5, chi2: -0.5, ..base });
        let base = Binary::new(&base);
        assert!(TaylorF2::new(&aligned).three > TaylorF2::new(&base).three);
        assert!(TaylorF2::new(&anti).three < TaylorF2::new(&base).three);
    }
}
