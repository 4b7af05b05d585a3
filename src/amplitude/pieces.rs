//! The inspiral and merger-ringdown descriptions of the amplitude,
//! normalized to the leading-order inspiral amplitude

use std::f64::consts;
use crate::binary::Binary;
use crate::calibration::*;
use crate::matching::Piece;
use crate::remnant::Remnant;

/// PN amplitude, re-expanded in Mf, with pseudo-PN corrections
/// at orders 7/3, 8/3 and 3
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct InspiralAmplitude {
    two_thirds: f64,
    one: f64,
    four_thirds: f64,
    five_thirds: f64,
    two: f64,
    seven_thirds: f64,
    eight_thirds: f64,
    three: f64,
}

impl InspiralAmplitude {
    pub fn new(bin: &Binary) -> Self {
        use consts::PI;

        let eta = bin.eta;
        let eta2 = bin.eta2;
        let (chi1, chi2, seta) = (bin.chi1, bin.chi2, bin.seta);
        let chi1_sqd = chi1 * chi1;
        let chi2_sqd = chi2 * chi2;
        let seta_plus_1 = 1.0 + seta;

        let two_thirds = (-969.0 + 1804.0 * eta) * PI.powf(2.0 / 3.0) / 672.0;

        let one = (chi1 * (81.0 * seta_plus_1 - 44.0 * eta) + chi2 * (81.0 - 81.0 * seta - 44.0 * eta)) * PI / 48.0;

        let four_thirds = (
            -27312085.0
            - 10287648.0 * chi2_sqd
            - 10287648.0 * chi1_sqd * seta_plus_1
            + 10287648.0 * chi2_sqd * seta
            + 24.0 * (-1975055.0 + 857304.0 * chi1_sqd - 994896.0 * chi1 * chi2 + 857304.0 * chi2_sqd) * eta
            + 35371056.0 * eta2
        ) * PI.powf(4.0 / 3.0) / 8.128512e6;

        let five_thirds = PI.powf(5.0 / 3.0) * (
            chi2 * (-285197.0 * (-1.0 + seta) + 4.0 * (-91902.0 + 1579.0 * seta) * eta - 35632.0 * eta2)
            + chi1 * (285197.0 * seta_plus_1 - 4.0 * (91902.0 + 1579.0 * seta) * eta - 35632.0 * eta2)
            + 42840.0 * (-1.0 + 4.0 * eta) * PI
        ) / 32256.0;

        let two = -PI * PI * (
            -336.0 * (-3248849057.0 + 2943675504.0 * chi1_sqd - 3339284256.0 * chi1 * chi2 + 2943675504.0 * chi2_sqd) * eta2
            - 324322727232.0 * eta2 * eta
            - 7.0 * (
                -177520268561.0
                + 107414046432.0 * chi2_sqd
                + 107414046432.0 * chi1_sqd * seta_plus_1
                - 107414046432.0 * chi2_sqd * seta
                + 11087290368.0 * (chi1 + chi2 + chi1 * seta - chi2 * seta) * PI
            )
            + 12.0 * eta * (
                -545384828789.0
                - 176491177632.0 * chi1 * chi2
                + 202603761360.0 * chi2_sqd
                + 77616.0 * chi1_sqd * (2610335.0 + 995766.0 * seta)
                - 77287373856.0 * chi2_sqd * seta
                + 5841690624.0 * (chi1 + chi2) * PI
                + 21384760320.0 * PI * PI
            )
        ) / 6.0085960704e10;

        InspiralAmplitude {
            two_thirds,
            one,
            four_thirds,
            five_thirds,
            two,
            seven_thirds: RHO1.eval(bin),
            eight_thirds: RHO2.eval(bin),
            three: RHO3.eval(bin),
        }
    }
}

impl Piece for InspiralAmplitude {
    fn value(&self, f: f64) -> f64 {
        let f_third = f.cbrt();
        let f_two_thirds = f_third * f_third;
        1.0 + self.two_thirds * f_two_thirds
            + self.four_thirds * f * f_third
            + self.five_thirds * f * f_two_thirds
            + self.seven_thirds * f * f * f_third
            + self.eight_thirds * f * f * f_two_thirds
            + f * (self.one + f * self.two + f * f * self.three)
    }

    fn derivative(&self, f: f64) -> f64 {
        let f_third = f.cbrt();
        let f_two_thirds = f_third * f_third;
        2.0 / 3.0 * self.two_thirds / f_third
            + self.one
            + 4.0 / 3.0 * self.four_thirds * f_third
            + 5.0 / 3.0 * self.five_thirds * f_two_thirds
            + 2.0 * self.two * f
            + 7.0 / 3.0 * self.seven_thirds * f * f_third
            + 8.0 / 3.0 * self.eight_thirds * f * f_two_thirds
            + 3.0 * self.three * f * f
    }
}

/// Lorentzian, exponentially damped, centred on the ringdown frequency
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct MergerRingdownAmplitude {
    /// Height
    pub gamma1: f64,
    /// Decay rate
    pub gamma2: f64,
    /// Width, in units of the damping frequency
    pub gamma3: f64,
    pub f_ring: f64,
    pub f_damp: f64,
}

impl MergerRingdownAmplitude {
    pub fn new(bin: &Binary, remnant: &Remnant) -> Self {
        MergerRingdownAmplitude {
            gamma1: GAMMA1.eval(bin),
            gamma2: GAMMA2.eval(bin),
            gamma3: GAMMA3.eval(bin),
            f_ring: remnant.ringdown_frequency,
            f_damp: remnant.damping_frequency,
        }
    }

    /// Frequency at which f^(7/6) times the amplitude, i.e. the
    /// Lorentzian-times-exponential, is maximal.
    ///
    /// The exact stationary point involves `sqrt(1 - gamma2^2)`, which
    /// is not real when `gamma2 > 1`, in which case the square-root
    /// correction is dropped.
    pub fn peak_frequency(&self) -> f64 {
        let width = self.f_damp * self.gamma3;
        if self.gamma2 >= 1.0 {
            (self.f_ring - width / self.gamma2).abs()
        } else {
            self.f_ring + width * (-1.0 + (1.0 - self.gamma2 * self.gamma2).sqrt()) / self.gamma2
        }
    }
}

impl Piece for MergerRingdownAmplitude {
    fn value(&self, f: f64) -> f64 {
        let width = self.f_damp * self.gamma3;
        let df = f - self.f_ring;
        (-df * self.gamma2 / width).exp() * width * self.gamma1 / (df * df + width * width)
    }

    fn derivative(&self, f: f64) -> f64 {
        let width = self.f_damp * self.gamma3;
        let df = f - self.f_ring;
        let denom = df * df + width * width;
        (-2.0 * self.f_damp * df * self.gamma3 * self.gamma1 / denom - self.gamma2 * self.gamma1)
            / ((df * self.gamma2 / width).exp() * denom)
    }
}
