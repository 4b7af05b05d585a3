//! The three analytic descriptions of the phase

use std::f64::consts;
use crate::binary::Binary;
use crate::calibration::*;
use crate::matching::Piece;
use crate::remnant::Remnant;
use super::TaylorF2;

/// TaylorF2 phase with pseudo-PN corrections up to Mf^2
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct InspiralPhase {
    eta: f64,
    constant: f64,
    two_thirds: f64,
    third: f64,
    third_log: f64,
    log: f64,
    min_third: f64,
    min_two_thirds: f64,
    min_one: f64,
    min_four_thirds: f64,
    min_five_thirds: f64,
    // pseudo-PN terms, to be divided by eta
    one: f64,
    four_thirds: f64,
    five_thirds: f64,
    two: f64,
}

impl InspiralPhase {
    pub fn new(bin: &Binary) -> Self {
        use consts::PI;
        let pn = TaylorF2::new(bin);
        let norm = 3.0 / (128.0 * bin.eta);

        InspiralPhase {
            eta: bin.eta,
            constant: pn.five * norm,
            two_thirds: pn.seven * norm * PI.powf(2.0 / 3.0),
            third: pn.six * norm * PI.powf(1.0 / 3.0),
            third_log: pn.six_log * norm * PI.powf(1.0 / 3.0),
            log: pn.five_log * norm,
            min_third: pn.four * norm * PI.powf(-1.0 / 3.0),
            min_two_thirds: pn.three * norm * PI.powf(-2.0 / 3.0),
            min_one: pn.two * norm / PI,
            min_four_thirds: pn.one * norm * PI.powf(-4.0 / 3.0),
            min_five_thirds: pn.zero * norm * PI.powf(-5.0 / 3.0),
            one: SIGMA1.eval(bin),
            four_thirds: 0.75 * SIGMA2.eval(bin),
            five_thirds: 0.6 * SIGMA3.eval(bin),
            two: 0.5 * SIGMA4.eval(bin),
        }
    }
}

impl Piece for InspiralPhase {
    fn value(&self, f: f64) -> f64 {
        let f_third = f.cbrt();
        let ln_pi_f = (consts::PI * f).ln();

        let pn = self.constant
            + self.two_thirds * f_third * f_third
            + self.third * f_third
            + self.third_log * f_third * ln_pi_f / 3.0
            + self.log * ln_pi_f / 3.0
            + self.min_third / f_third
            + self.min_two_thirds / (f_third * f_third)
            + self.min_one / f
            + self.min_four_thirds / (f * f_third)
            + self.min_five_thirds / (f * f_third * f_third);

        let pseudo_pn = self.one * f
            + self.four_thirds * f * f_third
            + self.five_thirds * f * f_third * f_third
            + self.two * f * f;

        pn + pseudo_pn / self.eta
    }

    fn derivative(&self, f: f64) -> f64 {
        let f_third = f.cbrt();
        let ln_pi_f = (consts::PI * f).ln();

        let pn = 2.0 / 3.0 * self.two_thirds / f_third
            + self.third / (3.0 * f_third * f_third)
            + self.third_log * (ln_pi_f + 3.0) / (9.0 * f_third * f_third)
            + self.log / (3.0 * f)
            - self.min_third / (3.0 * f * f_third)
            - 2.0 / 3.0 * self.min_two_thirds / (f * f_third * f_third)
            - self.min_one / (f * f)
            - 4.0 / 3.0 * self.min_four_thirds / (f * f * f_third)
            - 5.0 / 3.0 * self.min_five_thirds / (f * f * f_third * f_third);

        let pseudo_pn = self.one
            + 4.0 / 3.0 * self.four_thirds * f_third
            + 5.0 / 3.0 * self.five_thirds * f_third * f_third
            + 2.0 * self.two * f;

        pn + pseudo_pn / self.eta
    }
}

/// Phenomenological phase between the inspiral and the merger,
/// `(beta1 f - beta3 / (3 f^3) + beta2 ln f) / eta`
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct IntermediatePhase {
    eta: f64,
    beta1: f64,
    beta2: f64,
    beta3: f64,
}

impl IntermediatePhase {
    pub fn new(bin: &Binary) -> Self {
        IntermediatePhase {
            eta: bin.eta,
            beta1: BETA1.eval(bin),
            beta2: BETA2.eval(bin),
            beta3: BETA3.eval(bin),
        }
    }
}

impl Piece for IntermediatePhase {
    fn value(&self, f: f64) -> f64 {
        (self.beta1 * f - self.beta3 / (3.0 * f * f * f) + self.beta2 * f.ln()) / self.eta
    }

    fn derivative(&self, f: f64) -> f64 {
        (self.beta1 + self.beta3 / f.powi(4) + self.beta2 / f) / self.eta
    }
}

/// Phenomenological phase of the merger and ringdown, which includes
/// an arctangent centred near the ringdown frequency
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct MergerRingdownPhase {
    eta: f64,
    alpha1: f64,
    alpha2: f64,
    alpha3: f64,
    alpha4: f64,
    alpha5: f64,
    f_ring: f64,
    f_damp: f64,
}

impl MergerRingdownPhase {
    pub fn new(bin: &Binary, remnant: &Remnant) -> Self {
        MergerRingdownPhase {
            eta: bin.eta,
            alpha1: ALPHA1.eval(bin),
            alpha2: ALPHA2.eval(bin),
            alpha3: ALPHA3.eval(bin),
            alpha4: ALPHA4.eval(bin),
            alpha5: ALPHA5.eval(bin),
            f_ring: remnant.ringdown_frequency,
            f_damp: remnant.damping_frequency,
        }
    }
}

impl Piece for MergerRingdownPhase {
    fn value(&self, f: f64) -> f64 {
        let phi = -self.alpha2 / f
            + 4.0 / 3.0 * self.alpha3 * f.powf(0.75)
            + self.alpha1 * f
            + self.alpha4 * ((f - self.alpha5 * self.f_ring) / self.f_damp).atan();
        phi / self.eta
    }

    fn derivative(&self, f: f64) -> f64 {
        let x = (f - self.alpha5 * self.f_ring) / self.f_damp;
        let dphi = self.alpha1
            + self.alpha2 / (f * f)
            + self.alpha3 / f.powf(0.25)
            + self.alpha4 / (self.f_damp * (1.0 + x * x));
        dphi / self.eta
    }
}

#[cfg(test)]
mod tests {
    use crate::event::Event;
    use crate::qnm::QnmTable;
    use super::*;

    fn check_derivative<P: Piece>(piece: &P, f: f64) {
        let h = 1.0e-6 * f;
        let numerical = (piece.value(f + h) - piece.value(f - h)) / (2.0 * h);
        let analytic = piece.derivative(f);
        let err = (numerical - analytic).abs() / analytic.abs();
        println!("f = {:.4e}: analytic = {:.9e}, numerical = {:.9e}, err = {:.3e}", f, analytic, numerical, err);
        assert!(err < 1.0e-6);
    }

    #[test]
    fn analytic_derivatives() {
        let table = QnmTable::builtin();
        let events = [
            Event::new(30.0, 0.2222222, 0.0, 0.0, 0.5),
            Event::new(8.0, 0.16, 0.7, -0.4, 1.0),
        ];

        for ev in events.iter() {
            let bin = Binary::new(ev);
            let remnant = Remnant::new(&bin, &table);

            let ins = InspiralPhase::new(&bin);
            for f in [0.002, 0.008, 0.017].iter() {
                check_derivative(&ins, *f);
            }

            let int = IntermediatePhase::new(&bin);
            for f in [0.018, 0.03, 0.045].iter() {
                check_derivative(&int, *f);
            }

            let mrd = MergerRingdownPhase::new(&bin, &remnant);
            for f in [0.05, 0.09, 0.15].iter() {
                check_derivative(&mrd, *f);
            }
        }
    }
}
