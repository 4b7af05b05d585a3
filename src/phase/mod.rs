//! Phase of the frequency-domain waveform
//!
//! The phase is built from three pieces: an inspiral (TaylorF2 with
//! pseudo-PN corrections), an intermediate region and a merger-ringdown.
//! Each is joined onto its predecessor by the addition of a linear
//! function of Mf, so that the whole is continuous in value and slope.

use crate::binary::Binary;
use crate::constants::*;
use crate::matching::*;
use crate::remnant::Remnant;

mod coeffs;
mod pieces;

pub use coeffs::*;
pub use pieces::*;

/// The complete phase model of a single event, as a function of Mf.
#[derive(Debug,Copy,Clone)]
pub struct PhaseModel {
    boundaries: Boundaries,
    inspiral: InspiralPhase,
    intermediate: Joined<IntermediatePhase>,
    merger_ringdown: Joined<MergerRingdownPhase>,
    time_shift: f64,
}

impl PhaseModel {
    /// Constructs the phase model, given the properties of the remnant
    /// and the (dimensionless) frequency of peak amplitude, `f_peak`.
    pub fn new(bin: &Binary, remnant: &Remnant, f_peak: f64) -> Self {
        let boundaries = Boundaries::new(
            PHASE_INSPIRAL_JOIN,
            0.5 * remnant.ringdown_frequency,
            MF_CUTOFF,
        );

        let inspiral = InspiralPhase::new(bin);
        let intermediate = Joined::onto(&inspiral, IntermediatePhase::new(bin), boundaries.first);
        let mrd = MergerRingdownPhase::new(bin, remnant);
        let merger_ringdown = Joined::onto(&intermediate, mrd, boundaries.second);

        // t = 0 at the peak of the amplitude
        let time_shift = mrd.derivative(f_peak.abs());

        PhaseModel {
            boundaries,
            inspiral,
            intermediate,
            merger_ringdown,
            time_shift,
        }
    }

    pub fn boundaries(&self) -> Boundaries {
        self.boundaries
    }

    /// The slope removed from the phase, so that the time of coalescence
    /// coincides with the peak of the amplitude.
    pub fn time_shift(&self) -> f64 {
        self.time_shift
    }

    /// Phase at `mf` before alignment; zero out of band.
    pub fn value(&self, mf: f64) -> f64 {
        match self.boundaries.classify(mf) {
            Region::Inspiral => self.inspiral.value(mf),
            Region::Intermediate => self.intermediate.value(mf),
            Region::MergerRingdown => self.merger_ringdown.value(mf),
            Region::OutOfBand => 0.0,
        }
    }

    /// First derivative of the phase at `mf` before alignment.
    pub fn derivative(&self, mf: f64) -> f64 {
        match self.boundaries.classify(mf) {
            Region::Inspiral => self.inspiral.derivative(mf),
            Region::Intermediate => self.intermediate.derivative(mf),
            Region::MergerRingdown => self.merger_ringdown.derivative(mf),
            Region::OutOfBand => 0.0,
        }
    }

    /// Aligned phase at `mf`, which vanishes at the reference
    /// frequency `mf_ref` and above the cutoff.
    pub fn aligned(&self, mf: f64, mf_ref: f64) -> f64 {
        if mf < self.boundaries.cutoff {
            let phi_ref = self.value(mf_ref);
            self.value(mf) - self.time_shift * (mf - mf_ref) - phi_ref
        } else {
            self.value(mf)
        }
    }

    /// Evaluates the aligned phase at every sample of `mf`, taking
    /// the smallest sample as the reference frequency.
    pub fn evaluate(&self, mf: &[f64]) -> Vec<f64> {
        let mf_ref = nan_min(mf);
        mf.iter().map(|&f| self.aligned(f, mf_ref)).collect()
    }
}

/// Minimum of a slice, which is NaN if any element is NaN.
pub(crate) fn nan_min(x: &[f64]) -> f64 {
    x.iter().fold(f64::INFINITY, |m, &v| {
        if m.is_nan() || v.is_nan() {
            f64::NAN
        } else {
            m.min(v)
        }
    })
}

#[cfg(test)]
mod tests {
    use crate::event::Event;
    use crate::qnm::QnmTable;
    use crate::amplitude::peak_frequency;
    use super::*;

    fn model(ev: &Event) -> PhaseModel {
        let table = QnmTable::builtin();
        let bin = Binary::new(ev);
        let remnant = Remnant::new(&bin, &table);
        let f_peak = peak_frequency(&bin, &remnant);
        PhaseModel::new(&bin, &remnant, f_peak)
    }

    #[test]
    fn continuity_at_joins() {
        let events = [
            Event::new(30.0, 0.2222222, 0.0, 0.0, 0.5),
            Event::new(30.0, 0.2, 0.4, -0.3, 0.5),
            Event::new(5.0, 0.1, -0.8, 0.9, 0.5),
        ];

        for ev in events.iter() {
            let phase = model(ev);
            let b = phase.boundaries();
            for fj in [b.first, b.second].iter() {
                let h = 1.0e-6 * fj;
                let left = phase.value(fj - h);
                let right = phase.value(fj + h);
                let mid = phase.value(*fj);

                // one-sided slopes
                let dl = (mid - left) / h;
                let dr = (right - mid) / h;

                println!(
                    "fj = {:.6e}: phi(-) = {:.9e}, phi(+) = {:.9e}, dphi(-) = {:.9e}, dphi(+) = {:.9e}",
                    fj, left, right, dl, dr,
                );

                assert!((right - left).abs() < 1.0e-4 * mid.abs().max(1.0));
                assert!((dr - dl).abs() < 1.0e-4 * dl.abs().max(1.0));

                let err = (phase.derivative(fj - 1.0e-12) - phase.derivative(*fj)).abs();
                assert!(err < 1.0e-6 * phase.derivative(*fj).abs().max(1.0));
            }
        }
    }

    #[test]
    fn reference_and_cutoff() {
        let phase = model(&Event::new(20.0, 0.24, 0.3, 0.1, 1.0));
        let mf = [0.004, 0.01, 0.003, 0.05, 0.2, 0.35];
        let phi = phase.evaluate(&mf);
        println!("{:?}", phi);
        assert_eq!(phi[2], 0.0);
        assert_eq!(phi[4], 0.0);
        assert_eq!(phi[5], 0.0);
        assert!(phi[0] != 0.0 && phi[3] != 0.0);
        assert_eq!(phi[1], phase.aligned(0.01, 0.003));
    }

    #[test]
    fn evaluate_matches_pointwise() {
        let phase = model(&Event::new(8.0, 0.18, -0.5, 0.7, 0.2));
        let mf = [0.05, 0.002, 0.0105, 0.3, 0.02, 0.0041];
        let phi = phase.evaluate(&mf);
        for (f, p) in mf.iter().zip(phi.iter()) {
            assert_eq!(*p, phase.aligned(*f, 0.002));
        }
    }

    #[test]
    fn nan_reference_propagates() {
        let phase = model(&Event::new(20.0, 0.24, 0.0, 0.0, 1.0));
        let phi = phase.evaluate(&[0.01, f64::NAN, 0.3]);
        assert!(phi[0].is_nan());
        assert_eq!(phi[2], 0.0);
    }
}
