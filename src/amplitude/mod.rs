//! Amplitude of the frequency-domain waveform
//!
//! The inspiral and merger-ringdown amplitudes are bridged by a
//! quartic in Mf, fixed by the value and slope of its neighbours at
//! either end and by a calibrated value at the midpoint.

use std::f64::consts;
use crate::binary::Binary;
use crate::calibration::AMP_INTERMEDIATE_V2;
use crate::constants::*;
use crate::matching::*;
use crate::remnant::Remnant;

mod pieces;

pub use pieces::*;

/// Dimensionless frequency at which the amplitude peaks.
pub fn peak_frequency(bin: &Binary, remnant: &Remnant) -> f64 {
    MergerRingdownAmplitude::new(bin, remnant).peak_frequency()
}

/// The complete amplitude model of a single event.
#[derive(Debug,Copy,Clone)]
pub struct AmplitudeModel {
    boundaries: Boundaries,
    inspiral: InspiralAmplitude,
    intermediate: HermiteQuartic,
    merger_ringdown: MergerRingdownAmplitude,
    /// Leading-order amplitude at Mf = 1, in Hz^-1
    scale: f64,
}

impl AmplitudeModel {
    pub fn new(bin: &Binary, remnant: &Remnant) -> Self {
        let inspiral = InspiralAmplitude::new(bin);
        let merger_ringdown = MergerRingdownAmplitude::new(bin, remnant);
        let f_peak = merger_ringdown.peak_frequency();

        let boundaries = Boundaries::new(AMPLITUDE_INSPIRAL_JOIN, f_peak, MF_CUTOFF);

        let f1 = boundaries.first;
        let f3 = boundaries.second;
        let f2 = f1 + 0.5 * (f3 - f1);

        let intermediate = HermiteQuartic::collocate(
            [f1, f2, f3],
            [inspiral.value(f1), AMP_INTERMEDIATE_V2.eval(bin), merger_ringdown.value(f3)],
            [inspiral.derivative(f1), merger_ringdown.derivative(f3)],
        );

        let total_mass = bin.total_mass;
        let overall = 2.0 * (5.0 / (64.0 * consts::PI)).sqrt()
            * total_mass * SOLAR_MASS_LENGTH_GPC
            * total_mass * SOLAR_MASS_TIME
            / bin.distance;
        let leading_order = (2.0 * bin.eta / 3.0).sqrt() * consts::PI.powf(-1.0 / 6.0);

        AmplitudeModel {
            boundaries,
            inspiral,
            intermediate,
            merger_ringdown,
            scale: overall * leading_order,
        }
    }

    pub fn boundaries(&self) -> Boundaries {
        self.boundaries
    }

    /// Frequency of peak amplitude, Mf
    pub fn peak_frequency(&self) -> f64 {
        self.boundaries.second
    }

    /// Amplitude at `mf` relative to the leading-order inspiral amplitude;
    /// zero out of band.
    pub fn relative(&self, mf: f64) -> f64 {
        match self.boundaries.classify(mf) {
            Region::Inspiral => self.inspiral.value(mf),
            Region::Intermediate => self.intermediate.value(mf),
            Region::MergerRingdown => self.merger_ringdown.value(mf),
            Region::OutOfBand => 0.0,
        }
    }

    /// Derivative of the relative amplitude at `mf`.
    pub fn relative_derivative(&self, mf: f64) -> f64 {
        match self.boundaries.classify(mf) {
            Region::Inspiral => self.inspiral.derivative(mf),
            Region::Intermediate => self.intermediate.derivative(mf),
            Region::MergerRingdown => self.merger_ringdown.derivative(mf),
            Region::OutOfBand => 0.0,
        }
    }

    /// Amplitude at `mf`, in Hz^-1.
    pub fn value(&self, mf: f64) -> f64 {
        self.scale * mf.powf(-7.0 / 6.0) * self.relative(mf)
    }
}

#[cfg(test)]
mod tests {
    use crate::event::Event;
    use crate::qnm::QnmTable;
    use super::*;

    fn model(ev: &Event) -> AmplitudeModel {
        let table = QnmTable::builtin();
        let bin = Binary::new(ev);
        let remnant = Remnant::new(&bin, &table);
        AmplitudeModel::new(&bin, &remnant)
    }

    #[test]
    fn continuity_at_joins() {
        let events = [
            Event::new(30.0, 0.2222222, 0.0, 0.0, 0.5),
            Event::new(30.0, 0.2, 0.4, -0.3, 0.5),
            Event::new(5.0, 0.1, -0.8, 0.9, 0.5),
        ];

        for ev in events.iter() {
            let amp = model(ev);
            let b = amp.boundaries();
            for fj in [b.first, b.second].iter() {
                let below = amp.relative(fj * (1.0 - 1.0e-12));
                let above = amp.relative(*fj);
                let d_below = amp.relative_derivative(fj * (1.0 - 1.0e-12));
                let d_above = amp.relative_derivative(*fj);
                println!(
                    "fj = {:.6e}: A(-) = {:.9e}, A(+) = {:.9e}, dA(-) = {:.9e}, dA(+) = {:.9e}",
                    fj, below, above, d_below, d_above,
                );
                assert!((above - below).abs() < 1.0e-9 * above.abs());
                assert!((d_above - d_below).abs() < 1.0e-6 * (d_above.abs() + 1.0));
            }

            // the interior collocation point
            let bin = Binary::new(ev);
            let f2 = 0.5 * (b.first + b.second);
            let v2 = AMP_INTERMEDIATE_V2.eval(&bin);
            assert!((amp.relative(f2) - v2).abs() < 1.0e-12 * v2);
        }
    }

    #[test]
    fn vanishes_above_cutoff() {
        let amp = model(&Event::new(12.0, 0.25, 0.5, 0.5, 0.2));
        for mf in [0.2, 0.2000001, 0.5, 10.0].iter() {
            assert_eq!(amp.value(*mf), 0.0);
        }
        assert!(amp.value(0.1999999) > 0.0);
    }

    #[test]
    fn scales_with_distance() {
        let near = model(&Event::new(12.0, 0.25, 0.0, 0.0, 0.1));
        let far = model(&Event::new(12.0, 0.25, 0.0, 0.0, 0.4));
        for mf in [0.005, 0.03, 0.1].iter() {
            let ratio = near.value(*mf) / far.value(*mf);
            assert!((ratio - 4.0).abs() < 1.0e-12);
        }
    }
}
