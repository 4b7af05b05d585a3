//! Evaluation of the waveform model over batches of events

use num_complex::Complex64;

use crate::amplitude::AmplitudeModel;
use crate::binary::Binary;
use crate::coalescence;
use crate::event::{Event, EventBatch, ParameterError};
use crate::grid::Grid;
use crate::phase::PhaseModel;
use crate::qnm::QnmTable;
use crate::remnant::Remnant;

/// The IMRPhenomD model of the dominant (l = m = 2) harmonic of an
/// aligned-spin binary black hole coalescence.
///
/// Holds the table of quasi-normal-mode frequencies, which is read,
/// but never modified, by every evaluation. A single model can
/// therefore be shared between threads.
#[derive(Clone,Debug,PartialEq)]
pub struct PhenomD {
    table: QnmTable,
}

impl Default for PhenomD {
    fn default() -> Self {
        Self::new(QnmTable::builtin())
    }
}

impl PhenomD {
    pub fn new(table: QnmTable) -> Self {
        PhenomD {table}
    }

    pub fn table(&self) -> &QnmTable {
        &self.table
    }

    /// Final state of the given event.
    pub fn remnant(&self, event: &Event) -> Remnant {
        Remnant::new(&Binary::new(event), &self.table)
    }

    fn models(&self, event: &Event) -> (Binary, PhaseModel, AmplitudeModel) {
        let bin = Binary::new(event);
        let remnant = Remnant::new(&bin, &self.table);
        let amplitude = AmplitudeModel::new(&bin, &remnant);
        let phase = PhaseModel::new(&bin, &remnant, amplitude.peak_frequency());
        (bin, phase, amplitude)
    }

    /// Phase, in radians, of a single event at frequencies `f` (in Hz).
    /// The phase vanishes at the smallest of the frequencies and at or
    /// above the cutoff frequency.
    pub fn phase_of(&self, event: &Event, f: &[f64]) -> Vec<f64> {
        let (bin, phase, _) = self.models(event);
        let mf: Vec<f64> = f.iter().map(|&f| bin.dimensionless(f)).collect();
        phase.evaluate(&mf)
    }

    /// Amplitude, in Hz^-1, of a single event at frequencies `f` (in Hz).
    pub fn amplitude_of(&self, event: &Event, f: &[f64]) -> Vec<f64> {
        let (bin, _, amplitude) = self.models(event);
        f.iter().map(|&f| amplitude.value(bin.dimensionless(f))).collect()
    }

    /// Complex strain `A(f) exp(-i Phi(f))` of a single event.
    pub fn strain_of(&self, event: &Event, f: &[f64]) -> Vec<Complex64> {
        let (bin, phase, amplitude) = self.models(event);
        let mf: Vec<f64> = f.iter().map(|&f| bin.dimensionless(f)).collect();
        phase.evaluate(&mf)
            .into_iter()
            .zip(mf.iter())
            .map(|(phi, &mf)| Complex64::from_polar(amplitude.value(mf), -phi))
            .collect()
    }

    /// Time to coalescence, in seconds, of a single event at
    /// frequencies `f` (in Hz). No cutoff is applied.
    pub fn time_to_coalescence_of(&self, event: &Event, f: &[f64]) -> Vec<f64> {
        let bin = Binary::new(event);
        f.iter().map(|&f| coalescence::time_to_coalescence(&bin, f)).collect()
    }

    /// Cutoff frequency of a single event, in Hz.
    pub fn cutoff_frequency_of(&self, event: &Event) -> f64 {
        coalescence::cutoff_frequency(&Binary::new(event))
    }

    /// Frequency of peak amplitude of a single event, in Hz.
    pub fn peak_frequency_of(&self, event: &Event) -> f64 {
        let (bin, _, amplitude) = self.models(event);
        bin.physical(amplitude.peak_frequency())
    }

    /// Evaluates `func` for each event in the batch, against the
    /// appropriate column of the frequency grid.
    fn per_event<T, F>(&self, f: &Grid, batch: &EventBatch, func: F) -> Result<Grid<T>, ParameterError>
    where
        T: Copy + Default,
        F: Fn(&Event, &[f64]) -> Vec<T>,
    {
        f.check_broadcast(batch.len())?;
        let mut output = Grid::zeros(f.samples(), batch.len());
        for (i, event) in batch.iter().enumerate() {
            let values = func(&event, f.column_for(i));
            output.column_mut(i).copy_from_slice(&values);
        }
        Ok(output)
    }

    /// Phase, in radians, for every event in the batch.
    ///
    /// `f` holds frequencies in Hz, either one column per event or a
    /// single column that is shared by all events. The output has one
    /// column per event. Fails if the grid cannot be broadcast
    /// against the batch.
    pub fn phase(&self, f: &Grid, batch: &EventBatch) -> Result<Grid, ParameterError> {
        self.per_event(f, batch, |ev, f| self.phase_of(ev, f))
    }

    /// Amplitude, in Hz^-1, for every event in the batch.
    /// Broadcasting follows [`PhenomD::phase`].
    pub fn amplitude(&self, f: &Grid, batch: &EventBatch) -> Result<Grid, ParameterError> {
        self.per_event(f, batch, |ev, f| self.amplitude_of(ev, f))
    }

    /// Complex strain for every event in the batch.
    pub fn strain(&self, f: &Grid, batch: &EventBatch) -> Result<Grid<Complex64>, ParameterError> {
        self.per_event(f, batch, |ev, f| self.strain_of(ev, f))
    }

    /// Time to coalescence, in seconds, for every event in the batch.
    pub fn time_to_coalescence(&self, f: &Grid, batch: &EventBatch) -> Result<Grid, ParameterError> {
        self.per_event(f, batch, |ev, f| self.time_to_coalescence_of(ev, f))
    }

    /// Cutoff frequency, in Hz, of every event in the batch.
    pub fn cutoff_frequency(&self, batch: &EventBatch) -> Vec<f64> {
        batch.iter().map(|ev| self.cutoff_frequency_of(&ev)).collect()
    }

    /// Frequency of peak amplitude, in Hz, of every event in the batch.
    pub fn peak_frequency(&self, batch: &EventBatch) -> Vec<f64> {
        batch.iter().map(|ev| self.peak_frequency_of(&ev)).collect()
    }

    /// Final state of every event in the batch.
    pub fn remnants(&self, batch: &EventBatch) -> Vec<Remnant> {
        batch.iter().map(|ev| self.remnant(&ev)).collect()
    }
}
