//! Parameters of compact-binary coalescences

use std::iter::FromIterator;

mod error;

pub use error::*;

/// The primal parameters of a single aligned-spin binary.
#[derive(Copy,Clone,Debug,PartialEq)]
pub struct Event {
    /// Detector-frame chirp mass, in solar masses
    pub chirp_mass: f64,
    /// Symmetric mass ratio, 0 < eta <= 1/4
    pub eta: f64,
    /// Dimensionless spin of the primary, along the orbital angular momentum
    pub chi1: f64,
    /// Dimensionless spin of the secondary, along the orbital angular momentum
    pub chi2: f64,
    /// Luminosity distance, in Gpc
    pub distance: f64,
}

impl Event {
    pub fn new(chirp_mass: f64, eta: f64, chi1: f64, chi2: f64, distance: f64) -> Self {
        Event {chirp_mass, eta, chi1, chi2, distance}
    }

    /// Constructs an event from its component masses `m1` and `m2`,
    /// in solar masses.
    pub fn from_masses(m1: f64, m2: f64, chi1: f64, chi2: f64, distance: f64) -> Self {
        let total = m1 + m2;
        let chirp_mass = (m1 * m2).powf(3.0 / 5.0) / total.powf(1.0 / 5.0);
        let eta = m1 * m2 / (total * total);
        Event {chirp_mass, eta, chi1, chi2, distance}
    }

    /// Same event with the component spins swapped.
    pub fn with_spins_swapped(self) -> Self {
        Event {
            chi1: self.chi2,
            chi2: self.chi1,
            ..self
        }
    }

    /// Checks that the parameters lie in their physical domain,
    /// reporting the event as number `index`.
    pub fn validate_as(&self, index: usize) -> Result<(), ParameterError> {
        if !(self.chirp_mass.is_finite() && self.chirp_mass > 0.0) {
            return Err(ParameterError::domain("chirp_mass", index, self.chirp_mass, "0 < Mc < inf"));
        }
        if !(self.eta > 0.0 && self.eta <= 0.25) {
            return Err(ParameterError::domain("eta", index, self.eta, "0 < eta <= 0.25"));
        }
        if !(self.chi1.abs() <= 1.0) {
            return Err(ParameterError::domain("chi1", index, self.chi1, "-1 <= chi1 <= 1"));
        }
        if !(self.chi2.abs() <= 1.0) {
            return Err(ParameterError::domain("chi2", index, self.chi2, "-1 <= chi2 <= 1"));
        }
        if !(self.distance.is_finite() && self.distance > 0.0) {
            return Err(ParameterError::domain("distance", index, self.distance, "0 < dL < inf"));
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ParameterError> {
        self.validate_as(0)
    }
}

/// A batch of events, stored as one array per parameter.
/// All arrays share the same length.
#[derive(Clone,Debug,Default,PartialEq)]
pub struct EventBatch {
    chirp_mass: Vec<f64>,
    eta: Vec<f64>,
    chi1: Vec<f64>,
    chi2: Vec<f64>,
    distance: Vec<f64>,
}

impl EventBatch {
    /// Assembles a batch from per-parameter arrays.
    /// Fails if the arrays do not all have the same length.
    pub fn new(chirp_mass: Vec<f64>, eta: Vec<f64>, chi1: Vec<f64>, chi2: Vec<f64>, distance: Vec<f64>) -> Result<Self, ParameterError> {
        let len = chirp_mass.len();
        let others = [
            ("eta", eta.len()),
            ("chi1", chi1.len()),
            ("chi2", chi2.len()),
            ("distance", distance.len()),
        ];

        for (name, found) in others.iter() {
            if *found != len {
                return Err(ParameterError::length(name, len, *found));
            }
        }

        Ok(EventBatch {chirp_mass, eta, chi1, chi2, distance})
    }

    pub fn len(&self) -> usize {
        self.chirp_mass.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chirp_mass.is_empty()
    }

    /// Returns the `i`th event of the batch.
    /// Panics if `i` is out of bounds.
    pub fn event(&self, i: usize) -> Event {
        Event {
            chirp_mass: self.chirp_mass[i],
            eta: self.eta[i],
            chi1: self.chi1[i],
            chi2: self.chi2[i],
            distance: self.distance[i],
        }
    }

    pub fn get(&self, i: usize) -> Option<Event> {
        if i < self.len() {
            Some(self.event(i))
        } else {
            None
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Event> + '_ {
        (0..self.len()).map(move |i| self.event(i))
    }

    pub fn chirp_mass(&self) -> &[f64] {
        &self.chirp_mass
    }

    pub fn eta(&self) -> &[f64] {
        &self.eta
    }

    pub fn chi1(&self) -> &[f64] {
        &self.chi1
    }

    pub fn chi2(&self) -> &[f64] {
        &self.chi2
    }

    pub fn distance(&self) -> &[f64] {
        &self.distance
    }

    /// Checks that every event lies in the physical domain,
    /// stopping at the first that does not.
    pub fn validate(&self) -> Result<(), ParameterError> {
        self.iter()
            .enumerate()
            .try_for_each(|(i, ev)| ev.validate_as(i))
    }
}

impl FromIterator<Event> for EventBatch {
    fn from_iter<I: IntoIterator<Item = Event>>(iter: I) -> Self {
        let mut batch = EventBatch::default();
        for ev in iter {
            batch.chirp_mass.push(ev.chirp_mass);
            batch.eta.push(ev.eta);
            batch.chi1.push(ev.chi1);
            batch.chi2.push(ev.chi2);
            batch.distance.push(ev.distance);
        }
        batch
    }
}

impl From<Event> for EventBatch {
    fn from(ev: Event) -> Self {
        std::iter::once(ev).collect()
    }
}
