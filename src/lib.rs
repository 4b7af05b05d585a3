//! Frequency-domain gravitational waveforms of aligned-spin binary
//! black hole coalescences, following the phenomenological model
//! IMRPhenomD of Husa et al., Phys. Rev. D 93, 044006 (2016) and
//! Khan et al., Phys. Rev. D 93, 044007 (2016).
//!
//! ```
//! use phenomd::*;
//!
//! let model = PhenomD::default();
//! let event = Event::new(30.0, 0.2222222, 0.0, 0.0, 0.5);
//! let f = [20.0, 50.0, 100.0, 200.0, 400.0];
//!
//! let amplitude = model.amplitude_of(&event, &f);
//! let phase = model.phase_of(&event, &f);
//! assert_eq!(phase[0], 0.0);
//! assert!(amplitude.iter().all(|a| *a > 0.0));
//! ```

pub mod constants;
pub mod event;
pub mod grid;
pub mod binary;
pub mod remnant;
pub mod qnm;
pub mod calibration;
pub mod matching;
pub mod phase;
pub mod amplitude;
pub mod coalescence;
mod model;

pub use event::{Event, EventBatch, ParameterError, ParameterErrorKind};
pub use grid::Grid;
pub use qnm::{QnmTable, TableError, TableErrorKind};
pub use remnant::Remnant;
pub use model::PhenomD;
pub use num_complex::Complex64;
