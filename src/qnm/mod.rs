//! Ringdown and damping frequencies of the remnant black hole,
//! tabulated as a function of its spin

use std::path::Path;

mod error;
mod table;

pub use error::*;
use table::QNM_TABLE;

/// Quasi-normal-mode frequencies of the remnant, as a function of
/// its dimensionless spin. Immutable once constructed.
#[derive(Clone,Debug,PartialEq)]
pub struct QnmTable {
    spins: Vec<f64>,
    ringdown: Vec<f64>,
    damping: Vec<f64>,
}

impl QnmTable {
    /// Creates a table from three parallel columns: the spin knots,
    /// and the ringdown and damping frequencies at those knots,
    /// in units of the inverse remnant mass.
    /// Fails if the columns differ in length, have fewer than two
    /// rows, contain non-finite values, or if the spins are not
    /// strictly increasing.
    pub fn new(spins: Vec<f64>, ringdown: Vec<f64>, damping: Vec<f64>) -> Result<Self, TableError> {
        if spins.len() != ringdown.len() || spins.len() != damping.len() {
            return Err(TableError::length(spins.len(), ringdown.len(), damping.len()));
        }

        if spins.len() < 2 {
            return Err(TableError::too_short(spins.len()));
        }

        let row = (0..spins.len())
            .find(|&i| !(spins[i].is_finite() && ringdown[i].is_finite() && damping[i].is_finite()));
        if let Some(i) = row {
            return Err(TableError::non_finite(i));
        }

        if let Some(i) = (1..spins.len()).find(|&i| spins[i] <= spins[i-1]) {
            return Err(TableError::ordering(i, spins[i-1], spins[i]));
        }

        Ok(QnmTable {spins, ringdown, damping})
    }

    /// The fundamental l = 2 mode for spins between -1 and 0.99,
    /// following the fitting formulae of Berti, Cardoso and Will,
    /// Phys. Rev. D 73, 064030 (2006): the co-rotating (m = 2) fit
    /// for a > 0 and the counter-rotating (m = -2) fit, at |a|,
    /// for a <= 0.
    ///
    /// Both frequencies are within about 1% of the exact Kerr modes at
    /// the knots; above a = 0.95, linear interpolation between knots
    /// adds up to 1.5%. The two fits disagree by about 1% at a = 0, so the
    /// ringdown frequency is not monotonic between a = 0 and 0.01.
    /// Load tabulated data with [`QnmTable::from_dir`] where this matters.
    pub fn builtin() -> Self {
        QnmTable {
            spins: QNM_TABLE.iter().map(|r| r[0]).collect(),
            ringdown: QNM_TABLE.iter().map(|r| r[1]).collect(),
            damping: QNM_TABLE.iter().map(|r| r[2]).collect(),
        }
    }

    /// Loads a table from three plain-text files, each holding one
    /// column of numbers separated by whitespace. Text following
    /// a `#` is ignored.
    pub fn from_files<P: AsRef<Path>>(spins: P, ringdown: P, damping: P) -> Result<Self, TableError> {
        let spins = read_column(spins.as_ref())?;
        let ringdown = read_column(ringdown.as_ref())?;
        let damping = read_column(damping.as_ref())?;
        Self::new(spins, ringdown, damping)
    }

    /// Loads a table from `QNMData_a.txt`, `QNMData_fring.txt` and
    /// `QNMData_fdamp.txt` in the given directory.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self, TableError> {
        let dir = dir.as_ref();
        Self::from_files(
            dir.join("QNMData_a.txt"),
            dir.join("QNMData_fring.txt"),
            dir.join("QNMData_fdamp.txt"),
        )
    }

    pub fn len(&self) -> usize {
        self.spins.len()
    }

    /// Smallest and largest tabulated spin
    pub fn spin_range(&self) -> (f64, f64) {
        (self.spins[0], self.spins[self.spins.len() - 1])
    }

    pub fn spins(&self) -> &[f64] {
        &self.spins
    }

    /// Ringdown frequency at spin `a`, in units of the inverse
    /// remnant mass. Clamped to the first or last tabulated
    /// value outside the table.
    pub fn ringdown(&self, a: f64) -> f64 {
        interp(a, &self.spins, &self.ringdown)
    }

    /// Damping frequency at spin `a`, in units of the inverse
    /// remnant mass. Clamped to the first or last tabulated
    /// value outside the table.
    pub fn damping(&self, a: f64) -> f64 {
        interp(a, &self.spins, &self.damping)
    }
}

impl Default for QnmTable {
    fn default() -> Self {
        Self::builtin()
    }
}

fn read_column(path: &Path) -> Result<Vec<f64>, TableError> {
    let name = path.display().to_string();

    let contents = std::fs::read_to_string(path)
        .map_err(|_| TableError::file(&name))?;

    contents.lines()
        .map(|line| line.split('#').next().unwrap_or(""))
        .flat_map(|line| line.split_whitespace())
        .map(|token| token.parse::<f64>().map_err(|_| TableError::parse(&name, token)))
        .collect()
}

/// Piecewise-linear interpolation of the points (`xp`, `fp`) at `x`.
/// `xp` must be increasing. Outside the range of `xp`, returns the
/// first or last value of `fp`; a NaN argument gives NaN.
pub fn interp(x: f64, xp: &[f64], fp: &[f64]) -> f64 {
    if x.is_nan() {
        return x;
    }

    let idx = xp.partition_point(|&k| k <= x);

    if idx == 0 {
        fp[0]
    } else if idx == xp.len() {
        fp[fp.len() - 1]
    } else {
        let lo = idx - 1;
        let slope = (fp[idx] - fp[lo]) / (xp[idx] - xp[lo]);
        slope * (x - xp[lo]) + fp[lo]
    }
}
