//! Stitching the inspiral, intermediate and merger-ringdown
//! descriptions into a single, continuously differentiable function

mod linear;
mod quartic;

pub use linear::*;
pub use quartic::*;

/// One analytic piece of a piecewise function of Mf.
pub trait Piece {
    /// Value at `f`
    fn value(&self, f: f64) -> f64;
    /// First derivative at `f`
    fn derivative(&self, f: f64) -> f64;
}

/// Which piece of the model applies at a given frequency
#[derive(Debug,Copy,Clone,PartialEq)]
pub enum Region {
    Inspiral,
    Intermediate,
    MergerRingdown,
    OutOfBand,
}

/// Dimensionless frequencies that separate the regions.
/// Each region is half-open, [lower, upper).
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Boundaries {
    /// End of the inspiral
    pub first: f64,
    /// End of the intermediate region
    pub second: f64,
    /// End of the merger-ringdown
    pub cutoff: f64,
}

impl Boundaries {
    pub fn new(first: f64, second: f64, cutoff: f64) -> Self {
        Boundaries {first, second, cutoff}
    }

    /// Selects the region containing `mf`. Anything that is not below
    /// the cutoff, including NaN, is out of band.
    pub fn classify(&self, mf: f64) -> Region {
        if mf < self.first {
            Region::Inspiral
        } else if mf < self.second {
            Region::Intermediate
        } else if mf < self.cutoff {
            Region::MergerRingdown
        } else {
            Region::OutOfBand
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_open_regions() {
        let b = Boundaries::new(0.018, 0.04, 0.2);
        assert_eq!(b.classify(0.0), Region::Inspiral);
        assert_eq!(b.classify(0.018 - 1.0e-12), Region::Inspiral);
        assert_eq!(b.classify(0.018), Region::Intermediate);
        assert_eq!(b.classify(0.04), Region::MergerRingdown);
        assert_eq!(b.classify(0.2 - 1.0e-12), Region::MergerRingdown);
        assert_eq!(b.classify(0.2), Region::OutOfBand);
        assert_eq!(b.classify(3.0), Region::OutOfBand);
        assert_eq!(b.classify(f64::NAN), Region::OutOfBand);
    }
}
