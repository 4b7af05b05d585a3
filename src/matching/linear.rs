//! C1 continuity by the addition of a linear function

use super::Piece;

/// The linear function `offset + slope * f` that, added to the right-hand
/// piece, makes it agree in value and slope with the left-hand piece
/// at the join frequency.
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct LinearJoin {
    pub offset: f64,
    pub slope: f64,
}

impl LinearJoin {
    /// Solves for the join at `at`, given the (already joined) left-hand
    /// piece and the unmodified right-hand piece.
    pub fn solve<L: Piece, R: Piece>(left: &L, right: &R, at: f64) -> Self {
        let slope = left.derivative(at) - right.derivative(at);
        let offset = left.value(at) - right.value(at) - slope * at;
        LinearJoin {offset, slope}
    }

    pub fn at(&self, f: f64) -> f64 {
        self.offset + self.slope * f
    }
}

/// A piece shifted by a linear join
#[derive(Debug,Copy,Clone)]
pub struct Joined<P> {
    pub piece: P,
    pub join: LinearJoin,
}

impl<P: Piece> Joined<P> {
    /// Joins `piece` onto `left` at `at`.
    pub fn onto<L: Piece>(left: &L, piece: P, at: f64) -> Self {
        let join = LinearJoin::solve(left, &piece, at);
        Joined {piece, join}
    }
}

impl<P: Piece> Piece for Joined<P> {
    fn value(&self, f: f64) -> f64 {
        self.piece.value(f) + self.join.at(f)
    }

    fn derivative(&self, f: f64) -> f64 {
        self.piece.derivative(f) + self.join.slope
    }
}
