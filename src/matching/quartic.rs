//! Quartic interpolation between two matched end points and one
//! interior collocation point

use super::Piece;

/// The unique quartic that, at the nodes `f1 < f2 < f3`, takes the
/// values `v1`, `v2`, `v3` and has slope `d1` at `f1` and `d3` at `f3`.
///
/// Stored as Newton divided differences over the repeated nodes
/// `[f1, f1, f2, f3, f3]`.
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct HermiteQuartic {
    nodes: [f64; 4],
    coeffs: [f64; 5],
}

impl HermiteQuartic {
    /// Solves the five collocation conditions for nodes `x`, values `v`
    /// and end-point slopes `d`.
    pub fn collocate(x: [f64; 3], v: [f64; 3], d: [f64; 2]) -> Self {
        let [f1, f2, f3] = x;
        let [v1, v2, v3] = v;
        let [d1, d3] = d;

        let s12 = (v2 - v1) / (f2 - f1);
        let s23 = (v3 - v2) / (f3 - f2);

        let c112 = (s12 - d1) / (f2 - f1);
        let c123 = (s23 - s12) / (f3 - f1);
        let c233 = (d3 - s23) / (f3 - f2);

        let c1123 = (c123 - c112) / (f3 - f1);
        let c1233 = (c233 - c123) / (f3 - f1);

        let c11233 = (c1233 - c1123) / (f3 - f1);

        HermiteQuartic {
            nodes: [f1, f1, f2, f3],
            coeffs: [v1, d1, c112, c1123, c11233],
        }
    }

    /// Coefficients of 1, f, f^2, f^3 and f^4.
    pub fn monomial(&self) -> [f64; 5] {
        let mut poly = [0.0; 5];
        poly[0] = self.coeffs[4];
        for k in (0..4).rev() {
            // poly <- poly * (f - z_k) + c_k
            let z = self.nodes[k];
            for i in (1..5).rev() {
                poly[i] = poly[i-1] - z * poly[i];
            }
            poly[0] = -z * poly[0] + self.coeffs[k];
        }
        poly
    }
}

impl Piece for HermiteQuartic {
    fn value(&self, f: f64) -> f64 {
        self.nodes.iter()
            .zip(self.coeffs[..4].iter())
            .rev()
            .fold(self.coeffs[4], |p, (z, c)| c + (f - z) * p)
    }

    fn derivative(&self, f: f64) -> f64 {
        let mut p = self.coeffs[4];
        let mut dp = 0.0;
        for k in (0..4).rev() {
            let dz = f - self.nodes[k];
            dp = p + dz * dp;
            p = self.coeffs[k] + dz * p;
        }
        dp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Solves the 5x5 collocation system directly, by Gaussian
    /// elimination with partial pivoting.
    fn direct(x: [f64; 3], v: [f64; 3], d: [f64; 2]) -> [f64; 5] {
        let row = |f: f64| [1.0, f, f * f, f * f * f, f * f * f * f];
        let drow = |f: f64| [0.0, 1.0, 2.0 * f, 3.0 * f * f, 4.0 * f * f * f];
        let mut a = [row(x[0]), drow(x[0]), row(x[1]), row(x[2]), drow(x[2])];
        let mut b = [v[0], d[0], v[1], v[2], d[1]];

        for col in 0..5 {
            let pivot = (col..5)
                .max_by(|&i, &j| a[i][col].abs().partial_cmp(&a[j][col].abs()).unwrap())
                .unwrap();
            a.swap(col, pivot);
            b.swap(col, pivot);
            for r in (col+1)..5 {
                let m = a[r][col] / a[col][col];
                for k in col..5 {
                    a[r][k] -= m * a[col][k];
                }
                b[r] -= m * b[col];
            }
        }

        let mut sol = [0.0; 5];
        for r in (0..5).rev() {
            let s: f64 = ((r+1)..5).map(|k| a[r][k] * sol[k]).sum();
            sol[r] = (b[r] - s) / a[r][r];
        }
        sol
    }

    #[test]
    fn constraints_are_satisfied() {
        let x = [0.014, 0.043898583709176264, 0.07379716741835253];
        let v = [0.805142502161684, 0.8156063761271679, 1.0410528115277207];
        let d = [-12.136411982913344, 1.2424337611844045e-14];
        let q = HermiteQuartic::collocate(x, v, d);

        for i in 0..3 {
            let err = (q.value(x[i]) - v[i]).abs() / v[i];
            println!("v{}: target = {:.12e}, found = {:.12e}, err = {:.3e}", i+1, v[i], q.value(x[i]), err);
            assert!(err < 1.0e-13);
        }

        assert!((q.derivative(x[0]) - d[0]).abs() / d[0].abs() < 1.0e-12);
        assert!(q.derivative(x[2]).abs() < 1.0e-10);
    }

    #[test]
    fn agrees_with_direct_solution() {
        let x = [0.014, 0.043898583709176264, 0.07379716741835253];
        let v = [0.805142502161684, 0.8156063761271679, 1.0410528115277207];
        let d = [-12.136411982913344, 1.2424337611844045e-14];
        let q = HermiteQuartic::collocate(x, v, d);

        let expected = direct(x, v, d);
        let found = q.monomial();
        // closed-form determinant solution of the same system
        let reference = [1.0863660810908642, -28.528832338416066, 633.8768009880388, -1914.4663738246277, -20993.42605262483];

        for k in 0..5 {
            let err = (found[k] - expected[k]).abs() / expected[k].abs();
            let err_ref = (found[k] - reference[k]).abs() / reference[k].abs();
            println!("delta{}: newton = {:.12e}, direct = {:.12e} [{:.3e}], closed form = {:.12e} [{:.3e}]", k, found[k], expected[k], err, reference[k], err_ref);
            assert!(err < 1.0e-9);
            assert!(err_ref < 1.0e-9);
        }

        // and the monomial form evaluates to the same thing
        for f in [0.02, 0.035, 0.06].iter() {
            let poly = found.iter().rev().fold(0.0, |p, c| c + f * p);
            assert!((poly - q.value(*f)).abs() / q.value(*f) < 1.0e-11);
        }
    }

    #[test]
    fn reproduces_quartics() {
        // collocation is exact for a quartic
        let target = |f: f64| 0.5 - 2.0 * f + 3.0 * f * f - f * f * f + 0.25 * f * f * f * f;
        let dtarget = |f: f64| -2.0 + 6.0 * f - 3.0 * f * f + f * f * f;
        let x = [0.2, 1.1, 2.5];
        let q = HermiteQuartic::collocate(
            x,
            [target(x[0]), target(x[1]), target(x[2])],
            [dtarget(x[0]), dtarget(x[2])],
        );

        let expected = [0.5, -2.0, 3.0, -1.0, 0.25];
        let found = q.monomial();
        for k in 0..5 {
            assert!((found[k] - expected[k]).abs() < 1.0e-12);
        }

        for i in 0..=10 {
            let f = 0.3 * (i as f64);
            assert!((q.derivative(f) - dtarget(f)).abs() < 1.0e-11);
        }
    }
}
