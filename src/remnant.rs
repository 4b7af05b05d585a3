//! Final state of the merger: spin of the remnant black hole,
//! energy radiated in gravitational waves, and the remnant's
//! quasi-normal-mode frequencies

use crate::binary::Binary;
use crate::qnm::QnmTable;

/// Dimensionless spin of the remnant black hole.
///
/// Uses the fit of Husa et al., Phys. Rev. D 93, 044006 (2016),
/// in terms of the mass-weighted total spin s = m1^2 chi1 + m2^2 chi2.
pub fn final_spin(bin: &Binary) -> f64 {
    let eta = bin.eta;
    let eta2 = eta * eta;
    let s = bin.m1 * bin.m1 * bin.chi1 + bin.m2 * bin.m2 * bin.chi2;

    let nonspinning = eta * (3.4641016151377544 - 4.399247300629289 * eta + 9.397292189321194 * eta2 - 13.180949901606242 * eta2 * eta);
    let linear = eta * s * ((1.0 / eta - 0.0850917821418767 - 5.837029316602263 * eta) + (0.1014665242971878 - 2.0967746996832157 * eta) * s);
    let cubic = eta * s * ((-1.3546806617824356 + 4.108962025369336 * eta) * s * s + (-0.8676969352555539 + 2.064046835273906 * eta) * s * s * s);

    nonspinning + linear + cubic
}

/// Fraction of the total mass radiated as gravitational waves.
///
/// Uses the fit of Husa et al. (2016), in terms of the normalized
/// spin s = (m1^2 chi1 + m2^2 chi2) / (m1^2 + m2^2).
pub fn radiated_energy(bin: &Binary) -> f64 {
    let eta = bin.eta;
    let eta2 = eta * eta;
    let m1_sqd = bin.m1 * bin.m1;
    let m2_sqd = bin.m2 * bin.m2;
    let s = (m1_sqd * bin.chi1 + m2_sqd * bin.chi2) / (m1_sqd + m2_sqd);

    let nonspinning = eta * (0.055974469826360077 + 0.5809510763115132 * eta - 0.9606726679372312 * eta2 + 3.352411249771192 * eta2 * eta);
    let numerator = 1.0 + (-0.0030302335878845507 - 2.0066110851351073 * eta + 7.7050567802399215 * eta2) * s;
    let denominator = 1.0 + (-0.6714403054720589 - 1.4756929437702908 * eta + 7.304676214885011 * eta2) * s;

    nonspinning * numerator / denominator
}

/// Properties of the remnant black hole
#[derive(Copy,Clone,Debug,PartialEq)]
pub struct Remnant {
    /// Dimensionless spin
    pub spin: f64,
    /// Radiated energy as a fraction of the initial total mass
    pub radiated_energy: f64,
    /// Ringdown frequency, in units of the inverse initial total mass
    pub ringdown_frequency: f64,
    /// Damping frequency, in units of the inverse initial total mass
    pub damping_frequency: f64,
}

impl Remnant {
    pub fn new(bin: &Binary, table: &QnmTable) -> Self {
        let spin = final_spin(bin);
        let radiated_energy = radiated_energy(bin);
        // table is in units of the remnant mass, M (1 - E_rad)
        let scale = 1.0 / (1.0 - radiated_energy);

        Remnant {
            spin,
            radiated_energy,
            ringdown_frequency: table.ringdown(spin) * scale,
            damping_frequency: table.damping(spin) * scale,
        }
    }
}
