//! Time to coalescence and the high-frequency cutoff

use std::f64::consts;
use crate::binary::Binary;
use crate::constants::*;

/// Time remaining before coalescence, in seconds, of a binary whose
/// gravitational-wave frequency is `f` (in Hz).
///
/// Uses the stationary-phase relation t(f) at 3.5PN order for
/// nonspinning binaries, as in Allen et al., Phys. Rev. D 85,
/// 122006 (2012). Only the inspiral is modelled.
pub fn time_to_coalescence(bin: &Binary, f: f64) -> f64 {
    use consts::PI;

    let total_mass = bin.total_mass_time();
    let eta = bin.eta;
    let eta2 = bin.eta2;

    let v = (PI * total_mass * f).cbrt();
    let v2 = v * v;
    let v4 = v2 * v2;
    let v8 = v4 * v4;

    let prefactor = 5.0 / 256.0 * total_mass / (eta * v8);

    let low_order = 1.0
        + (743.0 / 252.0 + 11.0 / 3.0 * eta) * v2
        - 32.0 / 5.0 * PI * v2 * v
        + (3058673.0 / 508032.0 + 5429.0 / 504.0 * eta + 617.0 / 72.0 * eta2) * v4
        - (7729.0 / 252.0 - 13.0 / 3.0 * eta) * PI * v4 * v;

    let three_pn = (
        -10052469856691.0 / 23471078400.0
        + 128.0 / 3.0 * PI * PI
        + 6848.0 / 105.0 * EULER_GAMMA
        + (3147553127.0 / 3048192.0 - 451.0 / 12.0 * PI * PI) * eta
        - 15211.0 / 1728.0 * eta2
        + 25565.0 / 1296.0 * eta2 * eta
        + 3424.0 / 105.0 * (16.0 * v2).ln()
    ) * v4 * v2;

    let three_and_half_pn = (-15419335.0 / 127008.0 - 75703.0 / 756.0 * eta + 14809.0 / 378.0 * eta2)
        * PI * v4 * v2 * v;

    prefactor * (low_order + three_pn + three_and_half_pn)
}

/// Frequency, in Hz, at and above which the waveform vanishes.
pub fn cutoff_frequency(bin: &Binary) -> f64 {
    let mut f = MF_CUTOFF / bin.total_mass_time();
    // round up so that the cutoff itself maps to Mf >= MF_CUTOFF
    while f.is_finite() && f > 0.0 && bin.dimensionless(f) < MF_CUTOFF {
        f = f64::from_bits(f.to_bits() + 1);
    }
    f
}

#[cfg(test)]
mod tests {
    use crate::event::Event;
    use super::*;

    #[test]
    fn reference_values() {
        let bin = Binary::new(&Event::new(30.0, 0.2222222, 0.0, 0.0, 0.5));
        let f = [20.0, 50.0, 100.0, 200.0, 400.0];
        let target = [0.5755236957042769, -0.005200962721578631, -0.024715896166338715, -0.01776034837585924, -0.01224452235887416];

        for (f, target) in f.iter().zip(target.iter()) {
            let tau = time_to_coalescence(&bin, *f);
            let err = (tau - target).abs() / target.abs();
            println!("f = {:>5.1} Hz: tau = {:.9e} s [expected {:.9e}, err = {:.3e}]", f, tau, target, err);
            assert!(err < 1.0e-9);
        }

        let fcut = cutoff_frequency(&bin);
        assert!((fcut - 548.9485907644039).abs() / fcut < 1.0e-12);
    }

    #[test]
    fn newtonian_limit() {
        // far from merger, the leading-order chirp dominates
        let bin = Binary::new(&Event::new(1.2, 0.25, 0.0, 0.0, 0.1));
        let f = 1.0e-3;
        let mc = 1.2 * SOLAR_MASS_TIME;
        let newtonian = 5.0 / 256.0 * mc.powf(-5.0 / 3.0) * (consts::PI * f).powf(-8.0 / 3.0);
        let tau = time_to_coalescence(&bin, f);
        println!("tau = {:.6e}, newtonian = {:.6e}", tau, newtonian);
        assert!((tau - newtonian).abs() / newtonian < 1.0e-3);
    }

    #[test]
    fn cutoff_scales_inversely_with_mass() {
        let light = Binary::new(&Event::new(10.0, 0.2, 0.0, 0.0, 1.0));
        let heavy = Binary::new(&Event::new(20.0, 0.2, 0.0, 0.0, 1.0));
        let ratio = cutoff_frequency(&light) / cutoff_frequency(&heavy);
        assert!((ratio - 2.0).abs() < 1.0e-14);
        assert!((light.dimensionless(cutoff_frequency(&light)) - MF_CUTOFF).abs() < 1.0e-15);
    }

    #[test]
    fn cutoff_is_out_of_band() {
        for i in 0..1000 {
            let mc = 1.0 + 0.137 * (i as f64);
            let eta = 0.05 + 0.0002 * (i as f64);
            let bin = Binary::new(&Event::new(mc, eta, 0.0, 0.0, 1.0));
            assert!(bin.dimensionless(cutoff_frequency(&bin)) >= MF_CUTOFF);
        }
    }
}
