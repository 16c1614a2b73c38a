//! Property tests for the occultation flux model and its adapters.

use approx::assert_relative_eq;
use proptest::prelude::*;
use transit_core::math::elliptic::Bulirsch;
use transit_models::light_curve::{interp, quad_batch, quad_rev};
use transit_models::limb_darkening::{occultation, quad, quad_grad, quad_with, Regime};

const H: f64 = 1e-6;

fn coefficient_strategy() -> impl Strategy<Value = (f64, f64)> {
    (0.0..0.6_f64, 0.0..0.4_f64)
}

/// Regime boundaries in `d` for radius ratio `p`.
fn boundaries(p: f64) -> Vec<f64> {
    [p, (1.0 - p).abs(), 1.0 + p, p - 1.0]
        .into_iter()
        .filter(|&b| b > 1e-3)
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn test_flux_continuous_across_boundaries(
        (c1, c2) in coefficient_strategy(),
        p in 0.01..1.8_f64
    ) {
        for b in boundaries(p) {
            let below = quad(c1, c2, p, b - H);
            let at = quad(c1, c2, p, b);
            let above = quad(c1, c2, p, b + H);
            prop_assert!((below - at).abs() < 5e-6, "p = {}, d = {}: {} vs {}", p, b, below, at);
            prop_assert!((above - at).abs() < 5e-6, "p = {}, d = {}: {} vs {}", p, b, above, at);
        }
    }

    #[test]
    fn test_flux_symmetric_in_separation(
        (c1, c2) in coefficient_strategy(),
        p in 0.01..1.8_f64,
        d in 0.0..3.0_f64
    ) {
        prop_assert_eq!(quad(c1, c2, p, d), quad(c1, c2, p, -d));
    }

    #[test]
    fn test_no_overlap_is_exactly_one(
        (c1, c2) in coefficient_strategy(),
        p in 0.0..2.0_f64,
        gap in 0.0..5.0_f64
    ) {
        prop_assert_eq!(quad(c1, c2, p, 1.0 + p + gap), 1.0);
    }

    #[test]
    fn test_flux_physical_range(
        (c1, c2) in coefficient_strategy(),
        p in 0.01..1.8_f64,
        d in 0.0..3.0_f64
    ) {
        let flux = quad(c1, c2, p, d);
        prop_assert!(flux.is_finite());
        prop_assert!(
            flux > -1e-12 && flux <= 1.0 + 1e-12,
            "flux = {} at p = {}, d = {}",
            flux,
            p,
            d
        );
    }

    #[test]
    fn test_backends_agree(
        (c1, c2) in coefficient_strategy(),
        p in 0.01..1.5_f64,
        d in 0.0..2.5_f64
    ) {
        let agm = quad(c1, c2, p, d);
        let reference = quad_with::<Bulirsch, f64>(c1, c2, p, d);
        prop_assert!((agm - reference).abs() < 1e-7);
    }
}

#[test]
fn test_full_occultation_closed_form() {
    for &(c1, c2) in &[(0.4, 0.3), (0.1, 0.5), (0.6, 0.0)] {
        let omega = 1.0 - c1 / 3.0 - c2 / 6.0;
        let expected =
            1.0 - ((1.0 - c1 - 2.0 * c2) * 1.0 + (c1 + 2.0 * c2) * (2.0 / 3.0) + c2 * 0.5) / omega;
        for &(p, d) in &[(1.0, 0.0), (1.5, 0.3), (2.0, 1.0)] {
            assert_eq!(quad(c1, c2, p, d), expected);
        }
    }
}

#[test]
fn test_regime_grid_is_exhaustive() {
    use Regime::*;

    let ps = [0.01, 0.5, 0.99, 1.0, 1.5];
    let ds = [0.0, 0.3, 0.99, 1.0, 1.01, 2.0];
    let expected = [
        [Transit, Transit, TransitTouchingLimb, LimbCrossing, Unocculted, Unocculted],
        [Transit, Transit, LimbCrossing, LimbCrossing, LimbCrossing, Unocculted],
        [Transit, LimbCrossing, EdgeAtCenterOuter, LimbCrossing, LimbCrossing, Unocculted],
        [FullyOcculted, LimbCrossing, LimbCrossing, EdgeAtCenterOuter, LimbCrossing, Unocculted],
        [FullyOcculted, FullyOcculted, LimbCrossing, LimbCrossing, LimbCrossing, LimbCrossing],
    ];

    for (p, row) in ps.iter().zip(expected.iter()) {
        for (d, regime) in ds.iter().zip(row.iter()) {
            let occ = occultation(*p, *d);
            assert_eq!(occ.regime, *regime, "p = {}, d = {}", p, d);
            let flux: f64 = occ.flux(&0.4, &0.3);
            assert!(flux.is_finite(), "p = {}, d = {}", p, d);
            assert!((-1e-12..=1.0).contains(&flux), "p = {}, d = {}: {}", p, d, flux);
        }
    }
}

#[test]
fn test_gradient_matches_finite_differences() {
    let points = [
        [0.4, 0.3, 0.1, 0.05],
        [0.2, 0.1, 0.3, 0.95],
        [0.5, 0.2, 0.7, 0.5],
        [0.1, 0.4, 1.3, 0.8],
        [0.4, 0.3, 0.2, -0.6],
        [0.3, 0.2, 0.9, 0.05],
    ];
    for args in points {
        let g = quad_grad(args[0], args[1], args[2], args[3]);
        assert_relative_eq!(g.flux, quad(args[0], args[1], args[2], args[3]), max_relative = 1e-14);
        for (i, partial) in g.as_array().iter().enumerate() {
            let mut hi = args;
            let mut lo = args;
            hi[i] += H;
            lo[i] -= H;
            let fd =
                (quad(hi[0], hi[1], hi[2], hi[3]) - quad(lo[0], lo[1], lo[2], lo[3])) / (2.0 * H);
            assert_relative_eq!(*partial, fd, max_relative = 1e-5, epsilon = 1e-8);
        }
    }
}

#[test]
fn test_f32_matches_f64() {
    for i in 0..30 {
        let d = i as f64 * 0.05;
        for &p in &[0.05, 0.2, 0.8] {
            let single = quad(0.4_f32, 0.3, p as f32, d as f32) as f64;
            let double = quad(0.4, 0.3, p as f32 as f64, d as f32 as f64);
            assert!((single - double).abs() < 1e-4, "p = {}, d = {}", p, d);
        }
    }
}

#[test]
fn test_vjp_equals_summed_gradients() {
    let (g1, g2, p) = ([0.4, 0.1, 0.3], [0.3, 0.2, 0.0], [0.1, 0.6, 1.2]);
    let samples = 5;
    let z: Vec<f64> = (0..g1.len() * samples).map(|i| (i % samples) as f64 * 0.45).collect();
    let bflux: Vec<f64> = (0..z.len()).map(|i| 1.0 + 0.1 * i as f64).collect();

    let cot = quad_rev(&g1, &g2, &p, &z, &bflux).unwrap();
    for n in 0..g1.len() {
        let mut bp = 0.0;
        for m in 0..samples {
            let i = n * samples + m;
            bp += bflux[i] * quad_grad(g1[n], g2[n], p[n], z[i]).d_p;
        }
        assert_relative_eq!(cot.bp[n], bp, max_relative = 1e-12);
    }
}

#[test]
fn test_batch_then_resample() {
    let grid: Vec<f64> = (0..11).map(|i| i as f64 * 0.2).collect();
    let n = grid.len();
    let flux = quad_batch::<f64>(&vec![0.4; n], &vec![0.3; n], &vec![0.1; n], &grid).unwrap();

    let (z, dz) = interp::<f64>(&[0.3, 1.7], &grid, &[flux.clone(), flux].concat(), true).unwrap();
    assert_relative_eq!(z[0], quad(0.4, 0.3, 0.1, 0.3), max_relative = 1e-3);
    assert_eq!(z[1], 1.0);
    assert_eq!(dz[1], 0.0);
}
