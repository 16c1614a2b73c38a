//! Check command implementation
//!
//! Evaluates both elliptic integral backends on a modulus grid and reports
//! the largest relative disagreement. K and E are computed independently by
//! the two backends; Π shares one recurrence.

use tracing::{info, warn};
use transit_core::math::elliptic::{
    try_ellint_1, try_ellint_2, try_ellint_3, Bulirsch, EllipticBackend,
};

use crate::{CliError, Result};

/// Characteristics sampled for the third kind.
const CHARACTERISTICS: [f64; 4] = [-5.0, -1.0, -0.3, 0.5];

/// Accepted disagreement for K and E (Hastings approximation accuracy).
const TOLERANCE_FIRST_SECOND: f64 = 5e-8;
/// Accepted disagreement for Π. Both backends share the recurrence, so this
/// catches a broken characteristic sign rather than an inaccurate Π.
const TOLERANCE_THIRD: f64 = 1e-10;

/// Largest relative differences between the backends
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BackendDiscrepancy {
    /// K(k)
    pub first_kind: f64,
    /// E(k)
    pub second_kind: f64,
    /// Π(n, k)
    pub third_kind: f64,
}

impl BackendDiscrepancy {
    /// Whether every discrepancy is within tolerance
    pub fn within_tolerance(&self) -> bool {
        self.first_kind <= TOLERANCE_FIRST_SECOND
            && self.second_kind <= TOLERANCE_FIRST_SECOND
            && self.third_kind <= TOLERANCE_THIRD
    }
}

fn relative(a: f64, b: f64) -> f64 {
    ((a - b) / b).abs()
}

/// Compare AGM against Bulirsch on `points` moduli in `[0, 0.99]`.
pub fn compare_backends(points: usize) -> Result<BackendDiscrepancy> {
    if points < 2 {
        return Err(CliError::InvalidArgument(format!(
            "need at least 2 check points, got {}",
            points
        )));
    }

    let mut worst = BackendDiscrepancy::default();
    for i in 0..points {
        let k = 0.99 * i as f64 / (points - 1) as f64;
        let first = relative(try_ellint_1(k)?, Bulirsch::first_kind(k));
        let second = relative(try_ellint_2(k)?, Bulirsch::second_kind(k));
        worst.first_kind = worst.first_kind.max(first);
        worst.second_kind = worst.second_kind.max(second);
        for n in CHARACTERISTICS {
            let third = relative(try_ellint_3(n, k)?, Bulirsch::third_kind(n, k));
            worst.third_kind = worst.third_kind.max(third);
        }
    }
    Ok(worst)
}

/// Run the check command
pub fn run(points: usize) -> Result<()> {
    info!("Checking elliptic integral backends on {} moduli...", points);

    let worst = compare_backends(points)?;
    println!("max relative difference K   {:.3e}", worst.first_kind);
    println!("max relative difference E   {:.3e}", worst.second_kind);
    println!("max relative difference Pi  {:.3e}", worst.third_kind);

    if !worst.within_tolerance() {
        warn!(?worst, "Backends disagree");
        return Err(CliError::CheckFailed(format!(
            "K {:.3e}, E {:.3e}, Pi {:.3e}",
            worst.first_kind, worst.second_kind, worst.third_kind
        )));
    }

    info!("Backends agree");
    Ok(())
}
