//! Geometric configurations of the occulter and the stellar disk.

use std::fmt;

/// Mutually exclusive occultation geometries.
///
/// With `p` the radius ratio and `d` the centre separation (both in stellar
/// radii), the classification is evaluated in declaration order and the
/// first matching configuration wins.
///
/// # Examples
/// ```
/// use transit_models::limb_darkening::{occultation, Regime};
///
/// assert_eq!(occultation(0.1_f64, 2.0).regime, Regime::Unocculted);
/// assert_eq!(occultation(0.1_f64, 0.5).regime, Regime::Transit);
/// assert_eq!(occultation(0.1_f64, 0.5).regime.to_string(), "transit");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Regime {
    /// `d >= 1 + p`: the disks do not overlap.
    Unocculted,
    /// `p >= 1` and `d <= p - 1`: the star is completely covered.
    FullyOcculted,
    /// `d == p < 1/2`: the occulter's edge passes through the stellar centre.
    EdgeAtCenterInner,
    /// `d == p > 1/2`: as above, with the occulter also crossing the limb.
    EdgeAtCenterOuter,
    /// `d == p == 1/2`.
    EdgeAtCenterHalf,
    /// Partial overlap with the occulter crossing the stellar limb.
    LimbCrossing,
    /// `p <= 1` and `d <= 1 - p`: the occulter lies inside the disk.
    Transit,
    /// Transit with the occulter's edge touching the limb, `d = 1 - p`.
    TransitTouchingLimb,
    /// None of the above; only reachable with non-finite inputs.
    Unclassified,
}

impl Regime {
    /// Short lowercase identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Regime::Unocculted => "unocculted",
            Regime::FullyOcculted => "fully_occulted",
            Regime::EdgeAtCenterInner => "edge_at_center_inner",
            Regime::EdgeAtCenterOuter => "edge_at_center_outer",
            Regime::EdgeAtCenterHalf => "edge_at_center_half",
            Regime::LimbCrossing => "limb_crossing",
            Regime::Transit => "transit",
            Regime::TransitTouchingLimb => "transit_touching_limb",
            Regime::Unclassified => "unclassified",
        }
    }

    /// Whether any part of the stellar disk is covered.
    pub fn is_occulted(&self) -> bool {
        !matches!(self, Regime::Unocculted | Regime::Unclassified)
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
