//! Validity rules for every figure kind.
//!
//! Purpose
//! - A figure's verdict is the conjunction of three sub-checks: the root rule
//!   (`side_count == 0`), the angle-sum check (180 or 360) and the kind's shape
//!   equalities. `Checks` keeps them separate so callers can see which one failed.
//!
//! Delegation
//! - The generic figure is judged by the root rule alone.
//! - Every other kind composes the root rule through `BaseRule` and then ANDs
//!   the angle sum of its family and its own equalities. Specialised kinds
//!   therefore imply their family check (a valid square is a valid quadrangle).
//! - With the default `BaseRule::Require` no triangle or quadrangle is ever
//!   valid, since their side counts are 3 and 4. This is observable behaviour.

mod cfg;

pub use cfg::{BaseRule, CheckCfg};

use crate::figure::{Figure, Kind, Quad, Tri};

/// Angle sum required of every triangle kind.
pub const TRIANGLE_ANGLE_SUM: i64 = 180;
/// Angle sum required of every quadrangle kind.
pub const QUADRANGLE_ANGLE_SUM: i64 = 360;

/// Sub-check breakdown for one figure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Checks {
    pub kind: Kind,
    /// Root rule: `side_count == 0`.
    pub base: bool,
    /// Family angle sum; vacuously true for the generic figure.
    pub angle_sum: bool,
    /// Kind-specific side/angle equalities; vacuously true where none apply.
    pub shape: bool,
}

impl Checks {
    /// Overall verdict under `cfg`.
    pub fn valid(&self, cfg: CheckCfg) -> bool {
        match self.kind {
            Kind::Figure => self.base,
            _ => cfg.base_rule.admits(self.base) && self.angle_sum && self.shape,
        }
    }
}

/// Root rule shared by all kinds.
#[inline]
pub fn base_holds(side_count: u32) -> bool {
    side_count == 0
}

/// Evaluate all sub-checks of `fig`.
pub fn checks(fig: &Figure) -> Checks {
    let kind = fig.kind();
    let base = base_holds(fig.side_count());
    let (angle_sum, shape) = match fig {
        Figure::Generic(_) => (true, true),
        Figure::Triangle(t) => (tri_sum(t), true),
        Figure::RightTriangle(t) => (tri_sum(t), t.angles.z == 90),
        Figure::IsoscelesTriangle(t) => (
            tri_sum(t),
            t.sides.x == t.sides.z && t.angles.x == t.angles.z,
        ),
        Figure::EquilateralTriangle(t) => (
            tri_sum(t),
            all_equal(t.sides.iter()) && t.angles.iter().all(|&x| x == 60),
        ),
        Figure::Quadrangle(q) => (quad_sum(q), true),
        Figure::Rectangle(q) => (quad_sum(q), opposite_sides_equal(q) && all_right(q)),
        Figure::Square(q) => (quad_sum(q), all_equal(q.sides.iter()) && all_right(q)),
        Figure::Parallelogram(q) => (
            quad_sum(q),
            opposite_sides_equal(q) && opposite_angles_equal(q),
        ),
        Figure::Rhombus(q) => (
            quad_sum(q),
            all_equal(q.sides.iter()) && opposite_angles_equal(q),
        ),
    };
    Checks {
        kind,
        base,
        angle_sum,
        shape,
    }
}

/// Validity under the default (literal) rule set.
pub fn is_valid(fig: &Figure) -> bool {
    is_valid_with(fig, CheckCfg::default())
}

/// Validity under an explicit configuration.
pub fn is_valid_with(fig: &Figure, cfg: CheckCfg) -> bool {
    checks(fig).valid(cfg)
}

impl Figure {
    /// Shorthand for [`is_valid`].
    pub fn is_valid(&self) -> bool {
        is_valid(self)
    }
}

#[inline]
fn tri_sum(t: &Tri) -> bool {
    t.angle_sum() == TRIANGLE_ANGLE_SUM
}

#[inline]
fn quad_sum(q: &Quad) -> bool {
    q.angle_sum() == QUADRANGLE_ANGLE_SUM
}

fn all_equal<'a>(mut it: impl Iterator<Item = &'a i32>) -> bool {
    match it.next() {
        Some(first) => it.all(|x| x == first),
        None => true,
    }
}

// a == c && b == d
#[inline]
fn opposite_sides_equal(q: &Quad) -> bool {
    q.sides.x == q.sides.z && q.sides.y == q.sides.w
}

// A == C && B == D
#[inline]
fn opposite_angles_equal(q: &Quad) -> bool {
    q.angles.x == q.angles.z && q.angles.y == q.angles.w
}

#[inline]
fn all_right(q: &Quad) -> bool {
    q.angles.iter().all(|&x| x == 90)
}
