//! Figure taxonomy and consistency checks.
//!
//! A figure is one of ten kinds (generic figure, four triangle kinds, five
//! quadrangle kinds) holding the integer sides and angles it was built with.
//! The crate answers two questions about it:
//! - `describe`: a label, the declared side count and every side and angle.
//! - `is_valid`: whether the stated values are consistent with the kind.
//!
//! Rule set
//! - The generic figure is valid iff it declares zero sides.
//! - Every other kind ANDs that root rule with its family angle sum and its own
//!   equalities. By default this makes every triangle and quadrangle invalid;
//!   see `check::BaseRule` for the alternative composition.
//!
//! Non-goals: no coordinates, areas, perimeters or triangle inequality.

pub mod check;
pub mod describe;
pub mod figure;
pub mod report;
pub mod sample;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::check::{checks, is_valid, is_valid_with, BaseRule, CheckCfg, Checks};
    pub use crate::describe::{describe, Description, Field};
    pub use crate::figure::{Figure, Kind, Quad, Tri};
    pub use crate::report::{reference_figures, render_block, write_report};
    pub use crate::sample::{FigureSampler, ReplayToken, SampleCfg, SampleError};
}
