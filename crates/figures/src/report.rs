//! Reference figure set and the plain-text validity report.

use std::io::{self, Write};

use crate::check::{checks, CheckCfg};
use crate::describe::describe;
use crate::figure::{Figure, FIGURE_LABEL};

pub const VALID: &str = "Valid";
pub const INVALID: &str = "Invalid";

/// One instance of each kind, in the fixed reference order.
pub fn reference_figures() -> Vec<Figure> {
    vec![
        Figure::generic(FIGURE_LABEL, 0),
        Figure::triangle(10, 20, 30, 50, 60, 70),
        Figure::right_triangle(10, 20, 30, 50, 90),
        Figure::isosceles_triangle(10, 20, 50, 60),
        Figure::equilateral_triangle(30),
        Figure::quadrangle(10, 20, 30, 40, 50, 60, 70, 80),
        Figure::rectangle(10, 20),
        Figure::square(20),
        Figure::parallelogram(20, 30, 30, 40),
        Figure::rhombus(30, 30, 40),
    ]
}

#[inline]
pub fn verdict_label(valid: bool) -> &'static str {
    if valid {
        VALID
    } else {
        INVALID
    }
}

/// Description, verdict line and a blank separator line.
pub fn render_block(fig: &Figure, cfg: CheckCfg) -> String {
    let c = checks(fig);
    let valid = c.valid(cfg);
    tracing::debug!(
        kind = fig.kind().id(),
        base = c.base,
        angle_sum = c.angle_sum,
        shape = c.shape,
        valid,
        "checked"
    );
    format!("{}{}\n\n", describe(fig), verdict_label(valid))
}

/// Write one block per figure to `out`.
pub fn write_report<W: Write>(out: &mut W, figs: &[Figure], cfg: CheckCfg) -> io::Result<()> {
    for fig in figs {
        out.write_all(render_block(fig, cfg).as_bytes())?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::BaseRule;
    use crate::figure::Kind;

    #[test]
    fn reference_set_covers_every_kind_once() {
        let kinds: Vec<Kind> = reference_figures().iter().map(|f| f.kind()).collect();
        assert_eq!(kinds, Kind::ALL.to_vec());
    }

    #[test]
    fn reference_report_default_rule() {
        let mut buf = Vec::new();
        write_report(&mut buf, &reference_figures(), CheckCfg::default()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let blocks: Vec<&str> = text.split_terminator("\n\n").collect();
        assert_eq!(blocks.len(), 10);
        // Only the degenerate generic figure passes the literal root rule.
        assert!(blocks[0].ends_with("\nValid"));
        for b in &blocks[1..] {
            assert!(b.ends_with("\nInvalid"), "{b}");
        }
        assert!(text.starts_with("Figure:\nSides count: 0\nValid\n\nTriangle:\n"));
        assert!(text.ends_with("Rhombus:\nSides count: 4\nSides: a=30 b=30 c=30 d=30\nAngles: A=30 B=40 C=30 D=40\nInvalid\n\n"));
    }

    #[test]
    fn exclude_rule_flips_consistent_figures() {
        let cfg = CheckCfg::with_base_rule(BaseRule::Exclude);
        let block = render_block(&Figure::square(20), cfg);
        assert!(block.ends_with("Valid\n\n") && !block.ends_with("Invalid\n\n"));
        let block = render_block(&Figure::rhombus(30, 30, 40), cfg);
        assert!(block.ends_with("Invalid\n\n"));
    }
}
