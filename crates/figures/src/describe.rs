//! Figure descriptions: a data record per figure plus one shared text formatter.
//!
//! Layout of the rendered text (generic figures stop after the second line):
//! ```text
//! Triangle:
//! Sides count: 3
//! Sides: a=10 b=20 c=30
//! Angles: A=50 B=60 C=70
//! ```

use std::fmt;

use crate::figure::Figure;

const SIDE_NAMES: [char; 4] = ['a', 'b', 'c', 'd'];
const ANGLE_NAMES: [char; 4] = ['A', 'B', 'C', 'D'];

/// One named integer field, e.g. `a=10`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Field {
    pub name: char,
    pub value: i32,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

/// Presentation-independent description of a figure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Description {
    pub label: String,
    pub side_count: u32,
    /// Empty for the generic figure.
    pub sides: Vec<Field>,
    /// Empty for the generic figure.
    pub angles: Vec<Field>,
}

impl Description {
    /// All geometric fields, sides first.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.sides.iter().chain(self.angles.iter())
    }
}

fn named<'a>(names: &[char], values: impl Iterator<Item = &'a i32>) -> Vec<Field> {
    names
        .iter()
        .zip(values)
        .map(|(&name, &value)| Field { name, value })
        .collect()
}

/// Map a figure to its description record.
pub fn describe(fig: &Figure) -> Description {
    let (sides, angles) = if let Some(t) = fig.as_tri() {
        (
            named(&SIDE_NAMES, t.sides.iter()),
            named(&ANGLE_NAMES, t.angles.iter()),
        )
    } else if let Some(q) = fig.as_quad() {
        (
            named(&SIDE_NAMES, q.sides.iter()),
            named(&ANGLE_NAMES, q.angles.iter()),
        )
    } else {
        (Vec::new(), Vec::new())
    };
    Description {
        label: fig.label().to_string(),
        side_count: fig.side_count(),
        sides,
        angles,
    }
}

fn write_fields(f: &mut fmt::Formatter<'_>, heading: &str, fields: &[Field]) -> fmt::Result {
    if fields.is_empty() {
        return Ok(());
    }
    write!(f, "{heading}:")?;
    for field in fields {
        write!(f, " {field}")?;
    }
    writeln!(f)
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.label)?;
        writeln!(f, "Sides count: {}", self.side_count)?;
        write_fields(f, "Sides", &self.sides)?;
        write_fields(f, "Angles", &self.angles)
    }
}

impl Figure {
    /// Rendered multi-line description (ends with a newline).
    pub fn describe(&self) -> String {
        describe(self).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figure::Kind;
    use proptest::prelude::*;

    fn count_token(text: &str, token: &str) -> usize {
        text.split_whitespace().filter(|w| *w == token).count()
    }

    #[test]
    fn triangle_text_layout() {
        let text = Figure::triangle(10, 20, 30, 50, 60, 70).describe();
        assert_eq!(
            text,
            "Triangle:\nSides count: 3\nSides: a=10 b=20 c=30\nAngles: A=50 B=60 C=70\n"
        );
    }

    #[test]
    fn generic_text_has_no_geometry() {
        let text = Figure::generic("Figure", 0).describe();
        assert_eq!(text, "Figure:\nSides count: 0\n");
        assert!(describe(&Figure::generic("Figure", 0)).fields().next().is_none());
    }

    #[test]
    fn quadrangle_record_names_four_of_each() {
        let d = describe(&Figure::rhombus(30, 30, 40));
        assert_eq!(d.label, Kind::Rhombus.label());
        assert_eq!(d.side_count, 4);
        let names: String = d.fields().map(|f| f.name).collect();
        assert_eq!(names, "abcdABCD");
        let values: Vec<i32> = d.angles.iter().map(|f| f.value).collect();
        assert_eq!(values, vec![30, 40, 30, 40]);
    }

    #[test]
    fn every_field_appears_exactly_once() {
        let figs = [
            Figure::right_triangle(10, 20, 30, 50, 90),
            Figure::isosceles_triangle(10, 20, 50, 60),
            Figure::square(20),
            Figure::parallelogram(20, 30, 30, 40),
        ];
        for fig in &figs {
            let d = describe(fig);
            let text = d.to_string();
            assert!(text.starts_with(&format!("{}:\n", fig.label())));
            for field in d.fields() {
                assert_eq!(count_token(&text, &field.to_string()), 1, "{field} in {text}");
            }
        }
    }

    proptest! {
        #[test]
        fn describe_is_stable(a in any::<i32>(), b in any::<i32>(), x in any::<i32>(), y in any::<i32>()) {
            let f = Figure::parallelogram(a, b, x, y);
            prop_assert_eq!(f.describe(), f.describe());
            let t = Figure::isosceles_triangle(a, b, x, y);
            prop_assert_eq!(t.describe(), t.describe());
        }

        #[test]
        fn describe_lists_each_quadrangle_field_once(
            s in prop::array::uniform4(any::<i32>()),
            g in prop::array::uniform4(any::<i32>()),
        ) {
            let f = Figure::quadrangle(s[0], s[1], s[2], s[3], g[0], g[1], g[2], g[3]);
            let d = describe(&f);
            let text = d.to_string();
            prop_assert_eq!(d.fields().count(), 8);
            for field in d.fields() {
                prop_assert_eq!(count_token(&text, &field.to_string()), 1);
            }
        }
    }
}
