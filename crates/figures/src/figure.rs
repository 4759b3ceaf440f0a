//! Figure variants as a tagged union.
//!
//! Purpose
//! - One record per figure family (`Tri`, `Quad`) and one enum arm per kind, so
//!   validity and description are plain `match`es instead of virtual dispatch.
//! - Constructors take the same positional integers as the classic shape
//!   hierarchy and fill the derived fields (e.g. `c := a` for isosceles).
//!
//! Conventions
//! - Sides are `a, b, c[, d]`, angles `A, B, C[, D]` in whole degrees, stored as
//!   `Vector3<i32>` / `Vector4<i32>` in that order.
//! - Nothing is validated at construction time. Negative lengths or impossible
//!   angles are accepted and only show up later as an invalid verdict.

use nalgebra::{Vector3, Vector4};

/// Label of the generic figure used by the reference report.
pub const FIGURE_LABEL: &str = "Figure";

/// The ten figure kinds, in reference-report order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Figure,
    Triangle,
    RightTriangle,
    IsoscelesTriangle,
    EquilateralTriangle,
    Quadrangle,
    Rectangle,
    Square,
    Parallelogram,
    Rhombus,
}

impl Kind {
    pub const ALL: [Kind; 10] = [
        Kind::Figure,
        Kind::Triangle,
        Kind::RightTriangle,
        Kind::IsoscelesTriangle,
        Kind::EquilateralTriangle,
        Kind::Quadrangle,
        Kind::Rectangle,
        Kind::Square,
        Kind::Parallelogram,
        Kind::Rhombus,
    ];

    /// Human-readable label printed in descriptions.
    pub fn label(self) -> &'static str {
        match self {
            Kind::Figure => FIGURE_LABEL,
            Kind::Triangle => "Triangle",
            Kind::RightTriangle => "Right triangle",
            Kind::IsoscelesTriangle => "Isosceles triangle",
            Kind::EquilateralTriangle => "Equilateral triangle",
            Kind::Quadrangle => "Quadrangle",
            Kind::Rectangle => "Rectangle",
            Kind::Square => "Square",
            Kind::Parallelogram => "Parallelogram",
            Kind::Rhombus => "Rhombus",
        }
    }

    /// Declared side count; `None` for the generic figure, whose count is free.
    pub fn side_count(self) -> Option<u32> {
        match self {
            Kind::Figure => None,
            Kind::Triangle
            | Kind::RightTriangle
            | Kind::IsoscelesTriangle
            | Kind::EquilateralTriangle => Some(3),
            Kind::Quadrangle
            | Kind::Rectangle
            | Kind::Square
            | Kind::Parallelogram
            | Kind::Rhombus => Some(4),
        }
    }

    /// Stable snake_case identifier used in machine-readable output.
    pub fn id(self) -> &'static str {
        match self {
            Kind::Figure => "figure",
            Kind::Triangle => "triangle",
            Kind::RightTriangle => "right_triangle",
            Kind::IsoscelesTriangle => "isosceles_triangle",
            Kind::EquilateralTriangle => "equilateral_triangle",
            Kind::Quadrangle => "quadrangle",
            Kind::Rectangle => "rectangle",
            Kind::Square => "square",
            Kind::Parallelogram => "parallelogram",
            Kind::Rhombus => "rhombus",
        }
    }
}

/// Generic figure: free label and declared side count, no geometry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generic {
    pub label: String,
    pub side_count: u32,
}

/// Three sides `(a, b, c)` and three angles `(A, B, C)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tri {
    pub sides: Vector3<i32>,
    pub angles: Vector3<i32>,
}

impl Tri {
    #[inline]
    pub fn new(sides: Vector3<i32>, angles: Vector3<i32>) -> Self {
        Self { sides, angles }
    }

    /// `A + B + C`, widened so arbitrary inputs cannot overflow.
    #[inline]
    pub fn angle_sum(&self) -> i64 {
        self.angles.iter().map(|&x| i64::from(x)).sum()
    }
}

/// Four sides `(a, b, c, d)` and four angles `(A, B, C, D)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Quad {
    pub sides: Vector4<i32>,
    pub angles: Vector4<i32>,
}

impl Quad {
    #[inline]
    pub fn new(sides: Vector4<i32>, angles: Vector4<i32>) -> Self {
        Self { sides, angles }
    }

    /// `A + B + C + D`, widened so arbitrary inputs cannot overflow.
    #[inline]
    pub fn angle_sum(&self) -> i64 {
        self.angles.iter().map(|&x| i64::from(x)).sum()
    }
}

/// A figure of one of the ten kinds.
///
/// Invariants:
/// - Non-generic arms carry their kind implicitly; the side count is fixed by
///   the arm (3 for triangles, 4 for quadrangles).
/// - Values are immutable after construction; all queries are pure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Figure {
    Generic(Generic),
    Triangle(Tri),
    RightTriangle(Tri),
    IsoscelesTriangle(Tri),
    EquilateralTriangle(Tri),
    Quadrangle(Quad),
    Rectangle(Quad),
    Square(Quad),
    Parallelogram(Quad),
    Rhombus(Quad),
}

impl Figure {
    pub fn generic(label: impl Into<String>, side_count: u32) -> Self {
        Figure::Generic(Generic {
            label: label.into(),
            side_count,
        })
    }

    /// Triangle with sides `(a, b, c)` and angles `(A, B, C)`.
    #[allow(non_snake_case)]
    pub fn triangle(a: i32, b: i32, c: i32, A: i32, B: i32, C: i32) -> Self {
        Figure::Triangle(Tri::new(Vector3::new(a, b, c), Vector3::new(A, B, C)))
    }

    /// Right triangle; `C` is fixed to 90.
    #[allow(non_snake_case)]
    pub fn right_triangle(a: i32, b: i32, c: i32, A: i32, B: i32) -> Self {
        Figure::RightTriangle(Tri::new(Vector3::new(a, b, c), Vector3::new(A, B, 90)))
    }

    /// Isosceles triangle; `c := a` and `C := A`.
    #[allow(non_snake_case)]
    pub fn isosceles_triangle(a: i32, b: i32, A: i32, B: i32) -> Self {
        Figure::IsoscelesTriangle(Tri::new(Vector3::new(a, b, a), Vector3::new(A, B, A)))
    }

    /// Equilateral triangle; all sides `a`, all angles 60.
    pub fn equilateral_triangle(a: i32) -> Self {
        Figure::EquilateralTriangle(Tri::new(Vector3::new(a, a, a), Vector3::new(60, 60, 60)))
    }

    /// Quadrangle with sides `(a, b, c, d)` and angles `(A, B, C, D)`.
    #[allow(non_snake_case, clippy::too_many_arguments)]
    pub fn quadrangle(a: i32, b: i32, c: i32, d: i32, A: i32, B: i32, C: i32, D: i32) -> Self {
        Figure::Quadrangle(Quad::new(Vector4::new(a, b, c, d), Vector4::new(A, B, C, D)))
    }

    /// Rectangle; `c := a`, `d := b`, all angles 90.
    pub fn rectangle(a: i32, b: i32) -> Self {
        Figure::Rectangle(Quad::new(Vector4::new(a, b, a, b), Vector4::repeat(90)))
    }

    /// Square; all sides `a`, all angles 90.
    pub fn square(a: i32) -> Self {
        Figure::Square(Quad::new(Vector4::repeat(a), Vector4::repeat(90)))
    }

    /// Parallelogram; `c := a`, `d := b`, `C := A`, `D := B`.
    #[allow(non_snake_case)]
    pub fn parallelogram(a: i32, b: i32, A: i32, B: i32) -> Self {
        Figure::Parallelogram(Quad::new(Vector4::new(a, b, a, b), Vector4::new(A, B, A, B)))
    }

    /// Rhombus; all sides `a`, `C := A`, `D := B`.
    #[allow(non_snake_case)]
    pub fn rhombus(a: i32, A: i32, B: i32) -> Self {
        Figure::Rhombus(Quad::new(Vector4::repeat(a), Vector4::new(A, B, A, B)))
    }

    pub fn kind(&self) -> Kind {
        match self {
            Figure::Generic(_) => Kind::Figure,
            Figure::Triangle(_) => Kind::Triangle,
            Figure::RightTriangle(_) => Kind::RightTriangle,
            Figure::IsoscelesTriangle(_) => Kind::IsoscelesTriangle,
            Figure::EquilateralTriangle(_) => Kind::EquilateralTriangle,
            Figure::Quadrangle(_) => Kind::Quadrangle,
            Figure::Rectangle(_) => Kind::Rectangle,
            Figure::Square(_) => Kind::Square,
            Figure::Parallelogram(_) => Kind::Parallelogram,
            Figure::Rhombus(_) => Kind::Rhombus,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Figure::Generic(g) => &g.label,
            other => other.kind().label(),
        }
    }

    pub fn side_count(&self) -> u32 {
        match self {
            Figure::Generic(g) => g.side_count,
            Figure::Triangle(_)
            | Figure::RightTriangle(_)
            | Figure::IsoscelesTriangle(_)
            | Figure::EquilateralTriangle(_) => 3,
            Figure::Quadrangle(_)
            | Figure::Rectangle(_)
            | Figure::Square(_)
            | Figure::Parallelogram(_)
            | Figure::Rhombus(_) => 4,
        }
    }

    /// Triangle record, if this is one of the triangle kinds.
    pub fn as_tri(&self) -> Option<&Tri> {
        match self {
            Figure::Triangle(t)
            | Figure::RightTriangle(t)
            | Figure::IsoscelesTriangle(t)
            | Figure::EquilateralTriangle(t) => Some(t),
            _ => None,
        }
    }

    /// Quadrangle record, if this is one of the quadrangle kinds.
    pub fn as_quad(&self) -> Option<&Quad> {
        match self {
            Figure::Quadrangle(q)
            | Figure::Rectangle(q)
            | Figure::Square(q)
            | Figure::Parallelogram(q)
            | Figure::Rhombus(q) => Some(q),
            _ => None,
        }
    }
}
