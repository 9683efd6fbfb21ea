/// CSS-style 3D transform clauses and append-only transform chains
use nalgebra::{Matrix4, Vector3};
use std::fmt;

/// A single transform function, in CSS units (degrees and pixels)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransformClause {
    RotateX(f64),
    RotateY(f64),
    TranslateZ(f64),
}

impl TransformClause {
    /// Homogeneous matrix for this clause, in CSS coordinate space
    pub fn matrix(&self) -> Matrix4<f64> {
        match *self {
            TransformClause::RotateX(deg) => {
                Matrix4::new_rotation(Vector3::new(deg.to_radians(), 0.0, 0.0))
            }
            TransformClause::RotateY(deg) => {
                Matrix4::new_rotation(Vector3::new(0.0, deg.to_radians(), 0.0))
            }
            TransformClause::TranslateZ(z) => Matrix4::new_translation(&Vector3::new(0.0, 0.0, z)),
        }
    }
}

impl fmt::Display for TransformClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            TransformClause::RotateX(deg) => write!(f, "rotateX({}deg)", CssNumber(deg)),
            TransformClause::RotateY(deg) => write!(f, "rotateY({}deg)", CssNumber(deg)),
            TransformClause::TranslateZ(z) => write!(f, "translateZ({}px)", CssNumber(z)),
        }
    }
}

/// Shortest round-trip rendering of a number; negative zero prints as `0`
struct CssNumber(f64);

impl fmt::Display for CssNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0.0 {
            write!(f, "0")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Ordered list of transform clauses, applied left to right.
///
/// Chains only grow: new clauses are appended after everything already
/// present, so the evaluated result depends on the full history of appends.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformChain {
    clauses: Vec<TransformClause>,
}

impl TransformChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_clauses(clauses: impl IntoIterator<Item = TransformClause>) -> Self {
        Self {
            clauses: clauses.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Evaluate the chain the way a CSS `transform` list is evaluated:
    /// the leftmost clause is the outermost matrix.
    pub fn to_matrix(&self) -> Matrix4<f64> {
        self.clauses
            .iter()
            .fold(Matrix4::identity(), |acc, clause| acc * clause.matrix())
    }
}

impl fmt::Display for TransformChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, clause) in self.clauses.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", clause)?;
        }
        Ok(())
    }
}

/// Anything that carries a growable transform: an in-memory chain, a cube
/// model, or a live page element.
pub trait TransformTarget {
    /// Append clauses after the existing transform
    fn append_clauses(&mut self, clauses: &[TransformClause]);

    /// Current transform text
    fn transform_text(&self) -> String;
}

impl TransformTarget for TransformChain {
    fn append_clauses(&mut self, clauses: &[TransformClause]) {
        self.clauses.extend_from_slice(clauses);
    }

    fn transform_text(&self) -> String {
        self.to_string()
    }
}

/// Append `clauses` to an existing transform string, separating each clause
/// with a single space.
pub fn append_to_text(existing: &str, clauses: &[TransformClause]) -> String {
    let mut text = existing.trim().to_string();
    for clause in clauses {
        if !text.is_empty() {
            text.push(' ');
        }
        text.push_str(&clause.to_string());
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    #[test]
    fn test_clause_display() {
        assert_eq!(TransformClause::RotateX(90.0).to_string(), "rotateX(90deg)");
        assert_eq!(TransformClause::RotateY(-90.0).to_string(), "rotateY(-90deg)");
        assert_eq!(TransformClause::TranslateZ(150.0).to_string(), "translateZ(150px)");
        assert_eq!(TransformClause::RotateX(-0.0).to_string(), "rotateX(0deg)");
        assert_eq!(TransformClause::RotateY(3.0 * 0.2).to_string(), "rotateY(0.6000000000000001deg)");
    }

    #[test]
    fn test_chain_display() {
        let chain = TransformChain::from_clauses([
            TransformClause::RotateX(90.0),
            TransformClause::TranslateZ(150.0),
        ]);
        assert_eq!(chain.to_string(), "rotateX(90deg) translateZ(150px)");
        assert_eq!(TransformChain::new().to_string(), "");
    }

    #[test]
    fn test_empty_chain_is_identity() {
        let chain = TransformChain::new();
        assert!((chain.to_matrix() - Matrix4::identity()).norm() < 1e-12);
    }

    #[test]
    fn test_chain_applies_leftmost_last() {
        // rotateY(90deg) translateZ(10px): translate first, then rotate
        let chain = TransformChain::from_clauses([
            TransformClause::RotateY(90.0),
            TransformClause::TranslateZ(10.0),
        ]);
        let p = chain.to_matrix().transform_point(&Point3::origin());
        assert!((p - Point3::new(10.0, 0.0, 0.0)).norm() < 1e-9);
    }

    #[test]
    fn test_append_to_text() {
        let text = append_to_text("", &[TransformClause::RotateX(1.0), TransformClause::RotateY(2.0)]);
        assert_eq!(text, "rotateX(1deg) rotateY(2deg)");

        let text = append_to_text(&text, &[TransformClause::RotateX(0.0)]);
        assert_eq!(text, "rotateX(1deg) rotateY(2deg) rotateX(0deg)");
    }
}
