/// Cube model: six labeled faces positioned with fixed transforms
use nalgebra::{Matrix4, Point3, Vector3};

use crate::error::CubeError;
use crate::transform::{TransformChain, TransformClause, TransformTarget};

/// Number of faces on a cube
pub const FACE_COUNT: usize = 6;

/// Distance from the cube centre to each face, in pixels
pub const HALF_EDGE: f64 = 150.0;

/// Canonical face labels, in placement order
pub const DEFAULT_LABELS: [&str; FACE_COUNT] = ["1", "2", "3", "4", "5", "6"];

/// Positional transform for the face at `index` on a cube of half-edge
/// `half_edge`. Returns `None` past the sixth face.
pub fn face_transform(index: usize, half_edge: f64) -> Option<TransformChain> {
    use TransformClause::*;

    let clauses: &[TransformClause] = match index {
        0 => &[RotateX(90.0), TranslateZ(half_edge)],
        1 => &[RotateX(-90.0), TranslateZ(half_edge)],
        2 => &[RotateY(90.0), TranslateZ(half_edge)],
        3 => &[RotateY(-90.0), TranslateZ(half_edge)],
        4 => &[TranslateZ(half_edge)],
        5 => &[TranslateZ(-half_edge)],
        _ => return None,
    };
    Some(TransformChain::from_clauses(clauses.iter().copied()))
}

fn place_faces<S: AsRef<str>>(labels: &[S], half_edge: f64) -> Vec<Face> {
    labels
        .iter()
        .enumerate()
        .filter_map(|(index, label)| {
            face_transform(index, half_edge).map(|transform| Face {
                label: label.as_ref().to_string(),
                transform,
            })
        })
        .collect()
}

/// One side of the cube. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    label: String,
    transform: TransformChain,
}

impl Face {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn transform(&self) -> &TransformChain {
        &self.transform
    }

    /// Face centre in cube space
    pub fn center(&self) -> Point3<f64> {
        self.transform.to_matrix().transform_point(&Point3::origin())
    }

    /// Outward normal in cube space.
    ///
    /// The back face is only translated, so its local +Z points into the
    /// cube; the normal is taken from the centre instead of the local axis.
    pub fn normal(&self) -> Vector3<f64> {
        self.center().coords.normalize()
    }

    /// The four corners of the square panel (side `2 * half_edge`) in cube
    /// space, wound consistently around the face.
    pub fn corners(&self, half_edge: f64) -> [Point3<f64>; 4] {
        let m = self.transform.to_matrix();
        [
            (-half_edge, -half_edge),
            (half_edge, -half_edge),
            (half_edge, half_edge),
            (-half_edge, half_edge),
        ]
        .map(|(x, y)| m.transform_point(&Point3::new(x, y, 0.0)))
    }
}

/// A cube: six faces plus the cube's own accumulated transform.
///
/// The cube transform starts empty and only ever grows; face transforms are
/// never folded into it.
#[derive(Debug, Clone, PartialEq)]
pub struct CubeModel {
    half_edge: f64,
    faces: Vec<Face>,
    transform: TransformChain,
}

impl CubeModel {
    /// Build a cube from exactly six labels
    pub fn build<S: AsRef<str>>(labels: &[S], half_edge: f64) -> Result<Self, CubeError> {
        if labels.len() != FACE_COUNT {
            return Err(CubeError::FaceCount {
                expected: FACE_COUNT,
                found: labels.len(),
            });
        }

        let faces = place_faces(labels, half_edge);

        log::debug!("built cube with {} faces, half edge {}", faces.len(), half_edge);

        Ok(Self {
            half_edge,
            faces,
            transform: TransformChain::new(),
        })
    }

    pub fn half_edge(&self) -> f64 {
        self.half_edge
    }

    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// The cube's accumulated rotation
    pub fn transform(&self) -> &TransformChain {
        &self.transform
    }

    /// World matrix of a face: cube transform followed by the face's own
    pub fn face_matrix(&self, face: &Face) -> Matrix4<f64> {
        self.transform.to_matrix() * face.transform.to_matrix()
    }
}

impl Default for CubeModel {
    fn default() -> Self {
        Self {
            half_edge: HALF_EDGE,
            faces: place_faces(&DEFAULT_LABELS, HALF_EDGE),
            transform: TransformChain::new(),
        }
    }
}

impl TransformTarget for CubeModel {
    fn append_clauses(&mut self, clauses: &[TransformClause]) {
        self.transform.append_clauses(clauses);
    }

    fn transform_text(&self) -> String {
        self.transform.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_transform_table() {
        let expected = [
            "rotateX(90deg) translateZ(150px)",
            "rotateX(-90deg) translateZ(150px)",
            "rotateY(90deg) translateZ(150px)",
            "rotateY(-90deg) translateZ(150px)",
            "translateZ(150px)",
            "translateZ(-150px)",
        ];
        for (index, text) in expected.iter().enumerate() {
            let chain = face_transform(index, HALF_EDGE).unwrap();
            assert_eq!(&chain.to_string(), text);
        }
        assert!(face_transform(6, HALF_EDGE).is_none());
    }

    #[test]
    fn test_build_rejects_wrong_face_count() {
        let err = CubeModel::build(&["1", "2", "3"], HALF_EDGE).unwrap_err();
        assert!(matches!(err, CubeError::FaceCount { expected: 6, found: 3 }));
    }

    #[test]
    fn test_default_matches_build() {
        let built = CubeModel::build(&DEFAULT_LABELS, HALF_EDGE).unwrap();
        assert_eq!(built, CubeModel::default());
    }

    #[test]
    fn test_face_corners_lie_on_face_plane() {
        let cube = CubeModel::default();
        for face in cube.faces() {
            let normal = face.normal();
            for corner in face.corners(cube.half_edge()) {
                let offset = corner.coords.dot(&normal);
                assert!((offset - HALF_EDGE).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_cube_transform_starts_empty() {
        let cube = CubeModel::default();
        assert!(cube.transform().is_empty());
        assert_eq!(cube.transform_text(), "");
    }
}
