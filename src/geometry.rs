//! Provides the flattened geometry type and error types shared by the parser.
//!
//! The parser converts indexed Wavefront-style geometry into an "unwelded"
//! vertex stream: one (position, texture coordinate, normal) entry per
//! face-vertex occurrence, with no deduplication. The three output arrays
//! are positionally aligned and sized for direct upload into vertex buffers.
//!
//! # Examples
//! ```
//! use unweld::geometry::ParsedGeometry;
//!
//! let geometry = ParsedGeometry::default();
//! assert_eq!(geometry.face_vertex_count, 0);
//! assert!(geometry.positions.is_empty());
//! ```

use serde::Serialize;

/// Represents flattened, rendering-ready geometry.
///
/// For a face-vertex count of `n`, `positions` holds `3 * n` floats (x, y, z
/// per entry), `tex_coords` holds `2 * n` floats (u, v per entry), and
/// `normals` holds `3 * n` floats. Entry `i` of all three arrays describes
/// the same vertex occurrence. These length relations hold for every value
/// the parser produces, including empty output.
///
/// # Examples
/// ```
/// use unweld::obj;
///
/// let geometry = obj::parse_str("v 0 0 0\nv 1 0 0\nv 0 1 0\nvt 0 0\nvn 0 0 1\nf 1/1/1 2/1/1 3/1/1\n").unwrap();
/// assert_eq!(geometry.face_vertex_count, 3);
/// assert_eq!(geometry.positions.len(), 9);
/// assert_eq!(geometry.tex_coords.len(), 6);
/// assert_eq!(geometry.normals.len(), 9);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct ParsedGeometry {
    /// Vertex positions, three floats per face-vertex occurrence.
    pub positions: Vec<f32>,
    /// Texture coordinates, two floats per face-vertex occurrence. The v
    /// coordinate is already flipped for a top-left image-space origin.
    pub tex_coords: Vec<f32>,
    /// Vertex normals, three floats per face-vertex occurrence.
    pub normals: Vec<f32>,
    /// The number of face-vertex occurrences in the stream.
    pub face_vertex_count: usize,
}

impl ParsedGeometry {
    /// Returns the number of triangles in the stream.
    ///
    /// # Examples
    /// ```
    /// use unweld::obj;
    ///
    /// let geometry = obj::parse_str("").unwrap();
    /// assert_eq!(geometry.triangle_count(), 0);
    /// ```
    pub fn triangle_count(&self) -> usize {
        self.face_vertex_count / 3
    }

    /// Returns `true` if the stream contains no face-vertex occurrences.
    ///
    /// # Examples
    /// ```
    /// use unweld::obj;
    ///
    /// let geometry = obj::parse_str("# only a comment\n").unwrap();
    /// assert!(geometry.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.face_vertex_count == 0
    }
}

/// The result type for geometry parsing.
///
/// # Examples
/// ```
/// use unweld::geometry::{GeometryError, GeometryResult};
///
/// let result: GeometryResult = Err(GeometryError::MalformedGeometry {
///     line: 1,
///     reason: "expected 3 operands".to_string(),
/// });
/// assert!(result.is_err());
/// ```
pub type GeometryResult = Result<ParsedGeometry, GeometryError>;

/// Errors that can occur while acquiring or parsing geometry.
///
/// # Examples
/// ```
/// use unweld::geometry::GeometryError;
///
/// let err = GeometryError::MalformedGeometry {
///     line: 4,
///     reason: "vertex index 9 out of range".to_string(),
/// };
/// assert_eq!(format!("{}", err), "Malformed geometry at line 4: vertex index 9 out of range");
/// ```
#[derive(Debug)]
pub enum GeometryError {
    /// Represents an IO error acquiring the input text.
    IoError(std::io::Error),
    /// Represents invalid directive content, identified by its 1-based line.
    MalformedGeometry {
        /// The 1-based source line of the offending directive.
        line: usize,
        /// A human-readable description of what was wrong.
        reason: String,
    },
}

impl std::fmt::Display for GeometryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeometryError::IoError(e) => write!(f, "IO error: {}", e),
            GeometryError::MalformedGeometry { line, reason } => {
                write!(f, "Malformed geometry at line {}: {}", line, reason)
            }
        }
    }
}

impl std::error::Error for GeometryError {}

impl From<std::io::Error> for GeometryError {
    fn from(e: std::io::Error) -> Self {
        GeometryError::IoError(e)
    }
}
