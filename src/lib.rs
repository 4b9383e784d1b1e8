//! Provides a Wavefront OBJ geometry flattener for rendering pipelines.
//!
//! This crate parses line-oriented OBJ geometry text (vertex positions,
//! texture coordinates, vertex normals, and triangular faces referencing
//! them by 1-based index) into three flat float arrays with one entry per
//! face-vertex occurrence. The output is an unindexed vertex stream sized
//! for direct upload into GPU vertex buffers; texture coordinates come out
//! pre-flipped for a top-left image-space origin.
//!
//! Rendering, GPU upload, and asset packaging are the caller's business;
//! this crate only turns text into aligned arrays.
//!
//! # Examples
//! ```
//! use unweld::obj;
//!
//! let text = "\
//! v 0 0 0
//! v 1 0 0
//! v 0 1 0
//! vt 0 0
//! vt 1 0
//! vt 0 1
//! vn 0 0 1
//! f 1/1/1 2/2/1 3/3/1
//! ";
//!
//! let geometry = obj::parse_str(text).unwrap();
//! assert_eq!(geometry.face_vertex_count, 3);
//! assert_eq!(geometry.triangle_count(), 1);
//! ```

pub mod geometry;
pub mod obj;
pub mod store;

pub use geometry::{GeometryError, GeometryResult, ParsedGeometry};
