//! Provides the Wavefront OBJ geometry parser.
//!
//! The parser runs in two phases. The accumulation phase reads the input
//! line by line, collecting raw attribute pools (`v`, `vt`, `vn`) and the
//! 1-based index triples declared by `f` lines. The resolution phase then
//! walks the collected references in order and emits the flattened vertex
//! stream. Lines that are blank, comments, or unrecognized directives are
//! ignored without diagnostic; malformed directive content and out-of-range
//! indices abort the parse with an error naming the offending line.

use std::io::Read;
use std::path::Path;
use std::str::SplitWhitespace;

use crate::geometry::{GeometryError, GeometryResult, ParsedGeometry};
use crate::store::AssetStore;

/// One face operand: three 1-based pool indices plus the line it came from.
struct FaceVertexRef {
    position: usize,
    tex_coord: usize,
    normal: usize,
    line: usize,
}

/// Raw attribute pools in declaration order. Index N (1-based) addresses the
/// Nth triple or pair appended.
#[derive(Default)]
struct RawPools {
    positions: Vec<f32>,
    tex_coords: Vec<f32>,
    normals: Vec<f32>,
}

/// Checks whether the data plausibly contains OBJ geometry.
///
/// This is a quick content sniff over the leading sample of the input (both
/// a `v` and an `f` line must appear), not a full parse.
///
/// # Examples
/// ```
/// use unweld::obj;
///
/// assert!(obj::looks_like_obj(b"v 0 0 0\nf 1/1/1 1/1/1 1/1/1\n"));
/// assert!(!obj::looks_like_obj(b"{\"elements\": []}"));
/// ```
pub fn looks_like_obj(data: &[u8]) -> bool {
    let sample = String::from_utf8_lossy(&data[..data.len().min(4000)]);

    let mut has_vertex = false;
    let mut has_face = false;
    for line in sample.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("v ") {
            has_vertex = true;
        }
        if trimmed.starts_with("f ") {
            has_face = true;
        }
        if has_vertex && has_face {
            return true;
        }
    }

    false
}

/// Parses OBJ text into a flattened vertex stream.
///
/// Each `f` line contributes exactly three face-vertex occurrences, each of
/// the form `p/t/n`. Texture coordinates are emitted as `(u, 1 - v)` because
/// the image space used downstream has a top-left origin while the format's
/// is bottom-left.
///
/// # Errors
/// Returns [`GeometryError::MalformedGeometry`] for non-numeric operands,
/// wrong operand counts, indices that are zero or negative, or indices past
/// the end of the corresponding pool.
///
/// # Examples
/// ```
/// use unweld::obj;
///
/// let geometry = obj::parse_str("v 1 2 3\nvt 0.25 0.75\nvn 0 0 1\nf 1/1/1 1/1/1 1/1/1\n").unwrap();
/// assert_eq!(geometry.positions, vec![1.0, 2.0, 3.0, 1.0, 2.0, 3.0, 1.0, 2.0, 3.0]);
/// assert_eq!(geometry.tex_coords, vec![0.25, 0.25, 0.25, 0.25, 0.25, 0.25]);
/// assert_eq!(geometry.normals, vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0]);
/// ```
pub fn parse_str(text: &str) -> GeometryResult {
    let mut pools = RawPools::default();
    let mut refs: Vec<FaceVertexRef> = Vec::new();

    for (index, raw_line) in text.lines().enumerate() {
        let line = index + 1;
        let mut tokens = raw_line.split_whitespace();

        let Some(keyword) = tokens.next() else {
            continue; // blank line
        };

        match keyword {
            "v" => append_floats(&mut pools.positions, tokens, 3, line)?,
            "vt" => append_floats(&mut pools.tex_coords, tokens, 2, line)?,
            "vn" => append_floats(&mut pools.normals, tokens, 3, line)?,
            "f" => collect_face(&mut refs, tokens, line)?,
            // Comments and unrecognized directives are ignored.
            _ => {}
        }
    }

    resolve(&pools, &refs)
}

/// Parses OBJ text from a reader, consuming it to exhaustion.
///
/// The reader is dropped (and its underlying handle closed) on every exit
/// path. A read failure surfaces as [`GeometryError::IoError`] and aborts
/// the parse; no partial output is produced.
///
/// # Errors
/// Returns an error if reading fails or the content is malformed.
///
/// # Examples
/// ```
/// use std::io::Cursor;
///
/// use unweld::obj;
///
/// let geometry = obj::parse_reader(Cursor::new(b"# empty model\n")).unwrap();
/// assert!(geometry.is_empty());
/// ```
pub fn parse_reader(mut reader: impl Read) -> GeometryResult {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_str(&text)
}

/// Parses an OBJ file from the filesystem.
///
/// # Errors
/// Returns an error if the file cannot be read or the content is malformed.
///
/// # Examples
/// ```
/// use std::path::Path;
///
/// use unweld::obj;
///
/// let result = obj::parse_path(Path::new("does_not_exist.obj"));
/// assert!(result.is_err());
/// ```
pub fn parse_path(path: &Path) -> GeometryResult {
    let text = std::fs::read_to_string(path)?;
    parse_str(&text)
}

/// Parses a named OBJ resource from an asset store.
///
/// # Errors
/// Returns an error if the asset cannot be opened or read, or the content is
/// malformed.
///
/// # Examples
/// ```
/// use unweld::obj;
/// use unweld::store::MemoryStore;
///
/// let mut store = MemoryStore::new();
/// store.insert("flag.obj", b"v 0 0 0\n".to_vec());
/// let geometry = obj::parse_asset(&store, "flag.obj").unwrap();
/// assert_eq!(geometry.face_vertex_count, 0);
/// ```
pub fn parse_asset(store: &dyn AssetStore, name: &str) -> GeometryResult {
    let reader = store.open(name)?;
    parse_reader(reader)
}

/// Parses exactly `expected` float operands into a pool.
fn append_floats(
    pool: &mut Vec<f32>,
    mut tokens: SplitWhitespace<'_>,
    expected: usize,
    line: usize,
) -> Result<(), GeometryError> {
    for found in 0..expected {
        let token = tokens
            .next()
            .ok_or_else(|| GeometryError::MalformedGeometry {
                line,
                reason: format!("expected {} numeric operands, found {}", expected, found),
            })?;
        let value: f32 = token
            .parse()
            .map_err(|_| GeometryError::MalformedGeometry {
                line,
                reason: format!("operand `{}` is not a number", token),
            })?;
        pool.push(value);
    }

    if let Some(extra) = tokens.next() {
        return Err(GeometryError::MalformedGeometry {
            line,
            reason: format!("unexpected extra operand `{}`", extra),
        });
    }

    Ok(())
}

/// Collects the three `p/t/n` operands of a face line as index references.
fn collect_face(
    refs: &mut Vec<FaceVertexRef>,
    tokens: SplitWhitespace<'_>,
    line: usize,
) -> Result<(), GeometryError> {
    let operands: Vec<&str> = tokens.collect();
    if operands.len() != 3 {
        return Err(GeometryError::MalformedGeometry {
            line,
            reason: format!("expected 3 face operands, found {}", operands.len()),
        });
    }

    for operand in operands {
        let fields: Vec<&str> = operand.split('/').collect();
        if fields.len() != 3 {
            return Err(GeometryError::MalformedGeometry {
                line,
                reason: format!("face operand `{}` must have the form p/t/n", operand),
            });
        }

        refs.push(FaceVertexRef {
            position: parse_index(fields[0], operand, line)?,
            tex_coord: parse_index(fields[1], operand, line)?,
            normal: parse_index(fields[2], operand, line)?,
            line,
        });
    }

    Ok(())
}

/// Parses one index field of a face operand. Indices are 1-based; zero and
/// negative values are rejected.
fn parse_index(field: &str, operand: &str, line: usize) -> Result<usize, GeometryError> {
    match field.parse::<usize>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(GeometryError::MalformedGeometry {
            line,
            reason: format!(
                "index `{}` in face operand `{}` is not a positive integer",
                field, operand
            ),
        }),
    }
}

/// Resolves the collected references, in order, into the flattened output.
fn resolve(pools: &RawPools, refs: &[FaceVertexRef]) -> GeometryResult {
    let count = refs.len();
    let mut out = ParsedGeometry {
        positions: Vec::with_capacity(count * 3),
        tex_coords: Vec::with_capacity(count * 2),
        normals: Vec::with_capacity(count * 3),
        face_vertex_count: count,
    };

    for face_vertex in refs {
        let xyz = lookup(&pools.positions, face_vertex.position, 3, "vertex", face_vertex.line)?;
        out.positions.extend_from_slice(xyz);

        let uv = lookup(
            &pools.tex_coords,
            face_vertex.tex_coord,
            2,
            "texture coordinate",
            face_vertex.line,
        )?;
        // The downstream image space is top-left-origin; the format's is
        // bottom-left, so v gets flipped.
        out.tex_coords.push(uv[0]);
        out.tex_coords.push(1.0 - uv[1]);

        let normal = lookup(&pools.normals, face_vertex.normal, 3, "normal", face_vertex.line)?;
        out.normals.extend_from_slice(normal);
    }

    Ok(out)
}

/// Looks up the `stride`-wide entry at a 1-based index, bounds-checked.
fn lookup<'a>(
    pool: &'a [f32],
    index: usize,
    stride: usize,
    kind: &str,
    line: usize,
) -> Result<&'a [f32], GeometryError> {
    let declared = pool.len() / stride;
    if index > declared {
        return Err(GeometryError::MalformedGeometry {
            line,
            reason: format!("{} index {} out of range ({} declared)", kind, index, declared),
        });
    }

    let start = (index - 1) * stride;
    Ok(&pool[start..start + stride])
}
