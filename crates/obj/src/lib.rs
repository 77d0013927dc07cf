use log::debug;
use smoothie_mesh::{Mesh, MeshError, Vector3};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ObjError {
    #[error("failed to read mesh: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: expected 3 components")]
    MissingComponent { line: usize },

    #[error("line {line}: invalid number {token:?}: {source}")]
    Float {
        line: usize,
        token: String,
        source: std::num::ParseFloatError,
    },

    /// Face indices are 1-based, so 0 is as invalid as a non-numeric token.
    #[error("line {line}: invalid face index {token:?}")]
    Index { line: usize, token: String },

    #[error(transparent)]
    Mesh(#[from] MeshError),
}

pub type Result<T> = std::result::Result<T, ObjError>;

fn parse_vector<'a, I: Iterator<Item = &'a str>>(mut fields: I, line: usize) -> Result<Vector3> {
    let mut component = || {
        let token = fields.next().ok_or(ObjError::MissingComponent { line })?;
        token.parse::<f32>().map_err(|source| ObjError::Float {
            line,
            token: token.to_owned(),
            source,
        })
    };
    // Anything after z (ex: the optional w of a `v` line) is ignored.
    Ok(Vector3 {
        x: component()?,
        y: component()?,
        z: component()?,
    })
}

// A face token is `p`, `p/t`, `p//n` or `p/t/n`. Only the position index
// matters to us.
fn parse_index(token: &str, line: usize) -> Result<u32> {
    let position = token.split('/').next().unwrap_or(token);
    match position.parse::<u32>() {
        Ok(index) if index > 0 => Ok(index - 1),
        _ => Err(ObjError::Index {
            line,
            token: token.to_owned(),
        }),
    }
}

fn read_text<R: BufRead>(r: R) -> Result<Mesh> {
    let mut vertices = Vec::new();
    let mut normals = Vec::new();
    let mut indices = Vec::new();

    for (n, line) in r.lines().enumerate() {
        let line = line?;
        let line_number = n + 1;
        let mut fields = line.split_whitespace();
        match fields.next() {
            Some("v") => vertices.push(parse_vector(fields, line_number)?),
            Some("vn") => normals.push(parse_vector(fields, line_number)?),
            // Faces are appended as-is. Polygons with more than 3 corners are not
            // triangulated, so the input is expected to be triangulated already.
            Some("f") => {
                for token in fields {
                    indices.push(parse_index(token, line_number)?);
                }
            }
            // Comments, texture coordinates, groups and materials have no
            // bearing on smoothing.
            _ => (),
        }
    }

    debug!(
        "parsed {} vertices, {} normals, {} face indices",
        vertices.len(),
        normals.len(),
        indices.len()
    );
    Ok(Mesh::new(vertices, normals, indices)?)
}

pub fn read_obj<P: AsRef<Path>>(p: P) -> Result<Mesh> {
    let f = std::fs::File::open(p)?;
    read_text(BufReader::new(f))
}

pub fn parse_obj(data: &str) -> Result<Mesh> {
    read_text(data.as_bytes())
}

pub trait ObjReader: BufRead {
    fn read_obj(&mut self) -> Result<Mesh>;
}

impl<T: BufRead> ObjReader for T {
    fn read_obj(&mut self) -> Result<Mesh> {
        read_text(self)
    }
}

/// Writes `mesh` in the same text format that `parse_obj` accepts.
///
/// Floats are written with their shortest exact representation, so reading the
/// output back yields bit-identical positions.
pub fn write_obj<W: Write>(mesh: &Mesh, w: &mut W) -> std::io::Result<()> {
    for v in mesh.vertices() {
        writeln!(w, "v {} {} {}", v.x, v.y, v.z)?;
    }
    for n in mesh.normals() {
        writeln!(w, "vn {} {} {}", n.x, n.y, n.z)?;
    }
    let with_normals = !mesh.normals().is_empty();
    for f in mesh.facets() {
        let [a, b, c] = f.as_array().map(|i| i + 1);
        if with_normals {
            writeln!(w, "f {a}//{a} {b}//{b} {c}//{c}")?;
        } else {
            writeln!(w, "f {a} {b} {c}")?;
        }
    }
    Ok(())
}

pub fn save_obj<P: AsRef<Path>>(mesh: &Mesh, p: P) -> std::io::Result<()> {
    let mut f = std::io::BufWriter::new(std::fs::File::create(p)?);
    write_obj(mesh, &mut f)?;
    f.flush()
}
