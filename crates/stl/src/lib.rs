use anyhow::bail;
use byteorder::{LittleEndian, ReadBytesExt};
use cgmath::{InnerSpace, Zero};
use log::debug;
use ordered_float::OrderedFloat;
use smoothie_mesh::{Mesh, Triangle, Vector3};
use std::collections::HashMap;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

type PointKey = [OrderedFloat<f32>; 3];

// 80 byte header plus the triangle count.
const HEADER_SIZE: u64 = 84;
// Normal, three corners and the attribute byte count.
const FACET_SIZE: u64 = 50;

/// Merges coincident facet corners into shared vertices.
///
/// STL stores every corner of every facet separately. Without merging, no two
/// triangles would share a vertex and the mesh would have no connectivity to
/// smooth across.
#[derive(Default)]
struct Welder {
    lookup: HashMap<PointKey, u32>,
    vertices: Vec<Vector3>,
    normal_sums: Vec<Vector3>,
    indices: Vec<u32>,
}

impl Welder {
    fn with_capacity(n_triangles: usize) -> Self {
        Self {
            indices: Vec::with_capacity(n_triangles * 3),
            ..Default::default()
        }
    }

    fn add_point(&mut self, p: Vector3, normal: Vector3) {
        let key = [p.x.into(), p.y.into(), p.z.into()];
        let index = match self.lookup.get(&key) {
            Some(&index) => index,
            None => {
                let index = self.vertices.len() as u32;
                self.vertices.push(p);
                self.normal_sums.push(Vector3::zero());
                self.lookup.insert(key, index);
                index
            }
        };
        self.normal_sums[index as usize] += normal;
        self.indices.push(index);
    }

    fn add_triangle(&mut self, t: &Triangle, normal: Vector3) {
        // Many exporters write a zero normal and rely on the winding order instead.
        let normal = if normal.magnitude2() > 0.0 {
            normal.normalize()
        } else {
            let n = t.normal();
            if n.magnitude2() > 0.0 {
                n.normalize()
            } else {
                n
            }
        };
        self.add_point(t.p0, normal);
        self.add_point(t.p1, normal);
        self.add_point(t.p2, normal);
    }

    fn finish(self) -> anyhow::Result<Mesh> {
        let normals = self
            .normal_sums
            .into_iter()
            .map(|n| {
                if n.magnitude2() > 0.0 {
                    n.normalize()
                } else {
                    n
                }
            })
            .collect();
        Ok(Mesh::new(self.vertices, normals, self.indices)?)
    }
}

fn read_vector<T: Read>(f: &mut T) -> std::io::Result<Vector3> {
    Ok(Vector3 {
        x: f.read_f32::<LittleEndian>()?,
        y: f.read_f32::<LittleEndian>()?,
        z: f.read_f32::<LittleEndian>()?,
    })
}

fn read_binary<T: Read + Seek>(f: &mut T) -> anyhow::Result<Mesh> {
    // Binary files start with an 80 byte header. There is no defined structure for this
    // header but some implementations will stash some metadata in this header. For now
    // we'll just skip the header and load the geometry.
    let end = f.seek(SeekFrom::End(0))?;
    f.seek(SeekFrom::Start(80))?;

    // Immediately following the header is an unsigned 32-bit integer that indicates the
    // number of triagles that follow.
    let n_triangles = f.read_u32::<LittleEndian>()? as usize;

    // The count is untrusted and must fit in the bytes that remain.
    let available = (end.saturating_sub(HEADER_SIZE) / FACET_SIZE) as usize;
    if n_triangles > available {
        bail!(
            "header declares {} triangles but the file only holds {}",
            n_triangles,
            available
        );
    }

    let mut welder = Welder::with_capacity(n_triangles);
    for _ in 0..n_triangles {
        // Each triangle is specified by a normal vector followed by 3 verticies of the
        // triangle.
        let normal = read_vector(f)?;
        let triangle = Triangle {
            p0: read_vector(f)?,
            p1: read_vector(f)?,
            p2: read_vector(f)?,
        };
        welder.add_triangle(&triangle, normal);
        // After the triangle geometry there is a 2-byte unsigned integer called the
        // "attribute byte count". There is no standard structure of this field, but
        // some applications use this for color data.
        let _attribute_byte_count = f.read_u16::<LittleEndian>()?;
    }
    debug!(
        "welded {} facet corners into {} vertices",
        n_triangles * 3,
        welder.vertices.len()
    );
    welder.finish()
}

pub fn read_stl<P: AsRef<Path>>(p: P) -> anyhow::Result<Mesh> {
    let mut f = std::io::BufReader::new(std::fs::File::open(p)?);
    read_binary(&mut f)
}

pub fn parse_stl(data: &[u8]) -> anyhow::Result<Mesh> {
    let mut c = std::io::Cursor::new(data);
    read_binary(&mut c)
}

pub trait StlReader: Read {
    fn read_stl(&mut self) -> anyhow::Result<Mesh>;
}

impl<T: Read + Seek> StlReader for T {
    fn read_stl(&mut self) -> anyhow::Result<Mesh> {
        read_binary(self)
    }
}
