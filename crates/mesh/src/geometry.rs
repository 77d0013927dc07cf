pub type Vector3 = cgmath::Vector3<f32>;

// We rely on Vector3 being repr(c).
static_assertions::assert_eq_size!(Vector3, [f32; 3]);
static_assertions::assert_eq_align!(Vector3, f32);

/// The positions of a single triangle, in winding order.
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Triangle {
    pub p0: Vector3,
    pub p1: Vector3,
    pub p2: Vector3,
}

impl Triangle {
    /// Returns the (unnormalized) geometric normal of the triangle.
    ///
    /// The length of the returned vector is twice the triangle's area, so a
    /// degenerate triangle yields the zero vector.
    pub fn normal(&self) -> Vector3 {
        (self.p1 - self.p0).cross(self.p2 - self.p0)
    }
}

impl std::default::Default for Triangle {
    fn default() -> Self {
        let zero = Vector3 {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        };
        Self {
            p0: zero,
            p1: zero,
            p2: zero,
        }
    }
}

/// Index triple describing one face of an indexed mesh.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub struct Facet {
    pub p0: u32,
    pub p1: u32,
    pub p2: u32,
}

impl Facet {
    pub fn as_array(&self) -> [u32; 3] {
        [self.p0, self.p1, self.p2]
    }
}

/// Views a slice of vectors as the flat sequence of floats backing them.
pub fn as_floats(vectors: &[Vector3]) -> &[f32] {
    // Safety: Vector3 has the same size and alignment as [f32; 3] (asserted above), so a
    // slice of N vectors is exactly 3N contiguous floats. The returned slice borrows from
    // `vectors` and so cannot outlive it.
    unsafe { std::slice::from_raw_parts(vectors.as_ptr() as *const f32, vectors.len() * 3) }
}
