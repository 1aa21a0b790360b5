//! Triangle records and the growable triangle buffer
//!
//! Triangles are stored as fixed-size records in one contiguous vector, so
//! the whole buffer can be viewed as a flat `[f32]` of xyz triplets.

use arrayvec::ArrayVec;
use bytemuck::{Pod, Zeroable};
use morphosis_math::Vec3;
use serde::{Serialize, Deserialize};

use crate::error::AllocError;
use crate::lookup_tables::MAX_CUBE_TRIANGLES;

/// A triangle with exactly three vertex positions
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Triangle {
    pub vertices: [Vec3; 3],
}

impl Triangle {
    #[inline]
    pub const fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self { vertices: [a, b, c] }
    }
}

/// Triangles produced by a single cube
///
/// Stack-allocated; a cube never produces more than
/// [`MAX_CUBE_TRIANGLES`] triangles.
pub type TriangleBatch = ArrayVec<Triangle, MAX_CUBE_TRIANGLES>;

/// Axis-aligned bounds of a set of points
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    /// Extent along each axis
    #[inline]
    pub fn extent(&self) -> Vec3 {
        self.max - self.min
    }
}

/// Ordered, growable sequence of triangles
///
/// Append-only while a mesh is being built. Growth goes through
/// `try_reserve`, so running out of memory is reported as an [`AllocError`]
/// instead of aborting.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TriangleBuffer {
    triangles: Vec<Triangle>,
}

impl TriangleBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self { triangles: Vec::new() }
    }

    /// Make room for `additional` more triangles, preserving the contents
    pub fn reserve(&mut self, additional: usize) -> Result<(), AllocError> {
        self.triangles
            .try_reserve(additional)
            .map_err(|e| AllocError::new(additional, self.triangles.len(), e))
    }

    /// Append one triangle
    pub fn push(&mut self, triangle: Triangle) -> Result<(), AllocError> {
        self.reserve(1)?;
        self.triangles.push(triangle);
        Ok(())
    }

    /// Move every triangle of `batch` onto the end of this buffer
    ///
    /// On success `batch` is left empty. On failure neither side is modified.
    pub fn append_batch(&mut self, batch: &mut TriangleBatch) -> Result<(), AllocError> {
        if batch.is_empty() {
            return Ok(());
        }
        self.reserve(batch.len())?;
        self.triangles.extend(batch.drain(..));
        Ok(())
    }

    /// Move every triangle of `other` onto the end of this buffer
    ///
    /// On success `other` is left empty and its storage released.
    pub fn append(&mut self, other: &mut TriangleBuffer) -> Result<(), AllocError> {
        if other.is_empty() {
            return Ok(());
        }
        if self.is_empty() {
            self.triangles = std::mem::take(&mut other.triangles);
            return Ok(());
        }
        self.reserve(other.len())?;
        self.triangles.extend(std::mem::take(&mut other.triangles));
        Ok(())
    }

    /// Number of triangles
    #[inline]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Triangle at `index`
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Triangle> {
        self.triangles.get(index)
    }

    /// All triangles as a slice
    #[inline]
    pub fn as_slice(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Triangle> {
        self.triangles.iter()
    }

    /// All vertex positions in triangle order
    pub fn vertices(&self) -> &[Vec3] {
        bytemuck::cast_slice(&self.triangles)
    }

    /// All coordinates flattened as `x, y, z` per vertex
    pub fn as_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.triangles)
    }

    /// Bounds of all vertices, or `None` for an empty buffer
    pub fn bounds(&self) -> Option<Bounds> {
        let mut vertices = self.vertices().iter();
        let first = *vertices.next()?;
        let bounds = vertices.fold(Bounds { min: first, max: first }, |b, &v| Bounds {
            min: b.min.min_components(v),
            max: b.max.max_components(v),
        });
        Some(bounds)
    }
}

impl<'a> IntoIterator for &'a TriangleBuffer {
    type Item = &'a Triangle;
    type IntoIter = std::slice::Iter<'a, Triangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.triangles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tri(n: f32) -> Triangle {
        Triangle::new(
            Vec3::new(n, 0.0, 0.0),
            Vec3::new(0.0, n, 0.0),
            Vec3::new(0.0, 0.0, n),
        )
    }

    #[test]
    fn test_reserve_preserves_contents() {
        let mut buffer = TriangleBuffer::new();
        buffer.push(tri(1.0)).unwrap();
        buffer.reserve(1000).unwrap();
        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer.get(0), Some(&tri(1.0)));
    }

    #[test]
    fn test_reserve_overflow_is_an_error() {
        let mut buffer = TriangleBuffer::new();
        buffer.push(tri(1.0)).unwrap();
        let err = buffer.reserve(usize::MAX).unwrap_err();
        assert_eq!(err.requested, usize::MAX);
        assert_eq!(err.existing, 1);
        assert_eq!(buffer.len(), 1);
    }

    #[test]
    fn test_append_batch_empties_batch() {
        let mut buffer = TriangleBuffer::new();
        let mut batch = TriangleBatch::new();
        batch.push(tri(1.0));
        batch.push(tri(2.0));

        buffer.append_batch(&mut batch).unwrap();
        assert!(batch.is_empty());
        assert_eq!(buffer.as_slice(), &[tri(1.0), tri(2.0)]);
    }

    #[test]
    fn test_append_empty_batch_is_noop() {
        let mut buffer = TriangleBuffer::new();
        buffer.push(tri(1.0)).unwrap();
        let before = buffer.clone();
        buffer.append_batch(&mut TriangleBatch::new()).unwrap();
        assert_eq!(buffer, before);
    }

    #[test]
    fn test_append_buffer_into_empty() {
        let mut target = TriangleBuffer::new();
        let mut other = TriangleBuffer::new();
        other.push(tri(3.0)).unwrap();

        target.append(&mut other).unwrap();
        assert!(other.is_empty());
        assert_eq!(target.as_slice(), &[tri(3.0)]);
    }

    #[test]
    fn test_flat_layout() {
        let mut buffer = TriangleBuffer::new();
        buffer.push(tri(2.0)).unwrap();
        assert_eq!(buffer.vertices().len(), 3);
        assert_eq!(
            buffer.as_flat(),
            &[2.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 2.0]
        );
    }

    #[test]
    fn test_bounds() {
        let mut buffer = TriangleBuffer::new();
        assert!(buffer.bounds().is_none());

        buffer.push(tri(2.0)).unwrap();
        buffer.push(tri(-1.0)).unwrap();
        let bounds = buffer.bounds().unwrap();
        assert_eq!(bounds.min, Vec3::splat(-1.0));
        assert_eq!(bounds.max, Vec3::splat(2.0));
        assert_eq!(bounds.extent(), Vec3::splat(3.0));
    }
}
