/// Fast mathematical operations using SIMD-accelerated `glam` types.
///
/// This module re-exports all types and functions from the [`glam`] crate,
/// which provides high-performance vector mathematics using SIMD
/// instructions when available.
///
/// # Common Types
///
/// - [`Vec2`]: 2D vector (x, y) for positions, offsets, and directions
/// - [`Mat3`]: 3x3 matrix for 2D affine transforms
///
/// # Examples
///
/// ```
/// use nib_core::math::Vec2;
///
/// let center = Vec2::new(100.0, 100.0);
/// let offset = Vec2::new(50.0, 0.0);
/// let rim = center + offset;
/// assert_eq!(rim.x, 150.0);
/// ```
///
/// [`glam`]: https://docs.rs/glam
pub mod fast {
    pub use glam::*;
}

/// Packed vector types for GPU buffer uploads and interoperability.
///
/// This module provides `#[repr(C)]` vector types that can be safely cast to
/// byte slices for GPU buffer uploads using [`bytemuck`]. Use packed types in
/// vertex data; use the [`fast`] module types for CPU-side math.
///
/// # Examples
///
/// ```
/// use nib_core::math::PackedVec2;
/// use bytemuck::cast_slice;
///
/// let positions = vec![
///     PackedVec2 { x: -1.0, y: -1.0 },
///     PackedVec2 { x: 1.0, y: -1.0 },
///     PackedVec2 { x: 0.0, y: 1.0 },
/// ];
/// let bytes: &[u8] = cast_slice(&positions);
/// assert_eq!(bytes.len(), 24);
/// ```
///
/// [`bytemuck`]: https://docs.rs/bytemuck
pub mod packed {
    use bytemuck::{Pod, Zeroable};

    /// A 2D vector with guaranteed `#[repr(C)]` layout for GPU uploads.
    ///
    /// This type is [`Pod`] (Plain Old Data) and can be safely cast to bytes.
    ///
    /// # Memory Layout
    ///
    /// ```text
    /// Offset | Field | Size
    /// -------|-------|------
    /// 0      | x     | 4 bytes (f32)
    /// 4      | y     | 4 bytes (f32)
    /// Total: 8 bytes
    /// ```
    #[repr(C)]
    #[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
    pub struct Vec2 {
        pub x: f32,
        pub y: f32,
    }

    impl From<glam::Vec2> for Vec2 {
        fn from(v: glam::Vec2) -> Self {
            Self { x: v.x, y: v.y }
        }
    }

    impl From<Vec2> for glam::Vec2 {
        fn from(v: Vec2) -> Self {
            glam::Vec2::new(v.x, v.y)
        }
    }
}

pub use fast::*;
pub use packed::Vec2 as PackedVec2;
