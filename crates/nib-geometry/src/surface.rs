//! Abstract drawable-surface interfaces.
//!
//! The engine never touches a window, device, or GPU context; backends
//! implement one of these narrow traits and receive finished geometry.

use crate::{Mesh, PathElement};

/// A surface that accepts assembled vertex/index buffers.
pub trait MeshTarget {
    /// Submit one assembled mesh.
    fn submit_mesh(&mut self, mesh: &Mesh);
}

/// A surface that accepts serialized vector paths.
pub trait PathTarget {
    /// Receive one path element, in paint order.
    fn receive_path(&mut self, element: &PathElement);
}

/// A [`MeshTarget`] that simply collects meshes, for tests and buffering.
#[derive(Debug, Clone, Default)]
pub struct MeshCollector {
    /// Collected meshes, in submission order.
    pub meshes: Vec<Mesh>,
}

impl MeshTarget for MeshCollector {
    fn submit_mesh(&mut self, mesh: &Mesh) {
        self.meshes.push(mesh.clone());
    }
}

/// A [`PathTarget`] that simply collects elements, for tests and buffering.
#[derive(Debug, Clone, Default)]
pub struct PathCollector {
    /// Collected elements, in paint order.
    pub elements: Vec<PathElement>,
}

impl PathTarget for PathCollector {
    fn receive_path(&mut self, element: &PathElement) {
        self.elements.push(element.clone());
    }
}
