//! Entity and Material types
//!
//! An Entity is a visible object in the arena: a shape placed at a position with a material.

use std::collections::HashSet;
use std::sync::Arc;
use arena_math::{MeshShape, Vec3};

/// A simple material with just a base color
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Base color as RGBA (each component 0.0-1.0)
    pub base_color: [f32; 4],
}

impl Default for Material {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Material {
    /// Create a new material with the given RGBA color
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            base_color: [r, g, b, a],
        }
    }

    /// Create a new opaque material with the given RGB color
    pub fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Create an opaque material from a `0xRRGGBB` color
    pub fn from_hex(rgb: u32) -> Self {
        let channel = |shift: u32| ((rgb >> shift) & 0xff) as f32 / 255.0;
        Self::from_rgb(channel(16), channel(8), channel(0))
    }

    /// White material
    pub const WHITE: Self = Self { base_color: [1.0, 1.0, 1.0, 1.0] };

    /// Gray material
    pub const GRAY: Self = Self { base_color: [0.5, 0.5, 0.5, 1.0] };
}

/// Reference to a shape - either shared (Arc) or owned (Box)
///
/// Use `Shared` when multiple entities use the same mesh.
pub enum ShapeRef {
    /// A shared reference to a shape (multiple entities can share this)
    Shared(Arc<dyn MeshShape>),
    /// An owned shape (unique to this entity)
    Owned(Box<dyn MeshShape>),
}

impl ShapeRef {
    /// Create a shared shape reference
    pub fn shared<S: MeshShape + 'static>(shape: S) -> Self {
        Self::Shared(Arc::new(shape))
    }

    /// Create an owned shape reference
    pub fn owned<S: MeshShape + 'static>(shape: S) -> Self {
        Self::Owned(Box::new(shape))
    }

    /// Get a reference to the underlying shape
    pub fn as_shape(&self) -> &dyn MeshShape {
        match self {
            ShapeRef::Shared(arc) => arc.as_ref(),
            ShapeRef::Owned(boxed) => boxed.as_ref(),
        }
    }
}

/// An entity in the arena
pub struct Entity {
    /// Optional name for this entity (for lookup)
    pub name: Option<String>,
    /// Tags for categorization (e.g., "wall", "floor")
    pub tags: HashSet<String>,
    /// World-space position of the shape's local origin
    pub position: Vec3,
    /// The entity's shape
    pub shape: ShapeRef,
    /// The entity's material
    pub material: Material,
}

impl Entity {
    /// Create a new entity with the given shape at the origin
    pub fn new(shape: ShapeRef) -> Self {
        Self::with_material(shape, Material::default())
    }

    /// Create a new entity with shape and material
    pub fn with_material(shape: ShapeRef, material: Material) -> Self {
        Self {
            name: None,
            tags: HashSet::new(),
            position: Vec3::ZERO,
            shape,
            material,
        }
    }

    /// Set the name of this entity (for lookup)
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Add a tag to this entity
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    /// Place the entity
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Check if this entity has a specific tag
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Get the shape geometry
    pub fn shape(&self) -> &dyn MeshShape {
        self.shape.as_shape()
    }

    /// Shape vertices translated into world space
    pub fn world_vertices(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.shape().vertices().iter().map(move |v| *v + self.position)
    }
}
