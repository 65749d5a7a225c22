use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use crate::core::collider::ColliderType;
use crate::generation::hazard_table::MarkerShape;

pub fn create_collider(collider_type: &ColliderType) -> Collider {
    match *collider_type {
        ColliderType::Ball { radius } => Collider::ball(radius),
        ColliderType::Cylinder { half_height, radius } => Collider::cylinder(half_height, radius),
        ColliderType::Cuboid { hx, hy, hz } => Collider::cuboid(hx, hy, hz),
    }
}

/// Box collider from full extents.
pub fn box_collider(size: Vec3) -> Collider {
    Collider::cuboid(size.x / 2.0, size.y / 2.0, size.z / 2.0)
}

/// Membership in a single layer, colliding with everything.
pub fn layer_groups(layer: u32) -> CollisionGroups {
    let membership = Group::from_bits_truncate(1u32.checked_shl(layer).unwrap_or(0));
    CollisionGroups::new(membership, Group::ALL)
}

pub fn marker_mesh(shape: MarkerShape) -> Mesh {
    match shape {
        MarkerShape::Cuboid(size) => Mesh::from(Cuboid::new(size.x, size.y, size.z)),
        MarkerShape::Sphere(radius) => Mesh::from(Sphere::new(radius)),
        MarkerShape::Cylinder { radius, height } => Mesh::from(Cylinder::new(radius, height)),
    }
}
