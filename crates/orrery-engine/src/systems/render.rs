use glam::{Mat4, Vec3};
use crate::components::entity::Entity;
use crate::components::mesh::{MeshComponent, MeshShape};
use crate::core::scene::Scene;
use crate::renderer::instance::{MeshBuffer, MeshInstance};

/// Build the mesh buffer from the scene.
/// Opaque meshes first, then translucent ones; `translucent_start` marks the split
/// so the host can draw the second batch with depth writes off.
pub fn build_mesh_buffer(scene: &Scene, buffer: &mut MeshBuffer) {
    buffer.clear();

    let mut translucent: Vec<MeshInstance> = Vec::new();

    for (entity, mesh) in scene.meshes() {
        let instance = mesh_instance(entity, mesh);
        if mesh.is_translucent() {
            translucent.push(instance);
        } else {
            buffer.push(instance);
        }
    }

    buffer.translucent_start = buffer.instance_count();
    for inst in translucent {
        buffer.push(inst);
    }
}

/// Pack one entity's mesh into its wire form.
pub fn mesh_instance(entity: &Entity, mesh: &MeshComponent) -> MeshInstance {
    let (radius, ring_inner) = match mesh.shape {
        MeshShape::Sphere { radius } => (radius, 0.0),
        MeshShape::Ring { inner_radius, outer_radius } => {
            let ratio = if outer_radius > 0.0 { inner_radius / outer_radius } else { 0.0 };
            (outer_radius, ratio)
        }
    };
    let model = entity.world_matrix() * Mat4::from_scale(Vec3::splat(radius));

    MeshInstance {
        model: model.to_cols_array(),
        r: mesh.color.r,
        g: mesh.color.g,
        b: mesh.color.b,
        opacity: mesh.opacity,
        emissive: mesh.emissive,
        shininess: mesh.shininess,
        shape: mesh.shape.kind(),
        ring_inner,
        texture: mesh.texture.map_or(-1.0, |t| t.0 as f32),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;
    use crate::assets::registry::TextureId;
    use crate::components::mesh::MeshColor;

    #[test]
    fn opaque_before_translucent() {
        let mut scene = Scene::new();
        scene.spawn(Entity::new(EntityId(1)).with_mesh(
            MeshComponent::sphere(1.0, MeshColor::WHITE).with_opacity(0.3),
        ));
        scene.spawn(Entity::new(EntityId(2)).with_mesh(MeshComponent::sphere(2.0, MeshColor::WHITE)));
        scene.spawn(Entity::new(EntityId(3)).with_mesh(MeshComponent::sphere(3.0, MeshColor::WHITE)));

        let mut buffer = MeshBuffer::new();
        build_mesh_buffer(&scene, &mut buffer);

        assert_eq!(buffer.instance_count(), 3);
        assert_eq!(buffer.translucent_start, 2);
        assert_eq!(buffer.instances()[2].opacity, 0.3);
    }

    #[test]
    fn inactive_and_meshless_entities_are_skipped() {
        let mut scene = Scene::new();
        let mut hidden = Entity::new(EntityId(1)).with_mesh(MeshComponent::sphere(1.0, MeshColor::WHITE));
        hidden.active = false;
        scene.spawn(hidden);
        scene.spawn(Entity::new(EntityId(2)));

        let mut buffer = MeshBuffer::new();
        build_mesh_buffer(&scene, &mut buffer);
        assert_eq!(buffer.instance_count(), 0);
    }

    #[test]
    fn model_matrix_folds_in_radius_and_position() {
        let e = Entity::new(EntityId(1)).with_pos(Vec3::new(10.0, 0.0, 0.0));
        let inst = mesh_instance(&e, &MeshComponent::sphere(4.0, MeshColor::WHITE));
        let m = Mat4::from_cols_array(&inst.model);
        let p = m.transform_point3(Vec3::X);
        assert!((p - Vec3::new(14.0, 0.0, 0.0)).length() < 1e-5);
        assert_eq!(inst.shape, 0.0);
    }

    #[test]
    fn ring_carries_inner_ratio() {
        let e = Entity::new(EntityId(1));
        let inst = mesh_instance(&e, &MeshComponent::ring(2.0, 4.0, MeshColor::WHITE));
        assert_eq!(inst.shape, 1.0);
        assert!((inst.ring_inner - 0.5).abs() < 1e-6);
    }

    #[test]
    fn texture_slot_or_minus_one() {
        let e = Entity::new(EntityId(1));
        let plain = mesh_instance(&e, &MeshComponent::sphere(1.0, MeshColor::WHITE));
        let textured = mesh_instance(
            &e,
            &MeshComponent::sphere(1.0, MeshColor::WHITE).with_texture(Some(TextureId(3))),
        );
        assert_eq!(plain.texture, -1.0);
        assert_eq!(textured.texture, 3.0);
    }
}
