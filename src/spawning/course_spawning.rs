use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use crate::core::collider::ColliderType;
use crate::core::components::{Checkpoint, Collectible, CourseRoot, CourseVolume, FinishLine, GroundSurface, Hazard, SpawnPoint, StartLine};
use crate::core::generation_config::GenerationConfig;
use crate::core::pose::Pose;
use crate::core::tags::Tags;
use crate::generation::dressing::EnvironmentDressing;
use crate::generation::generated_course::{CheckpointMarker, CourseVisitor, GeneratedCourse};
use crate::generation::placement::{CollectibleInstance, HazardInstance};
use crate::generation::volume::{TriggerVolume, Volume, VolumeHandle, VolumeKind};
use crate::spawning::helpers::{box_collider, create_collider, layer_groups, marker_mesh};
use crate::spawning::material_cache::MaterialCache;

const COLLECTIBLE_MARKER_RADIUS: f32 = 0.35;

/// Turns a generated course into entities parented under one `CourseRoot`.
pub struct BevyMaterializer<'a, 'w, 's> {
    commands: &'a mut Commands<'w, 's>,
    meshes: &'a mut Assets<Mesh>,
    materials: &'a mut Assets<StandardMaterial>,
    config: &'a GenerationConfig,
    material_cache: MaterialCache,
    root: Entity,
    spawned: usize,
    dressing: Option<EnvironmentDressing>,
}

impl<'a, 'w, 's> BevyMaterializer<'a, 'w, 's> {
    pub fn new(
        commands: &'a mut Commands<'w, 's>,
        meshes: &'a mut Assets<Mesh>,
        materials: &'a mut Assets<StandardMaterial>,
        config: &'a GenerationConfig,
        name: &str,
        parent: Option<Entity>,
    ) -> Self {
        let root = commands.spawn_empty()
            .insert(Name::new(format!("Course_{}", name)))
            .insert(CourseRoot { name: name.to_string() })
            .insert(Transform::default())
            .insert(Visibility::default())
            .id();

        if let Some(parent) = parent {
            commands.entity(parent).add_child(root);
        }

        BevyMaterializer {
            commands,
            meshes,
            materials,
            config,
            material_cache: MaterialCache::new(),
            root,
            spawned: 0,
            dressing: None,
        }
    }

    pub fn root(&self) -> Entity {
        self.root
    }

    /// Number of child entities spawned under the root so far.
    pub fn spawned(&self) -> usize {
        self.spawned
    }

    /// The dressing handed over at the end of the walk, if any.
    pub fn take_dressing(&mut self) -> Option<EnvironmentDressing> {
        self.dressing.take()
    }

    fn attach(&mut self, entity: Entity) {
        self.commands.entity(self.root).add_child(entity);
        self.spawned += 1;
    }

    fn material(&mut self, key: &str, color: Color, roughness: f32, metallic: f32) -> Handle<StandardMaterial> {
        self.material_cache.get_or_insert_with(key, self.materials, || StandardMaterial {
            base_color: color,
            perceptual_roughness: roughness,
            metallic,
            ..default()
        })
    }

    fn volume_material(&mut self, volume: &Volume) -> Handle<StandardMaterial> {
        match volume.surface {
            Some(surface) => {
                let key = format!("surface_{:?}", volume.kind);
                self.material(&key, surface.base_color, surface.perceptual_roughness, surface.metallic)
            }
            None => {
                let key = format!("plain_{:?}", volume.kind);
                let color = self.config.wall_color;
                self.material(&key, color, 0.9, 0.0)
            }
        }
    }

    fn volume_tags(&self, kind: VolumeKind) -> Tags {
        let tags = &self.config.tags;
        match kind {
            VolumeKind::Ground | VolumeKind::Ramp => Tags::single(tags.ground.clone()),
            VolumeKind::Wall => Tags::single(tags.wall.clone()),
            VolumeKind::Ceiling => Tags::single(tags.ceiling.clone()),
        }
    }

    fn spawn_trigger(&mut self, name: String, volume: &TriggerVolume, tag: String) -> Entity {
        let groups = layer_groups(self.config.layers.trigger);
        let entity = self.commands.spawn_empty()
            .insert(Name::new(name))
            .insert(volume.transform)
            .insert(Visibility::default())
            .insert(box_collider(volume.size))
            .insert(Sensor)
            .insert(ActiveEvents::COLLISION_EVENTS)
            .insert(groups)
            .insert(Tags::single(tag))
            .id();
        self.attach(entity);
        entity
    }
}

impl CourseVisitor for BevyMaterializer<'_, '_, '_> {
    fn volume(&mut self, handle: VolumeHandle, volume: &Volume, is_ground: bool) {
        let material = self.volume_material(volume);
        let mesh = self.meshes.add(Cuboid::new(volume.size.x, volume.size.y, volume.size.z));
        let layer = match volume.kind {
            VolumeKind::Ground | VolumeKind::Ramp => self.config.layers.ground,
            VolumeKind::Wall | VolumeKind::Ceiling => self.config.layers.wall,
        };
        let tags = self.volume_tags(volume.kind);

        let entity = self.commands.spawn_empty()
            .insert(Name::new(format!("{:?}_{}_{}", volume.kind, volume.segment_index, handle.0)))
            .insert(Mesh3d(mesh))
            .insert(MeshMaterial3d(material))
            .insert(volume.transform)
            .insert(box_collider(volume.size))
            .insert(RigidBody::Fixed)
            .insert(layer_groups(layer))
            .insert(tags)
            .insert(CourseVolume { kind: volume.kind, segment_index: volume.segment_index })
            .id();

        if is_ground {
            self.commands.entity(entity).insert(GroundSurface);
        }
        self.attach(entity);
    }

    fn spawn_point(&mut self, pose: &Pose) {
        let entity = self.commands.spawn_empty()
            .insert(Name::new("SpawnPoint"))
            .insert(pose.frame())
            .insert(Visibility::default())
            .insert(Tags::single(self.config.tags.spawn_point.clone()))
            .insert(SpawnPoint)
            .id();
        self.attach(entity);
    }

    fn start_line(&mut self, volume: &TriggerVolume) {
        let tag = self.config.tags.start_line.clone();
        let entity = self.spawn_trigger("StartLine".to_string(), volume, tag);
        self.commands.entity(entity).insert(StartLine);
    }

    fn finish_line(&mut self, volume: &TriggerVolume, _pose: &Pose) {
        let tag = self.config.tags.finish_line.clone();
        let entity = self.spawn_trigger("FinishLine".to_string(), volume, tag);
        self.commands.entity(entity).insert(FinishLine);
    }

    fn checkpoint(&mut self, checkpoint: &CheckpointMarker) {
        let tag = self.config.tags.checkpoint.clone();
        let entity = self.spawn_trigger(format!("Checkpoint_{}", checkpoint.index), &checkpoint.volume, tag);
        self.commands.entity(entity).insert(Checkpoint {
            index: checkpoint.index,
            segment_index: checkpoint.segment_index,
        });
    }

    fn collectible(&mut self, collectible: &CollectibleInstance) {
        let radius = collectible.collectible_type.trigger_radius();
        let material = self.material(
            &format!("collectible_{:?}", collectible.collectible_type),
            collectible.collectible_type.marker_color(),
            0.4,
            0.6,
        );
        let mesh = self.meshes.add(Sphere::new(COLLECTIBLE_MARKER_RADIUS));

        let entity = self.commands.spawn_empty()
            .insert(Name::new(collectible.name.clone()))
            .insert(Mesh3d(mesh))
            .insert(MeshMaterial3d(material))
            .insert(collectible.transform)
            .insert(create_collider(&ColliderType::Ball { radius }))
            .insert(Sensor)
            .insert(ActiveEvents::COLLISION_EVENTS)
            .insert(layer_groups(self.config.layers.trigger))
            .insert(Tags::single(self.config.tags.collectible.clone()))
            .insert(Collectible { collectible_type: collectible.collectible_type })
            .id();
        self.attach(entity);
    }

    fn hazard(&mut self, hazard: &HazardInstance) {
        let binding = &hazard.binding;
        let material = self.material(&format!("hazard_{}", hazard.hazard_type), binding.marker.color, 0.6, 0.0);
        let mesh = self.meshes.add(marker_mesh(binding.marker.shape));

        let entity = self.commands.spawn_empty()
            .insert(Name::new(hazard.name.clone()))
            .insert(Mesh3d(mesh))
            .insert(MeshMaterial3d(material))
            .insert(hazard.transform)
            .insert(create_collider(&binding.collider.collider_type))
            .insert(layer_groups(self.config.layers.hazard))
            .insert(Tags::single(self.config.tags.hazard.clone()))
            .insert(Hazard {
                hazard_type: hazard.hazard_type.clone(),
                kind: binding.kind,
                parameter: hazard.parameter,
                scale: hazard.scale,
            })
            .id();

        if binding.collider.is_trigger() {
            self.commands.entity(entity)
                .insert(Sensor)
                .insert(ActiveEvents::COLLISION_EVENTS);
        } else {
            self.commands.entity(entity).insert(RigidBody::Fixed);
        }
        self.attach(entity);
    }

    fn dressing(&mut self, dressing: &EnvironmentDressing) {
        self.dressing = Some(dressing.clone());
    }

    fn end_course(&mut self) {
        debug!("Materialized {} entities under {:?} using {} materials", self.spawned, self.root, self.material_cache.len());
    }
}

/// Spawns every entity of `course` and returns the root plus the dressing to apply.
pub fn spawn_course(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    config: &GenerationConfig,
    course: &GeneratedCourse,
    parent: Option<Entity>,
) -> (Entity, Option<EnvironmentDressing>) {
    let mut materializer = BevyMaterializer::new(commands, meshes, materials, config, &course.name, parent);
    course.visit(&mut materializer);
    (materializer.root(), materializer.take_dressing())
}
