use std::collections::HashSet;
use crate::core::environment::EnvironmentType;
use crate::core::pose::Pose;
use crate::generation::dressing::EnvironmentDressing;
use crate::generation::path_cursor::SegmentSpan;
use crate::generation::placement::{CollectibleInstance, HazardInstance};
use crate::generation::volume::{TriggerVolume, Volume, VolumeHandle, VolumeKind};

#[derive(Debug, Clone, PartialEq)]
pub struct CheckpointMarker {
    pub index: u32,
    pub segment_index: usize,
    pub volume: TriggerVolume,
}

/// Everything one generation run produced. Owned by the caller once returned.
#[derive(Debug, Clone)]
pub struct GeneratedCourse {
    pub name: String,
    pub environment: EnvironmentType,
    pub volumes: Vec<Volume>,
    pub ground: Vec<VolumeHandle>,
    pub spans: Vec<SegmentSpan>,
    pub spawn: Pose,
    pub start_line: TriggerVolume,
    pub finish_line: TriggerVolume,
    pub finish: Pose,
    pub checkpoints: Vec<CheckpointMarker>,
    pub collectibles: Vec<CollectibleInstance>,
    pub hazards: Vec<HazardInstance>,
    pub dressing: EnvironmentDressing,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CourseStats {
    pub segments: usize,
    pub ground: usize,
    pub walls: usize,
    pub ceilings: usize,
    pub ramps: usize,
    pub checkpoints: usize,
    pub collectibles: usize,
    pub hazards: usize,
    pub fallback_hazards: usize,
    /// Sum of realised segment path lengths, including turn radius floors.
    pub path_length: f32,
}

/// Receives a generated course piece by piece. Implement it to turn the plain
/// records into whatever the host needs.
pub trait CourseVisitor {
    fn begin_course(&mut self, _course: &GeneratedCourse) {}
    fn volume(&mut self, handle: VolumeHandle, volume: &Volume, is_ground: bool);
    fn spawn_point(&mut self, pose: &Pose);
    fn start_line(&mut self, volume: &TriggerVolume);
    fn finish_line(&mut self, volume: &TriggerVolume, pose: &Pose);
    fn checkpoint(&mut self, checkpoint: &CheckpointMarker);
    fn collectible(&mut self, collectible: &CollectibleInstance);
    fn hazard(&mut self, hazard: &HazardInstance);
    fn dressing(&mut self, _dressing: &EnvironmentDressing) {}
    fn end_course(&mut self) {}
}

impl GeneratedCourse {
    pub fn count(&self, kind: VolumeKind) -> usize {
        self.volumes.iter().filter(|v| v.kind == kind).count()
    }

    pub fn volumes_in_segment(&self, segment_index: usize) -> impl Iterator<Item = &Volume> {
        self.volumes.iter().filter(move |v| v.segment_index == segment_index)
    }

    pub fn stats(&self) -> CourseStats {
        CourseStats {
            segments: self.spans.len(),
            ground: self.count(VolumeKind::Ground),
            walls: self.count(VolumeKind::Wall),
            ceilings: self.count(VolumeKind::Ceiling),
            ramps: self.count(VolumeKind::Ramp),
            checkpoints: self.checkpoints.len(),
            collectibles: self.collectibles.len(),
            hazards: self.hazards.len(),
            fallback_hazards: self.hazards.iter().filter(|h| h.binding.is_fallback()).count(),
            path_length: self.spans.iter().map(|s| s.path_length).sum(),
        }
    }

    pub fn visit(&self, visitor: &mut impl CourseVisitor) {
        visitor.begin_course(self);

        let ground: HashSet<VolumeHandle> = self.ground.iter().copied().collect();
        for (index, volume) in self.volumes.iter().enumerate() {
            let handle = VolumeHandle(index);
            visitor.volume(handle, volume, ground.contains(&handle));
        }

        visitor.spawn_point(&self.spawn);
        visitor.start_line(&self.start_line);
        for checkpoint in &self.checkpoints {
            visitor.checkpoint(checkpoint);
        }
        visitor.finish_line(&self.finish_line, &self.finish);

        for collectible in &self.collectibles {
            visitor.collectible(collectible);
        }
        for hazard in &self.hazards {
            visitor.hazard(hazard);
        }

        visitor.dressing(&self.dressing);
        visitor.end_course();
    }
}
