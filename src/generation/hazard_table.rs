use std::str::FromStr;
use bevy::prelude::*;
use crate::core::collider::{ColliderInfo, ColliderType};

/// Every hazard the generator knows how to configure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HazardKind {
    LavaFlow,
    LavaGeyser,
    RisingLava,
    IceSpikes,
    SlipperyIce,
    ToxicPool,
    GasVent,
    WindGust,
    ElectricFence,
    FallingRock,
}

const HAZARD_NAMES: [(&str, HazardKind); 10] = [
    ("LavaFlow", HazardKind::LavaFlow),
    ("LavaGeyser", HazardKind::LavaGeyser),
    ("RisingLava", HazardKind::RisingLava),
    ("IceSpikes", HazardKind::IceSpikes),
    ("SlipperyIce", HazardKind::SlipperyIce),
    ("ToxicPool", HazardKind::ToxicPool),
    ("GasVent", HazardKind::GasVent),
    ("WindGust", HazardKind::WindGust),
    ("ElectricFence", HazardKind::ElectricFence),
    ("FallingRock", HazardKind::FallingRock),
];

impl FromStr for HazardKind {
    type Err = ();

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let name = name.trim();
        HAZARD_NAMES
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(name))
            .map(|(_, kind)| *kind)
            .ok_or(())
    }
}

impl HazardKind {
    pub fn name(self) -> &'static str {
        HAZARD_NAMES
            .iter()
            .find(|(_, kind)| *kind == self)
            .map(|(name, _)| *name)
            .unwrap_or("Hazard")
    }
}

/// Which behaviour parameter a hazard's `custom_param` feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BehaviorSlot {
    FlowToggleDuration,
    EruptionInterval,
    VentInterval,
    WindForce,
    RiseSpeed,
    FenceToggleDuration,
}

impl BehaviorSlot {
    pub fn default_value(self) -> f32 {
        match self {
            BehaviorSlot::FlowToggleDuration => 3.0,
            BehaviorSlot::EruptionInterval => 4.0,
            BehaviorSlot::VentInterval => 3.5,
            BehaviorSlot::WindForce => 12.0,
            BehaviorSlot::RiseSpeed => 0.5,
            BehaviorSlot::FenceToggleDuration => 2.0,
        }
    }

    /// A zero parameter means "use the default timing".
    pub fn resolve(self, custom_param: f32) -> ResolvedParameter {
        let value = if custom_param == 0.0 { self.default_value() } else { custom_param };
        ResolvedParameter { slot: self, value }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedParameter {
    pub slot: BehaviorSlot,
    pub value: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarkerShape {
    Cuboid(Vec3),
    Sphere(f32),
    Cylinder { radius: f32, height: f32 },
}

impl MarkerShape {
    pub fn scaled(self, scale: f32) -> Self {
        match self {
            MarkerShape::Cuboid(size) => MarkerShape::Cuboid(size * scale),
            MarkerShape::Sphere(radius) => MarkerShape::Sphere(radius * scale),
            MarkerShape::Cylinder { radius, height } => MarkerShape::Cylinder {
                radius: radius * scale,
                height: height * scale,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerGeometry {
    pub shape: MarkerShape,
    pub color: Color,
}

/// Static configuration of one hazard type, already scaled for a placed instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HazardBinding {
    /// `None` for the generic fallback.
    pub kind: Option<HazardKind>,
    pub collider: ColliderInfo,
    pub marker: MarkerGeometry,
    pub slot: Option<BehaviorSlot>,
}

impl HazardBinding {
    pub fn is_fallback(&self) -> bool {
        self.kind.is_none()
    }

    pub fn resolve_parameter(&self, custom_param: f32) -> Option<ResolvedParameter> {
        self.slot.map(|slot| slot.resolve(custom_param))
    }

    fn scaled(self, scale: f32) -> Self {
        HazardBinding {
            collider: self.collider.scaled(scale),
            marker: MarkerGeometry { shape: self.marker.shape.scaled(scale), ..self.marker },
            ..self
        }
    }
}

fn cylinder(radius: f32, height: f32) -> (ColliderType, MarkerShape) {
    (
        ColliderType::Cylinder { half_height: height / 2.0, radius },
        MarkerShape::Cylinder { radius, height },
    )
}

fn cuboid(size: Vec3) -> (ColliderType, MarkerShape) {
    (ColliderType::cuboid(size), MarkerShape::Cuboid(size))
}

fn ball(radius: f32) -> (ColliderType, MarkerShape) {
    (ColliderType::Ball { radius }, MarkerShape::Sphere(radius))
}

fn unit_binding(kind: HazardKind) -> HazardBinding {
    let lava = Color::srgb(1.0, 0.35, 0.05);
    let ice = Color::srgb(0.7, 0.9, 1.0);
    let toxic = Color::srgb(0.45, 0.95, 0.2);

    let ((shape, marker), trigger, color, slot) = match kind {
        HazardKind::LavaFlow => (cuboid(Vec3::new(4.0, 0.3, 6.0)), true, lava, Some(BehaviorSlot::FlowToggleDuration)),
        HazardKind::LavaGeyser => (cylinder(1.2, 4.0), true, lava, Some(BehaviorSlot::EruptionInterval)),
        HazardKind::RisingLava => (cuboid(Vec3::new(12.0, 0.5, 12.0)), true, lava, Some(BehaviorSlot::RiseSpeed)),
        HazardKind::IceSpikes => (cuboid(Vec3::new(2.0, 1.5, 2.0)), false, ice, None),
        HazardKind::SlipperyIce => (cuboid(Vec3::new(5.0, 0.1, 5.0)), true, ice, None),
        HazardKind::ToxicPool => (cylinder(2.5, 0.4), true, toxic, None),
        HazardKind::GasVent => (cylinder(1.0, 3.0), true, toxic, Some(BehaviorSlot::VentInterval)),
        HazardKind::WindGust => (cuboid(Vec3::new(6.0, 4.0, 6.0)), true, Color::srgba(0.85, 0.9, 0.95, 0.4), Some(BehaviorSlot::WindForce)),
        HazardKind::ElectricFence => (cuboid(Vec3::new(6.0, 2.0, 0.3)), true, Color::srgb(0.3, 0.6, 1.0), Some(BehaviorSlot::FenceToggleDuration)),
        HazardKind::FallingRock => (ball(1.5), false, Color::srgb(0.4, 0.33, 0.28), None),
    };

    let collider = if trigger { ColliderInfo::trigger(shape) } else { ColliderInfo::solid(shape) };

    HazardBinding {
        kind: Some(kind),
        collider,
        marker: MarkerGeometry { shape: marker, color },
        slot,
    }
}

pub const FALLBACK_SIZE: Vec3 = Vec3::new(3.0, 2.0, 3.0);

fn fallback_binding() -> HazardBinding {
    let (shape, marker) = cuboid(FALLBACK_SIZE);
    HazardBinding {
        kind: None,
        collider: ColliderInfo::trigger(shape),
        marker: MarkerGeometry { shape: marker, color: Color::srgb(1.0, 0.0, 1.0) },
        slot: None,
    }
}

pub fn binding_for_kind(kind: HazardKind, scale: f32) -> HazardBinding {
    unit_binding(kind).scaled(scale)
}

/// Resolves a hazard type identifier. Unknown identifiers degrade to a generic
/// trigger box rather than failing the course.
pub fn binding_for(hazard_type: &str, scale: f32) -> HazardBinding {
    match hazard_type.parse::<HazardKind>() {
        Ok(kind) => binding_for_kind(kind, scale),
        Err(()) => {
            warn!("Unknown hazard type {:?}, using a generic trigger volume", hazard_type);
            fallback_binding().scaled(scale)
        }
    }
}
