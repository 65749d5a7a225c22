use bevy::prelude::*;

#[derive(Reflect, Component, Default, Debug, Clone)]
#[reflect(Component)]
pub struct Tags(pub Vec<String>);

impl Tags {
    pub fn single(tag: impl Into<String>) -> Self {
        Tags(vec![tag.into()])
    }
}
