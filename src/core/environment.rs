use std::fmt;
use serde::{Serialize, Deserialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EnvironmentType {
    #[default]
    Lava,
    Ice,
    Toxic,
    Storm,
    Canyon,
}

impl fmt::Display for EnvironmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EnvironmentType::Lava => "Lava",
            EnvironmentType::Ice => "Ice",
            EnvironmentType::Toxic => "Toxic",
            EnvironmentType::Storm => "Storm",
            EnvironmentType::Canyon => "Canyon",
        };
        f.write_str(name)
    }
}
