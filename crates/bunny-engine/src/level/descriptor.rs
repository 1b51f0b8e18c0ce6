use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::api::error::LevelError;
use crate::core::geometry::Aabb;

/// Static description of one level. Rectangles are tested in list order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelDescriptor {
    #[serde(default)]
    pub name: String,
    /// Solid platforms and walls.
    pub obstacles: Vec<Aabb>,
    /// Touching any of these resets both actors.
    #[serde(default)]
    pub hazards: Vec<Aabb>,
    /// Collectibles, consumed by the first actor that overlaps them.
    #[serde(default)]
    pub pickups: Vec<Aabb>,
    pub goal: Aabb,
    /// Spawn points (top-left corners) for actor A and actor B.
    pub spawns: [Vec2; 2],
}

impl LevelDescriptor {
    /// Check that every rectangle has a positive size.
    pub fn validate(&self) -> Result<(), LevelError> {
        let groups: [(&'static str, &[Aabb]); 4] = [
            ("obstacle", &self.obstacles),
            ("hazard", &self.hazards),
            ("pickup", &self.pickups),
            ("goal", std::slice::from_ref(&self.goal)),
        ];
        for (what, rects) in groups {
            if let Some(index) = rects.iter().position(|r| !r.is_valid()) {
                return Err(LevelError::InvalidRect {
                    level: self.name.clone(),
                    what,
                    index,
                });
            }
        }
        Ok(())
    }
}

/// Ordered, validated list of levels. Serializes as a plain array, the same
/// shape [`LevelCatalog::from_json`] reads.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LevelCatalog {
    levels: Vec<LevelDescriptor>,
}

impl LevelCatalog {
    pub fn new(levels: Vec<LevelDescriptor>) -> Result<Self, LevelError> {
        if levels.is_empty() {
            return Err(LevelError::EmptyCatalog);
        }
        for level in &levels {
            level.validate()?;
        }
        Ok(Self { levels })
    }

    /// Skip validation for levels known to be well-formed (the built-ins,
    /// which are covered by tests).
    pub(crate) fn from_trusted(levels: Vec<LevelDescriptor>) -> Self {
        Self { levels }
    }

    /// Parse a catalog from a JSON array of level descriptors.
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        let levels: Vec<LevelDescriptor> = serde_json::from_str(json)?;
        Self::new(levels)
    }

    pub fn get(&self, index: usize) -> Result<&LevelDescriptor, LevelError> {
        self.levels.get(index).ok_or(LevelError::IndexOutOfRange {
            index,
            len: self.levels.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Level indices, for a selection menu.
    pub fn indices(&self) -> std::ops::Range<usize> {
        0..self.levels.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LevelDescriptor> {
        self.levels.iter()
    }
}
