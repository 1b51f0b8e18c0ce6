pub mod api;
pub mod core;
pub mod actor;
pub mod input;
pub mod systems;
pub mod level;
pub mod renderer;

// Re-export key types at crate root for convenience
pub use api::config::{GameConfig, GoalRule, ResultsPolicy};
pub use api::error::{LevelError, Result};
pub use api::types::{GameEvent, WireEvent};
pub use core::geometry::Aabb;
pub use core::time::FixedTimestep;
pub use actor::state::{ActorId, ActorPair, ActorState};
pub use input::bindings::KeyBindings;
pub use input::controls::{ActorInput, InputSnapshot};
pub use input::queue::{InputEvent, InputQueue};
pub use level::builtin::builtin_catalog;
pub use level::descriptor::{LevelCatalog, LevelDescriptor};
pub use level::progression::{Campaign, Hud, LevelResult, Phase};
pub use level::world::LevelState;
pub use renderer::instance::{RenderBuffer, RenderInstance, ShapeKind};
pub use systems::render::build_render_buffer;
