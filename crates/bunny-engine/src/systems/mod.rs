pub mod movement;
pub mod collision;
pub mod interaction;
pub mod physics;
pub mod hazards;
pub mod render;
