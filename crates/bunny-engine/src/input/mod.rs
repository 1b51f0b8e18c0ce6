pub mod bindings;
pub mod controls;
pub mod queue;
