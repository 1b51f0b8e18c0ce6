pub mod builtin;
pub mod descriptor;
pub mod progression;
pub mod world;
