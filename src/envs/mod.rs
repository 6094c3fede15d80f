pub mod action;
pub mod grid_world;
