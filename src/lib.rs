pub mod agent;
pub mod game_repr;
pub mod menu;
pub mod orchestrator;
