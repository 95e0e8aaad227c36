pub mod events;
pub mod preferences;
pub mod state;
