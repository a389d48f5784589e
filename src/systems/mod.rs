pub mod body_pool;
pub mod collision_audio;
pub mod engine;
pub mod impulse;
pub mod rigid_body;
pub mod rigid_body_system;
pub mod trajectory;
