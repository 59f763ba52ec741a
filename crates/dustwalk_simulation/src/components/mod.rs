//! ECS Components для игровых entity
//!
//! Организация по доменам:
//! - character: управляемый персонаж (Controlled, InteractState)
//! - movement: конфиг и состояние движения (MovementConfig, MoveDirection, Locomotion)
//! - visual: спрайт-риг (Visual, RestPose, Facing)

pub mod character;
pub mod movement;
pub mod visual;

// Re-exports для удобного импорта
pub use character::*;
pub use movement::*;
pub use visual::*;
