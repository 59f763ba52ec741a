//! Input module: события хоста → компоненты персонажа
//!
//! Хост шлёт события через `World::send_event` ДО `app.update()`,
//! sampling systems применяют их в PreUpdate того же кадра.

use bevy::prelude::*;

pub mod events;
pub mod systems;

pub use events::{InteractPressed, InteractReleased, MoveInput, ReconfigureMovement};
pub use systems::{apply_reconfigure, sample_interact_input, sample_move_input};

/// Input Plugin
///
/// Порядок выполнения (PreUpdate):
/// 1. sample_move_input — направление (последнее событие кадра побеждает)
/// 2. sample_interact_input — флаг interact
/// 3. apply_reconfigure — горячая замена конфига
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        // Регистрация событий
        app.add_event::<MoveInput>()
            .add_event::<InteractPressed>()
            .add_event::<InteractReleased>()
            .add_event::<ReconfigureMovement>();

        // PreUpdate: раньше и FixedUpdate, и Update текущего кадра
        app.add_systems(
            PreUpdate,
            (sample_move_input, sample_interact_input, apply_reconfigure).chain(),
        );
    }
}
