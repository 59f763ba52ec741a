//! Input events от хоста
//!
//! События генерируются хостом (engine bridge, нативный клиент, headless
//! runner) через `World::send_event` и обрабатываются ECS systems.

use bevy::prelude::{Event, Vec2};

use crate::components::MovementConfig;

/// Направленный input - хост шлёт при каждом изменении стика/клавиш
///
/// # Архитектура
/// - Emit: хост перед `app.update()` (раз в кадр или по изменению)
/// - Consume: sample_move_input (PreUpdate)
///
/// # Coordinate System
/// Логическое 2D направление, независимое от конвенций хоста:
/// - `x`: -1.0 (влево) → +1.0 (вправо)
/// - `y`: -1.0 (вниз) → +1.0 (вверх)
///
/// # Examples
/// - вправо: `Vec2(1, 0)`
/// - вверх-вправо по диагонали: `Vec2(0.707, 0.707)` (normalized)
/// - стик отпущен: `Vec2::ZERO`
///
/// # Примечание
/// Вектор сохраняется verbatim: нормализация выполняется integrator'ом,
/// так что слать сырой вектор клавиш тоже допустимо.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct MoveInput {
    pub direction: Vec2,
}

/// Кнопка interact нажата (just_pressed)
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct InteractPressed;

/// Кнопка interact отпущена (just_released)
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct InteractReleased;

/// Горячая замена конфига движения
///
/// Единственный способ поменять MovementConfig после spawn'а:
/// системы движения трактуют конфиг как immutable.
#[derive(Event, Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct ReconfigureMovement {
    pub config: MovementConfig,
}
