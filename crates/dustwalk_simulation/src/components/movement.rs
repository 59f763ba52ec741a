//! Movement компоненты: конфиг, направленный input, скорость тела

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Конфигурация движения персонажа
///
/// Задаётся один раз при spawn'е. Системы читают конфиг как read-only;
/// менять его на лету можно только через event ReconfigureMovement
/// (никаких прямых мутаций из gameplay кода).
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct MovementConfig {
    /// Скорость движения (units/s)
    pub move_speed: f32,
    /// Предел угловой скорости разворота спрайта (deg/s)
    pub rotation_speed: f32,
    /// Амплитуда вертикального покачивания при ходьбе
    pub bob_height: f32,
    /// Частота покачивания; она же скорость возврата в rest при остановке
    pub bob_speed: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            move_speed: 5.0,       // 5 units/s (средняя скорость ходьбы)
            rotation_speed: 200.0, // быстрый, но видимый глазу разворот
            bob_height: 0.1,
            bob_speed: 10.0,
        }
    }
}

/// Последний направленный input от хоста
///
/// Хранится как пришёл (verbatim): нормализация происходит в integrator'е,
/// поэтому частично отклонённый стик здесь выглядит как вектор длиной < 1.
/// Пишет только input sampler; locomotion и visuals только читают.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct MoveDirection {
    pub vector: Vec2,
}

/// Авторитетная скорость тела (units/s)
///
/// Velocity интегрируем сами в FixedUpdate; rapier получает копию
/// и отвечает только за коллизии.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Locomotion {
    pub velocity: Vec2,
}
