//! Вертикальное покачивание при ходьбе (walk bob)
//!
//! Два режима, переключаются каждый кадр по модулю направления, без
//! гистерезиса и событий:
//! - Moving: синус от ГЛОБАЛЬНОГО elapsed clock'а. Фазового счётчика нет,
//!   поэтому повторный старт движения не сбрасывает волну.
//! - Idle: экспоненциальный возврат к rest-позиции (clamped lerp с
//!   фактором delta * bob_speed за кадр). Скорость возврата зависит от
//!   frame rate, bob_speed ускоряет и волну, и возврат.

use bevy::{ecs::hierarchy::ChildOf, prelude::*};

use crate::components::{MoveDirection, MovementConfig, RestPose, Visual};

/// Порог "персонаж движется" для bob-анимации
/// (меньше deadzone разворота: покачивание стартует раньше, чем спрайт крутится)
pub const BOB_INPUT_EPSILON: f32 = 0.01;

/// Смещение волны в момент elapsed (чистая формула, без состояния)
pub fn walk_bob_offset(elapsed: f32, bob_speed: f32, bob_height: f32) -> f32 {
    (elapsed * bob_speed).sin() * bob_height
}

/// Система bob-анимации (render tick)
///
/// Трогает только локальный Y визуала: X/Z и rest-позиция не мутируются.
pub fn animate_walk_bob(
    mut visuals: Query<(&ChildOf, &RestPose, &mut Transform), With<Visual>>,
    bodies: Query<(&MovementConfig, &MoveDirection)>,
    time: Res<Time>,
) {
    let elapsed = time.elapsed_secs();
    let delta = time.delta_secs();

    for (child_of, rest, mut transform) in visuals.iter_mut() {
        // Guard: визуал без тела-родителя с movement-набором
        let Ok((config, input)) = bodies.get(child_of.parent()) else {
            continue;
        };

        if input.vector.length_squared() > BOB_INPUT_EPSILON * BOB_INPUT_EPSILON {
            // Moving: позиция волны зависит только от глобального clock'а
            transform.translation.y = rest.translation.y
                + walk_bob_offset(elapsed, config.bob_speed, config.bob_height);
        } else {
            // Idle: каждый кадр съедаем долю оставшегося расстояния до rest.
            // min(1.0) защищает от overshoot'а при больших bob_speed * delta.
            let t = (delta * config.bob_speed).min(1.0);
            transform.translation.y += (rest.translation.y - transform.translation.y) * t;
        }
    }
}
