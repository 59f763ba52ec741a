//! Разворот спрайта к направлению движения
//!
//! Спрайт не снапается к новому направлению: угол идёт к цели шагами,
//! ограниченными rotation_speed * delta, по кратчайшей дуге.

use bevy::{ecs::hierarchy::ChildOf, prelude::*};

use crate::components::{Facing, MoveDirection, MovementConfig, Visual};

/// Deadzone по модулю направления: ниже неё спрайт замирает
/// в последнем развороте (никакого возврата к default facing)
pub const FACING_DEADZONE: f32 = 0.1;

/// Спрайт нарисован "носом вверх": поправка оси forward
pub const SPRITE_FORWARD_OFFSET_DEG: f32 = -90.0;

/// Шаг угла к цели по кратчайшей дуге, не больше max_step градусов
///
/// Без overshoot'а: если до цели меньше max_step, возвращает ровно цель.
pub fn step_toward_angle(current: f32, target: f32, max_step: f32) -> f32 {
    // Разница в (-180, 180]: дуга через ближайшую сторону
    let mut diff = (target - current).rem_euclid(360.0);
    if diff > 180.0 {
        diff -= 360.0;
    }

    current + diff.clamp(-max_step, max_step)
}

/// Система разворота визуала (render tick)
///
/// Пишет Facing.degrees и Z-rotation локального Transform вместе:
/// Facing остаётся источником угла для следующего шага, кватернион
/// обратно не разбираем.
pub fn update_facing(
    mut visuals: Query<(&ChildOf, &mut Facing, &mut Transform), With<Visual>>,
    bodies: Query<(&MovementConfig, &MoveDirection)>,
    time: Res<Time>,
) {
    let delta = time.delta_secs();

    for (child_of, mut facing, mut transform) in visuals.iter_mut() {
        // Guard: визуал без тела-родителя с movement-набором
        let Ok((config, input)) = bodies.get(child_of.parent()) else {
            continue;
        };

        // Разворот живёт только выше deadzone; на границе и ниже замираем
        // в последнем угле (условие позитивное: NaN-вход тоже замирает)
        if input.vector.length_squared() > FACING_DEADZONE * FACING_DEADZONE {
            let target =
                input.vector.y.atan2(input.vector.x).to_degrees() + SPRITE_FORWARD_OFFSET_DEG;
            let max_step = config.rotation_speed * delta;

            facing.degrees = step_toward_angle(facing.degrees, target, max_step);
            transform.rotation = Quat::from_rotation_z(facing.degrees.to_radians());
        }
    }
}
