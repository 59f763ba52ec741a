//! Визуальные системы спрайт-рига: разворот и walk bob
//!
//! Работают в Update (render tick): читают направление с тела-родителя,
//! пишут ЛОКАЛЬНЫЙ Transform child-визуала. Мировую позицию двигает
//! locomotion в FixedUpdate, слои не пересекаются.

use bevy::prelude::*;

pub mod bobbing;
pub mod facing;


pub use bobbing::{animate_walk_bob, walk_bob_offset, BOB_INPUT_EPSILON};
pub use facing::{step_toward_angle, update_facing, FACING_DEADZONE, SPRITE_FORWARD_OFFSET_DEG};

use crate::components::RestPose;

/// Одноразовый захват rest-позиции визуала
///
/// Added-фильтр срабатывает на кадре появления компонента: копируем
/// текущий локальный Transform и больше RestPose не трогаем.
pub fn capture_rest_pose(mut query: Query<(&Transform, &mut RestPose), Added<RestPose>>) {
    for (transform, mut rest) in query.iter_mut() {
        rest.translation = transform.translation;
    }
}

/// Plugin визуальных систем
///
/// Порядок выполнения (Update):
/// 1. capture_rest_pose — захват rest до первого bob'а
/// 2. update_facing — разворот к направлению движения
/// 3. animate_walk_bob — вертикальное покачивание
pub struct VisualsPlugin;

impl Plugin for VisualsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (capture_rest_pose, update_facing, animate_walk_bob).chain(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rest_pose_captured_from_spawn_transform() {
        let mut world = World::new();
        let spawn_at = Vec3::new(0.0, 0.5, 0.0);
        let entity = world
            .spawn((Transform::from_translation(spawn_at), crate::components::Visual))
            .id();

        let mut schedule = Schedule::default();
        schedule.add_systems(capture_rest_pose);
        schedule.run(&mut world);

        let rest = world.get::<RestPose>(entity).unwrap();
        assert_eq!(rest.translation, spawn_at);
    }

    #[test]
    fn test_rest_pose_not_recaptured() {
        let mut world = World::new();
        let entity = world
            .spawn((Transform::from_xyz(0.0, 0.5, 0.0), crate::components::Visual))
            .id();

        let mut schedule = Schedule::default();
        schedule.add_systems(capture_rest_pose);
        schedule.run(&mut world);

        // Визуал уехал (bob), rest должен остаться прежним
        world.get_mut::<Transform>(entity).unwrap().translation.y = 9.0;
        schedule.run(&mut world);

        let rest = world.get::<RestPose>(entity).unwrap();
        assert_eq!(rest.translation.y, 0.5, "повторный захват запрещён");
    }
}
