//! Компоненты визуальной части: Visual, RestPose, Facing
//!
//! Визуал — это child entity с локальным Transform. Тело двигается по миру,
//! спрайт поверх него поворачивается и покачивается, не влияя на физику.

use bevy::prelude::*;

/// Маркер визуальной части персонажа (спрайт-риг)
///
/// Вешается на child entity тела. Автоматически добавляет RestPose и Facing.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
#[require(RestPose, Facing)]
pub struct Visual;

/// Исходная локальная позиция визуала
///
/// Инвариант: захватывается ОДИН РАЗ при появлении entity и дальше не
/// меняется. Bob-анимация качает Transform вокруг rest-позиции, а при
/// остановке возвращает его к ней.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct RestPose {
    pub translation: Vec3,
}

/// Текущий угол разворота спрайта (градусы)
///
/// Зеркалит Z-rotation визуального Transform: системы пишут оба значения
/// вместе. Держим угол отдельным полем, чтобы шаги поворота считались
/// в градусах без обратного разбора кватерниона.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Facing {
    pub degrees: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visual_requires_pose_components() {
        let mut world = World::new();
        let entity = world.spawn(Visual).id();

        assert!(world.get::<RestPose>(entity).is_some());
        assert!(world.get::<Facing>(entity).is_some());
    }

    #[test]
    fn test_facing_starts_at_zero() {
        assert_eq!(Facing::default().degrees, 0.0);
    }
}
