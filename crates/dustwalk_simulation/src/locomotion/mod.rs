//! Kinematic движение персонажа
//!
//! Архитектура:
//! - Rapier для коллизий (RigidBody::KinematicPositionBased)
//! - Custom velocity integration (не используем Rapier forces)
//! - Velocity = normalize(direction) * move_speed, без ramp'ов
//!
//! Детерминизм: fixed timestep (60Hz), enhanced-determinism у Rapier

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::components::{Controlled, Locomotion, MoveDirection, MovementConfig, Visual};
use crate::logger;

/// Система расчёта velocity из направленного input
///
/// Работает в FixedUpdate (60Hz). Присваивание мгновенное: никакого
/// acceleration ramp, внешние силы перетираются каждый тик.
/// normalize_or_zero убирает диагональный бонус скорости и даёт
/// нулевую velocity на нулевом входе.
pub fn apply_move_direction(
    mut query: Query<(&MovementConfig, &MoveDirection, &mut Locomotion), With<Controlled>>,
) {
    for (config, input, mut body) in query.iter_mut() {
        body.velocity = input.vector.normalize_or_zero() * config.move_speed;
    }
}

/// Система синхронизации нашей velocity с Rapier
///
/// Rapier сам не двигает KinematicPositionBased тела, но velocity нужна
/// ему для contact resolution. Интеграция остаётся за нами.
pub fn sync_body_velocity(
    mut query: Query<(&Locomotion, &mut Velocity), With<Controlled>>,
) {
    for (body, mut rapier_velocity) in query.iter_mut() {
        rapier_velocity.linvel = body.velocity;
    }
}

/// Система интеграции velocity → Transform
///
/// Напрямую применяет Locomotion.velocity к Transform.translation.
/// Работает и без Rapier plugin'а (headless симуляция): rapier, если
/// подключен хостом, следует за transform'ом и не двигает тело сам.
pub fn integrate_locomotion(
    mut query: Query<(&Locomotion, &mut Transform), With<Controlled>>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (body, mut transform) in query.iter_mut() {
        // position += velocity * dt (движение в плоскости XY, Z не трогаем)
        transform.translation += (body.velocity * delta).extend(0.0);
    }
}

/// Plugin движения
///
/// Регистрирует системы в FixedUpdate до rapier physics step.
pub struct LocomotionPlugin;

impl Plugin for LocomotionPlugin {
    fn build(&self, app: &mut App) {
        use bevy_rapier2d::plugin::PhysicsSet;

        app.add_systems(
            FixedUpdate,
            (
                apply_move_direction,
                sync_body_velocity,
                integrate_locomotion,
            )
                .chain() // Последовательное выполнение
                .before(PhysicsSet::SyncBackend), // До rapier physics step
        );
    }
}

/// Collision groups персонажей (персонажи коллайдят со всем миром)
pub fn character_collision_groups() -> CollisionGroups {
    CollisionGroups::new(Group::GROUP_1, Group::ALL)
}

/// Spawn helper для создания управляемого персонажа
///
/// Создаёт тело с полным набором компонентов плюс child entity визуала:
/// - Тело: Transform + Controlled (Required: конфиг, input, locomotion)
///   + Rapier (RigidBody, Collider, Velocity, CollisionGroups)
/// - Визуал: локальный Transform + Visual (Required: RestPose, Facing)
///
/// Возвращает entity тела; визуал доступен через hierarchy.
pub fn spawn_character(
    commands: &mut Commands,
    position: Vec3,
    config: MovementConfig,
) -> Entity {
    let body = commands
        .spawn((
            // Bevy transform
            Transform::from_translation(position),

            // Наши компоненты (маркер тянет остальное через require)
            Controlled,
            config,

            // Rapier physics
            RigidBody::KinematicPositionBased,
            Collider::ball(0.4), // Радиус 0.4m (top-down силуэт)
            Velocity::default(),
            character_collision_groups(),
        ))
        .with_children(|parent| {
            // Спрайт-риг: bob и facing живут на локальном Transform
            parent.spawn((Transform::default(), Visual));
        })
        .id();

    logger::log(&format!("🚶 Character spawned at {:?} (body {:?})", position, body));

    body
}
