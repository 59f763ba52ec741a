//! Input sampling systems (ECS)
//!
//! Переносят события хоста в компоненты персонажа. Работают в PreUpdate,
//! чтобы сэмпл этого кадра видели и FixedUpdate (integrator), и Update
//! (facing + bob) того же кадра.

use bevy::prelude::*;

use crate::components::{Controlled, InteractState, MoveDirection, MovementConfig};
use crate::logger;

use super::events::{InteractPressed, InteractReleased, MoveInput, ReconfigureMovement};

/// Сэмплирует направленный input: последнее событие кадра побеждает
///
/// Никакой очереди и коалесинга: перед тиком важно только последнее
/// значение, промежуточные просто перетираются.
pub fn sample_move_input(
    mut events: EventReader<MoveInput>,
    mut query: Query<&mut MoveDirection, With<Controlled>>,
) {
    for event in events.read() {
        for mut input in query.iter_mut() {
            // Verbatim: без нормализации и NaN-санитизации
            input.vector = event.direction;
        }
    }
}

/// Обрабатывает press/release кнопки interact
///
/// Только мутация флага + лог. Диспетчеризация взаимодействия (двери, NPC)
/// остаётся за хостом.
pub fn sample_interact_input(
    mut pressed: EventReader<InteractPressed>,
    mut released: EventReader<InteractReleased>,
    mut query: Query<&mut InteractState, With<Controlled>>,
) {
    // Press и release обрабатываются в порядке прихода внутри своего типа;
    // между типами порядок фиксированный: сначала press, потом release.
    for _ in pressed.read() {
        for mut state in query.iter_mut() {
            state.active = true;
        }
        logger::log("🎮 Interact pressed");
    }
    for _ in released.read() {
        for mut state in query.iter_mut() {
            state.active = false;
        }
        logger::log("🎮 Interact released");
    }
}

/// Горячая замена конфига движения
pub fn apply_reconfigure(
    mut events: EventReader<ReconfigureMovement>,
    mut query: Query<&mut MovementConfig, With<Controlled>>,
) {
    for event in events.read() {
        for mut config in query.iter_mut() {
            *config = event.config;
        }
        logger::log_info(&format!("⚙️ Movement reconfigured: {:?}", event.config));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_sample_wins() {
        // Очереди нет: каждое событие кадра перетирает предыдущее
        let mut world = World::new();
        world.init_resource::<Events<MoveInput>>();
        let entity = world.spawn(Controlled).id();

        world.send_event(MoveInput {
            direction: Vec2::new(1.0, 0.0),
        });
        world.send_event(MoveInput {
            direction: Vec2::new(0.0, 1.0),
        });
        world.send_event(MoveInput {
            direction: Vec2::new(-0.5, -0.5),
        });

        let mut schedule = Schedule::default();
        schedule.add_systems(sample_move_input);
        schedule.run(&mut world);

        let input = world.get::<MoveDirection>(entity).unwrap();
        assert_eq!(input.vector, Vec2::new(-0.5, -0.5));
    }

    #[test]
    fn test_press_then_release_within_one_frame() {
        let mut world = World::new();
        world.init_resource::<Events<InteractPressed>>();
        world.init_resource::<Events<InteractReleased>>();
        let entity = world.spawn(Controlled).id();

        world.send_event(InteractPressed);
        world.send_event(InteractReleased);

        let mut schedule = Schedule::default();
        schedule.add_systems(sample_interact_input);
        schedule.run(&mut world);

        // Оба события в одном кадре: release применяется последним
        let state = world.get::<InteractState>(entity).unwrap();
        assert!(!state.active);
    }
}
