//! Базовые компоненты персонажа: Controlled, InteractState

use bevy::prelude::*;

use super::movement::{Locomotion, MoveDirection, MovementConfig};

/// Персонаж под управлением хоста (player-controlled)
///
/// Автоматически добавляет MovementConfig, MoveDirection, Locomotion,
/// InteractState через Required Components: хосту достаточно заспавнить
/// один маркер, чтобы получить рабочий movement-набор.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
#[require(MovementConfig, MoveDirection, Locomotion, InteractState)]
pub struct Controlled;

/// Флаг "персонаж удерживает interact"
///
/// Ставится/снимается input sampler'ом по press/release событиям.
/// Потребителя у флага пока нет: протокол взаимодействия (двери, NPC)
/// живёт у хоста, здесь только состояние кнопки.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct InteractState {
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_controlled_requires_movement_kit() {
        // Required Components: один маркер разворачивается в полный набор
        let mut world = World::new();
        let entity = world.spawn(Controlled).id();

        assert!(world.get::<MovementConfig>(entity).is_some());
        assert!(world.get::<MoveDirection>(entity).is_some());
        assert!(world.get::<Locomotion>(entity).is_some());
        assert!(world.get::<InteractState>(entity).is_some());
    }

    #[test]
    fn test_explicit_config_wins_over_required_default() {
        let mut world = World::new();
        let config = MovementConfig {
            move_speed: 8.0,
            ..Default::default()
        };
        let entity = world.spawn((Controlled, config)).id();

        let stored = world.get::<MovementConfig>(entity).unwrap();
        assert_eq!(stored.move_speed, 8.0, "явный конфиг перетирает default");
    }

    #[test]
    fn test_interact_state_default_inactive() {
        assert!(!InteractState::default().active);
    }
}
