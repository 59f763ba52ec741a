//! DUSTWALK Simulation Core
//!
//! Headless ECS-симуляция движения 2D персонажа на Bevy 0.16.
//!
//! HYBRID ARCHITECTURE:
//! - ECS = simulation layer (locomotion, facing, walk bob)
//! - Host = tactical layer (рендер, ввод, сцена)
//!
//! Хост владеет циклом: шлёт input events через `World::send_event` и
//! дергает `app.update()` раз в кадр. Render-tick логика живёт в Update,
//! физика — в FixedUpdate (60Hz). Сам крейт таймингом не владеет.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod components;
pub mod input;
pub mod locomotion;
pub mod logger;
pub mod visuals;

// Re-export базовых компонентов для удобства
pub use components::*;
pub use input::{InputPlugin, InteractPressed, InteractReleased, MoveInput, ReconfigureMovement};
pub use locomotion::{character_collision_groups, spawn_character, LocomotionPlugin};
pub use visuals::{walk_bob_offset, VisualsPlugin, BOB_INPUT_EPSILON, FACING_DEADZONE};

// Re-export logger API (хосты инжектят свой printer)
pub use logger::{
    init_logger, log, log_error, log_info, log_warning, set_log_level, set_logger,
    set_logger_if_needed, LogLevel, LogPrinter,
};

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        // Fixed timestep 60Hz для simulation tick (легче считать интервалы)
        app.insert_resource(Time::<Fixed>::from_hz(60.0));

        // Детерминистичный RNG: seed по умолчанию, но не перетираем
        // seed, выбранный хостом (create_headless_app вставляет свой)
        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(42));
        }

        // Подсистемы: input → физика → визуал
        app.add_plugins((InputPlugin, LocomotionPlugin, VisualsPlugin));
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    logger::init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_hz(60.0)); // 60Hz FixedUpdate

    app
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    // Собираем все компоненты в детерминированный формат
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    // Сериализуем в байты через Debug (простейший способ)
    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
