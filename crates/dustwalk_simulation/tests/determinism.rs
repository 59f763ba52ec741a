//! Тесты детерминизма
//!
//! Проверяем что прогулка с одинаковым seed и фиксированным кадром даёт
//! идентичные снепшоты мира от прогона к прогону.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rand::Rng;

use dustwalk_simulation::{
    create_headless_app, spawn_character, world_snapshot, DeterministicRng, Locomotion, MoveInput,
    MovementConfig, SimulationPlugin,
};

/// Запускает скриптованную прогулку и возвращает snapshot мира
fn run_walk(seed: u64, tick_count: usize) -> Vec<u8> {
    let mut app = create_headless_app(seed);
    app.add_plugins(SimulationPlugin);

    // Кадр фиксируем вручную: без этого tick count зависит от wall clock
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(16)));

    {
        let world = app.world_mut();
        let mut commands = world.commands();
        spawn_character(&mut commands, Vec3::ZERO, MovementConfig::default());
    }
    app.world_mut().flush();

    // Каждые полсекунды новое случайное направление из seeded RNG
    for tick in 0..tick_count {
        if tick % 30 == 0 {
            let heading = {
                let mut rng = app.world_mut().resource_mut::<DeterministicRng>();
                let angle = rng.rng.gen_range(0.0..std::f32::consts::TAU);
                Vec2::from_angle(angle)
            };
            app.world_mut().send_event(MoveInput { direction: heading });
        }

        app.update();
    }

    // Снепшот позиций (тело + визуал) и скорости
    let mut snapshot = world_snapshot::<Transform>(app.world_mut());
    snapshot.extend(world_snapshot::<Locomotion>(app.world_mut()));
    snapshot
}

#[test]
fn test_determinism_same_seed() {
    const SEED: u64 = 12345;
    const TICK_COUNT: usize = 600;

    // Первый прогон
    let snapshot1 = run_walk(SEED, TICK_COUNT);

    // Второй прогон с тем же seed
    let snapshot2 = run_walk(SEED, TICK_COUNT);

    // Снепшоты должны быть идентичны
    assert_eq!(
        snapshot1, snapshot2,
        "Прогулка с одинаковым seed ({}) дала разные результаты!",
        SEED
    );
}

#[test]
fn test_determinism_multiple_runs() {
    const SEED: u64 = 42;
    const TICK_COUNT: usize = 300;

    // Запускаем 5 раз — все должны быть идентичны
    let snapshots: Vec<_> = (0..5).map(|_| run_walk(SEED, TICK_COUNT)).collect();

    // Все снепшоты должны совпадать с первым
    for (i, snapshot) in snapshots.iter().enumerate().skip(1) {
        assert_eq!(
            snapshots[0], *snapshot,
            "Прогон {} дал результат отличный от прогона 0",
            i
        );
    }
}

#[test]
fn test_different_seeds_diverge() {
    const TICK_COUNT: usize = 300;

    // Санити-чек: снепшот действительно зависит от маршрута,
    // а не константный
    let snapshot_a = run_walk(1, TICK_COUNT);
    let snapshot_b = run_walk(2, TICK_COUNT);

    assert_ne!(snapshot_a, snapshot_b, "разные seed дали одинаковую прогулку");
}
