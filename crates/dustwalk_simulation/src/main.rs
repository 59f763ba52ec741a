//! Headless прогон DUSTWALK
//!
//! Играет роль хоста: скриптованная прогулка персонажа по случайным
//! направлениям (seeded) с фиксированным кадром 16ms, без рендера.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rand::Rng;

use dustwalk_simulation::{
    create_headless_app, spawn_character, DeterministicRng, InteractPressed, InteractReleased,
    MoveInput, MovementConfig, ReconfigureMovement, SimulationPlugin,
};

fn main() {
    let seed = 42;
    println!("Starting DUSTWALK headless walk (seed: {})", seed);

    let mut app = create_headless_app(seed);
    app.add_plugins(SimulationPlugin);

    // Фиксированный кадр 16ms: прогон воспроизводим между запусками
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(16)));

    let character = {
        let world = app.world_mut();
        let mut commands = world.commands();
        spawn_character(&mut commands, Vec3::ZERO, MovementConfig::default())
    };
    app.world_mut().flush();

    for tick in 0..600u32 {
        // Раз в секунду (60 кадров) выбираем новое случайное направление
        if tick % 60 == 0 {
            let heading = {
                let mut rng = app.world_mut().resource_mut::<DeterministicRng>();
                let angle = rng.rng.gen_range(0.0..std::f32::consts::TAU);
                Vec2::from_angle(angle)
            };
            app.world_mut().send_event(MoveInput { direction: heading });
        }

        // Подержим interact полсекунды в середине прогулки
        if tick == 200 {
            app.world_mut().send_event(InteractPressed);
        }
        if tick == 230 {
            app.world_mut().send_event(InteractReleased);
        }

        // Горячая смена скорости на второй половине
        if tick == 300 {
            app.world_mut().send_event(ReconfigureMovement {
                config: MovementConfig {
                    move_speed: 7.5,
                    ..Default::default()
                },
            });
        }

        app.update();

        if tick % 100 == 0 {
            if let Some(transform) = app.world().get::<Transform>(character) {
                println!(
                    "Tick {}: pos = ({:.2}, {:.2})",
                    tick, transform.translation.x, transform.translation.y
                );
            }
        }
    }

    println!("Walk complete!");
}
