//! Performance tests for the world loop

use flying_dragon::{DragonResult, FrameInput, GameConfig, TickOutcome, WorldState};
use std::time::Instant;

#[test]
fn test_world_tick_performance() -> DragonResult<()> {
    let config = GameConfig {
        cloud_count: 50,
        obstacle_count: 20,
        ..GameConfig::default()
    };

    let start = Instant::now();
    let mut frames = 0u32;

    // Restart whenever the dragon crashes so every iteration does real work
    let mut seed = 0;
    let mut world = WorldState::new(config.clone(), seed)?;
    while frames < 10_000 {
        let input = FrameInput {
            jump: frames % 30 == 0,
            descend: false,
        };
        if world.tick(&input) != TickOutcome::Running {
            seed += 1;
            world = WorldState::new(config.clone(), seed)?;
        }
        frames += 1;
    }

    let elapsed = start.elapsed();
    let avg_frame_time = elapsed / frames;

    println!("Average world tick time: {:?}", avg_frame_time);

    // A tick has to fit comfortably inside a 60 Hz frame
    assert!(
        avg_frame_time.as_millis() < 2,
        "World tick too slow: {:?}",
        avg_frame_time
    );

    Ok(())
}
