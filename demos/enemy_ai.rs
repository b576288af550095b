//! Enemy AI State Machine
//!
//! This example drives a small game enemy through Wait, Chase and Attack.
//!
//! Key concepts:
//! - One builder, several independent enemies
//! - Guarded triggers reading external state
//! - Custom actions that decide the transition themselves
//! - Per-frame updates and DOT export
//!
//! Run with: RUST_LOG=statecraft=debug cargo run --example enemy_ai

use statecraft::{key_enum, FsmBuilder};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

key_enum! {
    enum AiState {
        Wait,
        Chase,
        Attack,
    }
}

key_enum! {
    enum AiEvent {
        PlayerFound,
        PlayerLost,
        PlayerNearby,
        PlayerFar,
    }
}

#[derive(Default, Debug)]
struct Blackboard {
    frames_attacking: u32,
    chases: u32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Enemy AI State Machine ===\n");

    let weapon_ready = Arc::new(AtomicBool::new(true));
    let ready = Arc::clone(&weapon_ready);

    let mut builder = FsmBuilder::<AiState, AiEvent, Blackboard>::new();
    builder
        .state(AiState::Wait)
        .on_command(AiEvent::PlayerFound, AiState::Chase)?;
    builder
        .state(AiState::Chase)
        .on_enter(|fsm| fsm.data_mut().chases += 1)
        .on_command_if(AiEvent::PlayerNearby, AiState::Attack, move || {
            ready.load(Ordering::SeqCst)
        })?
        .on_command_with(AiEvent::PlayerLost, |fsm| {
            println!("  [{}] lost sight, giving up", fsm.name());
            fsm.switch_state(AiState::Wait)
        })?;
    builder
        .state(AiState::Attack)
        .on_update(|fsm| fsm.data_mut().frames_attacking += 1)
        .on_leave(|fsm| println!("  [{}] stops attacking", fsm.name()))
        .on_command(AiEvent::PlayerFar, AiState::Chase)?
        .on_command(AiEvent::PlayerLost, AiState::Wait)?;
    builder.on_transition(|fsm, from, to| {
        println!("  [{}] {from} -> {to}", fsm.name());
    });

    let mut grunt = builder.build("grunt", AiState::Wait);
    let mut sniper = builder.build("sniper", AiState::Wait);

    println!("Driving grunt:");
    for event in [
        AiEvent::PlayerFound,
        AiEvent::PlayerLost,
        AiEvent::PlayerFound,
        AiEvent::PlayerNearby,
        AiEvent::PlayerFar,
        AiEvent::PlayerNearby,
    ] {
        let outcome = grunt.fire_command(event)?;
        println!("  {event}: {outcome:?}");
        grunt.update();
    }

    println!("\nDriving sniper with weapon jammed:");
    weapon_ready.store(false, Ordering::SeqCst);
    for event in [AiEvent::PlayerFound, AiEvent::PlayerNearby] {
        let outcome = sniper.fire_command(event)?;
        println!("  {event}: {outcome:?}");
    }

    println!("\nFinal states:");
    println!("  grunt:  {} {:?}", grunt.current_state(), grunt.data());
    println!("  sniper: {} {:?}", sniper.current_state(), sniper.data());

    println!("\nTopology:\n{}", builder.to_dot_graph());

    println!("=== Example Complete ===");
    Ok(())
}
