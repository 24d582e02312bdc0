//! Headless Bevy integration tests.
//!
//! These tests verify the simulation plugin drives the session correctly
//! without a GPU: event handling, one tick per frame, and end-of-run
//! freezing.

use bevy::math::DVec2;
use bevy::prelude::*;
use swingby::physics::{ResetRequested, SimulationPlugin, StartRequested};
use swingby::session::{RunState, Session};

fn create_sim_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(SimulationPlugin);
    app
}

/// Arm the session on a head-on course from the bottom edge.
fn arm_head_on(app: &mut App) {
    let mut session = app.world_mut().resource_mut::<Session>();
    let bottom = DVec2::new(0.0, -session.profile().half_extents().y);
    session.set_launch(bottom, DVec2::new(0.0, 1.0));
}

fn send_start(app: &mut App) {
    app.world_mut()
        .resource_mut::<Events<StartRequested>>()
        .send(StartRequested);
}

fn send_reset(app: &mut App) {
    app.world_mut()
        .resource_mut::<Events<ResetRequested>>()
        .send(ResetRequested);
}

#[test]
fn test_session_resource_initializes() {
    let mut app = create_sim_app();
    app.update();

    let session = app.world().resource::<Session>();
    assert_eq!(session.state(), RunState::Idle);
    assert_eq!(session.profile().id, "classic");
    assert!(session.trail().is_empty());
}

#[test]
fn test_start_event_begins_run_and_ticks() {
    let mut app = create_sim_app();
    app.update();

    arm_head_on(&mut app);
    send_start(&mut app);
    app.update();

    // The start handler runs before the tick system in the same frame,
    // so the starting frame already advances the clock by one tick
    let session = app.world().resource::<Session>();
    assert_eq!(session.state(), RunState::Running);
    assert_eq!(session.clock(), session.profile().tick_dt);
    assert_eq!(session.trail().len(), 1);
}

#[test]
fn test_start_event_ignored_when_idle() {
    let mut app = create_sim_app();
    app.update();

    send_start(&mut app);
    app.update();

    let session = app.world().resource::<Session>();
    assert_eq!(session.state(), RunState::Idle);
    assert_eq!(session.clock(), 0.0);
}

#[test]
fn test_one_tick_per_frame() {
    let mut app = create_sim_app();
    app.update();
    arm_head_on(&mut app);
    send_start(&mut app);
    app.update();

    let clock_after_start = app.world().resource::<Session>().clock();
    for _ in 0..5 {
        app.update();
    }

    let session = app.world().resource::<Session>();
    assert_eq!(
        session.clock(),
        clock_after_start + 5.0 * session.profile().tick_dt,
        "Each frame must advance exactly one tick"
    );
    assert_eq!(session.trail().len(), 6);
}

#[test]
fn test_reset_event_restores_idle() {
    let mut app = create_sim_app();
    app.update();
    arm_head_on(&mut app);
    send_start(&mut app);
    for _ in 0..5 {
        app.update();
    }

    send_reset(&mut app);
    app.update();

    let session = app.world().resource::<Session>();
    assert_eq!(session.state(), RunState::Idle);
    assert_eq!(session.clock(), 0.0);
    assert!(session.trail().is_empty());
    assert_eq!(*session.probe(), session.profile().probe_body());
}

#[test]
fn test_ended_run_stops_ticking() {
    let mut app = create_sim_app();
    app.update();
    arm_head_on(&mut app);
    send_start(&mut app);

    // Head-on course: drive frames until the crash lands
    let mut ended = false;
    for _ in 0..400 {
        app.update();
        if app.world().resource::<Session>().state() == RunState::Ended {
            ended = true;
            break;
        }
    }
    assert!(ended, "Head-on run should end within 400 frames");

    let clock_at_end = app.world().resource::<Session>().clock();
    for _ in 0..3 {
        app.update();
    }

    let session = app.world().resource::<Session>();
    assert_eq!(session.clock(), clock_at_end, "Ended runs must freeze");
    assert!(session.outcome().is_some());
}
