//! Camera fly-through.
//!
//! Builds a three-part shot on a single camera and drives it in real time:
//! a dolly towards the subject, an orbit combined with a zoom, then a crane
//! move that lifts eye and look-at point together.
//!
//! Run with `RUST_LOG=debug cargo run --example camera_flythrough` to see
//! runners complete.

use std::f32::consts::PI;
use std::thread;
use std::time::Duration;

use glam::Vec3;
use myth_motion::prelude::*;
use myth_motion::target::CameraUniforms;
use myth_motion::utils::FrameTimer;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let camera = target::shared(
        Camera::new_perspective(50.0, 16.0 / 9.0, 0.1, 200.0).with_view(
            Vec3::new(0.0, 2.0, 20.0),
            Vec3::ZERO,
            Vec3::Y,
        ),
    );

    let dolly = CameraActionBuilder::new()
        .translate(Vec3::new(0.0, 0.0, -12.0))
        .build()?;

    let orbit = CameraActionBuilder::new().orbit(Vec3::Y, PI).build()?;
    let zoom = CameraActionBuilder::new()
        .field_of_view(-20.0_f32.to_radians())
        .build_perspective()?;

    let crane = CameraActionBuilder::new()
        .translate_view(Vec3::new(0.0, 4.0, 0.0))
        .build()?;

    let mut reveal = ParallelRunner::new(3.0)?;
    reveal.add_action_with_target(orbit, camera.clone(), 3.0)?;
    reveal.add_action_with_target(zoom, camera.clone(), 3.0)?;

    let mut shot = SequenceRunner::new(7.0)?;
    shot.add_action_with_target(dolly, camera.clone(), 2.0)?;
    shot.add_runner(reveal)?;
    shot.add_action_with_target(crane, camera.clone(), 2.0)?;

    let mut animator = Animator::new();
    animator.play(shot);

    let mut timer = FrameTimer::new();
    let mut uniforms = CameraUniforms::default();

    while !animator.is_idle() {
        thread::sleep(Duration::from_millis(16));
        animator.update(timer.tick());

        let camera = camera.read();
        camera.write_matrices(&mut uniforms);

        if timer.frame_count() % 30 == 0 {
            log::info!(
                "t={:.2}s eye={:.2} look_at={:.2} fov={:.1}deg",
                timer.animated_seconds(),
                camera.position(),
                camera.target(),
                camera.fov().to_degrees(),
            );
        }
    }

    let camera = camera.read();
    log::info!(
        "Shot finished after {} frames: eye={:.2} look_at={:.2} fov={:.1}deg",
        timer.frame_count(),
        camera.position(),
        camera.target(),
        camera.fov().to_degrees(),
    );

    Ok(())
}
