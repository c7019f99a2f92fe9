//! Desktop viewer: stands in for the host page, feeding a synthetic scroll
//! signal (mouse wheel / keyboard) through the scroll mapper and driving the
//! animation tick once per frame.

use std::time::Instant;

use winit::{
    event::{ElementState, Event, KeyEvent, MouseScrollDelta, WindowEvent},
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

use scene_core::{
    black_hole_preset, driver, map_scroll, spiral_galaxy_preset, CameraDirector, Scene,
    SceneError, ScrollState, SECTION_COUNT,
};

mod mesh;
mod render;

/// Virtual page height standing in for the scroll container (six sections).
const PAGE_HEIGHT: f32 = 4800.0;
/// Pixels per wheel line / arrow key press.
const LINE_SCROLL: f32 = 120.0;

/// Owns the synthetic scroll source. Construction validates the container
/// height up front; release is simply drop. No retry polling.
struct ScrollTracker {
    offset: f32,
    height: f32,
    sections: usize,
}

impl ScrollTracker {
    fn new(height: f32, sections: usize) -> Result<Self, SceneError> {
        if !(height > 0.0) {
            return Err(SceneError::InvalidScrollHeight(height));
        }
        Ok(Self {
            offset: 0.0,
            height,
            sections,
        })
    }

    fn scroll_by(&mut self, delta_px: f32) {
        self.offset = (self.offset + delta_px).clamp(0.0, self.height);
    }

    fn jump_to(&mut self, offset_px: f32) {
        self.offset = offset_px.clamp(0.0, self.height);
    }

    fn state(&self) -> ScrollState {
        map_scroll(self.offset, self.height, self.sections)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let preset = if std::env::args().any(|a| a == "--galaxy") {
        spiral_galaxy_preset()
    } else {
        black_hole_preset()
    };
    log::info!("composing `{}` scene", preset.name);

    let mut scene = Scene::compose(&preset, 42)?;
    log::info!("{} particles across {} layers", scene.particle_count(), scene.layers().len());
    let mut camera = CameraDirector::new(preset.camera.clone());
    let mut tracker = ScrollTracker::new(PAGE_HEIGHT, SECTION_COUNT)?;

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(format!("Space Scene (native): {}", preset.name))
        .build(&event_loop)?;

    let mut gpu = pollster::block_on(render::GpuState::new(&window, &scene))?;

    let start = Instant::now();
    let mut last_frame = start;
    let mut last_section = usize::MAX;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } => gpu.resize(size),
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => elwt.exit(),
        Event::WindowEvent {
            event: WindowEvent::MouseWheel { delta, .. },
            ..
        } => match delta {
            MouseScrollDelta::LineDelta(_, y) => tracker.scroll_by(-y * LINE_SCROLL),
            MouseScrollDelta::PixelDelta(pos) => tracker.scroll_by(-pos.y as f32),
        },
        Event::WindowEvent {
            event:
                WindowEvent::KeyboardInput {
                    event:
                        KeyEvent {
                            physical_key: PhysicalKey::Code(code),
                            state: ElementState::Pressed,
                            ..
                        },
                    ..
                },
            ..
        } => match code {
            KeyCode::ArrowDown => tracker.scroll_by(LINE_SCROLL),
            KeyCode::ArrowUp => tracker.scroll_by(-LINE_SCROLL),
            KeyCode::PageDown => tracker.scroll_by(PAGE_HEIGHT / SECTION_COUNT as f32),
            KeyCode::PageUp => tracker.scroll_by(-PAGE_HEIGHT / SECTION_COUNT as f32),
            KeyCode::Home => tracker.jump_to(0.0),
            KeyCode::End => tracker.jump_to(PAGE_HEIGHT),
            KeyCode::Escape => elwt.exit(),
            _ => {}
        },
        Event::AboutToWait => {
            let now = Instant::now();
            let dt = (now - last_frame).as_secs_f32();
            last_frame = now;
            let elapsed = (now - start).as_secs_f32();

            let scroll = tracker.state();
            if scroll.section_index != last_section {
                last_section = scroll.section_index;
                log::info!(
                    "section `{}` (progress {:.2})",
                    scroll.section_name,
                    scroll.progress
                );
            }

            driver::tick(&mut scene, &mut camera, &scroll, elapsed, dt);
            match gpu.render(&scene, camera.current()) {
                Ok(()) => gpu.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => gpu.resize(gpu.window.inner_size()),
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(e) => log::warn!("surface error: {e:?}"),
            }
        }
        _ => {}
    })?;
    Ok(())
}
