//! Headless walk-through of a bottom sheet: it opens, the user drags it
//! part way and lets go, then swipes it away. A background thread reopens it
//! through the imperative handle, waking the event loop.
//!
//! Run with `RUST_LOG=debug cargo run --example swipe_sheet`.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use calloop::EventLoop;
use guido_modal::prelude::*;

const FRAME: Duration = Duration::from_millis(16);

struct Demo {
    modal: Modal,
    visible: Rc<Cell<bool>>,
}

impl Demo {
    fn run_frames(&mut self, event_loop: &mut EventLoop<Demo>, count: usize) {
        for _ in 0..count {
            if let Err(e) = event_loop.dispatch(Some(FRAME), self) {
                log::error!("Event loop dispatch failed: {}", e);
            }
            let now = Instant::now();
            // Keep the modal in step with the application's flag
            self.modal.set_visible(self.visible.get(), now);
            self.modal.frame(now);
        }
    }

    fn drag(&mut self, dy: f32, steps: usize) {
        let origin = GestureState::at(195.0, 500.0);
        self.modal.touch_start(TouchStart::new(origin.x0, origin.y0));
        for i in 1..=steps {
            let moved = origin.moved_by(0.0, dy * i as f32 / steps as f32);
            self.modal.touch_move(moved);
            std::thread::sleep(Duration::from_millis(8));
        }
        self.modal
            .touch_end(origin.moved_by(0.0, dy), Instant::now());
    }

    fn log_scene(&self, label: &str) {
        match self.modal.scene() {
            Some(scene) => {
                let backdrop = scene.backdrop.map(|b| b.opacity).unwrap_or(0.0);
                let translate = scene.content.map(|c| c.translate).unwrap_or_default();
                log::info!(
                    "{}: {:?}, backdrop {:.2}, content at {:?}",
                    label,
                    self.modal.state(),
                    backdrop,
                    translate
                );
            }
            None => log::info!("{}: nothing on screen", label),
        }
    }
}

fn main() {
    env_logger::init();

    let visible = Rc::new(Cell::new(false));
    let dismissed = visible.clone();

    let modal = Modal::new()
        .device_size(390.0, 844.0)
        .swipe_direction(Direction::Down)
        .swipe_threshold(120.0)
        .backdrop_color_str("#101018")
        .on_modal_show(|| log::info!("Sheet shown"))
        .on_modal_hide(|| log::info!("Sheet hidden"))
        .on_swipe_move(|shown| log::debug!("{:.0}% of the sheet visible", shown * 100.0))
        .on_swipe_cancel(|| log::info!("Swipe cancelled"))
        .on_swipe_complete(move |c| {
            log::info!("Swiped {}", c.swiping_direction);
            dismissed.set(false);
        });

    let mut event_loop: EventLoop<Demo> = match EventLoop::try_new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("Failed to create event loop: {}", e);
            return;
        }
    };

    match modal.attach_wakeup() {
        Ok(source) => {
            let inserted = event_loop.handle().insert_source(source, |_, _, demo| {
                demo.modal.pump(Instant::now());
            });
            if let Err(e) = inserted {
                log::error!("Failed to register wakeup: {}", e);
                return;
            }
        }
        Err(e) => log::warn!("Running without wakeup: {}", e),
    }

    let handle = modal.handle();
    let mut demo = Demo { modal, visible };

    demo.visible.set(true);
    demo.run_frames(&mut event_loop, 25);
    demo.log_scene("After opening");

    demo.drag(80.0, 10);
    demo.log_scene("Released short of the threshold");
    demo.run_frames(&mut event_loop, 80);
    demo.log_scene("Sprung back");

    demo.drag(260.0, 12);
    demo.run_frames(&mut event_loop, 25);
    demo.log_scene("After swiping away");

    std::thread::spawn(move || {
        std::thread::sleep(Duration::from_millis(50));
        handle.open();
    });
    demo.run_frames(&mut event_loop, 30);
    demo.log_scene("Reopened from another thread");
}
