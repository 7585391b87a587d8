use crate::render::DomSink;
use instant::Instant;
use reel_core::Stage;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Stage plus everything it renders into, shared by the frame loop and listeners.
pub struct Surface {
    pub stage: RefCell<Stage>,
    pub sink: RefCell<DomSink>,
    epoch: Instant,
}

impl Surface {
    pub fn new(stage: Stage, sink: DomSink) -> Self {
        Self {
            stage: RefCell::new(stage),
            sink: RefCell::new(sink),
            epoch: Instant::now(),
        }
    }

    /// Time since the surface was created; the core's only clock.
    #[inline]
    pub fn now(&self) -> Duration {
        self.epoch.elapsed()
    }

    pub fn with_stage<R>(&self, f: impl FnOnce(&mut Stage, &mut DomSink, Duration) -> R) -> R {
        let now = self.now();
        let mut stage = self.stage.borrow_mut();
        let mut sink = self.sink.borrow_mut();
        f(&mut *stage, &mut *sink, now)
    }

    pub fn frame(&self) {
        self.with_stage(|stage, sink, now| stage.frame(now, sink));
    }
}

/// Handle to the requestAnimationFrame loop. Cancelling revokes the pending
/// frame request and releases the self-referencing callback.
pub struct FrameLoop {
    pending: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameLoop {
    pub fn cancel(&self) {
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        self.tick.borrow_mut().take();
    }
}

fn request_frame(tick: &RefCell<Option<Closure<dyn FnMut()>>>) -> Option<i32> {
    let window = web::window()?;
    let tick = tick.borrow();
    let cb = tick.as_ref()?;
    window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .ok()
}

pub fn start_loop(surface: Rc<Surface>) -> FrameLoop {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let pending = Rc::new(Cell::new(None));
    let tick_clone = tick.clone();
    let pending_clone = pending.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending_clone.set(None);
        surface.frame();
        pending_clone.set(request_frame(&tick_clone));
    }) as Box<dyn FnMut()>));
    pending.set(request_frame(&tick));
    FrameLoop { pending, tick }
}
