use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use walk_core::SceneRig;

use crate::dom;
use crate::events::KeyBindings;
use crate::render;

pub struct FrameContext<'a> {
    pub rig: Rc<RefCell<SceneRig>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub last_instant: Instant,
    // Held so the DOM listeners stay registered for the life of the loop and
    // are removed if the context is ever dropped.
    pub bindings: Option<KeyBindings>,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        // The raw delta goes straight through; the navigation step clamps it
        // so a tab-switch pause cannot tunnel the camera through geometry.
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let pose = self.rig.borrow_mut().advance(dt_sec);

        if let Some(g) = &mut self.gpu {
            dom::sync_canvas_backing_size(&self.canvas);
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            g.set_camera(pose);
            if let Err(e) = g.render() {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    rig: &Rc<RefCell<SceneRig>>,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    let plan = rig.borrow().plan.clone();
    match render::GpuState::new(leaked_canvas, &plan).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
