#![cfg(target_arch = "wasm32")]
//! Browser adapter for the library walkthrough: owns the canvas, the DOM
//! event wiring, and the render loop. All camera behavior lives in
//! `walk-core`; this crate only feeds it input and time.

use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

use walk_core::{FloorPlan, SceneRig};

pub mod constants;
pub mod dom;
pub mod events;
pub mod frame;
pub mod overlay;
pub mod render;

use constants::CANVAS_ID;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("walk-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::sync_canvas_backing_size(&canvas);
    {
        let canvas_resize = canvas.clone();
        let resize_closure = Closure::wrap(Box::new(move || {
            dom::sync_canvas_backing_size(&canvas_resize);
        }) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())
            .ok();
        resize_closure.forget();
    }

    let rig = Rc::new(RefCell::new(SceneRig::new(FloorPlan::library())));

    let bindings = events::wire_keyboard(rig.clone());
    events::wire_hotspots(&document, rig.clone());
    events::wire_catalog_toggle(&document, rig.clone());

    let gpu = frame::init_gpu(&canvas, &rig).await;
    if gpu.is_none() {
        log::warn!("running without a renderer; camera state still advances");
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        rig,
        canvas,
        gpu,
        last_instant: Instant::now(),
        bindings,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
