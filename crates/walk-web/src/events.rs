use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use walk_core::{action_for_code, SceneRig, ViewState};

use crate::constants::{CATALOG_TOGGLE_ID, HOTSPOT_ID_PREFIX, HOTSPOT_VIEWS};
use crate::{dom, overlay};

/// Owns the window-level key listeners for the lifetime of the scene.
/// Dropping it removes both listeners and resets the key flags, so a scene
/// remount never sees stale handlers or stuck keys.
pub struct KeyBindings {
    window: web::Window,
    keydown: Closure<dyn FnMut(web::KeyboardEvent)>,
    keyup: Closure<dyn FnMut(web::KeyboardEvent)>,
    rig: Rc<RefCell<SceneRig>>,
}

impl Drop for KeyBindings {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("keydown", self.keydown.as_ref().unchecked_ref());
        let _ = self
            .window
            .remove_event_listener_with_callback("keyup", self.keyup.as_ref().unchecked_ref());
        self.rig.borrow_mut().keys.clear();
    }
}

/// Register keydown/keyup listeners that drive the rig's key flags.
/// Keystrokes aimed at text inputs are left alone, and auto-repeat
/// keydowns are ignored since the flags are level-triggered anyway.
pub fn wire_keyboard(rig: Rc<RefCell<SceneRig>>) -> Option<KeyBindings> {
    let window = web::window()?;

    let rig_down = rig.clone();
    let keydown = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if dom::targets_text_input(&ev) || ev.repeat() {
            return;
        }
        if let Some(action) = action_for_code(&ev.code()) {
            rig_down.borrow_mut().keys.set(action, true);
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);

    let rig_up = rig.clone();
    let keyup = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if let Some(action) = action_for_code(&ev.code()) {
            rig_up.borrow_mut().keys.set(action, false);
        }
    }) as Box<dyn FnMut(_)>);

    let _ = window.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref());
    let _ = window.add_event_listener_with_callback("keyup", keyup.as_ref().unchecked_ref());

    Some(KeyBindings {
        window,
        keydown,
        keyup,
        rig,
    })
}

/// Wire the navigational hotspots: each click routes the named view to the
/// transition controller. The rig never initiates view changes itself.
pub fn wire_hotspots(document: &web::Document, rig: Rc<RefCell<SceneRig>>) {
    for view_name in HOTSPOT_VIEWS {
        let id = format!("{HOTSPOT_ID_PREFIX}{view_name}");
        let rig_click = rig.clone();
        dom::add_click_listener(document, &id, move || {
            let view = ViewState::from_hotspot(view_name);
            log::info!("[view] hotspot -> {view:?}");
            rig_click.borrow_mut().select_view(view);
        });
    }
}

/// The 2D catalog button flips the overlay and disables manual navigation
/// while the overlay is open. The rig's flag is synced from the DOM here at
/// wiring time as well, so markup that ships with the overlay already open
/// starts with navigation disabled.
pub fn wire_catalog_toggle(document: &web::Document, rig: Rc<RefCell<SceneRig>>) {
    rig.borrow_mut().controls_enabled = overlay::is_hidden(document);

    let doc = document.clone();
    dom::add_click_listener(document, CATALOG_TOGGLE_ID, move || {
        overlay::toggle(&doc);
        rig.borrow_mut().controls_enabled = overlay::is_hidden(&doc);
    });
}
