#![cfg(target_arch = "wasm32")]
mod constants;
mod dom;
mod frame;
mod overlay;
mod render;
mod scroll;

use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use vibe_core::{ChoreographyParams, ScrollChoreographer, SkinBinder};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("vibe-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
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
        if let Some(w) = web::window() {
            w.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())
                .ok();
        }
        resize_closure.forget();
    }

    // Scene setup: resolve the display surface once; a miss is logged with
    // the full node list and skin binding stays off.
    let mut scene = vibe_core::mesh::build_scene_graph();
    let binder = match scene.resolve(vibe_core::constants::SCREEN_NODE) {
        Ok(id) => Some(SkinBinder::attach(&mut scene, id)),
        Err(e) => {
            log::warn!("{}; nodes present: {:?}", e, scene.node_names());
            None
        }
    };

    let gpu = frame::init_gpu(&canvas).await;
    let now = Instant::now();
    let ctx = frame::FrameContext {
        choreographer: ScrollChoreographer::new(ChoreographyParams::default()),
        scene,
        binder,
        canvas,
        gpu,
        start_instant: now,
        last_instant: now,
        active_section: None,
    };
    frame::start_loop(Rc::new(RefCell::new(ctx)));
    Ok(())
}
