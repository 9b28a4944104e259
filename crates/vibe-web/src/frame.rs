use crate::{dom, overlay, render};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use vibe_core::{SceneGraph, ScrollChoreographer, SkinBinder};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub choreographer: ScrollChoreographer,
    pub scene: SceneGraph,
    pub binder: Option<SkinBinder>,

    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,

    pub start_instant: Instant,
    pub last_instant: Instant,
    pub active_section: Option<usize>,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).as_secs_f32().max(1e-4);
        self.last_instant = now;
        let elapsed = (now - self.start_instant).as_secs_f32();

        let Some(window) = web::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };

        let scroll = dom::read_scroll_progress(&window, &document);
        let skin = self.choreographer.advance(scroll, elapsed, dt);

        // Skin binding is a no-op when the display surface was missing at
        // setup; that condition was already logged with the node dump.
        if let Some(binder) = &self.binder {
            binder.bind(&mut self.scene, skin);
            if let Some(image) = binder.take_upload(&mut self.scene) {
                if let Some(g) = &mut self.gpu {
                    g.set_active_skin(image);
                }
            }
        }

        if self.active_section != Some(skin) {
            overlay::set_active_section(&document, skin, self.choreographer.params().skin_count);
            self.active_section = Some(skin);
        }

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = g.render(self.choreographer.pose()) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
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
