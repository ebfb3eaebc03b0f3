use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, MouseEvent};

use suraido_core::{
    pick_photo, scramble_seed, splitmix32, ClickOutcome, GameSession, GRID_SIZE, PHOTO_CATALOG,
    PUZZLE_SEED,
};

use crate::boot;
use crate::input::{cell_at, click_coords};
use crate::renderer::{draw_board, CanvasSurface, RenderOptions};

const CANVAS_ID: &str = "puzzle-canvas";
const VIEWPORT_FILL_RATIO: f64 = 0.9;

pub(crate) struct CanvasApp {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    image: HtmlImageElement,
    session: RefCell<GameSession>,
    tile_size: Cell<f64>,
    nonce: Cell<u32>,
    listeners: RefCell<Vec<EventListener>>,
}

pub(crate) fn start() -> Result<(), JsValue> {
    boot::set_phase("canvas", "locating the drawing surface");
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| JsValue::from_str("missing puzzle canvas"))?
        .dyn_into::<HtmlCanvasElement>()?;
    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()?;
    let image = HtmlImageElement::new()?;

    let app = CanvasApp::new(canvas, ctx, image);
    app.ensure_canvas_size();
    app.install_listeners();
    app.install_image_callbacks();
    app.begin_round(None);
    Ok(())
}

fn time_nonce(previous: u32) -> u32 {
    let now = js_sys::Date::now() as u32;
    splitmix32(now ^ previous.wrapping_add(0x9E37_79B9))
}

impl CanvasApp {
    fn new(
        canvas: HtmlCanvasElement,
        ctx: CanvasRenderingContext2d,
        image: HtmlImageElement,
    ) -> Rc<Self> {
        Rc::new(Self {
            canvas,
            ctx,
            image,
            session: RefCell::new(GameSession::new(&PHOTO_CATALOG[0])),
            tile_size: Cell::new(0.0),
            nonce: Cell::new(0),
            listeners: RefCell::new(Vec::new()),
        })
    }

    fn next_seed(&self) -> u32 {
        let nonce = time_nonce(self.nonce.get());
        self.nonce.set(nonce);
        scramble_seed(PUZZLE_SEED, nonce, GRID_SIZE)
    }

    fn ensure_canvas_size(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let inner_width = window
            .inner_width()
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or(0.0);
        let inner_height = window
            .inner_height()
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or(0.0);
        let max_width = (inner_width * VIEWPORT_FILL_RATIO)
            .min(inner_height * VIEWPORT_FILL_RATIO)
            .max(GRID_SIZE as f64);
        self.canvas.set_width(max_width as u32);
        self.canvas.set_height(max_width as u32);
        self.tile_size.set(max_width / GRID_SIZE as f64);
    }

    fn render(&self) {
        let session = self.session.borrow();
        let mut surface = CanvasSurface {
            ctx: &self.ctx,
            image: &self.image,
        };
        draw_board(
            &mut surface,
            session.board(),
            session.started(),
            self.tile_size.get(),
            session.photo().size as f64,
            RenderOptions {
                show_labels: !session.round_over(),
            },
        );
    }

    fn begin_round(&self, previous_slug: Option<&str>) {
        let seed = self.next_seed();
        let photo = pick_photo(seed, previous_slug);
        *self.session.borrow_mut() = GameSession::new(photo);
        boot::set_phase("image", photo.label);
        self.image.set_src(photo.src);
    }

    fn on_image_loaded(&self) {
        let seed = self.next_seed();
        self.session.borrow_mut().scramble(seed);
        self.ensure_canvas_size();
        self.render();
        boot::ready();
    }

    fn on_click(&self, event: &MouseEvent) {
        if self.session.borrow().round_over() {
            let previous = self.session.borrow().photo().slug;
            self.begin_round(Some(previous));
            return;
        }
        let Some((x, y)) = click_coords(event, &self.canvas) else {
            return;
        };
        let Some(cell) = cell_at(x, y, self.tile_size.get(), GRID_SIZE) else {
            return;
        };
        let outcome = self.session.borrow_mut().handle_click(cell);
        match outcome {
            ClickOutcome::Ignored => {}
            ClickOutcome::Rejected | ClickOutcome::Moved => self.render(),
            ClickOutcome::Solved => {
                self.render();
                gloo::console::log!("puzzle solved");
            }
        }
    }

    fn install_listeners(self: &Rc<Self>) {
        let mut listeners = Vec::new();

        let app = Rc::clone(self);
        let listener = EventListener::new(&self.canvas, "click", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            app.on_click(event);
        });
        listeners.push(listener);

        if let Some(window) = web_sys::window() {
            let app = Rc::clone(self);
            let listener = EventListener::new(&window, "resize", move |_event| {
                app.ensure_canvas_size();
                app.render();
            });
            listeners.push(listener);
        }

        *self.listeners.borrow_mut() = listeners;
    }

    fn install_image_callbacks(self: &Rc<Self>) {
        let app = Rc::clone(self);
        let onload = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            app.on_image_loaded();
        }));
        self.image.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget();

        let app = Rc::clone(self);
        let onerror = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            let src = app.session.borrow().photo().src;
            boot::fail("image", "failed to load the puzzle photo", src);
        }));
        self.image
            .set_onerror(Some(onerror.as_ref().unchecked_ref()));
        onerror.forget();
    }
}
