//! Browser shell: builds the page, owns the running game and wires input.
//!
//! Handlers are installed once and look the game up in `APP` when they fire,
//! so they always see the current round without being re-registered.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    CanvasRenderingContext2d, Document, Element, Event, EventTarget, HtmlButtonElement,
    HtmlCanvasElement, KeyboardEvent, window,
};

use crate::config::{
    BANNER_ID, CANVAS_HEIGHT, CANVAS_ID, CANVAS_WIDTH, KEYBOARD_ID, LANGUAGE_BUTTON_ID, ROOT_ID,
    WORD_ID,
};
use crate::game::{Game, Snapshot};
use crate::input::Modifiers;
use crate::rng::Rng;
use crate::storage::LocalStorage;
use crate::view::banner::Banner;
use crate::view::keyboard::{self, KEYS, KeyState};
use crate::view::{drawing, word};

/// An event listener that is removed from its target when dropped.
struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn new(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

struct Ui {
    document: Document,
    banner: Element,
    language_button: HtmlButtonElement,
    ctx: CanvasRenderingContext2d,
    word: Element,
    keys: Vec<HtmlButtonElement>,
}

struct App {
    game: Game<LocalStorage>,
    ui: Ui,
    _listeners: Vec<Listener>,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

fn with_app(f: impl FnOnce(&mut App)) {
    APP.with(|cell| {
        if let Some(app) = cell.borrow_mut().as_mut() {
            f(app);
        }
    });
}

/// Build the game under `#forca-root` and start listening for input.
/// Calling it again replaces the running game.
pub fn mount() -> Result<(), JsValue> {
    unmount();

    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let root = match doc.get_element_by_id(ROOT_ID) {
        Some(el) => el,
        None => {
            let body = doc.body().ok_or_else(|| JsValue::from_str("no body"))?;
            let div = doc.create_element("div")?;
            div.set_id(ROOT_ID);
            body.append_child(&div)?;
            div
        }
    };
    root.set_inner_html("");
    root.set_attribute(
        "style",
        "max-width:800px; display:flex; flex-direction:column; gap:2rem; margin:2rem auto 0; align-items:center;",
    )?;

    let header = doc.create_element("div")?;
    header.set_attribute(
        "style",
        "width:100%; display:flex; align-items:center; justify-content:space-between; margin-bottom:1.5rem;",
    )?;
    let banner = doc.create_element("div")?;
    banner.set_id(BANNER_ID);
    header.append_child(&banner)?;
    let language_button: HtmlButtonElement = doc.create_element("button")?.dyn_into()?;
    language_button.set_id(LANGUAGE_BUTTON_ID);
    language_button.set_class_name("forca-language");
    header.append_child(&language_button)?;
    root.append_child(&header)?;

    let canvas: HtmlCanvasElement = doc.create_element("canvas")?.dyn_into()?;
    canvas.set_id(CANVAS_ID);
    canvas.set_width(CANVAS_WIDTH);
    canvas.set_height(CANVAS_HEIGHT);
    root.append_child(&canvas)?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("no 2d context"))?
        .dyn_into()?;

    let word_el = doc.create_element("div")?;
    word_el.set_id(WORD_ID);
    word_el.set_attribute(
        "style",
        "display:flex; gap:0.25em; font-size:6rem; font-weight:bold; text-transform:uppercase; font-family:monospace;",
    )?;
    root.append_child(&word_el)?;

    let keyboard_el = doc.create_element("div")?;
    keyboard_el.set_id(KEYBOARD_ID);
    keyboard_el.set_attribute(
        "style",
        "align-self:stretch; display:grid; grid-template-columns:repeat(auto-fit, minmax(75px, 1fr)); gap:0.5rem;",
    )?;
    let keys = build_keys(&doc, &keyboard_el)?;
    root.append_child(&keyboard_el)?;

    let listeners = install_listeners(&doc, &language_button, &keys)?;

    let game = Game::load(LocalStorage::open(), Rng::from_entropy());
    log::info!("game mounted ({:?})", game.language());

    let app = App {
        game,
        ui: Ui {
            document: doc,
            banner,
            language_button,
            ctx,
            word: word_el,
            keys,
        },
        _listeners: listeners,
    };
    app.render();
    APP.with(|cell| cell.replace(Some(app)));
    Ok(())
}

/// Drop the running game; its listeners detach themselves.
pub fn unmount() {
    let app = APP.with(|cell| cell.borrow_mut().take());
    if app.is_some() {
        log::info!("game unmounted");
    }
    drop(app);
}

pub fn snapshot() -> Option<Snapshot> {
    APP.with(|cell| cell.borrow().as_ref().map(|app| app.game.snapshot()))
}

fn build_keys(doc: &Document, parent: &Element) -> Result<Vec<HtmlButtonElement>, JsValue> {
    let mut keys = Vec::with_capacity(KEYS.len());
    for letter in KEYS {
        let btn: HtmlButtonElement = doc.create_element("button")?.dyn_into()?;
        btn.set_text_content(Some(&letter.to_string()));
        btn.set_class_name("forca-key neutral");
        parent.append_child(&btn)?;
        keys.push(btn);
    }
    Ok(keys)
}

fn install_listeners(
    doc: &Document,
    language_button: &HtmlButtonElement,
    keys: &[HtmlButtonElement],
) -> Result<Vec<Listener>, JsValue> {
    let mut listeners = Vec::with_capacity(keys.len() + 2);

    listeners.push(Listener::new(doc, "keypress", |evt: Event| {
        let Some(key_evt) = evt.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let modifiers = Modifiers {
            ctrl: key_evt.ctrl_key(),
            meta: key_evt.meta_key(),
            alt: key_evt.alt_key(),
        };
        let key = key_evt.key();
        with_app(|app| {
            if app.game.handle_key(&key, modifiers) {
                evt.prevent_default();
                app.render();
            }
        });
    })?);

    let button = language_button.clone();
    listeners.push(Listener::new(language_button, "click", move |_evt: Event| {
        // drop focus so a later Enter resets instead of re-clicking
        let _ = button.blur();
        with_app(|app| {
            app.game.toggle_language();
            app.render();
        });
    })?);

    for (&letter, btn) in KEYS.iter().zip(keys) {
        let target = btn.clone();
        listeners.push(Listener::new(btn, "click", move |_evt: Event| {
            let _ = target.blur();
            with_app(|app| {
                if app.game.submit_letter(letter) {
                    app.render();
                }
            });
        })?);
    }
    Ok(listeners)
}

impl App {
    fn render(&self) {
        let game = &self.game;
        let ui = &self.ui;

        let banner = Banner::for_phase(game.phase());
        ui.banner.set_text_content(Some(banner.text(game.language())));
        let _ = ui.banner.set_attribute("style", banner.style());
        ui.language_button
            .set_text_content(Some(game.language().toggle_label()));

        drawing::draw(&ui.ctx, game.incorrect_count());

        if let Err(err) = self.render_word() {
            log::warn!("failed to render word: {err:?}");
        }

        for (view, btn) in keyboard::layout(game).iter().zip(&ui.keys) {
            btn.set_disabled(view.disabled);
            btn.set_class_name(&format!("forca-key {}", view.state.class_name()));
            let style = match view.state {
                KeyState::Active => "background:hsl(200,100%,50%); color:white;",
                KeyState::Inactive => "opacity:0.3;",
                KeyState::Neutral => "",
            };
            let _ = btn.set_attribute(
                "style",
                &format!(
                    "width:100%; aspect-ratio:1/1; font-size:2.5rem; text-transform:uppercase; font-weight:bold; border:3px solid black; {style}"
                ),
            );
        }
    }

    /// One underlined cell per character; text goes in via `textContent`.
    fn render_word(&self) -> Result<(), JsValue> {
        let game = &self.game;
        let ui = &self.ui;
        ui.word.set_text_content(None);
        for slot in word::mask(game.target(), game.guessed(), game.is_loser()) {
            let cell = ui.document.create_element("span")?;
            let border = if slot.ch == ' ' { "none" } else { ".1em solid black" };
            cell.set_attribute(
                "style",
                &format!("border-bottom:{border}; min-width:0.6em; text-align:center;"),
            )?;
            let letter = ui.document.create_element("span")?;
            let visibility = if slot.shown { "visible" } else { "hidden" };
            let color = if slot.missed { "red" } else { "black" };
            letter.set_attribute("style", &format!("visibility:{visibility}; color:{color};"))?;
            letter.set_text_content(Some(&slot.ch.to_string()));
            cell.append_child(&letter)?;
            ui.word.append_child(&cell)?;
        }
        Ok(())
    }
}
