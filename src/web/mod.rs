//! Browser binding.
//!
//! Wires a [`PointerEffectController`] to the page: DOM listeners feed it
//! events, a `requestAnimationFrame` loop drives `render_frame`, a single
//! `setTimeout` polls its restore timers, and [`DomSurface`] applies the
//! result to the cursor elements.
//!
//! ```js
//! import init, { install } from "cursor_fx";
//! await init();
//! const effects = install({ trail: { enabled: true } });
//! // later
//! effects.destroy();
//! ```

mod dom_surface;
mod frame_loop;
mod listeners;
mod timers;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, MouseEvent, Window};

use crate::config::EffectConfig;
use crate::controller::PointerEffectController;
use crate::error::{CursorFxError, CursorFxResult, OptionExt};
use crate::hover::ElementKind;
use crate::lifecycle::{InstallPlan, PageReadiness};

pub use dom_surface::DomSurface;
use frame_loop::FrameLoop;
use listeners::EventListener;
use timers::DeadlineTimer;

type SharedController = Rc<RefCell<PointerEffectController<DomSurface>>>;

/// Initialize panic hook and logging
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("[CursorFx] WASM module initialized");
}

/// Install the pointer effect on the current page.
///
/// `config` is an optional partial [`EffectConfig`] object. Returns an inert
/// handle on devices without a fine, hover-capable pointer. While the
/// document is still parsing, wiring is deferred to `DOMContentLoaded` so
/// every cursor and interactive element exists first; the handle reports
/// `pending` until then. Fails, leaving the default cursor untouched, if the
/// dot or outline element is missing.
#[wasm_bindgen]
pub fn install(config: JsValue) -> Result<CursorEffects, JsValue> {
    let config = parse_config(config)?;
    let window = web_sys::window().or_fx_err(|| CursorFxError::NoWindow)?;

    if !pointer_is_fine(&window, &config.activation_query) {
        log::info!(
            "[CursorFx] '{}' does not match, leaving default cursor",
            config.activation_query
        );
        return Ok(CursorEffects::with_state(InstallState::Inert));
    }

    let document = window.document().or_fx_err(|| CursorFxError::NoDocument)?;

    match InstallPlan::for_readiness(readiness(&document)) {
        InstallPlan::StartNow { entrance_now } => {
            let session = Session::start(&window, &document, config, entrance_now).map_err(|e| {
                log::warn!("[CursorFx] Install aborted: {}", e);
                JsValue::from(e)
            })?;
            Ok(CursorEffects::with_state(InstallState::Running(session)))
        },
        InstallPlan::DeferUntilParsed => {
            let effects = CursorEffects::with_state(InstallState::WaitingForParse);
            let listener = defer_until_parsed(&effects.installation, window, document.clone(), config)?;
            effects.installation.borrow_mut().ready_listener = Some(listener);
            log::info!("[CursorFx] Document still parsing, install deferred to DOMContentLoaded");
            Ok(effects)
        },
    }
}

/// Lifecycle of one `install` call.
enum InstallState {
    /// Not running and never will (unsupported device, failed or destroyed).
    Inert,
    /// Waiting for `DOMContentLoaded`.
    WaitingForParse,
    Running(Session),
}

struct Installation {
    state: InstallState,
    /// Kept until destroy so the handler is never dropped while it runs.
    ready_listener: Option<EventListener>,
}

type SharedInstallation = Rc<RefCell<Installation>>;

/// Handle to an installed pointer effect.
#[wasm_bindgen]
pub struct CursorEffects {
    installation: SharedInstallation,
}

impl CursorEffects {
    fn with_state(state: InstallState) -> Self {
        Self {
            installation: Rc::new(RefCell::new(Installation {
                state,
                ready_listener: None,
            })),
        }
    }
}

#[wasm_bindgen]
impl CursorEffects {
    /// Whether the effect is running.
    #[wasm_bindgen(getter)]
    pub fn active(&self) -> bool {
        matches!(self.installation.borrow().state, InstallState::Running(_))
    }

    /// Whether the effect is waiting for the document to finish parsing.
    #[wasm_bindgen(getter)]
    pub fn pending(&self) -> bool {
        matches!(self.installation.borrow().state, InstallState::WaitingForParse)
    }

    /// Remove every listener, cancel pending frames and timers, delete live
    /// trail particles and reset the cursor elements. Idempotent.
    pub fn destroy(&mut self) {
        let (state, ready_listener) = {
            let mut installation = self.installation.borrow_mut();
            (
                std::mem::replace(&mut installation.state, InstallState::Inert),
                installation.ready_listener.take(),
            )
        };
        drop(ready_listener);

        match state {
            InstallState::Running(session) => {
                drop(session);
                log::info!("[CursorFx] Effect destroyed");
            },
            InstallState::WaitingForParse => log::info!("[CursorFx] Deferred install cancelled"),
            InstallState::Inert => {},
        }
    }
}

/// Start the session once the document has been parsed.
fn defer_until_parsed(
    installation: &SharedInstallation,
    window: Window,
    document: Document,
    config: EffectConfig,
) -> CursorFxResult<EventListener> {
    let weak = Rc::downgrade(installation);
    let mut config = Some(config);

    EventListener::new(&document.clone(), "DOMContentLoaded", move |_| {
        let Some(installation) = weak.upgrade() else {
            return;
        };
        let Ok(mut installation) = installation.try_borrow_mut() else {
            return;
        };
        if !matches!(installation.state, InstallState::WaitingForParse) {
            return;
        }
        let Some(config) = config.take() else {
            return;
        };

        let entrance_now = readiness(&document) == PageReadiness::Complete;
        installation.state = match Session::start(&window, &document, config, entrance_now) {
            Ok(session) => InstallState::Running(session),
            Err(e) => {
                log::warn!("[CursorFx] Deferred install aborted: {}", e);
                InstallState::Inert
            },
        };
    })
}

fn readiness(document: &Document) -> PageReadiness {
    match document.ready_state().as_str() {
        "loading" => PageReadiness::Loading,
        "interactive" => PageReadiness::Interactive,
        _ => PageReadiness::Complete,
    }
}

fn parse_config(value: JsValue) -> CursorFxResult<EffectConfig> {
    if value.is_undefined() || value.is_null() {
        return Ok(EffectConfig::default());
    }
    let mut config: EffectConfig = serde_wasm_bindgen::from_value(value)
        .map_err(|e| CursorFxError::InvalidConfig(e.to_string()))?;
    config.validate();
    Ok(config)
}

fn pointer_is_fine(window: &Window, query: &str) -> bool {
    match window.match_media(query) {
        Ok(Some(list)) => list.matches(),
        Ok(None) => false,
        Err(e) => {
            log::warn!("[CursorFx] matchMedia failed: {:?}", e);
            false
        },
    }
}

/// Milliseconds on the page's monotonic clock.
fn now(window: &Window) -> f64 {
    window
        .performance()
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Run `f` against the controller unless it is already borrowed.
fn with_controller<F>(controller: &SharedController, f: F)
where
    F: FnOnce(&mut PointerEffectController<DomSurface>),
{
    match controller.try_borrow_mut() {
        Ok(mut fx) => f(&mut fx),
        Err(_) => log::debug!("[CursorFx] Controller busy, event dropped"),
    }
}

// ============================================================================
// Session
// ============================================================================

/// Everything registered on the page for one installed effect.
///
/// Dropping it tears the effect down.
struct Session {
    controller: SharedController,
    listeners: Vec<EventListener>,
    frame_loop: FrameLoop,
    timer: Rc<DeadlineTimer>,
}

impl Session {
    fn start(
        window: &Window,
        document: &Document,
        config: EffectConfig,
        entrance_now: bool,
    ) -> CursorFxResult<Self> {
        let surface = DomSurface::attach(document, &config)?;
        let interactive_selector = config.interactive_selector.clone();

        let controller: SharedController =
            Rc::new(RefCell::new(PointerEffectController::new(config, surface)));
        let timer = DeadlineTimer::new(window.clone(), {
            let controller = Rc::clone(&controller);
            let window = window.clone();
            move |timer: &DeadlineTimer| {
                let now = now(&window);
                with_controller(&controller, |fx| fx.poll_timers(now));
                rearm(&controller, timer, now);
            }
        });

        let mut listeners = Vec::new();
        register_document_listeners(window, document, &controller, &mut listeners)?;
        register_window_listeners(window, entrance_now, &controller, &timer, &mut listeners)?;
        let wired = register_interactive_listeners(
            document,
            &interactive_selector,
            &controller,
            &mut listeners,
        )?;

        let frame_loop = FrameLoop::start(window, {
            let controller = Rc::clone(&controller);
            move || with_controller(&controller, |fx| fx.render_frame())
        })?;

        log::info!(
            "[CursorFx] Effect installed ({} interactive elements, {} listeners)",
            wired,
            listeners.len()
        );

        Ok(Self {
            controller,
            listeners,
            frame_loop,
            timer,
        })
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.listeners.clear();
        self.frame_loop.cancel();
        self.timer.cancel();
        with_controller(&self.controller, |fx| fx.teardown());
    }
}

/// Point the timer at the controller's next deadline, or stop it.
fn rearm(controller: &SharedController, timer: &DeadlineTimer, now: f64) {
    let delay = controller
        .try_borrow()
        .ok()
        .and_then(|fx| fx.next_delay(now));
    match delay {
        Some(delay) => timer.schedule(delay),
        None => timer.cancel(),
    }
}

fn register_document_listeners(
    window: &Window,
    document: &Document,
    controller: &SharedController,
    listeners: &mut Vec<EventListener>,
) -> CursorFxResult<()> {
    listeners.push(EventListener::new(document, "mousemove", {
        let controller = Rc::clone(controller);
        let window = window.clone();
        move |event: Event| {
            let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let (x, y) = (mouse.client_x() as f64, mouse.client_y() as f64);
            let now = now(&window);
            with_controller(&controller, |fx| fx.pointer_moved(x, y, now));
        }
    })?);

    listeners.push(EventListener::new(document, "mouseleave", {
        let controller = Rc::clone(controller);
        move |_| with_controller(&controller, |fx| fx.pointer_left_viewport())
    })?);

    listeners.push(EventListener::new(document, "mouseenter", {
        let controller = Rc::clone(controller);
        move |_| with_controller(&controller, |fx| fx.pointer_entered_viewport())
    })?);

    Ok(())
}

fn register_window_listeners(
    window: &Window,
    entrance_now: bool,
    controller: &SharedController,
    timer: &Rc<DeadlineTimer>,
    listeners: &mut Vec<EventListener>,
) -> CursorFxResult<()> {
    listeners.push(EventListener::new(window, "scroll", {
        let controller = Rc::clone(controller);
        let timer = Rc::clone(timer);
        let window = window.clone();
        move |_| {
            let now = now(&window);
            with_controller(&controller, |fx| fx.scrolled(now));
            rearm(&controller, &timer, now);
        }
    })?);

    // A `load` that already happened will never be dispatched again.
    if entrance_now {
        let now = now(window);
        with_controller(controller, |fx| fx.page_loaded(now));
        rearm(controller, timer, now);
        return Ok(());
    }

    listeners.push(EventListener::new(window, "load", {
        let controller = Rc::clone(controller);
        let timer = Rc::clone(timer);
        let window = window.clone();
        move |_| {
            let now = now(&window);
            with_controller(&controller, |fx| fx.page_loaded(now));
            rearm(&controller, &timer, now);
        }
    })?);

    Ok(())
}

/// Attach hover/press listeners to every interactive element.
///
/// Returns the number of elements wired; zero is not an error.
fn register_interactive_listeners(
    document: &Document,
    selector: &str,
    controller: &SharedController,
    listeners: &mut Vec<EventListener>,
) -> CursorFxResult<usize> {
    let nodes = document.query_selector_all(selector)?;
    let mut wired = 0;

    for index in 0..nodes.length() {
        let Some(element) = nodes.get(index).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let kind = ElementKind::from_tag_name(&element.tag_name());

        listeners.push(EventListener::new(&element, "mouseenter", {
            let controller = Rc::clone(controller);
            move |_| with_controller(&controller, |fx| fx.element_entered(kind))
        })?);
        listeners.push(EventListener::new(&element, "mouseleave", {
            let controller = Rc::clone(controller);
            move |_| with_controller(&controller, |fx| fx.element_left())
        })?);
        listeners.push(EventListener::new(&element, "mousedown", {
            let controller = Rc::clone(controller);
            move |_| with_controller(&controller, |fx| fx.element_pressed())
        })?);
        listeners.push(EventListener::new(&element, "mouseup", {
            let controller = Rc::clone(controller);
            move |_| with_controller(&controller, |fx| fx.element_released())
        })?);

        wired += 1;
    }

    log::debug!("[CursorFx] Wired {} elements matching '{}'", wired, selector);
    Ok(wired)
}
