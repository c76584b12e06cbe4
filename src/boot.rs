//! Startup: wait for the document, build the page, bind every controller.
//!
//! Each controller binds inside its own failure boundary
//! (`page::app::BootReport::run`), so a missing element disables only the
//! controller that needs it. Listeners live for the page lifetime and their
//! closures are leaked with `Closure::forget`.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use page::app::{BootReport, Controller, Page, any_present};
use page::error::PageError;
use page::event::{ObserverKind, Outcome, PageEvent};
use page::keys::{KeyPress, Modifiers};
use page::reveal::Intersection;
use page::surface::ElementKey;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen::closure::Closure;
use web_sys::{
    Element, ErrorEvent, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent, MouseEvent,
};

use crate::dom::{DomHost, dom_error, element_key};
use crate::settings::{load_page_config, log_level};
use crate::storage::LocalStore;
use crate::timing::{debounce, throttle_trailing};

/// Minimum spacing between cursor follower updates (one frame at 60Hz). The
/// last position of a burst is still delivered.
const CURSOR_THROTTLE_MS: u32 = 16;

/// Shared handles reached from every listener.
#[derive(Clone)]
struct Runtime {
    page: Rc<RefCell<Page>>,
    host: Rc<RefCell<DomHost>>,
    store: Rc<RefCell<LocalStore>>,
}

impl Runtime {
    fn dispatch(&self, event: &PageEvent) -> Outcome {
        let (Ok(mut page), Ok(mut host), Ok(mut store)) =
            (self.page.try_borrow_mut(), self.host.try_borrow_mut(), self.store.try_borrow_mut())
        else {
            log::debug!("re-entrant {event:?} dropped");
            return Outcome::none();
        };
        page.handle(event, &mut *host, &mut *store)
    }

    /// Dispatch a DOM event and cancel its default when the page asks to.
    fn dispatch_for(&self, dom_event: &Event, event: &PageEvent) {
        if self.dispatch(event).prevent_default {
            dom_event.prevent_default();
        }
    }
}

/// Register a page-lifetime listener on `target`.
fn listen<F>(target: &EventTarget, kind: &str, handler: F) -> Result<(), PageError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
        .map_err(|e| dom_error(kind, &e))?;
    closure.forget();
    Ok(())
}

/// Entry point: boot now if the document is parsed, else on `DOMContentLoaded`.
pub fn start() {
    console_error_panic_hook::set_once();

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.ready_state() != "loading" {
        boot();
        return;
    }
    let mut pending = Some(boot as fn());
    let result = listen(&document, "DOMContentLoaded", move |_| {
        if let Some(run) = pending.take() {
            run();
        }
    });
    if let Err(e) = result {
        web_sys::console::error_1(&format!("page not started: {e}").into());
    }
}

fn boot() {
    let (config, config_error) = match load_page_config() {
        Ok(config) => (config, None),
        Err(e) => (page::config::PageConfig::default(), Some(e)),
    };
    if let Err(e) = console_log::init_with_level(log_level(&config)) {
        web_sys::console::warn_1(&format!("console logger not installed: {e}").into());
    }
    if let Some(e) = config_error {
        log::warn!("using default page config: {e}");
    }

    let host = match DomHost::new(config.selectors.clone()) {
        Ok(host) => host,
        Err(e) => {
            log::error!("page controllers not started: {e}");
            return;
        }
    };
    let runtime = Runtime {
        page: Rc::new(RefCell::new(Page::new(config))),
        host: Rc::new(RefCell::new(host)),
        store: Rc::new(RefCell::new(LocalStore::new())),
    };

    let mut report = BootReport::new();
    report.run(Controller::Theme, || bind_theme(&runtime));
    report.run(Controller::Navigation, || bind_navigation(&runtime));
    report.run(Controller::Anchors, || bind_anchors(&runtime));
    report.run(Controller::Scroll, || bind_scroll(&runtime));
    report.run(Controller::Reveal, || bind_reveal(&runtime));
    report.run(Controller::Hover, || bind_hover(&runtime));
    report.run(Controller::LazyImages, || bind_lazy_images(&runtime));
    report.run(Controller::Cursor, || bind_cursor(&runtime));
    report.run(Controller::Keyboard, || bind_keyboard(&runtime));
    report.run(Controller::Resize, || bind_resize(&runtime));
    report.run(Controller::Lifecycle, || bind_lifecycle(&runtime));
    report.run(Controller::ErrorLog, || bind_error_log(&runtime));

    log::info!("{}", runtime.page.borrow().banner());
    if report.is_clean() {
        log::info!("portfolio initialized ({} controllers)", report.started.len());
    } else {
        log::info!(
            "portfolio initialized ({} controllers, {} disabled)",
            report.started.len(),
            report.failed.len()
        );
    }
}

fn bind_theme(rt: &Runtime) -> Result<(), PageError> {
    {
        let mut host = rt.host.borrow_mut();
        let store = rt.store.borrow();
        rt.page.borrow_mut().initialize(&mut *host, &*store);
    }
    let toggles = {
        let host = rt.host.borrow();
        let selectors = host.selectors();
        let wanted = format!("#{} or #{}", selectors.theme_toggle_id, selectors.floating_theme_toggle_id);
        any_present(
            [host.by_id(&selectors.theme_toggle_id), host.by_id(&selectors.floating_theme_toggle_id)],
            &wanted,
        )?
    };
    for button in toggles {
        let rt = rt.clone();
        listen(&button, "click", move |e| rt.dispatch_for(&e, &PageEvent::ThemeToggleClicked))?;
    }
    Ok(())
}

/// Mobile menu disclosure and the links that close it.
fn bind_navigation(rt: &Runtime) -> Result<(), PageError> {
    let (button, links) = {
        let host = rt.host.borrow();
        let selectors = host.selectors();
        host.require_id(&selectors.nav_panel_id)?;
        (host.require_id(&selectors.menu_button_id)?, host.query_all(&selectors.nav_links)?)
    };

    let menu_rt = rt.clone();
    listen(&button, "click", move |e| menu_rt.dispatch_for(&e, &PageEvent::MenuButtonClicked))?;
    for link in links {
        let rt = rt.clone();
        listen(&link, "click", move |e| rt.dispatch_for(&e, &PageEvent::NavLinkClicked))?;
    }
    Ok(())
}

/// Same-page anchor smooth scrolling and the active link styles.
fn bind_anchors(rt: &Runtime) -> Result<(), PageError> {
    let anchors = {
        let host = rt.host.borrow();
        host.inject_nav_styles()?;
        host.query_all(&host.selectors().anchors)?
    };
    for anchor in anchors {
        let rt = rt.clone();
        listen(&anchor, "click", move |e| {
            let href = e
                .current_target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .and_then(|el| el.get_attribute("href"))
                .unwrap_or_default();
            rt.dispatch_for(&e, &PageEvent::AnchorClicked { href });
        })?;
    }
    Ok(())
}

fn bind_scroll(rt: &Runtime) -> Result<(), PageError> {
    let button = {
        let host = rt.host.borrow();
        host.require_id(&host.selectors().back_to_top_id)?
    };
    let rt = rt.clone();
    listen(&button, "click", move |e| rt.dispatch_for(&e, &PageEvent::BackToTopClicked))
}

/// Keys of every element matching `selector`, registering them on the way.
fn register_all(rt: &Runtime, selector: &str) -> Result<Vec<(ElementKey, Element)>, PageError> {
    let mut host = rt.host.borrow_mut();
    let found = host.query_all(selector)?;
    found
        .into_iter()
        .map(|el| {
            let key = host.register(el.clone())?;
            Ok((key, Element::from(el)))
        })
        .collect()
}

fn observe(
    rt: &Runtime,
    kind: ObserverKind,
    selector: &str,
    init: Option<&IntersectionObserverInit>,
) -> Result<(), PageError> {
    let targets = register_all(rt, selector)?;
    let cb_rt = rt.clone();
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let batch = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .filter_map(|entry| {
                    element_key(&entry.target()).map(|key| Intersection::new(key, entry.is_intersecting()))
                })
                .collect::<Vec<_>>();
            let outcome = cb_rt.dispatch(&PageEvent::Intersection { observer: kind, entries: batch });
            let host = cb_rt.host.borrow();
            for key in outcome.unobserve {
                if let Some(el) = host.element(key) {
                    observer.unobserve(el);
                }
            }
        },
    );
    let observer = match init {
        Some(init) => IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), init),
        None => IntersectionObserver::new(callback.as_ref().unchecked_ref()),
    }
    .map_err(|e| dom_error("IntersectionObserver", &e))?;
    callback.forget();
    for (_, el) in &targets {
        observer.observe(el);
    }
    log::debug!("observing {} elements for {kind:?}", targets.len());
    Ok(())
}

fn bind_reveal(rt: &Runtime) -> Result<(), PageError> {
    let (selector, spec) = {
        let page = rt.page.borrow();
        (page.config().selectors.reveal.clone(), page.reveal.observer_spec().clone())
    };
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(spec.threshold));
    init.set_root_margin(&spec.root_margin);
    observe(rt, ObserverKind::Reveal, &selector, Some(&init))
}

fn bind_lazy_images(rt: &Runtime) -> Result<(), PageError> {
    let selector = rt.page.borrow().config().selectors.lazy_images.clone();
    observe(rt, ObserverKind::LazyImages, &selector, None)
}

fn bind_hover(rt: &Runtime) -> Result<(), PageError> {
    let selector = rt.page.borrow().config().selectors.hover.clone();
    for (key, el) in register_all(rt, &selector)? {
        let enter_rt = rt.clone();
        listen(&el, "mouseenter", move |e| enter_rt.dispatch_for(&e, &PageEvent::PointerEnter(key)))?;
        let leave_rt = rt.clone();
        listen(&el, "mouseleave", move |e| leave_rt.dispatch_for(&e, &PageEvent::PointerLeave(key)))?;
    }
    Ok(())
}

fn bind_cursor(rt: &Runtime) -> Result<(), PageError> {
    if !rt.page.borrow().config().cosmetic.cursor_follower {
        return Ok(());
    }
    let document = rt.host.borrow().document().clone();
    let latest = Rc::new(RefCell::new((0.0, 0.0)));
    let move_rt = rt.clone();
    let move_latest = Rc::clone(&latest);
    let mut place = throttle_trailing(CURSOR_THROTTLE_MS, move || {
        let (x, y) = *move_latest.borrow();
        move_rt.dispatch(&PageEvent::PointerMove { x, y });
    });
    listen(&document, "mousemove", move |e| {
        if let Some(mouse) = e.dyn_ref::<MouseEvent>() {
            *latest.borrow_mut() = (f64::from(mouse.client_x()), f64::from(mouse.client_y()));
            place();
        }
    })
}

fn bind_keyboard(rt: &Runtime) -> Result<(), PageError> {
    let document = rt.host.borrow().document().clone();
    let rt = rt.clone();
    listen(&document, "keydown", move |e| {
        let Some(key) = e.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let modifiers = Modifiers {
            shift: key.shift_key(),
            ctrl: key.ctrl_key(),
            alt: key.alt_key(),
            meta: key.meta_key(),
        };
        rt.dispatch_for(&e, &PageEvent::Key(KeyPress::new(key.key(), modifiers)));
    })
}

fn bind_resize(rt: &Runtime) -> Result<(), PageError> {
    let window = rt.host.borrow().window().clone();
    let wait_ms = rt.page.borrow().config().cosmetic.resize_debounce_ms;
    let resize_rt = rt.clone();
    let mut settled = debounce(wait_ms, move || {
        resize_rt.dispatch(&PageEvent::Resize);
    });
    listen(&window, "resize", move |_| settled())
}

/// Scroll, `load` and the initial fade. These need no page element.
fn bind_lifecycle(rt: &Runtime) -> Result<(), PageError> {
    let (window, document) = {
        let host = rt.host.borrow();
        (host.window().clone(), host.document().clone())
    };

    let scroll_rt = rt.clone();
    listen(&window, "scroll", move |_| {
        scroll_rt.dispatch(&PageEvent::Scroll);
    })?;

    rt.dispatch(&PageEvent::Ready);
    let load_rt = rt.clone();
    let load_window = window.clone();
    let on_load = move || {
        let elapsed_ms = load_window.performance().map_or(0.0, |p| p.now());
        load_rt.dispatch(&PageEvent::Load { elapsed_ms });
    };
    if document.ready_state() == "complete" {
        on_load();
        return Ok(());
    }
    listen(&window, "load", move |_| on_load())
}

fn bind_error_log(rt: &Runtime) -> Result<(), PageError> {
    let window = rt.host.borrow().window().clone();
    let rt = rt.clone();
    listen(&window, "error", move |e| {
        let message = e.dyn_ref::<ErrorEvent>().map_or_else(|| e.type_(), ErrorEvent::message);
        rt.dispatch(&PageEvent::Error { message });
    })
}
