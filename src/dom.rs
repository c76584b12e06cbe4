//! DOM implementation of the page presentation seams.
//!
//! `DomHost` resolves the fixed page elements once, after the document is
//! parsed, and keeps a registry of the repeated elements (reveal targets,
//! hover targets, deferred images) addressed by [`ElementKey`]. Missing fixed
//! elements are tolerated here: writes aimed at them are skipped. Controllers
//! that cannot work without an element fail at bind time instead (see
//! `boot`).

use page::config::Selectors;
use page::consts::{ACTIVE_NAV_CSS, THEME_ATTRIBUTE};
use page::error::PageError;
use page::surface::{ElementKey, Layout, Section, Surface, Target};
use page::theme::Theme;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::registry::Registry;

/// Attribute carrying an element's registry key.
const KEY_ATTRIBUTE: &str = "data-page-key";

const VISIBLE_CLASS: &str = "visible";
const ACTIVE_CLASS: &str = "active";
const LAZY_CLASS: &str = "lazy";

const CURSOR_STYLE: &str = "position: fixed; width: 20px; height: 20px; \
    background: var(--accent-gradient); border-radius: 50%; pointer-events: none; \
    z-index: 9999; mix-blend-mode: difference; transition: transform 0.1s ease;";

pub(crate) fn dom_error(context: &str, err: &JsValue) -> PageError {
    PageError::Dom(format!("{context}: {err:?}"))
}

fn log_failure<T>(context: &str, result: Result<T, JsValue>) {
    if let Err(e) = result {
        log::debug!("{context} failed: {e:?}");
    }
}

/// Registry key stored on `element`, if it was registered.
pub fn element_key(element: &Element) -> Option<ElementKey> {
    element.get_attribute(KEY_ATTRIBUTE)?.parse().ok().map(ElementKey)
}

pub struct DomHost {
    window: Window,
    document: Document,
    root: Element,
    body: HtmlElement,
    selectors: Selectors,
    theme_icons: Vec<Element>,
    theme_label: Option<Element>,
    nav_panel: Option<HtmlElement>,
    menu_icon: Option<Element>,
    back_to_top: Option<HtmlElement>,
    header: Option<HtmlElement>,
    hero: Option<HtmlElement>,
    cursor: Option<HtmlElement>,
    registry: Registry<HtmlElement>,
}

impl DomHost {
    /// Resolve the page elements named by `selectors`.
    ///
    /// # Errors
    ///
    /// Fails only when there is no window, document, root element or body.
    pub fn new(selectors: Selectors) -> Result<Self, PageError> {
        let window = web_sys::window().ok_or_else(|| PageError::missing("window"))?;
        let document = window.document().ok_or_else(|| PageError::missing("document"))?;
        let root = document.document_element().ok_or_else(|| PageError::missing("html"))?;
        let body = document.body().ok_or_else(|| PageError::missing("body"))?;

        let theme_icons = [&selectors.theme_icon_id, &selectors.floating_theme_icon_id]
            .into_iter()
            .filter_map(|id| document.get_element_by_id(id))
            .collect();
        let theme_label = document
            .get_element_by_id(&selectors.theme_toggle_id)
            .and_then(|toggle| toggle.query_selector("span").ok().flatten());
        let menu_icon = document
            .get_element_by_id(&selectors.menu_button_id)
            .and_then(|button| button.query_selector("i").ok().flatten());

        Ok(Self {
            nav_panel: by_id(&document, &selectors.nav_panel_id),
            back_to_top: by_id(&document, &selectors.back_to_top_id),
            header: query_one(&document, &selectors.header),
            hero: query_one(&document, &selectors.hero),
            cursor: None,
            theme_icons,
            theme_label,
            menu_icon,
            window,
            document,
            root,
            body,
            selectors,
            registry: Registry::new(),
        })
    }

    #[must_use]
    pub fn window(&self) -> &Window {
        &self.window
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    #[must_use]
    pub fn selectors(&self) -> &Selectors {
        &self.selectors
    }

    /// Element with `id`, as an `HtmlElement`.
    #[must_use]
    pub fn by_id(&self, id: &str) -> Option<HtmlElement> {
        by_id(&self.document, id)
    }

    /// Like [`DomHost::by_id`] but missing is an error naming the element.
    ///
    /// # Errors
    ///
    /// [`PageError::MissingElement`] when no element has `id`.
    pub fn require_id(&self, id: &str) -> Result<HtmlElement, PageError> {
        self.by_id(id).ok_or_else(|| PageError::missing(format!("#{id}")))
    }

    /// Every element matching `selector`, in document order.
    ///
    /// # Errors
    ///
    /// [`PageError::Dom`] when the selector does not parse.
    pub fn query_all(&self, selector: &str) -> Result<Vec<HtmlElement>, PageError> {
        let list = self.document.query_selector_all(selector).map_err(|e| dom_error(selector, &e))?;
        Ok((0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect())
    }

    /// Register `element`, capturing its inline transform as the hover base.
    /// Registering an element twice returns the same key. A key already
    /// present in markup is only trusted when it names this element.
    ///
    /// # Errors
    ///
    /// [`PageError::Dom`] if the key attribute cannot be written.
    pub fn register(&mut self, element: HtmlElement) -> Result<ElementKey, PageError> {
        if let Some(key) = self.registry.find(element_key(&element), &element) {
            return Ok(key);
        }
        let key = self.registry.next_key()?;
        element
            .set_attribute(KEY_ATTRIBUTE, &key.0.to_string())
            .map_err(|e| dom_error(KEY_ATTRIBUTE, &e))?;
        let base_transform = element.style().get_property_value("transform").unwrap_or_default();
        self.registry.push(element, base_transform);
        Ok(key)
    }

    #[must_use]
    pub fn element(&self, key: ElementKey) -> Option<&HtmlElement> {
        self.registry.get(key)
    }

    /// Append the active navigation link rules to `<head>`.
    ///
    /// # Errors
    ///
    /// [`PageError::Dom`] if the style element cannot be created or attached.
    pub fn inject_nav_styles(&self) -> Result<(), PageError> {
        let head = self.document.head().ok_or_else(|| PageError::missing("head"))?;
        let style = self.document.create_element("style").map_err(|e| dom_error("create style", &e))?;
        style.set_text_content(Some(ACTIVE_NAV_CSS));
        head.append_child(&style).map_err(|e| dom_error("append style", &e))?;
        Ok(())
    }

    fn target(&self, target: Target) -> Option<HtmlElement> {
        match target {
            Target::Page => Some(self.body.clone()),
            Target::Hero => self.hero.clone(),
            Target::BackToTop => self.back_to_top.clone(),
            Target::Cursor => self.cursor.clone(),
            Target::Element(key) => self.element(key).cloned(),
        }
    }

    fn ensure_cursor(&mut self) -> Option<HtmlElement> {
        if self.cursor.is_none() {
            let created = self
                .document
                .create_element("div")
                .and_then(|el| el.dyn_into::<HtmlElement>().map_err(JsValue::from));
            match created {
                Ok(cursor) => {
                    cursor.set_class_name("cursor");
                    cursor.style().set_css_text(CURSOR_STYLE);
                    log_failure("append cursor", self.body.append_child(&cursor));
                    self.cursor = Some(cursor);
                }
                Err(e) => log::debug!("cursor not created: {e:?}"),
            }
        }
        self.cursor.clone()
    }
}

fn by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    document.get_element_by_id(id).and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

fn query_one(document: &Document, selector: &str) -> Option<HtmlElement> {
    match document.query_selector(selector) {
        Ok(found) => found.and_then(|el| el.dyn_into::<HtmlElement>().ok()),
        Err(e) => {
            log::debug!("bad selector {selector}: {e:?}");
            None
        }
    }
}

impl Surface for DomHost {
    fn apply_theme(&mut self, theme: Theme) {
        let result = if theme.is_dark() {
            self.root.set_attribute(THEME_ATTRIBUTE, "dark")
        } else {
            self.root.remove_attribute(THEME_ATTRIBUTE)
        };
        log_failure("apply theme", result);
    }

    fn set_theme_indicator(&mut self, icon: &str, label: &str) {
        for el in &self.theme_icons {
            el.set_class_name(icon);
        }
        if let Some(el) = &self.theme_label {
            el.set_text_content(Some(label));
        }
    }

    fn set_disclosure(&mut self, open: bool, icon: &str) {
        if let Some(panel) = &self.nav_panel {
            let classes = panel.class_list();
            let result = if open { classes.add_1(ACTIVE_CLASS) } else { classes.remove_1(ACTIVE_CLASS) };
            log_failure("toggle navigation", result);
        }
        if let Some(el) = &self.menu_icon {
            el.set_class_name(icon);
        }
    }

    fn set_active_link(&mut self, section: Option<&str>) {
        let links = match self.query_all(&self.selectors.nav_links) {
            Ok(links) => links,
            Err(e) => {
                log::debug!("active link not updated: {e}");
                return;
            }
        };
        let wanted = section.map(|id| format!("#{id}"));
        for link in links {
            let classes = link.class_list();
            log_failure("clear active link", classes.remove_1(ACTIVE_CLASS));
            if wanted.is_some() && link.get_attribute("href") == wanted {
                log_failure("mark active link", classes.add_1(ACTIVE_CLASS));
            }
        }
    }

    fn set_visible(&mut self, target: Target, visible: bool) {
        if let Some(el) = self.target(target) {
            let classes = el.class_list();
            let result = if visible { classes.add_1(VISIBLE_CLASS) } else { classes.remove_1(VISIBLE_CLASS) };
            log_failure("toggle visible", result);
        }
    }

    fn set_transform(&mut self, target: Target, transform: &str) {
        if let Some(el) = self.target(target) {
            log_failure("set transform", el.style().set_property("transform", transform));
        }
    }

    fn set_opacity(&mut self, target: Target, opacity: f64, transition_ms: Option<u32>) {
        let Some(el) = self.target(target) else {
            return;
        };
        let style = el.style();
        log_failure("set opacity", style.set_property("opacity", &opacity.to_string()));
        if let Some(ms) = transition_ms {
            let transition = format!("opacity {}s ease", f64::from(ms) / 1000.0);
            log_failure("set transition", style.set_property("transition", &transition));
        }
    }

    fn scroll_to(&mut self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn place_cursor(&mut self, left: f64, top: f64) {
        if let Some(cursor) = self.ensure_cursor() {
            let style = cursor.style();
            log_failure("cursor left", style.set_property("left", &format!("{left}px")));
            log_failure("cursor top", style.set_property("top", &format!("{top}px")));
        }
    }

    fn load_image(&mut self, key: ElementKey) {
        let Some(img) = self.element(key) else {
            return;
        };
        if let Some(src) = img.get_attribute("data-src") {
            log_failure("load image", img.set_attribute("src", &src));
        }
        log_failure("clear lazy", img.class_list().remove_1(LAZY_CLASS));
    }
}

impl Layout for DomHost {
    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn viewport_height(&self) -> f64 {
        self.window.inner_height().ok().and_then(|h| h.as_f64()).unwrap_or(0.0)
    }

    fn header_height(&self) -> f64 {
        self.header.as_ref().map_or(0.0, |header| f64::from(header.offset_height()))
    }

    fn element_top(&self, id: &str) -> Option<f64> {
        self.by_id(id).map(|el| f64::from(el.offset_top()))
    }

    fn sections(&self) -> Vec<Section> {
        match self.query_all(&self.selectors.sections) {
            Ok(found) => found
                .into_iter()
                .filter(|el| !el.id().is_empty())
                .map(|el| Section::new(el.id(), f64::from(el.offset_top())))
                .collect(),
            Err(e) => {
                log::debug!("sections not read: {e}");
                Vec::new()
            }
        }
    }

    fn base_transform(&self, key: ElementKey) -> String {
        self.registry.base_transform(key).unwrap_or_default().to_owned()
    }
}
