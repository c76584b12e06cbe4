//! Recording fake host shared by the unit tests.

use std::collections::HashMap;

use crate::surface::{ElementKey, Layout, Section, Surface, Target};
use crate::theme::Theme;

/// One recorded surface write.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Theme(Theme),
    Indicator { icon: String, label: String },
    Disclosure { open: bool, icon: String },
    ActiveLink(Option<String>),
    Visible(Target, bool),
    Transform(Target, String),
    Opacity(Target, f64, Option<u32>),
    ScrollTo(f64),
    Cursor(f64, f64),
    LoadImage(ElementKey),
}

/// Layout values are plain fields; every write is appended to `calls`.
#[derive(Debug, Default)]
pub struct FakeHost {
    pub calls: Vec<Call>,
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub header_height: f64,
    pub sections: Vec<Section>,
    pub element_tops: HashMap<String, f64>,
    pub base_transforms: HashMap<ElementKey, String>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self { viewport_height: 900.0, ..Self::default() }
    }

    pub fn with_sections(tops: &[(&str, f64)]) -> Self {
        let mut host = Self::new();
        for (id, top) in tops {
            host.sections.push(Section::new(*id, *top));
            host.element_tops.insert((*id).to_owned(), *top);
        }
        host
    }

    pub fn take(&mut self) -> Vec<Call> {
        std::mem::take(&mut self.calls)
    }

    /// Final presentation-attribute value implied by the recorded calls.
    pub fn last_theme(&self) -> Option<Theme> {
        self.calls.iter().rev().find_map(|call| match call {
            Call::Theme(theme) => Some(*theme),
            _ => None,
        })
    }
}

impl Surface for FakeHost {
    fn apply_theme(&mut self, theme: Theme) {
        self.calls.push(Call::Theme(theme));
    }

    fn set_theme_indicator(&mut self, icon: &str, label: &str) {
        self.calls.push(Call::Indicator { icon: icon.to_owned(), label: label.to_owned() });
    }

    fn set_disclosure(&mut self, open: bool, icon: &str) {
        self.calls.push(Call::Disclosure { open, icon: icon.to_owned() });
    }

    fn set_active_link(&mut self, section: Option<&str>) {
        self.calls.push(Call::ActiveLink(section.map(str::to_owned)));
    }

    fn set_visible(&mut self, target: Target, visible: bool) {
        self.calls.push(Call::Visible(target, visible));
    }

    fn set_transform(&mut self, target: Target, transform: &str) {
        self.calls.push(Call::Transform(target, transform.to_owned()));
    }

    fn set_opacity(&mut self, target: Target, opacity: f64, transition_ms: Option<u32>) {
        self.calls.push(Call::Opacity(target, opacity, transition_ms));
    }

    fn scroll_to(&mut self, top: f64) {
        self.calls.push(Call::ScrollTo(top));
    }

    fn place_cursor(&mut self, left: f64, top: f64) {
        self.calls.push(Call::Cursor(left, top));
    }

    fn load_image(&mut self, key: ElementKey) {
        self.calls.push(Call::LoadImage(key));
    }
}

impl Layout for FakeHost {
    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    fn header_height(&self) -> f64 {
        self.header_height
    }

    fn element_top(&self, id: &str) -> Option<f64> {
        self.element_tops.get(id).copied()
    }

    fn sections(&self) -> Vec<Section> {
        self.sections.clone()
    }

    fn base_transform(&self, key: ElementKey) -> String {
        self.base_transforms.get(&key).cloned().unwrap_or_default()
    }
}
