use super::*;
use crate::testing::{Call, FakeHost};

fn sections() -> Vec<Section> {
    vec![Section::new("home", 0.0), Section::new("projects", 800.0), Section::new("contact", 1600.0)]
}

#[test]
fn anchor_target_classifies_hrefs() {
    assert_eq!(AnchorTarget::parse("#about"), Some(AnchorTarget::Id("about")));
    assert_eq!(AnchorTarget::parse("#"), Some(AnchorTarget::Empty));
    assert_eq!(AnchorTarget::parse("https://example.com/#about"), None);
    assert_eq!(AnchorTarget::parse("/resume.pdf"), None);
}

#[test]
fn current_section_uses_look_ahead() {
    let sections = sections();
    assert_eq!(current_section(850.0, &sections, 300.0).map(|s| s.id.as_str()), Some("projects"));
    assert_eq!(current_section(499.0, &sections, 300.0).map(|s| s.id.as_str()), Some("home"));
    assert_eq!(current_section(500.0, &sections, 300.0).map(|s| s.id.as_str()), Some("projects"));
    assert_eq!(current_section(1300.0, &sections, 300.0).map(|s| s.id.as_str()), Some("contact"));
}

#[test]
fn current_section_is_none_above_first_section() {
    let sections = vec![Section::new("about", 600.0)];
    assert!(current_section(0.0, &sections, 300.0).is_none());
    assert!(current_section(0.0, &[], 300.0).is_none());
}

#[test]
fn update_active_link_marks_second_section() {
    let mut nav = NavController::new(300.0);
    let mut host = FakeHost::new();

    assert_eq!(nav.update_active_link(850.0, &sections(), &mut host), Some("projects"));
    assert_eq!(host.take(), vec![Call::ActiveLink(Some("projects".to_owned()))]);
}

#[test]
fn update_active_link_writes_only_on_change() {
    let mut nav = NavController::new(300.0);
    let mut host = FakeHost::new();
    let sections = sections();

    nav.update_active_link(10.0, &sections, &mut host);
    nav.update_active_link(20.0, &sections, &mut host);
    nav.update_active_link(30.0, &sections, &mut host);
    assert_eq!(host.take(), vec![Call::ActiveLink(Some("home".to_owned()))]);

    nav.update_active_link(1400.0, &sections, &mut host);
    assert_eq!(host.take(), vec![Call::ActiveLink(Some("contact".to_owned()))]);
}

#[test]
fn update_active_link_clears_when_scrolled_above_all_sections() {
    let mut nav = NavController::new(300.0);
    let mut host = FakeHost::new();
    let sections = vec![Section::new("about", 600.0)];

    nav.update_active_link(400.0, &sections, &mut host);
    nav.update_active_link(100.0, &sections, &mut host);
    assert_eq!(host.take(), vec![Call::ActiveLink(Some("about".to_owned())), Call::ActiveLink(None)]);
    assert_eq!(nav.active(), None);
}

#[test]
fn toggle_disclosure_flips_and_swaps_icon() {
    let mut nav = NavController::new(300.0);
    let mut host = FakeHost::new();

    assert!(nav.toggle_disclosure(&mut host));
    assert!(!nav.toggle_disclosure(&mut host));
    assert_eq!(
        host.take(),
        vec![
            Call::Disclosure { open: true, icon: "fas fa-times".to_owned() },
            Call::Disclosure { open: false, icon: "fas fa-bars".to_owned() },
        ]
    );
}

#[test]
fn close_disclosure_forces_closed() {
    let mut nav = NavController::new(300.0);
    let mut host = FakeHost::new();
    nav.toggle_disclosure(&mut host);
    nav.close_disclosure(&mut host);
    assert!(!nav.is_open());
    assert_eq!(host.calls.last(), Some(&Call::Disclosure { open: false, icon: "fas fa-bars".to_owned() }));
}

#[test]
fn anchor_click_scrolls_below_header() {
    let nav = NavController::new(300.0);
    let mut host = FakeHost::with_sections(&[("projects", 800.0)]);
    host.header_height = 72.0;

    assert!(nav.handle_anchor_click("#projects", &mut host));
    assert_eq!(host.take(), vec![Call::ScrollTo(728.0)]);
}

#[test]
fn anchor_click_to_missing_target_is_swallowed() {
    let nav = NavController::new(300.0);
    let mut host = FakeHost::new();

    assert!(nav.handle_anchor_click("#nowhere", &mut host));
    assert!(nav.handle_anchor_click("#", &mut host));
    assert!(host.calls.is_empty());
}

#[test]
fn external_link_is_left_to_the_browser() {
    let nav = NavController::new(300.0);
    let mut host = FakeHost::new();
    assert!(!nav.handle_anchor_click("https://github.com", &mut host));
    assert!(host.calls.is_empty());
}
