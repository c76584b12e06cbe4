use super::*;
use crate::testing::{Call, FakeHost};

fn controller() -> RevealController {
    RevealController::new(
        ObserverSpec { threshold: 0.15, root_margin: "0px 0px -100px 0px".to_owned() },
        500,
    )
}

#[test]
fn first_intersection_reveals() {
    let mut reveal = controller();
    let mut host = FakeHost::new();
    let key = ElementKey(3);

    let newly = reveal.on_intersection(&[Intersection::new(key, true)], &mut host);
    assert_eq!(newly, vec![key]);
    assert!(reveal.is_revealed(key));
    assert_eq!(host.take(), vec![Call::Visible(Target::Element(key), true)]);
}

#[test]
fn flag_transitions_exactly_once_across_enter_and_exit() {
    let mut reveal = controller();
    let mut host = FakeHost::new();
    let key = ElementKey(1);

    for is_intersecting in [false, true, false, true, true, false] {
        reveal.on_intersection(&[Intersection::new(key, is_intersecting)], &mut host);
    }

    assert!(reveal.is_revealed(key));
    assert_eq!(host.take(), vec![Call::Visible(Target::Element(key), true)]);
}

#[test]
fn non_intersecting_entries_are_ignored() {
    let mut reveal = controller();
    let mut host = FakeHost::new();

    let newly = reveal.on_intersection(&[Intersection::new(ElementKey(0), false)], &mut host);
    assert!(newly.is_empty());
    assert!(!reveal.is_revealed(ElementKey(0)));
    assert!(host.calls.is_empty());
}

#[test]
fn batch_reveals_each_element_independently() {
    let mut reveal = controller();
    let mut host = FakeHost::new();
    let entries = [
        Intersection::new(ElementKey(0), true),
        Intersection::new(ElementKey(1), false),
        Intersection::new(ElementKey(2), true),
    ];

    assert_eq!(reveal.on_intersection(&entries, &mut host), vec![ElementKey(0), ElementKey(2)]);
    assert!(!reveal.is_revealed(ElementKey(1)));
}

#[test]
fn page_fades_in_on_load() {
    let reveal = controller();
    let mut host = FakeHost::new();
    reveal.on_ready(&mut host);
    reveal.on_load(&mut host);
    assert_eq!(
        host.take(),
        vec![Call::Opacity(Target::Page, 0.0, None), Call::Opacity(Target::Page, 1.0, Some(500))]
    );
}

#[test]
fn observer_spec_is_exposed_for_the_host() {
    let reveal = controller();
    assert_eq!(reveal.observer_spec().root_margin, "0px 0px -100px 0px");
}
