#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use uuid::Uuid;

use super::*;

fn resistor() -> ComponentTemplate {
    ComponentTemplate::new("Resistor", "⏛", Part::Resistor { ohms: 100.0 })
}

fn node(name: &str, part: Part, x: f64, y: f64) -> PlacedComponent {
    PlacedComponent::fixed(ComponentTemplate::new(name, "?", part), Point::new(x, y))
}

// =============================================================
// Part / PartKind
// =============================================================

#[test]
fn part_kind_matches_variant() {
    assert_eq!(Part::Outlet.kind(), PartKind::Outlet);
    assert_eq!(Part::Rcd.kind(), PartKind::Rcd);
    assert_eq!(Part::Resistor { ohms: 1.0 }.kind(), PartKind::Resistor);
    assert_eq!(Part::VoltageSource { volts: 12.0 }.kind(), PartKind::VoltageSource);
}

#[test]
fn part_rating_only_for_rated_parts() {
    assert_eq!(Part::Resistor { ohms: 100.0 }.rating(), Some((100.0, "Ω")));
    assert_eq!(Part::Capacitor { microfarads: 47.0 }.rating(), Some((47.0, "µF")));
    assert_eq!(Part::Inductor { millihenries: 10.0 }.rating(), Some((10.0, "mH")));
    assert_eq!(Part::VoltageSource { volts: 12.0 }.rating(), Some((12.0, "V")));
    assert_eq!(Part::Outlet.rating(), None);
    assert_eq!(Part::Rcd.rating(), None);
}

#[test]
fn part_serde_is_internally_tagged() {
    let json = serde_json::to_value(Part::Resistor { ohms: 220.0 }).unwrap();
    assert_eq!(json, serde_json::json!({ "kind": "resistor", "ohms": 220.0 }));

    let back: Part = serde_json::from_str(r#"{"kind": "gfci_outlet"}"#).unwrap();
    assert_eq!(back, Part::GfciOutlet);
}

#[test]
fn part_serde_rejects_missing_rating() {
    let result: Result<Part, _> = serde_json::from_str(r#"{"kind": "capacitor"}"#);
    assert!(result.is_err());
}

#[test]
fn part_kind_serde_snake_case() {
    assert_eq!(serde_json::to_string(&PartKind::MainSwitch).unwrap(), "\"main_switch\"");
    let back: PartKind = serde_json::from_str("\"circuit_breaker\"").unwrap();
    assert_eq!(back, PartKind::CircuitBreaker);
}

// =============================================================
// PlacedComponent
// =============================================================

#[test]
fn dropped_component_is_not_fixed() {
    let c = PlacedComponent::dropped(resistor(), Point::new(10.0, 20.0));
    assert!(!c.fixed);
    assert_eq!(c.at, Point::new(10.0, 20.0));
    assert_eq!(c.kind(), PartKind::Resistor);
}

#[test]
fn each_instance_gets_its_own_id() {
    let a = PlacedComponent::dropped(resistor(), Point::new(0.0, 0.0));
    let b = PlacedComponent::dropped(resistor(), Point::new(0.0, 0.0));
    assert_ne!(a.id, b.id);
}

// =============================================================
// Connection
// =============================================================

#[test]
fn connection_refuses_self_loop() {
    let id = Uuid::new_v4();
    assert!(Connection::between(id, id).is_none());
}

#[test]
fn connection_keeps_drag_direction() {
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();
    assert_eq!(Connection::between(a, b), Some(Connection { start: a, end: b }));
}

// =============================================================
// DiagramDoc
// =============================================================

#[test]
fn default_doc_is_empty() {
    let doc = DiagramDoc::default();
    assert!(doc.placed().is_empty());
    assert!(doc.connections().is_empty());
    assert_eq!(doc.nodes().count(), 0);
}

#[test]
fn place_appends_in_order() {
    let mut doc = DiagramDoc::default();
    let first = doc.place(PlacedComponent::dropped(resistor(), Point::new(100.0, 200.0)));
    let second = doc.place(PlacedComponent::dropped(resistor(), Point::new(300.0, 200.0)));
    let ids: Vec<_> = doc.placed().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![first, second]);
}

#[test]
fn nodes_lists_fixed_before_placed() {
    let fixed = node("Main Switch", Part::MainSwitch, 100.0, 100.0);
    let fixed_id = fixed.id;
    let mut doc = DiagramDoc::with_fixed(vec![fixed]);
    let placed_id = doc.place(PlacedComponent::dropped(resistor(), Point::new(0.0, 0.0)));
    let ids: Vec<_> = doc.nodes().map(|n| n.id).collect();
    assert_eq!(ids, vec![fixed_id, placed_id]);
}

#[test]
fn connect_requires_known_endpoints() {
    let a = node("A", Part::MainSwitch, 0.0, 0.0);
    let a_id = a.id;
    let mut doc = DiagramDoc::with_fixed(vec![a]);
    let stray = Connection { start: a_id, end: Uuid::new_v4() };
    assert!(!doc.connect(stray));
    assert!(doc.connections().is_empty());
}

#[test]
fn connect_rejects_self_loop_built_by_hand() {
    let a = node("A", Part::MainSwitch, 0.0, 0.0);
    let a_id = a.id;
    let mut doc = DiagramDoc::with_fixed(vec![a]);
    assert!(!doc.connect(Connection { start: a_id, end: a_id }));
}

#[test]
fn connect_keeps_duplicates() {
    let a = node("A", Part::MainSwitch, 0.0, 0.0);
    let b = node("B", Part::CircuitBreaker, 0.0, 100.0);
    let (a_id, b_id) = (a.id, b.id);
    let mut doc = DiagramDoc::with_fixed(vec![a, b]);
    assert!(doc.connect(Connection { start: a_id, end: b_id }));
    assert!(doc.connect(Connection { start: b_id, end: a_id }));
    assert_eq!(doc.connections().len(), 2);
}

#[test]
fn count_of_counts_placed_only() {
    let fixed = node("Socket", Part::Outlet, 0.0, 0.0);
    let mut doc = DiagramDoc::with_fixed(vec![fixed]);
    let outlet = ComponentTemplate::new("Outlet", "⏚", Part::Outlet);
    doc.place(PlacedComponent::dropped(outlet.clone(), Point::new(1.0, 1.0)));
    doc.place(PlacedComponent::dropped(outlet, Point::new(2.0, 2.0)));
    doc.place(PlacedComponent::dropped(resistor(), Point::new(3.0, 3.0)));
    assert_eq!(doc.count_of(PartKind::Outlet), 2);
    assert_eq!(doc.count_of(PartKind::Resistor), 1);
    assert_eq!(doc.count_of(PartKind::Light), 0);
}

#[test]
fn has_link_matches_either_direction() {
    let rcd = node("RCD", Part::Rcd, 0.0, 0.0);
    let light = node("Light", Part::Light, 100.0, 0.0);
    let (rcd_id, light_id) = (rcd.id, light.id);
    let mut doc = DiagramDoc::with_fixed(vec![rcd, light]);
    assert!(!doc.has_link(PartKind::Rcd, &[PartKind::Outlet, PartKind::Light]));

    doc.connect(Connection { start: light_id, end: rcd_id });
    assert!(doc.has_link(PartKind::Rcd, &[PartKind::Outlet, PartKind::Light]));
    assert!(doc.has_link(PartKind::Light, &[PartKind::Rcd]));
    assert!(!doc.has_link(PartKind::Rcd, &[PartKind::Outlet]));
}

#[test]
fn clear_keeps_fixed_nodes() {
    let a = node("A", Part::MainSwitch, 0.0, 0.0);
    let b = node("B", Part::CircuitBreaker, 0.0, 100.0);
    let (a_id, b_id) = (a.id, b.id);
    let mut doc = DiagramDoc::with_fixed(vec![a, b]);
    doc.place(PlacedComponent::dropped(resistor(), Point::new(0.0, 0.0)));
    doc.connect(Connection { start: a_id, end: b_id });

    doc.clear();

    assert!(doc.placed().is_empty());
    assert!(doc.connections().is_empty());
    assert_eq!(doc.fixed().len(), 2);
    assert!(doc.get(&a_id).is_some());
}
