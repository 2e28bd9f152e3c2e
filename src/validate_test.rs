use super::*;
use crate::doc::{ComponentTemplate, Connection, NodeId, Part, PlacedComponent};
use crate::geom::Point;

// =============================================================
// Helpers
// =============================================================

fn fixed(part: Part, x: f64, y: f64) -> PlacedComponent {
    PlacedComponent::fixed(ComponentTemplate::new(format!("{:?}", part.kind()), "?", part), Point::new(x, y))
}

/// A doc with one node per kind used by the installation rules.
fn installation() -> (DiagramDoc, Vec<NodeId>) {
    let nodes = vec![
        fixed(Part::MainSwitch, 100.0, 100.0),
        fixed(Part::CircuitBreaker, 100.0, 200.0),
        fixed(Part::Rcd, 100.0, 300.0),
        fixed(Part::Outlet, 300.0, 100.0),
        fixed(Part::Light, 300.0, 200.0),
        fixed(Part::Switch, 300.0, 300.0),
    ];
    let ids = nodes.iter().map(|n| n.id).collect();
    (DiagramDoc::with_fixed(nodes), ids)
}

fn rules() -> Vec<ValidationRule> {
    vec![
        ValidationRule::link(PartKind::MainSwitch, [PartKind::CircuitBreaker], "main-breaker"),
        ValidationRule::link(PartKind::CircuitBreaker, [PartKind::Rcd], "breaker-rcd"),
        ValidationRule::link(PartKind::Rcd, [PartKind::Outlet, PartKind::Light], "rcd-load"),
        ValidationRule::link(PartKind::Switch, [PartKind::Light], "switch-light"),
    ]
}

fn wire(doc: &mut DiagramDoc, a: NodeId, b: NodeId) {
    assert!(doc.connect(Connection { start: a, end: b }));
}

// =============================================================
// ValidationRule
// =============================================================

#[test]
fn link_rule_kinds_lists_both_sides() {
    let rule = ValidationRule::link(PartKind::Rcd, [PartKind::Outlet, PartKind::Light], "x");
    assert_eq!(rule.kinds(), vec![PartKind::Rcd, PartKind::Outlet, PartKind::Light]);
}

#[test]
fn quota_rule_counts_placed() {
    let mut doc = DiagramDoc::default();
    let rule = ValidationRule::quota(PartKind::Outlet, 2, "need two outlets");
    assert!(!rule.holds(&doc));

    let outlet = ComponentTemplate::new("Outlet", "⏚", Part::Outlet);
    doc.place(PlacedComponent::dropped(outlet.clone(), Point::new(0.0, 0.0)));
    doc.place(PlacedComponent::dropped(outlet, Point::new(10.0, 0.0)));
    assert!(rule.holds(&doc));
    assert_eq!(rule.message(), "need two outlets");
}

#[test]
fn rule_serde_is_tagged() {
    let json = r#"{"rule": "link", "from": "switch", "to": ["light"], "message": "Switch is not connected to a Light"}"#;
    let rule: ValidationRule = serde_json::from_str(json).unwrap();
    assert_eq!(rule, ValidationRule::link(PartKind::Switch, [PartKind::Light], "Switch is not connected to a Light"));
}

// =============================================================
// ValidationReport
// =============================================================

#[test]
fn empty_connection_set_fails_every_link_rule() {
    let (doc, _) = installation();
    let report = ValidationReport::run(&rules(), &[], &doc);
    assert_eq!(report.failures, vec!["main-breaker", "breaker-rcd", "rcd-load", "switch-light"]);
    assert!(!report.is_success());
}

#[test]
fn fully_wired_passes_in_any_order() {
    let (mut doc, ids) = installation();
    let [main, breaker, rcd, outlet, light, switch] = ids[..] else {
        unreachable!("six nodes");
    };
    // Reverse direction and scrambled order compared to the rule list.
    wire(&mut doc, light, switch);
    wire(&mut doc, outlet, rcd);
    wire(&mut doc, rcd, breaker);
    wire(&mut doc, breaker, main);

    let report = ValidationReport::run(&rules(), &[], &doc);
    assert!(report.is_success(), "unexpected failures: {:?}", report.failures);
}

#[test]
fn partial_wiring_reports_remaining_in_rule_order() {
    let (mut doc, ids) = installation();
    wire(&mut doc, ids[0], ids[1]);
    wire(&mut doc, ids[5], ids[4]);
    let report = ValidationReport::run(&rules(), &[], &doc);
    assert_eq!(report.failures, vec!["breaker-rcd", "rcd-load"]);
}

#[test]
fn duplicate_connections_do_not_change_outcome() {
    let (mut doc, ids) = installation();
    wire(&mut doc, ids[0], ids[1]);
    wire(&mut doc, ids[0], ids[1]);
    let report = ValidationReport::run(&rules(), &[], &doc);
    assert_eq!(report.failures.len(), 3);
}

#[test]
fn unmet_context_quota_is_reported_after_rules() {
    let doc = DiagramDoc::default();
    let quotas = [Quota { kind: PartKind::Outlet, required: 4 }, Quota { kind: PartKind::Light, required: 0 }];
    let explicit = [ValidationRule::quota(PartKind::Switch, 1, "no switch")];
    let report = ValidationReport::run(&explicit, &quotas, &doc);
    assert_eq!(report.failures, vec!["no switch".to_string(), "Outlets placed 0 of 4 required".to_string()]);
}

#[test]
fn report_message_success() {
    let wording = ReportMessages {
        success: "Installation verified successfully!".into(),
        failure_heading: "Installation issues found:".into(),
    };
    assert_eq!(ValidationReport::default().message(&wording), "Installation verified successfully!");
}

#[test]
fn report_message_lists_failures_under_heading() {
    let report = ValidationReport { failures: vec!["a".into(), "b".into()] };
    assert_eq!(report.message(&ReportMessages::default()), "Diagram issues found:\na\nb");
}

// =============================================================
// Tally
// =============================================================

#[test]
fn tally_label_and_met() {
    let mut doc = DiagramDoc::default();
    let quota = Quota { kind: PartKind::Outlet, required: 1 };
    let before = Tally::of(quota, &doc);
    assert_eq!(before.label(), "Outlets: 0/1");
    assert!(!before.is_met());

    doc.place(PlacedComponent::dropped(ComponentTemplate::new("Outlet", "⏚", Part::Outlet), Point::new(0.0, 0.0)));
    let after = Tally::of(quota, &doc);
    assert_eq!(after.label(), "Outlets: 1/1");
    assert!(after.is_met());
}
