mod common;

use buildmap_lib::{route, Error, Route, RouteRenderMode, RouteReport, RouteRequest};
use common::elbow_snapshot;

fn computed_route() -> Route {
    route(&elbow_snapshot(), &RouteRequest::new(1, 3)).expect("route exists")
}

#[test]
fn report_resolves_endpoint_names() {
    let report = RouteReport::from_route(&computed_route()).expect("non-empty route");

    assert_eq!(report.start.id, 1);
    assert_eq!(report.start.name, "A");
    assert_eq!(report.end.id, 3);
    assert_eq!(report.end.name, "C");
    assert_eq!(report.hops, 2);
    assert_eq!(report.total_distance, 2.0);
}

#[test]
fn empty_route_cannot_become_a_report() {
    let route = Route {
        start: 1,
        end: 2,
        path: Vec::new(),
        total_distance: 0.0,
        steps: Vec::new(),
    };
    let error = RouteReport::from_route(&route).expect_err("no nodes");
    assert!(matches!(error, Error::EmptyRoute));
}

#[test]
fn plain_rendering_lists_one_line_per_step() {
    let report = RouteReport::from_route(&computed_route()).expect("non-empty route");
    let rendered = report.render(RouteRenderMode::PlainText);

    let lines: Vec<_> = rendered.lines().collect();
    assert_eq!(lines.len(), 1 + report.steps.len());
    assert!(lines[0].contains("A -> C"));
    assert!(lines[1].contains("Go forward 1"));
    assert!(lines[2].contains("Turn right"));
}

#[test]
fn rich_rendering_uses_markdown_bullets() {
    let report = RouteReport::from_route(&computed_route()).expect("non-empty route");
    let rendered = report.render(RouteRenderMode::RichText);

    assert!(rendered.starts_with("**Route**"));
    assert!(rendered.contains("* "));
}

#[test]
fn report_serialises_step_kinds_in_wire_format() {
    let report = RouteReport::from_route(&computed_route()).expect("non-empty route");
    let json = serde_json::to_value(&report).expect("serialises");

    let kinds: Vec<_> = json["steps"]
        .as_array()
        .expect("step array")
        .iter()
        .map(|step| step["kind"].as_str().expect("kind string").to_string())
        .collect();
    assert_eq!(kinds, vec!["GO_FORWARD", "TURN_RIGHT", "GO_FORWARD"]);
}
