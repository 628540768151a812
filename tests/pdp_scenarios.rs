//! End-to-end scenarios: encode, solve with the reference solver, decode.

use pdp_routing::api::{OptimizeRequest, RequestOptions, SolutionSummary};
use pdp_routing::decode::SolutionDecoder;
use pdp_routing::encode::{EncoderConfig, ModelEncoder};
use pdp_routing::models::{Fleet, Order, Problem, Stop, TimeWindow};
use pdp_routing::solve::{Assignment, GreedyInsertion, RouteSolver, SearchConfig, SolveOutcome};
use pdp_routing::validate::validate_pdp;

fn tw_full() -> TimeWindow {
    TimeWindow::new(0, 86_400).expect("valid")
}

fn solve_feasible(problem: &Problem) -> (pdp_routing::encode::EncodedModel, Assignment) {
    let model = ModelEncoder::new(problem).encode().expect("encodes");
    let assignment = match GreedyInsertion
        .solve(&model, &SearchConfig::default())
        .expect("well-formed model")
    {
        SolveOutcome::Feasible(a) => a,
        SolveOutcome::NoSolution => panic!("expected a solution"),
    };
    (model, assignment)
}

/// 1 depot, 2 vehicles of capacity 20, 1 order of quantity 10: exactly one
/// vehicle serves A before B.
#[test]
fn one_order_two_vehicles() {
    let stops = vec![
        Stop::new(0, 0, 53.38, -1.47),
        Stop::new(1, 10, 53.40, -1.45).with_time_window(tw_full()), // A
        Stop::new(2, -10, 53.42, -1.43).with_time_window(tw_full()), // B
    ];
    let mut fleet = Fleet::homogeneous(2, 20, 10);
    fleet.set_depot(0);
    let problem = Problem::new(stops, vec![Order::new(1, 2, 10)], fleet);
    assert!(problem.total_demand() <= problem.fleet().total_capacity());

    let (ok, errors) = validate_pdp(&problem);
    assert!(ok, "unexpected validation errors: {errors:?}");

    let (model, assignment) = solve_feasible(&problem);
    let decoder = SolutionDecoder::new(&problem, &model, &assignment);

    let serving: Vec<_> = decoder
        .routes()
        .into_iter()
        .filter(|r| r.stops.iter().any(|s| s.stop.index() == 1))
        .collect();
    assert_eq!(serving.len(), 1, "exactly one vehicle serves the order");

    let route = &serving[0];
    let pos_a = route.stops.iter().position(|s| s.stop.index() == 1).expect("A");
    let pos_b = route.stops.iter().position(|s| s.stop.index() == 2).expect("B");
    assert!(pos_a < pos_b, "pickup before delivery");

    assert!(decoder.dropped().is_empty());
}

/// Load along every route stays within `[0, capacity]` and arrivals stay
/// inside declared windows.
#[test]
fn cumulative_bounds_hold() {
    let morning = TimeWindow::new(0, 43_200).expect("valid");
    let stops = vec![
        Stop::new(0, 0, 53.38, -1.47),
        Stop::new(1, 8, 53.39, -1.46).with_time_window(morning),
        Stop::new(2, -8, 53.40, -1.45).with_time_window(tw_full()),
        Stop::new(3, 6, 53.37, -1.48).with_time_window(morning),
        Stop::new(4, -6, 53.36, -1.49).with_time_window(tw_full()),
        Stop::new(5, 3, 53.385, -1.465).with_time_window(tw_full()),
    ];
    let mut fleet = Fleet::homogeneous(2, 10, 5);
    fleet.set_depot(0);
    let problem = Problem::new(
        stops,
        vec![Order::new(1, 2, 8), Order::new(3, 4, 6)],
        fleet,
    );

    let (model, assignment) = solve_feasible(&problem);
    let decoder = SolutionDecoder::new(&problem, &model, &assignment);

    for route in decoder.routes() {
        let capacity = problem.fleet().vehicles()[route.vehicle].capacity();
        for stop in &route.stops {
            assert!(stop.load >= 0, "load never negative");
            assert!(stop.load <= capacity, "load within capacity");
            if let Some(tw) = stop.stop.time_window() {
                assert!(
                    stop.time_min >= tw.open() && stop.time_min <= tw.close(),
                    "arrival {} outside window [{}, {}] at stop {}",
                    stop.time_min,
                    tw.open(),
                    tw.close(),
                    stop.stop.index()
                );
            }
        }
    }
}

/// An isolated optional stop whose service cost exceeds its penalty lands in
/// the dropped list, never in a route, and depots/pair members never do.
#[test]
fn expensive_optional_stop_dropped() {
    let stops = vec![
        Stop::new(0, 0, 53.38, -1.47),
        Stop::new(1, 10, 53.39, -1.46).with_time_window(tw_full()),
        Stop::new(2, -10, 53.40, -1.45).with_time_window(tw_full()),
        // Far enough that serving it costs more than the penalty below.
        Stop::new(3, 1, -35.0, 150.0).with_time_window(tw_full()),
    ];
    let mut fleet = Fleet::homogeneous(1, 20, 0);
    fleet.set_depot(0);
    let problem = Problem::new(stops, vec![Order::new(1, 2, 10)], fleet);

    let model = ModelEncoder::new(&problem)
        .with_config(EncoderConfig { drop_penalty: 1000.0 })
        .encode()
        .expect("encodes");
    let assignment = match GreedyInsertion
        .solve(&model, &SearchConfig::default())
        .expect("well-formed model")
    {
        SolveOutcome::Feasible(a) => a,
        SolveOutcome::NoSolution => panic!("expected a solution"),
    };
    let decoder = SolutionDecoder::new(&problem, &model, &assignment);

    let dropped = decoder.dropped();
    assert_eq!(dropped.len(), 1);
    assert_eq!(dropped[0].index, 3);

    for route in decoder.routes() {
        assert!(route.stops.iter().all(|s| s.stop.index() != 3));
    }
}

/// A malformed order with `pickup == delivery` fails validation with an error
/// naming the order.
#[test]
fn validator_rejects_self_pair() {
    let stops = vec![
        Stop::new(0, 0, 53.38, -1.47),
        Stop::new(1, 10, 53.39, -1.46).with_time_window(tw_full()),
    ];
    let mut fleet = Fleet::homogeneous(1, 20, 0);
    fleet.set_depot(0);
    let problem = Problem::new(stops, vec![Order::new(1, 1, 10)], fleet);

    let (ok, errors) = validate_pdp(&problem);
    assert!(!ok);
    assert!(errors.iter().any(|e| e.to_string().contains("order 0")));
}

/// Re-encoding an unchanged problem yields a structurally identical model.
#[test]
fn encoding_is_idempotent() {
    let stops = vec![
        Stop::new(0, 0, 53.38, -1.47),
        Stop::new(1, 10, 53.39, -1.46).with_time_window(tw_full()),
        Stop::new(2, -10, 53.40, -1.45).with_time_window(tw_full()),
        Stop::new(3, 2, 53.41, -1.44).with_time_window(tw_full()),
    ];
    let mut fleet = Fleet::homogeneous(2, 20, 10);
    fleet.set_depot(0);
    let problem = Problem::new(stops, vec![Order::new(1, 2, 10)], fleet);

    let first = ModelEncoder::new(&problem).encode().expect("encodes");
    let second = ModelEncoder::new(&problem).encode().expect("encodes");
    assert_eq!(first, second);
}

/// The full request-to-summary pipeline, external identifiers preserved.
#[test]
fn request_round_trip() {
    let request: OptimizeRequest = serde_json::from_str(
        r#"{
            "nodes": [
                {"id": "hub", "lat": 53.38, "lon": -1.47, "type": "DEPOT"},
                {"id": "pickup-1", "lat": 53.40, "lon": -1.45},
                {"id": "drop-1", "lat": 53.42, "lon": -1.43}
            ],
            "orders": [
                {"id": "ord-1", "pickupNodeId": "pickup-1", "deliveryNodeId": "drop-1",
                 "quantity": 10, "twOpen": 0, "twClose": 43200}
            ],
            "vehicles": [
                {"id": "van-a", "capacity": 20, "cost": 10},
                {"id": "van-b", "capacity": 20, "cost": 10}
            ]
        }"#,
    )
    .expect("valid request");

    let problem = request
        .into_problem(&RequestOptions::default())
        .expect("converts");
    let (ok, _) = validate_pdp(&problem);
    assert!(ok);

    let (model, assignment) = solve_feasible(&problem);
    let decoder = SolutionDecoder::new(&problem, &model, &assignment);
    let summary = SolutionSummary::from_decoder(&decoder);

    assert_eq!(summary.path.len(), 2);
    assert_eq!(summary.assigned_orders.len(), 1);
    assert_eq!(summary.assigned_orders[0].order_id, "ord-1");
    assert_eq!(summary.assigned_orders[0].pickup_node_id, "pickup-1");
    assert!(summary.assigned_orders[0].assigned_vehicle_id.starts_with("van-"));
    assert!(summary.dropped.is_empty());

    // Every route is bracketed by the depot's external id.
    for path in &summary.path {
        assert_eq!(path.route.first().expect("start").node_id, "hub");
        assert_eq!(path.route.last().expect("end").node_id, "hub");
    }
}

/// A capacity-infeasible instance reports no solution; the decoder is never
/// consulted.
#[test]
fn infeasible_reports_no_solution() {
    let stops = vec![
        Stop::new(0, 0, 53.38, -1.47),
        Stop::new(1, 99, 53.39, -1.46).with_time_window(tw_full()),
        Stop::new(2, -99, 53.40, -1.45).with_time_window(tw_full()),
    ];
    let mut fleet = Fleet::homogeneous(1, 20, 0);
    fleet.set_depot(0);
    let problem = Problem::new(stops, vec![Order::new(1, 2, 99)], fleet);

    let model = ModelEncoder::new(&problem).encode().expect("encodes");
    let outcome = GreedyInsertion
        .solve(&model, &SearchConfig::default())
        .expect("well-formed model");
    assert_eq!(outcome, SolveOutcome::NoSolution);
}
