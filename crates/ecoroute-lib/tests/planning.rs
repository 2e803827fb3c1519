mod common;

use common::fixture_path;
use ecoroute_lib::error::Error;
use ecoroute_lib::provider::{Location, StaticGeocoder, StaticRouteProvider};
use ecoroute_lib::{
    compare_estimates, plan_routes, OptimizationGoal, PlanRequest, RouteEstimate,
    RoutingResponse, VehicleCatalog, VehicleKind,
};

fn geocoder() -> StaticGeocoder {
    StaticGeocoder::new()
        .with_location(
            "Alexanderplatz",
            Location {
                lat: 52.5219,
                lon: 13.4132,
                display_name: "Alexanderplatz, Berlin".to_string(),
            },
        )
        .with_location(
            "Tempelhof",
            Location {
                lat: 52.4730,
                lon: 13.4039,
                display_name: "Tempelhof, Berlin".to_string(),
            },
        )
}

fn provider() -> StaticRouteProvider {
    let response = RoutingResponse::from_path(&fixture_path("routing_response.json"))
        .expect("fixture should parse");
    StaticRouteProvider::new(response)
}

fn estimate(distance_km: f64, co2_kg: f64) -> RouteEstimate {
    RouteEstimate {
        distance_km,
        duration_min: 10.0,
        fuel_l: 0.0,
        co2_kg,
        turn_penalty_factor: 1.0,
        time_hours: 0.17,
    }
}

#[test]
fn compares_shortest_against_eco_candidate() {
    let estimates = [estimate(5.0, 1.0), estimate(6.0, 0.8)];
    let cmp = compare_estimates(&estimates, OptimizationGoal::Co2).expect("non-empty");
    assert_eq!(cmp.shortest, 0);
    assert_eq!(cmp.eco, 1);
    assert_eq!(cmp.preferred, 1);
    assert_eq!(cmp.co2_saved_percent, 20);
}

#[test]
fn zero_emission_shortest_route_saves_nothing() {
    let estimates = [estimate(5.0, 0.0), estimate(6.0, 0.0)];
    let cmp = compare_estimates(&estimates, OptimizationGoal::Co2).expect("non-empty");
    assert_eq!(cmp.co2_saved_percent, 0);
}

#[test]
fn plans_fixture_routes_for_car() {
    let request = PlanRequest::new("alexanderplatz", "TEMPELHOF");
    let plan = plan_routes(&geocoder(), &provider(), VehicleCatalog::builtin(), &request)
        .expect("plan succeeds");

    assert_eq!(plan.candidates.len(), 3);
    assert_eq!(plan.from.display_name, "Alexanderplatz, Berlin");

    let windy = &plan.candidates[0].estimate;
    assert_eq!(windy.distance_km, 12.0);
    assert_eq!(windy.duration_min, 14.0);
    assert_eq!(windy.turn_penalty_factor, 1.3);
    assert_eq!(windy.fuel_l, 1.25);
    assert_eq!(windy.co2_kg, 3.0);
    assert_eq!(windy.time_hours, 0.23);

    let calm = &plan.candidates[1].estimate;
    assert_eq!(calm.turn_penalty_factor, 1.0);
    assert_eq!(calm.co2_kg, 2.59);

    // polylines are reordered to (lat, lon)
    assert_eq!(plan.candidates[0].polyline.points()[0].lat, 52.5);

    assert_eq!(plan.shortest, 0);
    assert_eq!(plan.eco, 1);
    assert_eq!(plan.preferred, 1);
    assert_eq!(plan.co2_saved_percent, 14);
    assert_eq!(plan.preferred().idx, 1);
}

#[test]
fn time_goal_prefers_shortest_route() {
    let request = PlanRequest::new("Alexanderplatz", "Tempelhof")
        .with_vehicle(VehicleKind::Van)
        .with_goal(OptimizationGoal::Time);
    let plan = plan_routes(&geocoder(), &provider(), VehicleCatalog::builtin(), &request)
        .expect("plan succeeds");

    assert_eq!(plan.preferred, plan.shortest);
    assert_eq!(plan.shortest().estimate.co2_kg, 5.68);
    assert_eq!(plan.eco().estimate.co2_kg, 4.91);
    assert_eq!(plan.co2_saved_percent, 14);
}

#[test]
fn unknown_location_is_reported() {
    let request = PlanRequest::new("Alexanderplatz", "Atlantis");
    let err = plan_routes(&geocoder(), &provider(), VehicleCatalog::builtin(), &request)
        .expect_err("unknown destination");
    match err {
        Error::LocationNotFound { query } => assert_eq!(query, "Atlantis"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn routing_failure_is_reported() {
    let response = RoutingResponse::from_path(&fixture_path("routing_error.json"))
        .expect("fixture should parse");
    let request = PlanRequest::new("Alexanderplatz", "Tempelhof");
    let err = plan_routes(
        &geocoder(),
        &StaticRouteProvider::new(response),
        VehicleCatalog::builtin(),
        &request,
    )
    .expect_err("routing error");
    assert!(matches!(err, Error::RoutingUnavailable { ref code } if code == "NoRoute"));
}

#[test]
fn empty_candidate_list_is_reported() {
    let response = RoutingResponse {
        code: "Ok".to_string(),
        routes: Vec::new(),
    };
    let request = PlanRequest::new("Alexanderplatz", "Tempelhof");
    let err = plan_routes(
        &geocoder(),
        &StaticRouteProvider::new(response),
        VehicleCatalog::builtin(),
        &request,
    )
    .expect_err("no routes");
    assert!(matches!(err, Error::NoRoutes));
}

#[test]
fn plan_serializes_with_camel_case_fields() {
    let request = PlanRequest::new("Alexanderplatz", "Tempelhof");
    let plan = plan_routes(&geocoder(), &provider(), VehicleCatalog::builtin(), &request)
        .expect("plan succeeds");
    let json = serde_json::to_value(&plan).expect("serializes");
    assert_eq!(json["co2SavedPercent"], 14);
    assert_eq!(json["vehicle"], "car");
    assert_eq!(json["goal"], "co2");
    assert_eq!(json["candidates"][1]["estimate"]["co2Kg"], 2.59);
    assert_eq!(json["candidates"][0]["polyline"][0]["lat"], 52.5);
}
