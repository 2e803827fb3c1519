mod common;

use common::cli;
use predicates::str::contains;

#[test]
fn estimates_car_route_without_geometry() {
    cli()
        .args(["estimate", "--distance-km", "25", "--duration-min", "30"])
        .assert()
        .success()
        .stdout(contains("Vehicle: car"))
        .stdout(contains("Fuel: 2.00 L"))
        .stdout(contains("CO2: 4.80 kg"))
        .stdout(contains("Duration: 30 min (0.50 h)"))
        .stdout(contains("Turn penalty: 1.000"));
}

#[test]
fn applies_turn_penalty_from_points() {
    // one vertex at 135 degrees
    let output = cli()
        .args([
            "--format",
            "json",
            "estimate",
            "--distance-km",
            "10",
            "--duration-min",
            "12",
            "--points",
            "0,0;1,0;2,1",
            "--vehicle",
            "van",
        ])
        .output()
        .expect("runs");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(json["turnPenaltyFactor"], 1.03);
    // 10 * 0.28 * 1.03 * 1.3 = 3.7492
    assert_eq!(json["co2Kg"], 3.75);
    assert_eq!(json["durationMin"], 12.0);
}

#[test]
fn unknown_vehicle_falls_back_to_car() {
    cli()
        .args([
            "estimate",
            "--distance-km",
            "25",
            "--duration-min",
            "30",
            "--vehicle",
            "zeppelin",
        ])
        .assert()
        .success()
        .stdout(contains("Vehicle: car"))
        .stdout(contains("CO2: 4.80 kg"));
}

#[test]
fn rejects_malformed_points() {
    cli()
        .args([
            "estimate",
            "--distance-km",
            "1",
            "--duration-min",
            "1",
            "--points",
            "51.5;-0.1",
        ])
        .assert()
        .failure()
        .stderr(contains("lat,lon"));
}
