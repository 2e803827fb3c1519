mod common;

use common::fixture_path;
use ecoroute_lib::error::Error;
use ecoroute_lib::{VehicleCatalog, VehicleKind, VehicleProfile};

#[test]
fn loads_fixture_overrides_and_keeps_remaining_defaults() {
    let path = fixture_path("vehicle_data.csv");
    let catalog = VehicleCatalog::from_path(&path).expect("fixture should load");

    let car = catalog.profile(VehicleKind::Car);
    assert_eq!(car.co2_per_km, 0.150);
    assert_eq!(car.fuel_l_per_km, 0.06);
    assert_eq!(car.electricity_kwh_per_km, None);

    let ev = catalog.profile(VehicleKind::Ev);
    assert_eq!(ev.electricity_kwh_per_km, Some(0.18));

    // bike is not listed in the fixture
    assert_eq!(
        *catalog.profile(VehicleKind::Bike),
        VehicleProfile::default_for(VehicleKind::Bike)
    );
    assert_eq!(catalog.source_path(), Some(path.as_path()));
}

#[test]
fn builtin_catalog_has_no_source_path() {
    assert!(VehicleCatalog::builtin().source_path().is_none());
    assert_eq!(VehicleCatalog::default(), *VehicleCatalog::builtin());
}

#[test]
fn rejects_duplicate_kinds_case_insensitive() {
    let csv = "kind,co2_per_km,fuel_l_per_km,weight_factor\n".to_string()
        + "car,0.1,0.1,1\n"
        + "CAR,0.2,0.2,1\n";

    let err = VehicleCatalog::from_reader(csv.as_bytes()).expect_err("should reject duplicates");
    match err {
        Error::DuplicateVehicleKind { kind } => assert_eq!(kind, "car"),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn rejects_negative_coefficients() {
    let csv = "kind,co2_per_km,fuel_l_per_km,weight_factor\n".to_string() + "van,-0.1,0.1,1\n";

    let err = VehicleCatalog::from_reader(csv.as_bytes()).expect_err("should reject negatives");
    match err {
        Error::VehicleDataValidation { message } => assert!(message.contains("co2_per_km")),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn rejects_unknown_kinds_when_loading() {
    let csv = "kind,co2_per_km,fuel_l_per_km,weight_factor\n".to_string() + "truck,0.5,0.2,2\n";

    let err = VehicleCatalog::from_reader(csv.as_bytes()).expect_err("should reject truck");
    match err {
        Error::UnknownVehicleKind { kind } => assert_eq!(kind, "truck"),
        other => panic!("unexpected error: {:?}", other),
    }

    let message = VehicleCatalog::from_reader(csv.as_bytes())
        .unwrap_err()
        .to_string();
    assert!(message.contains("'car', 'van', 'bike', 'ev'"), "{message}");
}

#[test]
fn reports_missing_columns() {
    let csv = "kind,co2_per_km\ncar,0.1\n";
    let err = VehicleCatalog::from_reader(csv.as_bytes()).expect_err("missing columns");
    let message = err.to_string();
    assert!(message.contains("fuel_l_per_km"));
    assert!(message.contains("weight_factor"));
}

#[test]
fn reports_unparseable_numbers_with_row() {
    let csv = "kind,co2_per_km,fuel_l_per_km,weight_factor\ncar,lots,0.1,1\n";
    let err = VehicleCatalog::from_reader(csv.as_bytes()).expect_err("bad number");
    let message = err.to_string();
    assert!(message.contains("invalid co2_per_km for 'car' at row 2"), "{message}");
}
