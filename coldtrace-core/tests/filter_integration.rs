//! Filter engine integration tests: concrete fleet scenarios plus the
//! algebraic properties (idempotence, monotonicity, AND semantics).

mod common;

use coldtrace_core::{
    unique_values, Alarm, AlarmType, FilterState, Logger, LoggerType, Shipment, ShipmentField,
    ShipmentStatus,
};
use proptest::prelude::*;

#[test]
fn fleet_wide_defaults_pass_everything() {
    let fleet = common::sample_fleet();
    assert_eq!(FilterState::default().apply(&fleet).len(), fleet.len());
}

#[test]
fn conjunction_narrows_to_the_alarmed_basel_shipment() {
    let fleet = common::sample_fleet();
    let spec = FilterState::default()
        .with_origin("basel")
        .with_alarms(true)
        .with_alarm_type("temperature");
    let matched = spec.apply(&fleet);
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].id, "SH002");
}

#[test]
fn search_reaches_delivery_ids_across_the_fleet() {
    let fleet = common::sample_fleet();
    let matched = FilterState::default().with_search("dlv-205").apply(&fleet);
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].id, "SH002");
}

#[test]
fn forwarder_options_come_from_the_unfiltered_collection() {
    let fleet = common::sample_fleet();
    assert_eq!(
        unique_values(&fleet, ShipmentField::FreightForwarder),
        vec![
            "DHL Global Forwarding".to_string(),
            "Kuehne+Nagel".to_string(),
            "Maersk".to_string(),
        ]
    );
    assert_eq!(
        unique_values(&fleet, ShipmentField::ModeOfTransport),
        vec!["Air".to_string(), "Sea".to_string()]
    );
}

#[test]
fn milestone_data_flag_excludes_the_flagged_booking() {
    let fleet = common::sample_fleet();
    let matched = FilterState::default().with_milestone_data(false).apply(&fleet);
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].id, "SH003");
}

fn place() -> impl Strategy<Value = String> {
    prop_oneof![Just("Basel"), Just("Vienna"), Just("Tokyo"), Just("")]
        .prop_map(|s| s.to_string())
}

fn status() -> impl Strategy<Value = ShipmentStatus> {
    prop_oneof![
        Just(ShipmentStatus::InTransit),
        Just(ShipmentStatus::Delivered),
        Just(ShipmentStatus::Pending),
    ]
}

fn mission_date() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("2025-07-10 06:00".to_string())),
        Just(Some("2025-07-15 06:00".to_string())),
        Just(Some("n/a".to_string())),
    ]
}

fn logger() -> impl Strategy<Value = Logger> {
    ("LG-[0-9]{4}", mission_date(), any::<bool>()).prop_map(|(id, started, alarmed)| {
        let mut logger = Logger::new(id, LoggerType::UsbLogger);
        logger.mission_started = started;
        if alarmed {
            logger.alarms.push(Alarm::new("AL-1", AlarmType::Temperature));
        }
        logger
    })
}

fn shipment() -> impl Strategy<Value = Shipment> {
    (
        "SH[0-9]{3}",
        place(),
        place(),
        status(),
        prop::collection::vec(logger(), 0..3),
    )
        .prop_map(|(id, origin, destination, status, loggers)| {
            let mut shipment = Shipment::new(id);
            shipment.origin = origin;
            shipment.destination = destination;
            shipment.status = status;
            shipment.loggers = loggers;
            shipment.recount_alarms();
            shipment
        })
}

fn fleet() -> impl Strategy<Value = Vec<Shipment>> {
    prop::collection::vec(shipment(), 0..12)
}

fn spec() -> impl Strategy<Value = FilterState> {
    (
        prop::option::of(place()),
        prop::option::of(prop_oneof![
            Just("In Transit".to_string()),
            Just("delivered".to_string()),
        ]),
        prop::option::of(any::<bool>()),
        prop::option::of(any::<bool>()),
    )
        .prop_map(|(origin, status, alarms, mission_started)| {
            let mut spec = FilterState::default();
            spec.origin = origin;
            spec.status = status;
            spec.alarms = alarms;
            spec.mission_started = mission_started;
            spec
        })
}

proptest! {
    #[test]
    fn filtering_is_idempotent(fleet in fleet(), spec in spec()) {
        let once = spec.apply(&fleet);
        let twice = spec.apply(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn adding_a_constraint_never_grows_the_result(fleet in fleet(), spec in spec()) {
        let mut narrower = spec.clone();
        narrower.destination = Some("Tokyo".to_string());
        prop_assert!(narrower.apply(&fleet).len() <= spec.apply(&fleet).len());
    }

    #[test]
    fn single_dimension_equals_naive_predicate(fleet in fleet()) {
        let spec = FilterState::default().with_status("Delivered");
        let engine: Vec<_> = spec.apply(&fleet);
        let naive: Vec<_> = fleet
            .iter()
            .filter(|s| s.status == ShipmentStatus::Delivered)
            .cloned()
            .collect();
        prop_assert_eq!(engine, naive);
    }

    #[test]
    fn text_dimensions_ignore_case(fleet in fleet()) {
        let lower = FilterState::default().with_status("delivered").apply(&fleet);
        let canonical = FilterState::default().with_status("Delivered").apply(&fleet);
        prop_assert_eq!(lower, canonical);
    }

    #[test]
    fn results_are_a_stable_subsequence(fleet in fleet(), spec in spec()) {
        let matched = spec.apply(&fleet);
        // Every survivor satisfies the spec and appears in input order.
        prop_assert!(matched.iter().all(|s| spec.matches(s)));
        let mut cursor = 0;
        for survivor in &matched {
            let found = fleet[cursor..].iter().position(|s| s == survivor);
            prop_assert!(found.is_some());
            cursor += found.unwrap() + 1;
        }
    }
}
