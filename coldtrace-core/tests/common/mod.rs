//! Shared fixtures for integration tests
//!
//! A small but realistic fleet:
//! - SH001: delivered Basel→Singapore shipment, clean mission, web logger;
//! - SH002: in-transit Basel→Tokyo shipment with two temperature alarms
//!   and a mixed fleet (one logger never started);
//! - SH003: pending booking with no loggers and flagged milestone data;
//! - SH004: in-transit shipment carrying a restricted "Web Logger 2".

#![allow(dead_code)]

use coldtrace_core::{
    Alarm, AlarmType, Excursion, Logger, LoggerType, Milestone, MilestoneDataStatus,
    MilestoneStatus, ProductThresholds, Reading, Shipment, ShipmentStatus, TransportMode,
};

pub fn sample_fleet() -> Vec<Shipment> {
    vec![sh001(), sh002(), sh003(), sh004()]
}

fn milestone(
    location: &str,
    arrival: Option<&str>,
    status: MilestoneStatus,
    mode: TransportMode,
) -> Milestone {
    let mut milestone = Milestone::new(location, mode);
    milestone.arrival = arrival.map(str::to_string);
    milestone.status = status;
    milestone
}

fn reading(timestamp: &str, temperature: f64) -> Reading {
    Reading {
        timestamp: timestamp.to_string(),
        temperature,
    }
}

fn cold_chain_thresholds() -> ProductThresholds {
    ProductThresholds {
        temp_low: Some("2".to_string()),
        temp_high: Some("12".to_string()),
        humidity_low: Some("30".to_string()),
        humidity_high: Some("60".to_string()),
    }
}

pub fn sh001() -> Shipment {
    let mut shipment = Shipment::new("SH001");
    shipment.origin = "Basel".to_string();
    shipment.destination = "Singapore".to_string();
    shipment.status = ShipmentStatus::Delivered;
    shipment.mode_of_transport = TransportMode::Air;
    shipment.packaging_type = "Passive Pallet".to_string();
    shipment.freight_forwarder = "Kuehne+Nagel".to_string();
    shipment.milestones = vec![
        milestone(
            "Basel Pharma Campus",
            Some("2025-07-08 05:00"),
            MilestoneStatus::Completed,
            TransportMode::Road,
        ),
        milestone(
            "Zurich Airport",
            Some("2025-07-08 11:00"),
            MilestoneStatus::Completed,
            TransportMode::Air,
        ),
        milestone(
            "Singapore Changi",
            Some("2025-07-09 20:00"),
            MilestoneStatus::Completed,
            TransportMode::Air,
        ),
    ];
    let mut logger = Logger::new("WL-8847", LoggerType::WebLogger);
    logger.delivery_id = Some("DLV-20114".to_string());
    logger.mission_started = Some("2025-07-08 04:30".to_string());
    logger.mission_ended = Some("2025-07-09 21:00".to_string());
    logger.thresholds = Some(cold_chain_thresholds());
    logger.readings = vec![
        reading("2025-07-08 06:00", 5.1),
        reading("2025-07-08 18:00", 6.4),
        reading("2025-07-09 06:00", 5.8),
        reading("2025-07-09 18:00", 4.9),
    ];
    shipment.loggers.push(logger);
    shipment.recount_alarms();
    shipment
}

pub fn sh002() -> Shipment {
    let mut shipment = Shipment::new("SH002");
    shipment.origin = "Basel".to_string();
    shipment.destination = "Tokyo".to_string();
    shipment.status = ShipmentStatus::InTransit;
    shipment.mode_of_transport = TransportMode::Air;
    shipment.packaging_type = "Active Container".to_string();
    shipment.freight_forwarder = "DHL Global Forwarding".to_string();
    shipment.evaluation = Some("Under Investigation".to_string());
    shipment.milestones = vec![
        milestone(
            "Basel Pharma Campus",
            Some("2025-07-14 06:00"),
            MilestoneStatus::Completed,
            TransportMode::Road,
        ),
        milestone(
            "London Heathrow Transfer",
            Some("2025-07-15 09:00"),
            MilestoneStatus::Completed,
            TransportMode::Air,
        ),
        milestone(
            "Amsterdam Airport",
            Some("2025-07-17 09:00"),
            MilestoneStatus::Current,
            TransportMode::Air,
        ),
        milestone(
            "Tokyo Narita",
            None,
            MilestoneStatus::Pending,
            TransportMode::Air,
        ),
    ];

    let mut active = Logger::new("UL-3321", LoggerType::UsbLogger);
    active.delivery_id = Some("DLV-20551".to_string());
    active.mission_started = Some("2025-07-14 05:30".to_string());
    active.thresholds = Some(cold_chain_thresholds());
    active.readings = vec![
        reading("2025-07-14 12:00", 5.5),
        reading("2025-07-15 09:00", 14.8),
        reading("2025-07-15 12:00", 7.2),
        reading("2025-07-17 09:30", 16.3),
        reading("2025-07-17 12:00", 6.1),
    ];
    let mut heathrow_alarm = Alarm::new("AL-901", AlarmType::Temperature);
    heathrow_alarm.excursion = Some(Excursion {
        highest: 14.8,
        lowest: 12.1,
        average: 13.2,
        start_time: "2025-07-15 09:00".to_string(),
        end_time: Some("2025-07-15 11:15".to_string()),
        duration: "2h 15m".to_string(),
        profile_name: Some("CRT 2-12".to_string()),
    });
    let mut amsterdam_alarm = Alarm::new("AL-902", AlarmType::Temperature);
    amsterdam_alarm.excursion = Some(Excursion {
        highest: 16.3,
        lowest: 12.4,
        average: 14.0,
        start_time: "2025-07-17 09:30".to_string(),
        end_time: None,
        duration: "ongoing".to_string(),
        profile_name: Some("CRT 2-12".to_string()),
    });
    active.alarms = vec![heathrow_alarm, amsterdam_alarm];
    shipment.loggers.push(active);

    // Spare logger that was never armed; makes SH002 a mixed fleet.
    let mut spare = Logger::new("UL-3322", LoggerType::UsbLogger);
    spare.mission_started = Some("n/a".to_string());
    shipment.loggers.push(spare);

    shipment.recount_alarms();
    shipment
}

pub fn sh003() -> Shipment {
    let mut shipment = Shipment::new("SH003");
    shipment.origin = "Vienna".to_string();
    shipment.destination = "Boston".to_string();
    shipment.status = ShipmentStatus::Pending;
    shipment.mode_of_transport = TransportMode::Sea;
    shipment.freight_forwarder = "Maersk".to_string();
    shipment.milestone_data = MilestoneDataStatus::Unavailable {
        reason: "carrier feed not yet connected".to_string(),
    };
    shipment
}

pub fn sh004() -> Shipment {
    let mut shipment = Shipment::new("SH004");
    shipment.origin = "Vienna".to_string();
    shipment.destination = "Chicago".to_string();
    shipment.status = ShipmentStatus::InTransit;
    shipment.mode_of_transport = TransportMode::Air;
    shipment.freight_forwarder = "DHL Global Forwarding".to_string();

    let mut restricted = Logger::new("WL2-7010", LoggerType::WebLogger2);
    restricted.mission_started = Some("2025-07-16 08:00".to_string());
    shipment.loggers.push(restricted);

    let mut companion = Logger::new("UL-7011", LoggerType::UsbLogger);
    companion.mission_started = Some("2025-07-16 08:00".to_string());
    companion.thresholds = Some(cold_chain_thresholds());
    companion.readings = vec![
        reading("2025-07-16 10:00", 4.2),
        reading("2025-07-16 14:00", 5.0),
    ];
    shipment.loggers.push(companion);

    shipment.recount_alarms();
    shipment
}
