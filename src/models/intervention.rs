//! Intervention record model

use serde::Serialize;

use crate::models::clock::ClockTime;
use crate::models::responder::normalize_name;
use crate::schema::{ColumnLayout, Field};

/// One dispatch event from the monthly export
///
/// Every field holds the trimmed text of its column, empty when the column is
/// blank or absent from the row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Intervention {
    pub date: String,
    pub priority: String,
    pub leader: String,
    pub second: String,
    pub ambulance: String,
    pub alarm: String,
    pub departure: String,
    pub on_scene: String,
    pub quebec: String,
    pub hospital: String,
    pub est_motif: String,
    pub est_degree: String,
    pub naca: String,
    pub age: String,
    pub birth_date: String,
}

impl Intervention {
    /// Build a record from one row using a resolved column layout
    #[must_use]
    pub fn from_row<S: AsRef<str>>(row: &[S], layout: &ColumnLayout) -> Self {
        let get = |field: Field| -> String {
            layout
                .index(field)
                .and_then(|index| row.get(index))
                .map(|value| value.as_ref().trim().to_string())
                .unwrap_or_default()
        };

        Self {
            date: get(Field::Date),
            priority: get(Field::Priority),
            leader: get(Field::Leader),
            second: get(Field::Second),
            ambulance: get(Field::Ambulance),
            alarm: get(Field::Alarm),
            departure: get(Field::Departure),
            on_scene: get(Field::OnScene),
            quebec: get(Field::Quebec),
            hospital: get(Field::Hospital),
            est_motif: get(Field::EstMotif),
            est_degree: get(Field::EstDegree),
            naca: get(Field::Naca),
            age: get(Field::Age),
            birth_date: get(Field::BirthDate),
        }
    }

    /// Whether every field is blank
    #[must_use]
    pub fn is_blank(&self) -> bool {
        [
            &self.date,
            &self.priority,
            &self.leader,
            &self.second,
            &self.ambulance,
            &self.alarm,
            &self.departure,
            &self.on_scene,
            &self.quebec,
            &self.hospital,
            &self.est_motif,
            &self.est_degree,
            &self.naca,
            &self.age,
            &self.birth_date,
        ]
        .iter()
        .all(|value| value.trim().is_empty())
    }

    #[must_use]
    pub fn alarm_time(&self) -> Option<ClockTime> {
        ClockTime::parse(&self.alarm)
    }

    #[must_use]
    pub fn departure_time(&self) -> Option<ClockTime> {
        ClockTime::parse(&self.departure)
    }

    #[must_use]
    pub fn on_scene_time(&self) -> Option<ClockTime> {
        ClockTime::parse(&self.on_scene)
    }

    #[must_use]
    pub fn quebec_time(&self) -> Option<ClockTime> {
        ClockTime::parse(&self.quebec)
    }

    #[must_use]
    pub fn hospital_time(&self) -> Option<ClockTime> {
        ClockTime::parse(&self.hospital)
    }

    /// A patient was dropped off at a hospital
    #[must_use]
    pub fn is_transported(&self) -> bool {
        !self.hospital.trim().is_empty()
    }

    /// Hours from arrival on scene until hospital arrival
    ///
    /// Only transported patients with both clock-times readable have one.
    #[must_use]
    pub fn scene_hours(&self) -> Option<f64> {
        if !self.is_transported() {
            return None;
        }
        let on_scene = self.on_scene_time()?;
        let quebec = self.quebec_time()?;
        Some(on_scene.hours_until(quebec))
    }

    /// NACA severity code, if it is a single value between 0 and 9
    #[must_use]
    pub fn naca_code(&self) -> Option<u8> {
        self.naca.trim().parse::<u8>().ok().filter(|code| *code <= 9)
    }

    /// Patient age in whole years
    #[must_use]
    pub fn age_years(&self) -> Option<u32> {
        self.age.trim().parse::<u32>().ok()
    }

    #[must_use]
    pub fn has_birth_date(&self) -> bool {
        !self.birth_date.trim().is_empty()
    }

    #[must_use]
    pub fn leader_name(&self) -> Option<String> {
        normalize_name(&self.leader)
    }

    #[must_use]
    pub fn second_name(&self) -> Option<String> {
        normalize_name(&self.second)
    }

    /// Non-blank responders, leader first
    pub fn responders(&self) -> impl Iterator<Item = String> + '_ {
        self.leader_name().into_iter().chain(self.second_name())
    }
}
