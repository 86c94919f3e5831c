use std::io::Write;

use ems_stats::{Field, Intervention};
use tempfile::NamedTempFile;

/// Number of columns in the January 2026 export
pub const LEGACY_WIDTH: usize = 33;

/// Intervention with a crew and nothing else
#[must_use]
pub fn crew(leader: &str, second: &str) -> Intervention {
    Intervention {
        leader: leader.to_string(),
        second: second.to_string(),
        ..Default::default()
    }
}

/// Intervention with a crew and a NACA code
#[must_use]
pub fn with_naca(leader: &str, second: &str, naca: &str) -> Intervention {
    Intervention {
        naca: naca.to_string(),
        ..crew(leader, second)
    }
}

/// Intervention with a crew and the clock-times used for scene duration
#[must_use]
pub fn with_scene(leader: &str, on_scene: &str, quebec: &str, hospital: &str) -> Intervention {
    Intervention {
        on_scene: on_scene.to_string(),
        quebec: quebec.to_string(),
        hospital: hospital.to_string(),
        ..crew(leader, "")
    }
}

/// Intervention with a crew and a patient age backed by a birth date
#[must_use]
pub fn with_age(leader: &str, second: &str, age: &str) -> Intervention {
    Intervention {
        age: age.to_string(),
        birth_date: "01/01/2000".to_string(),
        ..crew(leader, second)
    }
}

/// Header row of the January 2026 export
#[must_use]
pub fn legacy_header() -> Vec<String> {
    [
        "Date", "Jour de la semaine", "Jour / Nuit", "FIP", "FOLIO", "Horaire", "Priorité",
        "Leader", "Equipier.iére", "Troisiéme", "Ambulance", "Intervenants", "Médicalisation",
        "Alarme", "Départ", "Sur site", "Québec", "Hôpital", "Libre", "Lieu de PEC",
        "Commune de PEC", "Destination de PEC", "Type 17", "Code FIP", "Motif EST", "Degré EST",
        "NACA", "Médecin ?", "Trauma / Médical", "Protocoles", "Sexe", "Age",
        "Date de naissance",
    ]
    .map(String::from)
    .to_vec()
}

/// One row in the legacy layout with the given fields filled in
#[must_use]
pub fn legacy_row(fields: &[(Field, &str)]) -> String {
    let mut row = vec![String::new(); LEGACY_WIDTH];
    for (field, value) in fields {
        row[field.legacy_index()] = (*value).to_string();
    }
    row.join(";")
}

/// Full export text: legacy header followed by `rows`
#[must_use]
pub fn legacy_export(rows: &[String]) -> String {
    let mut export = legacy_header().join(";");
    for row in rows {
        export.push('\n');
        export.push_str(row);
    }
    export.push('\n');
    export
}

/// Write export text to a temporary file
pub fn write_export(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp export");
    file.write_all(content.as_bytes()).expect("write temp export");
    file
}

/// A small month of interventions in the legacy layout
#[must_use]
pub fn sample_month() -> String {
    use Field::*;
    let rows = vec![
        legacy_row(&[
            (Date, "01/01/2026"), (Priority, "P1"), (Leader, "Jean Dupont"),
            (Second, "Marie Curie"), (Ambulance, "60704"), (Alarm, "10:00"),
            (Departure, "10:02"), (OnScene, "10:10"), (Quebec, "10:40"), (Hospital, "10:55"),
            (EstMotif, "110501"), (EstDegree, "1"), (Naca, "4"), (Age, "72"),
            (BirthDate, "03/02/1953"),
        ]),
        legacy_row(&[
            (Date, "02/01/2026"), (Priority, "P3"), (Leader, "Marie Curie"),
            (Second, "Jean Dupont"), (Ambulance, "60705"), (Alarm, "23:30"),
            (Departure, "23:33"), (OnScene, "23:50"), (Quebec, "00:10"), (Hospital, "00:30"),
            (EstMotif, "0311"), (EstDegree, "2"), (Naca, "5"), (Age, "8"),
            (BirthDate, "12/05/2017"),
        ]),
        legacy_row(&[
            (Date, "03/01/2026"), (Priority, "P2"), (Leader, "Paul Martin"),
            (Ambulance, "60706"), (Alarm, "03:00"), (Departure, "03:04"),
            (OnScene, "03:15"), (Naca, "1"), (EstMotif, "0311"),
        ]),
        legacy_row(&[]),
        legacy_row(&[
            (Date, "04/01/2026"), (Priority, "S2"), (Leader, "Paul Martin"),
            (Second, "Marie Curie"), (Ambulance, "60799"), (Alarm, "08:00"),
            (OnScene, "08:20"), (Quebec, "19:20"), (Hospital, "19:45"), (Naca, "2"),
            (Age, "30"), (BirthDate, "01/01/1996"),
        ]),
    ];
    legacy_export(&rows)
}
