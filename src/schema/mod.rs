//! Column layout of the dispatch export.
//!
//! The export has shifted column positions across versions, so records are
//! populated through a [`ColumnLayout`] that maps each semantic [`Field`] to a
//! column index. A layout is either resolved from header names or taken from
//! the fixed positions of the January 2026 export, and in both cases it is
//! checked against the header before any row is read.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

/// Semantic fields read from the export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Field {
    Date,
    Priority,
    Leader,
    Second,
    Ambulance,
    Alarm,
    Departure,
    OnScene,
    Quebec,
    Hospital,
    EstMotif,
    EstDegree,
    Naca,
    Age,
    BirthDate,
}

impl Field {
    /// Every field, in export order
    pub const ALL: [Self; 15] = [
        Self::Date,
        Self::Priority,
        Self::Leader,
        Self::Second,
        Self::Ambulance,
        Self::Alarm,
        Self::Departure,
        Self::OnScene,
        Self::Quebec,
        Self::Hospital,
        Self::EstMotif,
        Self::EstDegree,
        Self::Naca,
        Self::Age,
        Self::BirthDate,
    ];

    /// Column title used by the export
    #[must_use]
    pub const fn header_name(self) -> &'static str {
        match self {
            Self::Date => "Date",
            Self::Priority => "Priorité",
            Self::Leader => "Leader",
            Self::Second => "Equipier.iére",
            Self::Ambulance => "Ambulance",
            Self::Alarm => "Alarme",
            Self::Departure => "Départ",
            Self::OnScene => "Sur site",
            Self::Quebec => "Québec",
            Self::Hospital => "Hôpital",
            Self::EstMotif => "Motif EST",
            Self::EstDegree => "Degré EST",
            Self::Naca => "NACA",
            Self::Age => "Age",
            Self::BirthDate => "Date de naissance",
        }
    }

    /// Alternative spellings seen in hand-edited exports
    #[must_use]
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Priority => &["priorite"],
            Self::Second => &["equipier.iere", "equipier.ière", "equipier", "equipière"],
            Self::Departure => &["depart"],
            Self::Quebec => &["quebec"],
            Self::Hospital => &["hopital"],
            Self::EstDegree => &["degre est"],
            Self::Age => &["âge"],
            _ => &[],
        }
    }

    /// Departure time only refines the night-shift classification
    #[must_use]
    pub const fn is_required(self) -> bool {
        !matches!(self, Self::Departure)
    }

    /// Position in the 33-column export of January 2026
    #[must_use]
    pub const fn legacy_index(self) -> usize {
        match self {
            Self::Date => 0,
            Self::Priority => 6,
            Self::Leader => 7,
            Self::Second => 8,
            Self::Ambulance => 10,
            Self::Alarm => 13,
            Self::Departure => 14,
            Self::OnScene => 15,
            Self::Quebec => 16,
            Self::Hospital => 17,
            Self::EstMotif => 24,
            Self::EstDegree => 25,
            Self::Naca => 26,
            Self::Age => 31,
            Self::BirthDate => 32,
        }
    }

    fn matches_header(self, header: &str) -> bool {
        let normalized = normalize_header(header);
        normalized == normalize_header(self.header_name())
            || self.aliases().iter().any(|alias| normalized == *alias)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header_name())
    }
}

fn normalize_header(header: &str) -> String {
    header
        .trim_start_matches('\u{feff}')
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// How the column layout is obtained
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    /// Look every field up by its header name
    #[default]
    ByName,
    /// Use the fixed positions of the January 2026 export
    Positional,
}

/// Mapping from semantic field to column index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    columns: FxHashMap<Field, usize>,
}

impl ColumnLayout {
    /// Fixed positions of the January 2026 export, without header validation
    #[must_use]
    pub fn legacy() -> Self {
        Self {
            columns: Field::ALL
                .iter()
                .map(|field| (*field, field.legacy_index()))
                .collect(),
        }
    }

    /// Resolve the layout for a header row
    pub fn resolve<S: AsRef<str>>(mode: LayoutMode, header: &[S]) -> Result<Self, SchemaError> {
        match mode {
            LayoutMode::ByName => Self::from_header(header),
            LayoutMode::Positional => Self::positional(header),
        }
    }

    /// Find each field by header name
    ///
    /// Optional fields that are absent are simply left unmapped. The first
    /// matching column wins when a title is repeated.
    pub fn from_header<S: AsRef<str>>(header: &[S]) -> Result<Self, SchemaError> {
        if header.is_empty() {
            return Err(SchemaError::EmptyExport);
        }

        let mut columns = FxHashMap::default();
        let mut missing = Vec::new();
        for field in Field::ALL {
            match header.iter().position(|h| field.matches_header(h.as_ref())) {
                Some(index) => {
                    columns.insert(field, index);
                }
                None if field.is_required() => missing.push(field.header_name().to_string()),
                None => log::warn!("Optional column '{field}' not found in header"),
            }
        }

        if missing.is_empty() {
            Ok(Self { columns })
        } else {
            Err(SchemaError::MissingColumns(missing))
        }
    }

    /// Use the legacy positions, checking that the header agrees with them
    pub fn positional<S: AsRef<str>>(header: &[S]) -> Result<Self, SchemaError> {
        if header.is_empty() {
            return Err(SchemaError::EmptyExport);
        }

        let layout = Self::legacy();
        let expected = layout.width();
        if header.len() < expected {
            return Err(SchemaError::TooFewColumns {
                expected,
                found: header.len(),
            });
        }

        for field in Field::ALL {
            let index = field.legacy_index();
            let found = header[index].as_ref();
            if !field.matches_header(found) {
                return Err(SchemaError::UnexpectedColumn {
                    index,
                    expected: field.header_name().to_string(),
                    found: found.trim().to_string(),
                });
            }
        }

        Ok(layout)
    }

    /// Column index of a field, if mapped
    #[must_use]
    pub fn index(&self, field: Field) -> Option<usize> {
        self.columns.get(&field).copied()
    }

    /// Number of columns a row needs to cover every mapped field
    #[must_use]
    pub fn width(&self) -> usize {
        self.columns.values().max().map_or(0, |max| max + 1)
    }
}
