use std::fmt;

use chrono::NaiveDate;

// ---------------------------------------------------------------------------
// Pollutant – the three measured species
// ---------------------------------------------------------------------------

/// A measured pollutant. Declaration order is the display and alert order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Pollutant {
    Pm25,
    Pm10,
    No2,
}

impl Pollutant {
    pub const ALL: [Pollutant; 3] = [Pollutant::Pm25, Pollutant::Pm10, Pollutant::No2];

    pub fn label(self) -> &'static str {
        match self {
            Pollutant::Pm25 => "PM2.5",
            Pollutant::Pm10 => "PM10",
            Pollutant::No2 => "NO2",
        }
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Reading – one row of the sample table
// ---------------------------------------------------------------------------

/// One day's pollutant concentrations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub date: NaiveDate,
    pub pm25: f64,
    pub pm10: f64,
    pub no2: f64,
}

impl Reading {
    pub fn value(&self, pollutant: Pollutant) -> f64 {
        match pollutant {
            Pollutant::Pm25 => self.pm25,
            Pollutant::Pm10 => self.pm10,
            Pollutant::No2 => self.no2,
        }
    }
}

// ---------------------------------------------------------------------------
// AqiLevel – six-step severity derived from PM2.5
// ---------------------------------------------------------------------------

/// Air Quality Index level, 1 (Good) through 6 (Hazardous).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum AqiLevel {
    Good = 1,
    Moderate = 2,
    UnhealthyForSensitive = 3,
    Unhealthy = 4,
    VeryUnhealthy = 5,
    Hazardous = 6,
}

impl AqiLevel {
    /// Numeric level in `1..=6`.
    pub fn level(self) -> u8 {
        self as u8
    }

    pub fn category(self) -> &'static str {
        match self {
            AqiLevel::Good => "Good",
            AqiLevel::Moderate => "Moderate",
            AqiLevel::UnhealthyForSensitive => "Unhealthy for Sensitive Groups",
            AqiLevel::Unhealthy => "Unhealthy",
            AqiLevel::VeryUnhealthy => "Very Unhealthy",
            AqiLevel::Hazardous => "Hazardous",
        }
    }

    pub fn tip(self) -> &'static str {
        match self {
            AqiLevel::Good => "Enjoy outdoor activities!",
            AqiLevel::Moderate => "Air is fine, be mindful if sensitive.",
            AqiLevel::UnhealthyForSensitive => "Sensitive groups should limit activity.",
            AqiLevel::Unhealthy => "Avoid strenuous outdoor work.",
            AqiLevel::VeryUnhealthy => "Stay indoors if possible.",
            AqiLevel::Hazardous => "Use air purifiers, avoid going out!",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            AqiLevel::Good => "😊",
            AqiLevel::Moderate => "😐",
            AqiLevel::UnhealthyForSensitive => "😷",
            AqiLevel::Unhealthy => "🤒",
            AqiLevel::VeryUnhealthy => "🤢",
            AqiLevel::Hazardous => "☠",
        }
    }

    /// Levels from Unhealthy upward also carry the mask warning.
    pub fn needs_mask(self) -> bool {
        self >= AqiLevel::Unhealthy
    }
}

impl fmt::Display for AqiLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level())
    }
}

// ---------------------------------------------------------------------------
// AnnotatedReading / AnnotatedDataset – readings plus derived fields
// ---------------------------------------------------------------------------

/// A reading together with its alert text and AQI classification.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedReading {
    pub reading: Reading,
    pub alert: String,
    pub aqi: AqiLevel,
    pub category: &'static str,
}

/// The annotated table. Built once at startup, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnnotatedDataset {
    pub rows: Vec<AnnotatedReading>,
}

impl AnnotatedDataset {
    /// Number of readings.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Dates in dataset order.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.rows.iter().map(|r| r.reading.date).collect()
    }

    /// The base readings, without derived fields.
    #[cfg(test)]
    pub fn readings(&self) -> Vec<Reading> {
        self.rows.iter().map(|r| r.reading).collect()
    }
}
