use anyhow::{Context, Result};
use chrono::{Days, NaiveDate};

use super::model::Reading;

// ---------------------------------------------------------------------------
// Compiled-in sample table
// ---------------------------------------------------------------------------

const START: (i32, u32, u32) = (2025, 7, 1);

const PM25: [f64; 10] = [45.0, 85.0, 120.0, 160.0, 200.0, 250.0, 55.0, 40.0, 180.0, 95.0];
const PM10: [f64; 10] = [100.0, 150.0, 220.0, 180.0, 210.0, 300.0, 120.0, 90.0, 250.0, 160.0];
const NO2: [f64; 10] = [60.0, 70.0, 75.0, 85.0, 90.0, 95.0, 50.0, 40.0, 82.0, 78.0];

/// Ten consecutive daily readings starting at 2025-07-01.
pub fn sample_readings() -> Result<Vec<Reading>> {
    let (y, m, d) = START;
    let start = NaiveDate::from_ymd_opt(y, m, d)
        .with_context(|| format!("invalid sample start date {y}-{m:02}-{d:02}"))?;

    PM25.iter()
        .zip(PM10.iter())
        .zip(NO2.iter())
        .enumerate()
        .map(|(i, ((&pm25, &pm10), &no2))| {
            let date = start
                .checked_add_days(Days::new(i as u64))
                .with_context(|| format!("sample day {i} overflows the calendar"))?;
            Ok(Reading {
                date,
                pm25,
                pm10,
                no2,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_has_ten_strictly_increasing_dates() {
        let readings = sample_readings().unwrap();
        assert_eq!(readings.len(), 10);
        assert_eq!(readings[0].date.to_string(), "2025-07-01");
        assert_eq!(readings[9].date.to_string(), "2025-07-10");
        assert!(readings.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[test]
    fn sample_values_line_up_with_dates() {
        let readings = sample_readings().unwrap();
        let r = readings[2];
        assert_eq!(r.date.to_string(), "2025-07-03");
        assert_eq!((r.pm25, r.pm10, r.no2), (120.0, 220.0, 75.0));
    }
}
