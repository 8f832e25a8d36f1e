use super::model::{AnnotatedDataset, AnnotatedReading, AqiLevel, Pollutant, Reading};

// ---------------------------------------------------------------------------
// Fixed tables
// ---------------------------------------------------------------------------

/// Inclusive PM2.5 ceilings; anything above the last one is Hazardous.
const AQI_BREAKPOINTS: [(f64, AqiLevel); 5] = [
    (50.0, AqiLevel::Good),
    (100.0, AqiLevel::Moderate),
    (150.0, AqiLevel::UnhealthyForSensitive),
    (200.0, AqiLevel::Unhealthy),
    (300.0, AqiLevel::VeryUnhealthy),
];

/// Per-pollutant alert limits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub pm25: f64,
    pub pm10: f64,
    pub no2: f64,
}

pub const THRESHOLDS: Thresholds = Thresholds {
    pm25: 100.0,
    pm10: 200.0,
    no2: 80.0,
};

impl Thresholds {
    pub fn limit(&self, pollutant: Pollutant) -> f64 {
        match pollutant {
            Pollutant::Pm25 => self.pm25,
            Pollutant::Pm10 => self.pm10,
            Pollutant::No2 => self.no2,
        }
    }

    /// `(pollutant, limit)` pairs in alert order.
    pub fn iter(&self) -> impl Iterator<Item = (Pollutant, f64)> + '_ {
        Pollutant::ALL.into_iter().map(move |p| (p, self.limit(p)))
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Map a PM2.5 concentration to its AQI level (first inclusive ceiling wins).
pub fn classify_aqi(pm25: f64) -> AqiLevel {
    AQI_BREAKPOINTS
        .iter()
        .find(|(ceiling, _)| pm25 <= *ceiling)
        .map(|(_, level)| *level)
        .unwrap_or(AqiLevel::Hazardous)
}

/// `"<pollutant> High"` for every strict exceedance, comma-joined, or `"Safe"`.
pub fn compute_alert(reading: &Reading, thresholds: &Thresholds) -> String {
    let exceeded: Vec<String> = thresholds
        .iter()
        .filter(|(p, limit)| reading.value(*p) > *limit)
        .map(|(p, _)| format!("{p} High"))
        .collect();

    if exceeded.is_empty() {
        "Safe".to_string()
    } else {
        exceeded.join(", ")
    }
}

/// Pair every reading with its alert, AQI level and category label.
pub fn annotate(readings: &[Reading], thresholds: &Thresholds) -> AnnotatedDataset {
    let rows = readings
        .iter()
        .map(|r| {
            let aqi = classify_aqi(r.pm25);
            AnnotatedReading {
                reading: *r,
                alert: compute_alert(r, thresholds),
                aqi,
                category: aqi.category(),
            }
        })
        .collect();
    AnnotatedDataset { rows }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use proptest::prelude::*;

    use super::*;

    fn reading(pm25: f64, pm10: f64, no2: f64) -> Reading {
        Reading {
            date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            pm25,
            pm10,
            no2,
        }
    }

    #[test]
    fn aqi_reference_points() {
        assert_eq!(classify_aqi(0.0).level(), 1);
        assert_eq!(classify_aqi(75.0).level(), 2);
        assert_eq!(classify_aqi(125.0).level(), 3);
        assert_eq!(classify_aqi(175.0).level(), 4);
        assert_eq!(classify_aqi(250.0).level(), 5);
        assert_eq!(classify_aqi(350.0).level(), 6);
    }

    #[test]
    fn aqi_ceilings_are_inclusive() {
        assert_eq!(classify_aqi(50.0), AqiLevel::Good);
        assert_eq!(classify_aqi(50.5), AqiLevel::Moderate);
        assert_eq!(classify_aqi(300.0), AqiLevel::VeryUnhealthy);
        assert_eq!(classify_aqi(300.1), AqiLevel::Hazardous);
    }

    #[test]
    fn alert_at_threshold_is_safe() {
        assert_eq!(compute_alert(&reading(100.0, 200.0, 80.0), &THRESHOLDS), "Safe");
    }

    #[test]
    fn alert_lists_exceedances_in_fixed_order() {
        assert_eq!(
            compute_alert(&reading(120.0, 220.0, 75.0), &THRESHOLDS),
            "PM2.5 High, PM10 High"
        );
        assert_eq!(
            compute_alert(&reading(200.0, 210.0, 90.0), &THRESHOLDS),
            "PM2.5 High, PM10 High, NO2 High"
        );
        assert_eq!(compute_alert(&reading(40.0, 90.0, 81.0), &THRESHOLDS), "NO2 High");
    }

    #[test]
    fn annotate_fills_category_from_level() {
        let ds = annotate(&[reading(250.0, 300.0, 95.0)], &THRESHOLDS);
        let row = &ds.rows[0];
        assert_eq!(row.aqi, AqiLevel::VeryUnhealthy);
        assert_eq!(row.category, "Very Unhealthy");
        assert_eq!(row.alert, "PM2.5 High, PM10 High, NO2 High");
    }

    #[test]
    fn annotate_is_stable_under_reapplication() {
        let base = [reading(45.0, 100.0, 60.0), reading(160.0, 180.0, 85.0)];
        let once = annotate(&base, &THRESHOLDS);
        let twice = annotate(&once.readings(), &THRESHOLDS);
        assert_eq!(once, twice);
    }

    proptest! {
        #[test]
        fn aqi_is_non_decreasing(a in 0.0f64..1000.0, b in 0.0f64..1000.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(classify_aqi(lo) <= classify_aqi(hi));
        }

        #[test]
        fn safe_iff_nothing_exceeds(
            pm25 in 0.0f64..400.0,
            pm10 in 0.0f64..400.0,
            no2 in 0.0f64..200.0,
        ) {
            let r = reading(pm25, pm10, no2);
            let alert = compute_alert(&r, &THRESHOLDS);
            let expected: Vec<&str> = [
                (pm25 > 100.0, "PM2.5 High"),
                (pm10 > 200.0, "PM10 High"),
                (no2 > 80.0, "NO2 High"),
            ]
            .into_iter()
            .filter(|(hit, _)| *hit)
            .map(|(_, text)| text)
            .collect();

            if expected.is_empty() {
                prop_assert_eq!(alert, "Safe");
            } else {
                prop_assert_eq!(alert, expected.join(", "));
            }
        }
    }
}
