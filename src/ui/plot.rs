use chrono::{NaiveDate, TimeDelta};
use eframe::egui::Ui;
use egui_plot::{HLine, Legend, Line, LineStyle, MarkerShape, Plot, PlotPoints, Points};

use crate::color::generate_palette;
use crate::data::classify::Thresholds;
use crate::data::model::{AnnotatedDataset, Pollutant};

// ---------------------------------------------------------------------------
// Trend chart (Trends screen)
// ---------------------------------------------------------------------------

/// Point markers, in `Pollutant::ALL` order.
const MARKERS: [MarkerShape; 3] = [MarkerShape::Circle, MarkerShape::Square, MarkerShape::Up];

/// Render every pollutant over the dataset's dates, with a dashed limit line each.
pub fn trend_plot(ui: &mut Ui, dataset: &AnnotatedDataset, thresholds: &Thresholds) {
    if dataset.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No readings to plot.");
        });
        return;
    }
    let origin = dataset.rows[0].reading.date;
    let palette = generate_palette(Pollutant::ALL.len());

    Plot::new("trend_plot")
        .legend(Legend::default())
        .x_axis_label("Date")
        .y_axis_label("Pollutant Level")
        .x_axis_formatter(move |mark, _range| day_label(origin, mark.value))
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let series = Pollutant::ALL.into_iter().zip(MARKERS).zip(&palette);
            for ((pollutant, marker), &color) in series {
                let points = series_points(dataset, origin, pollutant);

                plot_ui.line(
                    Line::new(PlotPoints::from(points.clone()))
                        .name(pollutant.label())
                        .color(color)
                        .width(2.0),
                );
                plot_ui.points(
                    Points::new(PlotPoints::from(points))
                        .name(pollutant.label())
                        .shape(marker)
                        .filled(true)
                        .radius(4.0)
                        .color(color),
                );
                plot_ui.hline(
                    HLine::new(thresholds.limit(pollutant))
                        .name(format!("{pollutant} Limit"))
                        .color(color)
                        .style(LineStyle::dashed_loose()),
                );
            }
        });
}

/// `[day offset from origin, value]` for one pollutant, in dataset order.
pub fn series_points(
    dataset: &AnnotatedDataset,
    origin: NaiveDate,
    pollutant: Pollutant,
) -> Vec<[f64; 2]> {
    dataset
        .rows
        .iter()
        .map(|row| {
            let r = &row.reading;
            [(r.date - origin).num_days() as f64, r.value(pollutant)]
        })
        .collect()
}

/// X-axis tick label: the ISO date for whole-day offsets, blank otherwise.
pub fn day_label(origin: NaiveDate, x: f64) -> String {
    if (x - x.round()).abs() > 1e-6 {
        return String::new();
    }
    TimeDelta::try_days(x.round() as i64)
        .and_then(|delta| origin.checked_add_signed(delta))
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::classify::{annotate, THRESHOLDS};
    use crate::data::sample::sample_readings;

    #[test]
    fn series_uses_day_offsets() {
        let ds = annotate(&sample_readings().unwrap(), &THRESHOLDS);
        let origin = ds.rows[0].reading.date;
        let pts = series_points(&ds, origin, Pollutant::No2);
        assert_eq!(pts.len(), 10);
        assert_eq!(pts[0], [0.0, 60.0]);
        assert_eq!(pts[9], [9.0, 78.0]);
    }

    #[test]
    fn one_color_and_marker_per_pollutant() {
        let palette = generate_palette(Pollutant::ALL.len());
        assert_eq!(palette.len(), MARKERS.len());
        assert!(AnnotatedDataset::default().is_empty());
    }

    #[test]
    fn labels_only_whole_days() {
        let origin = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
        assert_eq!(day_label(origin, 0.0), "2025-07-01");
        assert_eq!(day_label(origin, 5.0), "2025-07-06");
        assert_eq!(day_label(origin, -1.0), "2025-06-30");
        assert_eq!(day_label(origin, 2.5), "");
        assert_eq!(day_label(origin, 1e300), "");
    }
}
