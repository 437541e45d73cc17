use super::scene::{BACKGROUND, HYDROPHOBIC, POLAR};
use super::surface::{Color, DrawSurface};
use crate::engine::energy::EnergyTracker;
use crate::engine::trace::EnergyTrace;
use nalgebra::Point2;

/// Display clamp of the strip chart, mapped onto the full chart height.
const CHART_MIN: f64 = -50.0;
const CHART_MAX: f64 = 150.0;

/// Draws the scrolling energy strip chart: one sample per pixel column,
/// oldest on the left, clipped to the display range.
pub fn draw_chart(trace: &EnergyTrace, surface: &mut impl DrawSurface) {
    let height = surface.height();
    surface.clear();
    surface.fill_rect(0.0, 0.0, surface.width(), height, BACKGROUND);
    if trace.len() < 2 {
        return;
    }
    let span = CHART_MAX - CHART_MIN;
    let points: Vec<Point2<f64>> = trace
        .iter()
        .enumerate()
        .map(|(i, sample)| {
            let clamped = sample.clamp(CHART_MIN, CHART_MAX);
            let y = height - ((clamped - CHART_MIN) / span) * height;
            Point2::new(i as f64, y)
        })
        .collect();
    surface.stroke_path(&points, 1.5, POLAR);
}

/// Draws the vertical energy gauge: fill height follows the normalized fill
/// fraction, with a color shift from the unstable to the stable end of the
/// palette. Skipped entirely while no finite energy sample exists.
pub fn draw_gauge(tracker: &EnergyTracker, surface: &mut impl DrawSurface) {
    let width = surface.width();
    let height = surface.height();
    surface.clear();
    surface.fill_rect(0.0, 0.0, width, height, BACKGROUND);
    let Some(pct) = tracker.gauge_fill() else {
        return;
    };
    let fill_height = height * pct / 100.0;
    let t = (pct - 2.0) / 96.0;
    let color = gauge_color(t);
    surface.fill_rect(0.0, height - fill_height, width, fill_height, color);
}

/// Color of the gauge fill for a stability parameter in [0, 1].
fn gauge_color(t: f64) -> Color {
    HYDROPHOBIC.lerp(POLAR, t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::surface::{DrawCommand, RecordingSurface};

    fn filled_trace(samples: &[f64]) -> EnergyTrace {
        let mut trace = EnergyTrace::new(64);
        for &s in samples {
            trace.push(s);
        }
        trace
    }

    #[test]
    fn chart_draws_one_point_per_sample() {
        let trace = filled_trace(&[0.0, 10.0, 20.0, 30.0]);
        let mut surface = RecordingSurface::new(64.0, 80.0);
        draw_chart(&trace, &mut surface);
        let path = surface
            .commands
            .iter()
            .find_map(|c| match c {
                DrawCommand::StrokePath { points, .. } => Some(points.clone()),
                _ => None,
            })
            .expect("chart should stroke a path");
        assert_eq!(path.len(), 4);
        assert_eq!(path[3].x, 3.0);
    }

    #[test]
    fn chart_skips_the_path_for_fewer_than_two_samples() {
        let trace = filled_trace(&[5.0]);
        let mut surface = RecordingSurface::new(64.0, 80.0);
        draw_chart(&trace, &mut surface);
        assert_eq!(surface.count(|c| matches!(c, DrawCommand::StrokePath { .. })), 0);
    }

    #[test]
    fn chart_clamps_samples_to_the_display_range() {
        let trace = filled_trace(&[-500.0, 500.0]);
        let mut surface = RecordingSurface::new(64.0, 80.0);
        draw_chart(&trace, &mut surface);
        let points = surface
            .commands
            .iter()
            .find_map(|c| match c {
                DrawCommand::StrokePath { points, .. } => Some(points.clone()),
                _ => None,
            })
            .unwrap();
        // -500 clamps to the bottom edge, +500 to the top.
        assert_eq!(points[0].y, 80.0);
        assert_eq!(points[1].y, 0.0);
    }

    #[test]
    fn chart_maps_the_range_midpoint_to_mid_height() {
        let trace = filled_trace(&[50.0, 50.0]);
        let mut surface = RecordingSurface::new(64.0, 80.0);
        draw_chart(&trace, &mut surface);
        let points = surface
            .commands
            .iter()
            .find_map(|c| match c {
                DrawCommand::StrokePath { points, .. } => Some(points.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(points[0].y, 40.0);
    }

    #[test]
    fn gauge_is_empty_before_any_finite_sample() {
        let tracker = EnergyTracker::new();
        let mut surface = RecordingSurface::new(20.0, 100.0);
        draw_gauge(&tracker, &mut surface);
        // Clear plus background only, no fill bar.
        assert_eq!(surface.count(|c| matches!(c, DrawCommand::FillRect { .. })), 1);
    }

    #[test]
    fn gauge_fill_height_follows_the_normalized_fraction() {
        let mut tracker = EnergyTracker::new();
        tracker.record(0.0);
        tracker.record(100.0);
        tracker.record(50.0); // exactly mid-window: 50% fill
        let mut surface = RecordingSurface::new(20.0, 100.0);
        draw_gauge(&tracker, &mut surface);
        let bar = surface
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::FillRect { y, height, color, .. } => Some((*y, *height, *color)),
                _ => None,
            })
            .nth(1)
            .expect("gauge should draw a fill bar");
        assert_eq!(bar.1, 50.0);
        assert_eq!(bar.0, 50.0);
        assert_eq!(bar.2, gauge_color(0.5));
    }

    #[test]
    fn gauge_color_shifts_from_unstable_to_stable_palette_ends() {
        assert_eq!(gauge_color(0.0), HYDROPHOBIC);
        assert_eq!(gauge_color(1.0), POLAR);
    }
}
