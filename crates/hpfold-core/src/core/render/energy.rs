use super::Chart;
use super::axis::{key_points, padded_range};
use super::error::RenderError;
use super::style::{ChartStyle, TRACE_COLOR};
use crate::core::models::energy::EnergyTrajectory;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use std::ops::Range;

pub const TITLE: &str = "Energy during protein folding simulation";
pub const X_LABEL: &str = "Simulation step";
pub const Y_LABEL: &str = "Energy";

const GRID_LINES: usize = 10;
const Y_PADDING: f64 = 0.05;
const DASH: f64 = 6.0;
const DASH_GAP: f64 = 4.0;

/// Energy-versus-step line chart.
///
/// Every trajectory value becomes exactly one point at `x = step`; nothing is resampled
/// or smoothed.
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyChart {
    points: Vec<(f64, f64)>,
    x_range: Range<f64>,
    y_range: Range<f64>,
}

impl EnergyChart {
    pub fn new(trajectory: &EnergyTrajectory) -> Self {
        let points: Vec<(f64, f64)> = trajectory
            .steps()
            .map(|(step, energy)| (step as f64, energy))
            .collect();

        let x_range = match points.len() {
            0 => 0.0..1.0,
            1 => -0.5..0.5,
            n => 0.0..(n - 1) as f64,
        };
        let y_range = padded_range(points.iter().map(|&(_, e)| e), Y_PADDING, 0.5);

        Self {
            points,
            x_range,
            y_range,
        }
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// First and last plotted step, i.e. `(0, N - 1)` for a non-empty trajectory.
    pub fn data_span(&self) -> Option<(f64, f64)> {
        Some((self.points.first()?.0, self.points.last()?.0))
    }

    pub fn x_range(&self) -> &Range<f64> {
        &self.x_range
    }

    pub fn y_range(&self) -> &Range<f64> {
        &self.y_range
    }
}

impl Chart for EnergyChart {
    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        style: &ChartStyle,
    ) -> Result<(), RenderError> {
        let mut chart = ChartBuilder::on(root)
            .caption(TITLE, style.font(20.0))
            .margin(style.px(15.0))
            .x_label_area_size(style.px(45.0))
            .y_label_area_size(style.px(65.0))
            .build_cartesian_2d(self.x_range.clone(), self.y_range.clone())
            .map_err(RenderError::backend)?;

        chart
            .configure_mesh()
            .disable_mesh()
            .x_labels(GRID_LINES)
            .y_labels(GRID_LINES)
            .x_desc(X_LABEL)
            .y_desc(Y_LABEL)
            .label_style(style.font(12.0))
            .axis_desc_style(style.font(15.0))
            .draw()
            .map_err(RenderError::backend)?;

        let (x, y) = (&self.x_range, &self.y_range);
        let verticals = key_points(x, GRID_LINES)
            .into_iter()
            .map(|gx| vec![(gx, y.start), (gx, y.end)]);
        let horizontals = key_points(y, GRID_LINES)
            .into_iter()
            .map(|gy| vec![(x.start, gy), (x.end, gy)]);
        for segment in verticals.chain(horizontals) {
            chart
                .draw_series(DashedLineSeries::new(
                    segment,
                    style.px(DASH),
                    style.px(DASH_GAP),
                    style.grid_line(),
                ))
                .map_err(RenderError::backend)?;
        }

        if !self.points.is_empty() {
            chart
                .draw_series(LineSeries::new(
                    self.points.iter().copied(),
                    style.line(TRACE_COLOR, 1.5),
                ))
                .map_err(RenderError::backend)?;
        }
        Ok(())
    }
}
