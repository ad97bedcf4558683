use super::Chart;
use super::axis::padded_range;
use super::error::RenderError;
use super::style::{ChartStyle, HYDROPHOBIC_COLOR, POLAR_COLOR, TRACE_COLOR, UNLABELED_COLOR};
use crate::core::models::conformation::Conformation;
use crate::core::models::sequence::{HydrophobicitySequence, ResidueClass};
use nalgebra::Point3;
use plotters::coord::Shift;
use plotters::prelude::*;
use serde::Deserialize;
use std::fmt;
use std::ops::Range;
use std::str::FromStr;
use tracing::warn;

pub const TITLE: &str = "Final protein conformation";
pub const AXIS_LABELS: [&str; 3] = ["X", "Y", "Z"];

const AXIS_PADDING: f64 = 0.1;
const MIN_HALF_WIDTH: f64 = 1.0;
const MARKER_RADIUS: f64 = 5.0;
const PROJECTION_YAW: f64 = 0.7;
const PROJECTION_PITCH: f64 = 0.35;
const PROJECTION_SCALE: f64 = 0.8;

/// How residues beyond the end of the HP sequence are colored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverflowColoring {
    /// Draw them in a neutral gray.
    #[default]
    Neutral,
    /// Reuse the class of the last labelled residue.
    RepeatLast,
    /// Refuse to render the chart.
    Reject,
}

impl FromStr for OverflowColoring {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "neutral" => Ok(Self::Neutral),
            "repeat-last" => Ok(Self::RepeatLast),
            "reject" => Ok(Self::Reject),
            other => Err(format!(
                "unknown overflow coloring '{}' (expected neutral, repeat-last or reject)",
                other
            )),
        }
    }
}

impl fmt::Display for OverflowColoring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Neutral => "neutral",
            Self::RepeatLast => "repeat-last",
            Self::Reject => "reject",
        })
    }
}

/// Color class of a scatter marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerColor {
    Class(ResidueClass),
    Unlabeled,
}

impl MarkerColor {
    pub fn rgb(self) -> RGBColor {
        match self {
            MarkerColor::Class(ResidueClass::Hydrophobic) => HYDROPHOBIC_COLOR,
            MarkerColor::Class(ResidueClass::Polar) => POLAR_COLOR,
            MarkerColor::Unlabeled => UNLABELED_COLOR,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub position: Point3<f64>,
    pub color: MarkerColor,
}

/// 3D backbone trace of the final conformation with one colored marker per residue.
#[derive(Debug, Clone, PartialEq)]
pub struct ConformationChart {
    markers: Vec<Marker>,
    ranges: [Range<f64>; 3],
}

impl ConformationChart {
    /// Pairs every position with the class of the residue at the same index.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::SequenceTooShort`] when the chain is longer than `sequence`
    /// and `overflow` is [`OverflowColoring::Reject`].
    pub fn new(
        conformation: &Conformation,
        sequence: &HydrophobicitySequence,
        overflow: OverflowColoring,
    ) -> Result<Self, RenderError> {
        let residues = conformation.len();
        if residues > sequence.len() {
            if overflow == OverflowColoring::Reject {
                return Err(RenderError::SequenceTooShort {
                    residues,
                    labelled: sequence.len(),
                });
            }
            warn!(
                "Conformation has {} residues but the HP sequence labels only {}; coloring the rest as '{}'",
                residues,
                sequence.len(),
                overflow
            );
        }

        let markers = conformation
            .positions()
            .iter()
            .enumerate()
            .map(|(i, &position)| {
                let class = match (sequence.get(i), overflow) {
                    (Some(class), _) => Some(class),
                    (None, OverflowColoring::RepeatLast) => sequence.last(),
                    (None, _) => None,
                };
                Marker {
                    position,
                    color: class.map_or(MarkerColor::Unlabeled, MarkerColor::Class),
                }
            })
            .collect();

        let bounds = conformation.bounds();
        let ranges = [0, 1, 2].map(|axis| {
            let extent = bounds.iter().flat_map(|(lo, hi)| [lo[axis], hi[axis]]);
            padded_range(extent, AXIS_PADDING, MIN_HALF_WIDTH)
        });

        Ok(Self { markers, ranges })
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn ranges(&self) -> &[Range<f64>; 3] {
        &self.ranges
    }

    fn trace(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.markers
            .iter()
            .map(|m| (m.position.x, m.position.y, m.position.z))
    }
}

impl Chart for ConformationChart {
    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        style: &ChartStyle,
    ) -> Result<(), RenderError> {
        let [x, y, z] = self.ranges.clone();
        let mut chart = ChartBuilder::on(root)
            .caption(TITLE, style.font(20.0))
            .margin(style.px(20.0))
            .build_cartesian_3d(x.clone(), y.clone(), z.clone())
            .map_err(RenderError::backend)?;

        chart.with_projection(|mut pb| {
            pb.yaw = PROJECTION_YAW;
            pb.pitch = PROJECTION_PITCH;
            pb.scale = PROJECTION_SCALE;
            pb.into_matrix()
        });

        chart
            .configure_axes()
            .light_grid_style(BLACK.mix(0.1).stroke_width(style.px(1.0)))
            .max_light_lines(3)
            .label_style(style.font(11.0))
            .draw()
            .map_err(RenderError::backend)?;

        let axis_font = style.font(15.0);
        chart
            .draw_series([
                Text::new(AXIS_LABELS[0], (x.end, y.start, z.start), axis_font.clone()),
                Text::new(AXIS_LABELS[1], (x.start, y.end, z.start), axis_font.clone()),
                Text::new(AXIS_LABELS[2], (x.start, y.start, z.end), axis_font),
            ])
            .map_err(RenderError::backend)?;

        if self.markers.is_empty() {
            return Ok(());
        }

        chart
            .draw_series(LineSeries::new(self.trace(), style.line(TRACE_COLOR, 2.0)))
            .map_err(RenderError::backend)?;

        let radius = style.px(MARKER_RADIUS);
        chart
            .draw_series(self.markers.iter().map(|m| {
                Circle::new(
                    (m.position.x, m.position.y, m.position.z),
                    radius,
                    m.color.rgb().filled(),
                )
            }))
            .map_err(RenderError::backend)?;
        Ok(())
    }
}
