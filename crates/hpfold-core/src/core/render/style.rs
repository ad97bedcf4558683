use plotters::prelude::*;

pub const HYDROPHOBIC_COLOR: RGBColor = RGBColor(255, 0, 0);
pub const POLAR_COLOR: RGBColor = RGBColor(0, 128, 0);
pub const UNLABELED_COLOR: RGBColor = RGBColor(128, 128, 128);
pub const TRACE_COLOR: RGBColor = RGBColor(0, 0, 255);

const FONT_FAMILY: &str = "sans-serif";
const GRID_ALPHA: f64 = 0.3;

/// Resolution-dependent sizing shared by every chart.
///
/// Sizes are expressed for a 100 dpi canvas and multiplied by `scale`, so a 300 dpi
/// raster keeps the proportions of the vector output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartStyle {
    pub scale: f64,
}

impl ChartStyle {
    pub fn new(scale: f64) -> Self {
        Self { scale }
    }

    pub fn px(&self, size: f64) -> u32 {
        (size * self.scale).round().max(1.0) as u32
    }

    pub fn font(&self, size: f64) -> TextStyle<'static> {
        TextStyle::from((FONT_FAMILY, size * self.scale).into_font())
    }

    pub fn line(&self, color: RGBColor, width: f64) -> ShapeStyle {
        color.stroke_width(self.px(width))
    }

    pub fn grid_line(&self) -> ShapeStyle {
        BLACK.mix(GRID_ALPHA).stroke_width(self.px(1.0))
    }
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self::new(1.0)
    }
}
