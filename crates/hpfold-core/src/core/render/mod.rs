//! Chart models and their rendering into in-memory artifacts.
//!
//! Each chart is first built as a plain data model (points, ranges, marker colors) so its
//! content can be inspected without a drawing backend, then drawn with `plotters` into an
//! SVG string or an RGB buffer that is encoded as PNG. Nothing touches the filesystem here.

pub mod axis;
pub mod conformation;
pub mod energy;
pub mod error;
pub mod style;

use self::error::RenderError;
use self::style::ChartStyle;
use image::ImageEncoder;
use image::codecs::png::PngEncoder;
use plotters::coord::Shift;
use plotters::prelude::*;

/// Resolution the vector output is laid out at; `ChartStyle` sizes are given for it.
pub const VECTOR_DPI: u32 = 100;

/// Physical figure size in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureSize {
    pub width_in: f64,
    pub height_in: f64,
}

impl FigureSize {
    pub const fn new(width_in: f64, height_in: f64) -> Self {
        Self {
            width_in,
            height_in,
        }
    }

    pub fn pixels(&self, dpi: u32) -> (u32, u32) {
        let to_px = |inches: f64| (inches * dpi as f64).round() as u32;
        (to_px(self.width_in), to_px(self.height_in))
    }
}

/// A chart that can draw itself onto any `plotters` backend.
pub trait Chart {
    /// Draws the chart onto a drawing area that has already been cleared.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Backend`] if the backend rejects a drawing operation.
    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        style: &ChartStyle,
    ) -> Result<(), RenderError>;
}

/// Output encoding of a rendered chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactFormat {
    Svg,
    Png,
}

impl ArtifactFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ArtifactFormat::Svg => "svg",
            ArtifactFormat::Png => "png",
        }
    }
}

/// A fully encoded chart waiting to be written under `file_name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: String,
    pub format: ArtifactFormat,
    pub bytes: Vec<u8>,
}

impl Artifact {
    /// Renders `chart` in `format`, naming the artifact `<stem>.<extension>`.
    pub fn render<C: Chart>(
        chart: &C,
        stem: &str,
        format: ArtifactFormat,
        figure: FigureSize,
        dpi: u32,
    ) -> Result<Self, RenderError> {
        let bytes = match format {
            ArtifactFormat::Svg => render_svg(chart, figure)?.into_bytes(),
            ArtifactFormat::Png => render_png(chart, figure, dpi)?,
        };
        Ok(Self {
            file_name: format!("{}.{}", stem, format.extension()),
            format,
            bytes,
        })
    }
}

fn checked_canvas(figure: FigureSize, dpi: u32) -> Result<(u32, u32), RenderError> {
    let (width, height) = figure.pixels(dpi);
    if width == 0 || height == 0 {
        return Err(RenderError::InvalidCanvas { width, height });
    }
    Ok((width, height))
}

pub fn render_svg<C: Chart>(chart: &C, figure: FigureSize) -> Result<String, RenderError> {
    let size = checked_canvas(figure, VECTOR_DPI)?;
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
        root.fill(&WHITE).map_err(RenderError::backend)?;
        chart.draw(&root, &ChartStyle::default())?;
        root.present().map_err(RenderError::backend)?;
    }
    Ok(svg)
}

pub fn render_png<C: Chart>(chart: &C, figure: FigureSize, dpi: u32) -> Result<Vec<u8>, RenderError> {
    let (width, height) = checked_canvas(figure, dpi)?;
    let mut pixels = vec![0u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut pixels, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(RenderError::backend)?;
        let style = ChartStyle::new(dpi as f64 / VECTOR_DPI as f64);
        chart.draw(&root, &style)?;
        root.present().map_err(RenderError::backend)?;
    }

    let mut png = Vec::new();
    PngEncoder::new(&mut png).write_image(&pixels, width, height, image::ExtendedColorType::Rgb8)?;
    Ok(png)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Blank;

    impl Chart for Blank {
        fn draw<DB: DrawingBackend>(
            &self,
            _root: &DrawingArea<DB, Shift>,
            _style: &ChartStyle,
        ) -> Result<(), RenderError> {
            Ok(())
        }
    }

    #[test]
    fn figure_size_converts_inches_to_pixels() {
        assert_eq!(FigureSize::new(10.0, 6.0).pixels(300), (3000, 1800));
        assert_eq!(FigureSize::new(8.0, 8.0).pixels(100), (800, 800));
    }

    #[test]
    fn zero_sized_canvas_is_rejected() {
        let err = render_png(&Blank, FigureSize::new(0.0, 1.0), 100).unwrap_err();
        assert!(matches!(err, RenderError::InvalidCanvas { width: 0, .. }));
    }

    #[test]
    fn png_output_carries_the_png_signature() {
        let png = render_png(&Blank, FigureSize::new(1.0, 1.0), 50).unwrap();
        assert_eq!(&png[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[test]
    fn svg_output_is_an_svg_document() {
        let svg = render_svg(&Blank, FigureSize::new(2.0, 1.0)).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("width=\"200\""));
    }

    #[test]
    fn artifact_name_uses_the_format_extension() {
        let artifact =
            Artifact::render(&Blank, "zwijanie", ArtifactFormat::Png, FigureSize::new(1.0, 1.0), 20)
                .unwrap();
        assert_eq!(artifact.file_name, "zwijanie.png");
        assert_eq!(artifact.format, ArtifactFormat::Png);
    }
}
