use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Drawing backend error: {0}")]
    Backend(String),

    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error(
        "Conformation has {residues} residues but the HP sequence labels only {labelled}"
    )]
    SequenceTooShort { residues: usize, labelled: usize },

    #[error("Invalid canvas size {width}x{height}")]
    InvalidCanvas { width: u32, height: u32 },
}

impl RenderError {
    pub(crate) fn backend<E: std::error::Error + Send + Sync>(err: DrawingAreaErrorKind<E>) -> Self {
        RenderError::Backend(err.to_string())
    }
}
