/// Errors raised at the viewport boundary.
///
/// Every grid operation is total; only viewport construction and zooming can
/// be handed values that would break the screen/world mapping.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ViewportError {
    #[error("zoom factor must be finite and positive, got {0}")]
    InvalidZoomFactor(f64),
    #[error("grid spacing must be finite and positive, got {0}")]
    InvalidGridSpacing(f64),
    #[error("scale bounds must satisfy 0 < min <= max, got [{min}, {max}]")]
    InvalidScaleBounds { min: f64, max: f64 },
}
