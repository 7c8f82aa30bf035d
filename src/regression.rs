use serde::Serialize;

use crate::error::PipelineError;

// ---------------------------------------------------------------------------
// Regression descriptor – validated configuration for the renderer
// ---------------------------------------------------------------------------
//
// The pipeline never fits a curve. It only validates the chosen family and
// style and hands the renderer an immutable descriptor.

/// Curve family drawn over the scatter data by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RegressionFamily {
    None,
    Linear,
    Exponential,
    LocallyWeighted,
    Logarithmic,
    Polynomial,
    Power,
    Quadratic,
}

/// Caller-facing regression configuration, before validation.
///
/// `opacity_percent` is the UI's percentage form in `[1, 99]`; validation
/// converts it to a unit fraction. Defaults mirror the plot controls:
/// width 5, opacity 60%, neutral gray.
#[derive(Debug, Clone, PartialEq)]
pub struct RegressionConfig {
    pub family: RegressionFamily,
    pub line_width: f64,
    pub opacity_percent: f64,
    pub color: String,
}

impl Default for RegressionConfig {
    fn default() -> Self {
        RegressionConfig {
            family: RegressionFamily::None,
            line_width: 5.0,
            opacity_percent: 60.0,
            color: "#7f7f7f".to_string(),
        }
    }
}

impl RegressionConfig {
    /// Validate and freeze into a [`RegressionDescriptor`].
    ///
    /// The `None` family short-circuits and carries no style. Out-of-domain
    /// values are rejected, never clamped.
    pub fn validate(&self) -> Result<RegressionDescriptor, PipelineError> {
        if self.family == RegressionFamily::None {
            return Ok(RegressionDescriptor::none());
        }

        if !self.line_width.is_finite() || self.line_width <= 0.0 {
            return Err(PipelineError::InvalidRegressionParameters(format!(
                "line width must be positive, got {}",
                self.line_width
            )));
        }
        if !self.opacity_percent.is_finite()
            || !(1.0..=99.0).contains(&self.opacity_percent)
        {
            return Err(PipelineError::InvalidRegressionParameters(format!(
                "opacity must be between 1 and 99 percent, got {}",
                self.opacity_percent
            )));
        }

        Ok(RegressionDescriptor {
            family: self.family,
            style: Some(RegressionStyle {
                line_width: self.line_width,
                stroke_opacity: self.opacity_percent / 100.0,
                color: self.color.clone(),
            }),
        })
    }
}

/// Visual style of the regression line, with opacity as a unit fraction.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegressionStyle {
    pub line_width: f64,
    pub stroke_opacity: f64,
    pub color: String,
}

/// Validated, immutable regression descriptor. Constructed only through
/// [`RegressionConfig::validate`]; consumed only by the external renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegressionDescriptor {
    family: RegressionFamily,
    #[serde(skip_serializing_if = "Option::is_none")]
    style: Option<RegressionStyle>,
}

impl RegressionDescriptor {
    /// Descriptor for "draw no regression line".
    pub fn none() -> Self {
        RegressionDescriptor {
            family: RegressionFamily::None,
            style: None,
        }
    }

    pub fn family(&self) -> RegressionFamily {
        self.family
    }

    /// Style of the line; `None` exactly when the family is `None`.
    pub fn style(&self) -> Option<&RegressionStyle> {
        self.style.as_ref()
    }
}
