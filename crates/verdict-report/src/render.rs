use serde::{Deserialize, Serialize};

/// Displayable description of a failure, as embedded in a report.
///
/// Serializes to the camelCase shape the report consumer ingests.
/// Optional fields are omitted rather than written as null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetails {
  /// Human-readable failure message.
  pub message: String,
  /// Concrete error type name, when the renderer knows it.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub error_type: Option<String>,
  /// Rendered stack or cause chain, when one is available.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub stack_trace: Option<String>,
}

/// Turns the framework's internal error representation into the
/// displayable [`ErrorDetails`] structure.
///
/// Implementations are pure formatting: total over any error, with no
/// side effects. Implement this to control how failures appear in
/// reports, for example to recover concrete type names the trait
/// object cannot reveal.
pub trait ErrorRenderer {
  /// Render one captured error.
  fn render(&self, error: &(dyn std::error::Error + 'static)) -> ErrorDetails;
}

/// Default renderer.
///
/// Uses the error's display text as the message and renders its
/// `source()` chain, outermost cause first, as the stack trace.
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceChainRenderer;

impl ErrorRenderer for SourceChainRenderer {
  fn render(&self, error: &(dyn std::error::Error + 'static)) -> ErrorDetails {
    let mut chain = Vec::new();
    let mut cause = error.source();
    while let Some(err) = cause {
      chain.push(format!("Caused by: {err}"));
      cause = err.source();
    }

    ErrorDetails {
      message: error.to_string(),
      error_type: None,
      stack_trace: if chain.is_empty() {
        None
      } else {
        Some(chain.join("\n"))
      },
    }
  }
}
