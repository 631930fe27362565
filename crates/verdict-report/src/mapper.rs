use crate::outcome::{Outcome, ReportStatus};
use crate::render::{ErrorDetails, ErrorRenderer, SourceChainRenderer};

/// Maps execution outcomes onto the report consumer's status shape.
///
/// Holds the [`ErrorRenderer`] used to format the failure-like
/// outcomes. [`OutcomeMapper::default`] formats with
/// [`SourceChainRenderer`].
pub struct OutcomeMapper<R = SourceChainRenderer> {
  renderer: R,
}

impl Default for OutcomeMapper {
  fn default() -> Self {
    Self::new(SourceChainRenderer)
  }
}

impl<R: ErrorRenderer> OutcomeMapper<R> {
  /// Create a mapper that formats failures with the given renderer.
  pub fn new(renderer: R) -> Self {
    Self { renderer }
  }

  /// Dispatch one outcome to the sink.
  ///
  /// The sink is invoked exactly once: with rendered error details for
  /// the failure-like outcomes, without for the rest. The match is
  /// exhaustive, so a new [`Outcome`] variant cannot fall through
  /// silently.
  pub fn map_outcome(
    &self,
    outcome: Outcome,
    sink: impl FnOnce(ReportStatus, Option<ErrorDetails>),
  ) {
    match outcome {
      Outcome::Compromised(error) => {
        sink(ReportStatus::Compromised, Some(self.renderer.render(&*error)))
      }
      Outcome::FailedWithError(error) => {
        sink(ReportStatus::Error, Some(self.renderer.render(&*error)))
      }
      Outcome::FailedWithAssertionError(error) => {
        sink(ReportStatus::Failure, Some(self.renderer.render(&*error)))
      }
      Outcome::Skipped => sink(ReportStatus::Skipped, None),
      Outcome::Ignored => sink(ReportStatus::Ignored, None),
      Outcome::ImplementationPending => sink(ReportStatus::Pending, None),
      Outcome::Successful => sink(ReportStatus::Success, None),
    }
  }
}
