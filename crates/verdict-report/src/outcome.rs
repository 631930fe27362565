use serde::{Deserialize, Serialize};
use strum::AsRefStr;

/// The framework's internal representation of a captured failure.
pub type TestError = Box<dyn std::error::Error + Send + Sync>;

/// Final disposition of one executed test or step.
///
/// Produced by upstream instrumentation and consumed exactly once by
/// [`map_outcome`](crate::OutcomeMapper::map_outcome). The set is
/// closed: mapping sites match every variant without a wildcard arm,
/// so a new variant fails to compile until every consumer handles it.
#[derive(Debug)]
pub enum Outcome {
  /// The execution could not establish a trustworthy result.
  Compromised(TestError),
  /// The execution failed with an unexpected error.
  FailedWithError(TestError),
  /// The execution failed on an assertion.
  FailedWithAssertionError(TestError),
  /// The execution was skipped.
  Skipped,
  /// The execution was ignored.
  Ignored,
  /// The scenario names behavior that is not implemented yet.
  ImplementationPending,
  /// The execution passed.
  Successful,
}

/// Status keyword understood by the downstream report consumer.
///
/// A strict 1:1 image of the [`Outcome`] variant tags. Both the string
/// form ([`AsRef<str>`], [`Display`](std::fmt::Display)) and the serde
/// form render the fixed keywords the report format expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportStatus {
  Compromised,
  Error,
  Failure,
  Skipped,
  Ignored,
  Pending,
  Success,
}

impl std::fmt::Display for ReportStatus {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_ref())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn statuses_render_as_fixed_keywords() {
    let keywords = [
      (ReportStatus::Compromised, "COMPROMISED"),
      (ReportStatus::Error, "ERROR"),
      (ReportStatus::Failure, "FAILURE"),
      (ReportStatus::Skipped, "SKIPPED"),
      (ReportStatus::Ignored, "IGNORED"),
      (ReportStatus::Pending, "PENDING"),
      (ReportStatus::Success, "SUCCESS"),
    ];

    for (status, keyword) in keywords {
      assert_eq!(status.as_ref(), keyword);
      assert_eq!(status.to_string(), keyword);
    }
  }

  #[test]
  fn statuses_serialize_as_their_keyword() {
    let json = serde_json::to_value(ReportStatus::Pending).expect("should serialize");
    assert_eq!(json, serde_json::json!("PENDING"));

    let back: ReportStatus =
      serde_json::from_value(serde_json::json!("COMPROMISED")).expect("should deserialize");
    assert_eq!(back, ReportStatus::Compromised);
  }
}
