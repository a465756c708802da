/// Result of a submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input failed the hiragana gate. Quiz state is untouched; the caller
    /// shows its rejection flash and owns the timed reset.
    Invalid,
    Correct,
    Incorrect,
}

/// Feedback carried between a submission and the following advance/retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Incorrect,
}

/// Converted field value plus the cursor offset to re-apply.
///
/// The front end writes both back into its input widget on the next paint
/// opportunity; if the widget is gone by then, the update is simply
/// dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputUpdate {
    pub text: String,
    pub cursor: usize,
}

/// Score snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub correct: usize,
    pub total: usize,
}

impl Progress {
    pub fn percent(self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 / self.total as f64 * 100.0
        }
    }
}
