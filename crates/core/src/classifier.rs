// crates/core/src/classifier.rs
//! Sequential batch classification of condition text into ICD-10 suggestions.

use crate::dataset::Dataset;
use crate::error::ClassifyError;
use crate::llm::{ClassifierConfig, CompletionProvider, CompletionRequest};
use crate::prompt::build_classification_prompt;

/// Name of the required input column holding condition text.
pub const CONDITION_COLUMN: &str = "Condition";

/// Name of the appended suggestion column.
pub const RESULT_COLUMN: &str = "Vorschlag_ICD10";

/// Applies the classification prompt to every row of a dataset.
///
/// Rows are processed strictly in order, one completion call at a time,
/// each row blocking on its remote call before the next begins.
pub struct BatchClassifier {
    config: ClassifierConfig,
    provider: Box<dyn CompletionProvider>,
}

impl BatchClassifier {
    /// Create a classifier from an explicit configuration and provider.
    pub fn new(config: ClassifierConfig, provider: Box<dyn CompletionProvider>) -> Self {
        Self { config, provider }
    }

    /// Classify every row of `input`, returning it with the suggestion
    /// column appended.
    ///
    /// Fails before any remote call if the `Condition` column is absent.
    /// The first failed completion aborts the whole batch; no partial
    /// dataset is returned. `on_row_done` is invoked after each row with
    /// `(rows_done, total_rows)`.
    pub async fn classify_dataset(
        &self,
        input: &Dataset,
        mut on_row_done: impl FnMut(usize, usize),
    ) -> Result<Dataset, ClassifyError> {
        let column = input
            .column_index(CONDITION_COLUMN)
            .ok_or_else(|| ClassifyError::MissingColumn {
                name: CONDITION_COLUMN.to_string(),
            })?;

        let total = input.row_count();
        tracing::info!(
            rows = total,
            model = %self.provider.model(),
            provider = %self.provider.name(),
            "classification batch: starting"
        );

        let mut suggestions = Vec::with_capacity(total);
        for (row, cells) in input.rows.iter().enumerate() {
            let condition = cells.get(column).map(String::as_str).unwrap_or("");
            let prompt = build_classification_prompt(condition);

            let response = self
                .provider
                .complete(CompletionRequest {
                    prompt,
                    max_tokens: self.config.max_tokens,
                })
                .await
                .map_err(|source| ClassifyError::Completion { row, source })?;

            suggestions.push(response.content.trim().to_string());
            on_row_done(row + 1, total);
        }

        tracing::info!(rows = total, "classification batch: complete");
        Ok(input.with_column(RESULT_COLUMN, suggestions))
    }
}
