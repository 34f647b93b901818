use std::sync::Arc;

use passage_archive_core::{
    Category, Clock, FormInput, Grade, MOCK_EXAM_MONTHS, MONTH_SUFFIX, Record, SystemClock,
    classify_and_build, mock_exam_item_numbers, textbook_names, units_for_textbook,
};
use passage_archive_storage::RecordStore;
use serde::Serialize;

use crate::ServiceError;

/// Result of a successful save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitOutcome {
    pub record: Record,
    /// Category to keep selected for the next entry (continuous registration).
    pub retained_category: Option<Category>,
}

/// Picker vocabularies of the mock exam form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MockExamOptions {
    pub grades: Vec<String>,
    pub months: Vec<String>,
    pub item_numbers: Vec<String>,
}

impl MockExamOptions {
    fn new() -> Self {
        Self {
            grades: Grade::ALL.iter().map(|g| g.label().to_owned()).collect(),
            months: MOCK_EXAM_MONTHS.iter().map(|m| format!("{m}{MONTH_SUFFIX}")).collect(),
            item_numbers: mock_exam_item_numbers(),
        }
    }
}

pub struct RegistrationService {
    store: Arc<dyn RecordStore>,
    clock: Arc<dyn Clock>,
}

impl RegistrationService {
    #[must_use]
    pub fn new(store: Arc<dyn RecordStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Service stamping records with local wall-clock time.
    #[must_use]
    pub fn with_system_clock(store: Arc<dyn RecordStore>) -> Self {
        Self::new(store, Arc::new(SystemClock))
    }

    /// Stored records for classification and option pickers.
    ///
    /// A failing store reads as an empty sheet so the form stays usable.
    pub async fn load_existing_records(&self) -> Vec<Record> {
        match self.store.load_records().await {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load existing records, continuing with none");
                Vec::new()
            },
        }
    }

    /// The latest `limit` records, oldest first, optionally of one category.
    pub async fn list_records(
        &self,
        category: Option<Category>,
        limit: usize,
    ) -> Result<Vec<Record>, ServiceError> {
        let mut records = self.store.load_records().await.map_err(ServiceError::Read)?;
        if let Some(category) = category {
            records.retain(|r| r.category == category);
        }
        let skip = records.len().saturating_sub(limit);
        records.drain(..skip);
        Ok(records)
    }

    pub async fn textbook_options(&self) -> Vec<String> {
        textbook_names(&self.load_existing_records().await)
    }

    pub async fn unit_options(&self, textbook: &str) -> Vec<String> {
        units_for_textbook(&self.load_existing_records().await, textbook)
    }

    #[must_use]
    pub fn mock_exam_options(&self) -> MockExamOptions {
        MockExamOptions::new()
    }

    /// Classify one form submission and append it.
    ///
    /// Validation failures write nothing. A failed append is returned as
    /// [`ServiceError::Write`] with the store's message intact.
    pub async fn submit(&self, form: &FormInput) -> Result<SubmitOutcome, ServiceError> {
        let existing = self.load_existing_records().await;
        let submission = form.to_submission();
        let record = classify_and_build(&submission, &existing, self.clock.as_ref()).map_err(|e| {
            tracing::debug!(category = ?submission.category(), error = %e, "Submission rejected");
            ServiceError::from(e)
        })?;

        if let Err(e) = self.store.append_record(&record).await {
            tracing::error!(error = %e, title = %record.display_title, "Failed to append record");
            return Err(ServiceError::Write(e));
        }

        tracing::info!(
            category = record.category.as_str(),
            title = %record.display_title,
            item_number = %record.item_number,
            "Passage registered"
        );
        Ok(SubmitOutcome { record, retained_category: form.retained_category() })
    }

    /// Connection test against the store; returns its row count.
    pub async fn check(&self) -> Result<usize, ServiceError> {
        self.store.check().await.map_err(ServiceError::Read)
    }
}
