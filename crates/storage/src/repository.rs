use async_trait::async_trait;
use quiz_core::model::{BankError, Question, QuestionBank, QuestionError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use crate::json::JsonFileRepository;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("question bank not found at {0}")]
    NotFound(String),

    #[error("question bank already exists at {0}")]
    Conflict(String),

    #[error("io error: {0}")]
    Io(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error(transparent)]
    InvalidBank(#[from] BankError),
}

/// On-disk shape of a question.
///
/// Mirrors the domain `Question` so adapters can read and write the bank without
/// leaking file-format concerns into the domain layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: i64,
}

impl QuestionRecord {
    #[must_use]
    pub fn new(
        question: impl Into<String>,
        options: [&str; 4],
        correct_answer: i64,
    ) -> Self {
        Self {
            question: question.into(),
            options: options.iter().map(|o| (*o).to_owned()).collect(),
            correct_answer,
        }
    }

    #[must_use]
    pub fn from_question(question: &Question) -> Self {
        Self {
            question: question.text().to_owned(),
            options: question.options().to_vec(),
            correct_answer: i64::from(question.correct_answer().value()),
        }
    }

    /// Convert the record back into a domain `Question`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the record fails validation.
    pub fn into_question(self) -> Result<Question, QuestionError> {
        Question::new(self.question, self.options, self.correct_answer)
    }
}

/// Build a bank from records, numbering failures from 1 in file order.
///
/// # Errors
///
/// Returns `BankError::InvalidQuestion` for the first invalid record and
/// `BankError::Empty` if there are no records.
pub fn bank_from_records(records: Vec<QuestionRecord>) -> Result<QuestionBank, BankError> {
    let questions = records
        .into_iter()
        .enumerate()
        .map(|(i, record)| {
            record
                .into_question()
                .map_err(|source| BankError::InvalidQuestion {
                    number: i + 1,
                    source,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;
    QuestionBank::new(questions)
}

/// Source of the question bank.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Load and validate the full bank.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the source is missing,
    /// `StorageError::Serialization` for malformed data and
    /// `StorageError::InvalidBank` if any question fails validation.
    async fn load_bank(&self) -> Result<QuestionBank, StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    records: Arc<Mutex<Vec<QuestionRecord>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_records(records: Vec<QuestionRecord>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records)),
        }
    }

    /// Append a record to the end of the bank.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the lock is poisoned.
    pub fn push_record(&self, record: QuestionRecord) -> Result<(), StorageError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|e| StorageError::Io(e.to_string()))?;
        guard.push(record);
        Ok(())
    }
}

#[async_trait]
impl QuestionRepository for InMemoryRepository {
    async fn load_bank(&self) -> Result<QuestionBank, StorageError> {
        let records = self
            .records
            .lock()
            .map_err(|e| StorageError::Io(e.to_string()))?
            .clone();
        Ok(bank_from_records(records)?)
    }
}

/// Question source behind a trait object for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub questions: Arc<dyn QuestionRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory(records: Vec<QuestionRecord>) -> Self {
        let questions: Arc<dyn QuestionRepository> =
            Arc::new(InMemoryRepository::with_records(records));
        Self { questions }
    }

    #[must_use]
    pub fn json_file(path: impl Into<PathBuf>) -> Self {
        let questions: Arc<dyn QuestionRepository> = Arc::new(JsonFileRepository::new(path));
        Self { questions }
    }
}
