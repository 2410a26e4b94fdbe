use std::path::PathBuf;

use quiz_core::model::{BankError, QuestionError};
use storage::json::JsonFileRepository;
use storage::repository::{QuestionRecord, QuestionRepository, Storage, StorageError};
use storage::sample::sample_records;

fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir()
        .join(format!("quiz-storage-{}-{name}", std::process::id()))
        .join("questions.json")
}

async fn cleanup(path: &PathBuf) {
    if let Some(dir) = path.parent() {
        let _ = tokio::fs::remove_dir_all(dir).await;
    }
}

#[tokio::test]
async fn json_roundtrip_preserves_order_and_answers() {
    let path = scratch_path("roundtrip");
    let repo = JsonFileRepository::new(&path);
    let records = sample_records();

    repo.write_records(&records, false).await.expect("write");
    let bank = repo.load_bank().await.expect("load");

    assert_eq!(bank.len(), records.len());
    for (question, record) in bank.iter().zip(&records) {
        assert_eq!(question.text(), record.question);
        assert_eq!(question.options(), record.options.as_slice());
        assert_eq!(i64::from(question.correct_answer().value()), record.correct_answer);
    }

    cleanup(&path).await;
}

#[tokio::test]
async fn refuses_to_overwrite_without_force() {
    let path = scratch_path("conflict");
    let repo = JsonFileRepository::new(&path);
    let records = sample_records();

    repo.write_records(&records, false).await.expect("first write");
    let err = repo.write_records(&records, false).await.unwrap_err();
    assert!(matches!(err, StorageError::Conflict(_)), "got {err:?}");
    repo.write_records(&records[..1], true)
        .await
        .expect("forced write");
    assert_eq!(repo.load_bank().await.expect("load").len(), 1);

    cleanup(&path).await;
}

#[tokio::test]
async fn missing_file_is_not_found() {
    let storage = Storage::json_file(scratch_path("missing"));
    let err = storage.questions.load_bank().await.unwrap_err();
    assert!(matches!(err, StorageError::NotFound(_)), "got {err:?}");
}

#[tokio::test]
async fn malformed_json_is_a_serialization_error() {
    let path = scratch_path("malformed");
    tokio::fs::create_dir_all(path.parent().unwrap()).await.unwrap();
    tokio::fs::write(&path, "[{\"question\": ").await.unwrap();

    let err = JsonFileRepository::new(&path).load_bank().await.unwrap_err();
    assert!(matches!(err, StorageError::Serialization(_)), "got {err:?}");

    cleanup(&path).await;
}

#[tokio::test]
async fn invalid_record_fails_the_whole_bank() {
    let path = scratch_path("invalid");
    let repo = JsonFileRepository::new(&path);
    let records = vec![
        QuestionRecord::new("fine", ["a", "b", "c", "d"], 1),
        QuestionRecord {
            question: "three options".into(),
            options: vec!["a".into(), "b".into(), "c".into()],
            correct_answer: 1,
        },
    ];
    repo.write_records(&records, false).await.expect("write");

    let err = repo.load_bank().await.unwrap_err();
    match err {
        StorageError::InvalidBank(BankError::InvalidQuestion { number, source }) => {
            assert_eq!(number, 2);
            assert_eq!(
                source,
                QuestionError::OptionCount {
                    expected: 4,
                    found: 3
                }
            );
        }
        other => panic!("unexpected error: {other:?}"),
    }

    cleanup(&path).await;
}

#[tokio::test]
async fn empty_array_is_rejected() {
    let path = scratch_path("empty");
    let repo = JsonFileRepository::new(&path);
    repo.write_records(&[], false).await.expect("write");

    let err = repo.load_bank().await.unwrap_err();
    assert!(matches!(err, StorageError::InvalidBank(BankError::Empty)));

    cleanup(&path).await;
}
