use mental_age_test::error::{StorageError, StorageResult};
use mental_age_test::models::{load_catalog, load_catalog_for_locale, load_scale};
use mental_age_test::{
    compute_result, logger, Answer, Config, Locale, MemorySessionStore, Question, QuestionCatalog,
    QuizController, QuizOption, SavedResult, ScoringScale, Session, SessionStore,
};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

const KEY: &str = "mentalage-result";

/// 每道题三个选项，分数依次为 1、2、3
fn catalog(n: usize) -> QuestionCatalog {
    QuestionCatalog::new(
        (1..=n)
            .map(|i| Question {
                id: format!("q{}", i),
                text: format!("问题 {}", i),
                options: (1..=3)
                    .map(|s| QuizOption {
                        id: format!("q{}-o{}", i, s),
                        text: format!("选项 {}", s),
                        score: s,
                    })
                    .collect(),
            })
            .collect(),
    )
}

fn controller(
    n: usize,
    store: Arc<MemorySessionStore>,
) -> QuizController<Arc<MemorySessionStore>> {
    QuizController::new(catalog(n), ScoringScale::default(), store, KEY)
}

fn data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// 写入总是失败、并统计调用次数的存储
#[derive(Default)]
struct FailingStore {
    writes: AtomicUsize,
    removes: AtomicUsize,
}

impl SessionStore for FailingStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Err(StorageError::ReadFailed {
            key: key.to_string(),
            source: std::io::Error::new(std::io::ErrorKind::Other, "storage disabled"),
        })
    }

    fn set(&self, key: &str, _value: &str) -> StorageResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        Err(StorageError::WriteFailed {
            key: key.to_string(),
            source: std::io::Error::new(std::io::ErrorKind::Other, "quota exceeded"),
        })
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.removes.fetch_add(1, Ordering::SeqCst);
        Err(StorageError::DeleteFailed {
            key: key.to_string(),
            source: std::io::Error::new(std::io::ErrorKind::Other, "storage disabled"),
        })
    }
}

#[test]
fn test_three_question_scenario() {
    logger::init(false);

    let store = Arc::new(MemorySessionStore::new());
    let mut c = controller(3, store.clone());
    c.start();
    c.set_real_age(20);

    assert_eq!(c.progress(), 0);
    c.submit_answer("q1-o1", 1);
    assert_eq!(c.progress(), 33);
    c.submit_answer("q2-o2", 2);
    assert_eq!(c.progress(), 67);
    c.submit_answer("q3-o3", 3);

    let session = c.session();
    assert_eq!(session.answers().len(), 3);
    assert!(session.is_completed());
    let result = session.result().expect("提供了年龄，应当生成结果");
    assert_eq!(result.real_age, 20);
    assert_eq!(result.total_score, 6);
    assert_eq!(
        result,
        &compute_result(session.answers(), 20, &ScoringScale::default())
    );
    assert!(store.get(KEY).unwrap().is_some());
}

#[test]
fn test_completed_iff_all_questions_answered() {
    let mut c = controller(5, Arc::new(MemorySessionStore::new()));
    c.start();
    c.set_real_age(33);

    for i in 1..=5 {
        assert!(!c.session().is_completed());
        assert_eq!(c.session().answers().len(), c.session().current_index());
        c.submit_answer(&format!("q{}-o2", i), 2);
        assert_eq!(
            c.session().is_completed(),
            c.session().answers().len() == c.total_questions()
        );
    }
    assert!(c.current_question().is_none());
}

#[test]
fn test_no_real_age_leaves_result_unset() {
    let store = Arc::new(MemorySessionStore::new());
    let mut c = controller(2, store.clone());
    c.start();
    c.submit_answer("q1-o1", 1);
    c.submit_answer("q2-o1", 1);

    assert!(c.session().is_completed());
    assert!(c.session().result().is_none());
    assert!(store.is_empty(), "没有年龄时不应写入快照");
}

#[test]
fn test_real_age_is_stored_without_validation() {
    let mut c = controller(1, Arc::new(MemorySessionStore::new()));
    c.set_real_age(-5);
    c.submit_answer("q1-o3", 3);
    assert_eq!(c.session().real_age(), Some(-5));
    assert_eq!(c.session().result().map(|r| r.real_age), Some(-5));
}

#[test]
fn test_reset_then_start_matches_initial_state() {
    let mut c = controller(3, Arc::new(MemorySessionStore::new()));
    c.start();
    c.set_real_age(50);
    c.submit_answer("q1-o3", 3);
    c.submit_answer("q2-o3", 3);
    c.submit_answer("q3-o3", 3);

    c.reset();
    c.start();

    let fresh = {
        let mut f = controller(3, Arc::new(MemorySessionStore::new()));
        f.start();
        f.session().clone()
    };
    assert_eq!(c.session(), &fresh);
    assert_eq!(c.session().current_index(), 0);
    assert!(c.session().answers().is_empty());
    assert!(!c.session().is_completed());
    assert!(c.session().result().is_none());
}

#[test]
fn test_rehydration_round_trip() {
    let store = Arc::new(MemorySessionStore::new());
    let mut first = controller(3, store.clone());
    first.start();
    first.set_real_age(28);
    first.submit_answer("q1-o2", 2);
    first.submit_answer("q2-o3", 3);
    first.submit_answer("q3-o1", 1);
    let expected = first.session().result().cloned().unwrap();

    let second = controller(3, store.clone());
    let session = second.session();
    assert!(session.is_completed());
    assert!(session.is_started());
    assert_eq!(session.real_age(), Some(28));
    assert_eq!(session.result(), Some(&expected));
    assert!(second.current_question().is_none());
}

#[test]
fn test_rehydration_keeps_exact_average() {
    let store = Arc::new(MemorySessionStore::new());
    let mut first = controller(11, store.clone());
    first.start();
    first.set_real_age(35);
    for i in 1..=10 {
        first.submit_answer(&format!("q{}-o1", i), 1);
    }
    first.submit_answer("q11-o3", 3);

    let expected = first.session().result().cloned().unwrap();
    assert_eq!(expected.total_score, 13);
    assert_eq!(expected.average_score, 13.0 / 11.0);

    let second = controller(11, store.clone());
    let restored = second.session().result().expect("应当恢复上次的结果");
    assert_eq!(restored, &expected);
    assert_eq!(
        restored.average_score.to_bits(),
        expected.average_score.to_bits()
    );
}

#[test]
fn test_snapshot_uses_camel_case_shape() {
    let store = Arc::new(MemorySessionStore::new());
    let mut c = controller(1, store.clone());
    c.set_real_age(40);
    c.submit_answer("q1-o2", 2);

    let raw = store.get(KEY).unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["realAge"], 40);
    assert!(json["result"]["mentalAge"].is_u64());

    let saved: SavedResult = serde_json::from_str(&raw).unwrap();
    assert_eq!(Some(&saved.result), c.session().result());
}

#[test]
fn test_corrupted_snapshot_starts_fresh() {
    let store = Arc::new(MemorySessionStore::new());
    store.set(KEY, "{not json").unwrap();

    let c = controller(3, store.clone());
    assert_eq!(c.session(), &Session::default());
    assert!(!c.session().is_started());
    assert!(store.get(KEY).unwrap().is_none());
}

#[test]
fn test_storage_failures_never_surface() {
    let store = Arc::new(FailingStore::default());
    let mut c = QuizController::new(catalog(2), ScoringScale::default(), store.clone(), KEY);
    assert_eq!(c.session(), &Session::default());

    c.start();
    c.set_real_age(25);
    c.submit_answer("q1-o1", 1);
    c.submit_answer("q2-o2", 2);
    assert!(c.session().result().is_some(), "内存中的结果不受存储失败影响");
    assert_eq!(store.writes.load(Ordering::SeqCst), 1);

    c.reset();
    assert_eq!(store.removes.load(Ordering::SeqCst), 1);
    assert_eq!(c.session(), &Session::default());
}

#[test]
fn test_compute_result_is_deterministic() {
    let answers: Vec<Answer> = (1..=8)
        .map(|i| Answer::new(format!("q{}", i), "a", (i % 5) + 1))
        .collect();
    let scale = ScoringScale::default();
    let a = compute_result(&answers, 31, &scale);
    let b = compute_result(&answers, 31, &scale);
    assert_eq!(a, b);
    assert_eq!(a.average_score.to_bits(), b.average_score.to_bits());
}

#[test]
fn test_bundled_catalogs_are_valid() {
    for file in ["questions.en.toml", "questions.ko.toml"] {
        let catalog = tokio_test::block_on(load_catalog(&data_dir().join(file))).unwrap();
        assert!(!catalog.is_empty(), "{} 不应为空", file);
    }

    let scale = tokio_test::block_on(load_scale(&data_dir().join("scale.toml"))).unwrap();
    assert_eq!(scale, ScoringScale::default());
}

#[tokio::test]
async fn test_missing_locale_falls_back_to_english() {
    let config = Config {
        data_folder: data_dir().to_string_lossy().to_string(),
        ..Config::default()
    };

    let (locale, catalog) = load_catalog_for_locale(&config, Locale::Tr).await.unwrap();
    assert_eq!(locale, Locale::En);
    assert_eq!(catalog.len(), 8);

    let (locale, catalog) = load_catalog_for_locale(&config, Locale::Ko).await.unwrap();
    assert_eq!(locale, Locale::Ko);
    assert_eq!(catalog.texts.categories.sage, "지혜로운 현자");
}
