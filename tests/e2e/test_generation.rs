use crate::e2e::helpers;

use aac_audio_gen::domain::generation::{GenerationServiceApi, UnitError};
use helpers::fake_tts::{mock_audio_bytes, FakeTts};
use helpers::fixtures::{en_fr_voices, two_by_two_vocabulary, yes_vocabulary};
use helpers::TestContext;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn it_should_write_one_file_per_language_for_a_single_item() {
    let ctx = TestContext::new();

    let report = ctx
        .service
        .run(&yes_vocabulary(), &en_fr_voices())
        .await
        .unwrap();

    let en = std::fs::read(ctx.audio_path("en", "yes")).unwrap();
    let fr = std::fs::read(ctx.audio_path("fr", "yes")).unwrap();
    assert!(!en.is_empty());
    assert!(!fr.is_empty());
    assert_eq!(en, mock_audio_bytes("yes"));
    assert_eq!(fr, mock_audio_bytes("oui"));
    assert!(report.is_complete());
}

#[tokio::test]
async fn it_should_use_the_voice_of_each_language() {
    let ctx = TestContext::new();

    ctx.service
        .run(&yes_vocabulary(), &en_fr_voices())
        .await
        .unwrap();

    let mut calls = ctx.tts.calls();
    calls.sort();
    assert_eq!(
        calls,
        vec![
            ("oui".to_string(), "Lea".to_string()),
            ("yes".to_string(), "Joanna".to_string()),
        ]
    );
}

#[tokio::test]
async fn it_should_produce_exactly_the_expected_paths() {
    let ctx = TestContext::new();

    let report = ctx
        .service
        .run(&two_by_two_vocabulary(), &en_fr_voices())
        .await
        .unwrap();

    let names: Vec<String> = ctx.files_on_disk().into_iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["en/no.mp3", "en/yes.mp3", "fr/no.mp3", "fr/yes.mp3"]);
    assert_eq!(report.generated.len(), 4);
    assert!(report.failures.is_empty());
}

#[tokio::test]
async fn it_should_report_count_and_size_from_disk() {
    let ctx = TestContext::new();

    let report = ctx
        .service
        .run(&two_by_two_vocabulary(), &en_fr_voices())
        .await
        .unwrap();

    let on_disk = ctx.files_on_disk();
    let total: u64 = on_disk.iter().map(|(_, size)| size).sum();

    assert_eq!(report.file_count, 4);
    assert_eq!(report.file_count, on_disk.len());
    assert_eq!(report.total_bytes, total);
}

#[tokio::test]
async fn it_should_overwrite_instead_of_duplicating_on_rerun() {
    let ctx = TestContext::new();
    let vocabulary = two_by_two_vocabulary();
    let voices = en_fr_voices();

    let first = ctx.service.run(&vocabulary, &voices).await.unwrap();
    let files_after_first = ctx.files_on_disk();

    let second = ctx.service.run(&vocabulary, &voices).await.unwrap();
    let files_after_second = ctx.files_on_disk();

    assert_eq!(files_after_first, files_after_second);
    assert_eq!(first.file_count, second.file_count);
    assert_eq!(first.total_bytes, second.total_bytes);
    assert_eq!(ctx.tts.call_count(), 8);
}

#[tokio::test]
async fn it_should_keep_other_units_going_when_one_fails() {
    let ctx = TestContext::with(FakeTts::new().failing_on("non"), None);

    let report = ctx
        .service
        .run(&two_by_two_vocabulary(), &en_fr_voices())
        .await
        .unwrap();

    assert!(!ctx.audio_path("fr", "no").exists());
    assert!(ctx.audio_path("en", "no").exists());
    assert!(ctx.audio_path("en", "yes").exists());
    assert!(ctx.audio_path("fr", "yes").exists());

    assert_eq!(report.generated.len(), 3);
    assert_eq!(report.failures.len(), 1);
    match &report.failures[0] {
        UnitError::Synthesis { item_id, language, .. } => {
            assert_eq!(item_id, "no");
            assert_eq!(language.as_str(), "fr");
        }
        other => panic!("expected synthesis failure, got {other:?}"),
    }

    assert_eq!(report.file_count, 3);
    assert!(!report.is_complete());
}

#[tokio::test]
async fn it_should_count_files_left_by_a_previous_run() {
    let ctx = TestContext::new();
    let vocabulary = two_by_two_vocabulary();
    ctx.service.run(&vocabulary, &en_fr_voices()).await.unwrap();

    // Second run where one unit fails: the earlier file is still on disk
    let failing = TestContext::with(FakeTts::new().failing_on("non"), None);
    for (name, _) in ctx.files_on_disk() {
        let target = failing.root().join(&name);
        std::fs::create_dir_all(target.parent().unwrap()).unwrap();
        std::fs::copy(ctx.root().join(&name), target).unwrap();
    }

    let report = failing.service.run(&vocabulary, &en_fr_voices()).await.unwrap();

    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.generated.len(), 3);
    assert_eq!(report.file_count, 4);
}

#[tokio::test]
async fn it_should_ignore_foreign_files_in_the_report() {
    let ctx = TestContext::new();
    std::fs::create_dir_all(ctx.root().join("en")).unwrap();
    std::fs::write(ctx.root().join("en").join("README.txt"), b"not audio").unwrap();

    let report = ctx
        .service
        .run(&yes_vocabulary(), &en_fr_voices())
        .await
        .unwrap();

    assert_eq!(report.file_count, 2);
    let expected = (mock_audio_bytes("yes").len() + mock_audio_bytes("oui").len()) as u64;
    assert_eq!(report.total_bytes, expected);
}
