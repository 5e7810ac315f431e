use crate::e2e::helpers;

use aac_audio_gen::error::AppError;
use helpers::fake_tts::FakeTts;
use helpers::fixtures::{en_fr_voices, en_only_voices, two_by_two_vocabulary};
use helpers::TestContext;
use pretty_assertions::assert_eq;
use std::process::ExitCode;

#[tokio::test]
async fn it_should_exit_successfully_when_every_unit_succeeds() {
    let ctx = TestContext::new();

    let status = ctx
        .controller()
        .generate(&two_by_two_vocabulary(), &en_fr_voices())
        .await
        .expect("run should complete");

    assert_eq!(status, ExitCode::SUCCESS);
    assert_eq!(ctx.files_on_disk().len(), 4);
}

#[tokio::test]
async fn it_should_exit_with_failure_when_a_unit_fails() {
    let ctx = TestContext::with(FakeTts::new().failing_on("non"), None);

    let status = ctx
        .controller()
        .generate(&two_by_two_vocabulary(), &en_fr_voices())
        .await
        .expect("a failed unit is not a fatal error");

    assert_eq!(status, ExitCode::FAILURE);
    assert_eq!(ctx.files_on_disk().len(), 3);
    assert!(!ctx.audio_path("fr", "no").exists());
}

#[tokio::test]
async fn it_should_exit_with_failure_when_a_language_directory_is_blocked() {
    let ctx = TestContext::new();
    // A file where the language directory should be: the unit's write and the
    // scan of that directory both fail
    std::fs::write(ctx.root().join("fr"), b"not a directory").expect("Failed to plant file");

    let status = ctx
        .controller()
        .generate(&two_by_two_vocabulary(), &en_fr_voices())
        .await
        .expect("run should complete");

    assert_eq!(status, ExitCode::FAILURE);
}

#[tokio::test]
async fn it_should_return_a_configuration_error_with_exit_code_two() {
    let ctx = TestContext::new();

    let err = ctx
        .controller()
        .generate(&two_by_two_vocabulary(), &en_only_voices())
        .await
        .expect_err("missing voice is fatal");

    assert!(matches!(err, AppError::Configuration(_)));
    assert_eq!(err.exit_code(), ExitCode::from(2));
    assert_eq!(ctx.tts.call_count(), 0);
}
