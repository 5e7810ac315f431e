use crate::e2e::helpers;

use aac_audio_gen::domain::generation::GenerationServiceApi;
use helpers::fake_tts::FakeTts;
use helpers::fixtures::{en_fr_voices, two_by_two_vocabulary};
use helpers::TestContext;
use std::time::Duration;

#[tokio::test]
async fn it_should_dispatch_every_unit_at_once_by_default() {
    let ctx = TestContext::with(FakeTts::new().with_delay(Duration::from_millis(50)), None);

    let report = ctx
        .service
        .run(&two_by_two_vocabulary(), &en_fr_voices())
        .await
        .unwrap();

    assert_eq!(report.file_count, 4);
    assert_eq!(ctx.tts.peak_in_flight(), 4);
}

#[tokio::test]
async fn it_should_respect_the_in_flight_limit() {
    let ctx = TestContext::with(FakeTts::new().with_delay(Duration::from_millis(20)), Some(2));

    let report = ctx
        .service
        .run(&two_by_two_vocabulary(), &en_fr_voices())
        .await
        .unwrap();

    assert_eq!(report.file_count, 4);
    assert_eq!(ctx.tts.call_count(), 4);
    assert!(ctx.tts.peak_in_flight() <= 2);
}

#[tokio::test]
async fn it_should_run_one_at_a_time_with_a_limit_of_one() {
    let ctx = TestContext::with(FakeTts::new().with_delay(Duration::from_millis(5)), Some(1));

    ctx.service
        .run(&two_by_two_vocabulary(), &en_fr_voices())
        .await
        .unwrap();

    assert_eq!(ctx.tts.peak_in_flight(), 1);
    assert_eq!(ctx.tts.call_count(), 4);
}
