use super::{fake::FakeDisplayChannel, TestCounter};
use crate::server::{error::AppError, service::counter::CounterService};

/// Walks the counter from a fresh store through a day of ticks.
///
/// Expected: the first message shows zero days; after 90061 seconds the same message
/// shows one day and `01:01:01`
#[tokio::test]
async fn fresh_store_counts_one_day_one_hour_one_minute_one_second() -> Result<(), AppError> {
    let counter = TestCounter::new().await?;
    let display = FakeDisplayChannel::new();
    let service = CounterService::new(&counter.app, &display);

    service.ensure().await?;

    assert_eq!(display.sends(), 1);
    let message_id = display.message_ids()[0];
    assert_eq!(
        display.content(message_id).unwrap(),
        "**Days without incidents:** **0**\n`00:00:00` since the last reset"
    );

    counter.clock.advance(90_061);
    service.tick().await?;

    assert_eq!(display.sends(), 1);
    assert_eq!(display.message_ids(), vec![message_id]);
    assert_eq!(
        display.content(message_id).unwrap(),
        "**Days without incidents:** **1**\n`01:01:01` since the last reset"
    );

    Ok(())
}
