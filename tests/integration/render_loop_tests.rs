//! Async render loop under paused tokio time.

use std::sync::Arc;
use std::time::Duration;

use ledbridge::app::events::AppEvent;
use ledbridge::app::service::IndicatorService;
use ledbridge::app::status::Status;
use ledbridge::app::store::StatusStore;
use ledbridge::error::Error;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

use crate::mock_hw::{CollectingSink, RecordingIndicator};

const PERIOD: Duration = Duration::from_millis(750);
const OFF: (bool, bool, bool) = (false, false, false);

struct Harness {
    store: Arc<StatusStore>,
    hw: RecordingIndicator,
    sink: CollectingSink,
    cancel: CancellationToken,
    task: JoinHandle<ledbridge::error::Result<()>>,
}

fn start(hw: RecordingIndicator) -> Harness {
    let store = Arc::new(StatusStore::default());
    let sink = CollectingSink::new();
    let cancel = CancellationToken::new();
    let svc = IndicatorService::new(hw.clone(), sink.clone());
    let task = tokio::spawn(svc.run(Arc::clone(&store), PERIOD, cancel.clone()));
    Harness {
        store,
        hw,
        sink,
        cancel,
        task,
    }
}

#[tokio::test(start_paused = true)]
async fn renders_default_within_one_period() {
    let h = start(RecordingIndicator::new());
    sleep(Duration::from_millis(10)).await;
    assert_eq!(h.hw.tuples(), vec![(true, false, false)]);
    assert_eq!(h.sink.events().first(), Some(&AppEvent::Started(Status::Available)));

    h.cancel.cancel();
    h.task.await.unwrap().unwrap();
}

#[tokio::test(start_paused = true)]
async fn blinks_once_per_period() {
    let h = start(RecordingIndicator::new());
    sleep(Duration::from_millis(10)).await;
    h.store.set(Status::ChargingBlink);
    sleep(PERIOD * 2).await;
    assert_eq!(
        h.hw.tuples(),
        vec![(true, false, false), (false, true, false), OFF]
    );

    h.cancel.cancel();
    h.task.await.unwrap().unwrap();
}

#[tokio::test(start_paused = true)]
async fn cancellation_leaves_outputs_dark() {
    let h = start(RecordingIndicator::new());
    h.store.set(Status::FaultyOverride);
    sleep(Duration::from_millis(10)).await;
    assert_eq!(h.hw.last(), Some((false, false, true)));

    h.cancel.cancel();
    h.task.await.unwrap().unwrap();
    assert_eq!(h.hw.last(), Some(OFF));
    assert_eq!(h.sink.events().last(), Some(&AppEvent::SafeState));
}

#[tokio::test(start_paused = true)]
async fn write_failure_stops_loop_and_cancels() {
    let h = start(RecordingIndicator::failing_at(1));
    sleep(PERIOD + Duration::from_millis(10)).await;

    let result = h.task.await.unwrap();
    assert!(matches!(result, Err(Error::Gpio(_))));
    assert!(h.cancel.is_cancelled());
    assert_eq!(h.hw.last(), Some(OFF));
    assert!(
        h.sink
            .events()
            .iter()
            .any(|e| matches!(e, AppEvent::HardwareFault(Error::Gpio(_))))
    );
}
