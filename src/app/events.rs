use std::{future::Future, time::Duration};

use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use tokio::{sync::mpsc, time::interval};

use crate::domain::{
    errors::{FetchError, GeolocationError},
    weather::{Coordinates, CurrentWeather, RawForecastSample},
};

pub type SearchOutcome = Result<(CurrentWeather, Vec<RawForecastSample>), FetchError>;

#[derive(Debug)]
pub enum AppEvent {
    Bootstrap,
    TickFrame,
    Input(Event),
    PositionResolved(Result<Coordinates, GeolocationError>),
    LocatedWeather(Result<CurrentWeather, FetchError>),
    SearchCompleted(SearchOutcome),
    Quit,
}

pub fn spawn_input_task() -> impl futures::Stream<Item = Event> {
    EventStream::new().filter_map(|event| async move { event.ok() })
}

/// Redraw ticker; also keeps the clock label current.
pub fn start_frame_task(tx: mpsc::Sender<AppEvent>, period: Duration) {
    let period = period.max(Duration::from_millis(16));
    tokio::spawn(async move {
        let mut ticker = interval(period);
        loop {
            ticker.tick().await;
            if tx.send(AppEvent::TickFrame).await.is_err() {
                break;
            }
        }
    });
}

#[must_use]
pub fn frame_period(fps: u8, animate: bool) -> Duration {
    if animate {
        Duration::from_millis(1000_u64 / u64::from(fps.max(15)))
    } else {
        Duration::from_secs(1)
    }
}

/// Runs `work` on its own task and always reports back exactly once.
///
/// A panic inside `work` settles as a `RequestFailed` so the loading state is released.
pub fn spawn_fetch_cycle<T, F>(
    tx: &mpsc::Sender<AppEvent>,
    work: F,
    settle: fn(Result<T, FetchError>) -> AppEvent,
) where
    T: Send + 'static,
    F: Future<Output = Result<T, FetchError>> + Send + 'static,
{
    let tx = tx.clone();
    tokio::spawn(async move {
        let outcome = match tokio::spawn(work).await {
            Ok(result) => result,
            Err(err) => {
                tracing::error!(error = %err, "fetch cycle aborted");
                Err(FetchError::RequestFailed {
                    detail: err.to_string(),
                })
            }
        };
        let _ = tx.send(settle(outcome)).await;
    });
}

/// Same guarantee as [`spawn_fetch_cycle`] for the one-shot position request.
pub fn spawn_position_request<F>(tx: &mpsc::Sender<AppEvent>, work: F)
where
    F: Future<Output = Result<Coordinates, GeolocationError>> + Send + 'static,
{
    let tx = tx.clone();
    tokio::spawn(async move {
        let outcome = tokio::spawn(work)
            .await
            .unwrap_or(Err(GeolocationError::Unsupported));
        let _ = tx.send(AppEvent::PositionResolved(outcome)).await;
    });
}
