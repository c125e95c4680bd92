use std::time::Duration;

/// Platform sleep: browser timers on the client, tokio on the server and in tests.
pub(crate) async fn sleep(duration: Duration) {
    #[cfg(feature = "hydrate")]
    gloo_timers::future::sleep(duration).await;

    #[cfg(all(feature = "ssr", not(feature = "hydrate")))]
    tokio::time::sleep(duration).await;

    #[cfg(not(any(feature = "ssr", feature = "hydrate")))]
    let _ = duration;
}
