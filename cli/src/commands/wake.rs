use std::time::{Duration, Instant};

use anyhow::Context;
use lanwake_common::error::WakeError;
use lanwake_common::network::mac::PhysicalAddress;
use lanwake_core::cancel::Cancellation;
use lanwake_core::client::WolClient;
use tracing::{debug, warn};

use crate::commands::WakeArgs;
use crate::resolve;

pub async fn wake(args: WakeArgs) -> anyhow::Result<()> {
    let address: PhysicalAddress = resolve::resolve_target(&args.address)?;

    let client = WolClient::new(&args.discovery.to_options());
    if client.bindings().is_empty() {
        warn!("No usable network interface found for the requested address family");
    }
    for binding in client.bindings() {
        debug!(
            "Interface {} sends to {:?}",
            binding.local(),
            binding.endpoints().iter().map(ToString::to_string).collect::<Vec<_>>()
        );
    }

    let cancellation = Cancellation::new();
    let on_interrupt = cancellation.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_interrupt.cancel();
        }
    });

    let start_time: Instant = Instant::now();
    let client = &client;
    let in_flight = &cancellation;

    paced(args.count, Duration::from_millis(args.interval), &cancellation, |index| async move {
        println!("#{:<3} {:>6}ms     {}", index + 1, start_time.elapsed().as_millis(), address);

        match client.wake(&address, in_flight).await {
            Ok(report) => debug!("Magic packet sent to {} destination(s)", report.sent),
            Err(WakeError::Transport { sent, attempted, failures }) if sent > 0 => {
                warn!("Magic packet reached {sent} of {attempted} destinations");
                for failure in &failures {
                    debug!("{failure}");
                }
            }
            Err(e) => return Err(anyhow::Error::from(e)),
        }
        Ok(())
    })
    .await
    .with_context(|| format!("waking {address}"))
}

/// Runs `round` `count` times, one `interval` apart, starting immediately.
///
/// The wait between rounds ends early on cancellation, which is reported as
/// [`WakeError::Cancelled`].
async fn paced<F, Fut>(count: u32, interval: Duration, cancellation: &Cancellation, mut round: F) -> anyhow::Result<()>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = anyhow::Result<()>>,
{
    let mut ticker = tokio::time::interval(interval);

    for index in 0..count {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = cancellation.cancelled() => return Err(WakeError::Cancelled.into()),
        }

        round(index).await?;
    }

    Ok(())
}
