//! Notifier dispatch demo
//!
//! Run with: RUST_LOG=observe_rs=trace cargo run --example serial_dispatch
//!
//! Wires one thread-safe notifier to two contexts:
//! - every notification is submitted to a serial "events" queue;
//! - the audit handler asks to run on the runtime's blocking pool instead.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use observe_rs::{ChannelConfig, ExecutionContext, Notifier, SerialQueue, TokioExecutor};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("observe_rs=debug")),
        )
        .init();

    let events: ExecutionContext = Arc::new(SerialQueue::current("events")?);
    let pool: ExecutionContext = Arc::new(TokioExecutor::current()?);

    let order_placed = Notifier::<(u64, String, f64)>::with_config(
        ChannelConfig::default().thread_safe(true).dispatch_on(events),
    );

    let revenue_cents = Arc::new(AtomicU64::new(0));
    let r = Arc::clone(&revenue_cents);
    order_placed.add(move |order: u64, customer: String, total: f64| {
        r.fetch_add((total * 100.0).round() as u64, Ordering::Relaxed);
        println!("[events] order={} customer={} total={:.2}", order, customer, total);
    })?;

    let audit = order_placed.add_on(
        |order: u64, customer: String, _total: f64| {
            println!("[pool] audit order={} customer={}", order, customer);
        },
        pool,
    )?;

    order_placed.notify((1, "ada".into(), 12.5))?;
    order_placed.notify((2, "grace".into(), 40.0))?;

    // Queued dispatches snapshot when they run, so this removal may reach
    // them too.
    order_placed.remove(audit)?;
    order_placed.notify((3, "linus".into(), 7.25))?;

    // Notifications are fire-and-forget; give the contexts a moment to drain.
    tokio::time::sleep(Duration::from_millis(100)).await;

    println!(
        "Revenue: {:.2}",
        revenue_cents.load(Ordering::Relaxed) as f64 / 100.0
    );

    Ok(())
}
