//! Formatting helpers shared by the emission path

use chrono::{DateTime, FixedOffset, Local, TimeZone, Utc};
use std::fmt::{Display, Write};
use std::sync::atomic::{AtomicI32, Ordering};

/// strftime pattern for line timestamps: `2025-01-08 10:30:45.123`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Most recent local UTC offset seen by any thread, in seconds
static LAST_LOCAL_OFFSET: AtomicI32 = AtomicI32::new(0);

/// Per-thread state for line stamping
///
/// Building it reads the local clock first, so chrono's own per-thread
/// timezone cache registers its destructor before this key does. Thread-local
/// destructors run in reverse order, so while this key is still alive the
/// chrono cache is too.
struct ThreadContext {
    identity: String,
}

impl ThreadContext {
    fn new() -> Self {
        remember_offset(&Local::now());
        Self {
            identity: uncached_thread_identity(),
        }
    }
}

thread_local! {
    static THREAD_CONTEXT: ThreadContext = ThreadContext::new();
}

fn remember_offset(now: &DateTime<Local>) {
    LAST_LOCAL_OFFSET.store(now.offset().local_minus_utc(), Ordering::Relaxed);
}

fn uncached_thread_identity() -> String {
    format!("{:?}", std::thread::current().id())
}

/// Local wall-clock time with millisecond resolution
///
/// During thread teardown the local clock may be unusable; the time is then
/// stamped from UTC shifted by the last offset seen.
pub fn timestamp_now() -> String {
    match THREAD_CONTEXT.try_with(|_| Local::now()) {
        Ok(now) => {
            remember_offset(&now);
            format_timestamp(&now)
        }
        Err(_) => match FixedOffset::east_opt(LAST_LOCAL_OFFSET.load(Ordering::Relaxed)) {
            Some(offset) => format_timestamp(&Utc::now().with_timezone(&offset)),
            None => format_timestamp(&Utc::now()),
        },
    }
}

pub fn format_timestamp<Tz>(datetime: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    datetime.format(TIMESTAMP_FORMAT).to_string()
}

/// Textual identity of the calling thread, stable for the thread's lifetime
pub fn current_thread_identity() -> String {
    THREAD_CONTEXT
        .try_with(|context| context.identity.clone())
        .unwrap_or_else(|_| uncached_thread_identity())
}

/// Concatenate the text form of every argument, left to right, with no separator
///
/// An argument whose `Display` fails keeps whatever it wrote; the arguments
/// after it are still rendered.
///
/// # Example
///
/// ```
/// use rust_sync_logger::core::format::render_arguments;
///
/// let body = render_arguments(&[&"User: ", &"alice", &" ID: ", &123]);
/// assert_eq!(body, "User: alice ID: 123");
/// assert_eq!(render_arguments(&[]), "");
/// ```
pub fn render_arguments(args: &[&dyn Display]) -> String {
    let mut body = String::new();
    for arg in args {
        let _ = write!(body, "{}", arg);
    }
    body
}
