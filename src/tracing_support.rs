//! Logging and per-span timing.
//!
//! With the `tracing` feature the crate logs through `tracing` and the binary
//! installs a `tracing-subscriber` registry.  Without it, the macros used
//! inside the crate expand to nothing and the public functions do nothing.

#[cfg(feature = "tracing")]
mod enabled {
    use std::{
        cell::RefCell,
        collections::BTreeMap,
        sync::Once,
        time::{Duration, Instant},
    };

    use tracing::{Id, Subscriber, span::Attributes};
    use tracing_subscriber::{
        EnvFilter, Layer, Registry, fmt,
        layer::{Context, SubscriberExt},
        registry::LookupSpan,
        util::SubscriberInitExt,
    };

    /// Accumulated time spent in every closed span with one name.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct SpanTotal {
        pub elapsed: Duration,
        pub count: usize,
    }

    thread_local! {
        static SPAN_TOTALS: RefCell<BTreeMap<&'static str, SpanTotal>> =
            const { RefCell::new(BTreeMap::new()) };
    }

    fn record(name: &'static str, elapsed: Duration) {
        SPAN_TOTALS.with(|totals| {
            let mut totals = totals.borrow_mut();
            let total = totals.entry(name).or_default();
            total.elapsed += elapsed;
            total.count += 1;
        });
    }

    /// Stamps each span with its creation time and adds the lifetime to
    /// the per-name totals when it closes.
    pub(crate) struct TimingLayer;

    impl<S> Layer<S> for TimingLayer
    where
        S: Subscriber + for<'a> LookupSpan<'a>,
    {
        fn on_new_span(&self, _attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
            if let Some(span) = ctx.span(id) {
                span.extensions_mut().insert(Instant::now());
            }
        }

        fn on_close(&self, id: Id, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(&id) else {
                return;
            };
            if let Some(opened) = span.extensions().get::<Instant>() {
                record(span.metadata().name(), opened.elapsed());
            }
        }
    }

    /// Installs the global subscriber: a stderr `fmt` layer filtered by
    /// `filter` (or `RUST_LOG`, or `warn`), plus the timing layer when
    /// `timings` is set.  Only the first call has any effect.
    pub fn init_tracing(filter: Option<&str>, timings: bool) {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let env_filter = filter
                .and_then(|directive| EnvFilter::try_new(directive).ok())
                .or_else(|| EnvFilter::try_from_default_env().ok())
                .unwrap_or_else(|| EnvFilter::new("warn"));
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(env_filter);
            let _ = Registry::default()
                .with(fmt_layer)
                .with(timings.then_some(TimingLayer))
                .try_init();
        });
    }

    /// Span totals recorded on this thread, longest first.
    pub fn span_timings() -> Vec<(&'static str, SpanTotal)> {
        let mut totals: Vec<_> = SPAN_TOTALS.with(|totals| {
            totals
                .borrow()
                .iter()
                .map(|(name, total)| (*name, *total))
                .collect()
        });
        totals.sort_by(|a, b| b.1.elapsed.cmp(&a.1.elapsed));
        totals
    }

    pub fn dump_span_timings() {
        eprintln!("Span timings (desc):");
        for (name, total) in span_timings() {
            eprintln!("  {name}: {:?} ({}x)", total.elapsed, total.count);
        }
    }

    #[doc(hidden)]
    pub fn reset_span_timings() {
        SPAN_TOTALS.with(|totals| totals.borrow_mut().clear());
    }

    pub(crate) use tracing::{debug, info_span, trace};
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    use std::time::Duration;

    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct SpanTotal {
        pub elapsed: Duration,
        pub count: usize,
    }

    pub fn init_tracing(_filter: Option<&str>, _timings: bool) {}

    pub fn span_timings() -> Vec<(&'static str, SpanTotal)> {
        Vec::new()
    }

    pub fn dump_span_timings() {}

    #[doc(hidden)]
    pub fn reset_span_timings() {}

    macro_rules! info_span {
        ($($args:tt)*) => {{ $crate::tracing_support::NoOpSpan }};
    }

    macro_rules! debug {
        ($($args:tt)*) => {{}};
    }

    macro_rules! trace {
        ($($args:tt)*) => {{}};
    }

    pub(crate) use {debug, info_span, trace};

    pub struct NoOpSpan;

    impl NoOpSpan {
        pub fn entered(self) -> NoOpSpanGuard {
            NoOpSpanGuard
        }
    }

    pub struct NoOpSpanGuard;
}

#[cfg(feature = "tracing")]
pub use enabled::*;

#[cfg(not(feature = "tracing"))]
pub use disabled::*;
