use time::{UtcOffset, format_description::well_known::Rfc3339};
use tracing::Subscriber;
use tracing_subscriber::{
    EnvFilter, fmt, fmt::time::OffsetTime, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::{LogError, LogFormat, LogSettings};

/// Install the process-wide tracing subscriber.
pub fn init(settings: &LogSettings) -> Result<(), LogError> {
    let filter = EnvFilter::try_new(&settings.filter)
        .map_err(|_| LogError::InvalidFilter(settings.filter.clone()))?;
    let timer = mk_timer();

    match settings.format {
        LogFormat::Text => {
            let layer = fmt::layer().with_ansi(settings.color).with_timer(timer);
            install(tracing_subscriber::registry().with(filter).with(layer))
        }
        LogFormat::Json => {
            let layer = fmt::layer().json().with_ansi(false).with_timer(timer);
            install(tracing_subscriber::registry().with(filter).with(layer))
        }
    }
}

fn mk_timer() -> OffsetTime<Rfc3339> {
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    OffsetTime::new(offset, Rfc3339)
}

fn install<S>(subscriber: S) -> Result<(), LogError>
where
    S: Subscriber + Send + Sync + 'static,
{
    subscriber.try_init().map_err(|e| {
        let text = e.to_string();
        if text.contains("SetGlobalDefaultError") {
            LogError::AlreadyInitialized
        } else {
            LogError::Init(text)
        }
    })
}
