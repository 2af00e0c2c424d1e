// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic;
use tracing::subscriber::DefaultGuard;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

use super::{DisplayPreference, TracingConfig, WriterConfig};

/// Avoid gnarly type annotations by using a macro to create the `fmt` layer.
macro_rules! create_fmt {
    () => {
        tracing_subscriber::fmt::layer()
            .compact()
            .without_time()
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_target(true)
            .with_file(false)
            .with_line_number(false)
    };
}

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Install `tracing_config` as the global default subscriber.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn try_initialize_logging_global(tracing_config: TracingConfig) -> miette::Result<()> {
    match try_create_layers(tracing_config)? {
        Some(layers) => tracing_subscriber::registry()
            .with(layers)
            .try_init()
            .into_diagnostic(),
        None => Ok(()),
    }
}

impl TracingConfig {
    /// Install as the default subscriber for the current thread, until the returned
    /// guard is dropped. Returns `None` for [`WriterConfig::None`].
    ///
    /// # Errors
    ///
    /// Returns an error if the layers can't be created.
    pub fn install_thread_local(self) -> miette::Result<Option<DefaultGuard>> {
        Ok(try_create_layers(self)?
            .map(|layers| tracing_subscriber::registry().with(layers).set_default()))
    }
}

/// Returns the layers, or `None` when nothing should be logged. This does not
/// initialize the tracing system.
///
/// # Errors
///
/// Returns an error if a layer can't be created.
pub fn try_create_layers(
    tracing_config: TracingConfig,
) -> miette::Result<Option<Vec<Box<DynLayer<tracing_subscriber::Registry>>>>> {
    let level_filter = tracing_config.get_level_filter();
    let Some(display_layer) =
        try_create_display_layer(level_filter, tracing_config.get_writer_config())?
    else {
        return Ok(None);
    };

    let layers: Vec<Box<DynLayer<tracing_subscriber::Registry>>> =
        vec![Box::new(level_filter), display_layer];
    Ok(Some(layers))
}

/// This erases the concrete type of the writer, and returns a boxed layer.
///
/// # Errors
///
/// Currently infallible for the supported [`DisplayPreference`]s.
pub fn try_create_display_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let fmt_layer = create_fmt!();

    Ok(match writer_config {
        WriterConfig::None => None,
        WriterConfig::Display(display_pref) => match display_pref {
            DisplayPreference::Stdout => Some(Box::new(
                fmt_layer
                    .with_writer(std::io::stdout)
                    .with_filter(level_filter),
            )),
            DisplayPreference::Stderr => Some(Box::new(
                fmt_layer
                    .with_writer(std::io::stderr)
                    .with_filter(level_filter),
            )),
            DisplayPreference::Test => Some(Box::new(
                fmt_layer
                    .with_test_writer()
                    .with_filter(level_filter),
            )),
            DisplayPreference::Capture(capture) => {
                let tracing_writer = move || capture.clone();
                Some(Box::new(
                    fmt_layer
                        .with_ansi(false)
                        .with_writer(tracing_writer)
                        .with_filter(level_filter),
                ))
            }
        },
    })
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;
    use crate::{BoundedWriter, FormatConfig, LogCapture, fmt_args};

    #[test]
    fn test_try_create_display_layer() {
        let layer: Option<Box<DynLayer<tracing_subscriber::Registry>>> =
            try_create_display_layer(
                LevelFilter::DEBUG,
                WriterConfig::Display(DisplayPreference::Stdout),
            )
            .unwrap();
        assert!(layer.is_some());
    }

    #[test]
    fn test_none_creates_no_layers() {
        let config = TracingConfig {
            writer_config: WriterConfig::None,
            level_filter: LevelFilter::DEBUG,
        };
        assert!(try_create_layers(config.clone()).unwrap().is_none());
        assert!(config.install_thread_local().unwrap().is_none());
    }

    #[test]
    fn test_layer_count() {
        let layers =
            try_create_layers(TracingConfig::new_display(DisplayPreference::Test))
                .unwrap()
                .unwrap();
        assert_eq!(layers.len(), 2);
    }

    #[test]
    #[serial]
    fn test_aborted_format_is_logged() {
        let capture = LogCapture::default();
        let guard = TracingConfig::new_display(DisplayPreference::Capture(capture.clone()))
            .install_thread_local()
            .unwrap();

        let mut buf = [0_u8; 16];
        let mut writer = BoundedWriter::new(&mut buf[..]);
        assert!(writer.format("{:q}", fmt_args![1]).is_err());

        drop(guard);
        let output = capture.contents();
        assert!(output.contains("format aborted"), "{output}");
        assert!(output.contains("{:q}"), "{output}");
    }

    #[test]
    #[serial]
    fn test_level_filter_hides_debug() {
        let capture = LogCapture::default();
        let guard = TracingConfig::new_display(DisplayPreference::Capture(capture.clone()))
            .with_level_filter(LevelFilter::INFO)
            .install_thread_local()
            .unwrap();

        let _unused = FormatConfig::from_env_with(|_| Some("de_DE.UTF-8".to_owned()));

        drop(guard);
        assert_eq!(capture.contents(), "");
    }
}
