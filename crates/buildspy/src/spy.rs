//! Spy entry point: handler wiring and event intake.

use std::sync::Arc;

use buildspy_core::BuildEvent;
use buildspy_core::extensions::{ExtensionResolver, StandardExtensions};
use buildspy_handlers::HandlerRegistry;
use buildspy_handlers::dependency::{
    DependencyResolutionCompletedHandler, DependencyResolutionStartedHandler,
};
use buildspy_handlers::fallback::CatchAllHandler;
use buildspy_handlers::mojo::{MojoFailedHandler, MojoStartedHandler, MojoSucceededHandler};
use buildspy_handlers::project::{
    ProjectFailedHandler, ProjectStartedHandler, ProjectSucceededHandler,
};
use buildspy_handlers::session::SessionEndedHandler;
use buildspy_report::{EventReporter, FileReporter, NullReporter};
use tracing::debug;

use crate::config::SpyConfig;
use crate::errors::Result;

/// The spy: the stock handler set bound to a report sink.
///
/// Feed lifecycle events through [`on_event`](Self::on_event) and call
/// [`close`](Self::close) once the session is over to finish the report.
pub struct BuildSpy {
    registry: HandlerRegistry,
    reporter: Arc<dyn EventReporter>,
}

impl BuildSpy {
    /// Wire the stock handler set around `reporter` and `extensions`.
    ///
    /// # Errors
    ///
    /// Returns a registration error when the handler set is inconsistent;
    /// the stock set never is.
    pub fn new(
        reporter: Arc<dyn EventReporter>,
        extensions: Arc<dyn ExtensionResolver>,
    ) -> Result<Self> {
        let mut registry = HandlerRegistry::new();
        registry.register(Arc::new(ProjectStartedHandler::new(reporter.clone())))?;
        registry.register(Arc::new(ProjectSucceededHandler::new(
            reporter.clone(),
            extensions.clone(),
        )))?;
        registry.register(Arc::new(ProjectFailedHandler::new(reporter.clone())))?;
        registry.register(Arc::new(MojoStartedHandler::new(reporter.clone())))?;
        registry.register(Arc::new(MojoSucceededHandler::new(reporter.clone())))?;
        registry.register(Arc::new(MojoFailedHandler::new(reporter.clone())))?;
        registry.register(Arc::new(SessionEndedHandler::new()))?;
        registry.register(Arc::new(DependencyResolutionStartedHandler::new()))?;
        registry.register(Arc::new(DependencyResolutionCompletedHandler::new(
            reporter.clone(),
            extensions,
        )))?;
        registry.register(Arc::new(CatchAllHandler::new(reporter.clone())))?;
        Ok(Self { registry, reporter })
    }

    /// Wire the spy from the process environment (see [`SpyConfig`]).
    ///
    /// # Errors
    ///
    /// Returns an error when the report file cannot be created.
    pub fn from_env() -> Result<Self> {
        Self::from_config(&SpyConfig::from_env())
    }

    /// Wire the spy from `config`: a file reporter inside the configured
    /// reports directory, or the discarding reporter when disabled.
    ///
    /// # Errors
    ///
    /// Returns an error when the report file cannot be created.
    pub fn from_config(config: &SpyConfig) -> Result<Self> {
        let reporter: Arc<dyn EventReporter> = if config.enabled {
            Arc::new(FileReporter::create(&config.reports_dir)?)
        } else {
            debug!("spy disabled, discarding events");
            Arc::new(NullReporter)
        };
        Self::new(reporter, Arc::new(StandardExtensions))
    }

    /// Feed one event through the registered handlers.
    ///
    /// Returns `Ok(true)` when a handler consumed the event; an event no
    /// handler claims is reported as `Ok(false)`, never as an error.
    ///
    /// # Errors
    ///
    /// Propagates handler failures (path canonicalization, report append).
    pub fn on_event(&self, event: &BuildEvent) -> Result<bool> {
        let consumed = self.registry.dispatch(event)?;
        if !consumed {
            debug!(kind = %event.kind(), "event not consumed by any handler");
        }
        Ok(consumed)
    }

    /// Finish the report and release the underlying sink. Idempotent.
    ///
    /// # Errors
    ///
    /// Propagates the reporter's close failure.
    pub fn close(&self) -> Result<()> {
        self.reporter.close()?;
        Ok(())
    }

    /// The handler registry, for inspection.
    #[must_use]
    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }
}
