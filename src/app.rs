//! Headless host that drives the drawing core.
//!
//! `App` plays the part of the activity: it owns the input state, the redraw
//! surface and the export worker, feeds script commands through them and
//! reports export outcomes as desktop notifications.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use log::{debug, info, warn};

use crate::config::Config;
use crate::draw::{Color, RedrawSurface};
use crate::export::{ExportDependencies, ExportManager, ExportOutcome, FileSaveConfig};
use crate::input::InputState;
use crate::notification;
use crate::script::ScriptCommand;

/// Default viewport, a portrait phone screen.
pub const DEFAULT_WIDTH: i32 = 1080;
pub const DEFAULT_HEIGHT: i32 = 1920;

const NOTIFY_TIMEOUT: Duration = Duration::from_secs(2);

/// Host settings that come from the command line rather than the config file.
#[derive(Debug, Clone)]
pub struct AppOptions {
    pub width: i32,
    pub height: i32,
    /// Overrides `[export] directory`
    pub output_dir: Option<PathBuf>,
    pub share: bool,
    pub notify: bool,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            output_dir: None,
            share: true,
            notify: true,
        }
    }
}

/// What a script run produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Number of commands applied
    pub commands: usize,
    /// One outcome per export, in request order
    pub exports: Vec<ExportOutcome>,
}

impl RunSummary {
    pub fn saved_paths(&self) -> Vec<PathBuf> {
        self.exports
            .iter()
            .filter_map(|outcome| match outcome {
                ExportOutcome::Success(result) => Some(result.saved_path.clone()),
                ExportOutcome::Failed(_) => None,
            })
            .collect()
    }

    pub fn failures(&self) -> usize {
        self.exports
            .iter()
            .filter(|outcome| matches!(outcome, ExportOutcome::Failed(_)))
            .count()
    }
}

pub struct App {
    input: InputState,
    surface: RedrawSurface,
    /// Tokio runtime for the export worker and notifications
    runtime: tokio::runtime::Runtime,
    export_manager: ExportManager,
    save_config: FileSaveConfig,
    background: Color,
    share: bool,
    notify: bool,
    export_in_flight: bool,
    outcomes: Vec<ExportOutcome>,
}

impl App {
    pub fn new(config: &Config, options: AppOptions) -> Result<Self> {
        Self::with_export_dependencies(config, options, ExportDependencies::default())
    }

    /// Creates a host whose export worker uses `dependencies`.
    pub fn with_export_dependencies(
        config: &Config,
        options: AppOptions,
        dependencies: ExportDependencies,
    ) -> Result<Self> {
        let runtime = tokio::runtime::Runtime::new()
            .context("Failed to create Tokio runtime for export operations")?;
        let export_manager = ExportManager::with_dependencies(runtime.handle(), dependencies);

        let surface = RedrawSurface::new(options.width, options.height).with_context(|| {
            format!(
                "Failed to allocate {}x{} drawing surface",
                options.width, options.height
            )
        })?;

        let mut save_config = FileSaveConfig::from_config(config);
        if let Some(dir) = options.output_dir {
            save_config.save_directory = dir;
        }

        let mut input = InputState::from_config(config);
        input.set_swipe_handler(Box::new(|direction| {
            info!("Swipe detected: {:?}", direction);
        }));

        info!(
            "Canvas {}x{}, exports to {}",
            options.width,
            options.height,
            save_config.save_directory.display()
        );

        Ok(Self {
            input,
            surface,
            runtime,
            export_manager,
            save_config,
            background: config.export.background.to_color(),
            share: options.share && config.export.share,
            notify: options.notify && config.export.notify,
            export_in_flight: false,
            outcomes: Vec::new(),
        })
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    pub fn surface(&self) -> &RedrawSurface {
        &self.surface
    }

    /// Applies one command, then repaints and dispatches exports as needed.
    pub fn apply(&mut self, command: ScriptCommand) -> Result<()> {
        debug!("Applying {:?}", command);
        match command {
            ScriptCommand::Touch(event) => self.input.on_touch(event),
            ScriptCommand::Action(action) => self.input.handle_action(action),
            ScriptCommand::Resize { width, height } => {
                let resized = self
                    .surface
                    .resize(width, height)
                    .with_context(|| format!("Failed to resize surface to {}x{}", width, height))?;
                if resized {
                    // Pixels are gone until the next render
                    self.input.needs_redraw = true;
                }
            }
        }

        self.redraw_if_needed()?;

        if self.input.take_pending_export() {
            self.start_export()?;
        }
        Ok(())
    }

    /// Outcomes of exports finished so far and not yet returned by [`App::run`].
    pub fn outcomes(&self) -> &[ExportOutcome] {
        &self.outcomes
    }

    /// Applies every command and waits for the last export to finish.
    ///
    /// On error the run stops at the failing command, after the export in
    /// flight (if any) has been reported.
    pub fn run(&mut self, commands: Vec<ScriptCommand>) -> Result<RunSummary> {
        let mut applied = 0;
        let result = commands.into_iter().try_for_each(|command| {
            self.apply(command)?;
            applied += 1;
            Ok::<(), anyhow::Error>(())
        });
        // An export already handed to the worker is reported even if a later
        // command failed
        self.finish_export();
        result?;

        Ok(RunSummary {
            commands: applied,
            exports: std::mem::take(&mut self.outcomes),
        })
    }

    fn redraw_if_needed(&mut self) -> Result<()> {
        if !self.input.needs_redraw {
            return Ok(());
        }
        self.surface
            .render(&self.input.model)
            .context("Failed to render drawing")?;
        self.input.needs_redraw = false;
        Ok(())
    }

    fn start_export(&mut self) -> Result<()> {
        // One export at a time; the previous outcome is reported first
        self.finish_export();

        let snapshot = self
            .surface
            .render_to_image(&self.input.model, self.background)
            .context("Failed to render drawing for export")?;

        info!(
            "Exporting {} stroke(s) as {}x{} PNG",
            self.input.model.committed().len(),
            snapshot.width,
            snapshot.height
        );

        match self
            .export_manager
            .request_export(snapshot, self.save_config.clone(), self.share)
        {
            Ok(()) => self.export_in_flight = true,
            Err(e) => {
                log::error!("Failed to request export: {}", e);
                self.report(ExportOutcome::Failed(e.to_string()));
            }
        }
        Ok(())
    }

    fn finish_export(&mut self) {
        if !self.export_in_flight {
            return;
        }
        let outcome = self
            .runtime
            .block_on(self.export_manager.wait_for_result());
        self.export_in_flight = false;
        self.report(outcome);
    }

    fn report(&mut self, outcome: ExportOutcome) {
        match &outcome {
            ExportOutcome::Success(result) => {
                info!("Drawing saved to {}", result.saved_path.display());
                if self.share && !result.shared {
                    warn!("Saved drawing could not be shared");
                }
            }
            ExportOutcome::Failed(reason) => warn!("Export failed: {}", reason),
        }

        if self.notify {
            let (summary, body, icon) = notification::export_notification(&outcome);
            let sent = self.runtime.block_on(async {
                tokio::time::timeout(
                    NOTIFY_TIMEOUT,
                    notification::send_notification(&summary, &body, Some(icon)),
                )
                .await
            });
            match sent {
                Ok(Ok(())) => {}
                Ok(Err(e)) => warn!("Failed to send notification: {}", e),
                Err(_) => warn!("Timed out sending notification"),
            }
        }

        self.outcomes.push(outcome);
    }
}
