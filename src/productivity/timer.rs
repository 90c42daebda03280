//! Countdown timer
//!
//! `Countdown` is plain state advanced one second per `tick`. `spawn_timer`
//! drives one on a tokio task and talks to its owner through channels only.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Default countdown length in minutes
pub const DEFAULT_TIMER_MINUTES: u32 = 20;

/// Longest countdown whose length in seconds still fits a `u32`
pub const MAX_TIMER_MINUTES: u32 = u32::MAX / 60;

/// Countdown state, in whole seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Countdown {
    /// Configured length
    pub duration: u32,
    /// Seconds left
    pub remaining: u32,
    /// Whether ticks advance the countdown
    pub is_active: bool,
}

/// Something the countdown reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Remaining time just reached zero
    Finished,
}

impl Countdown {
    /// Inactive countdown of `minutes`, clamped to `1..=MAX_TIMER_MINUTES`
    pub fn with_minutes(minutes: u32) -> Self {
        let duration = minutes.clamp(1, MAX_TIMER_MINUTES) * 60;
        Self {
            duration,
            remaining: duration,
            is_active: false,
        }
    }

    /// Start or pause
    pub fn toggle(&mut self) {
        self.is_active = !self.is_active;
    }

    /// Restore the full duration and stop
    pub fn reset(&mut self) {
        self.remaining = self.duration;
        self.is_active = false;
    }

    /// Apply a user-entered minute count
    ///
    /// Accepts a positive integer (surrounding whitespace ignored) whose
    /// length in seconds fits a `u32`. On success the countdown is reset to
    /// the new length and stopped; otherwise it is left untouched and `false`
    /// is returned.
    pub fn set_custom_minutes(&mut self, input: &str) -> bool {
        match input.trim().parse::<u32>() {
            Ok(minutes) if minutes > 0 && minutes.checked_mul(60).is_some() => {
                *self = Self::with_minutes(minutes);
                true
            }
            _ => false,
        }
    }

    /// Advance one second
    ///
    /// Reports `Finished` on the tick that brings `remaining` to zero.
    pub fn tick(&mut self) -> Option<TimerEvent> {
        if !self.is_active || self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        (self.remaining == 0).then_some(TimerEvent::Finished)
    }

    /// Remaining time as `MM:SS`
    pub fn format(&self) -> String {
        format!("{:02}:{:02}", self.remaining / 60, self.remaining % 60)
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::with_minutes(DEFAULT_TIMER_MINUTES)
    }
}

/// Instruction for a running timer driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    /// Start or pause
    Toggle,
    /// Restore the full duration and stop
    Reset,
    /// Switch to a new length in minutes (clamped like [`Countdown::with_minutes`])
    SetMinutes(u32),
}

/// Owner side of a spawned timer
pub struct TimerHandle {
    commands: mpsc::UnboundedSender<TimerCommand>,
    snapshots: watch::Receiver<Countdown>,
    events: mpsc::UnboundedReceiver<TimerEvent>,
    task: JoinHandle<()>,
}

impl TimerHandle {
    /// Send a command to the driver
    pub fn send(&self, command: TimerCommand) -> Result<()> {
        self.commands
            .send(command)
            .map_err(|_| Error::Timer("Timer driver has stopped".to_string()))
    }

    /// Start or pause
    pub fn toggle(&self) -> Result<()> {
        self.send(TimerCommand::Toggle)
    }

    /// Reset to the full duration
    pub fn reset(&self) -> Result<()> {
        self.send(TimerCommand::Reset)
    }

    /// Latest published countdown state
    pub fn snapshot(&self) -> Countdown {
        *self.snapshots.borrow()
    }

    /// Wait for the next event; `None` once the driver has stopped
    pub async fn next_event(&mut self) -> Option<TimerEvent> {
        self.events.recv().await
    }

    /// Event already delivered, if any
    pub fn try_next_event(&mut self) -> Option<TimerEvent> {
        self.events.try_recv().ok()
    }

    /// Stop the driver and wait for it to exit
    pub async fn shutdown(self) -> Result<()> {
        drop(self.commands);
        self.task
            .await
            .map_err(|e| Error::Timer(format!("Timer driver failed: {}", e)))
    }
}

/// Run `countdown` on a tokio task, ticking once per second
///
/// Must be called from within a tokio runtime.
pub fn spawn_timer(mut countdown: Countdown) -> TimerHandle {
    let (command_tx, mut command_rx) = mpsc::unbounded_channel();
    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let (snapshot_tx, snapshot_rx) = watch::channel(countdown);

    let task = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(Duration::from_secs(1));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // First tick completes immediately
        ticker.tick().await;

        loop {
            tokio::select! {
                command = command_rx.recv() => {
                    let Some(command) = command else { break };
                    match command {
                        TimerCommand::Toggle => countdown.toggle(),
                        TimerCommand::Reset => countdown.reset(),
                        TimerCommand::SetMinutes(minutes) => countdown = Countdown::with_minutes(minutes),
                    }
                }
                _ = ticker.tick() => {
                    if let Some(event) = countdown.tick() {
                        tracing::info!("Countdown of {}s finished", countdown.duration);
                        let _ = event_tx.send(event);
                    }
                }
            }
            snapshot_tx.send_replace(countdown);
        }

        tracing::debug!("Timer driver stopped");
    });

    TimerHandle {
        commands: command_tx,
        snapshots: snapshot_rx,
        events: event_rx,
        task,
    }
}
