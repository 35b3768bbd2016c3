//! The periodic ticker driving an [`EarningsCalculator`].
//!
//! [`Scheduler`] is an explicit object owning a cancellable tokio task. The
//! task is the only writer of the display state; everyone else talks to it
//! through a [`TickerController`] (commands in, frames out).

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::calculation::EarningsCalculator;
use crate::error::{PayStreamError, PayStreamResult};
use crate::models::SalaryConfiguration;

use super::{Clock, Frame};

/// Lifecycle of the ticker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickerState {
    /// No periodic evaluation is active.
    Idle,
    /// A task is invoking `tick` on a fixed cadence.
    Running,
}

#[derive(Debug)]
enum TickerCommand {
    Reconfigure(SalaryConfiguration),
    Stop,
}

/// Cloneable access to a running ticker.
#[derive(Debug, Clone)]
pub struct TickerController {
    commands: mpsc::UnboundedSender<TickerCommand>,
    frames: watch::Receiver<Frame>,
}

impl TickerController {
    /// The most recently published frame.
    pub fn latest(&self) -> Frame {
        *self.frames.borrow()
    }

    /// Waits for the next frame.
    pub async fn next_frame(&mut self) -> PayStreamResult<Frame> {
        self.frames
            .changed()
            .await
            .map_err(|_| PayStreamError::SchedulerStopped)?;
        Ok(*self.frames.borrow_and_update())
    }

    /// Replaces the configuration; the display jumps to the new values.
    ///
    /// The configuration is validated first, so a sentinel rate of `0`
    /// never reaches the calculator.
    pub fn reconfigure(&self, config: SalaryConfiguration) -> PayStreamResult<()> {
        config.validate()?;
        self.commands
            .send(TickerCommand::Reconfigure(config))
            .map_err(|_| PayStreamError::SchedulerStopped)
    }

    /// True while the ticker task is alive.
    pub fn is_running(&self) -> bool {
        !self.commands.is_closed()
    }
}

/// Owns the ticker task and its cancellation.
///
/// Dropping the handle aborts the task.
#[derive(Debug)]
pub struct TickerHandle {
    controller: TickerController,
    task: JoinHandle<()>,
}

impl TickerHandle {
    /// A controller for the running ticker.
    pub fn controller(&self) -> TickerController {
        self.controller.clone()
    }

    /// Stops the ticker and waits for the task to finish.
    pub async fn stop(mut self) {
        let _ = self.controller.commands.send(TickerCommand::Stop);
        let _ = (&mut self.task).await;
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Drives `tick` on a fixed cadence.
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use paystream::models::SalaryConfiguration;
/// use paystream::scheduler::{Scheduler, SystemClock, TickerState};
///
/// # async fn run() {
/// let mut scheduler = Scheduler::new(SystemClock, Duration::from_millis(200));
/// let mut ticker = scheduler.start(SalaryConfiguration::default()).unwrap();
/// assert_eq!(scheduler.state(), TickerState::Running);
///
/// let frame = ticker.next_frame().await.unwrap();
/// println!("{:.2}", frame.displayed_earned);
///
/// scheduler.stop().await;
/// assert_eq!(scheduler.state(), TickerState::Idle);
/// # }
/// ```
#[derive(Debug)]
pub struct Scheduler<C: Clock> {
    clock: std::sync::Arc<C>,
    period: Duration,
    handle: Option<TickerHandle>,
}

impl<C: Clock> Scheduler<C> {
    /// Creates an idle scheduler.
    pub fn new(clock: C, period: Duration) -> Self {
        Self {
            clock: std::sync::Arc::new(clock),
            period,
            handle: None,
        }
    }

    /// The current lifecycle state.
    pub fn state(&self) -> TickerState {
        match &self.handle {
            Some(handle) if !handle.task.is_finished() => TickerState::Running,
            _ => TickerState::Idle,
        }
    }

    /// The cadence ticks are issued at.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Presents a configuration for continuous display.
    ///
    /// From Idle this spawns the ticker. While Running it resets the display
    /// to the new configuration and keeps running. A zero period is rejected
    /// with [`PayStreamError::InvalidTickInterval`].
    pub fn start(&mut self, config: SalaryConfiguration) -> PayStreamResult<TickerController> {
        if self.period.is_zero() {
            return Err(PayStreamError::InvalidTickInterval);
        }
        config.validate()?;

        if let Some(handle) = &self.handle {
            if self.state() == TickerState::Running {
                handle.controller.reconfigure(config)?;
                return Ok(handle.controller());
            }
        }

        let now = self.clock.now();
        let calculator = EarningsCalculator::new(config, &now);
        let (frame_tx, frame_rx) = watch::channel(Frame::capture(&calculator, &now));
        let (command_tx, command_rx) = mpsc::unbounded_channel();

        let task = tokio::spawn(run_ticker(
            self.clock.clone(),
            self.period,
            calculator,
            command_rx,
            frame_tx,
        ));
        info!(
            period_ms = self.period.as_millis() as u64,
            salary = config.salary,
            currency = %config.currency,
            "Ticker started"
        );

        let handle = TickerHandle {
            controller: TickerController {
                commands: command_tx,
                frames: frame_rx,
            },
            task,
        };
        let controller = handle.controller();
        self.handle = Some(handle);
        Ok(controller)
    }

    /// A controller for the running ticker, if any.
    pub fn controller(&self) -> Option<TickerController> {
        self.handle.as_ref().map(TickerHandle::controller)
    }

    /// Tears the ticker down and returns to Idle.
    pub async fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.stop().await;
            info!("Ticker stopped");
        }
    }
}

async fn run_ticker<C: Clock>(
    clock: std::sync::Arc<C>,
    period: Duration,
    mut calculator: EarningsCalculator,
    mut commands: mpsc::UnboundedReceiver<TickerCommand>,
    frames: watch::Sender<Frame>,
) {
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                let now = clock.now();
                calculator.tick(&now);
                frames.send_replace(Frame::capture(&calculator, &now));
            }
            command = commands.recv() => match command {
                Some(TickerCommand::Reconfigure(config)) => {
                    let now = clock.now();
                    calculator.reset(config, &now);
                    frames.send_replace(Frame::capture(&calculator, &now));
                    info!(
                        salary = config.salary,
                        currency = %config.currency,
                        rate = config.rate,
                        "Ticker reset to new configuration"
                    );
                }
                Some(TickerCommand::Stop) | None => break,
            },
        }
    }
    debug!("Ticker task exiting");
}
