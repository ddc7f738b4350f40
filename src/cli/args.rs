use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Args, Parser};

use crate::alert::{DesktopAlert, DEFAULT_SOUND};
use crate::cli::commands::Mode;
use crate::config::Paths;
use crate::error::PomoError;

#[derive(Parser, Debug)]
#[command(name = "pomo")]
#[command(about = "start a pomodoro timer")]
#[command(long_about = "pomo - a pomodoro timer that keeps Slack in sync

While the timer runs your status reads \"free in N mins\", your presence is
set to away and notifications are snoozed. When it ends you get a desktop
alert and everything is put back.

QUICK START:
  pomo --init <token>     Save your Slack token
  pomo                    Start a 25 minute timer
  pomo 50                 Start a 50 minute timer
  pomo --complete         End the current timer now")]
#[command(version)]
pub struct Cli {
    /// number of minutes for pomodoro timer
    #[arg(default_value = "25")]
    pub minutes: String,

    /// where init is your slack token from https://api.slack.com/custom-integrations/legacy-tokens
    #[arg(short, long, value_name = "TOKEN")]
    pub init: Option<String>,

    /// End the current timer and reset your status
    #[arg(short, long)]
    pub complete: bool,

    /// Log more detail to stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(flatten)]
    pub settings: Settings,
}

impl Cli {
    /// Operation selected by the flags. `--init` wins over `--complete`.
    #[must_use]
    pub fn mode(&self) -> Mode {
        if let Some(token) = &self.init {
            Mode::Initialize {
                token: token.clone(),
            }
        } else if self.complete {
            Mode::Complete
        } else {
            Mode::StartCountdown {
                minutes: self.minutes.clone(),
            }
        }
    }
}

/// Runtime settings, mostly taken from the environment.
#[derive(Args, Debug, Clone)]
pub struct Settings {
    /// Session file location
    #[arg(long, env = "POMO_CONFIG", hide = true)]
    pub config: Option<PathBuf>,

    /// Slack client binary
    #[arg(long, env = "POMO_SLACK_BIN", default_value = "slack", hide = true)]
    pub slack_bin: String,

    /// Sound played when the timer ends
    #[arg(long, env = "POMO_SOUND", default_value = DEFAULT_SOUND, hide = true)]
    pub sound: PathBuf,

    /// Skip the desktop notification and sound
    #[arg(long, env = "POMO_SILENT", hide = true)]
    pub silent: bool,

    /// Seconds between ticks
    #[arg(long, env = "POMO_TICK_SECS", default_value_t = 60, hide = true)]
    pub tick_secs: u64,
}

impl Settings {
    /// Resolve paths, honoring a `--config` override.
    ///
    /// # Errors
    ///
    /// Returns an error if no override is given and the home directory cannot
    /// be determined.
    pub fn paths(&self) -> Result<Paths, PomoError> {
        match &self.config {
            Some(path) => {
                let home = Paths::new().map_or_else(|_| PathBuf::from("."), |p| p.home);
                Ok(Paths::with_root(home).with_session_file(path.clone()))
            }
            None => Paths::new(),
        }
    }

    /// Completion alert matching these settings.
    #[must_use]
    pub fn alert(&self) -> DesktopAlert {
        if self.silent {
            DesktopAlert::silent()
        } else {
            DesktopAlert {
                notifications: true,
                sound: Some(self.sound.clone()),
            }
        }
    }

    #[must_use]
    pub const fn tick_interval(&self) -> Duration {
        Duration::from_secs(self.tick_secs)
    }
}
