//! Configuration management for the taskdeck application.
//!
//! Handles notification behavior and display defaults. Configuration is
//! stored as JSON in the platform-specific application data directory and
//! can be edited either by hand or through the interactive `init` wizard.
//!
//! ## Configuration Structure
//!
//! - **Notifications**: reminder lead time, quiet hours, daily summary,
//!   weekly review and focus session toggles
//! - **Display**: default sort key and completed-task visibility for
//!   `list`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskdeck::libs::config::Config;
//!
//! let config = Config::read()?;
//! let settings = config.notification_settings();
//! # anyhow::Ok(())
//! ```

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::query::{SortDirection, SortKey};
use crate::{msg_error, msg_print};
use anyhow::Result;
use chrono::NaiveTime;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Global notification policy applied by the scheduler.
///
/// All times are local wall-clock times. The quiet-hours window may span
/// midnight (e.g. 22:00 → 07:00).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NotificationSettings {
    /// Master switch for per-task due-date reminders.
    pub task_reminders_enabled: bool,
    /// Minutes before the due time at which the reminder fires.
    pub reminder_lead_minutes: i64,
    pub daily_summary_enabled: bool,
    pub daily_summary_time: NaiveTime,
    pub weekly_review_enabled: bool,
    /// 0 = Sunday .. 6 = Saturday.
    pub weekly_review_day: u8,
    pub weekly_review_time: NaiveTime,
    pub focus_session_enabled: bool,
    pub quiet_hours_enabled: bool,
    pub quiet_hours_start: NaiveTime,
    pub quiet_hours_end: NaiveTime,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            task_reminders_enabled: true,
            reminder_lead_minutes: 30,
            daily_summary_enabled: true,
            daily_summary_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            weekly_review_enabled: true,
            weekly_review_day: 1,
            weekly_review_time: NaiveTime::from_hms_opt(20, 0, 0).unwrap(),
            focus_session_enabled: true,
            quiet_hours_enabled: false,
            quiet_hours_start: NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
            quiet_hours_end: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
        }
    }
}

/// Defaults applied by the `list` command when flags are omitted.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DisplayConfig {
    pub default_sort: SortKey,
    pub default_direction: Option<SortDirection>,
    pub hide_completed: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_sort: SortKey::Manual,
            default_direction: None,
            hide_completed: false,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications: Option<NotificationSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<DisplayConfig>,
}

impl Config {
    /// Reads the configuration file, falling back to defaults when the
    /// file does not exist yet.
    pub fn read() -> Result<Self> {
        let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME).map_err(|e| anyhow::anyhow!(e.to_string()))?;
        if !config_path.exists() {
            return Ok(Config::default());
        }
        let contents = fs::read_to_string(&config_path)?;
        match serde_json::from_str(&contents) {
            Ok(config) => Ok(config),
            Err(_) => {
                msg_error!(Message::ConfigParseError);
                Ok(Config::default())
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = DataStorage::new().get_path(CONFIG_FILE_NAME).map_err(|e| anyhow::anyhow!(e.to_string()))?;
        let file = File::create(&config_path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Effective notification settings (configured or defaults).
    pub fn notification_settings(&self) -> NotificationSettings {
        self.notifications.clone().unwrap_or_default()
    }

    /// Effective display defaults (configured or defaults).
    pub fn display_config(&self) -> DisplayConfig {
        self.display.clone().unwrap_or_default()
    }

    /// Interactive configuration wizard.
    pub fn init() -> Result<Self> {
        let current = Config::read()?;
        let mut settings = current.notification_settings();
        let theme = ColorfulTheme::default();

        settings.reminder_lead_minutes = Input::with_theme(&theme)
            .with_prompt(Message::PromptReminderLead.to_string())
            .default(settings.reminder_lead_minutes)
            .interact_text()?;

        settings.daily_summary_enabled = Confirm::with_theme(&theme)
            .with_prompt(Message::PromptDailySummaryEnabled.to_string())
            .default(settings.daily_summary_enabled)
            .interact()?;
        if settings.daily_summary_enabled {
            settings.daily_summary_time = prompt_time(&theme, Message::PromptDailySummaryTime, settings.daily_summary_time)?;
        }

        settings.weekly_review_enabled = Confirm::with_theme(&theme)
            .with_prompt(Message::PromptWeeklyReviewEnabled.to_string())
            .default(settings.weekly_review_enabled)
            .interact()?;
        if settings.weekly_review_enabled {
            settings.weekly_review_day = Input::with_theme(&theme)
                .with_prompt(Message::PromptWeeklyReviewDay.to_string())
                .default(settings.weekly_review_day)
                .validate_with(|day: &u8| if *day <= 6 { Ok(()) } else { Err("day must be 0..6") })
                .interact_text()?;
            settings.weekly_review_time = prompt_time(&theme, Message::PromptWeeklyReviewTime, settings.weekly_review_time)?;
        }

        settings.quiet_hours_enabled = Confirm::with_theme(&theme)
            .with_prompt(Message::PromptQuietHoursEnabled.to_string())
            .default(settings.quiet_hours_enabled)
            .interact()?;
        if settings.quiet_hours_enabled {
            settings.quiet_hours_start = prompt_time(&theme, Message::PromptQuietHoursStart, settings.quiet_hours_start)?;
            settings.quiet_hours_end = prompt_time(&theme, Message::PromptQuietHoursEnd, settings.quiet_hours_end)?;
        }

        let config = Config {
            notifications: Some(settings),
            display: current.display.clone(),
        };
        config.save()?;
        msg_print!(Message::ConfigSaved);
        Ok(config)
    }
}

fn prompt_time(theme: &ColorfulTheme, prompt: Message, default: NaiveTime) -> Result<NaiveTime> {
    let raw: String = Input::with_theme(theme)
        .with_prompt(prompt.to_string())
        .default(default.format("%H:%M").to_string())
        .validate_with(|input: &String| {
            NaiveTime::parse_from_str(input, "%H:%M").map(|_| ()).map_err(|_| "expected HH:MM")
        })
        .interact_text()?;
    Ok(NaiveTime::parse_from_str(&raw, "%H:%M")?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_match_documented_values() {
        let settings = NotificationSettings::default();
        assert_eq!(settings.reminder_lead_minutes, 30);
        assert_eq!(settings.weekly_review_day, 1);
        assert!(!settings.quiet_hours_enabled);
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = Config {
            notifications: Some(NotificationSettings::default()),
            display: Some(DisplayConfig::default()),
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
