//! Settings command - show or change roster settings

use anyhow::{Context, Result};
use colored::Colorize;
use roster_core::config::Config;
use roster_core::OperationResult;
use tracing::debug;

use super::get_roster_dir;
use crate::output;

/// Requested changes; `None` leaves a value alone
#[derive(Debug, Default)]
pub struct SettingsUpdate {
    pub user_count: Option<usize>,
    pub seed: Option<u64>,
    pub clear_seed: bool,
    pub unemployed_label: Option<String>,
}

impl SettingsUpdate {
    fn is_empty(&self) -> bool {
        self.user_count.is_none()
            && self.seed.is_none()
            && !self.clear_seed
            && self.unemployed_label.is_none()
    }

    fn apply_to(self, config: &mut Config) -> Result<()> {
        if let Some(count) = self.user_count {
            config.user_count = count;
        }
        if self.clear_seed {
            config.seed = None;
        } else if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(label) = self.unemployed_label {
            if label.trim().is_empty() {
                anyhow::bail!("Unemployed label cannot be blank");
            }
            config.unemployed_label = label;
        }
        Ok(())
    }
}

pub fn run(update: SettingsUpdate, json: bool) -> Result<()> {
    let roster_dir = get_roster_dir()?;
    let mut config = Config::load(&roster_dir)
        .with_context(|| format!("Failed to load settings from {:?}", roster_dir))?;

    let changed = !update.is_empty();
    if changed {
        update.apply_to(&mut config)?;
        config
            .save(&roster_dir)
            .with_context(|| format!("Failed to save settings to {:?}", roster_dir))?;
        debug!(dir = %roster_dir.display(), "saved settings");
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&OperationResult::ok(&config))?);
        return Ok(());
    }

    if changed {
        output::success("Settings saved");
    }

    let mut table = output::create_table();
    table.set_header(vec!["Setting", "Value"]);
    table.add_row(vec!["User count".to_string(), config.user_count.to_string()]);
    table.add_row(vec![
        "Seed".to_string(),
        config
            .seed
            .map(|s| s.to_string())
            .unwrap_or_else(|| "random".dimmed().to_string()),
    ]);
    table.add_row(vec!["Unemployed label".to_string(), config.unemployed_label.clone()]);
    println!("{}", table);
    println!("{}", format!("Directory: {}", roster_dir.display()).dimmed());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_applies_only_given_fields() {
        let mut config = Config {
            user_count: 10,
            seed: Some(3),
            unemployed_label: "Idle".to_string(),
        };

        SettingsUpdate {
            user_count: Some(25),
            ..Default::default()
        }
        .apply_to(&mut config)
        .unwrap();

        assert_eq!(config.user_count, 25);
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.unemployed_label, "Idle");
    }

    #[test]
    fn test_clear_seed_wins_over_seed() {
        let mut config = Config::default();
        SettingsUpdate {
            seed: Some(9),
            clear_seed: true,
            ..Default::default()
        }
        .apply_to(&mut config)
        .unwrap();
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_blank_label_rejected() {
        let mut config = Config::default();
        let update = SettingsUpdate {
            unemployed_label: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(update.apply_to(&mut config).is_err());
        assert!(SettingsUpdate::default().is_empty());
    }
}
