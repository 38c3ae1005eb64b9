//! Settings command: the two "sprites to be added" counts.

use anyhow::Result;
use owo_colors::OwoColorize;
use ssx::{Gender, SETTINGS_FIELDS, SpriteExtender};

use crate::cli::SettingsAction;

/// Run a settings action. Count changes only take effect on the next session load.
pub fn run(extender: &mut SpriteExtender, action: &SettingsAction) -> Result<()> {
    match action {
        SettingsAction::Show => {}
        SettingsAction::Set { male, female } => {
            if let Some(count) = male {
                extender.set_sprites_added(Gender::Male, *count)?;
            }
            if let Some(count) = female {
                extender.set_sprites_added(Gender::Female, *count)?;
            }
            extender.save_settings()?;
        }
        SettingsAction::Reset => {
            extender.reset_settings();
            extender.save_settings()?;
        }
    }

    print_settings(extender);
    Ok(())
}

fn print_settings(extender: &SpriteExtender) {
    for field in SETTINGS_FIELDS {
        let stored = extender.store().offsets(field.gender).len();
        println!(
            "{}: {} ({} offset pairs stored)",
            field.name.bold(),
            extender.sprites_added(field.gender).cyan(),
            stored
        );
    }
    if !extender.has_storage() {
        println!("{}", "No content pack given, changes are not saved".yellow());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::open_extender;
    use ssx::CONFIG_KEY;
    use tempfile::TempDir;

    fn read_config(dir: &TempDir) -> serde_json::Value {
        let content = std::fs::read_to_string(dir.path().join(CONFIG_KEY)).unwrap();
        serde_json::from_str(&content).unwrap()
    }

    #[test]
    fn test_set_counts_saves() {
        let dir = TempDir::new().unwrap();
        let mut extender = open_extender(Some(dir.path()));

        run(
            &mut extender,
            &SettingsAction::Set {
                male: Some(3),
                female: None,
            },
        )
        .unwrap();

        let config = read_config(&dir);
        assert_eq!(config["NumSpritesAddedMale"], 3);
        assert_eq!(config["NumSpritesAddedFemale"], 0);
        // Offsets are provisioned on the next session load, not here
        assert_eq!(config["OffsetsMale"], serde_json::json!([]));
    }

    #[test]
    fn test_set_count_above_limit_fails() {
        let dir = TempDir::new().unwrap();
        let mut extender = open_extender(Some(dir.path()));

        let result = run(
            &mut extender,
            &SettingsAction::Set {
                male: Some(ssx::MAX_SPRITES_ADDED + 1),
                female: None,
            },
        );

        assert!(result.is_err());
        assert_eq!(read_config(&dir)["NumSpritesAddedMale"], 0);
    }

    #[test]
    fn test_reset_saves_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_KEY),
            r#"{"OffsetsMale": [[1, 2]], "NumSpritesAddedMale": 1}"#,
        )
        .unwrap();
        let mut extender = open_extender(Some(dir.path()));

        run(&mut extender, &SettingsAction::Reset).unwrap();

        let config = read_config(&dir);
        assert_eq!(config["NumSpritesAddedMale"], 0);
        assert_eq!(config["OffsetsMale"], serde_json::json!([]));
    }
}
