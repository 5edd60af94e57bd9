//! Content domain: data-driven movement configuration.

mod data;
mod loader;
#[cfg(test)]
mod tests;
mod validation;

use bevy::prelude::*;
use std::path::Path;

use crate::content::loader::load_movement_config;
use crate::content::validation::{disabled_features, validate_movement_config};
use crate::movement::MovementDefaults;

pub const MOVEMENT_CONFIG_PATH: &str = "assets/data/movement.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_movement_content);
    }
}

/// Load and validate the movement config. A broken config stops the app
/// instead of spawning a controller that silently does nothing.
fn load_movement_content(mut commands: Commands, mut exit: MessageWriter<AppExit>) {
    let file = match load_movement_config(Path::new(MOVEMENT_CONFIG_PATH)) {
        Ok(file) => file,
        Err(e) => {
            error!("{}", e);
            exit.write(AppExit::error());
            return;
        }
    };

    match validate_movement_config(&file) {
        Ok((tuning, probes)) => {
            for feature in disabled_features(&tuning) {
                warn!("Movement feature disabled: {}", feature);
            }
            info!(
                "Movement config loaded from {} (schema v{})",
                MOVEMENT_CONFIG_PATH, file.schema_version
            );
            commands.insert_resource(MovementDefaults { tuning, probes });
        }
        Err(errors) => {
            for e in &errors {
                error!("Invalid movement config: {}", e);
            }
            exit.write(AppExit::error());
        }
    }
}
