//! Movement domain: keyboard sampling into movement commands.

use bevy::prelude::*;

use crate::movement::MovementCommand;

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut commands_out: MessageWriter<MovementCommand>,
) {
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }
    commands_out.write(MovementCommand::MoveAxis(x));

    if keyboard.just_pressed(KeyCode::Space) || keyboard.just_pressed(KeyCode::KeyK) {
        commands_out.write(MovementCommand::JumpPressed);
    }
    if keyboard.just_released(KeyCode::Space) || keyboard.just_released(KeyCode::KeyK) {
        commands_out.write(MovementCommand::JumpReleased);
    }
    if keyboard.just_pressed(KeyCode::ShiftLeft) || keyboard.just_pressed(KeyCode::KeyJ) {
        commands_out.write(MovementCommand::DashPressed);
    }
}
