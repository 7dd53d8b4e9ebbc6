//! Text readouts, landing log panel and the clear button.
// Bevy 0.16 text API uses components: Text, TextFont, TextColor, Node for UI text.

use bevy::prelude::*;
use seesaw_core::SimulationRes;
use seesaw_physics::CurrentReadout;

use crate::palette::Palette;

/// Which readout a text node shows.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadoutText {
    Left,
    Right,
    Tilt,
}

#[derive(Component, Debug)]
pub struct LogPanelText;

/// Marker for the button that empties the seesaw.
#[derive(Component, Debug)]
pub struct ClearButton;

pub(crate) fn spawn_hud(mut commands: Commands) {
    let readouts = [
        (ReadoutText::Left, "Left: 0", 10.0),
        (ReadoutText::Right, "Right: 0", 130.0),
        (ReadoutText::Tilt, "Tilt: 0°", 250.0),
    ];
    for (kind, initial, left) in readouts {
        commands.spawn((
            Text::new(initial),
            TextFont {
                font_size: 18.0,
                ..Default::default()
            },
            TextColor(Palette::TEXT),
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(8.0),
                left: Val::Px(left),
                ..Default::default()
            },
            kind,
        ));
    }

    // Landing log, newest first, along the right edge.
    commands.spawn((
        Text::new(String::new()),
        TextFont {
            font_size: 11.0,
            ..Default::default()
        },
        TextColor(Palette::LOG_TEXT),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(40.0),
            right: Val::Px(8.0),
            max_height: Val::Percent(90.0),
            overflow: Overflow::clip(),
            ..Default::default()
        },
        LogPanelText,
    ));

    commands
        .spawn((
            Button,
            ClearButton,
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(6.0),
                right: Val::Px(8.0),
                padding: UiRect::axes(Val::Px(12.0), Val::Px(4.0)),
                ..Default::default()
            },
            BackgroundColor(Palette::BUTTON),
        ))
        .with_children(|p| {
            p.spawn((
                Text::new("Clear"),
                TextFont {
                    font_size: 16.0,
                    ..Default::default()
                },
                TextColor(Palette::BUTTON_TEXT),
            ));
        });
}

pub(crate) fn update_readout_text(readout: Res<CurrentReadout>, mut q: Query<(&mut Text, &ReadoutText)>) {
    if !readout.is_changed() {
        return;
    }
    let r = readout.0;
    for (mut text, kind) in &mut q {
        let s = match kind {
            ReadoutText::Left => r.left_text(),
            ReadoutText::Right => r.right_text(),
            ReadoutText::Tilt => r.tilt_text(),
        };
        if text.0 != s {
            text.0 = s;
        }
    }
}

pub(crate) fn update_log_panel(sim: Option<Res<SimulationRes>>, mut q: Query<&mut Text, With<LogPanelText>>) {
    let Some(sim) = sim else { return };
    let Ok(mut text) = q.single_mut() else { return };
    let lines: Vec<String> = sim.log().iter().rev().map(ToString::to_string).collect();
    let s = lines.join("\n");
    if text.0 != s {
        text.0 = s;
    }
}
