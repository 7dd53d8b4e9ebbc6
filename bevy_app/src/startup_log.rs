// Messages produced while the app is being assembled. LogPlugin installs the subscriber
// only when DefaultPlugins is built, so these are held and replayed in PreStartup.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteLevel {
    Info,
    Warn,
}

#[derive(Resource, Debug, Default)]
pub struct StartupNotes(pub Vec<(NoteLevel, String)>);

impl StartupNotes {
    pub fn info(&mut self, msg: impl Into<String>) {
        self.0.push((NoteLevel::Info, msg.into()));
    }

    pub fn warn(&mut self, msg: impl Into<String>) {
        self.0.push((NoteLevel::Warn, msg.into()));
    }
}

/// Queue `notes` for replay once logging is up.
pub fn add_startup_notes(app: &mut App, notes: StartupNotes) {
    app.insert_resource(notes)
        .add_systems(PreStartup, flush_startup_notes);
}

fn flush_startup_notes(mut notes: ResMut<StartupNotes>) {
    for (level, msg) in notes.0.drain(..) {
        match level {
            NoteLevel::Info => info!("{msg}"),
            NoteLevel::Warn => warn!("{msg}"),
        }
    }
}
