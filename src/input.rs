// input.rs - User actions
//
// Four parameterless buttons. Three of them mutate the thermal state; the
// music button only asks the host to start playback.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    AddEnergy,
    AddPressure,
    ResetPressure,
    PlayMusic,
}

/// Side effect the host has to carry out after an action
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    None,
    PlayMusic,
}

impl Action {
    pub const ALL: [Action; 4] = [
        Action::AddEnergy,
        Action::AddPressure,
        Action::ResetPressure,
        Action::PlayMusic,
    ];

    /// Id of the button that triggers this action
    pub fn element_id(self) -> &'static str {
        match self {
            Action::AddEnergy => "add-energy",
            Action::AddPressure => "add-pressure",
            Action::ResetPressure => "undo-pressure",
            Action::PlayMusic => "play-music",
        }
    }
}
