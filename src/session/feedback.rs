use log::debug;
use serde::{Deserialize, Serialize};

/// A sound the frontend plays at a point of the capture flow
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Cue {
    Throw,
    Shake,
    Success,
    Fail,
    Shiny,
}

/// Something that can play feedback cues
pub trait Feedback {
    fn play(&mut self, cue: Cue);
}

/// Records cues so they can be sent to the browser with the response
impl Feedback for Vec<Cue> {
    fn play(&mut self, cue: Cue) {
        debug!("Cue {:?}", cue);
        self.push(cue);
    }
}
