//! What happens to the player once an enemy reaches them.

use bevy::prelude::*;
use bevy_kira_audio::{Audio, AudioControl};

use super::components::{Captured, Player};
use crate::core::{GameState, JumpscareEvent};

/// Sound played when the player gets caught.
const JUMPSCARE_STING: &str = "audio/jumpscare.ogg";

/// Take the caught player out of play and end the run.
pub fn handle_jumpscare(
    mut commands: Commands,
    mut jumpscares: EventReader<JumpscareEvent>,
    mut player_query: Query<&mut Visibility, (With<Player>, Without<Captured>)>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for event in jumpscares.read() {
        info!("Jumpscare!");

        let Ok(mut visibility) = player_query.get_mut(event.target) else {
            continue;
        };

        *visibility = Visibility::Hidden;
        commands.entity(event.target).insert(Captured);
        next_state.set(GameState::GameOver);
    }
}

/// Play the jumpscare sting once per frame that has a jumpscare.
pub fn play_jumpscare_sting(
    mut jumpscares: EventReader<JumpscareEvent>,
    audio: Res<Audio>,
    asset_server: Res<AssetServer>,
) {
    if jumpscares.read().count() > 0 {
        audio.play(asset_server.load(JUMPSCARE_STING));
    }
}
