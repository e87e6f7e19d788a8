//! Redirect triggers: walk into one to open a link and move on to another level.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use super::data::CurrentLevel;
use crate::core::{GameState, SceneRedirectEvent};
use crate::player::{Captured, Player};

/// Trigger volume data; lives next to a rapier `Sensor` collider.
#[derive(Component, Clone, Debug)]
pub struct SceneRedirect {
    pub url: String,
    pub next_level: Option<String>,
}

/// Links handed off to the outside world, oldest first.
#[derive(Resource, Default, Debug)]
pub struct OpenedLinks(pub Vec<String>);

/// Turn player/trigger contacts into redirect events.
pub fn detect_redirect_entry(
    mut collisions: EventReader<CollisionEvent>,
    redirect_query: Query<&SceneRedirect>,
    player_query: Query<(), (With<Player>, Without<Captured>)>,
    mut redirects: EventWriter<SceneRedirectEvent>,
) {
    for collision in collisions.read() {
        let CollisionEvent::Started(a, b, _) = collision else {
            continue;
        };

        for (trigger, other) in [(*a, *b), (*b, *a)] {
            let Ok(redirect) = redirect_query.get(trigger) else {
                continue;
            };
            if player_query.contains(other) {
                redirects.send(SceneRedirectEvent {
                    url: redirect.url.clone(),
                    next_level: redirect.next_level.clone(),
                });
            }
        }
    }
}

/// Open the link, then load the next level if one is named.
pub fn apply_scene_redirect(
    mut redirects: EventReader<SceneRedirectEvent>,
    mut opened_links: ResMut<OpenedLinks>,
    mut current_level: ResMut<CurrentLevel>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for redirect in redirects.read() {
        info!("Opening link: {}", redirect.url);
        opened_links.0.push(redirect.url.clone());

        match redirect.next_level.as_deref().filter(|name| !name.is_empty()) {
            Some(next) => {
                info!("Redirecting to level '{}'", next);
                current_level.name = next.to_string();
                next_state.set(GameState::LevelTransition);
            }
            None => error!("Next level name is not specified!"),
        }
    }
}
