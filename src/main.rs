//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the joke sorter library and the Zellij
//! plugin API. It translates host events into library [`Event`]s, runs them
//! through `handle_event`, and performs the returned actions with host calls.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, build `AppState` (loads sorted jokes)
//! 2. **Subscribe**: Key, Mouse, Timer, `WebRequestResult`, `PermissionRequestResult`
//! 3. **Permission granted**: first joke batch is requested and the 1 s tick starts
//! 4. **Update**: Translate events, delegate to the library, execute actions
//! 5. **Render**: Draw the frame and keep its layout for mouse hit testing
//!
//! # Event Mapping
//!
//! - `Mouse(LeftClick)` on a card → `BeginDrag`, on a button → its event
//! - `Mouse(Hold)` over a zone while dragging → `HoverZone` / `LeaveZone`
//! - `Mouse(Release)` → `Drop` over a zone, `EndDrag` elsewhere
//! - `WebRequestResult` tagged as ours → `JokeResponse`
//! - `Timer` → `Tick`
//!
//! # Keybindings
//!
//! - `j`/`Down`, `k`/`Up`: Move the card cursor
//! - `l`/`1`: Sort the selected card as "Loved It!"
//! - `x`/`2`: Sort the selected card as "Not Funny"
//! - `u`: Undo the last sort
//! - `r`: Load new jokes (ignored while loading)
//! - `Tab`/`f`: Toggle the loved-only filter
//! - `a`: Show all sorted jokes
//! - `Esc`: Cancel a drag
//! - `q`: Close plugin

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_family = "wasm")]
use zellij_tile::prelude::*;

#[cfg(target_family = "wasm")]
use plugin::State;

#[cfg(target_family = "wasm")]
register_plugin!(State);

#[cfg(not(target_family = "wasm"))]
fn main() {
    eprintln!("joke-sorter is a Zellij plugin: build it for wasm32-wasip1 and load it from a layout");
}

#[cfg(target_family = "wasm")]
mod plugin {
    use std::collections::BTreeMap;
    use zellij_tile::prelude::*;

    use joke_sorter::fetch::JokeResponse;
    use joke_sorter::ui::{translate, Layout, Pointer};
    use joke_sorter::{handle_event, Action, AppState, Config, Event, Filter, Reaction};

    /// Plugin state wrapper.
    pub struct State {
        /// Core application state from the library layer.
        app: AppState,

        /// Layout of the last rendered frame, used to hit-test mouse events.
        layout: Option<Layout>,
    }

    impl Default for State {
        fn default() -> Self {
            Self {
                app: joke_sorter::initialize(&Config::default()),
                layout: None,
            }
        }
    }

    impl ZellijPlugin for State {
        fn load(&mut self, configuration: BTreeMap<String, String>) {
            let config = Config::from_zellij(&configuration);
            joke_sorter::observability::init_tracing(&config);

            let _guard = tracing::debug_span!("plugin_load").entered();

            tracing::debug!(endpoint = %config.endpoint, data_dir = ?config.data_dir(), "parsed configuration");
            self.app = joke_sorter::initialize(&config);

            request_permission(&[PermissionType::WebAccess]);
            subscribe(&[
                EventType::Key,
                EventType::Mouse,
                EventType::Timer,
                EventType::WebRequestResult,
                EventType::PermissionRequestResult,
            ]);

            tracing::debug!("plugin load complete - waiting for permissions");
        }

        fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
            let event_name = Self::get_event_name(&event);
            let _guard = tracing::debug_span!("plugin_update_event", event_type = %event_name).entered();

            let our_event = match event {
                zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                    Some(event) => event,
                    None => return false,
                },
                zellij_tile::prelude::Event::Mouse(mouse) => match self.map_mouse_event(mouse) {
                    Some(event) => event,
                    None => return false,
                },
                zellij_tile::prelude::Event::Timer(_) => Event::Tick,
                zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                    if !JokeResponse::is_ours(&context) {
                        tracing::debug!(status, "ignoring foreign web request result");
                        return false;
                    }
                    Event::JokeResponse(JokeResponse { status, body, context })
                }
                zellij_tile::prelude::Event::PermissionRequestResult(status) => match status {
                    PermissionStatus::Granted => Event::PermissionsGranted,
                    PermissionStatus::Denied => {
                        tracing::warn!("web access denied - no jokes can be loaded");
                        return false;
                    }
                },
                _ => return false,
            };

            match handle_event(&mut self.app, &our_event) {
                Ok((should_render, actions)) => {
                    tracing::debug!(action_count = actions.len(), should_render, "event handled");
                    for action in &actions {
                        Self::execute_action(action);
                    }
                    should_render
                }
                Err(e) => {
                    tracing::warn!(error = %e, "error handling event");
                    false
                }
            }
        }

        fn render(&mut self, rows: usize, cols: usize) {
            self.layout = Some(joke_sorter::ui::render(&self.app, rows, cols));
        }
    }

    impl State {
        fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
            match event {
                zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
                zellij_tile::prelude::Event::Mouse(mouse) => format!("Mouse({mouse:?})"),
                zellij_tile::prelude::Event::Timer(_) => "Timer".to_string(),
                zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                    format!("WebRequestResult({status})")
                }
                zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                    "PermissionRequestResult".to_string()
                }
                _ => "Other".to_string(),
            }
        }

        fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
            if !key.has_no_modifiers() {
                return None;
            }

            Some(match key.bare_key {
                BareKey::Down | BareKey::Char('j') => Event::KeyDown,
                BareKey::Up | BareKey::Char('k') => Event::KeyUp,
                BareKey::Char('l' | '1') => Event::SortSelected(Reaction::Loved),
                BareKey::Char('x' | '2') => Event::SortSelected(Reaction::NotFunny),
                BareKey::Char('u') => Event::Undo,
                BareKey::Char('r') if !self.app.is_loading() => Event::RequestFetch,
                BareKey::Tab | BareKey::Char('f') => Event::ToggleFilter,
                BareKey::Char('a') => Event::SetFilter(Filter::All),
                BareKey::Esc => Event::EndDrag,
                BareKey::Char('q') => Event::CloseFocus,
                _ => return None,
            })
        }

        fn map_mouse_event(&self, mouse: Mouse) -> Option<Event> {
            let pointer = match mouse {
                Mouse::LeftClick(line, column) => Pointer::Press { line, column },
                Mouse::Hold(line, column) => Pointer::Hold { line, column },
                Mouse::Release(line, column) => Pointer::Release { line, column },
                _ => return None,
            };
            let layout = self.layout.as_ref()?;
            translate(layout, self.app.drag_session(), pointer)
        }

        #[tracing::instrument(level = "debug")]
        fn execute_action(action: &Action) {
            match action {
                Action::CloseFocus => hide_self(),
                Action::SendJokeRequest(request) => web_request(
                    &request.url,
                    HttpVerb::Get,
                    request.headers.clone(),
                    Vec::new(),
                    request.context.clone(),
                ),
                Action::ScheduleTick { seconds } => set_timeout(*seconds),
            }
        }
    }
}
