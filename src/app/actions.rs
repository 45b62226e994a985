//! Side effects requested by the event handler.
//!
//! The handler never talks to the host directly. It returns a list of
//! [`Action`]s which the plugin shim executes in order.

use crate::fetch::JokeRequest;

/// Commands executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Sends one joke GET through the host's web request API.
    SendJokeRequest(JokeRequest),

    /// Arms a one-shot host timer that comes back as [`Event::Tick`].
    ///
    /// [`Event::Tick`]: crate::app::Event::Tick
    ScheduleTick {
        /// Delay in seconds.
        seconds: f64,
    },
}
