//! Top-level rendering coordinator.
//!
//! Rendering is a three-step pipeline:
//!
//! 1. **View model**: `AppState` → [`UIViewModel`](crate::ui::viewmodel::UIViewModel)
//! 2. **Layout**: view model + pane size → [`Layout`]
//! 3. **Components**: draw each section at its laid-out position
//!
//! The layout is returned so the shim can hit-test the next mouse event
//! against exactly what was drawn.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::layout::Layout;

/// Renders the plugin UI to stdout and returns the layout that was drawn.
pub fn render(state: &AppState, rows: usize, cols: usize) -> Layout {
    let viewmodel = state.compute_viewmodel();
    let layout = Layout::compute(&viewmodel, rows, cols);

    components::render_frame(&viewmodel, &layout, &state.theme);
    layout
}
