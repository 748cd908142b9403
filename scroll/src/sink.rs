//! View commands and the output sink.
//!
//! [`view_commands`] flattens a [`DerivedViewState`] into the writes the page
//! needs. A [`ViewSink`] executes them; the browser sink maps each command to
//! a DOM call, tests record them.

#[cfg(test)]
#[path = "sink_test.rs"]
mod sink_test;

use crate::consts::SCROLLED_CLASS;
use crate::state::DerivedViewState;

/// A single write to the page.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewCommand {
    /// Set the progress bar's `width` style.
    ProgressWidth(String),
    /// Set a custom property on the root element.
    RootProperty { name: &'static str, value: String },
    /// Add or remove a class on the header.
    HeaderClass { class: &'static str, enabled: bool },
    /// Mark or unmark the nav link at `index` as the current page.
    NavLink { index: usize, active: bool },
}

/// Receives view commands. Commands aimed at elements the page lacks are
/// dropped by the sink.
pub trait ViewSink {
    fn apply(&mut self, command: &ViewCommand);
}

impl ViewSink for Vec<ViewCommand> {
    fn apply(&mut self, command: &ViewCommand) {
        self.push(command.clone());
    }
}

/// Commands that bring the page in line with `state`, in a fixed order:
/// progress, header, parallax, nav links.
#[must_use]
pub fn view_commands(state: &DerivedViewState) -> Vec<ViewCommand> {
    let mut commands = Vec::with_capacity(6 + state.nav_link_active.len());
    commands.push(ViewCommand::ProgressWidth(state.progress_width()));
    commands.push(ViewCommand::HeaderClass { class: SCROLLED_CLASS, enabled: state.is_scrolled });
    for (name, value) in state.parallax.css_properties() {
        commands.push(ViewCommand::RootProperty { name, value });
    }
    for (index, active) in state.nav_link_active.iter().enumerate() {
        commands.push(ViewCommand::NavLink { index, active: *active });
    }
    commands
}
