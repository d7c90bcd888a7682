/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MouseButton {
    #[default]
    Left,
    Right,
    Middle,
}

/// Click event targeted at an element.
///
/// Listeners may cancel the default action or stop the event from bubbling
/// further up the tree. Both flags are sticky for the rest of the dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    target: String,
    current_target: Option<String>,
    pub button: MouseButton,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl ClickEvent {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            current_target: None,
            button: MouseButton::Left,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    pub fn button(mut self, button: MouseButton) -> Self {
        self.button = button;
        self
    }

    /// ID of the element that was clicked.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// ID of the element whose listeners are running, None at document level.
    pub fn current_target(&self) -> Option<&str> {
        self.current_target.as_deref()
    }

    pub(crate) fn set_current_target(&mut self, id: Option<String>) {
        self.current_target = id;
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}
