/// UI events delivered by the host, targeted at an element id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Text input value changed
    Input { target: String, value: String },
    /// Checkbox toggled
    Change { target: String, checked: bool },
    /// Button clicked
    Click { target: String },
}

impl Event {
    pub fn input(target: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Input {
            target: target.into(),
            value: value.into(),
        }
    }

    pub fn change(target: impl Into<String>, checked: bool) -> Self {
        Self::Change {
            target: target.into(),
            checked,
        }
    }

    pub fn click(target: impl Into<String>) -> Self {
        Self::Click {
            target: target.into(),
        }
    }

    pub fn target(&self) -> &str {
        match self {
            Self::Input { target, .. } | Self::Change { target, .. } | Self::Click { target } => {
                target
            }
        }
    }
}
