#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusKind {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

impl StatusKind {
    pub fn color(self) -> &'static str {
        match self {
            StatusKind::Idle | StatusKind::Sending => "#333",
            StatusKind::Success => "#a8b720", // brand green
            StatusKind::Error => "red",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            StatusKind::Idle => "",
            StatusKind::Sending => "sending",
            StatusKind::Success => "success",
            StatusKind::Error => "error",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
    pub visible: bool,
}

impl StatusMessage {
    pub fn new(kind: StatusKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            visible: true,
        }
    }

    pub fn faded(&self) -> Self {
        Self {
            visible: false,
            ..self.clone()
        }
    }
}

pub trait StatusDisplay {
    fn show(&self, message: StatusMessage);
    fn fade_out(&self);
}
