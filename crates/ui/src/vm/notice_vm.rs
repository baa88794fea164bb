use std::time::Duration;

/// How long a notice stays up before it dismisses itself.
pub const NOTICE_DURATION: Duration = Duration::from_secs(3);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
    Error,
}

impl NoticeKind {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            NoticeKind::Success => "toast toast--success",
            NoticeKind::Info => "toast toast--info",
            NoticeKind::Error => "toast toast--error",
        }
    }
}

/// Identifies one `show` call so a late dismissal cannot hide a newer notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoticeTicket(u64);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub ticket: NoticeTicket,
    pub message: String,
    pub kind: NoticeKind,
}

/// Holds at most one visible notice.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeBoard {
    current: Option<Notice>,
    issued: u64,
}

impl NoticeBoard {
    /// Replace whatever is showing with a new notice.
    pub fn show(&mut self, message: impl Into<String>, kind: NoticeKind) -> NoticeTicket {
        self.issued += 1;
        let ticket = NoticeTicket(self.issued);
        self.current = Some(Notice {
            ticket,
            message: message.into(),
            kind,
        });
        ticket
    }

    /// Hide the notice only if it is still the one identified by `ticket`.
    pub fn dismiss(&mut self, ticket: NoticeTicket) -> bool {
        if self.current.as_ref().is_some_and(|n| n.ticket == ticket) {
            self.current = None;
            return true;
        }
        false
    }

    #[must_use]
    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }
}
