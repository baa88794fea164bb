mod course_vm;
mod markdown_vm;
mod notice_vm;
mod progress_vm;

pub use course_vm::{LessonCardVm, WeekCardVm, map_week_cards};
pub use markdown_vm::{markdown_to_html, sanitize_html};
pub use notice_vm::{NOTICE_DURATION, Notice, NoticeBoard, NoticeKind, NoticeTicket};
pub use progress_vm::{ProgressVm, WeekProgressVm, map_week_progress};
