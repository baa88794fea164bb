use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use crate::model::ids::{LessonId, LessonIdError};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CourseError {
    #[error("invalid course file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("week {week}, lesson {lesson}: {source}")]
    InvalidLessonId {
        week: usize,
        lesson: usize,
        #[source]
        source: LessonIdError,
    },

    #[error("week {week}, lesson {lesson}: title cannot be empty")]
    EmptyLessonTitle { week: usize, lesson: usize },

    #[error("duplicate lesson id: {0}")]
    DuplicateLessonId(LessonId),
}

//
// ─── DRAFTS ────────────────────────────────────────────────────────────────────
//

/// Course structure as written in a course file, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDraft {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub total_lessons: Option<u32>,
    #[serde(default)]
    pub weeks: Vec<WeekDraft>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeekDraft {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub lessons: Vec<LessonDraft>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LessonDraft {
    /// Stable slug. Lessons without one fall back to a positional id.
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub icon: Option<String>,
}

impl CourseDraft {
    /// Validate the draft, resolving every lesson to a unique `LessonId`.
    ///
    /// # Errors
    ///
    /// Returns `CourseError` if a slug is invalid, a title is empty, or two
    /// lessons resolve to the same id.
    pub fn validate(self) -> Result<Course, CourseError> {
        let mut seen = HashSet::new();
        let mut weeks = Vec::with_capacity(self.weeks.len());

        for (week_idx, week) in self.weeks.into_iter().enumerate() {
            let week_no = week_idx + 1;
            let mut lessons = Vec::with_capacity(week.lessons.len());

            for (lesson_idx, lesson) in week.lessons.into_iter().enumerate() {
                let lesson_no = lesson_idx + 1;
                let id = match normalize_optional(lesson.id) {
                    Some(slug) => {
                        LessonId::new(slug).map_err(|source| CourseError::InvalidLessonId {
                            week: week_no,
                            lesson: lesson_no,
                            source,
                        })?
                    }
                    None => LessonId::positional(week_no, lesson_no),
                };
                if !seen.insert(id.clone()) {
                    return Err(CourseError::DuplicateLessonId(id));
                }

                let title = lesson.title.trim().to_string();
                if title.is_empty() {
                    return Err(CourseError::EmptyLessonTitle {
                        week: week_no,
                        lesson: lesson_no,
                    });
                }

                lessons.push(Lesson {
                    id,
                    title,
                    icon: normalize_optional(lesson.icon),
                });
            }

            weeks.push(Week {
                label: normalize_optional(week.label).unwrap_or_else(|| format!("Week {week_no}")),
                title: normalize_optional(week.title),
                description: normalize_optional(week.description),
                lessons,
            });
        }

        Ok(Course {
            title: normalize_optional(self.title).unwrap_or_else(|| "Learn AI".to_string()),
            configured_total: self.total_lessons,
            weeks,
        })
    }
}

//
// ─── COURSE ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    id: LessonId,
    title: String,
    icon: Option<String>,
}

impl Lesson {
    #[must_use]
    pub fn id(&self) -> &LessonId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Week {
    label: String,
    title: Option<String>,
    description: Option<String>,
    lessons: Vec<Lesson>,
}

impl Week {
    /// Short label used in per-week breakdowns, e.g. "Week 1".
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Markdown description shown on the week card.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }
}

/// Validated course structure: ordered weeks, each holding ordered lessons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    title: String,
    configured_total: Option<u32>,
    weeks: Vec<Week>,
}

impl Course {
    /// Parse and validate a JSON course file.
    ///
    /// # Errors
    ///
    /// Returns `CourseError` if the JSON is malformed or fails validation.
    pub fn from_json(input: &str) -> Result<Self, CourseError> {
        let draft: CourseDraft = serde_json::from_str(input)?;
        draft.validate()
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    /// All lessons in document order.
    pub fn lessons(&self) -> impl Iterator<Item = &Lesson> {
        self.weeks.iter().flat_map(|week| week.lessons.iter())
    }

    #[must_use]
    pub fn lesson_count(&self) -> usize {
        self.weeks.iter().map(|week| week.lessons.len()).sum()
    }

    /// Total declared by the course file, if any.
    #[must_use]
    pub fn configured_total(&self) -> Option<u32> {
        self.configured_total
    }
}

//
// ─── TOTALS ────────────────────────────────────────────────────────────────────
//

/// How the denominator of the overall percentage is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LessonTotal {
    /// Static configuration. May drift from the rendered lesson count.
    Fixed(u32),
    /// Course file `totalLessons` if present, otherwise the counted lessons.
    #[default]
    Derived,
}

impl LessonTotal {
    #[must_use]
    pub fn resolve(self, course: &Course) -> u32 {
        match self {
            LessonTotal::Fixed(total) => total,
            LessonTotal::Derived => course
                .configured_total()
                .unwrap_or_else(|| u32::try_from(course.lesson_count()).unwrap_or(u32::MAX)),
        }
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}
