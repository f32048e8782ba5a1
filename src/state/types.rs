//! Core value types shared between the search worker, logic and UI.

use serde::Deserialize;

/// Kind of catalogue entry returned by the search endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResultKind {
    /// A whole course ("formation").
    Course,
    /// A module belonging to a course.
    Module,
    /// A content element inside a module.
    Content,
}

impl ResultKind {
    /// Short badge text shown in front of a result row.
    #[must_use]
    pub const fn badge(self) -> &'static str {
        match self {
            Self::Course => "COURS",
            Self::Module => "MODULE",
            Self::Content => "CONTENU",
        }
    }
}

/// Type-specific part of a [`SearchResult`], tagged by the wire `type` field.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ResultDetail {
    /// Course hit.
    Course {
        /// Number of modules in the course, when the server sends it.
        #[serde(default)]
        module_count: Option<u32>,
    },
    /// Module hit.
    Module {
        /// Parent course id; required for navigation but may be absent.
        #[serde(default)]
        course_id: Option<u64>,
        /// Parent course title.
        #[serde(default)]
        course_title: Option<String>,
        /// Number of content elements in the module.
        #[serde(default)]
        element_count: Option<u32>,
    },
    /// Content element hit.
    Content {
        /// Course the content belongs to.
        #[serde(default)]
        course_id: Option<u64>,
        /// Module the content belongs to.
        #[serde(default)]
        module_id: Option<u64>,
        /// Title of the owning course.
        #[serde(default)]
        course_title: Option<String>,
        /// Title of the owning module.
        #[serde(default)]
        module_title: Option<String>,
        /// Server-side content type label (video, quiz, ...).
        #[serde(default)]
        content_type: Option<String>,
    },
}

/// One row returned by `GET /api/search/`.
///
/// Common fields live on the struct; everything that only makes sense for a
/// given kind lives in [`ResultDetail`]. Rows are validated one by one when the
/// payload is parsed, so a `SearchResult` always carries an id and a kind.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SearchResult {
    /// Identifier, unique within a kind.
    pub id: u64,
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// Optional free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Author of the course/module.
    #[serde(default)]
    pub creator: Option<String>,
    /// Raw publication status code.
    #[serde(default)]
    pub status: Option<i64>,
    /// Human label for `status`.
    #[serde(default)]
    pub status_display: Option<String>,
    /// Kind-specific fields.
    #[serde(flatten)]
    pub detail: ResultDetail,
}

impl SearchResult {
    /// Kind of this result.
    #[must_use]
    pub const fn kind(&self) -> ResultKind {
        match self.detail {
            ResultDetail::Course { .. } => ResultKind::Course,
            ResultDetail::Module { .. } => ResultKind::Module,
            ResultDetail::Content { .. } => ResultKind::Content,
        }
    }

    /// Id of the course page this result leads to, if known.
    ///
    /// Courses lead to themselves; modules and contents to their parent course.
    #[must_use]
    pub const fn target_course_id(&self) -> Option<u64> {
        match self.detail {
            ResultDetail::Course { .. } => Some(self.id),
            ResultDetail::Module { course_id, .. } | ResultDetail::Content { course_id, .. } => {
                course_id
            }
        }
    }
}

/// Category filter chip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Category {
    /// No filtering; courses then modules.
    #[default]
    All,
    /// Courses only.
    Course,
    /// Modules only.
    Module,
}

impl Category {
    /// Chips in display order.
    pub const ALL: [Self; 3] = [Self::All, Self::Course, Self::Module];

    /// Value of the `type` query parameter; empty means unfiltered.
    #[must_use]
    pub const fn as_type_param(self) -> &'static str {
        match self {
            Self::All => "",
            Self::Course => "course",
            Self::Module => "module",
        }
    }

    /// Chip label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "Tout",
            Self::Course => "Formations",
            Self::Module => "Modules",
        }
    }

    /// Next chip, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::All => Self::Course,
            Self::Course => Self::Module,
            Self::Module => Self::All,
        }
    }

    /// Previous chip, wrapping around.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::All => Self::Module,
            Self::Course => Self::All,
            Self::Module => Self::Course,
        }
    }

    /// Whether the courses group is shown under this filter.
    #[must_use]
    pub const fn shows_courses(self) -> bool {
        matches!(self, Self::All | Self::Course)
    }

    /// Whether the modules group is shown under this filter.
    #[must_use]
    pub const fn shows_modules(self) -> bool {
        matches!(self, Self::All | Self::Module)
    }
}

/// Search query sent to the background search worker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryInput {
    /// Monotonic identifier used to correlate responses.
    pub id: u64,
    /// Raw query text entered by the user.
    pub text: String,
    /// Active category filter.
    pub category: Category,
}

/// Messages emitted by the search worker for a prior [`QueryInput`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchEvent {
    /// The debounce window elapsed and the request was sent.
    Dispatched {
        /// Echoed query id.
        id: u64,
    },
    /// The request succeeded.
    Completed {
        /// Echoed query id.
        id: u64,
        /// Results in server order.
        items: Vec<SearchResult>,
    },
    /// The request failed; the error has already been logged.
    Failed {
        /// Echoed query id.
        id: u64,
        /// Human-readable failure reason.
        error: String,
    },
}

impl SearchEvent {
    /// Query id this event belongs to.
    #[must_use]
    pub const fn id(&self) -> u64 {
        match self {
            Self::Dispatched { id } | Self::Completed { id, .. } | Self::Failed { id, .. } => *id,
        }
    }
}

/// Default navigation target produced by result activation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    /// Course detail page.
    CourseDetail {
        /// Course id.
        course_id: u64,
    },
}

impl Route {
    /// Path of the route on the web front end.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::CourseDetail { course_id } => format!("/courses/{course_id}"),
        }
    }
}
