/// Screens reachable by path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Assessments,
    /// `/track-exam/{assessment_id}`
    TrackExam { assessment_id: String },
    NotFound,
}

const TRACK_EXAM_PREFIX: &str = "track-exam";

impl Route {
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Assessments,
            [prefix, id] if *prefix == TRACK_EXAM_PREFIX => Route::TrackExam {
                assessment_id: (*id).to_string(),
            },
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Assessments => "/".to_string(),
            Route::TrackExam { assessment_id } => {
                format!("/{}/{}", TRACK_EXAM_PREFIX, assessment_id)
            }
            Route::NotFound => "/not-found".to_string(),
        }
    }
}
