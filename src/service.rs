use std::fmt;

/// Which of the two services a process is running.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ServiceKind {
    Movie,
    Cast,
}

impl ServiceKind {
    /// Name reported by the health endpoint, e.g. `movie-service`.
    pub fn name(self) -> &'static str {
        match self {
            ServiceKind::Movie => "movie-service",
            ServiceKind::Cast => "cast-service",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ServiceKind::Movie => "Movie Service",
            ServiceKind::Cast => "Cast Service",
        }
    }

    /// Versioned route prefix the CRUD endpoints live under.
    pub fn prefix(self) -> &'static str {
        match self {
            ServiceKind::Movie => "/api/v1/movies",
            ServiceKind::Cast => "/api/v1/casts",
        }
    }

    pub fn docs_path(self) -> String {
        format!("{}/docs", self.prefix())
    }

    pub fn entity(self) -> &'static str {
        match self {
            ServiceKind::Movie => "Movie",
            ServiceKind::Cast => "Cast",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
