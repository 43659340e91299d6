//! Path routing for the notes front-end.
//!
//! Both `/` and `/Notes` render the notes page. Matching ignores case and a
//! trailing slash.

/// Navigable surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Notes,
}

impl Route {
    pub fn parse(path: &str) -> Option<Self> {
        let trimmed = path.trim();
        let normalized = match trimmed.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => trimmed,
        };

        if normalized == "/" || normalized.eq_ignore_ascii_case("/notes") {
            Some(Self::Notes)
        } else {
            None
        }
    }

    /// Canonical path for this route.
    pub fn path(self) -> &'static str {
        match self {
            Self::Notes => "/Notes",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Route;

    #[test]
    fn root_and_notes_paths_render_notes_page() {
        assert_eq!(Route::parse("/"), Some(Route::Notes));
        assert_eq!(Route::parse("/Notes"), Some(Route::Notes));
        assert_eq!(Route::parse("/notes/"), Some(Route::Notes));
    }

    #[test]
    fn other_paths_do_not_route() {
        assert_eq!(Route::parse("/Folders"), None);
        assert_eq!(Route::parse(""), None);
        assert_eq!(Route::parse("/Notes/1"), None);
    }
}
