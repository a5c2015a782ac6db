//! Hash-based routing (`#/dashboard`, `#/teams?projectId=2`, …).

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Signup,
    ForgotPassword,
    Dashboard,
    Teams {
        project_id: Option<String>,
        new_project: bool,
    },
    Projects,
    Workflows,
    WorkflowEditor,
    Assets,
    Scripts,
    Plugins,
}

impl Route {
    pub fn teams() -> Self {
        Route::Teams {
            project_id: None,
            new_project: false,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Login => "/login".into(),
            Route::Signup => "/signup".into(),
            Route::ForgotPassword => "/forgot-password".into(),
            Route::Dashboard => "/dashboard".into(),
            Route::Teams {
                project_id: Some(id),
                ..
            } => format!("/teams?projectId={}", crate::utils::encode_query_component(id)),
            Route::Teams {
                new_project: true,
                ..
            } => "/teams?new=true".into(),
            Route::Teams { .. } => "/teams".into(),
            Route::Projects => "/projects".into(),
            Route::Workflows => "/workflows".into(),
            Route::WorkflowEditor => "/workflow-editor".into(),
            Route::Assets => "/assets".into(),
            Route::Scripts => "/scripts".into(),
            Route::Plugins => "/plugins".into(),
        }
    }

    pub fn hash(&self) -> String {
        format!("#{}", self.path())
    }

    /// Parse `location.hash`.  Empty and unknown paths land on the dashboard.
    pub fn from_hash(hash: &str) -> Self {
        let raw = hash.trim_start_matches('#');
        let (path, query) = raw.split_once('?').unwrap_or((raw, ""));
        let param = |name: &str| {
            query
                .split('&')
                .filter_map(|pair| pair.split_once('='))
                .find(|(k, _)| *k == name)
                .map(|(_, v)| v.to_string())
        };
        match path.trim_end_matches('/') {
            "/login" => Route::Login,
            "/signup" => Route::Signup,
            "/forgot-password" => Route::ForgotPassword,
            "/teams" => Route::Teams {
                project_id: param("projectId").filter(|v| !v.is_empty()),
                new_project: param("new").as_deref() == Some("true"),
            },
            "/projects" => Route::Projects,
            "/workflows" => Route::Workflows,
            "/workflow-editor" => Route::WorkflowEditor,
            "/assets" => Route::Assets,
            "/scripts" => Route::Scripts,
            "/plugins" => Route::Plugins,
            _ => Route::Dashboard,
        }
    }

    pub fn is_auth_page(&self) -> bool {
        matches!(self, Route::Login | Route::Signup | Route::ForgotPassword)
    }

    pub fn requires_auth(&self) -> bool {
        !self.is_auth_page()
    }

    /// Pages rendered inside the sidebar shell.
    pub fn uses_shell(&self) -> bool {
        matches!(
            self,
            Route::Dashboard
                | Route::Projects
                | Route::Workflows
                | Route::Assets
                | Route::Scripts
                | Route::Plugins
        )
    }

    /// Same page, ignoring query parameters.
    pub fn same_page(&self, other: &Route) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

/// Where a navigation actually ends up given the session.
pub fn guard(route: Route, has_token: bool) -> Route {
    if route.requires_auth() && !has_token {
        Route::Login
    } else {
        route
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_paths() {
        assert_eq!(Route::from_hash("#/login"), Route::Login);
        assert_eq!(Route::from_hash("#/forgot-password"), Route::ForgotPassword);
        assert_eq!(Route::from_hash("#/workflow-editor"), Route::WorkflowEditor);
        assert_eq!(Route::from_hash("#/plugins/"), Route::Plugins);
    }

    #[test]
    fn unknown_and_empty_fall_back_to_dashboard() {
        assert_eq!(Route::from_hash(""), Route::Dashboard);
        assert_eq!(Route::from_hash("#/nope"), Route::Dashboard);
    }

    #[test]
    fn teams_query() {
        assert_eq!(
            Route::from_hash("#/teams?projectId=2"),
            Route::Teams {
                project_id: Some("2".into()),
                new_project: false
            }
        );
        let fresh = Route::from_hash("#/teams?new=true");
        assert_eq!(fresh.path(), "/teams?new=true");
        assert!(fresh.same_page(&Route::teams()));
    }

    #[test]
    fn hash_round_trip() {
        for r in [Route::Signup, Route::Assets, Route::Scripts, Route::teams()] {
            assert_eq!(Route::from_hash(&r.hash()), r);
        }
    }

    #[test]
    fn guard_redirects_without_token() {
        assert_eq!(guard(Route::Assets, false), Route::Login);
        assert_eq!(guard(Route::Assets, true), Route::Assets);
        assert_eq!(guard(Route::Signup, false), Route::Signup);
    }
}
