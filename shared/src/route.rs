//! Route table
//!
//! Maps URL paths onto the three views of the front end:
//!
//! | Path                 | Name           | View           |
//! |----------------------|----------------|----------------|
//! | `/`                  | `Home`         | `Home`         |
//! | `/employees`         | `EmployeeList` | `EmployeeList` |
//! | `/add-employee`      | `AddEmployee`  | `AddEmployee`  |
//! | `/edit-employee/:id` | `EditEmployee` | `AddEmployee`  |
//!
//! Anything else resolves to [`Route::NotFound`].

use crate::models::{EmployeeId, parse_id};
use std::fmt;
use std::str::FromStr;

/// View components a route can render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Home,
    EmployeeList,
    /// Employee form, used for both create and edit
    AddEmployee,
}

impl View {
    pub const fn as_str(&self) -> &'static str {
        match self {
            View::Home => "Home",
            View::EmployeeList => "EmployeeList",
            View::AddEmployee => "AddEmployee",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Route names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteName {
    Home,
    EmployeeList,
    AddEmployee,
    EditEmployee,
}

impl RouteName {
    pub const ALL: [RouteName; 4] = [
        RouteName::Home,
        RouteName::EmployeeList,
        RouteName::AddEmployee,
        RouteName::EditEmployee,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            RouteName::Home => "Home",
            RouteName::EmployeeList => "EmployeeList",
            RouteName::AddEmployee => "AddEmployee",
            RouteName::EditEmployee => "EditEmployee",
        }
    }

    /// Path pattern; `:id` marks the parameter segment
    pub const fn pattern(&self) -> &'static str {
        match self {
            RouteName::Home => "/",
            RouteName::EmployeeList => "/employees",
            RouteName::AddEmployee => "/add-employee",
            RouteName::EditEmployee => "/edit-employee/:id",
        }
    }

    pub const fn view(&self) -> View {
        match self {
            RouteName::Home => View::Home,
            RouteName::EmployeeList => View::EmployeeList,
            RouteName::AddEmployee | RouteName::EditEmployee => View::AddEmployee,
        }
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unknown route name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown route name: {0}")]
pub struct UnknownRouteName(pub String);

impl FromStr for RouteName {
    type Err = UnknownRouteName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RouteName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| UnknownRouteName(s.to_string()))
    }
}

/// How the employee form is opened
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    /// `id` is the raw path segment, handed to the view as a prop
    Edit { id: String },
}

/// A resolved route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    EmployeeList,
    AddEmployee,
    EditEmployee { id: String },
    /// Catch-all for paths outside the table
    NotFound { path: String },
}

impl Route {
    pub fn name(&self) -> Option<RouteName> {
        match self {
            Route::Home => Some(RouteName::Home),
            Route::EmployeeList => Some(RouteName::EmployeeList),
            Route::AddEmployee => Some(RouteName::AddEmployee),
            Route::EditEmployee { .. } => Some(RouteName::EditEmployee),
            Route::NotFound { .. } => None,
        }
    }

    pub fn view(&self) -> Option<View> {
        self.name().map(|name| name.view())
    }

    /// Form mode for the `AddEmployee` view
    pub fn form_mode(&self) -> Option<FormMode> {
        match self {
            Route::AddEmployee => Some(FormMode::Create),
            Route::EditEmployee { id } => Some(FormMode::Edit { id: id.clone() }),
            _ => None,
        }
    }

    /// Employee id bound from the path, coerced to an integer
    pub fn employee_id(&self) -> Option<EmployeeId> {
        match self {
            Route::EditEmployee { id } => parse_id(id),
            _ => None,
        }
    }

    /// Canonical path of this route (no base)
    pub fn path(&self) -> String {
        match self {
            Route::EditEmployee { id } => format!("/edit-employee/{id}"),
            Route::NotFound { path } => path.clone(),
            other => other
                .name()
                .map(|name| name.pattern().to_string())
                .unwrap_or_default(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Route::NotFound { .. })
    }

    fn from_match(name: RouteName, param: Option<&str>) -> Self {
        match name {
            RouteName::Home => Route::Home,
            RouteName::EmployeeList => Route::EmployeeList,
            RouteName::AddEmployee => Route::AddEmployee,
            RouteName::EditEmployee => Route::EditEmployee {
                id: param.unwrap_or_default().to_string(),
            },
        }
    }
}

/// History-mode router over the static route table
#[derive(Debug, Clone, Default)]
pub struct Router {
    base: String,
}

impl Router {
    /// Router mounted at `/`
    pub fn new() -> Self {
        Self::default()
    }

    /// Router mounted under a base path (e.g. `/app/`)
    pub fn with_base(base: impl AsRef<str>) -> Self {
        let base = base.as_ref().trim_end_matches('/');
        let base = if base.is_empty() || base.starts_with('/') {
            base.to_string()
        } else {
            format!("/{base}")
        };
        Self { base }
    }

    pub fn base(&self) -> &str {
        if self.base.is_empty() { "/" } else { &self.base }
    }

    /// Resolve a URL (path, optionally with query and fragment) to a route
    pub fn resolve(&self, url: &str) -> Route {
        let path = url
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let path = self.strip_base(path);
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        for name in RouteName::ALL {
            if let Some(param) = match_pattern(name.pattern(), &segments) {
                return Route::from_match(name, param);
            }
        }

        tracing::debug!(path = %url, "No route matched");
        Route::NotFound {
            path: url.to_string(),
        }
    }

    /// Resolve a route by name; `id` is required for `EditEmployee`
    pub fn by_name(&self, name: RouteName, id: Option<&str>) -> Option<Route> {
        match (name, id) {
            (RouteName::EditEmployee, Some(id)) if !id.is_empty() => {
                Some(Route::from_match(name, Some(id)))
            }
            (RouteName::EditEmployee, _) => None,
            (name, _) => Some(Route::from_match(name, None)),
        }
    }

    /// Full href of a route, including the base
    pub fn href(&self, route: &Route) -> String {
        format!("{}{}", self.base, route.path())
    }

    fn strip_base<'a>(&self, path: &'a str) -> &'a str {
        if self.base.is_empty() {
            return path;
        }
        match path.strip_prefix(self.base.as_str()) {
            Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
            _ => path,
        }
    }
}

/// Match path segments against a pattern.
///
/// Returns `Some(param)` on match, where `param` is the `:id` segment if the
/// pattern has one.
fn match_pattern<'a>(pattern: &str, segments: &[&'a str]) -> Option<Option<&'a str>> {
    let parts: Vec<&str> = pattern.split('/').filter(|s| !s.is_empty()).collect();
    if parts.len() != segments.len() {
        return None;
    }

    let mut param = None;
    for (part, segment) in parts.iter().zip(segments) {
        if part.starts_with(':') {
            param = Some(*segment);
        } else if !part.eq_ignore_ascii_case(segment) {
            return None;
        }
    }
    Some(param)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_routes() {
        let router = Router::new();
        assert_eq!(router.resolve("/"), Route::Home);
        assert_eq!(router.resolve("/employees"), Route::EmployeeList);
        assert_eq!(router.resolve("/add-employee"), Route::AddEmployee);
        assert_eq!(router.resolve("/employees").view(), Some(View::EmployeeList));
    }

    #[test]
    fn test_edit_route_binds_id() {
        let route = Router::new().resolve("/edit-employee/3");
        assert_eq!(route, Route::EditEmployee { id: "3".into() });
        assert_eq!(route.view(), Some(View::AddEmployee));
        assert_eq!(route.name(), Some(RouteName::EditEmployee));
        assert_eq!(route.form_mode(), Some(FormMode::Edit { id: "3".into() }));
        assert_eq!(route.employee_id(), Some(3));
    }

    #[test]
    fn test_add_route_is_create_mode() {
        let route = Router::new().resolve("/add-employee");
        assert_eq!(route.view(), Some(View::AddEmployee));
        assert_eq!(route.form_mode(), Some(FormMode::Create));
        assert_eq!(route.employee_id(), None);
    }

    #[test]
    fn test_unmatched_paths() {
        let router = Router::new();
        for path in ["/nope", "/edit-employee", "/edit-employee/", "/employees/1/x"] {
            let route = router.resolve(path);
            assert!(route.is_not_found(), "{path} should not match");
            assert_eq!(route.view(), None);
            assert_eq!(route.path(), path);
        }
    }

    #[test]
    fn test_query_fragment_and_trailing_slash() {
        let router = Router::new();
        assert_eq!(router.resolve("/employees/"), Route::EmployeeList);
        assert_eq!(router.resolve("/employees?page=2"), Route::EmployeeList);
        assert_eq!(router.resolve("/Employees#top"), Route::EmployeeList);
        assert_eq!(
            router.resolve("/edit-employee/7?x=1"),
            Route::EditEmployee { id: "7".into() }
        );
    }

    #[test]
    fn test_non_numeric_id_keeps_raw_prop() {
        let route = Router::new().resolve("/edit-employee/abc");
        assert_eq!(route, Route::EditEmployee { id: "abc".into() });
        assert_eq!(route.employee_id(), None);
    }

    #[test]
    fn test_base_path() {
        let router = Router::with_base("/app/");
        assert_eq!(router.base(), "/app");
        assert_eq!(router.resolve("/app"), Route::Home);
        assert_eq!(router.resolve("/app/employees"), Route::EmployeeList);
        assert!(router.resolve("/application/employees").is_not_found());
        assert_eq!(
            router.href(&Route::EditEmployee { id: "2".into() }),
            "/app/edit-employee/2"
        );
        assert_eq!(Router::new().base(), "/");
    }

    #[test]
    fn test_reverse_routing() {
        let router = Router::new();
        for name in RouteName::ALL {
            let route = router.by_name(name, Some("5")).unwrap();
            assert_eq!(router.resolve(&route.path()), route);
            assert_eq!(route.name(), Some(name));
        }
        assert!(router.by_name(RouteName::EditEmployee, None).is_none());
        assert_eq!(router.href(&Route::Home), "/");
    }

    #[test]
    fn test_route_name_from_str() {
        assert_eq!("EditEmployee".parse::<RouteName>(), Ok(RouteName::EditEmployee));
        assert_eq!(
            "Missing".parse::<RouteName>(),
            Err(UnknownRouteName("Missing".into()))
        );
        assert_eq!(RouteName::EditEmployee.to_string(), "EditEmployee");
        assert_eq!(View::AddEmployee.to_string(), "AddEmployee");
    }
}
