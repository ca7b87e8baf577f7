//! Route Table and Guards
//!
//! Every page the client can show, and the rule deciding whether the
//! current session may see it.
//!
//! | Access      | Anonymous              | Authenticated         |
//! |-------------|------------------------|-----------------------|
//! | `Public`    | render                 | redirect `/dashboard` |
//! | `Protected` | redirect `/auth/login` | render                |
//! | `Open`      | render                 | render                |
//!
//! `/` always redirects to `/dashboard`, which then applies its own guard.

/// Client page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Root,
    // Public
    Login,
    Signup,
    ForgotPassword,
    VerifyAccount,
    // Protected
    Dashboard,
    Courses,
    Grades,
    Calendar,
    Account,
    Progress,
    Lectures,
    Mail,
    Notes,
    Services,
    CourseSelection,
    Contact,
    Help,
    // Anything else
    NotFound,
}

/// Who may see a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Anonymous only
    Public,
    /// Authenticated only
    Protected,
    /// Everyone
    Open,
}

/// Guard decision for a navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Render(Route),
    Redirect(Route),
}

/// Protected routes in sidebar order
pub const PROTECTED_ROUTES: [Route; 13] = [
    Route::Dashboard,
    Route::Courses,
    Route::Grades,
    Route::Calendar,
    Route::Account,
    Route::Progress,
    Route::Lectures,
    Route::Mail,
    Route::Notes,
    Route::Services,
    Route::CourseSelection,
    Route::Contact,
    Route::Help,
];

/// Public routes
pub const PUBLIC_ROUTES: [Route; 4] = [
    Route::Login,
    Route::Signup,
    Route::ForgotPassword,
    Route::VerifyAccount,
];

impl Route {
    /// Match a path exactly; anything unknown is `NotFound`
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" => Route::Root,
            "/auth/login" => Route::Login,
            "/auth/signup" => Route::Signup,
            "/auth/forgot-password" => Route::ForgotPassword,
            "/auth/verify-account" => Route::VerifyAccount,
            "/dashboard" => Route::Dashboard,
            "/courses" => Route::Courses,
            "/grades" => Route::Grades,
            "/calendar" => Route::Calendar,
            "/account" => Route::Account,
            "/progress" => Route::Progress,
            "/lectures" => Route::Lectures,
            "/mail" => Route::Mail,
            "/notes" => Route::Notes,
            "/services" => Route::Services,
            "/course-selection" => Route::CourseSelection,
            "/contact" => Route::Contact,
            "/help" => Route::Help,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Root => "/",
            Route::Login => "/auth/login",
            Route::Signup => "/auth/signup",
            Route::ForgotPassword => "/auth/forgot-password",
            Route::VerifyAccount => "/auth/verify-account",
            Route::Dashboard => "/dashboard",
            Route::Courses => "/courses",
            Route::Grades => "/grades",
            Route::Calendar => "/calendar",
            Route::Account => "/account",
            Route::Progress => "/progress",
            Route::Lectures => "/lectures",
            Route::Mail => "/mail",
            Route::Notes => "/notes",
            Route::Services => "/services",
            Route::CourseSelection => "/course-selection",
            Route::Contact => "/contact",
            Route::Help => "/help",
            Route::NotFound => "/404",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Root => "Home",
            Route::Login => "Log In",
            Route::Signup => "Sign Up",
            Route::ForgotPassword => "Forgot Password",
            Route::VerifyAccount => "Verify Account",
            Route::Dashboard => "Dashboard",
            Route::Courses => "Courses",
            Route::Grades => "Grades",
            Route::Calendar => "Calendar",
            Route::Account => "Account Book",
            Route::Progress => "Progress",
            Route::Lectures => "Lecture Schedule",
            Route::Mail => "Mail",
            Route::Notes => "Notes",
            Route::Services => "Student Services",
            Route::CourseSelection => "Course Selection",
            Route::Contact => "Contact Us",
            Route::Help => "Help & Support",
            Route::NotFound => "Page Not Found",
        }
    }

    /// Placeholder text for pages without content
    pub fn description(&self) -> &'static str {
        match self {
            Route::Dashboard => "Your courses, deadlines and announcements at a glance.",
            Route::Courses => "Courses you are enrolled in this term.",
            Route::Grades => "Grades and feedback for submitted work.",
            Route::Calendar => "View your academic calendar and events.",
            Route::Account => "Manage your tuition payments and financial records.",
            Route::Progress => "Track your academic progress and achievements.",
            Route::Lectures => "View your weekly lecture schedule.",
            Route::Mail => "Check your university email and messages.",
            Route::Notes => "Organize your study notes and materials.",
            Route::Services => "Access student support services.",
            Route::CourseSelection => "Browse and register for courses.",
            Route::Contact => "Get in touch with university departments.",
            Route::Help => "Find answers and get assistance.",
            Route::NotFound => "The page you are looking for does not exist.",
            _ => "",
        }
    }

    pub fn access(&self) -> Access {
        match self {
            Route::Login | Route::Signup | Route::ForgotPassword | Route::VerifyAccount => Access::Public,
            Route::Root | Route::NotFound => Access::Open,
            _ => Access::Protected,
        }
    }
}

/// Decide what to show for `route` given the current session
///
/// Redirects are followed, so the result is always a route that renders.
pub fn resolve(route: Route, authenticated: bool) -> Route {
    let mut current = route;
    // Two hops at most: `/` to `/dashboard` to `/auth/login`
    for _ in 0..3 {
        match guard(current, authenticated) {
            Navigation::Render(route) => return route,
            Navigation::Redirect(next) => current = next,
        }
    }
    current
}

/// One guard step for `route`
pub fn guard(route: Route, authenticated: bool) -> Navigation {
    if route == Route::Root {
        return Navigation::Redirect(Route::Dashboard);
    }

    match (route.access(), authenticated) {
        (Access::Public, true) => Navigation::Redirect(Route::Dashboard),
        (Access::Protected, false) => Navigation::Redirect(Route::Login),
        _ => Navigation::Render(route),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_roundtrip() {
        for route in PROTECTED_ROUTES.iter().chain(PUBLIC_ROUTES.iter()) {
            assert_eq!(Route::from_path(route.path()), *route);
        }
        assert_eq!(Route::from_path("/"), Route::Root);
    }

    #[test]
    fn test_unknown_paths_are_not_found() {
        for path in ["/nope", "/dashboard/", "/Dashboard", "", "/auth"] {
            assert_eq!(Route::from_path(path), Route::NotFound);
        }
    }

    #[test]
    fn test_protected_routes_need_session() {
        for route in PROTECTED_ROUTES {
            assert_eq!(route.access(), Access::Protected);
            assert_eq!(guard(route, false), Navigation::Redirect(Route::Login));
            assert_eq!(guard(route, true), Navigation::Render(route));
        }
    }

    #[test]
    fn test_public_routes_need_no_session() {
        for route in PUBLIC_ROUTES {
            assert_eq!(guard(route, false), Navigation::Render(route));
            assert_eq!(guard(route, true), Navigation::Redirect(Route::Dashboard));
        }
    }

    #[test]
    fn test_root_redirects_through_dashboard() {
        assert_eq!(guard(Route::Root, true), Navigation::Redirect(Route::Dashboard));
        assert_eq!(resolve(Route::Root, true), Route::Dashboard);
        assert_eq!(resolve(Route::Root, false), Route::Login);
    }

    #[test]
    fn test_not_found_ignores_session() {
        assert_eq!(resolve(Route::NotFound, false), Route::NotFound);
        assert_eq!(resolve(Route::NotFound, true), Route::NotFound);
    }

    #[test]
    fn test_verify_account_after_signup_lands_on_dashboard() {
        assert_eq!(resolve(Route::VerifyAccount, true), Route::Dashboard);
    }
}
