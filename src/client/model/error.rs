use crate::error::AppError;

/// Error shown in place of a page.
#[derive(Clone, Debug, PartialEq)]
pub struct PageError {
    pub status: u16,
    pub message: String,
}

impl PageError {
    pub fn not_found(location: &str) -> Self {
        Self {
            status: 404,
            message: format!("No page at {location}"),
        }
    }
}

impl std::fmt::Display for PageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Start-up failures keep their message; the site cannot be served at all.
impl From<AppError> for PageError {
    fn from(err: AppError) -> Self {
        Self {
            status: 500,
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::route::RouteError;

    /// Tests the not-found error for a location.
    ///
    /// Expected: 404 naming the location
    #[test]
    fn test_not_found() {
        let err = PageError::not_found("/cart?id=1");

        assert_eq!(err.status, 404);
        assert_eq!(err.to_string(), "No page at /cart?id=1");
    }

    /// Tests converting a start-up error.
    ///
    /// Expected: 500 carrying the start-up error message
    #[test]
    fn test_from_app_error() {
        let err = PageError::from(AppError::from(RouteError::DuplicatePattern("/".to_string())));

        assert_eq!(err.status, 500);
        assert_eq!(err.message, "Route pattern already registered: /");
    }
}
