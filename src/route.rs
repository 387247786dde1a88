//! Maps the browser location to a page.

/// The site's pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
	/// Landing page with theme and brightness controls.
	Home,
	/// External link list.
	Methods,
}

impl Route {
	/// Resolves a location path. Unknown paths land on the home page.
	pub fn from_path(path: &str) -> Self {
		match path.trim_end_matches('/') {
			"/methods" | "methods" => Route::Methods,
			_ => Route::Home,
		}
	}

	/// Path linking to this page.
	pub fn path(self) -> &'static str {
		match self {
			Route::Home => "/",
			Route::Methods => "/methods",
		}
	}

	/// Route for the page currently loaded in the browser.
	pub fn current() -> Self {
		let path = web_sys::window().and_then(|w| w.location().pathname().ok());
		path.as_deref().map_or(Route::Home, Self::from_path)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_from_path() {
		assert_eq!(Route::from_path("/"), Route::Home);
		assert_eq!(Route::from_path(""), Route::Home);
		assert_eq!(Route::from_path("/methods"), Route::Methods);
		assert_eq!(Route::from_path("/methods/"), Route::Methods);
		assert_eq!(Route::from_path("/unknown"), Route::Home);
	}

	#[test]
	fn test_paths_resolve_back() {
		for route in [Route::Home, Route::Methods] {
			assert_eq!(Route::from_path(route.path()), route);
		}
	}
}
