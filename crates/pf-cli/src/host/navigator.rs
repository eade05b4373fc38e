use pf_core::Route;
use pf_profile::Navigator;

use std::sync::Mutex;

use log::info;

/// A terminal has nowhere to go: navigation requests are logged and kept
/// so the command can report them.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<Route> {
        self.routes
            .lock()
            .map(|routes| routes.clone())
            .unwrap_or_default()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        match route.origin() {
            Some(origin) => info!("Navigate to {route} (from {origin})"),
            None => info!("Navigate to {route}"),
        }

        if let Ok(mut routes) = self.routes.lock() {
            routes.push(route);
        }
    }
}
