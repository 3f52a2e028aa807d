pub mod api;
pub mod config;
pub mod core;
pub mod interactions;
pub mod models;
pub mod normalize;
pub mod routing;
pub mod session;

pub use api::ApiClient;
pub use self::core::errors::{ClientError, Result};
pub use interactions::{poll_percentages, InteractionTracker, LikeState};
pub use routing::{guard_authenticated, guard_guest_only, login_and_route, route_for, Route};
pub use session::SessionStore;
