mod api;
mod web;

pub use api::ApiRocketBuildExt;
pub use web::WebRocketBuildExt;
