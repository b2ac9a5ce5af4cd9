use rocket::{get, routes, Build, Rocket};
use crate::app_constants::WEB_PREFIX;

#[get("/")]
fn home_page() -> &'static str {
    "Welcome to Note!"
}

pub trait WebRocketBuildExt {
    fn install_notes_web(self) -> Self;
}

impl WebRocketBuildExt for Rocket<Build> {
    fn install_notes_web(self) -> Self {
        self
            .mount(
                WEB_PREFIX,
                routes![
                    home_page,
                ]
            )
    }
}
