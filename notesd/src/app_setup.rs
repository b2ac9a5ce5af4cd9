use crate::routes::{ApiRocketBuildExt, WebRocketBuildExt};
use async_trait::async_trait;
use log::{error, info};
use notes::config::figment::FigmentExt;
use notes::storage::NoteStorage;
use rocket::fairing::{Fairing, Info};
use rocket::{Build, Orbit, Rocket};

pub struct AppSetupFairing;

macro_rules! ok_or_bail {
    ($rocket:ident, $expr:expr, |$e:ident| $error_logger:expr) => ({
        match $expr {
            std::result::Result::Ok(ok) => ok,
            std::result::Result::Err(e) => {
                let $e = e;
                $error_logger;
                return std::result::Result::Err($rocket);
            },
        }
    });
}

#[async_trait]
impl Fairing for AppSetupFairing {
    fn info(&self) -> Info {
        use rocket::fairing::Kind;
        Info {
            name: "app setup",
            kind: Kind::Ignite | Kind::Shutdown,
        }
    }

    async fn on_ignite(
        &self,
        rocket: Rocket<Build>,
    ) -> rocket::fairing::Result {
        let app_config = rocket.figment().extract_app_config();
        let app_config = ok_or_bail!(
            rocket,
            app_config,
            |e| error!("failed to load app config: {e}")
        );

        info!(
            "serving notes from {}",
            NoteStorage::get_notes_dir(&app_config).display(),
        );
        let storage: NoteStorage = ok_or_bail!(
            rocket,
            NoteStorage::new(&app_config).await,
            |e| error!("note storage initialization failed: {e}")
        );

        Ok(
            rocket
                .manage(storage)
                .manage(app_config)
                .install_notes_api()
                .install_notes_web()
        )
    }

    async fn on_shutdown(
        &self,
        rocket: &Rocket<Orbit>,
    ) {
        if let Some(storage) = rocket.state::<NoteStorage>() {
            match storage.close().await {
                Ok(()) => info!("note storage closed"),
                Err(e) => error!("failed to close note storage: {e}"),
            }
        }
    }
}
