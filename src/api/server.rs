use crate::api::routes;
use crate::config::SharedConfig;
use crate::records::RecordStore;
use crate::zone_api::DynZoneApi;
use std::future::Future;

#[derive(Clone)]
pub(super) struct AppState {
    pub config: SharedConfig,
    pub records: RecordStore,
}

pub fn new(config: SharedConfig, zone_api: DynZoneApi) -> impl Future<Output = hyper::Result<()>> {
    let records = RecordStore::new(config.clone(), zone_api);
    axum::Server::bind(&config.api_bind_addr)
        .serve(routes::new(AppState { config, records }).into_make_service())
}
