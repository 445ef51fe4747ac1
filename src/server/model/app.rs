use crate::server::backend::BackendClient;

#[derive(Clone)]
pub struct AppState {
    pub backend: BackendClient,
}
