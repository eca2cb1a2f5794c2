use lexbook_core::error::CoreError;
use lexbook_service::availability::AvailabilityClient;
use salvo::async_trait;
use salvo::http::header::AUTHORIZATION;

use crate::error::AppResult;

pub struct BackendHandler {
    pub client: AvailabilityClient,
}

#[async_trait]
impl salvo::Handler for BackendHandler {
    #[tracing::instrument(skip(self, req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        // A caller's own bearer token takes precedence over the configured one.
        let client = match bearer_token(req) {
            Some(token) => self.client.with_token(Some(token)),
            None => self.client.clone(),
        };
        depot.inject(client);
    }
}

fn bearer_token(req: &salvo::Request) -> Option<String> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();
    (!token.is_empty()).then(|| token.to_string())
}

/// ## Summary
/// Retrieves the backend client from the depot.
///
/// ## Errors
/// Returns an error if the backend client is not found in the depot.
pub fn get_backend_from_depot(depot: &salvo::Depot) -> AppResult<AvailabilityClient> {
    depot
        .obtain::<AvailabilityClient>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Backend client not found in depot").into())
}
