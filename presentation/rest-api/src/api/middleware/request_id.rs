use poem::http::HeaderValue;
use poem::{Endpoint, IntoResponse, Middleware, Request, Response, Result};
use uuid::Uuid;

/// Correlation header. Inbound values are reused so callers can trace a
/// request across services; requests without one get a fresh UUID.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

pub struct RequestId;

impl<E: Endpoint> Middleware<E> for RequestId {
    type Output = RequestIdEndpoint<E>;

    fn transform(&self, ep: E) -> Self::Output {
        RequestIdEndpoint { ep }
    }
}

pub struct RequestIdEndpoint<E> {
    ep: E,
}

impl<E: Endpoint> Endpoint for RequestIdEndpoint<E> {
    type Output = Response;

    async fn call(&self, mut req: Request) -> Result<Self::Output> {
        let id = match req.headers().get(REQUEST_ID_HEADER) {
            Some(value) => value.clone(),
            None => {
                let minted = Uuid::new_v4().to_string();
                match HeaderValue::from_str(&minted) {
                    Ok(value) => value,
                    // A UUID always forms a valid header value; this arm is
                    // unreachable.
                    Err(_) => {
                        return self.ep.call(req).await.map(IntoResponse::into_response);
                    }
                }
            }
        };

        req.headers_mut().insert(REQUEST_ID_HEADER, id.clone());
        // The id lands on the response even when the inner endpoint errors.
        let mut resp = self.ep.get_response(req).await;
        resp.headers_mut().insert(REQUEST_ID_HEADER, id);
        Ok(resp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use poem::http::StatusCode;
    use poem::test::TestClient;
    use poem::{EndpointExt, handler};

    #[handler]
    fn ok() -> &'static str {
        "ok"
    }

    #[handler]
    fn require_uuid(req: &Request) -> StatusCode {
        let minted = req
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| Uuid::parse_str(value).ok());
        if minted.is_some() {
            StatusCode::OK
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    #[tokio::test]
    async fn should_propagate_an_inbound_request_id_to_the_response() {
        let cli = TestClient::new(ok.with(RequestId));

        let resp = cli
            .get("/")
            .header(REQUEST_ID_HEADER, "abc-123")
            .send()
            .await;

        resp.assert_status_is_ok();
        resp.assert_header(REQUEST_ID_HEADER, "abc-123");
    }

    #[tokio::test]
    async fn should_mint_a_uuid_when_no_request_id_arrives() {
        let cli = TestClient::new(require_uuid.with(RequestId));

        let resp = cli.get("/").send().await;

        resp.assert_status_is_ok();
    }
}
