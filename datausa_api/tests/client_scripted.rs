//! `DataClient` driven through an in-memory `Transport` stub, so the exact
//! URL handed to the transport can be asserted without any network I/O.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use datausa_api::{
    DataClient, Error, Transport, TransportError, TransportResponse, DEFAULT_BASE_URL,
};
use url::Url;

const STATE_URL: &str =
    "https://datausa.io/api/data?drilldowns=State&measures=Population&year=latest";
const NATION_URL: &str = "https://datausa.io/api/data?drilldowns=Nation&measures=Population";

const ALASKA_BODY: &str = r#"{"data":[{"ID State":"04000US02","State":"Alaska","ID Year":2022,"Year":"2022","Population":734821,"Slug State":"alaska"}]}"#;
const US_BODY: &str = r#"{"data":[{"ID Nation":"01000US","Nation":"United States","ID Year":2021,"Year":"2021","Population":329725481,"Slug Nation":"united-states"}]}"#;

/// Answers only the URLs it was scripted with; anything else is a
/// transport failure.
#[derive(Default)]
struct ScriptedTransport {
    routes: HashMap<String, Result<TransportResponse, TransportError>>,
    seen: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    fn route(mut self, url: &str, status: u16, body: &str) -> Self {
        self.routes
            .insert(url.to_string(), Ok(TransportResponse::new(status, body)));
        self
    }

    fn fail(mut self, url: &str, err: TransportError) -> Self {
        self.routes.insert(url.to_string(), Err(err));
        self
    }

    fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn get(&self, url: &Url) -> Result<TransportResponse, TransportError> {
        self.seen.lock().unwrap().push(url.to_string());
        match self.routes.get(url.as_str()) {
            Some(outcome) => outcome.clone(),
            None => Err(TransportError::Failed(format!("unexpected URL {}", url))),
        }
    }
}

fn client(transport: &Arc<ScriptedTransport>) -> DataClient {
    DataClient::with_transport(DEFAULT_BASE_URL, transport.clone())
}

#[tokio::test]
async fn fetch_state_data_success() {
    let transport = Arc::new(ScriptedTransport::default().route(STATE_URL, 200, ALASKA_BODY));

    let data = client(&transport).fetch_state_data().await.unwrap();

    assert_eq!(data.len(), 1);
    let alaska = &data.records()[0];
    assert_eq!(alaska.state_id, "04000US02");
    assert_eq!(alaska.state_name, "Alaska");
    assert_eq!(alaska.year_id, 2022);
    assert_eq!(alaska.year_label, "2022");
    assert_eq!(alaska.population, 734821);
    assert_eq!(alaska.state_slug, "alaska");
    assert_eq!(transport.seen(), vec![STATE_URL.to_string()]);
}

#[tokio::test]
async fn fetch_nation_data_success() {
    let transport = Arc::new(ScriptedTransport::default().route(NATION_URL, 200, US_BODY));

    let data = client(&transport).fetch_nation_data().await.unwrap();

    assert_eq!(data.len(), 1);
    let us = &data.records()[0];
    assert_eq!(us.nation_id, "01000US");
    assert_eq!(us.nation_name, "United States");
    assert_eq!(us.year_id, 2021);
    assert_eq!(us.year_label, "2021");
    assert_eq!(us.population, 329725481);
    assert_eq!(us.nation_slug, "united-states");
    assert_eq!(transport.seen(), vec![NATION_URL.to_string()]);
}

#[tokio::test]
async fn fetch_state_data_bad_status() {
    let transport = Arc::new(ScriptedTransport::default().route(STATE_URL, 400, r#"{"data":[]}"#));

    let err = client(&transport).fetch_state_data().await.unwrap_err();
    assert!(matches!(err, Error::InvalidResponse { status: 400, .. }));
}

#[tokio::test]
async fn fetch_nation_data_bad_status() {
    let transport = Arc::new(ScriptedTransport::default().route(NATION_URL, 400, r#"{"data":[]}"#));

    let err = client(&transport).fetch_nation_data().await.unwrap_err();
    assert!(matches!(err, Error::InvalidResponse { status: 400, .. }));
}

#[tokio::test]
async fn non_200_success_codes_are_rejected() {
    let transport = Arc::new(ScriptedTransport::default().route(STATE_URL, 204, ALASKA_BODY));

    let err = client(&transport).fetch_state_data().await.unwrap_err();
    assert!(matches!(err, Error::InvalidResponse { status: 204, .. }));
}

#[tokio::test]
async fn empty_data_is_an_empty_dataset() {
    let transport = Arc::new(
        ScriptedTransport::default()
            .route(STATE_URL, 200, r#"{"data":[]}"#)
            .route(NATION_URL, 200, r#"{"data":[]}"#),
    );
    let client = client(&transport);

    assert!(client.fetch_state_data().await.unwrap().is_empty());
    assert!(client.fetch_nation_data().await.unwrap().is_empty());
}

#[tokio::test]
async fn malformed_body_is_invalid_response() {
    let transport = Arc::new(
        ScriptedTransport::default()
            .route(STATE_URL, 200, "{not valid json}")
            .route(NATION_URL, 200, r#"{"rows":[]}"#),
    );
    let client = client(&transport);

    assert!(client.fetch_state_data().await.unwrap_err().is_invalid_response());
    assert!(client.fetch_nation_data().await.unwrap_err().is_invalid_response());
}

#[tokio::test]
async fn state_body_does_not_decode_as_nation() {
    let transport = Arc::new(ScriptedTransport::default().route(NATION_URL, 200, ALASKA_BODY));

    let err = client(&transport).fetch_nation_data().await.unwrap_err();
    assert!(err.is_invalid_response());
}

#[tokio::test]
async fn stub_rejecting_unknown_urls_is_only_called_with_documented_urls() {
    let transport = Arc::new(
        ScriptedTransport::default()
            .route(STATE_URL, 200, ALASKA_BODY)
            .route(NATION_URL, 200, US_BODY),
    );
    let client = client(&transport);

    client.fetch_state_data().await.unwrap();
    client.fetch_nation_data().await.unwrap();
    client.fetch_state_data().await.unwrap();

    assert_eq!(
        transport.seen(),
        vec![
            STATE_URL.to_string(),
            NATION_URL.to_string(),
            STATE_URL.to_string()
        ]
    );
}

#[tokio::test]
async fn transport_failure_is_request_error() {
    let transport = Arc::new(
        ScriptedTransport::default()
            .fail(STATE_URL, TransportError::Failed("connection refused".into())),
    );

    let err = client(&transport).fetch_state_data().await.unwrap_err();
    assert!(matches!(err, Error::Request(ref msg) if msg == "connection refused"));
}

#[tokio::test]
async fn unparseable_base_url_never_reaches_transport() {
    let transport = Arc::new(ScriptedTransport::default());
    let client = DataClient::with_transport("::not a url::", transport.clone());

    let err = client.fetch_nation_data().await.unwrap_err();
    assert!(err.is_request());
    assert!(transport.seen().is_empty());
}

#[tokio::test]
async fn transport_cancellation_is_distinct() {
    let transport =
        Arc::new(ScriptedTransport::default().fail(NATION_URL, TransportError::Cancelled));

    let err = client(&transport).fetch_nation_data().await.unwrap_err();
    assert!(err.is_cancelled());
    assert!(!err.is_invalid_response());
}

#[tokio::test]
async fn state_failure_does_not_affect_nation_fetch() {
    let transport = Arc::new(
        ScriptedTransport::default()
            .route(STATE_URL, 500, "Internal Server Error")
            .route(NATION_URL, 200, US_BODY),
    );
    let client = client(&transport);

    assert!(client.fetch_state_data().await.is_err());
    let nations = client.fetch_nation_data().await.unwrap();
    assert_eq!(nations.len(), 1);
}

#[tokio::test]
async fn concurrent_fetches_share_one_client() {
    let transport = Arc::new(
        ScriptedTransport::default()
            .route(STATE_URL, 400, r#"{"data":[]}"#)
            .route(NATION_URL, 200, US_BODY),
    );
    let client = client(&transport);

    let (states, nations) = tokio::join!(client.fetch_state_data(), client.fetch_nation_data());
    assert!(states.unwrap_err().is_invalid_response());
    assert_eq!(nations.unwrap().records()[0].population, 329725481);
}
