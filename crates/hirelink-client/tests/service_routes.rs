//! Each resource service is a thin pass-through: these tests pin down the
//! endpoint path, verb and payload each one produces.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use hirelink_client::models::{
    ContactMessage, InterviewRequest, NewFeatureSuggestion, NewJob, TemplateDraft,
};
use hirelink_client::services::users::ProfileUpdate;
use hirelink_client::services::{
    chat, contact, features, interviews, jobs, matching, notifications, templates, users,
};
use hirelink_client::{
    ApiClient, ApiRequest, ApiResponse, ClientConfig, Result, SessionStore, Transport,
};

/// Answers every request with a fixed body, remembering the last request.
struct EchoTransport {
    body: &'static str,
    last: Mutex<Option<ApiRequest>>,
}

impl EchoTransport {
    fn replying(body: &'static str) -> Arc<Self> {
        Arc::new(Self {
            body,
            last: Mutex::new(None),
        })
    }

    fn last(&self) -> ApiRequest {
        self.last.lock().unwrap().clone().unwrap()
    }
}

#[async_trait]
impl Transport for EchoTransport {
    async fn send(&self, _url: &str, request: ApiRequest) -> Result<ApiResponse> {
        *self.last.lock().unwrap() = Some(request);
        Ok(ApiResponse::new(200, self.body))
    }
}

fn client(transport: Arc<EchoTransport>) -> ApiClient {
    ApiClient::with_transport(
        transport,
        ClientConfig::new("https://api.test"),
        SessionStore::in_memory(),
    )
    .unwrap()
}

const JOB: &str = r#"{"_id":"j1","title":"Engineer"}"#;
const MATCH: &str = r#"{"_id":"m1","job":"j1","user":"u1"}"#;
const TEMPLATE: &str = r#"{"_id":"t1","name":"Outreach"}"#;
const INTERVIEW: &str = r#"{"_id":"i1","job":"j1","candidate":"u1"}"#;
const USER: &str = r#"{"_id":"u1","name":"Ada","email":"a@b.c","role":"user"}"#;

#[tokio::test]
async fn test_job_routes() {
    let transport = EchoTransport::replying(JOB);
    let c = client(transport.clone());

    jobs::get(&c, "j1").await.unwrap();
    assert_eq!(transport.last().path, "/jobs/j1");

    jobs::create(
        &c,
        &NewJob {
            title: "Engineer".into(),
            description: "Build".into(),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    let req = transport.last();
    assert_eq!((req.method.as_str(), req.path.as_str()), ("POST", "/jobs"));

    jobs::update_status(&c, "j1", "closed").await.unwrap();
    let req = transport.last();
    assert_eq!(req.method, "PATCH");
    assert_eq!(req.path, "/jobs/j1/status");
    assert_eq!(req.body.as_ref(), br#"{"status":"closed"}"#);

    jobs::delete(&c, "j1").await.unwrap();
    let req = transport.last();
    assert_eq!((req.method.as_str(), req.path.as_str()), ("DELETE", "/jobs/j1"));
}

#[tokio::test]
async fn test_matching_routes() {
    let transport = EchoTransport::replying(MATCH);
    let c = client(transport.clone());

    matching::get(&c, "m1").await.unwrap();
    assert_eq!(transport.last().path, "/matching/m1");

    let list_transport =
        EchoTransport::replying(r#"[{"_id":"m1","job":"j1","user":"u1"}]"#);
    let list_client = client(list_transport.clone());
    matching::list_for_job(&list_client, "j1").await.unwrap();
    assert_eq!(list_transport.last().path, "/matching/job/j1");

    matching::update_status(&c, "m1", "accepted").await.unwrap();
    let req = transport.last();
    assert_eq!(req.path, "/matching/m1/status");
    assert_eq!(req.method, "PATCH");
}

#[tokio::test]
async fn test_template_routes() {
    let transport = EchoTransport::replying(TEMPLATE);
    let c = client(transport.clone());

    let draft = TemplateDraft {
        name: "Outreach".into(),
        subject: Some("Hello".into()),
        body: "Hi {name}".into(),
    };
    templates::create(&c, &draft).await.unwrap();
    let req = transport.last();
    assert_eq!((req.method.as_str(), req.path.as_str()), ("POST", "/templates"));

    templates::update(&c, "t1", &draft).await.unwrap();
    let req = transport.last();
    assert_eq!((req.method.as_str(), req.path.as_str()), ("PUT", "/templates/t1"));

    templates::delete(&c, "t1").await.unwrap();
    assert_eq!(transport.last().method, "DELETE");
}

#[tokio::test]
async fn test_interview_routes() {
    let transport = EchoTransport::replying(INTERVIEW);
    let c = client(transport.clone());

    interviews::schedule(
        &c,
        &InterviewRequest {
            job: "j1".into(),
            candidate: "u1".into(),
            scheduled_at: "2025-07-01T10:00:00Z".parse().unwrap(),
        },
    )
    .await
    .unwrap();
    let req = transport.last();
    assert_eq!((req.method.as_str(), req.path.as_str()), ("POST", "/interviews"));

    interviews::update_status(&c, "i1", "completed").await.unwrap();
    assert_eq!(transport.last().path, "/interviews/i1/status");
}

#[tokio::test]
async fn test_user_routes() {
    let transport = EchoTransport::replying(USER);
    let c = client(transport.clone());

    users::update(
        &c,
        "u1",
        &ProfileUpdate {
            name: Some("Ada L".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    let req = transport.last();
    assert_eq!((req.method.as_str(), req.path.as_str()), ("PUT", "/users/u1"));
    assert_eq!(req.body.as_ref(), br#"{"name":"Ada L"}"#);
}

#[tokio::test]
async fn test_chat_contact_feature_notification_routes() {
    let transport = EchoTransport::replying(r#"{"reply":"hi"}"#);
    let c = client(transport.clone());
    chat::send(&c, "hello there").await.unwrap();
    let req = transport.last();
    assert_eq!((req.method.as_str(), req.path.as_str()), ("POST", "/ai/chat"));
    assert_eq!(req.body.as_ref(), br#"{"message":"hello there"}"#);
    // Chat calls carry their own timeout override through the seam.
    assert_eq!(req.timeout, Some(std::time::Duration::from_secs(120)));

    chat::send_with_context(&c, "hello", "resume review")
        .await
        .unwrap();
    let req = transport.last();
    assert_eq!(req.path, "/ai/chat");
    assert_eq!(
        req.body.as_ref(),
        br#"{"message":"hello","context":"resume review"}"#
    );

    let transport = EchoTransport::replying(r#"{"message":"thanks"}"#);
    let c = client(transport.clone());
    contact::send(
        &c,
        &ContactMessage {
            name: "Ada".into(),
            email: "a@b.c".into(),
            message: "Hi".into(),
        },
    )
    .await
    .unwrap();
    assert_eq!(transport.last().path, "/contact");

    let transport =
        EchoTransport::replying(r#"{"_id":"f1","title":"Dark mode","votes":1}"#);
    let c = client(transport.clone());
    features::suggest(
        &c,
        &NewFeatureSuggestion {
            title: "Dark mode".into(),
            description: "Please".into(),
        },
    )
    .await
    .unwrap();
    assert_eq!(transport.last().path, "/feature/feature-suggestions");

    features::vote(&c, "f1").await.unwrap();
    assert_eq!(
        transport.last().path,
        "/feature/feature-suggestions/f1/vote"
    );

    let transport = EchoTransport::replying("{}");
    let c = client(transport.clone());
    notifications::register_device_token(&c, "device-tok", Some("web"))
        .await
        .unwrap();
    let req = transport.last();
    assert_eq!(req.path, "/notifications/tokens");
    assert_eq!(
        req.body.as_ref(),
        br#"{"token":"device-tok","platform":"web"}"#
    );
}
