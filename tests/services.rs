//! Service routing end to end: `perform` → service → `ApiClient` → a
//! scripted transport.  Checks verbs, paths, bodies and how outcomes come
//! back as messages.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use futures::executor::block_on;
use serde_json::{json, Value};

use studio_frontend::command_executors::perform;
use studio_frontend::constants::STORAGE_KEY_TOKEN;
use studio_frontend::error::ApiError;
use studio_frontend::messages::{ApiCall, ListQuery, Message, Mutation, Resource, ResourcePage};
use studio_frontend::models::{
    AssetDraft, AssetFilter, AssetSort, AssetType, CaptchaPurpose, PageParams, PluginConfig,
    PluginFilter, ProjectDraft, ProjectKind, ResetPasswordRequest, ScriptDraft, ScriptFormat,
    ScriptImport, ScriptStatus, WorkflowDraft, WorkflowStatus,
};
use studio_frontend::network::{ApiClient, ApiConfig, ApiRequest, ApiResponse, HttpMethod, Transport};
use studio_frontend::services::{asset, plugin, project, script, workflow};
use studio_frontend::storage::{KeyValueStore, MemoryStorage};

#[derive(Default)]
struct Scripted {
    responses: RefCell<VecDeque<Result<ApiResponse, ApiError>>>,
    seen: RefCell<Vec<ApiRequest>>,
}

impl Scripted {
    fn reply(&self, status: u16, body: Value) {
        self.responses.borrow_mut().push_back(Ok(ApiResponse {
            status,
            body: body.to_string(),
        }));
    }

    fn fail(&self, reason: &str) {
        self.responses
            .borrow_mut()
            .push_back(Err(ApiError::Network(reason.to_string())));
    }

    fn last(&self) -> ApiRequest {
        self.seen.borrow().last().cloned().expect("no request sent")
    }

    fn last_body(&self) -> Value {
        serde_json::from_str(self.last().body.as_deref().unwrap_or("null")).unwrap()
    }

    /// Method, path below the base URL, and JSON body of the last request.
    fn last_route(&self) -> (HttpMethod, String, Value) {
        let req = self.last();
        let path = req
            .url
            .strip_prefix("http://api.test/api/v1")
            .expect("request left the API base")
            .to_string();
        (req.method, path, self.last_body())
    }
}

#[async_trait(?Send)]
impl Transport for Scripted {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.seen.borrow_mut().push(request);
        self.responses.borrow_mut().pop_front().unwrap_or(Ok(ApiResponse {
            status: 204,
            body: String::new(),
        }))
    }
}

fn setup() -> (ApiClient, Rc<Scripted>, Rc<MemoryStorage>) {
    let transport = Rc::new(Scripted::default());
    let storage = Rc::new(MemoryStorage::new());
    let api = ApiClient::new(
        ApiConfig::from_url("http://api.test/api/v1"),
        storage.clone(),
        transport.clone(),
    );
    (api, transport, storage)
}

fn empty_page() -> Value {
    json!({ "items": [], "total": 0, "page": 1, "pageSize": 20, "totalPages": 0 })
}

#[test]
fn login_posts_credentials_and_returns_token() {
    let (api, transport, _) = setup();
    transport.reply(200, json!({ "access_token": "jwt-1", "token_type": "bearer" }));

    let msg = block_on(perform(
        &api,
        ApiCall::Login {
            email: "a@b.co".into(),
            password: "Secret123".into(),
        },
    ));

    let req = transport.last();
    assert_eq!(req.method, HttpMethod::Post);
    assert_eq!(req.url, "http://api.test/api/v1/auth/login");
    assert_eq!(req.header("Authorization"), None);
    assert_eq!(
        transport.last_body(),
        json!({ "email": "a@b.co", "password": "Secret123" })
    );
    match msg {
        Message::LoginResponse(Ok(token)) => assert_eq!(token.access_token, "jwt-1"),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn stored_token_is_sent_as_bearer() {
    let (api, transport, storage) = setup();
    storage.set_item(STORAGE_KEY_TOKEN, "jwt-9");
    transport.reply(401, json!({ "detail": "Not authenticated" }));

    let msg = block_on(perform(&api, ApiCall::FetchProfile));

    assert_eq!(transport.last().header("Authorization"), Some("Bearer jwt-9"));
    assert!(matches!(
        msg,
        Message::ProfileLoaded(Err(ApiError::Status { status: 401, .. }))
    ));
}

#[test]
fn captcha_purposes_use_separate_endpoints() {
    let (api, transport, _) = setup();

    let msg = block_on(perform(
        &api,
        ApiCall::SendCaptcha {
            email: "a@b.co".into(),
            purpose: CaptchaPurpose::Register,
        },
    ));
    assert_eq!(msg, Message::SignupCaptchaSent(Ok(())));
    assert_eq!(transport.last().url, "http://api.test/api/v1/captcha/email/send");
    assert_eq!(transport.last_body()["type"], "register");

    let msg = block_on(perform(
        &api,
        ApiCall::SendResetCaptcha {
            email: "a@b.co".into(),
            resend: true,
        },
    ));
    assert_eq!(msg, Message::ForgotResent(Ok(())));
    assert_eq!(
        transport.last().url,
        "http://api.test/api/v1/captcha/email/forgot-password"
    );
    assert_eq!(transport.last_body(), json!({ "email": "a@b.co" }));
}

#[test]
fn logout_finishes_even_when_the_server_is_unreachable() {
    let (api, transport, _) = setup();
    transport.fail("offline");
    assert_eq!(block_on(perform(&api, ApiCall::Logout)), Message::LogoutFinished);
    assert_eq!(transport.last().url, "http://api.test/api/v1/auth/logout");
}

#[test]
fn asset_list_sends_filter_and_paging() {
    let (api, transport, _) = setup();
    transport.reply(200, empty_page());

    let filter = AssetFilter {
        asset_type: Some(AssetType::Video),
        search: "sea".into(),
        sort_by: AssetSort::Name,
    };
    let msg = block_on(perform(
        &api,
        ApiCall::List(ListQuery::Assets(filter, PageParams::new(2, 20))),
    ));

    let req = transport.last();
    assert_eq!(req.method, HttpMethod::Get);
    assert_eq!(
        req.url,
        "http://api.test/api/v1/assets?type=video&search=sea&sortBy=name&page=2&pageSize=20"
    );
    match msg {
        Message::ResourceLoaded {
            resource: Resource::Assets,
            result: Ok(ResourcePage::Assets(page)),
        } => assert!(page.items.is_empty()),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn installed_plugin_filter_reaches_the_query() {
    let (api, transport, _) = setup();
    transport.reply(200, empty_page());
    let filter = PluginFilter {
        installed: Some(true),
        ..Default::default()
    };
    block_on(perform(
        &api,
        ApiCall::List(ListQuery::Plugins(filter, PageParams::new(1, 20))),
    ));
    assert_eq!(
        transport.last().url,
        "http://api.test/api/v1/plugins?installed=true&page=1&pageSize=20"
    );
}

#[test]
fn mutations_map_to_their_routes() {
    let (api, transport, _) = setup();

    let cases = [
        (
            Mutation::TogglePlugin {
                id: "p1".into(),
                active: true,
            },
            HttpMethod::Post,
            "/plugins/p1/toggle",
        ),
        (Mutation::InstallPlugin("p2".into()), HttpMethod::Post, "/plugins/p2/install"),
        (Mutation::DeleteAsset("a1".into()), HttpMethod::Delete, "/assets/a1"),
        (Mutation::ToggleAssetFavorite("a2".into()), HttpMethod::Post, "/assets/a2/favorite"),
        (Mutation::DeleteScript("s1".into()), HttpMethod::Delete, "/scripts/s1"),
    ];
    for (mutation, method, path) in cases {
        let msg = block_on(perform(&api, ApiCall::Mutate(mutation.clone())));
        let req = transport.last();
        assert_eq!(req.method, method, "{:?}", mutation);
        assert_eq!(req.url, format!("http://api.test/api/v1{}", path));
        assert_eq!(
            msg,
            Message::MutationFinished {
                mutation,
                result: Ok(())
            }
        );
    }
}

#[test]
fn create_project_posts_draft_and_surfaces_server_detail() {
    let (api, transport, _) = setup();
    transport.reply(422, json!({ "detail": "名称已存在" }));

    let mutation = Mutation::CreateProject(ProjectDraft {
        name: Some("Poster".into()),
        kind: Some(ProjectKind::Project),
        thumbnail: None,
    });
    let msg = block_on(perform(&api, ApiCall::Mutate(mutation)));

    assert_eq!(transport.last_body(), json!({ "name": "Poster", "type": "project" }));
    match msg {
        Message::MutationFinished {
            result: Err(err), ..
        } => assert_eq!(err.detail(), Some("名称已存在")),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn reset_password_posts_the_full_form() {
    let (api, transport, _) = setup();
    let msg = block_on(perform(
        &api,
        ApiCall::ResetPassword(ResetPasswordRequest {
            email: "me@site.io".into(),
            captcha: "654321".into(),
            new_password: "longer-pass1".into(),
            confirm_password: "longer-pass1".into(),
        }),
    ));

    assert_eq!(msg, Message::ForgotResetResponse(Ok(())));
    assert_eq!(
        transport.last_route(),
        (
            HttpMethod::Post,
            "/auth/reset-password".to_string(),
            json!({
                "email": "me@site.io",
                "captcha": "654321",
                "new_password": "longer-pass1",
                "confirm_password": "longer-pass1"
            })
        )
    );
}

#[test]
fn asset_and_project_routes() {
    let (api, transport, _) = setup();

    let _ = block_on(asset::get(&api, "a7"));
    assert_eq!(
        transport.last_route(),
        (HttpMethod::Get, "/assets/a7".to_string(), Value::Null)
    );

    let draft = AssetDraft {
        asset_type: Some(AssetType::ThreeD),
        title: Some("Chair".into()),
        ..Default::default()
    };
    let _ = block_on(asset::create(&api, &draft));
    assert_eq!(
        transport.last_route(),
        (
            HttpMethod::Post,
            "/assets".to_string(),
            json!({ "type": "3d", "title": "Chair" })
        )
    );

    let rename = ProjectDraft {
        name: Some("Renamed".into()),
        ..Default::default()
    };
    let _ = block_on(project::update(&api, "p3", &rename));
    assert_eq!(
        transport.last_route(),
        (HttpMethod::Put, "/projects/p3".to_string(), json!({ "name": "Renamed" }))
    );
}

#[test]
fn script_routes() {
    let (api, transport, _) = setup();

    let _ = block_on(script::get(&api, "s2"));
    assert_eq!(
        transport.last_route(),
        (HttpMethod::Get, "/scripts/s2".to_string(), Value::Null)
    );

    let draft = ScriptDraft {
        title: Some("Pilot".into()),
        status: Some(ScriptStatus::Draft),
        ..Default::default()
    };
    let _ = block_on(script::create(&api, &draft));
    assert_eq!(
        transport.last_route(),
        (
            HttpMethod::Post,
            "/scripts".to_string(),
            json!({ "title": "Pilot", "status": "draft" })
        )
    );

    let publish = ScriptDraft {
        status: Some(ScriptStatus::Published),
        ..Default::default()
    };
    let _ = block_on(script::update(&api, "s2", &publish));
    assert_eq!(
        transport.last_route(),
        (HttpMethod::Put, "/scripts/s2".to_string(), json!({ "status": "published" }))
    );

    let import = ScriptImport {
        title: "Scene 1".into(),
        content: "INT. STUDIO - DAY".into(),
        format: ScriptFormat::Txt,
    };
    let _ = block_on(script::import(&api, &import));
    assert_eq!(
        transport.last_route(),
        (
            HttpMethod::Post,
            "/scripts/import".to_string(),
            json!({ "title": "Scene 1", "content": "INT. STUDIO - DAY", "format": "txt" })
        )
    );
}

#[test]
fn plugin_routes() {
    let (api, transport, _) = setup();

    let _ = block_on(plugin::get(&api, "p1"));
    assert_eq!(
        transport.last_route(),
        (HttpMethod::Get, "/plugins/p1".to_string(), Value::Null)
    );

    block_on(plugin::uninstall(&api, "p1")).unwrap();
    assert_eq!(
        transport.last_route(),
        (HttpMethod::Post, "/plugins/p1/uninstall".to_string(), Value::Null)
    );

    let mut config = PluginConfig::new();
    config.insert("strength".into(), json!(0.8));
    block_on(plugin::update_config(&api, "p1", &config)).unwrap();
    assert_eq!(
        transport.last_route(),
        (HttpMethod::Put, "/plugins/p1/config".to_string(), json!({ "strength": 0.8 }))
    );
}

#[test]
fn workflow_routes() {
    let (api, transport, _) = setup();

    let _ = block_on(workflow::get(&api, "w1"));
    assert_eq!(
        transport.last_route(),
        (HttpMethod::Get, "/workflows/w1".to_string(), Value::Null)
    );

    let draft = WorkflowDraft {
        name: Some("Poster pipeline".into()),
        ..Default::default()
    };
    let _ = block_on(workflow::create(&api, &draft));
    assert_eq!(
        transport.last_route(),
        (
            HttpMethod::Post,
            "/workflows".to_string(),
            json!({ "name": "Poster pipeline" })
        )
    );

    let publish = WorkflowDraft {
        status: Some(WorkflowStatus::Published),
        ..Default::default()
    };
    let _ = block_on(workflow::update(&api, "w1", &publish));
    assert_eq!(
        transport.last_route(),
        (HttpMethod::Put, "/workflows/w1".to_string(), json!({ "status": "published" }))
    );

    let _ = block_on(workflow::duplicate(&api, "w1"));
    assert_eq!(
        transport.last_route(),
        (HttpMethod::Post, "/workflows/w1/duplicate".to_string(), Value::Null)
    );
}
