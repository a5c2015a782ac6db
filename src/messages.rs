// src/messages.rs
//
// Everything that can happen in the UI, plus the side effects the reducers
// ask for in return.
//
use crate::canvas::{DockTab, PaletteSection};
use crate::components::toast::ToastKind;
use crate::error::ApiError;
use crate::i18n::Language;
use crate::models::{
    Asset, AssetFilter, AssetSort, AssetType, CaptchaPurpose, PageParams, Paginated, Plugin,
    PluginFilter, Project, ProjectDraft, ResetPasswordRequest, Script, ScriptFilter, ScriptImport,
    ScriptStatus, SignupRequest, TokenResponse, User, Workflow, WorkflowDraft, WorkflowStatus,
};
use crate::pages::resources::PluginChip;
use crate::pages::teams::TeamsTool;
use crate::router::Route;
use crate::stores::{SettingsTab, Theme};

/// Text inputs bound to state.  The id is what the markup carries in
/// `data-field`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    LoginEmail,
    LoginPassword,
    SignupUsername,
    SignupEmail,
    SignupCaptcha,
    SignupPassword,
    ForgotEmail,
    ForgotCode,
    ForgotNewPassword,
    ForgotConfirmPassword,
    DashboardPrompt,
    TeamsTitle,
    TeamsChatInput,
    AssetSearch,
    ProjectSearch,
    WorkflowSearch,
    ScriptSearch,
    PluginSearch,
    NewProjectName,
    ScriptImportTitle,
    ScriptImportContent,
    NodeLabel,
    NodeContent,
}

impl Field {
    const ALL: [Field; 23] = [
        Field::LoginEmail,
        Field::LoginPassword,
        Field::SignupUsername,
        Field::SignupEmail,
        Field::SignupCaptcha,
        Field::SignupPassword,
        Field::ForgotEmail,
        Field::ForgotCode,
        Field::ForgotNewPassword,
        Field::ForgotConfirmPassword,
        Field::DashboardPrompt,
        Field::TeamsTitle,
        Field::TeamsChatInput,
        Field::AssetSearch,
        Field::ProjectSearch,
        Field::WorkflowSearch,
        Field::ScriptSearch,
        Field::PluginSearch,
        Field::NewProjectName,
        Field::ScriptImportTitle,
        Field::ScriptImportContent,
        Field::NodeLabel,
        Field::NodeContent,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Field::LoginEmail => "login-email",
            Field::LoginPassword => "login-password",
            Field::SignupUsername => "signup-username",
            Field::SignupEmail => "signup-email",
            Field::SignupCaptcha => "signup-captcha",
            Field::SignupPassword => "signup-password",
            Field::ForgotEmail => "forgot-email",
            Field::ForgotCode => "forgot-code",
            Field::ForgotNewPassword => "forgot-new-password",
            Field::ForgotConfirmPassword => "forgot-confirm-password",
            Field::DashboardPrompt => "dashboard-prompt",
            Field::TeamsTitle => "teams-title",
            Field::TeamsChatInput => "teams-chat-input",
            Field::AssetSearch => "asset-search",
            Field::ProjectSearch => "project-search",
            Field::WorkflowSearch => "workflow-search",
            Field::ScriptSearch => "script-search",
            Field::PluginSearch => "plugin-search",
            Field::NewProjectName => "new-project-name",
            Field::ScriptImportTitle => "script-import-title",
            Field::ScriptImportContent => "script-import-content",
            Field::NodeLabel => "node-label",
            Field::NodeContent => "node-content",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.id() == id)
    }
}

/// Checkboxes whose refusal is signalled with a short shake animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShakeTarget {
    LoginRemember,
    SignupTerms,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownOwner {
    Signup,
    ForgotPassword,
}

/// Server-backed list pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Assets,
    Projects,
    Workflows,
    Scripts,
    Plugins,
}

impl Resource {
    pub fn for_route(route: &Route) -> Option<Self> {
        match route {
            Route::Assets => Some(Resource::Assets),
            Route::Projects => Some(Resource::Projects),
            Route::Workflows => Some(Resource::Workflows),
            Route::Scripts => Some(Resource::Scripts),
            Route::Plugins => Some(Resource::Plugins),
            _ => None,
        }
    }
}

/// One page of results for a list page.
#[derive(Debug, Clone, PartialEq)]
pub enum ResourcePage {
    Assets(Paginated<Asset>),
    Projects(Paginated<Project>),
    Workflows(Paginated<Workflow>),
    Scripts(Paginated<Script>),
    Plugins(Paginated<Plugin>),
}

/// Fetch parameters for one list page.
#[derive(Debug, Clone, PartialEq)]
pub enum ListQuery {
    Assets(AssetFilter, PageParams),
    Projects(PageParams),
    Workflows(PageParams),
    Scripts(ScriptFilter, PageParams),
    Plugins(PluginFilter, PageParams),
}

impl ListQuery {
    pub fn resource(&self) -> Resource {
        match self {
            ListQuery::Assets(..) => Resource::Assets,
            ListQuery::Projects(..) => Resource::Projects,
            ListQuery::Workflows(..) => Resource::Workflows,
            ListQuery::Scripts(..) => Resource::Scripts,
            ListQuery::Plugins(..) => Resource::Plugins,
        }
    }
}

/// Card and toolbar actions that change server state.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    ToggleAssetFavorite(String),
    DeleteAsset(String),
    CreateProject(ProjectDraft),
    DeleteProject(String),
    CreateWorkflow(WorkflowDraft),
    DuplicateWorkflow(String),
    DeleteWorkflow(String),
    ImportScript(ScriptImport),
    DeleteScript(String),
    InstallPlugin(String),
    UninstallPlugin(String),
    TogglePlugin { id: String, active: bool },
}

impl Mutation {
    pub fn resource(&self) -> Resource {
        match self {
            Mutation::ToggleAssetFavorite(_) | Mutation::DeleteAsset(_) => Resource::Assets,
            Mutation::CreateProject(_) | Mutation::DeleteProject(_) => Resource::Projects,
            Mutation::CreateWorkflow(_)
            | Mutation::DuplicateWorkflow(_)
            | Mutation::DeleteWorkflow(_) => Resource::Workflows,
            Mutation::ImportScript(_) | Mutation::DeleteScript(_) => Resource::Scripts,
            Mutation::InstallPlugin(_)
            | Mutation::UninstallPlugin(_)
            | Mutation::TogglePlugin { .. } => Resource::Plugins,
        }
    }

    /// Toast shown when the call succeeds.
    pub fn success_text(&self) -> &'static str {
        match self {
            Mutation::ToggleAssetFavorite(_) => "已更新收藏",
            Mutation::CreateProject(_) => "项目已创建",
            Mutation::CreateWorkflow(_) => "工作流已创建",
            Mutation::DuplicateWorkflow(_) => "工作流已复制",
            Mutation::ImportScript(_) => "剧本已导入",
            Mutation::InstallPlugin(_) => "插件已安装",
            Mutation::UninstallPlugin(_) => "插件已卸载",
            Mutation::TogglePlugin { active: true, .. } => "插件已启用",
            Mutation::TogglePlugin { active: false, .. } => "插件已停用",
            Mutation::DeleteAsset(_)
            | Mutation::DeleteProject(_)
            | Mutation::DeleteWorkflow(_)
            | Mutation::DeleteScript(_) => "已删除",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // Routing / session
    RouteChanged(Route),
    Navigate(Route),
    ProfileLoaded(Result<User, ApiError>),
    Logout,
    LogoutFinished,

    // Shell
    ToggleSidebar,
    OpenSettings(Option<SettingsTab>),
    CloseSettings,
    SetSettingsTab(SettingsTab),
    SetTheme(Theme),
    SetLanguage(Language),
    OpenModal(String),
    CloseModal,
    OpenDrawer(String),
    CloseDrawer,

    // Form plumbing shared by every page
    FieldChanged { field: Field, value: String },
    ToggleReveal(Field),
    ShakeEnded(ShakeTarget),
    CountdownTick { owner: CountdownOwner, generation: u32 },

    // Login
    LoginRememberChanged(bool),
    LoginSubmit,
    LoginResponse(Result<TokenResponse, ApiError>),

    // Signup
    SignupTermsChanged(bool),
    SignupSendCaptcha,
    SignupCaptchaSent(Result<(), ApiError>),
    SignupSubmit,
    SignupResponse(Result<(), ApiError>),

    // Forgot password
    ForgotSendCode,
    ForgotCodeSent(Result<(), ApiError>),
    ForgotResend,
    ForgotResent(Result<(), ApiError>),
    ForgotSubmit,
    ForgotResetResponse(Result<(), ApiError>),
    ForgotMessageExpired(u32),

    // Dashboard home
    ToggleAgent,
    ToggleModel,
    ToggleWebSearch,
    PromptSubmit,

    // Teams workspace
    SelectTool(TeamsTool),
    ChatSend,
    AssistantReply,
    PanelPointerDown,
    PanelPointerMove { container_right: f64, pointer_x: f64 },
    PanelFrameScheduled(i32),
    PanelFrame,
    PanelPointerUp,

    // Workflow canvas
    CanvasDrop {
        payload: String,
        client_x: f64,
        client_y: f64,
        canvas_left: f64,
        canvas_top: f64,
    },
    SelectNode(String),
    ClearSelection,
    RunWorkflow,
    RunFinished,
    TogglePaletteSection(PaletteSection),
    SetDockTab(DockTab),
    NodePointerDown { node_id: String, canvas_x: f64, canvas_y: f64 },
    NodePointerMove { canvas_x: f64, canvas_y: f64 },
    NodePointerUp,
    RemoveSelectedNode,
    ResetCanvas,

    // Resource list pages
    LoadResource(Resource),
    ResourceLoaded {
        resource: Resource,
        result: Result<ResourcePage, ApiError>,
    },
    SetAssetType(Option<AssetType>),
    SetAssetSort(AssetSort),
    SetScriptStatus(Option<ScriptStatus>),
    SetPluginChip(PluginChip),
    SetWorkflowStatus(Option<WorkflowStatus>),
    SetPage { resource: Resource, page: u32 },
    SubmitNewProject,
    SubmitScriptImport,
    Mutate(Mutation),
    MutationFinished {
        mutation: Mutation,
        result: Result<(), ApiError>,
    },
}

/// Calls the command executor turns into service futures.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    Login { email: String, password: String },
    Register(SignupRequest),
    SendCaptcha { email: String, purpose: CaptchaPurpose },
    SendResetCaptcha { email: String, resend: bool },
    ResetPassword(ResetPasswordRequest),
    Logout,
    FetchProfile,
    List(ListQuery),
    Mutate(Mutation),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Chain another message to be processed
    SendMessage(Message),

    Api(ApiCall),

    /// Dispatch `message` after `delay_ms`.
    Delayed { delay_ms: u32, message: Box<Message> },

    /// Write `location.hash`; the hashchange listener does the rest.
    SetHash(Route),

    /// Ask for an animation frame for the split panel.
    RequestFrame,
    CancelFrame(i32),

    Toast { kind: ToastKind, text: String },

    NoOp,
}

impl Command {
    pub fn delayed(delay_ms: u32, message: Message) -> Self {
        Command::Delayed {
            delay_ms,
            message: Box::new(message),
        }
    }
}
