// Persistent storage keys - single source of truth for everything written to
// localStorage.
pub const STORAGE_KEY_TOKEN: &str = "token";
pub const STORAGE_KEY_USER: &str = "user";
pub const STORAGE_KEY_THEME: &str = "theme";
pub const STORAGE_KEY_LANGUAGE: &str = "language";
pub const STORAGE_KEY_SIDEBAR_COLLAPSED: &str = "sidebar_collapsed";

// API defaults
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5607/api/v1";
pub const API_TIMEOUT_MS: u32 = 30_000;

// Pagination
pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 100;

// API routes
pub const API_AUTH_LOGIN: &str = "/auth/login";
pub const API_AUTH_REGISTER: &str = "/auth/register";
pub const API_AUTH_LOGOUT: &str = "/auth/logout";
pub const API_AUTH_PROFILE: &str = "/auth/profile";
pub const API_AUTH_RESET_PASSWORD: &str = "/auth/reset-password";
pub const API_CAPTCHA_SEND: &str = "/captcha/email/send";
pub const API_CAPTCHA_FORGOT_PASSWORD: &str = "/captcha/email/forgot-password";
pub const API_ASSETS: &str = "/assets";
pub const API_PROJECTS: &str = "/projects";
pub const API_SCRIPTS: &str = "/scripts";
pub const API_PLUGINS: &str = "/plugins";
pub const API_WORKFLOWS: &str = "/workflows";

// Canvas: drop offset centres a freshly dropped node under the pointer
// (roughly half the node card width / height).
pub const DROP_OFFSET_X: f64 = 100.0;
pub const DROP_OFFSET_Y: f64 = 40.0;
pub const DRAG_DATA_FORMAT: &str = "application/reactflow";
pub const NODE_CARD_WIDTH: f64 = 240.0;
pub const NODE_PORT_OFFSET_Y: f64 = 80.0;
pub const CONNECTION_CURVE_OFFSET: f64 = 100.0;
pub const PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/150";
pub const RUN_SIMULATION_MS: u32 = 3_000;

// Split panel (teams page)
pub const PANEL_MIN_WIDTH: f64 = 411.0;
pub const PANEL_MAX_WIDTH: f64 = 600.0;

// Timers
pub const CAPTCHA_COUNTDOWN_SECS: u32 = 60;
pub const SHAKE_DURATION_MS: u32 = 500;
pub const MESSAGE_AUTO_CLEAR_MS: u32 = 3_000;
pub const RESET_REDIRECT_MS: u32 = 1_500;
pub const SIGNUP_REDIRECT_MS: u32 = 2_000;
pub const ASSISTANT_REPLY_DELAY_MS: u32 = 1_000;
pub const TOAST_DURATION_MS: u32 = 4_000;

// Dashboard prompt box
pub const MODEL_PRIMARY: &str = "DeepThink R1";
pub const MODEL_SECONDARY: &str = "GPT-4o";
pub const ASSISTANT_CANNED_REPLY: &str = "我收到了您的消息，正在处理中...";

// DOM ids
pub const ID_APP_ROOT: &str = "app-root";
pub const ID_PAGE_CONTAINER: &str = "page-container";
pub const ID_SIDEBAR: &str = "sidebar";
pub const ID_CANVAS: &str = "workflow-canvas";
pub const ID_SPLIT_CONTAINER: &str = "teams-split-container";
pub const ID_SPLIT_HANDLE: &str = "teams-split-handle";
pub const ID_SPLIT_PANEL: &str = "teams-right-panel";
pub const ID_SETTINGS_MODAL: &str = "settings-modal";

// CSS classes
pub const CSS_HIDDEN: &str = "hidden";
pub const CSS_VISIBLE: &str = "visible";
pub const CSS_ACTIVE: &str = "active";
pub const CSS_SHAKE: &str = "shake";
