//! The five server-backed list pages: assets, projects, workflows, scripts
//! and plugins.
//!
//! Each list keeps its own loading flag, last error and current page.
//! Assets, scripts and plugins are filtered by the server; project and
//! workflow search (and the workflow status chips) filter the loaded page.

use crate::components::cards::{
    asset_card, asset_details, plugin_card, project_card, script_card, workflow_card,
};
use crate::components::drawer::{drawer, DEFAULT_DRAWER_WIDTH};
use crate::components::grid::{filter_chips, grid, loading_skeleton, pager};
use crate::components::input::text_input;
use crate::components::modal::{modal, DEFAULT_MODAL_WIDTH};
use crate::constants::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use crate::messages::{Field, ListQuery, Resource, ResourcePage};
use crate::models::{
    Asset, AssetFilter, AssetSort, AssetType, PageParams, Paginated, Plugin, PluginFilter, Project,
    Script, ScriptFilter, ScriptStatus, Workflow, WorkflowStatus,
};
use crate::router::Route;
use crate::stores::UiStore;
use crate::utils::escape_html;
use chrono::{DateTime, Utc};

pub const MODAL_NEW_PROJECT: &str = "new-project";
pub const MODAL_SCRIPT_IMPORT: &str = "script-import";
pub const UNTITLED_WORKFLOW: &str = "未命名工作流";

/// Drawer id for an asset's details panel.
pub fn asset_drawer_id(asset_id: &str) -> String {
    format!("asset-{}", asset_id)
}

impl Resource {
    pub fn id(self) -> &'static str {
        match self {
            Resource::Assets => "assets",
            Resource::Projects => "projects",
            Resource::Workflows => "workflows",
            Resource::Scripts => "scripts",
            Resource::Plugins => "plugins",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        [
            Resource::Assets,
            Resource::Projects,
            Resource::Workflows,
            Resource::Scripts,
            Resource::Plugins,
        ]
        .into_iter()
        .find(|r| r.id() == id)
    }
}

/// Plugin market chips.  Category chips map onto the server's category
/// filter; "installed" onto the installed flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PluginChip {
    #[default]
    All,
    Installed,
    Training,
    ImageGen,
    Tools,
}

impl PluginChip {
    pub const ALL: [PluginChip; 5] = [
        PluginChip::All,
        PluginChip::Installed,
        PluginChip::Training,
        PluginChip::ImageGen,
        PluginChip::Tools,
    ];

    pub fn id(self) -> &'static str {
        match self {
            PluginChip::All => "all",
            PluginChip::Installed => "installed",
            PluginChip::Training => "training",
            PluginChip::ImageGen => "image-gen",
            PluginChip::Tools => "tools",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.id() == id)
    }

    pub fn label(self) -> &'static str {
        match self {
            PluginChip::All => "全部",
            PluginChip::Installed => "已安装",
            PluginChip::Training => "模型训练",
            PluginChip::ImageGen => "图像生成",
            PluginChip::Tools => "工具增强",
        }
    }

    pub fn filter(self, search: &str) -> PluginFilter {
        let mut filter = PluginFilter {
            search: search.to_string(),
            ..Default::default()
        };
        match self {
            PluginChip::All => {}
            PluginChip::Installed => filter.installed = Some(true),
            PluginChip::Training | PluginChip::ImageGen | PluginChip::Tools => {
                filter.category = Some(self.label().to_string())
            }
        }
        filter
    }
}

pub fn asset_type_id(t: Option<AssetType>) -> &'static str {
    t.map(AssetType::as_str).unwrap_or("all")
}

pub fn asset_type_from_id(id: &str) -> Option<Option<AssetType>> {
    match id {
        "all" => Some(None),
        "image" => Some(Some(AssetType::Image)),
        "3d" => Some(Some(AssetType::ThreeD)),
        "video" => Some(Some(AssetType::Video)),
        "favorite" => Some(Some(AssetType::Favorite)),
        _ => None,
    }
}

pub fn script_status_from_id(id: &str) -> Option<Option<ScriptStatus>> {
    match id {
        "all" => Some(None),
        "draft" => Some(Some(ScriptStatus::Draft)),
        "reviewing" => Some(Some(ScriptStatus::Reviewing)),
        "published" => Some(Some(ScriptStatus::Published)),
        "archived" => Some(Some(ScriptStatus::Archived)),
        _ => None,
    }
}

pub fn workflow_status_from_id(id: &str) -> Option<Option<WorkflowStatus>> {
    if id == "all" {
        return Some(None);
    }
    WorkflowStatus::ALL
        .iter()
        .copied()
        .find(|s| s.as_str() == id)
        .map(Some)
}

pub fn asset_sort_from_id(id: &str) -> Option<AssetSort> {
    match id {
        "date" => Some(AssetSort::Date),
        "name" => Some(AssetSort::Name),
        _ => None,
    }
}

/// One list page's fetch state.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    pub loading: bool,
    pub error: Option<String>,
    pub data: Option<Paginated<T>>,
    pub page: u32,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            loading: false,
            error: None,
            data: None,
            page: DEFAULT_PAGE,
        }
    }
}

impl<T> ListState<T> {
    fn params(&self) -> PageParams {
        PageParams::new(self.page, DEFAULT_PAGE_SIZE)
    }

    fn loaded(&mut self, data: Paginated<T>) {
        self.loading = false;
        self.error = None;
        self.page = data.page.max(1);
        self.data = Some(data);
    }

    fn items(&self) -> &[T] {
        self.data.as_ref().map(|d| d.items.as_slice()).unwrap_or_default()
    }

    fn total_pages(&self) -> u32 {
        self.data.as_ref().map(|d| d.total_pages).unwrap_or(0)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourcesPage {
    pub assets: ListState<Asset>,
    pub projects: ListState<Project>,
    pub workflows: ListState<Workflow>,
    pub scripts: ListState<Script>,
    pub plugins: ListState<Plugin>,

    pub asset_filter: AssetFilter,
    pub project_search: String,
    pub workflow_search: String,
    pub workflow_status: Option<WorkflowStatus>,
    pub script_filter: ScriptFilter,
    pub plugin_chip: PluginChip,
    pub plugin_search: String,

    pub new_project_name: String,
    pub script_import_title: String,
    pub script_import_content: String,
}

fn matches_search(haystack: &str, needle: &str) -> bool {
    let needle = needle.trim();
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

impl ResourcesPage {
    /// Query for the current filters and page of `resource`.
    pub fn query(&self, resource: Resource) -> ListQuery {
        match resource {
            Resource::Assets => ListQuery::Assets(self.asset_filter.clone(), self.assets.params()),
            Resource::Projects => ListQuery::Projects(self.projects.params()),
            Resource::Workflows => ListQuery::Workflows(self.workflows.params()),
            Resource::Scripts => ListQuery::Scripts(self.script_filter.clone(), self.scripts.params()),
            Resource::Plugins => ListQuery::Plugins(
                self.plugin_chip.filter(&self.plugin_search),
                self.plugins.params(),
            ),
        }
    }

    pub fn begin_load(&mut self, resource: Resource) {
        match resource {
            Resource::Assets => self.assets.loading = true,
            Resource::Projects => self.projects.loading = true,
            Resource::Workflows => self.workflows.loading = true,
            Resource::Scripts => self.scripts.loading = true,
            Resource::Plugins => self.plugins.loading = true,
        }
    }

    pub fn store(&mut self, page: ResourcePage) {
        match page {
            ResourcePage::Assets(p) => self.assets.loaded(p),
            ResourcePage::Projects(p) => self.projects.loaded(p),
            ResourcePage::Workflows(p) => self.workflows.loaded(p),
            ResourcePage::Scripts(p) => self.scripts.loaded(p),
            ResourcePage::Plugins(p) => self.plugins.loaded(p),
        }
    }

    pub fn fail(&mut self, resource: Resource, error: String) {
        let (loading, slot) = match resource {
            Resource::Assets => (&mut self.assets.loading, &mut self.assets.error),
            Resource::Projects => (&mut self.projects.loading, &mut self.projects.error),
            Resource::Workflows => (&mut self.workflows.loading, &mut self.workflows.error),
            Resource::Scripts => (&mut self.scripts.loading, &mut self.scripts.error),
            Resource::Plugins => (&mut self.plugins.loading, &mut self.plugins.error),
        };
        *loading = false;
        *slot = Some(error);
    }

    pub fn set_page(&mut self, resource: Resource, page: u32) {
        let page = page.max(1);
        match resource {
            Resource::Assets => self.assets.page = page,
            Resource::Projects => self.projects.page = page,
            Resource::Workflows => self.workflows.page = page,
            Resource::Scripts => self.scripts.page = page,
            Resource::Plugins => self.plugins.page = page,
        }
    }

    pub fn asset(&self, id: &str) -> Option<&Asset> {
        self.assets.items().iter().find(|a| a.id == id)
    }

    pub fn visible_projects(&self) -> impl Iterator<Item = &Project> {
        self.projects
            .items()
            .iter()
            .filter(move |p| matches_search(&p.name, &self.project_search))
    }

    pub fn visible_workflows(&self) -> impl Iterator<Item = &Workflow> {
        self.workflows.items().iter().filter(move |w| {
            let described = w
                .description
                .as_deref()
                .is_some_and(|d| matches_search(d, &self.workflow_search));
            self.workflow_status.map_or(true, |s| w.status == s)
                && (matches_search(&w.name, &self.workflow_search) || described)
        })
    }
}

fn page_header(title: &str, action_html: &str) -> String {
    format!(
        r#"<div class="page-header"><h1>{}</h1><div class="page-actions">{}</div></div>"#,
        title, action_html
    )
}

fn search_box(field: Field, value: &str, placeholder: &str) -> String {
    format!(
        r#"<div class="search-box"><span class="search-icon">⌕</span><input id="{id}" class="input" type="search" data-field="{id}" value="{value}" placeholder="{ph}"></div>"#,
        id = field.id(),
        value = escape_html(value),
        ph = placeholder,
    )
}

fn list_body<T>(
    resource: Resource,
    list: &ListState<T>,
    cards: Vec<String>,
    columns: u8,
    empty_text: &str,
) -> String {
    if list.loading && list.data.is_none() {
        return loading_skeleton(8);
    }
    let error = list
        .error
        .as_deref()
        .map(|e| {
            format!(
                r#"<div class="list-error"><span>{}</span><button type="button" class="btn" data-action="reload" data-arg="{}">重试</button></div>"#,
                escape_html(e),
                resource.id()
            )
        })
        .unwrap_or_default();
    format!(
        "{}{}{}",
        error,
        grid(cards, columns, empty_text),
        pager(resource.id(), list.page, list.total_pages())
    )
}

fn assets_view(page: &ResourcesPage, ui: &UiStore) -> String {
    let chips = filter_chips(
        "asset-type",
        &[("all", "全部"), ("image", "图片"), ("3d", "3D"), ("video", "视频"), ("favorite", "收藏")],
        asset_type_id(page.asset_filter.asset_type),
    );
    let sort = filter_chips(
        "asset-sort",
        &[("date", "最新"), ("name", "名称")],
        match page.asset_filter.sort_by {
            AssetSort::Date => "date",
            AssetSort::Name => "name",
        },
    );
    let cards = page.assets.items().iter().map(asset_card).collect();
    let details = ui
        .active_drawer
        .as_deref()
        .and_then(|id| id.strip_prefix("asset-"))
        .and_then(|id| page.asset(id));
    let drawer_html = drawer(
        details.is_some(),
        details.map(|a| a.title.as_str()),
        DEFAULT_DRAWER_WIDTH,
        &details.map(asset_details).unwrap_or_default(),
    );
    format!(
        r#"<div class="list-page">{header}<div class="toolbar">{chips}{sort}{search}</div>{body}</div>{drawer}"#,
        header = page_header("资产库", r#"<button type="button" class="btn btn-primary">上传资产</button>"#),
        chips = chips,
        sort = sort,
        search = search_box(Field::AssetSearch, &page.asset_filter.search, "搜索资产..."),
        body = list_body(Resource::Assets, &page.assets, cards, 4, "暂无资产"),
        drawer = drawer_html,
    )
}

fn new_project_modal(page: &ResourcesPage) -> String {
    let body = format!(
        r#"<form class="modal-form" data-form="new-project">{}<div class="modal-actions"><button type="button" class="btn" data-action="close-modal">取消</button><button type="submit" class="btn btn-primary">创建</button></div></form>"#,
        text_input(Field::NewProjectName, "text", Some("项目名称"), &page.new_project_name, "输入项目名称", None),
    );
    modal(MODAL_NEW_PROJECT, Some("新建项目"), DEFAULT_MODAL_WIDTH, "close-modal", &body)
}

fn projects_view(page: &ResourcesPage, ui: &UiStore, now: DateTime<Utc>) -> String {
    let cards = page.visible_projects().map(|p| project_card(p, now)).collect();
    let modal_html = if ui.is_modal_open(MODAL_NEW_PROJECT) {
        new_project_modal(page)
    } else {
        String::new()
    };
    format!(
        r#"<div class="list-page">{header}<div class="toolbar">{search}</div>{body}</div>{modal}"#,
        header = page_header(
            "我的项目",
            &format!(
                r#"<button type="button" class="btn btn-primary" data-action="open-modal" data-arg="{}">新建项目</button>"#,
                MODAL_NEW_PROJECT
            )
        ),
        search = search_box(Field::ProjectSearch, &page.project_search, "搜索项目..."),
        body = list_body(Resource::Projects, &page.projects, cards, 4, "暂无项目"),
        modal = modal_html,
    )
}

fn workflows_view(page: &ResourcesPage, now: DateTime<Utc>) -> String {
    let chips = filter_chips(
        "workflow-status",
        &[
            ("all", "全部"),
            ("draft", "草稿"),
            ("published", "已发布"),
            ("template", "模板"),
            ("running", "运行中"),
        ],
        page.workflow_status.map(WorkflowStatus::as_str).unwrap_or("all"),
    );
    let cards = page.visible_workflows().map(|w| workflow_card(w, now)).collect();
    format!(
        r#"<div class="list-page">{header}<div class="toolbar">{chips}{search}</div>{body}</div>"#,
        header = page_header(
            "我的工作流",
            &format!(
                r#"<a class="btn" href="{}">打开编辑器</a><button type="button" class="btn btn-primary" data-action="new-workflow">新建工作流</button>"#,
                Route::WorkflowEditor.hash()
            )
        ),
        chips = chips,
        search = search_box(Field::WorkflowSearch, &page.workflow_search, "搜索工作流..."),
        body = list_body(Resource::Workflows, &page.workflows, cards, 3, "暂无工作流"),
    )
}

fn script_import_modal(page: &ResourcesPage) -> String {
    let body = format!(
        r#"<form class="modal-form" data-form="script-import">{title}<div class="input-group"><label class="input-label" for="{cid}">剧本内容</label><textarea id="{cid}" data-field="{cid}" rows="8" placeholder="粘贴剧本文本...">{content}</textarea></div><div class="modal-actions"><button type="button" class="btn" data-action="close-modal">取消</button><button type="submit" class="btn btn-primary">导入</button></div></form>"#,
        title = text_input(Field::ScriptImportTitle, "text", Some("标题"), &page.script_import_title, "剧本标题", None),
        cid = Field::ScriptImportContent.id(),
        content = escape_html(&page.script_import_content),
    );
    modal(MODAL_SCRIPT_IMPORT, Some("导入剧本"), DEFAULT_MODAL_WIDTH, "close-modal", &body)
}

fn scripts_view(page: &ResourcesPage, ui: &UiStore, now: DateTime<Utc>) -> String {
    let chips = filter_chips(
        "script-status",
        &[("all", "全部"), ("draft", "草稿"), ("reviewing", "审核中"), ("published", "已发布")],
        page.script_filter.status.map(ScriptStatus::as_str).unwrap_or("all"),
    );
    let cards = page.scripts.items().iter().map(|s| script_card(s, now)).collect();
    let modal_html = if ui.is_modal_open(MODAL_SCRIPT_IMPORT) {
        script_import_modal(page)
    } else {
        String::new()
    };
    format!(
        r#"<div class="list-page">{header}<div class="toolbar">{chips}{search}</div>{body}</div>{modal}"#,
        header = page_header(
            "剧本库",
            &format!(
                r#"<button type="button" class="btn btn-primary" data-action="open-modal" data-arg="{}">导入剧本</button>"#,
                MODAL_SCRIPT_IMPORT
            )
        ),
        chips = chips,
        search = search_box(Field::ScriptSearch, &page.script_filter.search, "搜索剧本..."),
        body = list_body(Resource::Scripts, &page.scripts, cards, 3, "暂无剧本"),
        modal = modal_html,
    )
}

fn plugins_view(page: &ResourcesPage) -> String {
    let options: Vec<(&str, &str)> = PluginChip::ALL.iter().map(|c| (c.id(), c.label())).collect();
    let chips = filter_chips("plugin-chip", &options, page.plugin_chip.id());
    let cards = page.plugins.items().iter().map(plugin_card).collect();
    format!(
        r#"<div class="list-page">{header}<div class="toolbar">{chips}{search}</div>{body}</div>"#,
        header = page_header("插件市场", ""),
        chips = chips,
        search = search_box(Field::PluginSearch, &page.plugin_search, "搜索插件..."),
        body = list_body(Resource::Plugins, &page.plugins, cards, 3, "暂无插件"),
    )
}

/// Markup for whichever list page `resource` names.
pub fn view(resource: Resource, page: &ResourcesPage, ui: &UiStore, now: DateTime<Utc>) -> String {
    match resource {
        Resource::Assets => assets_view(page, ui),
        Resource::Projects => projects_view(page, ui, now),
        Resource::Workflows => workflows_view(page, now),
        Resource::Scripts => scripts_view(page, ui, now),
        Resource::Plugins => plugins_view(page),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProjectKind;
    use crate::storage::MemoryStorage;
    use std::rc::Rc;

    fn ui() -> UiStore {
        UiStore::new(Rc::new(MemoryStorage::new()))
    }

    fn paginated<T>(items: Vec<T>, total_pages: u32) -> Paginated<T> {
        Paginated {
            total: items.len() as u64,
            items,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            total_pages,
        }
    }

    fn project(id: &str, name: &str) -> Project {
        Project {
            id: id.into(),
            name: name.into(),
            kind: ProjectKind::Project,
            updated_at: String::new(),
            thumbnail: None,
            workflow_count: None,
        }
    }

    fn workflow(id: &str, name: &str, status: WorkflowStatus) -> Workflow {
        Workflow {
            id: id.into(),
            name: name.into(),
            description: None,
            status,
            last_edited: String::new(),
            collaborators: Vec::new(),
            thumbnail: None,
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn plugin_chips_map_to_filters() {
        assert_eq!(PluginChip::All.filter(""), PluginFilter::default());
        assert_eq!(PluginChip::Installed.filter("").installed, Some(true));
        let f = PluginChip::ImageGen.filter("lora");
        assert_eq!(f.category.as_deref(), Some("图像生成"));
        assert_eq!(f.search, "lora");
        assert_eq!(PluginChip::from_id("tools"), Some(PluginChip::Tools));
    }

    #[test]
    fn query_carries_filters_and_page() {
        let mut page = ResourcesPage::default();
        page.script_filter.status = Some(ScriptStatus::Reviewing);
        page.set_page(Resource::Scripts, 3);
        match page.query(Resource::Scripts) {
            ListQuery::Scripts(filter, params) => {
                assert_eq!(filter.status, Some(ScriptStatus::Reviewing));
                assert_eq!(params.page, 3);
            }
            other => panic!("unexpected {:?}", other),
        }
        page.set_page(Resource::Assets, 0);
        assert_eq!(page.assets.page, 1);
    }

    #[test]
    fn load_lifecycle() {
        let mut page = ResourcesPage::default();
        page.begin_load(Resource::Projects);
        assert!(view(Resource::Projects, &page, &ui(), Utc::now()).contains("skeleton"));
        page.fail(Resource::Projects, "网络错误".into());
        assert!(!page.projects.loading);
        page.store(ResourcePage::Projects(paginated(vec![project("1", "品牌")], 2)));
        assert_eq!(page.projects.error, None);
        let html = view(Resource::Projects, &page, &ui(), Utc::now());
        assert!(html.contains(r#"data-arg="projects:2""#));
    }

    #[test]
    fn project_search_is_local_and_case_insensitive() {
        let mut page = ResourcesPage::default();
        page.store(ResourcePage::Projects(paginated(
            vec![project("1", "Brand Kit"), project("2", "海报")],
            1,
        )));
        page.project_search = "brand".into();
        let names: Vec<_> = page.visible_projects().map(|p| p.id.as_str()).collect();
        assert_eq!(names, ["1"]);
    }

    #[test]
    fn workflow_status_chip_filters_loaded_page() {
        let mut page = ResourcesPage::default();
        page.store(ResourcePage::Workflows(paginated(
            vec![
                workflow("a", "草图", WorkflowStatus::Draft),
                workflow("b", "发布版", WorkflowStatus::Published),
            ],
            1,
        )));
        page.workflow_status = Some(WorkflowStatus::Published);
        let ids: Vec<_> = page.visible_workflows().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, ["b"]);
        page.workflow_status = None;
        assert_eq!(page.visible_workflows().count(), 2);
    }

    #[test]
    fn new_project_modal_only_when_open() {
        let page = ResourcesPage::default();
        let mut ui = ui();
        assert!(!view(Resource::Projects, &page, &ui, Utc::now()).contains(r#"data-form="new-project""#));
        ui.open_modal(MODAL_NEW_PROJECT);
        assert!(view(Resource::Projects, &page, &ui, Utc::now()).contains(r#"data-form="new-project""#));
    }

    #[test]
    fn chip_ids_parse() {
        assert_eq!(asset_type_from_id("3d"), Some(Some(AssetType::ThreeD)));
        assert_eq!(asset_type_from_id("all"), Some(None));
        assert_eq!(asset_type_from_id("x"), None);
        assert_eq!(workflow_status_from_id("template"), Some(Some(WorkflowStatus::Template)));
        assert_eq!(script_status_from_id("draft"), Some(Some(ScriptStatus::Draft)));
        assert_eq!(Resource::from_id("plugins"), Some(Resource::Plugins));
    }
}
