//! # Jira API Endpoints
//!
//! One service per REST resource family. Each service borrows the
//! [`JiraClient`](crate::JiraClient) it was obtained from, e.g.
//! `client.issues()` or `client.agile().boards()`.

pub mod agile;
pub mod comments;
pub mod dashboards;
pub mod fields;
pub mod filters;
pub mod groups;
pub mod issue_types;
pub mod issues;
pub mod permission_schemes;
pub mod projects;
pub mod screens;
pub mod search;
pub mod server_info;
pub mod users;
pub mod workflows;

pub use agile::{AgileClient, BoardService, SprintService};
pub use comments::CommentService;
pub use dashboards::DashboardService;
pub use fields::FieldService;
pub use filters::{FilterService, FilterShareService};
pub use groups::GroupService;
pub use issue_types::IssueTypeService;
pub use issues::IssueService;
pub use permission_schemes::{PermissionGrantService, PermissionSchemeService};
pub use projects::ProjectService;
pub use screens::ScreenService;
pub use search::SearchService;
pub use server_info::ServerInformationService;
pub use users::{MySelfService, UserService};
pub use workflows::{WorkflowSchemeService, WorkflowService};
