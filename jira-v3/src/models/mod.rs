//! # Jira Models
//!
//! Transport structures mirroring the JSON bodies of the Jira REST API.
//! Payload types skip unset fields when serialized; response types tolerate
//! missing fields when deserialized.

pub mod agile;
pub mod common;
pub mod dashboard;
pub mod field;
pub mod filter;
pub mod group;
pub mod issue;
pub mod issue_type;
pub mod permission_scheme;
pub mod project;
pub mod screen;
pub mod server_info;
pub mod user;
pub mod workflow;

pub use agile::{
  BoardIssuePageScheme, BoardLocationScheme, BoardScheme, GetBoardsOptions, IssueOptionScheme, SprintScheme,
};
pub use common::{AccountIdScheme, AdfMark, AdfNode, AvatarUrlScheme, Page};
pub use dashboard::{
  DashboardPayloadScheme, DashboardScheme, DashboardSearchOptionsScheme, PageOfDashboardsScheme, SharePermissionScheme,
  ShareRoleScheme,
};
pub use field::{CustomFieldPayloadScheme, FieldSchemaScheme, FieldSearchOptionsScheme, IssueFieldScheme};
pub use filter::{
  FilterPayloadScheme, FilterScheme, FilterSearchOptionScheme, PermissionFilterPayloadScheme, ShareScopeScheme,
};
pub use group::{GroupBulkOptionsScheme, GroupDetailScheme, GroupPayloadScheme, GroupScheme};
pub use issue::{
  CommentPayloadScheme, CommentVisibilityScheme, IssueBulkPayloadScheme, IssueBulkResponseScheme,
  IssueCommentPageScheme, IssueCommentScheme, IssueFieldsScheme, IssuePayloadScheme, IssueResponseScheme, IssueScheme,
  IssueSearchScheme, IssueTransitionScheme, IssueTransitionsScheme, SearchPayloadScheme, TransitionId,
  TransitionRequest,
};
pub use issue_type::{IssueTypePayloadScheme, IssueTypeScheme, PriorityScheme, StatusCategoryScheme, StatusScheme};
pub use permission_scheme::{
  PermissionGrantHolderScheme, PermissionGrantPayloadScheme, PermissionGrantScheme, PermissionGrantsScheme,
  PermissionSchemePageScheme, PermissionSchemePayloadScheme, PermissionSchemeScheme,
};
pub use project::{
  ProjectCategoryScheme, ProjectCreatedScheme, ProjectPayloadScheme, ProjectScheme, ProjectSearchOptionsScheme,
  ProjectStatusPageScheme,
};
pub use screen::{AvailableScreenFieldScheme, ScreenPayloadScheme, ScreenScheme, ScreenSearchOptions};
pub use server_info::ServerInformationScheme;
pub use user::{UserGroupScheme, UserGroupsScheme, UserPayloadScheme, UserScheme};
pub use workflow::{
  WorkflowPayloadScheme, WorkflowPublishedIdScheme, WorkflowScheme, WorkflowSchemePayloadScheme, WorkflowSchemeScheme,
  WorkflowSearchOptions, WorkflowStatusPayloadScheme, WorkflowStatusScheme, WorkflowTransitionPayloadScheme,
};
