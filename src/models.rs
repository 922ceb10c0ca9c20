//! Frontend Models
//!
//! Data structures matching the task manager REST API wire format.
//! The API speaks camelCase JSON; everything here is renamed accordingly.

use serde::{Deserialize, Serialize};

/// Minimal user record: the shape used in dropdowns, task references,
/// and the persisted current-user entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRef {
    pub id: i64,
    pub username: String,
}

/// Project member with its role within the project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMember {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub role: String,
}

/// Project as returned by `GET /projects` and `GET /projects/{id}`.
/// The list endpoint may omit members; the detail endpoint includes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub owner: Option<UserRef>,
    #[serde(default)]
    pub is_owner: bool,
    #[serde(default)]
    pub members: Vec<ProjectMember>,
    #[serde(default)]
    pub tasks_count: i64,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Project {
    /// Owner plus members, the set of users a task in this project
    /// may be assigned to.
    pub fn roster(&self) -> Vec<UserRef> {
        let mut roster = Vec::with_capacity(self.members.len() + 1);
        if let Some(owner) = &self.owner {
            roster.push(owner.clone());
        }
        roster.extend(self.members.iter().map(|m| UserRef {
            id: m.id,
            username: m.username.clone(),
        }));
        roster
    }

    /// Ids of everyone already on the project (owner included).
    pub fn member_ids(&self) -> Vec<i64> {
        self.roster().iter().map(|u| u.id).collect()
    }
}

/// Embedded project reference on a task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRef {
    pub id: i64,
    pub name: String,
}

/// Task as returned by `GET /tasks`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub project: ProjectRef,
    #[serde(default)]
    pub assigned_to_user: Option<UserRef>,
    pub created_by_user: UserRef,
    pub priority: Priority,
    pub status: TaskStatus,
    #[serde(default)]
    pub due_date: Option<String>,
}

/// Task status. Exactly three buckets; the kanban board has one column each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    ToDo,
    InProgress,
    Done,
}

impl TaskStatus {
    /// Kanban column order.
    pub const ALL: [TaskStatus; 3] = [TaskStatus::ToDo, TaskStatus::InProgress, TaskStatus::Done];

    /// Wire spelling, also used as the badge label.
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::ToDo => "ToDo",
            TaskStatus::InProgress => "InProgress",
            TaskStatus::Done => "Done",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ToDo" => Some(TaskStatus::ToDo),
            "InProgress" => Some(TaskStatus::InProgress),
            "Done" => Some(TaskStatus::Done),
            _ => None,
        }
    }

    /// Lowercase suffix for `status-*` CSS classes.
    pub fn css_class(self) -> &'static str {
        match self {
            TaskStatus::ToDo => "todo",
            TaskStatus::InProgress => "inprogress",
            TaskStatus::Done => "done",
        }
    }

    /// Human column heading.
    pub fn column_title(self) -> &'static str {
        match self {
            TaskStatus::ToDo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
        }
    }
}

/// Task priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Low" => Some(Priority::Low),
            "Medium" => Some(Priority::Medium),
            "High" => Some(Priority::High),
            _ => None,
        }
    }

    /// Lowercase suffix for `priority-*` CSS classes.
    pub fn css_class(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

/// Payload returned by `POST /auth/login` and `POST /auth/register`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserRef,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_wire_spellings() {
        assert_eq!(serde_json::to_string(&TaskStatus::ToDo).unwrap(), "\"ToDo\"");
        assert_eq!(serde_json::to_string(&TaskStatus::InProgress).unwrap(), "\"InProgress\"");
        assert_eq!(serde_json::to_string(&TaskStatus::Done).unwrap(), "\"Done\"");
        assert_eq!(TaskStatus::parse("InProgress"), Some(TaskStatus::InProgress));
        assert_eq!(TaskStatus::parse("in_progress"), None);
    }

    #[test]
    fn priority_wire_spellings() {
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"High\"");
        assert_eq!(Priority::parse("Low"), Some(Priority::Low));
        assert_eq!(Priority::parse("URGENT"), None);
    }

    #[test]
    fn task_deserializes_camel_case() {
        let json = r#"{
            "id": 3,
            "title": "Write docs",
            "project": { "id": 1, "name": "Docs" },
            "createdByUser": { "id": 2, "username": "ana" },
            "assignedToUser": null,
            "priority": "Medium",
            "status": "ToDo",
            "dueDate": "2026-09-01T12:00:00"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, 3);
        assert_eq!(task.status, TaskStatus::ToDo);
        assert_eq!(task.due_date.as_deref(), Some("2026-09-01T12:00:00"));
        assert!(task.assigned_to_user.is_none());
        assert_eq!(task.created_by_user.username, "ana");
    }

    #[test]
    fn project_roster_includes_owner_first() {
        let project: Project = serde_json::from_str(
            r#"{
                "id": 1,
                "name": "Docs",
                "owner": { "id": 5, "username": "bo" },
                "isOwner": true,
                "members": [{ "id": 7, "username": "cy", "role": "Member" }]
            }"#,
        )
        .unwrap();
        let roster = project.roster();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].id, 5);
        assert_eq!(roster[1].username, "cy");
        assert_eq!(project.member_ids(), vec![5, 7]);
    }

    #[test]
    fn project_list_entry_tolerates_missing_fields() {
        let project: Project = serde_json::from_str(r#"{ "id": 2, "name": "Bare" }"#).unwrap();
        assert!(project.owner.is_none());
        assert!(!project.is_owner);
        assert!(project.members.is_empty());
        assert_eq!(project.tasks_count, 0);
    }
}
