//! Domain DTOs and response envelopes for the MotionRepo API.
//!
//! # Design
//! Every record field is optional: the remote service and the sample data
//! both omit fields freely, and nothing downstream may assume presence. Wire
//! names are camelCase to match the service's JSON.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::sample_data;

/// A workout routine composed of exercises.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    /// Minutes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_parts: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muscle_groups: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exercises: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screenshot: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}

/// A single captured movement, stored as a 3D animation file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Motion {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screenshot: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_parts: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muscle_groups: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_joints: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    /// Bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
    /// Seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

/// A rigged character model that performs motions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Avatar {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screenshot: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
}

/// Envelope for a single record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            error: None,
        }
    }

    /// A failed envelope never carries data.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: None,
            error: Some(error.into()),
        }
    }
}

/// Envelope for one page of records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub success: bool,
    pub data: Vec<T>,
    pub total: usize,
    /// 1-indexed.
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

impl<T: Clone> PaginatedResponse<T> {
    /// Slice page `page` (1-indexed) of `items`.
    ///
    /// Page 0, a zero page size, or a page past the end all yield an empty
    /// slice; `total` always reports the full length.
    pub fn page_of(items: &[T], page: u32, page_size: u32) -> Self {
        let total = items.len();
        let data = if page == 0 || page_size == 0 {
            Vec::new()
        } else {
            let start = (page as usize - 1).saturating_mul(page_size as usize);
            let end = start.saturating_add(page_size as usize).min(total);
            items.get(start..end).map(<[T]>::to_vec).unwrap_or_default()
        };
        Self {
            success: true,
            data,
            total,
            page,
            page_size,
            total_pages: total_pages(total, page_size),
        }
    }
}

impl<T> PaginatedResponse<T> {
    /// Wrap a complete result set as the only page.
    pub fn single_page(items: Vec<T>) -> Self {
        let total = items.len();
        Self {
            success: true,
            data: items,
            total,
            page: 1,
            page_size: u32::try_from(total).unwrap_or(u32::MAX),
            total_pages: 1,
        }
    }
}

/// `ceil(total / page_size)`, or 0 when `page_size` is 0.
pub fn total_pages(total: usize, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    u32::try_from(total.div_ceil(page_size as usize)).unwrap_or(u32::MAX)
}

/// The three resource collections exposed by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Workouts,
    Motions,
    Avatars,
}

impl ResourceKind {
    /// URL path segment, e.g. `workouts`.
    pub fn path(&self) -> &'static str {
        match self {
            ResourceKind::Workouts => "workouts",
            ResourceKind::Motions => "motions",
            ResourceKind::Avatars => "avatars",
        }
    }

    /// Singular display label, e.g. `Workout`.
    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Workouts => "Workout",
            ResourceKind::Motions => "Motion",
            ResourceKind::Avatars => "Avatar",
        }
    }

    pub fn not_found_message(&self) -> String {
        format!("{} not found", self.label())
    }
}

/// A record type served by the facade, from either source.
pub trait Resource: DeserializeOwned + Clone + Send + Sync + 'static {
    const KIND: ResourceKind;

    /// The fixed fallback sequence for this type.
    fn samples() -> &'static [Self];

    fn id(&self) -> Option<&str>;

    /// Case-insensitive substring match; `needle` must already be lowercase.
    fn matches(&self, needle: &str) -> bool;
}

fn text_contains(text: Option<&String>, needle: &str) -> bool {
    text.is_some_and(|t| t.to_lowercase().contains(needle))
}

fn list_contains(list: Option<&Vec<String>>, needle: &str) -> bool {
    list.is_some_and(|items| items.iter().any(|item| item.to_lowercase().contains(needle)))
}

impl Resource for Workout {
    const KIND: ResourceKind = ResourceKind::Workouts;

    fn samples() -> &'static [Self] {
        sample_data::workouts()
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn matches(&self, needle: &str) -> bool {
        text_contains(self.name.as_ref(), needle)
            || text_contains(self.description.as_ref(), needle)
            || list_contains(self.categories.as_ref(), needle)
            || list_contains(self.body_parts.as_ref(), needle)
    }
}

impl Resource for Motion {
    const KIND: ResourceKind = ResourceKind::Motions;

    fn samples() -> &'static [Self] {
        sample_data::motions()
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn matches(&self, needle: &str) -> bool {
        text_contains(self.name.as_ref(), needle)
            || text_contains(self.description.as_ref(), needle)
            || list_contains(self.categories.as_ref(), needle)
            || list_contains(self.body_parts.as_ref(), needle)
    }
}

impl Resource for Avatar {
    const KIND: ResourceKind = ResourceKind::Avatars;

    fn samples() -> &'static [Self] {
        sample_data::avatars()
    }

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    // Avatars carry no body parts.
    fn matches(&self, needle: &str) -> bool {
        text_contains(self.name.as_ref(), needle)
            || text_contains(self.description.as_ref(), needle)
            || list_contains(self.categories.as_ref(), needle)
    }
}
