//! Display URLs for record screenshots.
//!
//! Sample records point at `/sample-` paths that no server hosts, and remote
//! records may have no screenshot at all. Both cases map to placeholder
//! images; anything else is passed through untouched.

use crate::types::ResourceKind;

const PLACEHOLDER_BASE: &str = "https://via.placeholder.com";
const PLACEHOLDER_HOST: &str = "placeholder.com";
const SAMPLE_PREFIX: &str = "/sample-";

/// Shown when there is neither a path nor enough context for a typed placeholder.
pub const NO_IMAGE_URL: &str = "https://via.placeholder.com/400x300/CCCCCC/FFFFFF?text=No+Image";

fn colour(kind: ResourceKind) -> &'static str {
    match kind {
        ResourceKind::Workouts => "FF6B6B",
        ResourceKind::Motions => "4ECDC4",
        ResourceKind::Avatars => "45B7D1",
    }
}

/// `avatar-003` -> `003`. Ids without a hyphen are used whole.
fn id_suffix(id: &str) -> &str {
    id.split('-').nth(1).unwrap_or(id)
}

/// Typed placeholder image for a record, labelled with the id's numeric suffix.
pub fn placeholder_url(kind: ResourceKind, id: &str) -> String {
    format!(
        "{PLACEHOLDER_BASE}/400x300/{}/FFFFFF?text={}+{}",
        colour(kind),
        kind.label(),
        id_suffix(id)
    )
}

/// Resolve a record's image reference to a displayable URL.
pub fn resolve(path: Option<&str>, kind: Option<ResourceKind>, id: Option<&str>) -> String {
    let Some(path) = path.filter(|p| !p.is_empty()) else {
        return match (kind, id) {
            (Some(kind), Some(id)) => placeholder_url(kind, id),
            _ => NO_IMAGE_URL.to_string(),
        };
    };

    if path.starts_with(SAMPLE_PREFIX) {
        let inferred = if path.contains("workout") {
            ResourceKind::Workouts
        } else if path.contains("motion") {
            ResourceKind::Motions
        } else if path.contains("avatar") {
            ResourceKind::Avatars
        } else {
            ResourceKind::Workouts
        };
        return placeholder_url(inferred, id.unwrap_or("default"));
    }

    // Absolute URLs and paths relative to the service's asset root both pass through.
    path.to_string()
}

/// Whether `path` refers to sample or placeholder imagery rather than a real asset.
pub fn is_mock_image(path: Option<&str>) -> bool {
    match path {
        None | Some("") => true,
        Some(p) => p.starts_with(SAMPLE_PREFIX) || p.contains(PLACEHOLDER_HOST),
    }
}
