//! Category and admin-workflow calls extracted from `api`.
//!
//! The admin endpoints mirror the approval workflow: a user submits a
//! category request, an admin either approves it (which creates the
//! category) or rejects it with a reason. Approval/rejection is a single
//! status transition driven by one call each.

#[cfg(test)]
#[path = "api_categories_test.rs"]
mod api_categories_test;

use super::ApiError;
use crate::net::types::{CategoryInfo, CategoryRequestInfo};

#[cfg(any(test, feature = "hydrate"))]
fn category_payload(name: &str, label: &str, color: &str, has_status: bool) -> serde_json::Value {
    serde_json::json!({ "name": name, "label": label, "color": color, "hasStatus": has_status })
}

#[cfg(any(test, feature = "hydrate"))]
fn approve_payload(label: &str, color: &str, has_status: bool) -> serde_json::Value {
    serde_json::json!({ "label": label, "color": color, "hasStatus": has_status })
}

/// Public category list used by the feed filter and composer dropdown.
pub async fn categories() -> Result<Vec<CategoryInfo>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::get_json("/categories").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::unavailable())
    }
}

/// Submit a request for a new category via `POST /api/categories/request`.
pub async fn request_category(name: &str, label: &str, color: &str) -> Result<CategoryRequestInfo, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::post_json("/categories/request", &category_payload(name, label, color, false)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, label, color);
        Err(ApiError::unavailable())
    }
}

/// Admin view of all categories.
pub async fn admin_categories() -> Result<Vec<CategoryInfo>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::get_json("/admin/categories").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::unavailable())
    }
}

/// Create a category directly (admin).
pub async fn admin_create_category(
    name: &str,
    label: &str,
    color: &str,
    has_status: bool,
) -> Result<CategoryInfo, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::post_json("/admin/categories", &category_payload(name, label, color, has_status)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, label, color, has_status);
        Err(ApiError::unavailable())
    }
}

/// Delete a category (admin).
pub async fn admin_delete_category(id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::delete(&format!("/admin/categories/{id}")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::unavailable())
    }
}

/// Pending category requests awaiting a decision (admin).
pub async fn admin_pending_category_requests() -> Result<Vec<CategoryRequestInfo>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::get_json("/admin/category-requests").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::unavailable())
    }
}

/// Approve a pending request, supplying the final label/color; the backend
/// creates the category and returns it.
pub async fn admin_approve_category_request(
    id: i64,
    label: &str,
    color: &str,
    has_status: bool,
) -> Result<CategoryInfo, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::post_json(
            &format!("/admin/category-requests/{id}/approve"),
            &approve_payload(label, color, has_status),
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, label, color, has_status);
        Err(ApiError::unavailable())
    }
}

/// Reject a pending request with a reason shown to the requester.
pub async fn admin_reject_category_request(id: i64, reason: &str) -> Result<CategoryRequestInfo, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        super::post_json(
            &format!("/admin/category-requests/{id}/reject"),
            &serde_json::json!({ "reason": reason }),
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, reason);
        Err(ApiError::unavailable())
    }
}
