//! Privacy evaluation for diary access.
//!
//! Single decision point consulted before every read or social action on a
//! diary: single-entry fetch, like reads and toggles, comment listing and
//! posting, and another user's calendar.

use entity::diary::Privacy;
use sea_orm::ConnectionTrait;

use crate::{data::mate::MateRepository, error::AppError};

/// Decides whether `viewer_id` may see a diary owned by `owner_id`.
///
/// Public entries are visible to everyone, owners always see their own
/// entries, private entries are owner-only, and mate entries require an
/// accepted relation in either direction. A failed relation lookup
/// propagates as an error and never grants access.
pub async fn can_view<C: ConnectionTrait>(
    db: &C,
    viewer_id: i32,
    owner_id: i32,
    privacy: Privacy,
) -> Result<bool, AppError> {
    if viewer_id == owner_id {
        return Ok(true);
    }

    match privacy {
        Privacy::Public => Ok(true),
        Privacy::Private => Ok(false),
        Privacy::Mate => {
            let are_mates = MateRepository::new(db).are_mates(viewer_id, owner_id).await?;
            Ok(are_mates)
        }
    }
}

/// The privacy tiers of `owner_id`'s entries that `viewer_id` may read.
///
/// `None` means every tier: the viewer is the owner. Shared by the calendar
/// and music-history views, which filter whole row sets by tier instead of
/// checking one diary at a time.
pub async fn visible_tiers<C: ConnectionTrait>(
    db: &C,
    viewer_id: i32,
    owner_id: i32,
) -> Result<Option<&'static [Privacy]>, AppError> {
    if viewer_id == owner_id {
        return Ok(None);
    }

    if MateRepository::new(db).are_mates(viewer_id, owner_id).await? {
        Ok(Some(&[Privacy::Public, Privacy::Mate]))
    } else {
        Ok(Some(&[Privacy::Public]))
    }
}
