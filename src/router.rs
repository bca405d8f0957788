use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::{
    controller::{auth, comment, diary, feed, like, mate, notification, storage, user},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", get(auth::login))
        .route("/api/auth/callback", get(auth::callback))
        .route("/api/auth/logout", get(auth::logout))
        .route("/api/users", get(user::search_users))
        .route(
            "/api/users/me",
            get(user::get_me).put(user::put_me).delete(user::delete_me),
        )
        .route("/api/users/{user_id}", get(user::get_user))
        .route("/api/users/{user_id}/music", get(user::get_music_history))
        .route("/api/diaries", post(diary::post_diary))
        .route(
            "/api/diaries/{diary_id}",
            get(diary::get_diary)
                .put(diary::put_diary)
                .delete(diary::delete_diary),
        )
        .route(
            "/api/diaries/{diary_id}/like",
            get(like::get_liked)
                .post(like::like_diary)
                .delete(like::unlike_diary),
        )
        .route(
            "/api/diaries/{diary_id}/comments",
            get(comment::get_comments).post(comment::post_comment),
        )
        .route(
            "/api/comments/{comment_id}",
            put(comment::put_comment).delete(comment::delete_comment),
        )
        .route("/api/diaries/feeds/mine", get(feed::my_feed))
        .route("/api/diaries/feeds/mates", get(feed::mate_feed))
        .route("/api/diaries/feeds/explore", get(feed::explore_feed))
        .route("/api/diaries/calendar/{user_id}", get(feed::calendar))
        .route("/api/mates", get(mate::get_mates))
        .route("/api/mates/{mate_id}", delete(mate::delete_mate))
        .route("/api/mates/requests", post(mate::post_request))
        .route("/api/mates/requests/sent", get(mate::get_sent_requests))
        .route(
            "/api/mates/requests/received",
            get(mate::get_received_requests),
        )
        .route(
            "/api/mates/requests/{mate_id}/accept",
            put(mate::accept_request),
        )
        .route(
            "/api/mates/requests/{mate_id}",
            delete(mate::reject_request),
        )
        .route("/api/notifications/unread", get(notification::get_unread))
        .route("/api/notifications/read", get(notification::get_read))
        .route(
            "/api/notifications/{notification_id}/read",
            put(notification::mark_read),
        )
        .route("/api/storage/download-url", get(storage::get_download_url))
        .route("/api/storage/upload-url", get(storage::get_upload_url))
}
