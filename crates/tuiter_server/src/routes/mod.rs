use lazy_static::lazy_static;
use rocket::route::Route;

mod bookmarks;
mod follows;
mod likes;
mod messages;
mod tuits;
mod users;

lazy_static! {
    pub(crate) static ref USER_ROUTES: Vec<Route> = routes![
        users::find_all_users,
        users::find_user_by_id,
        users::create_user,
        users::update_user,
        users::delete_user,
        users::delete_all_users,
    ];
    pub(crate) static ref TUIT_ROUTES: Vec<Route> = routes![
        tuits::find_all_tuits,
        tuits::find_tuits_by_user,
        tuits::find_tuit_by_id,
        tuits::create_tuit,
        tuits::update_tuit,
        tuits::delete_tuit,
    ];
    pub(crate) static ref LIKE_ROUTES: Vec<Route> = routes![
        likes::find_tuits_liked_by_user,
        likes::find_users_that_liked_tuit,
        likes::user_likes_tuit,
        likes::user_unlikes_tuit,
    ];
    pub(crate) static ref FOLLOW_ROUTES: Vec<Route> = routes![
        follows::find_followed_users,
        follows::find_followers,
        follows::user_follows_user,
        follows::user_unfollows_user,
    ];
    pub(crate) static ref BOOKMARK_ROUTES: Vec<Route> = routes![
        bookmarks::find_tuits_bookmarked_by_user,
        bookmarks::find_users_that_bookmarked_tuit,
        bookmarks::user_bookmarks_tuit,
        bookmarks::user_unbookmarks_tuit,
    ];
    pub(crate) static ref MESSAGE_ROUTES: Vec<Route> = routes![
        messages::find_messages_from_user,
        messages::find_messages_to_user,
        messages::find_messages_between,
        messages::send_message,
        messages::update_message,
        messages::delete_message,
    ];
}
