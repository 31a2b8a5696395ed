use crate::methods;
use warp::http::StatusCode;
use warp::reply::with_status;
use warp::{Filter, Reply, reply};

/// Sign-out. Always 200: deleting an already-dead session is not an error.
pub fn main() -> impl Filter<Extract = (impl Reply,), Error = warp::Rejection> + Clone {
    warp::path("remove-token")
        .and(warp::path::end())
        .and(warp::delete())
        .and(warp::header::optional::<String>("auth"))
        .and_then(async move |auth: Option<String>| {
            if let Some(auth) = auth {
                if let Some(req_token) = methods::tokens::req_token_from_header(&auth) {
                    if let Ok(Some(valid_token)) =
                        methods::tokens::verify_user_token(req_token.user_id, &req_token.token)
                            .await
                    {
                        methods::tokens::rm_token_by_id(valid_token.id).await;
                    }
                }
            }
            let msg = serde_json::json!({});
            Ok::<_, warp::Rejection>((with_status(reply::json(&msg), StatusCode::OK)
                .into_response(),))
        })
}
