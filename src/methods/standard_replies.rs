use crate::helper_model;
use crate::methods::tokens::wrap_json_reply_with_token;
use crate::model;
use warp::http::StatusCode;
use warp::{Rejection, Reply};

pub fn bad_request(err_msg: &str) -> Result<(warp::reply::Response,), Rejection> {
    let msg: helper_model::ErrorResponse = helper_model::ErrorResponse {
        title: String::from("Permintaan Tidak Valid"),
        message: err_msg.to_string(),
    };
    Ok::<_, Rejection>((warp::reply::with_status(
        warp::reply::json(&msg),
        StatusCode::BAD_REQUEST,
    )
    .into_response(),))
}

pub fn conflict(err_msg: &str) -> Result<(warp::reply::Response,), Rejection> {
    let msg: helper_model::ErrorResponse = helper_model::ErrorResponse {
        title: String::from("Konflik"),
        message: err_msg.to_string(),
    };
    Ok::<_, Rejection>((warp::reply::with_status(
        warp::reply::json(&msg),
        StatusCode::CONFLICT,
    )
    .into_response(),))
}

pub fn internal_server_error_response(msg: String) -> Result<(warp::reply::Response,), Rejection> {
    eprintln!("Internal server error: {}", msg);
    let msg: helper_model::ErrorResponse = helper_model::ErrorResponse {
        title: String::from("Kesalahan Server"),
        message: msg,
    };
    Ok::<_, Rejection>((warp::reply::with_status(
        warp::reply::json(&msg),
        StatusCode::INTERNAL_SERVER_ERROR,
    )
    .into_response(),))
}

pub fn credentials_invalid_response() -> Result<(warp::reply::Response,), Rejection> {
    let msg: helper_model::ErrorResponse = helper_model::ErrorResponse {
        title: String::from("Login Gagal"),
        message: String::from("Email atau password salah."),
    };
    Ok((warp::reply::with_status(warp::reply::json(&msg), StatusCode::UNAUTHORIZED).into_response(),))
}

/// Absent single-row fetch is its own screen state, not an error toast.
pub fn mobil_not_found_response() -> Result<(warp::reply::Response,), Rejection> {
    let msg: helper_model::ErrorResponse = helper_model::ErrorResponse {
        title: String::from("Mobil Tidak Ditemukan"),
        message: String::from("Mobil yang Anda cari tidak tersedia."),
    };
    Ok((warp::reply::with_status(warp::reply::json(&msg), StatusCode::NOT_FOUND).into_response(),))
}

/// 401 carrying the path the client should land back on after /auth.
pub fn login_required_response(return_to: &str) -> Result<(warp::reply::Response,), Rejection> {
    let msg: helper_model::LoginRequired = helper_model::LoginRequired {
        title: String::from("Login Diperlukan"),
        message: String::from("Silakan login terlebih dahulu."),
        redirect_to: format!("/auth?returnTo={}", return_to),
    };
    Ok((warp::reply::with_status(warp::reply::json(&msg), StatusCode::UNAUTHORIZED).into_response(),))
}

/// The caller is authenticated (token already rotated, so it rides along)
/// but the account has no customer row to book under.
pub fn customer_profile_missing_response(
    token_data: &model::PublishAccessToken,
) -> Result<(warp::reply::Response,), Rejection> {
    let msg: helper_model::ErrorResponse = helper_model::ErrorResponse {
        title: String::from("Profil Tidak Ditemukan"),
        message: String::from("Akun Anda tidak memiliki profil customer."),
    };
    let reply = warp::reply::with_status(warp::reply::json(&msg), StatusCode::FORBIDDEN);
    Ok((wrap_json_reply_with_token(token_data, reply),))
}

pub fn response_with_obj<T>(
    obj: T,
    status_code: StatusCode,
) -> Result<(warp::reply::Response,), Rejection>
where
    T: serde::Serialize,
{
    Ok((warp::reply::with_status(warp::reply::json(&obj), status_code).into_response(),))
}

pub fn wrapped_response_with_obj<T>(
    obj: T,
    status_code: StatusCode,
    token_data: &model::PublishAccessToken,
) -> Result<(warp::reply::Response,), Rejection>
where
    T: serde::Serialize,
{
    let reply = warp::reply::with_status(warp::reply::json(&obj), status_code);
    Ok((wrap_json_reply_with_token(token_data, reply),))
}

pub fn auth_account_reply(
    account: &helper_model::AuthAccount,
    token_data: &model::PublishAccessToken,
    is_created: bool,
) -> Result<(warp::reply::Response,), Rejection> {
    let status_code = if is_created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    let reply = warp::reply::with_status(warp::reply::json(account), status_code);
    Ok((wrap_json_reply_with_token(token_data, reply),))
}
