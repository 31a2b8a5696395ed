use crate::{helper_model, methods};
use warp::{Filter, Reply};

/// Get-current-session: verifies the presented token, rotates it, and
/// returns the account with its customer profile.
pub fn main() -> impl Filter<Extract = (impl Reply,), Error = warp::Rejection> + Clone {
    warp::path("current")
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::header::optional::<String>("auth"))
        .and(warp::header::optional::<String>("x-client-type"))
        .and_then(
            async move |auth: Option<String>, client_type: Option<String>| {
                let Some(auth) = auth else {
                    return methods::standard_replies::login_required_response("/");
                };
                let Some(req_token) = methods::tokens::req_token_from_header(&auth) else {
                    return methods::standard_replies::login_required_response("/");
                };
                let Ok(Some(valid_token)) =
                    methods::tokens::verify_user_token(req_token.user_id, &req_token.token).await
                else {
                    return methods::standard_replies::login_required_response("/");
                };
                let Ok(new_token) =
                    methods::tokens::exchange_token(valid_token, client_type).await
                else {
                    return methods::standard_replies::internal_server_error_response(
                        String::from("Gagal memperbarui sesi"),
                    );
                };
                let pub_token = new_token.to_publish_access_token();

                let Ok(user) = methods::user::get_user_by_id(req_token.user_id).await else {
                    return methods::standard_replies::internal_server_error_response(
                        String::from("Gagal memuat akun"),
                    );
                };
                let Ok(customer_row) = methods::user::get_customer_by_user_id(user.user_id).await
                else {
                    return methods::standard_replies::internal_server_error_response(
                        String::from("Gagal memuat profil customer"),
                    );
                };

                let account = helper_model::AuthAccount {
                    user: user.to_publish_user(),
                    customer: customer_row,
                };
                methods::standard_replies::auth_account_reply(&account, &pub_token, false)
            },
        )
}
