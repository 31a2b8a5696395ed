use crate::{POOL, helper_model, methods, model};
use bcrypt::verify;
use diesel::prelude::*;
use serde_derive::{Deserialize, Serialize};
use tokio::task::spawn_blocking;
use warp::{Filter, Reply};

#[derive(Deserialize, Serialize, Clone)]
struct LoginData {
    email: String,
    password: String,
}

pub fn main() -> impl Filter<Extract = (impl Reply,), Error = warp::Rejection> + Clone {
    warp::path("login")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and(warp::header::optional::<String>("x-client-type"))
        .and_then(
            async move |login_data: LoginData, client_type: Option<String>| {
                let input_password = login_data.password.clone();
                let user_result = spawn_blocking(move || {
                    use crate::schema::users::dsl::*;
                    let mut conn = POOL.get().unwrap();
                    users
                        .filter(email.eq(&login_data.email))
                        .first::<model::User>(&mut conn)
                        .optional()
                })
                .await
                .unwrap();

                let user_lookup = match user_result {
                    Ok(lookup) => lookup,
                    Err(e) => {
                        return methods::standard_replies::internal_server_error_response(
                            e.to_string(),
                        );
                    }
                };
                // Unknown email and wrong password are the same reply.
                let Some(user) = user_lookup else {
                    return methods::standard_replies::credentials_invalid_response();
                };
                if !verify(&input_password, &user.password_hash).unwrap_or(false) {
                    return methods::standard_replies::credentials_invalid_response();
                }

                let Ok(customer_row) = methods::user::get_customer_by_user_id(user.user_id).await
                else {
                    return methods::standard_replies::internal_server_error_response(
                        String::from("Gagal memuat profil customer"),
                    );
                };

                let new_access_token =
                    methods::tokens::gen_token_object(user.user_id, client_type).await;
                let Ok(token_in_db) =
                    methods::tokens::insert_token_object(new_access_token).await
                else {
                    return methods::standard_replies::internal_server_error_response(
                        String::from("Gagal membuat sesi"),
                    );
                };

                let account = helper_model::AuthAccount {
                    user: user.to_publish_user(),
                    customer: customer_row,
                };
                methods::standard_replies::auth_account_reply(
                    &account,
                    &token_in_db.to_publish_access_token(),
                    false,
                )
            },
        )
}
