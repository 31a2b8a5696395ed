use crate::{POOL, helper_model, methods, model};
use bcrypt::{DEFAULT_COST, hash};
use diesel::prelude::*;
use serde_derive::{Deserialize, Serialize};
use tokio::task::spawn_blocking;
use warp::{Filter, Reply};

#[derive(Deserialize, Serialize, Clone, Debug)]
struct CreateUserData {
    email: String,
    password: String,
    nama: String,
    alamat: Option<String>,
    no_telephone: Option<String>,
    no_sim: Option<String>,
    no_ktp: Option<String>,
}

// The email pre-check can lose a race with a concurrent signup; the unique
// index on users.email has the final word.
fn insert_error_reply(e: diesel::result::Error) -> Result<(warp::reply::Response,), warp::Rejection> {
    match e {
        diesel::result::Error::DatabaseError(
            diesel::result::DatabaseErrorKind::UniqueViolation,
            _,
        ) => methods::standard_replies::conflict("Email sudah terdaftar"),
        other => methods::standard_replies::internal_server_error_response(other.to_string()),
    }
}

pub fn main() -> impl Filter<Extract = (impl Reply,), Error = warp::Rejection> + Clone {
    warp::path("create")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and(warp::header::optional::<String>("x-client-type"))
        .and_then(
            async move |user_create_data: CreateUserData, client_type: Option<String>| {
                if !methods::user::is_valid_email(&user_create_data.email) {
                    return methods::standard_replies::bad_request("Format email tidak valid");
                }
                if user_create_data.password.len() < 6 {
                    return methods::standard_replies::bad_request("Password minimal 6 karakter");
                }
                if user_create_data.nama.trim().is_empty() {
                    return methods::standard_replies::bad_request("Nama lengkap wajib diisi");
                }

                let email_clone = user_create_data.email.clone();
                let email_taken_result = spawn_blocking(move || {
                    use crate::schema::users::dsl::*;
                    let mut conn = POOL.get().unwrap();
                    diesel::select(diesel::dsl::exists(users.filter(email.eq(&email_clone))))
                        .get_result::<bool>(&mut conn)
                })
                .await
                .unwrap();
                let email_taken = match email_taken_result {
                    Ok(taken) => taken,
                    Err(e) => {
                        return methods::standard_replies::internal_server_error_response(
                            e.to_string(),
                        );
                    }
                };
                if email_taken {
                    return methods::standard_replies::conflict("Email sudah terdaftar");
                }

                let Ok(hashed_pass) = hash(&user_create_data.password, DEFAULT_COST) else {
                    return methods::standard_replies::internal_server_error_response(
                        String::from("Gagal mengamankan password"),
                    );
                };

                // Account and profile land together or not at all.
                let insert_result = spawn_blocking(move || {
                    let mut conn = POOL.get().unwrap();
                    conn.transaction::<(model::User, model::Customer), diesel::result::Error, _>(
                        |conn| {
                            let new_user = model::NewUser {
                                email: user_create_data.email.clone(),
                                password_hash: hashed_pass,
                                role: model::AppRole::Customer,
                            };
                            let user = diesel::insert_into(crate::schema::users::table)
                                .values(&new_user)
                                .get_result::<model::User>(conn)?;

                            let new_customer = model::NewCustomer {
                                user_id: user.user_id,
                                nama: user_create_data.nama.clone(),
                                alamat: user_create_data.alamat.clone(),
                                no_telephone: user_create_data.no_telephone.clone(),
                                no_sim: user_create_data.no_sim.clone(),
                                no_ktp: user_create_data.no_ktp.clone(),
                            };
                            let customer_row = diesel::insert_into(crate::schema::customer::table)
                                .values(&new_customer)
                                .get_result::<model::Customer>(conn)?;

                            Ok((user, customer_row))
                        },
                    )
                })
                .await
                .unwrap();

                let (user, customer_row) = match insert_result {
                    Ok(rows) => rows,
                    Err(e) => {
                        return insert_error_reply(e);
                    }
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
                    customer: Some(customer_row),
                };
                methods::standard_replies::auth_account_reply(
                    &account,
                    &token_in_db.to_publish_access_token(),
                    true,
                )
            },
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::result::{DatabaseErrorKind, Error as DieselError};
    use warp::http::StatusCode;

    #[test]
    fn racing_duplicate_signup_maps_to_conflict() {
        let e = DieselError::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            Box::new(String::from("duplicate key value violates unique constraint")),
        );
        let (resp,) = insert_error_reply(e).unwrap();
        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn other_insert_failures_stay_internal_errors() {
        let (resp,) = insert_error_reply(DieselError::NotFound).unwrap();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
