use crate::POOL;
use crate::model::{AccessToken, NewAccessToken, PublishAccessToken, RequestToken};
use crate::schema::access_tokens::dsl::*;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use hex::FromHexError;
use secrets::Secret;
use std::ops::Add;
use tokio::task::spawn_blocking;
use uuid::Uuid;
use warp::Reply;
use warp::reply::{Json, WithStatus};

async fn generate_unique_token() -> Vec<u8> {
    loop {
        // Generate a secure random 32-byte token
        let token_vec = Secret::<[u8; 32]>::random(|s| s.to_vec());

        let token_to_return = token_vec.clone();

        let token_exists_result = spawn_blocking(move || {
            let mut conn = POOL.get().unwrap();
            diesel::select(diesel::dsl::exists(access_tokens.filter(token.eq(token_vec))))
                .get_result::<bool>(&mut conn)
        })
        .await;

        let token_exists = match token_exists_result {
            Ok(Ok(v)) => v,
            Ok(Err(e)) => {
                // Treat a DB error as if the token exists, to force a retry.
                eprintln!("Database error: {:?}", e);
                true
            }
            Err(join_err) => {
                eprintln!("Error joining blocking task: {:?}", join_err);
                true
            }
        };

        // If the token does not exist, return it
        if !token_exists {
            return token_to_return;
        }
    }
}

pub async fn gen_token_object(_user_id: Uuid, client_type: Option<String>) -> NewAccessToken {
    let mut _exp: DateTime<Utc> = Utc::now().add(chrono::Duration::seconds(3600));
    if let Some(client_type) = client_type {
        if client_type == "carrus-app" {
            _exp = Utc::now().add(chrono::Duration::days(28));
        }
    }
    NewAccessToken {
        user_id: _user_id,
        token: generate_unique_token().await,
        exp: _exp,
    }
}

pub async fn insert_token_object(new_token: NewAccessToken) -> QueryResult<AccessToken> {
    spawn_blocking(move || {
        let mut conn = POOL.get().unwrap();
        diesel::insert_into(access_tokens)
            .values(&new_token)
            .get_result::<AccessToken>(&mut conn)
    })
    .await
    .unwrap()
}

/// The 'auth' header carries "<hex-token>$<user-id>".
pub fn req_token_from_header(auth: &str) -> Option<RequestToken> {
    let token_and_id = auth.split('$').collect::<Vec<&str>>();
    if token_and_id.len() != 2 {
        return None;
    }
    let uid = token_and_id[1].parse::<Uuid>().ok()?;
    Some(RequestToken {
        user_id: uid,
        token: token_and_id[0].to_string(),
    })
}

/// Ok(Some(row)) when the token belongs to the user and has not expired.
/// Expired or unknown tokens come back as Ok(None).
pub async fn verify_user_token(
    _user_id: Uuid,
    token_data: &str,
) -> Result<Option<AccessToken>, FromHexError> {
    let binary_token = hex::decode(token_data)?;
    let result = spawn_blocking(move || {
        let mut conn = POOL.get().unwrap();
        access_tokens
            .filter(user_id.eq(_user_id))
            .filter(token.eq(binary_token))
            .first::<AccessToken>(&mut conn)
            .optional()
    })
    .await
    .unwrap();
    match result {
        Ok(Some(found)) if found.exp >= Utc::now() => Ok(Some(found)),
        Ok(_) => Ok(None),
        Err(e) => {
            eprintln!("Database error: {:?}", e);
            Ok(None)
        }
    }
}

/// Tokens are single-use: every authenticated call consumes the presented
/// token and hands the successor back in the 'token' response header.
pub async fn exchange_token(
    old_token: AccessToken,
    client_type: Option<String>,
) -> QueryResult<AccessToken> {
    let replacement = gen_token_object(old_token.user_id, client_type).await;
    spawn_blocking(move || {
        let mut conn = POOL.get().unwrap();
        diesel::delete(access_tokens.filter(id.eq(old_token.id))).execute(&mut conn)?;
        diesel::insert_into(access_tokens)
            .values(&replacement)
            .get_result::<AccessToken>(&mut conn)
    })
    .await
    .unwrap()
}

pub async fn rm_token_by_id(token_id: i32) {
    let rm_result = spawn_blocking(move || {
        let mut conn = POOL.get().unwrap();
        diesel::delete(access_tokens.filter(id.eq(token_id))).execute(&mut conn)
    })
    .await
    .unwrap();
    if let Err(e) = rm_result {
        eprintln!("Database error: {:?}", e);
    }
}

pub fn wrap_json_reply_with_token(
    token_data: &PublishAccessToken,
    reply: WithStatus<Json>,
) -> warp::reply::Response {
    warp::reply::with_header(reply, "token", token_data.token.clone()).into_response()
}

// -------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_header_parses_token_and_user_id() {
        let uid = Uuid::new_v4();
        let header = format!("deadbeef${}", uid);
        let parsed = req_token_from_header(&header).unwrap();
        assert_eq!(parsed.user_id, uid);
        assert_eq!(parsed.token, "deadbeef");
    }

    #[test]
    fn auth_header_without_separator_is_rejected() {
        assert!(req_token_from_header("deadbeef").is_none());
    }

    #[test]
    fn auth_header_with_extra_separator_is_rejected() {
        let header = format!("dead$beef${}", Uuid::new_v4());
        assert!(req_token_from_header(&header).is_none());
    }

    #[test]
    fn auth_header_with_bad_user_id_is_rejected() {
        assert!(req_token_from_header("deadbeef$not-a-uuid").is_none());
    }
}
