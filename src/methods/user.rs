use crate::POOL;
use crate::model::{Customer, User};
use diesel::prelude::*;
use regex::Regex;
use tokio::task::spawn_blocking;
use uuid::Uuid;

pub async fn get_user_by_id(_user_id: Uuid) -> QueryResult<User> {
    spawn_blocking(move || {
        use crate::schema::users::dsl::*;
        let mut conn = POOL.get().unwrap();
        users.filter(user_id.eq(_user_id)).get_result::<User>(&mut conn)
    })
    .await
    .unwrap()
}

/// An account has at most one customer profile; admin and karyawan
/// accounts have none.
pub async fn get_customer_by_user_id(_user_id: Uuid) -> QueryResult<Option<Customer>> {
    spawn_blocking(move || {
        use crate::schema::customer::dsl::*;
        let mut conn = POOL.get().unwrap();
        customer
            .filter(user_id.eq(_user_id))
            .first::<Customer>(&mut conn)
            .optional()
    })
    .await
    .unwrap()
}

pub fn is_valid_email(email: &str) -> bool {
    lazy_static::lazy_static! {
        static ref EMAIL_REGEX: Regex = Regex::new(
            r"(?i)^[a-z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-z0-9-](?:[a-z0-9-]{0,61}[a-z0-9])+(?:\.[a-z0-9-](?:[a-z0-9-]{0,61}[a-z0-9])+)+$"
        ).expect("Invalid regex");
    }
    // RFC 5321 upper bound
    if email.len() > 254 {
        return false;
    }
    EMAIL_REGEX.is_match(email)
}

// -------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("nama@email.com"));
        assert!(is_valid_email("budi.santoso@mail.co.id"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email("nama"));
        assert!(!is_valid_email("nama@"));
        assert!(!is_valid_email("@email.com"));
        assert!(!is_valid_email("nama@email"));
    }

    #[test]
    fn rejects_overlong_addresses() {
        let local = "a".repeat(250);
        assert!(!is_valid_email(&format!("{}@email.com", local)));
    }
}
