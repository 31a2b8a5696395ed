use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Diesel requires us to define a custom mapping between the Rust enum
// and the database type, if we are not using string.
use crate::schema::*;
use diesel::deserialize::{self, FromSql};
use diesel::pg::{Pg, PgValue};
use diesel::serialize::{self, Output, ToSql};
use diesel::{AsExpression, FromSqlRow};
use std::io::Write;

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, AsExpression, FromSqlRow)]
#[diesel(sql_type = sql_types::AppRoleEnum)] //lets us map the enum to the app_role type in PostgresSQL
#[serde(rename_all = "lowercase")]
pub enum AppRole {
    Customer,
    Admin,
    Karyawan,
}

// metode_bayar is stored as plain text; the closed set lives on the Rust side.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, AsExpression, FromSqlRow)]
#[diesel(sql_type = diesel::sql_types::Text)]
#[serde(rename_all = "kebab-case")]
pub enum MetodeBayar {
    Transfer,
    Cash,
    CreditCard,
}

impl MetodeBayar {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetodeBayar::Transfer => "transfer",
            MetodeBayar::Cash => "cash",
            MetodeBayar::CreditCard => "credit-card",
        }
    }
}

//This is for postgres. For other databases the type might be different.
impl ToSql<sql_types::AppRoleEnum, Pg> for AppRole {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        match *self {
            AppRole::Customer => out.write_all(b"customer")?,
            AppRole::Admin => out.write_all(b"admin")?,
            AppRole::Karyawan => out.write_all(b"karyawan")?,
        }
        Ok(serialize::IsNull::No)
    }
}

impl FromSql<sql_types::AppRoleEnum, Pg> for AppRole {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        match bytes.as_bytes() {
            b"customer" => Ok(AppRole::Customer),
            b"admin" => Ok(AppRole::Admin),
            b"karyawan" => Ok(AppRole::Karyawan),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

impl ToSql<diesel::sql_types::Text, Pg> for MetodeBayar {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(serialize::IsNull::No)
    }
}

impl FromSql<diesel::sql_types::Text, Pg> for MetodeBayar {
    fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
        match bytes.as_bytes() {
            b"transfer" => Ok(MetodeBayar::Transfer),
            b"cash" => Ok(MetodeBayar::Cash),
            b"credit-card" => Ok(MetodeBayar::CreditCard),
            _ => Err("Unrecognized enum variant".into()),
        }
    }
}

#[derive(Queryable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = users)]
#[diesel(primary_key(user_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct User {
    pub user_id: Uuid,
    pub email: String,
    pub password_hash: String, // Hashed!
    pub role: AppRole,
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn to_publish_user(&self) -> PublishUser {
        PublishUser {
            user_id: self.user_id,
            email: self.email.clone(),
            role: self.role,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublishUser {
    pub user_id: Uuid,
    pub email: String,
    pub role: AppRole,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Insertable, Debug, Clone, Deserialize, Serialize)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewUser {
    pub email: String,
    pub password_hash: String, // Hash this before inserting!
    pub role: AppRole,
}

#[derive(Queryable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = customer)]
#[diesel(primary_key(id_customer))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Customer {
    pub id_customer: Uuid,
    pub user_id: Uuid,
    pub nama: String,
    pub alamat: Option<String>,
    pub no_telephone: Option<String>,
    pub no_sim: Option<String>,
    pub no_ktp: Option<String>,
}

#[derive(Insertable, Debug, Clone, Deserialize, Serialize)]
#[diesel(table_name = customer)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewCustomer {
    pub user_id: Uuid,
    pub nama: String,
    pub alamat: Option<String>,
    pub no_telephone: Option<String>,
    pub no_sim: Option<String>,
    pub no_ktp: Option<String>,
}

#[derive(Queryable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = karyawan)]
#[diesel(primary_key(id_karyawan))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Karyawan {
    pub id_karyawan: Uuid,
    pub nama: String,
    pub jabatan: Option<String>,
    pub no_telephone: Option<String>,
}

#[derive(Queryable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = mobil)]
#[diesel(primary_key(id_mobil))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Mobil {
    pub id_mobil: Uuid,
    pub plat_mobil: String,
    pub merek: String,
    pub model: String,
    pub tahun: i32,
    pub harga_sewa_per_hari: f64,
    pub status: String,
}

#[derive(Queryable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = asuransi)]
#[diesel(primary_key(id_asuransi))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Asuransi {
    pub id_asuransi: Uuid,
    pub id_mobil: Uuid,
    pub jenis_asuransi: String,
    pub nama_perusahaan: String,
    pub no_polis: String,
    pub tanggal_berakhir: NaiveDate,
}

#[derive(Queryable, Identifiable, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = transaksi)]
#[diesel(primary_key(id_rental))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Transaksi {
    pub id_rental: Uuid,
    pub id_customer: Uuid,
    pub id_karyawan: Option<Uuid>,
    pub id_mobil: Uuid,
    pub status: String,
    pub tanggal_sewa: DateTime<Utc>,
    pub tanggal_selesai_sewa: Option<DateTime<Utc>>,
    pub total_biaya: Option<f64>,
}

#[derive(Insertable, Debug, Clone, Deserialize, Serialize)]
#[diesel(table_name = transaksi)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewTransaksi {
    pub id_customer: Uuid,
    pub id_karyawan: Option<Uuid>,
    pub id_mobil: Uuid,
    pub status: String,
    pub total_biaya: Option<f64>,
}

#[derive(Queryable, Identifiable, Associations, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[diesel(belongs_to(Transaksi, foreign_key = id_rental))]
#[diesel(table_name = payment)]
#[diesel(primary_key(id_pembayaran))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Payment {
    pub id_pembayaran: Uuid,
    pub id_rental: Uuid,
    pub jumlah_bayar: f64,
    pub metode_bayar: MetodeBayar,
    pub tanggal_bayar: Option<DateTime<Utc>>,
}

#[derive(Insertable, Debug, Clone, Deserialize, Serialize)]
#[diesel(table_name = payment)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewPayment {
    pub id_rental: Uuid,
    pub jumlah_bayar: f64,
    pub metode_bayar: MetodeBayar,
}

#[derive(Queryable, Identifiable, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[diesel(table_name = access_tokens)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AccessToken {
    pub id: i32,
    pub user_id: Uuid,
    pub token: Vec<u8>,
    pub exp: DateTime<Utc>,
}

impl AccessToken {
    pub fn to_publish_access_token(&self) -> PublishAccessToken {
        PublishAccessToken {
            user_id: self.user_id,
            token: hex::encode(&self.token),
            exp: self.exp,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishAccessToken {
    pub user_id: Uuid,
    pub token: String,
    pub exp: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone, Deserialize, Serialize)]
#[diesel(table_name = access_tokens)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewAccessToken {
    pub user_id: Uuid,
    pub token: Vec<u8>,
    pub exp: DateTime<Utc>,
}

// 'auth' request header carries "<hex-token>$<user-id>".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestToken {
    pub user_id: Uuid,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_role_wire_form_is_lowercase() {
        assert_eq!(
            serde_json::to_value(AppRole::Customer).unwrap(),
            serde_json::json!("customer")
        );
        assert_eq!(
            serde_json::from_str::<AppRole>("\"karyawan\"").unwrap(),
            AppRole::Karyawan
        );
    }

    #[test]
    fn metode_bayar_wire_form_matches_db_text() {
        for metode in [
            MetodeBayar::Transfer,
            MetodeBayar::Cash,
            MetodeBayar::CreditCard,
        ] {
            let wire = serde_json::to_value(metode).unwrap();
            assert_eq!(wire, serde_json::json!(metode.as_str()));
        }
    }

    #[test]
    fn metode_bayar_credit_card_is_hyphenated() {
        assert_eq!(
            serde_json::to_value(MetodeBayar::CreditCard).unwrap(),
            serde_json::json!("credit-card")
        );
        assert_eq!(
            serde_json::from_str::<MetodeBayar>("\"credit-card\"").unwrap(),
            MetodeBayar::CreditCard
        );
        assert!(serde_json::from_str::<MetodeBayar>("\"credit_card\"").is_err());
    }

    #[test]
    fn metode_bayar_rejects_unknown_method() {
        assert!(serde_json::from_str::<MetodeBayar>("\"pulsa\"").is_err());
    }

    #[test]
    fn publish_user_redacts_password_hash() {
        let user = User {
            user_id: Uuid::new_v4(),
            email: "nama@email.com".into(),
            password_hash: "$2b$12$abcdefghijklmnopqrstuv".into(),
            role: AppRole::Customer,
            created_at: None,
        };
        let publish = serde_json::to_value(user.to_publish_user()).unwrap();
        assert!(publish.get("password_hash").is_none());
        assert_eq!(publish["email"], "nama@email.com");
    }

    #[test]
    fn publish_access_token_is_hex_encoded() {
        let token = AccessToken {
            id: 1,
            user_id: Uuid::new_v4(),
            token: vec![0xde, 0xad, 0xbe, 0xef],
            exp: Utc::now(),
        };
        assert_eq!(token.to_publish_access_token().token, "deadbeef");
    }

    #[test]
    fn karyawan_row_shape_round_trips() {
        let row = Karyawan {
            id_karyawan: Uuid::new_v4(),
            nama: "Budi Santoso".into(),
            jabatan: Some("Operasional".into()),
            no_telephone: None,
        };
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(serde_json::from_str::<Karyawan>(&json).unwrap(), row);
    }
}
