use crate::model;
use chrono::{DateTime, Utc};
use serde_derive::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ErrorResponse {
    pub title: String,
    pub message: String,
}

// 401 body for screens that must bounce through /auth and come back.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct LoginRequired {
    pub title: String,
    pub message: String,
    pub redirect_to: String,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct AuthAccount {
    pub user: model::PublishUser,
    pub customer: Option<model::Customer>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct MobilDetail {
    pub mobil: model::Mobil,
    pub asuransi: Vec<model::Asuransi>,
    pub uang_muka: f64,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct MobilSummary {
    pub merek: String,
    pub model: String,
    pub tahun: i32,
}

// One dashboard row: a rental with its vehicle summary and nested payments.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct RentalRecord {
    pub id_rental: Uuid,
    pub status: String,
    pub tanggal_sewa: DateTime<Utc>,
    pub tanggal_selesai_sewa: Option<DateTime<Utc>>,
    pub total_biaya: Option<f64>,
    pub mobil: MobilSummary,
    pub karyawan: Option<String>,
    pub payment: Vec<model::Payment>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct DepositReceipt {
    pub transaksi: model::Transaksi,
    pub payment: model::Payment,
}
