use crate::{POOL, helper_model, methods, model};
use diesel::prelude::*;
use serde_derive::{Deserialize, Serialize};
use tokio::task::spawn_blocking;
use uuid::Uuid;
use warp::http::StatusCode;
use warp::{Filter, Reply};

#[derive(Deserialize, Serialize, Clone, Debug)]
struct DepositRequest {
    id_mobil: Uuid,
    metode_bayar: model::MetodeBayar,
}

/// Confirms a booking by paying the 20% deposit: one transaksi row
/// (status "DP Dibayar") and its payment row, inserted as one unit.
pub fn main() -> impl Filter<Extract = (impl Reply,), Error = warp::Rejection> + Clone {
    warp::path("deposit")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and(warp::header::optional::<String>("auth"))
        .and(warp::header::optional::<String>("x-client-type"))
        .and_then(
            async move |deposit_data: DepositRequest,
                        auth: Option<String>,
                        client_type: Option<String>| {
                // No session: bounce through /auth and land back on this car's
                // payment screen.
                let return_to = format!("/payment/{}", deposit_data.id_mobil);
                let Some(auth) = auth else {
                    return methods::standard_replies::login_required_response(&return_to);
                };
                let Some(req_token) = methods::tokens::req_token_from_header(&auth) else {
                    return methods::standard_replies::login_required_response(&return_to);
                };
                let Ok(Some(valid_token)) =
                    methods::tokens::verify_user_token(req_token.user_id, &req_token.token).await
                else {
                    return methods::standard_replies::login_required_response(&return_to);
                };
                let Ok(new_token) =
                    methods::tokens::exchange_token(valid_token, client_type).await
                else {
                    return methods::standard_replies::internal_server_error_response(
                        String::from("Gagal memperbarui sesi"),
                    );
                };
                let pub_token = new_token.to_publish_access_token();

                let customer_lookup =
                    methods::user::get_customer_by_user_id(req_token.user_id).await;
                let customer_row = match customer_lookup {
                    Ok(Some(customer_row)) => customer_row,
                    Ok(None) => {
                        return methods::standard_replies::customer_profile_missing_response(
                            &pub_token,
                        );
                    }
                    Err(e) => {
                        return methods::standard_replies::internal_server_error_response(
                            e.to_string(),
                        );
                    }
                };

                let mobil_id_clone = deposit_data.id_mobil;
                let mobil_result = spawn_blocking(move || {
                    use crate::schema::mobil::dsl::*;
                    let mut conn = POOL.get().unwrap();
                    mobil
                        .filter(id_mobil.eq(mobil_id_clone))
                        .first::<crate::model::Mobil>(&mut conn)
                        .optional()
                })
                .await
                .unwrap();
                let mobil_lookup = match mobil_result {
                    Ok(lookup) => lookup,
                    Err(e) => {
                        return methods::standard_replies::internal_server_error_response(
                            e.to_string(),
                        );
                    }
                };
                let Some(mobil_row) = mobil_lookup else {
                    let msg = helper_model::ErrorResponse {
                        title: String::from("Mobil Tidak Ditemukan"),
                        message: String::from("Mobil yang Anda cari tidak tersedia."),
                    };
                    return methods::standard_replies::wrapped_response_with_obj(
                        msg,
                        StatusCode::NOT_FOUND,
                        &pub_token,
                    );
                };

                // Same helper the detail screen used, so the amount matches
                // what was displayed.
                let dp_amount = methods::rental_rate::uang_muka(mobil_row.harga_sewa_per_hari);
                let new_transaksi = model::NewTransaksi {
                    id_customer: customer_row.id_customer,
                    id_karyawan: None,
                    id_mobil: mobil_row.id_mobil,
                    status: String::from("DP Dibayar"),
                    total_biaya: Some(mobil_row.harga_sewa_per_hari),
                };
                let metode = deposit_data.metode_bayar;

                // Rental and payment land together or not at all.
                let insert_result = spawn_blocking(move || {
                    let mut conn = POOL.get().unwrap();
                    conn.transaction::<(model::Transaksi, model::Payment), diesel::result::Error, _>(
                        |conn| {
                            let trx = diesel::insert_into(crate::schema::transaksi::table)
                                .values(&new_transaksi)
                                .get_result::<model::Transaksi>(conn)?;

                            let new_payment = model::NewPayment {
                                id_rental: trx.id_rental,
                                jumlah_bayar: dp_amount,
                                metode_bayar: metode,
                            };
                            let pay = diesel::insert_into(crate::schema::payment::table)
                                .values(&new_payment)
                                .get_result::<model::Payment>(conn)?;

                            Ok((trx, pay))
                        },
                    )
                })
                .await
                .unwrap();

                let (trx, pay) = match insert_result {
                    Ok(rows) => rows,
                    Err(e) => {
                        return methods::standard_replies::internal_server_error_response(
                            e.to_string(),
                        );
                    }
                };

                let receipt = helper_model::DepositReceipt {
                    transaksi: trx,
                    payment: pay,
                };
                methods::standard_replies::wrapped_response_with_obj(
                    receipt,
                    StatusCode::CREATED,
                    &pub_token,
                )
            },
        )
}
