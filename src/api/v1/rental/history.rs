use crate::{POOL, helper_model, methods, model};
use diesel::prelude::*;
use tokio::task::spawn_blocking;
use warp::http::StatusCode;
use warp::{Filter, Reply};

/// The signed-in customer's rentals, newest first, each with its vehicle
/// summary, the employee who handled it (if any) and all payments.
/// Zero rentals is an ordinary empty array.
pub fn main() -> impl Filter<Extract = (impl Reply,), Error = warp::Rejection> + Clone {
    warp::path("history")
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::header::optional::<String>("auth"))
        .and(warp::header::optional::<String>("x-client-type"))
        .and_then(
            async move |auth: Option<String>, client_type: Option<String>| {
                let Some(auth) = auth else {
                    return methods::standard_replies::login_required_response("/dashboard");
                };
                let Some(req_token) = methods::tokens::req_token_from_header(&auth) else {
                    return methods::standard_replies::login_required_response("/dashboard");
                };
                let Ok(Some(valid_token)) =
                    methods::tokens::verify_user_token(req_token.user_id, &req_token.token).await
                else {
                    return methods::standard_replies::login_required_response("/dashboard");
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

                let customer_id = customer_row.id_customer;
                let record_result = spawn_blocking(move || {
                    use crate::schema::{karyawan, mobil, transaksi};
                    let mut conn = POOL.get().unwrap();

                    let rows = transaksi::table
                        .inner_join(mobil::table)
                        .left_join(karyawan::table)
                        .filter(transaksi::id_customer.eq(customer_id))
                        .order(transaksi::tanggal_sewa.desc())
                        .load::<(model::Transaksi, model::Mobil, Option<model::Karyawan>)>(
                            &mut conn,
                        )?;

                    let trx_rows: Vec<model::Transaksi> =
                        rows.iter().map(|(trx, _, _)| trx.clone()).collect();
                    let payments = model::Payment::belonging_to(&trx_rows)
                        .load::<model::Payment>(&mut conn)?
                        .grouped_by(&trx_rows);

                    let records: Vec<helper_model::RentalRecord> = rows
                        .into_iter()
                        .zip(payments)
                        .map(|((trx, mobil_row, karyawan_row), payment_rows)| {
                            helper_model::RentalRecord {
                                id_rental: trx.id_rental,
                                status: trx.status,
                                tanggal_sewa: trx.tanggal_sewa,
                                tanggal_selesai_sewa: trx.tanggal_selesai_sewa,
                                total_biaya: trx.total_biaya,
                                mobil: helper_model::MobilSummary {
                                    merek: mobil_row.merek,
                                    model: mobil_row.model,
                                    tahun: mobil_row.tahun,
                                },
                                karyawan: karyawan_row.map(|k| k.nama),
                                payment: payment_rows,
                            }
                        })
                        .collect();
                    Ok::<_, diesel::result::Error>(records)
                })
                .await
                .unwrap();

                match record_result {
                    Ok(records) => methods::standard_replies::wrapped_response_with_obj(
                        records,
                        StatusCode::OK,
                        &pub_token,
                    ),
                    Err(e) => {
                        methods::standard_replies::internal_server_error_response(e.to_string())
                    }
                }
            },
        )
}
