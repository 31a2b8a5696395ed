use crate::{POOL, helper_model, methods, model};
use diesel::prelude::*;
use tokio::task::spawn_blocking;
use uuid::Uuid;
use warp::http::StatusCode;
use warp::{Filter, Reply};

/// One vehicle with its insurance cover and the deposit owed to book it.
pub fn main() -> impl Filter<Extract = (impl Reply,), Error = warp::Rejection> + Clone {
    warp::path::param::<Uuid>()
        .and(warp::path::end())
        .and(warp::get())
        .and_then(async move |mobil_id: Uuid| {
            let fetch_result = spawn_blocking(move || {
                use crate::schema::mobil::dsl::*;
                let mut conn = POOL.get().unwrap();
                mobil
                    .filter(id_mobil.eq(mobil_id))
                    .first::<crate::model::Mobil>(&mut conn)
                    .optional()
            })
            .await
            .unwrap();
            let lookup = match fetch_result {
                Ok(lookup) => lookup,
                Err(e) => {
                    return methods::standard_replies::internal_server_error_response(
                        e.to_string(),
                    );
                }
            };
            let Some(mobil_row) = lookup else {
                return methods::standard_replies::mobil_not_found_response();
            };

            let asuransi_result = spawn_blocking(move || {
                use crate::schema::asuransi::dsl::*;
                let mut conn = POOL.get().unwrap();
                asuransi
                    .filter(id_mobil.eq(mobil_id))
                    .load::<model::Asuransi>(&mut conn)
            })
            .await
            .unwrap();
            let asuransi_list = match asuransi_result {
                Ok(list) => list,
                Err(e) => {
                    return methods::standard_replies::internal_server_error_response(
                        e.to_string(),
                    );
                }
            };

            let dp_amount = methods::rental_rate::uang_muka(mobil_row.harga_sewa_per_hari);
            let detail = helper_model::MobilDetail {
                mobil: mobil_row,
                asuransi: asuransi_list,
                uang_muka: dp_amount,
            };
            methods::standard_replies::response_with_obj(detail, StatusCode::OK)
        })
}
