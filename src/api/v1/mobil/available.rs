use crate::{POOL, methods, model};
use diesel::prelude::*;
use std::collections::HashSet;
use tokio::task::spawn_blocking;
use uuid::Uuid;
use warp::http::StatusCode;
use warp::{Filter, Reply};

/// The show_available function: every vehicle minus those on an open
/// rental (transaksi with no tanggal_selesai_sewa). The mobil.status
/// column is display text and plays no part here.
pub fn main() -> impl Filter<Extract = (impl Reply,), Error = warp::Rejection> + Clone {
    warp::path("available")
        .and(warp::path::end())
        .and(warp::get())
        .and_then(async move || {
            let mobil_list_result = spawn_blocking(move || {
                use crate::schema::mobil::dsl::*;
                let mut conn = POOL.get().unwrap();
                mobil.load::<crate::model::Mobil>(&mut conn)
            })
            .await
            .unwrap();
            let mobil_list = match mobil_list_result {
                Ok(list) => list,
                Err(e) => {
                    return methods::standard_replies::internal_server_error_response(
                        e.to_string(),
                    );
                }
            };

            let rented_ids_result = spawn_blocking(move || {
                use crate::schema::transaksi::dsl::*;
                let mut conn = POOL.get().unwrap();
                transaksi
                    .filter(tanggal_selesai_sewa.is_null())
                    .select(id_mobil)
                    .distinct()
                    .load::<Uuid>(&mut conn)
            })
            .await
            .unwrap();
            let rented_ids = match rented_ids_result {
                Ok(ids) => ids,
                Err(e) => {
                    return methods::standard_replies::internal_server_error_response(
                        e.to_string(),
                    );
                }
            };

            let rented_set: HashSet<Uuid> = rented_ids.into_iter().collect();
            let available_mobil: Vec<model::Mobil> = mobil_list
                .into_iter()
                .filter(|m| !rented_set.contains(&m.id_mobil))
                .collect();
            methods::standard_replies::response_with_obj(available_mobil, StatusCode::OK)
        })
}
