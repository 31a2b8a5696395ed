mod mobil;
mod rental;
mod user;

use warp::Filter;

pub fn api_v1() -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path("v1")
        .and(
            user::api_v1_user()
                .or(mobil::api_v1_mobil())
                .or(rental::api_v1_rental()),
        )
        .and(warp::path::end())
}
