mod available;
mod get;

use warp::Filter;

pub fn api_v1_mobil() -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone
{
    warp::path("mobil")
        .and(available::main().or(get::main()))
        .and(warp::path::end())
}
