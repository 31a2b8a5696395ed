mod deposit;
mod history;

use warp::Filter;

pub fn api_v1_rental() -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone
{
    warp::path("rental")
        .and(deposit::main().or(history::main()))
        .and(warp::path::end())
}
