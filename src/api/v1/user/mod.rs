mod create;
mod current;
mod login;
mod rm_token;

use warp::Filter;

pub fn api_v1_user() -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone
{
    warp::path("user")
        .and(
            login::main()
                .or(create::main())
                .or(current::main())
                .or(rm_token::main()),
        )
        .and(warp::path::end())
}
