mod api;
mod db;
mod helper_model;
mod methods;
mod model;
mod schema;

use lazy_static::lazy_static;
use warp::Filter;

lazy_static! {
    pub static ref POOL: db::PgPool = db::get_connection_pool();
}

#[tokio::main]
async fn main() {
    // routing for the server
    let httpd = api::api().and(warp::path::end());
    // TODO: tls
    warp::serve(httpd).run(([127, 0, 0, 1], 3030)).await;
}
