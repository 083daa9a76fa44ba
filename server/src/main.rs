// server/src/main.rs

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  product_db_server::run().await
}
