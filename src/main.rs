#[tokio::main]
async fn main() {
    slotbook::run().await;
}
