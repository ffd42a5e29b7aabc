use cinema_services::ServiceKind;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cinema_services::init_tracing();
    cinema_services::run(ServiceKind::Movie).await
}
