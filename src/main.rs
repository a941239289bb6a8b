#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), pk_portfolio::server::StartupError> {
    pk_portfolio::server::run().await.inspect_err(|err| {
        tracing::error!(error = %err, "server stopped");
    })
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
