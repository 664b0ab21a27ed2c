use statecraft::{ConcreteStateA, Context};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .without_time()
        .init();

    let mut context = match Context::builder().initial(ConcreteStateA).build() {
        Ok(context) => context,
        Err(e) => {
            tracing::error!("Failed to build context: {}", e);
            std::process::exit(1);
        }
    };

    context.request1();
    context.request2();
}
