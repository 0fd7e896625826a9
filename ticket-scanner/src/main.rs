use std::sync::Arc;
use ticket_scanner::{
    application::{self, ApplicationEnv},
    service::scan_session_service::ScanSessionStateMachine,
    terminal,
};
use tokio::sync::Notify;

const TERMINAL_BUFFER_SIZE: usize = 16;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    #[cfg(debug_assertions)]
    {
        // Ignore error because .env file is not required
        // as long as env variables are set
        let _ = dotenvy::dotenv();
    }

    let env = ApplicationEnv::parse()?;

    let _tracing_guard = application::setup_tracing(&env)?;

    let state = application::create_state(&env)?;

    let (camera, presenter) = terminal::open(TERMINAL_BUFFER_SIZE);
    let state_machine = ScanSessionStateMachine::new(state.verification_service, camera, presenter);

    let stop = Arc::new(Notify::new());
    let shutdown_task = tokio::spawn({
        let stop = stop.clone();
        async move {
            application::shutdown_signal().await;
            stop.notify_one();
        }
    });

    state_machine.run(stop).await;
    shutdown_task.abort();

    Ok(())
}
