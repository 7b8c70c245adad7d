use std::io::{BufRead, Write};
use tracing::info;
use lms::catalog::controller::{dispatch, Route};
use lms::catalog::domain::CatalogService;
use lms::catalog::factory;
use lms::core::controller::AppState;
use lms::core::domain::Configuration;
use lms::core::library::LibraryResult;
use lms::utils::logs::setup_tracing;

fn main() -> LibraryResult<()> {
    let state = AppState::new(Configuration::from_env());
    setup_tracing(&state.config);
    info!(branch = state.config.branch_id.as_str(), "starting catalog console");

    let mut svc = factory::create_catalog_service(&state.config);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run(svc.as_mut(), stdin.lock(), &mut stdout.lock())
}

fn run<R: BufRead, W: Write>(svc: &mut dyn CatalogService, input: R, out: &mut W) -> LibraryResult<()> {
    writeln!(out, "Library Management System, type 'help' for commands.")?;
    for line in input.lines() {
        match dispatch(svc, line?.as_str()) {
            Route::Reply(Ok(text)) => writeln!(out, "{}", text)?,
            Route::Reply(Err((status, message))) => writeln!(out, "{}: {}", status, message)?,
            Route::Quit => break,
            Route::Skip => {}
        }
        out.flush()?;
    }
    info!("catalog console closed");
    Ok(())
}
