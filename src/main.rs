use asset_webp::{batches, logging, run_logged};

fn main() {
    if let Err(err) = logging::init() {
        eprintln!("{err}");
    }

    for batch in batches::all() {
        match batch {
            Ok(batch) => {
                tracing::info!("Running batch {} ({} jobs)", batch.name, batch.jobs.len());
                run_logged(&batch.jobs);
            }
            Err((name, err)) => tracing::error!("Skipping batch {name}, bad job table: {err}"),
        }
    }
}
