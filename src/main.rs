use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use pinbase::assemble::Assembler;
use pinbase::error::Result;
use pinbase::persist::Persistor;
use pinbase::resolve::PinyinResolver;
use pinbase::settings::Settings;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    if let Err(cause) = run() {
        error!(%cause, "generation failed");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let settings = Settings::load()?;
    let start = format!("{:#06X}", settings.start);
    let end = format!("{:#06X}", settings.end);
    info!(%start, %end, output = %settings.output.display(), "generating pinyin database");

    let assembler = Assembler::new(PinyinResolver::new());
    let (database, statistics) = assembler.assemble_range(
        settings.start,
        settings.end,
        settings.progress_interval,
        |progress| {
            info!(
                scanned = progress.scanned,
                total = progress.total,
                recorded = progress.recorded,
                "progress"
            )
        },
    );

    let persistor = Persistor::new(&settings.output);
    let bytes = persistor.persist(&database)?;
    info!(
        scanned = statistics.scanned,
        recorded = statistics.recorded,
        failed = statistics.failed,
        kb = bytes / 1024,
        artifact = %persistor.path().display(),
        "database written"
    );
    Ok(())
}
