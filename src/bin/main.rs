use std::{
    fs,
    sync::atomic::{AtomicBool, Ordering},
};

use embassy_executor::Spawner;
use embassy_time::{Duration, Instant, Timer};
use log::{error, info, warn};
use read_chunker_core::app::{ChunkPacer, PacerConfig, TickResult};

use config::RunConfig;
use save_sync::{SaveJob, SaveJobs, SaveReports};
use terminal::{ChannelIntents, IntentQueue, TerminalRenderer};
use text_store::FileTextStore;

#[path = "main/config.rs"]
mod config;
#[path = "main/save_sync.rs"]
mod save_sync;
#[path = "main/terminal.rs"]
mod terminal;
#[path = "main/text_store.rs"]
mod text_store;

const INPUT_POLL_MS: u64 = 20;
const RATE_REPORT_SECS: u64 = 5;

static INTENTS: IntentQueue = IntentQueue::new();
static SAVE_JOBS: SaveJobs = SaveJobs::new();
static SAVE_REPORTS: SaveReports = SaveReports::new();
static SHUTDOWN: AtomicBool = AtomicBool::new(false);

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    config::init_logging();
    let config = RunConfig::from_env();
    info!(
        "boot: read-chunker starting store_dir={} speed={}",
        config.store_dir.display(),
        config.speed
    );

    let store = match FileTextStore::open(&config.store_dir) {
        Ok(store) => store,
        Err(err) => {
            error!(
                "store: cannot open {}: {}",
                config.store_dir.display(),
                err
            );
            std::process::exit(1);
        }
    };

    let startup_text = match config.startup_file.as_deref().map(fs::read_to_string) {
        Some(Ok(text)) => Some(text),
        Some(Err(err)) => {
            error!("boot: cannot read startup text: {}", err);
            std::process::exit(1);
        }
        None => None,
    };

    if let Err(err) = terminal::spawn_command_reader(&INTENTS, &SHUTDOWN) {
        error!("input: cannot start command reader: {}", err);
        std::process::exit(1);
    }

    let mut pacer = ChunkPacer::new(
        ChannelIntents::new(&INTENTS),
        PacerConfig {
            speed: config.speed,
        },
    );
    let mut renderer = TerminalRenderer::new();
    let loop_start = Instant::now();

    if let Some(text) = startup_text {
        let chunks = pacer.load(&text, 0).len();
        info!("boot: loaded startup text chunks={}", chunks);
    }

    let ui_future = async {
        let mut report_words = 0u64;
        let mut report_start = Instant::now();
        let mut render_fault_logged = false;

        loop {
            save_sync::apply_save_reports(&mut pacer, &SAVE_REPORTS);

            let now_ms = loop_start.elapsed().as_millis();
            if pacer.tick(now_ms) == TickResult::RenderRequested
                && let Err(err) = renderer.render(pacer.snapshot())
                && !render_fault_logged
            {
                warn!("render: stdout write failed: {}", err);
                render_fault_logged = true;
            }

            save_sync::forward_save_requests(&mut pacer, &SAVE_JOBS);

            report_words = report_words.saturating_add(pacer.drain_revealed_words() as u64);
            let elapsed = report_start.elapsed();
            if elapsed >= Duration::from_secs(RATE_REPORT_SECS) {
                if report_words > 0 {
                    let elapsed_ms = elapsed.as_millis().max(1);
                    let wpm_x100 = report_words * 6_000_000 / elapsed_ms;
                    info!(
                        "effective_wpm={}.{:02} words={} elapsed_ms={}",
                        wpm_x100 / 100,
                        wpm_x100 % 100,
                        report_words,
                        elapsed_ms
                    );
                }
                report_words = 0;
                report_start = Instant::now();
            }

            if SHUTDOWN.load(Ordering::Acquire) && INTENTS.is_empty() {
                break;
            }

            let sleep_ms = pacer
                .next_deadline_ms()
                .map_or(INPUT_POLL_MS, |deadline| {
                    deadline.saturating_sub(now_ms).min(INPUT_POLL_MS)
                });
            Timer::after_millis(sleep_ms).await;
        }

        info!("shutdown: waiting for pending saves");
        SAVE_JOBS.send(SaveJob::Drain).await;
    };
    let save_future = save_sync::save_worker(store, &SAVE_JOBS, &SAVE_REPORTS);

    embassy_futures::join::join(ui_future, save_future).await;
    std::process::exit(0);
}
