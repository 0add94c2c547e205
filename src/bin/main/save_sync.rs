use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, channel::Channel};
use log::{info, warn};
use read_chunker_core::{
    app::ChunkPacer,
    intent::IntentSource,
    persistence::{SaveReport, SaveRequest, TextStore, run_save},
};

pub(super) const SAVE_QUEUE_DEPTH: usize = 4;

pub(super) enum SaveJob {
    Save(SaveRequest),
    Drain,
}

pub(super) type SaveJobs = Channel<CriticalSectionRawMutex, SaveJob, SAVE_QUEUE_DEPTH>;
pub(super) type SaveReports = Channel<CriticalSectionRawMutex, SaveReport, SAVE_QUEUE_DEPTH>;

/// Runs queued saves one at a time until a [`SaveJob::Drain`] arrives.
pub(super) async fn save_worker<S: TextStore>(
    mut store: S,
    jobs: &SaveJobs,
    reports: &SaveReports,
) {
    loop {
        match jobs.receive().await {
            SaveJob::Save(request) => {
                let report = run_save(&mut store, request).await;
                reports.send(report).await;
            }
            SaveJob::Drain => {
                info!("save: worker drained");
                return;
            }
        }
    }
}

/// Hand every save the pacer queued since the last call to the worker. A full
/// queue is reported back to the pacer as an immediate failure.
pub(super) fn forward_save_requests<IN: IntentSource>(
    pacer: &mut ChunkPacer<IN>,
    jobs: &SaveJobs,
) {
    while let Some(request) = pacer.take_save_request() {
        let id = request.id;
        if jobs.try_send(SaveJob::Save(request)).is_err() {
            warn!("save: queue full; dropping id={}", id);
            pacer.apply_save_report(SaveReport::failed(id, &"save queue full"));
        }
    }
}

pub(super) fn apply_save_reports<IN: IntentSource>(
    pacer: &mut ChunkPacer<IN>,
    reports: &SaveReports,
) {
    while let Ok(report) = reports.try_receive() {
        pacer.apply_save_report(report);
    }
}
