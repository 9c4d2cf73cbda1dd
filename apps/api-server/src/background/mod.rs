//! Background publish checker.
//!
//! The scheduled -> published transition is driven from outside the core:
//! this cron job periodically sweeps for scheduled posts whose date has
//! passed and publishes them.

use tokio_cron_scheduler::{Job, JobScheduler, JobSchedulerError};

use cadence_core::PostService;

/// Register and start the periodic publish sweep.
pub async fn spawn_publish_checker(
    posts: PostService,
    schedule: &str,
) -> Result<JobScheduler, JobSchedulerError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(schedule, move |_uuid, _lock| {
        let posts = posts.clone();
        Box::pin(async move {
            match posts.publish_due(chrono::Utc::now()).await {
                Ok(0) => {}
                Ok(published) => tracing::info!(published, "Publish sweep finished"),
                Err(e) => tracing::error!(error = %e, "Publish sweep failed"),
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;
    tracing::info!(schedule = %schedule, "Publish checker started");
    Ok(scheduler)
}
