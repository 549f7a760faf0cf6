use chrono::Local;
use clap::Args;
use recruit_ai::config::AppConfig;
use recruit_ai::error::AppError;
use recruit_ai::workflows::screening::{
    resolve_jobs, summarize_pool, top_candidates, write_candidates_csv, CandidateSynthesizer,
    JobDescription, JobId, PoolSummary, ScreeningServiceError,
};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct PoolReportArgs {
    /// Job identifier, e.g. jd1
    #[arg(long)]
    pub(crate) job: String,
    /// JSON job catalog (defaults to APP_JOBS_PATH, then the built-in jobs)
    #[arg(long)]
    pub(crate) jobs_file: Option<PathBuf>,
    /// Number of top-ranked candidates to list
    #[arg(long, default_value_t = 10)]
    pub(crate) top: usize,
}

#[derive(Args, Debug)]
pub(crate) struct PoolExportArgs {
    /// Job identifier, e.g. jd1
    #[arg(long)]
    pub(crate) job: String,
    /// JSON job catalog (defaults to APP_JOBS_PATH, then the built-in jobs)
    #[arg(long)]
    pub(crate) jobs_file: Option<PathBuf>,
    /// Destination CSV file; writes to stdout when omitted
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

pub(crate) fn run_pool_report(args: PoolReportArgs) -> Result<(), AppError> {
    let PoolReportArgs {
        job,
        jobs_file,
        top,
    } = args;

    let job = find_job(&job, jobs_file)?;
    let candidates = CandidateSynthesizer::new().synthesize(&job, job.role_family);
    let summary = summarize_pool(&job, &candidates);

    render_summary(&summary, &job);

    if candidates.is_empty() {
        return Ok(());
    }

    println!("\nTop {} candidates", top.min(candidates.len()));
    for candidate in top_candidates(&candidates, top) {
        println!(
            "  - {} {} | {} | score {} | {} yrs | {} at {}",
            candidate.id.0,
            candidate.name,
            candidate.bucket.label(),
            candidate.composite_score,
            candidate.years_of_experience,
            candidate.current_title,
            candidate.current_company
        );
        for violation in &candidate.violations {
            println!("      ! {}", violation.message());
        }
    }

    Ok(())
}

pub(crate) fn run_pool_export(args: PoolExportArgs) -> Result<(), AppError> {
    let PoolExportArgs {
        job,
        jobs_file,
        output,
    } = args;

    let job = find_job(&job, jobs_file)?;
    let candidates = CandidateSynthesizer::new().synthesize(&job, job.role_family);

    match output {
        Some(path) => {
            let file = File::create(&path)?;
            write_candidates_csv(&candidates, BufWriter::new(file))?;
            eprintln!(
                "Wrote {} candidates for {} to {}",
                candidates.len(),
                job.id.0,
                path.display()
            );
        }
        None => write_candidates_csv(&candidates, io::stdout().lock())?,
    }

    Ok(())
}

fn find_job(job_id: &str, jobs_file: Option<PathBuf>) -> Result<JobDescription, AppError> {
    let jobs_file = match jobs_file {
        Some(path) => Some(path),
        None => AppConfig::load()?.catalog.jobs_path,
    };
    let jobs = resolve_jobs(jobs_file.as_deref())?;
    jobs.into_iter()
        .find(|job| job.id.0 == job_id)
        .ok_or_else(|| ScreeningServiceError::UnknownJob(JobId(job_id.to_string())).into())
}

fn render_summary(summary: &PoolSummary, job: &JobDescription) {
    println!("Candidate pool report ({})", Local::now().format("%Y-%m-%d %H:%M"));
    println!(
        "Job {}: {} | {}-{} yrs | role family {}",
        summary.job_id.0,
        summary.job_title,
        job.experience_min,
        job.experience_max,
        job.role_family.key()
    );
    println!("Must-have skills: {}", job.must_have_skills.join(", "));
    println!(
        "{} candidates | average score {:.1}",
        summary.total, summary.average_score
    );
    println!("Buckets:");
    for entry in &summary.buckets {
        println!("  - {}: {}", entry.label, entry.count);
    }

    if !summary.top_gaps.is_empty() {
        println!("Most common gaps:");
        for gap in &summary.top_gaps {
            println!("  - {}: missing for {} candidates", gap.skill, gap.missing_count);
        }
    }

    println!("Observations:");
    for observation in &summary.observations {
        println!("  - {observation}");
    }
}
