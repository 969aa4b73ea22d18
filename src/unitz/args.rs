use clap::Parser;
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "unitz",
    bin_name = "unitz",
    version = get_version(),
    about = "Generate a systemd user service unit and optionally a timer unit",
    after_help = "Example timer formats: daily at 2 PM -> \"*-*-* 14:00:00\", \
every Monday at 1 AM -> \"Mon *-*-* 01:00:00\". See systemd.time(7) for the full syntax."
)]
pub struct Cli {
    /// Service name (without .service extension)
    #[arg(short, long)]
    pub name: String,

    /// Working directory for the service
    #[arg(short, long)]
    pub working_dir: PathBuf,

    /// Command to execute (ensure it is correctly quoted)
    #[arg(short, long)]
    pub command: String,

    /// Timer specification in systemd calendar format, e.g. "*-*-* 14:00:00"
    #[arg(short, long)]
    pub timer: Option<String>,

    /// Description of the service
    #[arg(short, long)]
    pub description: Option<String>,

    /// User to run the service as (defaults to the current user)
    #[arg(short, long)]
    pub user: Option<String>,
}
