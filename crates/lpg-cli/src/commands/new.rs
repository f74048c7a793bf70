//! Implementation of the `lpg new` command.
//!
//! Responsibility: translate CLI arguments and config into a
//! `ProjectRequest`, call the core project service, and display results.

use std::path::Path;

use tracing::{debug, info, instrument};

use lpg_adapters::{LocalFilesystem, ProcessRunner, SnippetDirectorySource, SourceFileSource};
use lpg_core::{
    application::{
        CreatedProject, ProjectLocation, ProjectRequest, ProjectService, ports::ProblemSource,
    },
    domain::{LanguageRegistry, ProblemRef},
};

use crate::{
    cli::{GlobalArgs, NewArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Execute the `lpg new` command.
///
/// 1. Resolve the problem from `--title-slug`, `--url` or `--source-file`
/// 2. Merge flags with config defaults into a `ProjectRequest`
/// 3. Early-exit with a listing if `--dry-run`
/// 4. Create the project via `ProjectService`
/// 5. Run the harness or print next steps
#[instrument(skip_all)]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let problem = resolve_problem(&args)?;
    let source = build_source(&args, &config)?;
    let request = build_request(problem, &args, &config);

    debug!(
        problem = %request.problem,
        language = %request.language,
        pattern = request.location.pattern(),
        "Request resolved"
    );

    let service = ProjectService::new(
        LanguageRegistry::builtin(),
        source,
        Box::new(LocalFilesystem::new()),
        Box::new(ProcessRunner::new()),
    );

    if args.dry_run {
        let planned = service
            .plan(&request)
            .with_cli_context(|| "Generating project")?;
        output.info(&format!(
            "Dry run: would create {}",
            planned.path.display()
        ))?;
        for path in planned.generated.files.paths() {
            output.print(&format!("  {path}"))?;
        }
        return Ok(());
    }

    let created = service
        .create(&request)
        .with_cli_context(|| "Creating project")?;
    info!(path = %created.path.display(), "Project ready");

    output.success(&format!(
        "Created {} project at {}",
        created.generated.language,
        created.path.display()
    ))?;

    if args.run {
        output.header("Running test harness...")?;
        service
            .run(&created)
            .with_cli_context(|| "Running test harness")?;
        return Ok(());
    }

    if !global.quiet {
        print_next_steps(&created, &output)?;
    }

    Ok(())
}

// ── Request construction ──────────────────────────────────────────────────────

fn resolve_problem(args: &NewArgs) -> CliResult<ProblemRef> {
    if args.title_slug.is_some() || args.url.is_some() {
        return ProblemRef::resolve(args.title_slug.as_deref(), args.url.as_deref())
            .map_err(|e| CliError::InvalidInput {
                message: e.to_string(),
                source: Some(Box::new(e)),
            });
    }

    match &args.source_file {
        Some(path) => slug_from_path(path),
        None => Err(CliError::InvalidInput {
            message: "one of --title-slug, --url or --source-file is required".into(),
            source: None,
        }),
    }
}

/// `Two_Sum.py` → `two-sum`.
fn slug_from_path(path: &Path) -> CliResult<ProblemRef> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase()
        .replace(['_', ' '], "-");

    ProblemRef::from_slug(&stem).map_err(|e| CliError::InvalidInput {
        message: format!(
            "cannot derive a title slug from '{}', pass --title-slug",
            path.display()
        ),
        source: Some(Box::new(e)),
    })
}

fn build_source(args: &NewArgs, config: &AppConfig) -> CliResult<Box<dyn ProblemSource>> {
    if let Some(file) = &args.source_file {
        return Ok(Box::new(SourceFileSource::new(file)));
    }

    let dir = args
        .problems_dir
        .as_ref()
        .or(config.sources.problems_dir.as_ref())
        .ok_or_else(|| CliError::ConfigError {
            message: "no problem source: pass --source-file or --problems-dir, \
                      or set sources.problems_dir"
                .into(),
            source: None,
        })?;
    Ok(Box::new(SnippetDirectorySource::new(dir)))
}

fn build_request(problem: ProblemRef, args: &NewArgs, config: &AppConfig) -> ProjectRequest {
    let pattern = args
        .directory
        .clone()
        .unwrap_or_else(|| config.defaults.directory.clone());

    let mut location = ProjectLocation::new(pattern);
    if let Some(home) = dirs::home_dir() {
        location = location.with_home(home);
    }

    ProjectRequest {
        problem,
        language: args
            .language
            .clone()
            .unwrap_or_else(|| config.defaults.language.clone()),
        location,
        force: args.force || config.defaults.force,
        git_init: args.git_init || config.defaults.git_init,
    }
}

// ── Output ────────────────────────────────────────────────────────────────────

fn print_next_steps(project: &CreatedProject, output: &OutputManager) -> std::io::Result<()> {
    output.print("")?;
    output.print("Next steps:")?;
    output.print(&format!("  cd {}", project.path.display()))?;
    if let Some(commands) = &project.generated.commands {
        if let Some(compile) = &commands.compile {
            output.print(&format!("  {}", compile.join(" ")))?;
        }
        output.print(&format!("  {}", commands.run.join(" ")))?;
    }
    Ok(())
}
