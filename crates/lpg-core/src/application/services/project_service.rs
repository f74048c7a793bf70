//! Project Service - main application orchestrator.
//!
//! This service coordinates the whole workflow:
//! 1. Fetch the problem's code template
//! 2. Generate the project files with the language's generator
//! 3. Write them below the resolved project directory
//! 4. Optionally `git init`, compile and run the harness

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{CommandOutcome, CommandRunner, Filesystem, ProblemSource},
        services::location::ProjectLocation,
    },
    domain::{GeneratedProject, LanguageRegistry, ProblemRef, RenderedProject},
    error::LpgResult,
};

/// Everything needed to create one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRequest {
    pub problem: ProblemRef,
    /// Language slug or alias.
    pub language: String,
    pub location: ProjectLocation,
    /// Write into an existing directory instead of failing.
    pub force: bool,
    pub git_init: bool,
}

/// A generated project and the directory it belongs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedProject {
    pub path: PathBuf,
    pub generated: GeneratedProject,
}

/// Main project service.
pub struct ProjectService {
    registry: LanguageRegistry,
    source: Box<dyn ProblemSource>,
    filesystem: Box<dyn Filesystem>,
    runner: Box<dyn CommandRunner>,
}

impl ProjectService {
    /// Create a new project service with the given adapters.
    pub fn new(
        registry: LanguageRegistry,
        source: Box<dyn ProblemSource>,
        filesystem: Box<dyn Filesystem>,
        runner: Box<dyn CommandRunner>,
    ) -> Self {
        Self {
            registry,
            source,
            filesystem,
            runner,
        }
    }

    pub fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    /// Fetch and render the project without touching the filesystem.
    pub fn generate(&self, request: &ProjectRequest) -> LpgResult<GeneratedProject> {
        Ok(self.plan(request)?.generated)
    }

    /// Generate the project and resolve its directory. Nothing is written.
    #[instrument(
        skip_all,
        fields(problem = %request.problem, language = %request.language)
    )]
    pub fn plan(&self, request: &ProjectRequest) -> LpgResult<CreatedProject> {
        let language = self.registry.get(&request.language)?;
        let profile = language.profile();

        let template = self.source.fetch(&request.problem, profile.slug)?;
        debug!(bytes = template.code.len(), "Fetched code template");

        let generated = language.render(&template.code)?;

        let language_name = if template.lang.is_empty() {
            profile.display_name
        } else {
            template.lang.as_str()
        };
        let path = request
            .location
            .resolve(language_name, request.problem.slug())?;

        info!(
            path = %path.display(),
            files = generated.files.file_count(),
            "Project generated"
        );
        Ok(CreatedProject { path, generated })
    }

    /// Generate the project, write it and optionally initialise a git
    /// repository in it.
    pub fn create(&self, request: &ProjectRequest) -> LpgResult<CreatedProject> {
        let project = self.plan(request)?;

        self.materialize(&project.path, &project.generated.files, request.force)?;

        if request.git_init {
            let git = vec!["git".to_string(), "init".to_string()];
            self.execute(&git, &project.path)?;
        }

        info!(path = %project.path.display(), "Project created");
        Ok(project)
    }

    /// Compile (when the language needs it) and run the test harness.
    #[instrument(skip_all, fields(path = %project.path.display()))]
    pub fn run(&self, project: &CreatedProject) -> LpgResult<CommandOutcome> {
        let commands = project
            .generated
            .commands
            .as_ref()
            .ok_or_else(|| ApplicationError::NoCommands {
                language: project.generated.language.clone(),
            })?;

        if let Some(compile) = &commands.compile {
            self.execute(compile, &project.path)?;
        }
        self.execute(&commands.run, &project.path)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Write every file below `root`, removing `root` again if this call
    /// created it and a write fails.
    fn materialize(&self, root: &Path, files: &RenderedProject, force: bool) -> LpgResult<()> {
        let existed = self.filesystem.exists(root);
        if existed && !force {
            return Err(ApplicationError::ProjectExists {
                path: root.to_path_buf(),
            }
            .into());
        }

        self.filesystem
            .create_dir_all(root)
            .map_err(|e| ApplicationError::InvalidProjectPath {
                path: root.to_path_buf(),
                reason: e.to_string(),
            })?;

        match self.write_all(root, files) {
            Ok(()) => {
                info!("Successfully wrote all files");
                Ok(())
            }
            Err(e) if existed => {
                warn!(error = %e, "Write failed in a pre-existing directory, leaving it in place");
                Err(e)
            }
            Err(e) => {
                warn!("Write failed, attempting rollback");
                self.rollback(root);
                Err(e)
            }
        }
    }

    fn write_all(&self, root: &Path, files: &RenderedProject) -> LpgResult<()> {
        for (relative, content) in files.files() {
            let path = root.join(relative);

            // Ensure parent exists
            if let Some(parent) = path.parent() {
                self.filesystem.create_dir_all(parent)?;
            }

            self.filesystem.write_file(&path, content)?;
            debug!(path = %relative, "Wrote file");
        }
        Ok(())
    }

    /// Run one command and turn a non-zero exit into an error.
    fn execute(&self, command: &[String], cwd: &Path) -> LpgResult<CommandOutcome> {
        info!(command = %command.join(" "), "Running command");
        let outcome = self.runner.run(command, cwd)?;
        if outcome.success() {
            return Ok(outcome);
        }

        let reason = match outcome.code {
            Some(code) => format!("exited with status {code}"),
            None => "terminated by a signal".to_string(),
        };
        Err(ApplicationError::CommandFailed {
            command: command.join(" "),
            reason,
        }
        .into())
    }

    /// Best-effort rollback on failure.
    fn rollback(&self, root: &Path) {
        if let Err(e) = self.filesystem.remove_dir_all(root) {
            warn!(
                error = %e,
                path = %root.display(),
                "Rollback failed"
            );
        } else {
            info!("Rollback successful");
        }
    }
}
