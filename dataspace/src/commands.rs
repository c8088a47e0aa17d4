use std::fmt;
use std::io::Write;
use std::sync::Arc;

use dataspace_api_client::{DataspaceApiClient, DataspaceApiClientError};
use dataspace_api_schema::{workspace::list::WorkspaceListQuery, CreateTarget, MutationTarget};
use dataspace_common::credentials::EnvCredentials;
use dataspace_config_file::{DataspaceConfigError, DataspaceConfigToml};
use dataspace_modal::{ConfirmationModal, FormModal, MutationTransport, SubmitError};

use crate::args::{
    Args, CleanedFolderSubcommands, CleanedWorkspaceSubcommands, Commands, FileSubcommands,
    FolderSubcommands, WorkspaceSubcommands,
};
use crate::console::{Console, Prompt};
use crate::settings::Settings;

#[derive(Debug)]
pub enum CliError {
    Config(DataspaceConfigError),
    MissingSetting(&'static str),
    IO(std::io::Error),
    Submit(SubmitError),
    ApiClient(DataspaceApiClientError),
    /// Already shown to the user.
    Failed(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(e) => write!(f, "{}", e),
            CliError::MissingSetting(name) => write!(
                f,
                "{} is not set (pass --{} or add it to the config file)",
                name,
                name.replace('_', "-")
            ),
            CliError::IO(e) => write!(f, "{}", e),
            CliError::Submit(e) => write!(f, "{}", e),
            CliError::ApiClient(e) => write!(f, "{}", e),
            CliError::Failed(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::IO(e)
    }
}

/// Deletes `target` after the user confirms (or straight away with
/// `assume_yes`).
pub fn delete_with_confirmation<T, P, W>(
    target: MutationTarget,
    assume_yes: bool,
    transport: &T,
    console: &Console<P, W>,
) -> Result<(), CliError>
where
    T: MutationTransport + ?Sized,
    P: Prompt,
    W: Write,
{
    let mut modal = ConfirmationModal::for_target(target);
    modal.set_open(true);

    if !assume_yes && !console.confirm(&modal.prompt())? {
        modal.cancel(|| log::info!("delete of {} cancelled", modal.subject_label()));
        console.println("Cancelled.")?;
        return Ok(());
    }

    let outcome = modal
        .confirm(transport, console, || {
            log::debug!("{} deleted, closing prompt", modal.subject_label())
        })
        .map_err(CliError::Submit)?;
    if outcome.success {
        modal.set_open(false);
        Ok(())
    } else {
        Err(CliError::Failed(outcome.message))
    }
}

/// Creates an object named `name`. An empty name is rejected before any
/// request goes out.
pub fn create_with_form<T, P, W>(
    target: CreateTarget,
    field_label: &str,
    name: &str,
    transport: &T,
    console: &Console<P, W>,
) -> Result<(), CliError>
where
    T: MutationTransport + ?Sized,
    P: Prompt,
    W: Write,
{
    let mut form = FormModal::new(target, field_label);
    form.set_open(true);
    form.set_value(name);

    match form.submit(transport, console, || {}) {
        Ok(outcome) if outcome.success => {
            form.set_open(false);
            Ok(())
        }
        Ok(outcome) => Err(CliError::Failed(outcome.message)),
        Err(SubmitError::Invalid { message }) => {
            console.println(&format!("error: {}", message))?;
            Err(CliError::Failed(message))
        }
        Err(e) => Err(CliError::Submit(e)),
    }
}

pub fn list_workspaces<P: Prompt, W: Write>(
    client: &DataspaceApiClient,
    user_email: &str,
    console: &Console<P, W>,
) -> Result<(), CliError> {
    let res = client
        .list_workspaces(WorkspaceListQuery {
            user_email: user_email.to_string(),
        })
        .map_err(CliError::ApiClient)?;
    if res.workspaces.is_empty() {
        console.println("No workspaces.")?;
    }
    for workspace in &res.workspaces {
        console.println(&workspace.name)?;
        for folder in &workspace.folders {
            console.println(&format!("  {}/ ({} files)", folder.name, folder.files.len()))?;
            for file in &folder.files {
                console.println(&format!("    {}", file))?;
            }
        }
        if workspace.has_cleaned_data {
            console.println(&format!(
                "  cleaned: [{}]",
                workspace.cleaned_folders.join(", ")
            ))?;
        }
    }
    Ok(())
}

pub fn execute<P: Prompt, W: Write>(
    command: &Commands,
    settings: &Settings,
    client: &DataspaceApiClient,
    console: &Console<P, W>,
) -> Result<(), CliError> {
    let user_email = settings.user_email.clone();
    match command {
        Commands::Workspace { subcommand } => match subcommand {
            WorkspaceSubcommands::Create { name } => create_with_form(
                CreateTarget::Workspace { user_email },
                "Project name",
                name,
                client,
                console,
            ),
            WorkspaceSubcommands::Delete { name, yes } => delete_with_confirmation(
                MutationTarget::Workspace {
                    user_email,
                    work_space: name.clone(),
                },
                *yes,
                client,
                console,
            ),
            WorkspaceSubcommands::List => list_workspaces(client, &user_email, console),
        },
        Commands::Folder { subcommand } => match subcommand {
            FolderSubcommands::Create { workspace, name } => create_with_form(
                CreateTarget::Folder {
                    user_email,
                    work_space: workspace.clone(),
                },
                "Folder name",
                name,
                client,
                console,
            ),
            FolderSubcommands::Delete {
                workspace,
                name,
                yes,
            } => delete_with_confirmation(
                MutationTarget::Folder {
                    user_email,
                    work_space: workspace.clone(),
                    folder_name: name.clone(),
                },
                *yes,
                client,
                console,
            ),
        },
        Commands::File {
            subcommand:
                FileSubcommands::Delete {
                    workspace,
                    folder,
                    name,
                    yes,
                },
        } => delete_with_confirmation(
            MutationTarget::File {
                user_email,
                work_space: workspace.clone(),
                folder_name: folder.clone(),
                file_name: name.clone(),
            },
            *yes,
            client,
            console,
        ),
        Commands::CleanedFolder {
            subcommand:
                CleanedFolderSubcommands::Delete {
                    workspace,
                    name,
                    yes,
                },
        } => delete_with_confirmation(
            MutationTarget::CleanedFolder {
                user_email,
                work_space: workspace.clone(),
                folder_name: name.clone(),
            },
            *yes,
            client,
            console,
        ),
        Commands::CleanedWorkspace {
            subcommand: CleanedWorkspaceSubcommands::Delete { name, yes },
        } => delete_with_confirmation(
            MutationTarget::CleanedWorkspace {
                user_email,
                work_space: name.clone(),
            },
            *yes,
            client,
            console,
        ),
    }
}

pub fn run<P: Prompt, W: Write>(args: &Args, console: &Console<P, W>) -> Result<(), CliError> {
    let config = DataspaceConfigToml::load_or_default(&args.config).map_err(CliError::Config)?;
    let settings = Settings::resolve(args, &config)?;
    log::debug!("using {} as {}", settings.base_url, settings.user_email);
    let client = DataspaceApiClient::new(
        settings.base_url.clone(),
        Arc::new(EnvCredentials::new(settings.token_env.clone())),
    );
    execute(&args.subcommand, &settings, &client, console)
}
