use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dataspace_config_file::CONFIG_FILE_NAME;

/// Manage dataspace workspaces, folders and files
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Config file to read defaults from
    #[arg(long, default_value = CONFIG_FILE_NAME)]
    pub config: PathBuf,

    /// API base URL, overrides the config file
    #[arg(long)]
    pub base_url: Option<String>,

    /// Account the workspaces belong to, overrides the config file
    #[arg(long)]
    pub user_email: Option<String>,

    #[command(subcommand)]
    pub subcommand: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Workspace {
        #[command(subcommand)]
        subcommand: WorkspaceSubcommands,
    },
    Folder {
        #[command(subcommand)]
        subcommand: FolderSubcommands,
    },
    File {
        #[command(subcommand)]
        subcommand: FileSubcommands,
    },
    CleanedFolder {
        #[command(subcommand)]
        subcommand: CleanedFolderSubcommands,
    },
    CleanedWorkspace {
        #[command(subcommand)]
        subcommand: CleanedWorkspaceSubcommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum WorkspaceSubcommands {
    Create {
        name: String,
    },
    Delete {
        name: String,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
    List,
}

#[derive(Subcommand, Debug)]
pub enum FolderSubcommands {
    Create {
        #[arg(long)]
        workspace: String,
        name: String,
    },
    Delete {
        #[arg(long)]
        workspace: String,
        name: String,
        #[arg(long, short)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum FileSubcommands {
    Delete {
        #[arg(long)]
        workspace: String,
        #[arg(long)]
        folder: String,
        name: String,
        #[arg(long, short)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum CleanedFolderSubcommands {
    Delete {
        #[arg(long)]
        workspace: String,
        name: String,
        #[arg(long, short)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum CleanedWorkspaceSubcommands {
    Delete {
        name: String,
        #[arg(long, short)]
        yes: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_file_delete() {
        let args = Args::try_parse_from([
            "dataspace",
            "--user-email",
            "a@b.com",
            "file",
            "delete",
            "--workspace",
            "W1",
            "--folder",
            "F1",
            "data.csv",
            "-y",
        ])
        .unwrap();
        assert_eq!(args.user_email.as_deref(), Some("a@b.com"));
        assert_eq!(args.config, PathBuf::from(CONFIG_FILE_NAME));
        let Commands::File {
            subcommand:
                FileSubcommands::Delete {
                    workspace,
                    folder,
                    name,
                    yes,
                },
        } = args.subcommand
        else {
            panic!("expected file delete");
        };
        assert_eq!((workspace.as_str(), folder.as_str(), name.as_str(), yes), ("W1", "F1", "data.csv", true));
    }

    #[test]
    fn test_parse_cleaned_workspace_delete_uses_kebab_case() {
        let args =
            Args::try_parse_from(["dataspace", "cleaned-workspace", "delete", "W1"]).unwrap();
        assert!(matches!(
            args.subcommand,
            Commands::CleanedWorkspace {
                subcommand: CleanedWorkspaceSubcommands::Delete { yes: false, .. }
            }
        ));
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(Args::try_parse_from(["dataspace"]).is_err());
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
