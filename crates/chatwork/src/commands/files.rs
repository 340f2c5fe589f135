//! Files command - list and upload room files.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result, anyhow};
use chatwork_client::{FileFilter, FileListRequest, UploadFile, UploadPayload};
use clap::{Args, Subcommand};
use console::Style;

use super::{Context, format_time, print_header, print_json, print_success};

/// Arguments for the files command.
#[derive(Args, Debug)]
pub struct FilesArgs {
    #[command(subcommand)]
    pub command: FilesCommand,
}

#[derive(Subcommand, Debug)]
pub enum FilesCommand {
    /// List files shared in a room
    List {
        /// Room ID
        room_id: u64,

        /// Only files uploaded by this account
        #[arg(long)]
        account_id: Option<u64>,
    },

    /// Upload a file to a room
    Upload {
        /// Room ID
        room_id: u64,

        /// Path of the file to upload
        path: PathBuf,

        /// Message posted with the file
        #[arg(short, long)]
        message: Option<String>,

        /// MIME type of the file (guessed from the extension when omitted)
        #[arg(long)]
        content_type: Option<String>,
    },
}

/// Run the files command.
pub fn run(args: FilesArgs, ctx: &Context) -> Result<()> {
    match args.command {
        FilesCommand::List {
            room_id,
            account_id,
        } => {
            let client = ctx.client()?;
            let files = client.get_file_list(FileListRequest {
                room_id,
                body: FileFilter { account_id },
            })?;
            if ctx.json_output {
                return print_json(&files);
            }

            let dim = Style::new().dim();
            print_header(&format!("Files in {}", room_id));
            if files.is_empty() {
                println!("{}", dim.apply_to("No files"));
            }
            for file in &files {
                println!(
                    "{} {} {}",
                    dim.apply_to(format!("[{}]", file.file_id)),
                    file.filename,
                    dim.apply_to(format!(
                        "{} by {}, {}",
                        human_size(file.filesize),
                        file.account.name,
                        format_time(file.upload_time)
                    ))
                );
            }
        }
        FilesCommand::Upload {
            room_id,
            path,
            message,
            content_type,
        } => {
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .ok_or_else(|| anyhow!("{} is not a file", path.display()))?;
            let bytes = std::fs::read(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;

            let mut payload = UploadPayload::new(file_name, bytes);
            if let Some(content_type) = content_type.or_else(|| guess_content_type(&path)) {
                tracing::debug!(%content_type, "upload content type");
                payload = payload.with_content_type(content_type);
            }
            if let Some(message) = message {
                payload = payload.with_message(message);
            }

            let client = ctx.client()?;
            let response = client.upload_file(UploadFile { room_id, payload })?;
            if ctx.json_output {
                return print_json(&response);
            }
            print_success(&format!("Uploaded {} as file {}", path.display(), response.file_id));
        }
    }

    Ok(())
}

/// MIME type for common file extensions. Unknown extensions upload untyped.
fn guess_content_type(path: &Path) -> Option<String> {
    let extension = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match extension.as_str() {
        "txt" | "log" => "text/plain",
        "md" => "text/markdown",
        "csv" => "text/csv",
        "html" | "htm" => "text/html",
        "json" => "application/json",
        "pdf" => "application/pdf",
        "zip" => "application/zip",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        _ => return None,
    };
    Some(mime.to_string())
}

/// Render a byte count with a binary unit.
fn human_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", size, UNITS[unit])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_content_type() {
        assert_eq!(
            guess_content_type(Path::new("notes/README.TXT")).as_deref(),
            Some("text/plain")
        );
        assert_eq!(
            guess_content_type(Path::new("photo.jpeg")).as_deref(),
            Some("image/jpeg")
        );
        assert_eq!(guess_content_type(Path::new("archive.tar.xz")), None);
        assert_eq!(guess_content_type(Path::new("Makefile")), None);
    }

    #[test]
    fn test_human_size() {
        assert_eq!(human_size(0), "0 B");
        assert_eq!(human_size(2232), "2.2 KiB");
        assert_eq!(human_size(5 * 1024 * 1024), "5.0 MiB");
    }
}
