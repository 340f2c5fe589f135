//! Files API.

use crate::client::{ChatworkClient, require};
use crate::error::Result;
use crate::types::{File, FileIdResponse, FileListRequest, UploadFile};

impl ChatworkClient {
    /// List files shared in a room. The filter travels in the query string.
    pub fn get_file_list(&self, params: FileListRequest) -> Result<Vec<File>> {
        let files = self.get(&format!("/rooms/{}/files", params.room_id), &params.body)?;
        Ok(files.unwrap_or_default())
    }

    /// Upload a file to a room.
    pub fn upload_file(&self, params: UploadFile) -> Result<FileIdResponse> {
        let path = format!("/rooms/{}/files", params.room_id);
        tracing::debug!(
            room_id = params.room_id,
            file_name = %params.payload.file_name,
            size = params.payload.bytes.len(),
            "uploading file"
        );
        require(self.post_multipart(&path, params.payload.into_multipart())?, &path)
    }
}
