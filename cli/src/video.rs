//! Local video files picked for upload.

#[cfg(test)]
#[path = "video_test.rs"]
mod video_test;

use std::io;
use std::path::Path;

use session::VideoUpload;
use session::transport::VideoMeta;

/// MIME type guessed from the extension, as the browser would report it.
pub fn content_type(path: &Path) -> &'static str {
    let extension = path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("mp4") => "video/mp4",
        Some("mov") => "video/mov",
        Some("avi") => "video/avi",
        Some("mkv") => "video/mkv",
        _ => "application/octet-stream",
    }
}

/// Title used when none is given: the file name without its extension.
pub fn default_title(path: &Path) -> String {
    path.file_stem().map(|stem| stem.to_string_lossy().into_owned()).unwrap_or_default()
}

/// Name, type and size of `path`, without reading its contents.
pub async fn inspect(path: &Path) -> io::Result<VideoMeta> {
    let metadata = tokio::fs::metadata(path).await?;
    if !metadata.is_file() {
        return Err(io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"));
    }
    Ok(VideoMeta {
        file_name: path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default(),
        content_type: content_type(path).to_owned(),
        size: metadata.len(),
    })
}

pub async fn read(path: &Path, title: String, meta: VideoMeta) -> io::Result<VideoUpload> {
    let bytes = tokio::fs::read(path).await?;
    Ok(VideoUpload::new(title, meta.file_name, meta.content_type, bytes))
}
