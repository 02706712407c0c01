use std::path::PathBuf;

use super::*;

#[test]
fn extensions_map_to_the_accepted_types() {
    assert_eq!(content_type(Path::new("talk.MP4")), "video/mp4");
    assert_eq!(content_type(Path::new("clips/b.mkv")), "video/mkv");
    assert_eq!(content_type(Path::new("notes.txt")), "application/octet-stream");
    assert_eq!(content_type(Path::new("no-extension")), "application/octet-stream");
}

#[test]
fn title_defaults_to_the_file_stem() {
    assert_eq!(default_title(Path::new("/tmp/keynote 2024.mov")), "keynote 2024");
    assert_eq!(default_title(&PathBuf::new()), "");
}

#[tokio::test]
async fn inspect_reports_size_without_reading() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clip.mp4");
    std::fs::write(&path, vec![0_u8; 2048]).unwrap();

    let meta = inspect(&path).await.unwrap();
    assert_eq!(meta, VideoMeta { file_name: "clip.mp4".to_owned(), content_type: "video/mp4".to_owned(), size: 2048 });

    let upload = read(&path, "Clip".to_owned(), meta).await.unwrap();
    assert_eq!(upload.title, "Clip");
    assert_eq!(upload.bytes.len(), 2048);
    assert_eq!(upload.file.size, 2048);
}

#[tokio::test]
async fn directories_and_missing_files_are_refused() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(inspect(dir.path()).await.unwrap_err().kind(), io::ErrorKind::InvalidInput);
    assert_eq!(inspect(&dir.path().join("gone.mp4")).await.unwrap_err().kind(), io::ErrorKind::NotFound);
}
