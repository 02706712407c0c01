use contract::{Address, Owner, ResourceRecord, VideoState};
use session::validate;

use super::*;

fn ada() -> User {
    User {
        id: "u-1".to_owned(),
        email: "ada@example.com".to_owned(),
        fullname: "Ada Lovelace".to_owned(),
        address: Address { country: "UK".to_owned(), city: "London".to_owned(), street: String::new() },
        version: 1,
        created_at: "2024-01-01T00:00:00.000Z".to_owned(),
        updated_at: "2024-01-01T00:00:00.000Z".to_owned(),
    }
}

fn clip(id: &str, status: VideoState) -> Resource {
    Resource {
        resource: ResourceRecord {
            id: id.to_owned(),
            name: format!("{id}.mp4"),
            size: 1536,
            status,
            user: Owner::Id("u-1".to_owned()),
            created_at: "2024-05-01T13:45:10.000Z".to_owned(),
            updated_at: "2024-05-01T13:45:10.000Z".to_owned(),
        },
        video_url: Some(format!("https://cdn.example.com/{id}.mp4")),
        audio_url: Some(format!("https://cdn.example.com/{id}.mp3")),
    }
}

#[test]
fn user_skips_empty_address_parts() {
    let text = user(&ada());
    assert!(text.starts_with("Ada Lovelace <ada@example.com>\n"));
    assert!(text.contains("address: London, UK\n"));

    let homeless = User { address: Address::default(), ..ada() };
    assert!(!user(&homeless).contains("address"));
}

#[test]
fn page_lists_entries_then_position() {
    let listing = Page { data: vec![clip("r-1", VideoState::Failed)], page: 2, items_per_page: 10, total_pages: 3 };
    let text = page(&listing);
    assert!(text.contains("r-1  FAILED"));
    assert!(text.contains("1.5 KB"));
    assert!(text.ends_with("page 2 of 3\n"));

    let empty: Page<Resource> = Page { data: vec![], page: 1, items_per_page: 10, total_pages: 0 };
    assert_eq!(page(&empty), "No videos yet.\n");
}

#[test]
fn detail_links_the_playable_media() {
    let text = resource(&clip("r-2", VideoState::Complete));
    assert!(text.contains("status: COMPLETE\n"));
    assert!(text.contains("uploaded: 2024-05-01 13:45 UTC\n"));
    assert!(text.contains("media: https://cdn.example.com/r-2.mp3\n"));
}

#[test]
fn field_errors_are_one_per_line() {
    let form = contract::LoginForm { email: "nope".to_owned(), password: "".into() };
    let errors = validate::login(&form).unwrap_err();
    let text = field_errors(&errors);
    assert!(text.contains("  email: This should be an email\n"));
    assert!(text.contains("  password: This field is required\n"));
}

#[test]
fn json_output_keeps_the_wire_field_names() {
    let value = serde_json::to_value(clip("r-3", VideoState::Converting)).unwrap();
    let text = json(&value).unwrap();
    assert!(text.ends_with("}\n"));
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed["resource"]["status"], "CONVERTING");
    assert_eq!(parsed["resource"]["createdAt"], "2024-05-01T13:45:10.000Z");
    assert_eq!(parsed["videoUrl"], "https://cdn.example.com/r-3.mp4");
}
