use super::*;

#[test]
fn first_page_has_no_previous() {
    assert_eq!(previous_page(1), None);
    assert_eq!(previous_page(3), Some(2));
}

#[test]
fn last_page_has_no_next() {
    assert_eq!(next_page(3, 3), None);
    assert_eq!(next_page(2, 3), Some(3));
    assert_eq!(next_page(1, 0), None);
}
