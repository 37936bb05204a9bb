use super::*;

fn category(name: &str, label: &str, color: &str) -> CategoryInfo {
    CategoryInfo { id: 1, name: name.to_owned(), label: label.to_owned(), color: color.to_owned() }
}

#[test]
fn fill_populates_and_marks_loaded() {
    let mut cache = CategoriesState::default();
    cache.fill(vec![category("HUMOR", "Humor", "yellow")]);
    assert!(cache.loaded);
    assert_eq!(cache.label_for("HUMOR"), Some("Humor"));
    assert_eq!(cache.color_for("HUMOR"), Some("yellow"));
}

#[test]
fn empty_fill_does_not_clobber_existing_cache() {
    let mut cache = CategoriesState::default();
    cache.fill(vec![category("CAT", "Cats", "purple")]);
    cache.fill(Vec::new());
    assert_eq!(cache.label_for("CAT"), Some("Cats"));
}

#[test]
fn unknown_category_resolves_to_none() {
    let cache = CategoriesState::default();
    assert!(cache.label_for("NOPE").is_none());
    assert!(cache.color_for("NOPE").is_none());
}
