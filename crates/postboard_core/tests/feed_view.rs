use postboard_core::{normalize_posts, FeedSession, Post, PostId, PostSource, RawPostRecord};
use std::collections::HashSet;

fn origin_fixture() -> Vec<RawPostRecord> {
    let raw = serde_json::json!([
        { "id": 1, "title": "Getting Started", "body": "framework overview", "userId": 10 },
        { "id": 2, "title": "Best Practices", "body": "static typing tips", "userId": 10 },
        { "id": 3, "title": "Styling", "body": "utility-first CSS", "userId": 11 }
    ]);
    serde_json::from_value(raw).unwrap()
}

fn seeded_session() -> FeedSession {
    let mut session = FeedSession::new();
    session.begin_load();
    session.apply_remote_result(Ok(normalize_posts(origin_fixture())));
    session
}

#[test]
fn empty_search_returns_union_local_first_most_recent_first() {
    let mut session = seeded_session();
    let older = session.local_mut().create("older local", "a");
    let newer = session.local_mut().create("newer local", "b");

    let view = session.view("");

    assert_eq!(view.len(), 5);
    assert_eq!(view[0].id, newer.id);
    assert_eq!(view[1].id, older.id);
    assert_eq!(
        view[2..].iter().map(|post| &post.id).collect::<Vec<_>>(),
        vec![&PostId::Remote(1), &PostId::Remote(2), &PostId::Remote(3)]
    );
}

#[test]
fn search_partitions_posts_exactly_by_the_predicate() {
    let mut session = seeded_session();
    session.local_mut().create("My Typing Journey", "local story");

    let term = "typing";
    let view = session.view(term);
    let shown: HashSet<_> = view.iter().map(|post| post.id).collect();

    for post in session.view("") {
        let matches = post.title.to_lowercase().contains(term)
            || post.content.to_lowercase().contains(term);
        assert_eq!(shown.contains(&post.id), matches, "post {}", post.id);
    }
    assert_eq!(view.len(), 2);
}

#[test]
fn view_never_contains_duplicate_ids_across_sources() {
    let mut session = seeded_session();
    session.local_mut().create("local one", "x");
    session.local_mut().create("local two", "y");

    let ids: Vec<_> = session.view("").iter().map(|post| post.id).collect();
    let unique: HashSet<_> = ids.iter().copied().collect();
    assert_eq!(ids.len(), unique.len());
}

#[test]
fn remote_delete_is_display_only_and_origin_survives() {
    let mut session = seeded_session();

    assert!(session.delete(&PostId::Remote(2)));
    let remaining: Vec<_> = session.remote().iter().map(|post| post.id).collect();
    assert_eq!(remaining, vec![PostId::Remote(1), PostId::Remote(3)]);

    // Deleting the same remote id again is a no-op, not an error.
    assert!(!session.delete(&PostId::Remote(2)));

    // A hypothetical fresh load still yields the full origin collection.
    let fresh = normalize_posts(origin_fixture());
    let fresh_ids: Vec<_> = fresh.iter().map(|post| post.id).collect();
    assert_eq!(
        fresh_ids,
        vec![PostId::Remote(1), PostId::Remote(2), PostId::Remote(3)]
    );
}

#[test]
fn delete_routes_local_ids_to_the_local_store() {
    let mut session = seeded_session();
    let post = session.local_mut().create("mine", "to delete");

    assert!(session.delete(&post.id));
    assert!(!session.delete(&post.id));
    assert!(session.local().is_empty());
    // Remote display set is untouched by local routing.
    assert_eq!(session.remote().len(), 3);
}

#[test]
fn delete_never_crosses_id_namespaces() {
    let mut session = seeded_session();
    let local = session.local_mut().create("local", "post");

    // A remote id that does not exist removes nothing from either side.
    assert!(!session.delete(&PostId::Remote(999)));
    assert_eq!(session.local().len(), 1);
    assert_eq!(session.remote().len(), 3);

    // Local routing leaves remote posts alone even with overlapping numerals.
    assert!(session.delete(&local.id));
    assert_eq!(session.remote().len(), 3);
}

#[test]
fn source_tag_follows_the_id_namespace() {
    let mut session = seeded_session();
    let local = session.local_mut().create("tagged", "post");

    assert_eq!(local.source(), PostSource::Local);
    assert!(session
        .remote()
        .iter()
        .all(|post| post.source() == PostSource::Remote));
}

#[test]
fn normalization_maps_origin_fields_onto_the_model() {
    let posts: Vec<Post> = normalize_posts(origin_fixture());

    let first = &posts[0];
    assert_eq!(first.id, PostId::Remote(1));
    assert_eq!(first.title, "Getting Started");
    assert_eq!(first.content, "framework overview");
    assert_eq!(first.owner, Some(10));
    assert_eq!(first.created_at, None);
}
