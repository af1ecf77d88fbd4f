//! Full account, session, and card-feed lifecycles against the live mock
//! server.
//!
//! Each test starts its own server on a random port and drives the bound
//! `Api`/`Auth` surface over real HTTP, so request building, the transport,
//! and response parsing are all exercised together.

use std::net::SocketAddr;

use places_core::{Api, ApiError, AppState, Auth, Session, SessionStatus, TokenStore};
use uuid::Uuid;

fn start_server() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

fn scratch_store() -> TokenStore {
    let path = std::env::temp_dir()
        .join(format!("places-integration-{}", Uuid::new_v4()))
        .join("session-token");
    TokenStore::at(path)
}

#[test]
fn auth_and_session_lifecycle() {
    let addr = start_server();
    let auth = Auth::new(&format!("http://{addr}"));

    // Step 1: register an account.
    let account = auth.register("captain@sea.dev", "correct horse").unwrap();
    assert_eq!(account.email, "captain@sea.dev");

    // Step 2: wrong password rejects and yields no token.
    let err = auth.authorize("captain@sea.dev", "wrong").unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized));

    // Step 3: a made-up token does not verify.
    let err = auth.get_content("no-such-token").unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized));

    // Step 4: valid credentials yield a token that verifies to the same
    // account.
    let granted = auth.authorize("captain@sea.dev", "correct horse").unwrap();
    assert_eq!(granted.email, "captain@sea.dev");
    let identity = auth.get_content(&granted.token).unwrap();
    assert_eq!(identity, account);

    // Step 5: login through the session persists the token.
    let store = scratch_store();
    let mut session = Session::new(store.clone());
    session.login(&auth, "captain@sea.dev", "correct horse").unwrap();
    assert!(session.is_logged_in());
    assert_eq!(session.account().unwrap().email, "captain@sea.dev");
    let stored = session.token().unwrap();
    assert!(stored.is_some());

    // Step 6: a fresh session restores from the stored token.
    let mut restored = Session::new(store.clone());
    let status = restored.restore(&auth).unwrap();
    assert_eq!(*status, SessionStatus::LoggedIn(account.clone()));

    // Step 7: a stale token logs out and is destroyed.
    store.save("stale-token").unwrap();
    let mut stale = Session::new(store.clone());
    let status = stale.restore(&auth).unwrap();
    assert_eq!(*status, SessionStatus::LoggedOut);
    assert_eq!(store.load().unwrap(), None);

    // Step 8: sign-out clears the store as well.
    let mut session = Session::new(store.clone());
    session.login(&auth, "captain@sea.dev", "correct horse").unwrap();
    session.logout().unwrap();
    assert!(!session.is_logged_in());
    assert_eq!(store.load().unwrap(), None);
}

#[test]
fn card_feed_lifecycle() {
    let addr = start_server();
    let auth = Auth::new(&format!("http://{addr}"));
    let base_url = format!("http://{addr}/v1/demo");

    let owner = auth.register("owner@sea.dev", "pw").unwrap();
    let owner_token = auth.authorize("owner@sea.dev", "pw").unwrap().token;
    let visitor = auth.register("visitor@sea.dev", "pw").unwrap();
    let visitor_token = auth.authorize("visitor@sea.dev", "pw").unwrap().token;

    let api = Api::new(&base_url, &owner_token);
    let visitor_api = Api::new(&base_url, &visitor_token);

    // Step 1: the profile belongs to the session's account.
    let profile = api.get_profile().unwrap();
    assert_eq!(profile.id, owner.id);

    // Step 2: the feed starts empty.
    assert!(api.list_cards().unwrap().is_empty());

    // Step 3: create a card; it carries the given name and link, an empty
    // likes set, and the session's user as owner.
    let card = api.create_card("Eiffel Tower", "https://x/1.jpg").unwrap();
    assert_eq!(card.name, "Eiffel Tower");
    assert_eq!(card.link, "https://x/1.jpg");
    assert!(card.likes.is_empty());
    assert_eq!(card.owner, profile.id);

    // Step 4: the view state prepends the new card and gates deletion on
    // ownership.
    let mut state = AppState::new();
    state.set_profile(profile.clone());
    state.set_cards(api.list_cards().unwrap());
    let second = api.create_card("Louvre", "https://x/2.jpg").unwrap();
    state.insert_card(second.clone());
    assert_eq!(state.cards[0].id, second.id);
    assert!(state.can_delete(&card));

    let mut visitor_state = AppState::new();
    visitor_state.set_profile(visitor_api.get_profile().unwrap());
    assert!(!visitor_state.can_delete(&card));

    // Step 5: like then unlike leaves the visitor absent from the set.
    let liked = visitor_api.add_like(card.id).unwrap();
    assert_eq!(liked.likes, vec![visitor.id]);
    let unliked = visitor_api.remove_like(card.id).unwrap();
    assert!(unliked.likes.is_empty());

    // Step 6: unlike then like leaves the visitor present exactly once.
    let still_unliked = visitor_api.remove_like(card.id).unwrap();
    assert!(still_unliked.likes.is_empty());
    let liked_again = visitor_api.add_like(card.id).unwrap();
    assert_eq!(liked_again.likes, vec![visitor.id]);

    // Step 7: the toggle dispatches from membership: liked card gets an
    // unlike, unliked card gets a like.
    let toggled_off = visitor_api.toggle_like(&liked_again, visitor.id).unwrap();
    assert!(toggled_off.likes.is_empty());
    let toggled_on = visitor_api.toggle_like(&toggled_off, visitor.id).unwrap();
    assert_eq!(toggled_on.likes, vec![visitor.id]);
    state.apply_card(toggled_on.clone());
    assert_eq!(
        state.cards.iter().find(|c| c.id == card.id).unwrap().likes,
        vec![visitor.id]
    );

    // Step 8: profile edits come back applied.
    let updated = api.update_profile("Marie", "Traveler").unwrap();
    assert_eq!(updated.name, "Marie");
    assert_eq!(updated.about, "Traveler");
    let updated = api.update_avatar("https://x/new.png").unwrap();
    assert_eq!(updated.avatar, "https://x/new.png");

    // Step 9: a non-owner cannot delete.
    let err = visitor_api.delete_card(card.id).unwrap_err();
    assert!(matches!(err, ApiError::Http { status: 403, .. }));

    // Step 10: the owner can, and the second delete is NotFound.
    api.delete_card(card.id).unwrap();
    state.remove_card(card.id);
    assert_eq!(state.cards.len(), 1);
    let err = api.delete_card(card.id).unwrap_err();
    assert!(matches!(err, ApiError::NotFound));

    // Step 11: deleting an id that never existed rejects too.
    let err = api.delete_card(Uuid::new_v4()).unwrap_err();
    assert!(matches!(err, ApiError::NotFound));

    // Step 12: only the second card remains on the server.
    let remaining = api.list_cards().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, second.id);
}
