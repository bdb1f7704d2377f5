//! End-to-end voting flow over the in-memory mocks.

use duelboard::{
    AppContext, EntryStore, MatchSelector, NewEntry, Selection, VoteError, VotingCoordinator,
    leaderboard, remove_entry, submit_entry,
};
use futures::StreamExt;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn entry_fixture(title: &str) -> NewEntry {
    NewEntry {
        title: title.to_string(),
        author: "Ada".to_string(),
        pin: "4321".to_string(),
        image_bytes: vec![0xFF, 0xD8, 0xFF, 0xE0],
        content_type: "image/jpeg".to_string(),
    }
}

async fn seeded_context(titles: &[&str]) -> AppContext {
    let ctx = AppContext::mock();
    for &title in titles {
        submit_entry(&ctx, entry_fixture(title)).await.expect("submit");
    }
    ctx
}

#[tokio::test]
async fn test_full_voting_loop() {
    init_tracing();
    let ctx = seeded_context(&["dawn", "dusk", "noon"]).await;

    let mut sub = ctx.entries.subscribe().await.expect("subscribe");
    let snapshot = sub.latest();
    assert_eq!(snapshot.len(), 3);

    let mut selector = MatchSelector::with_seed(ctx.config.exploration_probability, 99);
    let selection = selector.on_snapshot(&snapshot).clone();
    let pair = selection.pair().expect("three entries yield a pair").clone();

    let coordinator = VotingCoordinator::from_context(&ctx);
    let receipt = coordinator
        .record_vote(&pair.left.id, &pair.right.id)
        .await
        .expect("vote");
    assert_eq!(receipt.winner.rating, 1516);
    assert_eq!(receipt.loser.rating, 1484);

    // The next pair is available immediately, from the pre-vote list.
    let next = selector.on_vote(&snapshot).clone();
    assert!(next.pair().is_some());

    // The store pushes the updated snapshot; ratings reflect the commit.
    sub.changed().await.expect("snapshot push");
    let updated = sub.latest();
    let winner = updated
        .iter()
        .find(|e| e.id == pair.left.id)
        .expect("winner present");
    let loser = updated
        .iter()
        .find(|e| e.id == pair.right.id)
        .expect("loser present");
    assert_eq!(winner.rating, 1516);
    assert_eq!(loser.rating, 1484);

    // Leaderboard puts the winner first.
    let standings = leaderboard(&updated);
    assert_eq!(standings[0].id, pair.left.id);
    assert_eq!(standings[2].id, pair.right.id);
}

#[tokio::test]
async fn test_stale_match_prompts_reselection() {
    init_tracing();
    let ctx = seeded_context(&["dawn", "dusk"]).await;

    let sub = ctx.entries.subscribe().await.expect("subscribe");
    let snapshot = sub.latest();

    let mut selector = MatchSelector::with_seed(0.5, 7);
    let selection = selector.on_snapshot(&snapshot).clone();
    let pair = selection.pair().expect("pair").clone();

    // Another actor removes the loser before the vote lands.
    remove_entry(&ctx, &pair.right.id, "4321").await.expect("remove");

    let coordinator = VotingCoordinator::from_context(&ctx);
    let result = coordinator.record_vote(&pair.left.id, &pair.right.id).await;
    let err = result.expect_err("vote against a removed entry");
    assert!(err.is_stale());
    assert!(matches!(err, VoteError::StaleMatch { ref id } if *id == pair.right.id));

    // The surviving entry is untouched and the fresh snapshot cannot
    // produce a pair any more.
    let fresh = sub.latest();
    assert_eq!(fresh.len(), 1);
    assert_eq!(fresh[0].rating, 1500);
    assert_eq!(
        *selector.on_snapshot(&fresh),
        Selection::InsufficientEntries
    );
}

#[tokio::test]
async fn test_concurrent_sessions_vote_disjoint_pairs() {
    init_tracing();
    let ctx = seeded_context(&["a", "b", "c", "d"]).await;

    let sub = ctx.entries.subscribe().await.expect("subscribe");
    let snapshot = sub.latest();
    assert_eq!(snapshot.len(), 4);

    // Two independent sessions over the same store.
    let session_one = VotingCoordinator::from_context(&ctx);
    let session_two = VotingCoordinator::from_context(&ctx);

    let (first, second) = tokio::join!(
        session_one.record_vote(&snapshot[0].id, &snapshot[1].id),
        session_two.record_vote(&snapshot[2].id, &snapshot[3].id),
    );

    assert_eq!(first.expect("first vote").winner.rating, 1516);
    assert_eq!(second.expect("second vote").winner.rating, 1516);

    // Every rating reflects exactly one matchup.
    let ratings: Vec<i64> = {
        let mut entries = sub.latest();
        entries.sort_by_key(|e| e.rating);
        entries.iter().map(|e| e.rating).collect()
    };
    assert_eq!(ratings, vec![1484, 1484, 1516, 1516]);
}

#[tokio::test]
async fn test_snapshot_stream_yields_latest_lists() {
    init_tracing();
    let ctx = AppContext::mock();

    let sub = ctx.entries.subscribe().await.expect("subscribe");
    let mut stream = Box::pin(sub.into_stream());

    // The current (empty) snapshot arrives first.
    let initial = stream.next().await.expect("initial snapshot");
    assert!(initial.is_empty());

    submit_entry(&ctx, entry_fixture("dawn")).await.expect("submit");
    let after_create = stream.next().await.expect("snapshot after create");
    assert_eq!(after_create.len(), 1);
    assert_eq!(after_create[0].title, "dawn");
}
