use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn test_subscribe() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = foodgram_user::Command::new(state.clone());
    let query = foodgram_user::Query(state);
    let ids = helpers::create_users(&cmd, ["alice", "bob", "carol"]).await?;
    let (alice, bob, carol) = (&ids[0], &ids[1], &ids[2]);

    cmd.subscription.subscribe(bob, alice).await?;
    cmd.subscription.subscribe(carol, alice).await?;

    let resp = cmd.subscription.subscribe(bob, alice).await;
    assert_eq!(
        resp.unwrap_err().to_string(),
        "Вы уже подписаны на этого пользователя"
    );

    let resp = cmd.subscription.subscribe(alice, alice).await;
    assert_eq!(
        resp.unwrap_err().to_string(),
        "Нельзя подписаться на самого себя"
    );

    let resp = cmd.subscription.subscribe("missing", alice).await;
    assert!(matches!(resp, Err(foodgram_shared::Error::NotFound(_))));

    let subscriptions = query.subscriptions(alice, None).await?;
    let usernames = subscriptions
        .iter()
        .map(|s| s.author.username.as_str())
        .collect::<Vec<_>>();
    assert_eq!(usernames, vec!["bob", "carol"]);
    assert!(subscriptions.iter().all(|s| s.author.is_subscribed));
    assert!(subscriptions.iter().all(|s| s.recipes_count == 0));

    let users = query.list(Some(alice.as_str())).await?;
    let flags = users
        .iter()
        .map(|u| (u.username.as_str(), u.is_subscribed))
        .collect::<Vec<_>>();
    assert_eq!(
        flags,
        vec![("alice", false), ("bob", true), ("carol", true)]
    );

    Ok(())
}

#[tokio::test]
async fn test_unsubscribe() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = foodgram_user::Command::new(state.clone());
    let query = foodgram_user::Query(state);
    let ids = helpers::create_users(&cmd, ["alice", "bob"]).await?;
    let (alice, bob) = (&ids[0], &ids[1]);

    let resp = cmd.subscription.unsubscribe(bob, alice).await;
    assert_eq!(
        resp.unwrap_err().to_string(),
        "Вы не подписаны на этого пользователя"
    );

    cmd.subscription.subscribe(bob, alice).await?;
    cmd.subscription.unsubscribe(bob, alice).await?;

    assert!(query.subscriptions(alice, None).await?.is_empty());
    assert!(!query.find(bob, Some(alice.as_str())).await?.unwrap().is_subscribed);

    Ok(())
}
