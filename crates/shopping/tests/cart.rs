use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn test_add_and_remove() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = foodgram_shopping::Command(state.clone());
    let john = helpers::create_user(&state, "john").await?;
    let recipe = helpers::create_recipe(&state, &john, "Блины", &[("Мука", "кг", 2)]).await?;

    let minified = cmd.add(&recipe, &john).await?;
    assert_eq!(minified.id, recipe);
    assert_eq!(minified.name, "Блины");

    let resp = cmd.add(&recipe, &john).await;
    assert_eq!(resp.unwrap_err().to_string(), "Рецепт уже в списке покупок");

    let resp = cmd.add("missing", &john).await;
    assert!(matches!(resp, Err(foodgram_shared::Error::NotFound(_))));

    let in_cart = foodgram_recipe::Query(state.clone())
        .find(&recipe, Some(john.as_str()))
        .await?
        .unwrap();
    assert!(in_cart.is_in_shopping_cart);

    cmd.remove(&recipe, &john).await?;

    let resp = cmd.remove(&recipe, &john).await;
    assert_eq!(
        resp.unwrap_err().to_string(),
        "Рецепт отсутствует в списке покупок"
    );

    Ok(())
}

#[tokio::test]
async fn test_cart_entries() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = foodgram_shopping::Command(state.clone());
    let query = foodgram_shopping::Query(state.clone());
    let john = helpers::create_user(&state, "john").await?;
    let jane = helpers::create_user(&state, "jane").await?;
    let pancakes = helpers::create_recipe(
        &state,
        &john,
        "Блины",
        &[("Мука", "кг", 2), ("Сахар", "г", 50)],
    )
    .await?;
    let cake = helpers::create_recipe(&state, &john, "Торт", &[("Мука", "кг", 3)]).await?;

    cmd.add(&pancakes, &jane).await?;
    cmd.add(&cake, &jane).await?;

    let mut entries = query.cart_entries(&jane).await?;
    entries.sort_by(|a, b| a.recipe_id.cmp(&b.recipe_id));
    assert_eq!(entries.len(), 2);

    let pancakes_entry = entries.iter().find(|e| e.recipe_id == pancakes).unwrap();
    let mut lines = pancakes_entry
        .lines
        .iter()
        .map(|l| (l.name.as_str(), l.amount))
        .collect::<Vec<_>>();
    lines.sort();
    assert_eq!(lines, vec![("Мука", 2), ("Сахар", 50)]);

    assert!(query.cart_entries(&john).await?.is_empty());

    Ok(())
}
