use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn test_delete() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = foodgram_recipe::Command::new(state.clone());
    let query = foodgram_recipe::Query(state.clone());
    let john = helpers::create_user(&state, "john").await?;
    let jane = helpers::create_user(&state, "jane").await?;
    let tag = helpers::create_tag(&cmd, "lunch").await?;
    let ids = helpers::create_ingredients(&state, &[("Рис", "г")]).await?;

    let id = cmd
        .create(
            &john,
            helpers::recipe_input("Плов", vec![tag], vec![(ids[0].to_owned(), 200)]),
        )
        .await?;
    cmd.favorite.add(&id, &jane).await?;

    let resp = cmd.delete(&id, &jane).await;
    assert!(matches!(resp, Err(foodgram_shared::Error::Forbidden)));

    cmd.delete(&id, &john).await?;
    assert!(query.find(&id, None).await?.is_none());

    let favorites = query
        .filter(
            foodgram_recipe::RecipeFilter {
                is_favorited: true,
                ..Default::default()
            },
            Some(jane.as_str()),
        )
        .await?;
    assert!(favorites.is_empty());

    let resp = cmd.delete(&id, &john).await;
    assert!(matches!(resp, Err(foodgram_shared::Error::NotFound(_))));

    Ok(())
}
