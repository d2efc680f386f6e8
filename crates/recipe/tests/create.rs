use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn test_create() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = foodgram_recipe::Command::new(state.clone());
    let query = foodgram_recipe::Query(state.clone());
    let john = helpers::create_user(&state, "john").await?;
    let breakfast = helpers::create_tag(&cmd, "breakfast").await?;
    let ids = helpers::create_ingredients(&state, &[("Мука", "кг"), ("Сахар", "г")]).await?;

    let id = cmd
        .create(
            &john,
            helpers::recipe_input(
                "Блины",
                vec![breakfast.to_owned()],
                vec![(ids[0].to_owned(), 2), (ids[1].to_owned(), 50)],
            ),
        )
        .await?;

    let recipe = query.find(&id, None).await?.unwrap();
    assert_eq!(recipe.name, "Блины");
    assert_eq!(recipe.author.id, john);
    assert_eq!(recipe.tags.len(), 1);
    assert_eq!(recipe.tags[0].slug, "breakfast");
    assert_eq!(
        recipe
            .ingredients
            .iter()
            .map(|i| (i.name.as_str(), i.measurement_unit.as_str(), i.amount))
            .collect::<Vec<_>>(),
        vec![("Мука", "кг", 2), ("Сахар", "г", 50)]
    );
    assert!(!recipe.is_favorited);
    assert!(!recipe.is_in_shopping_cart);

    Ok(())
}

#[tokio::test]
async fn test_create_rejects_invalid_input() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = foodgram_recipe::Command::new(state.clone());
    let john = helpers::create_user(&state, "john").await?;
    let tag = helpers::create_tag(&cmd, "lunch").await?;
    let ids = helpers::create_ingredients(&state, &[("Соль", "г")]).await?;

    let resp = cmd
        .create(
            &john,
            helpers::recipe_input(
                "Суп",
                vec![tag.to_owned()],
                vec![(ids[0].to_owned(), 1), (ids[0].to_owned(), 2)],
            ),
        )
        .await;
    assert_eq!(
        resp.unwrap_err().to_string(),
        "Ингредиенты не должны повторяться"
    );

    let resp = cmd
        .create(
            &john,
            helpers::recipe_input(
                "Суп",
                vec![tag.to_owned(), tag.to_owned()],
                vec![(ids[0].to_owned(), 1)],
            ),
        )
        .await;
    assert_eq!(resp.unwrap_err().to_string(), "Теги не должны повторяться");

    let resp = cmd
        .create(
            &john,
            helpers::recipe_input("Суп", vec![tag.to_owned()], vec![(ids[0].to_owned(), 0)]),
        )
        .await;
    assert!(matches!(resp, Err(foodgram_shared::Error::Validate(_))));

    let resp = cmd
        .create(&john, helpers::recipe_input("Суп", vec![tag.to_owned()], vec![]))
        .await;
    assert!(matches!(resp, Err(foodgram_shared::Error::Validate(_))));

    let resp = cmd
        .create(
            &john,
            helpers::recipe_input("Суп", vec![tag.to_owned()], vec![("missing".to_owned(), 1)]),
        )
        .await;
    assert_eq!(
        resp.unwrap_err().to_string(),
        "Указан несуществующий ингредиент"
    );

    Ok(())
}
