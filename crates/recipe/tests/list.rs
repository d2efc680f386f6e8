use foodgram_recipe::RecipeFilter;
use temp_dir::TempDir;

mod helpers;

fn names(recipes: &[foodgram_recipe::RecipeView]) -> Vec<&str> {
    let mut names = recipes.iter().map(|r| r.name.as_str()).collect::<Vec<_>>();
    names.sort();
    names
}

#[tokio::test]
async fn test_filter() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let cmd = foodgram_recipe::Command::new(state.clone());
    let query = foodgram_recipe::Query(state.clone());
    let john = helpers::create_user(&state, "john").await?;
    let jane = helpers::create_user(&state, "jane").await?;
    let breakfast = helpers::create_tag(&cmd, "breakfast").await?;
    let dinner = helpers::create_tag(&cmd, "dinner").await?;
    let ids = helpers::create_ingredients(&state, &[("Яйцо", "шт")]).await?;

    let omelette = cmd
        .create(
            &john,
            helpers::recipe_input("Омлет", vec![breakfast.to_owned()], vec![(ids[0].to_owned(), 3)]),
        )
        .await?;
    cmd.create(
        &jane,
        helpers::recipe_input("Яичница", vec![breakfast.to_owned(), dinner.to_owned()], vec![(ids[0].to_owned(), 2)]),
    )
    .await?;
    cmd.create(
        &jane,
        helpers::recipe_input("Салат", vec![dinner.to_owned()], vec![(ids[0].to_owned(), 1)]),
    )
    .await?;

    let all = query.filter(RecipeFilter::default(), None).await?;
    assert_eq!(names(&all), vec!["Омлет", "Салат", "Яичница"]);

    let by_tag = query
        .filter(
            RecipeFilter {
                tags: vec!["breakfast".to_owned()],
                ..Default::default()
            },
            None,
        )
        .await?;
    assert_eq!(names(&by_tag), vec!["Омлет", "Яичница"]);

    let by_tags = query
        .filter(
            RecipeFilter {
                tags: vec!["breakfast".to_owned(), "dinner".to_owned()],
                ..Default::default()
            },
            None,
        )
        .await?;
    assert_eq!(names(&by_tags), vec!["Омлет", "Салат", "Яичница"]);

    let by_author = query
        .filter(
            RecipeFilter {
                author: Some(jane.to_owned()),
                ..Default::default()
            },
            None,
        )
        .await?;
    assert_eq!(names(&by_author), vec!["Салат", "Яичница"]);

    cmd.favorite.add(&omelette, &jane).await?;

    let favorited = RecipeFilter {
        is_favorited: true,
        ..Default::default()
    };
    let favorites = query.filter(favorited.clone(), Some(jane.as_str())).await?;
    assert_eq!(names(&favorites), vec!["Омлет"]);
    assert!(favorites[0].is_favorited);

    let anonymous = query.filter(favorited, None).await?;
    assert_eq!(anonymous.len(), 3);

    Ok(())
}
